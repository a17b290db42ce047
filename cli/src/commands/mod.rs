pub mod check;
pub mod completion;
pub mod database;
pub mod headers;
pub mod show;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use settings::{Environment, Settings, load_env_file, load_settings, merge_environments};

use crate::ux_error;

#[derive(Parser)]
#[command(
    name = "onlinexam",
    author,
    version,
    about = "Online examination service - settings inspection",
    long_about = "Resolves the service settings from the environment exactly as the web \
                  process would.\n\nDEBUG=True selects the development profile; anything else \
                  is production.\nSECRET_KEY is always required."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print the resolved settings with secrets masked")]
    Show(show::ShowArgs),

    #[command(about = "Resolve and validate settings, failing on any problem")]
    Check(check::CheckArgs),

    #[command(about = "Show the selected database backend and connection target")]
    Database(database::DatabaseArgs),

    #[command(about = "Show the security headers and static cache policy")]
    Headers(headers::HeadersArgs),

    #[command(about = "Generate shell completions")]
    Completion(completion::CompletionArgs),
}

/// Where settings are read from. Shared by every command that resolves them.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Settings file (TOML, YAML or JSON) layered beneath the process environment
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Project root used for the database file and static/media directories
    #[arg(long, value_name = "DIR", env = "ONLINEXAM_BASE_DIR")]
    pub base_dir: Option<PathBuf>,
}

impl SourceArgs {
    pub fn base_dir(&self) -> Result<PathBuf> {
        match &self.base_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    pub fn environment(&self) -> Result<Environment> {
        let mut layers = Vec::with_capacity(2);

        if let Some(path) = &self.env_file {
            let file = load_env_file(path)
                .map_err(|e| ux_error::settings_file_error(&path.display().to_string(), &e))?;
            layers.push(("file", file));
        }
        layers.push(("env", Environment::from_process()));

        Ok(merge_environments(&layers))
    }

    pub fn load(&self) -> Result<Settings> {
        let env = self.environment()?;
        let base_dir = self.base_dir()?;
        let settings =
            load_settings(&env, &base_dir).map_err(|e| ux_error::settings_error(&e))?;
        Ok(settings)
    }
}

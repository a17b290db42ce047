//! Show command - print the resolved settings with secrets masked

use anyhow::Result;
use clap::{Args, ValueEnum};
use settings::{DatabaseConfig, Settings};

use super::SourceArgs;
use crate::output;

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = ShowFormat::Text)]
    pub format: ShowFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    Text,
    Json,
    Yaml,
    Toml,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let settings = args.source.load()?.redacted();

    match args.format {
        ShowFormat::Text => print_summary(&settings),
        ShowFormat::Json => println!("{}", serde_json::to_string_pretty(&settings)?),
        ShowFormat::Yaml => print!("{}", serde_yaml::to_string(&settings)?),
        ShowFormat::Toml => print!("{}", toml::to_string_pretty(&settings)?),
    }

    Ok(())
}

fn print_summary(settings: &Settings) {
    let profile = if settings.debug { "development" } else { "production" };

    output::header("Online Examination Settings");
    output::field("profile", profile);
    output::field("base dir", &settings.base_dir.display().to_string());
    output::field("secret key", &settings.secret_key);
    output::field("allowed hosts", &settings.allowed_hosts.join(", "));
    output::field("trusted origins", &settings.csrf_trusted_origins.join(", "));
    println!();

    output::subheader("Database");
    output::field("engine", settings.database.engine());
    match &settings.database {
        DatabaseConfig::Sqlite { path } => output::field("path", &path.display().to_string()),
        DatabaseConfig::Postgres(pg) => {
            let missing = pg.missing_credentials();
            if missing.is_empty() {
                output::field("host", pg.host.as_deref().unwrap_or_default());
                output::field("port", &pg.port);
            } else {
                output::warn(&format!("missing credentials: {}", missing.join(", ")));
            }
        }
    }
    println!();

    output::subheader("Static and media");
    output::field("static url", &settings.static_files.url);
    output::field("static root", &settings.static_files.root.display().to_string());
    output::field("storage", settings.static_files.storage.backend_path());
    output::field("media url", &settings.media.url);
    output::field("media root", &settings.media.root.display().to_string());
    println!();

    output::subheader("Application");
    output::field("installed apps", &settings.installed_apps.len().to_string());
    let chain: Vec<String> = settings
        .middleware
        .iter()
        .map(ToString::to_string)
        .collect();
    output::field("middleware", &chain.join(" -> "));

    if settings.security.is_none() {
        println!();
        output::hint("security headers are disabled in the development profile");
    }
}

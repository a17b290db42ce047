use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod output;
pub mod ux_error;

use commands::{Cli, Commands};
use ux_error::UxError;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show(args) => commands::show::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Database(args) => commands::database::run(args),
        Commands::Headers(args) => commands::headers::run(args),
        Commands::Completion(args) => commands::completion::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<UxError>() {
                Some(ux) => ux.display(),
                None => output::error(&format!("{err:#}")),
            }
            ExitCode::FAILURE
        }
    }
}

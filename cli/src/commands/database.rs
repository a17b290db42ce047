//! Database command - show the selected backend and connection target
//!
//! Builds the connection URL, which is where missing production credentials
//! surface as an error.

use anyhow::Result;
use clap::Args;

use super::SourceArgs;
use crate::{output, ux_error};

#[derive(Args)]
pub struct DatabaseArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: DatabaseArgs) -> Result<()> {
    let settings = args.source.load()?;

    let url = settings
        .database
        .redacted_url()
        .map_err(|e| ux_error::database_error(&e))?;

    output::header("Database");
    output::field("engine", settings.database.engine());
    output::field("url", &url);
    if let Some(pg) = settings.database.as_postgres() {
        output::field("sslmode", &pg.ssl_mode.to_string());
    }

    Ok(())
}

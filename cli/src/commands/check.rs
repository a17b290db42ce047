//! Check command - resolve and validate settings
//!
//! Fails when the secret key is missing or the resolved settings break an
//! invariant. Missing production database credentials are reported as a
//! warning here; `onlinexam database` turns them into an error.

use anyhow::Result;
use clap::Args;
use settings::validate;

use super::SourceArgs;
use crate::{output, ux_error};

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let settings = match args.source.load() {
        Ok(settings) => settings,
        Err(err) => return report_failure(err, args.json),
    };

    if let Err(errors) = validate(&settings) {
        return report_failure(ux_error::validation_failed(&errors).into(), args.json);
    }

    let missing = settings
        .database
        .as_postgres()
        .map(|pg| pg.missing_credentials())
        .unwrap_or_default();

    if args.json {
        let report = serde_json::json!({
            "valid": true,
            "debug": settings.debug,
            "engine": settings.database.engine(),
            "missing_database_credentials": missing
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !missing.is_empty() {
        output::warn(&format!(
            "database credentials not set: {} (connecting will fail)",
            missing.join(", "),
        ));
    }
    output::success("settings are valid");
    Ok(())
}

fn report_failure(err: anyhow::Error, json: bool) -> Result<()> {
    if json && let Some(ux) = err.downcast_ref::<ux_error::UxError>() {
        let mut report = ux.to_json();
        report["valid"] = serde_json::Value::Bool(false);
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Err(err)
}

use colored::Colorize;
use errors::{DatabaseError, SettingsError};
use settings::ConfigFileError;

#[derive(Debug)]
pub struct UxError {
    pub what: String,
    pub why: Option<String>,
    pub how_to_fix: Vec<String>,
    pub suggested_command: Option<String>,
}

impl UxError {
    pub fn new(what: impl Into<String>) -> Self {
        Self {
            what: what.into(),
            why: None,
            how_to_fix: Vec::new(),
            suggested_command: None,
        }
    }

    pub fn why(mut self, reason: impl Into<String>) -> Self {
        self.why = Some(reason.into());
        self
    }

    pub fn fix(mut self, suggestion: impl Into<String>) -> Self {
        self.how_to_fix.push(suggestion.into());
        self
    }

    pub fn suggest(mut self, cmd: impl Into<String>) -> Self {
        self.suggested_command = Some(cmd.into());
        self
    }

    pub fn display(&self) {
        eprintln!();
        eprintln!("{} {}", "error:".red().bold(), self.what.white().bold());

        if let Some(why) = &self.why {
            eprintln!("       {}", why.dimmed());
        }

        if !self.how_to_fix.is_empty() {
            eprintln!();
            eprintln!("{}", "How to fix:".yellow().bold());
            for (i, fix) in self.how_to_fix.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, fix);
            }
        }

        if let Some(cmd) = &self.suggested_command {
            eprintln!();
            eprintln!("{}", "Try this:".green().bold());
            eprintln!("  $ {}", cmd.cyan());
        }
        eprintln!();
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.what,
            "why": self.why,
            "how_to_fix": self.how_to_fix,
            "suggested_command": self.suggested_command
        })
    }
}

impl std::fmt::Display for UxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.what)
    }
}

impl std::error::Error for UxError {}

pub fn settings_error(err: &SettingsError) -> UxError {
    let key = err.key();
    UxError::new(err.to_string())
        .why(format!(
            "{key} has no default; the service refuses to start without it",
        ))
        .fix(format!("Export {key} in the environment or the app settings"))
        .fix("Or pass a settings file that defines it with --env-file")
        .suggest(format!("{key}=... onlinexam check"))
}

pub fn database_error(err: &DatabaseError) -> UxError {
    match err {
        DatabaseError::MissingCredential { field } => UxError::new(err.to_string())
            .why("Production database credentials are only checked when connecting")
            .fix(format!("Set {field} in the environment"))
            .fix("Or set DEBUG=True to use the embedded development database")
            .suggest("onlinexam show"),
        DatabaseError::InvalidPort { .. } => UxError::new(err.to_string())
            .why("DB_PORT must be a TCP port number between 1 and 65535")
            .fix("Unset DB_PORT to use the default 5432"),
        DatabaseError::InvalidUrl { .. } => UxError::new(err.to_string())
            .fix("Check DB_HOST and DB_USER for characters a URL cannot carry"),
    }
}

pub fn settings_file_error(path: &str, err: &ConfigFileError) -> UxError {
    UxError::new(format!("Cannot read settings file '{}': {}", path, err))
        .why("Settings files hold a flat table of NAME = value pairs")
        .fix("Use a .toml, .yaml, .yml or .json file")
        .fix("Keep every value a string, number or boolean")
}

pub fn validation_failed(errors: &validator::ValidationErrors) -> UxError {
    let mut ux = UxError::new("Settings failed validation")
        .why("The resolved settings break an invariant the service relies on");

    for (field, field_errors) in errors.field_errors() {
        for e in field_errors {
            let detail = e
                .message
                .as_ref()
                .map_or_else(|| e.code.to_string(), |m| m.to_string());
            ux = if field == "__all__" {
                ux.fix(detail)
            } else {
                ux.fix(format!("{field}: {detail}"))
            };
        }
    }

    ux
}

//! # Settings Structure
//!
//! The immutable settings record built once at process start.
//!
//! [`Settings`] is the dependency-injection root of the service: it is
//! constructed explicitly by [`load_settings`](crate::load_settings) and
//! handed by reference to each subsystem as that subsystem initializes.
//! There is no global instance and no reload path.

use crate::application::Middleware;
use crate::database::DatabaseConfig;
use crate::security::SecurityHeaders;
use crate::static_files::{MediaConfig, PlatformStaticTuning, StaticFilesConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::{Validate, ValidationError};

const REDACTED: &str = "***";

/// Fully-resolved service settings.
///
/// # M-CANONICAL-DOCS
///
/// ## Purpose
/// Carries everything the web framework reads at boot: signing secret,
/// host allow-list, CSRF trusted origins, applications, middleware chain,
/// database backend, static/media layout and the production security bundle.
///
/// ## Usage
/// ```rust,no_run
/// use settings::{Environment, load_settings};
/// use std::path::Path;
///
/// let env = Environment::from_pairs([("SECRET_KEY", "k")]);
/// let settings = load_settings(&env, Path::new(".")).unwrap();
/// assert!(settings.is_production());
/// assert!(settings.security.is_some());
/// ```
///
/// ## Fields
/// - `security`: `None` in debug mode, the full production bundle otherwise
/// - `platform`: `Some` only when running on the hosting platform
///
/// ## Validation
/// See [`crate::validation::validate`]. Database credentials are never
/// validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_trusted_origins"))]
pub struct Settings {
    /// Project root that file paths are resolved against
    pub base_dir: PathBuf,

    /// Cryptographic signing key
    #[validate(length(min = 1, message = "secret key must not be empty"))]
    pub secret_key: String,

    pub debug: bool,

    /// Host names the service answers for
    #[validate(length(min = 1), custom(function = "validate_hosts"))]
    pub allowed_hosts: Vec<String>,

    /// Origins accepted for CSRF-protected submissions
    pub csrf_trusted_origins: Vec<String>,

    pub installed_apps: Vec<String>,

    /// Middleware chain, outermost first
    pub middleware: Vec<Middleware>,

    pub database: DatabaseConfig,

    #[validate(nested)]
    pub static_files: StaticFilesConfig,

    #[validate(nested)]
    pub media: MediaConfig,

    /// Production security bundle (absent in debug mode)
    #[serde(default)]
    #[validate(nested)]
    pub security: Option<SecurityHeaders>,

    /// Hosting-platform static tuning
    #[serde(default)]
    pub platform: Option<PlatformStaticTuning>,
}

impl Settings {
    pub fn is_production(&self) -> bool {
        !self.debug
    }

    /// Whether a request `Host` value matches the allow-list.
    ///
    /// Comparison is case-insensitive and ignores a port suffix. An entry
    /// starting with `.` matches the domain and all its subdomains; `*`
    /// matches anything.
    pub fn is_allowed_host(&self, host: &str) -> bool {
        let host = strip_port(host).trim_end_matches('.').to_ascii_lowercase();
        if host.is_empty() {
            return false;
        }

        self.allowed_hosts.iter().any(|pattern| {
            let pattern = pattern.to_ascii_lowercase();
            if pattern == "*" {
                return true;
            }
            match pattern.strip_prefix('.') {
                Some(domain) => host == domain || host.ends_with(&pattern),
                None => host == pattern,
            }
        })
    }

    /// Whether an `Origin` header value is a trusted CSRF origin.
    pub fn is_trusted_origin(&self, origin: &str) -> bool {
        self.csrf_trusted_origins.iter().any(|o| o == origin)
    }

    /// Copy with the secret key and database password masked, safe to print.
    pub fn redacted(&self) -> Self {
        let database = match &self.database {
            DatabaseConfig::Postgres(pg) => DatabaseConfig::Postgres(pg.redacted()),
            other => other.clone(),
        };

        Self {
            secret_key: REDACTED.to_string(),
            database,
            ..self.clone()
        }
    }
}

fn strip_port(host: &str) -> &str {
    if let Some(rest) = host.strip_prefix('[') {
        return rest.split_once(']').map_or(host, |(addr, _)| addr);
    }
    match host.rsplit_once(':') {
        Some((name, port)) if !name.contains(':') && port.bytes().all(|b| b.is_ascii_digit()) => {
            name
        }
        _ => host,
    }
}

fn validate_hosts(hosts: &[String]) -> Result<(), ValidationError> {
    if hosts.iter().any(|h| h.trim().is_empty()) {
        return Err(ValidationError::new("empty_host")
            .with_message("allowed hosts must not contain empty entries".into()));
    }
    Ok(())
}

fn validate_trusted_origins(settings: &Settings) -> Result<(), ValidationError> {
    let expected = settings
        .allowed_hosts
        .iter()
        .map(|host| format!("https://{host}"));

    if settings.csrf_trusted_origins.len() != settings.allowed_hosts.len()
        || !settings.csrf_trusted_origins.iter().cloned().eq(expected)
    {
        return Err(ValidationError::new("trusted_origins_mismatch").with_message(
            "trusted origins must be https:// followed by each allowed host, in order".into(),
        ));
    }
    Ok(())
}

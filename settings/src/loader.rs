//! # Settings Loader
//!
//! Resolves [`Settings`] from an explicit [`Environment`] in one linear pass.
//!
//! # Environment Variables
//!
//! | Variable | Effect | Default |
//! |----------|--------|---------|
//! | `SECRET_KEY` | Signing key | none, required |
//! | `DEBUG` | Exactly `True` enables debug mode | off |
//! | `WEBSITE_HOSTNAME` | Production host name | `onlinexaminatoin.azurewebsites.net` |
//! | `DB_NAME`, `DB_USER`, `DB_PASSWORD`, `DB_HOST` | Production database credentials | unset, checked at connect |
//! | `DB_PORT` | Production database port | `5432` |
//! | `WEBSITE_SITE_NAME` | Presence enables platform static tuning | absent |

use crate::application::{Middleware, installed_apps};
use crate::database::{DatabaseConfig, PostgresConfig, SQLITE_FILE_NAME, SslMode};
use crate::environment::Environment;
use crate::security::SecurityHeaders;
use crate::settings::Settings;
use crate::static_files::{MediaConfig, PlatformStaticTuning, StaticFilesConfig};
use errors::SettingsError;
use std::path::Path;
use tracing::{debug, info, warn};

pub const SECRET_KEY_ENV: &str = "SECRET_KEY";
pub const DEBUG_ENV: &str = "DEBUG";
pub const WEBSITE_HOSTNAME_ENV: &str = "WEBSITE_HOSTNAME";
pub const WEBSITE_SITE_NAME_ENV: &str = "WEBSITE_SITE_NAME";
pub const DB_NAME_ENV: &str = "DB_NAME";
pub const DB_USER_ENV: &str = "DB_USER";
pub const DB_PASSWORD_ENV: &str = "DB_PASSWORD";
pub const DB_HOST_ENV: &str = "DB_HOST";
pub const DB_PORT_ENV: &str = "DB_PORT";

/// The only `DEBUG` value that enables debug mode.
pub const DEBUG_ENABLED_VALUE: &str = "True";

pub const DEFAULT_PRODUCTION_HOST: &str = "onlinexaminatoin.azurewebsites.net";
pub const DEFAULT_DB_PORT: &str = "5432";

/// Hosts accepted in debug mode.
pub const DEVELOPMENT_HOSTS: [&str; 3] = [DEFAULT_PRODUCTION_HOST, "localhost", "127.0.0.1"];

/// Load settings from an environment mapping.
///
/// # M-CANONICAL-DOCS
///
/// ## Purpose
/// Runs the whole startup resolution: secret key, debug flag, allowed hosts,
/// trusted origins, database backend, static/media layout, security headers
/// and platform tuning. `base_dir` is the project root every file path is
/// resolved against.
///
/// ## Usage
/// ```rust,no_run
/// use settings::{Environment, load_settings};
/// use std::path::Path;
///
/// let env = Environment::from_pairs([("SECRET_KEY", "k"), ("DB_HOST", "db")]);
/// let settings = load_settings(&env, Path::new("/srv/onlinexam")).unwrap();
/// assert_eq!(settings.allowed_hosts, vec!["onlinexaminatoin.azurewebsites.net"]);
/// ```
///
/// ## Error Handling
/// Returns `SettingsError::MissingConfiguration` when `SECRET_KEY` is unset.
/// Missing production database credentials do not fail here; see
/// [`PostgresConfig::connect_options`].
pub fn load_settings(env: &Environment, base_dir: &Path) -> Result<Settings, SettingsError> {
    let secret_key = resolve_secret_key(env)?;
    let debug_mode = resolve_debug(env);
    debug!(debug_mode, "Resolved debug flag");

    let allowed_hosts = resolve_allowed_hosts(env, debug_mode);
    let csrf_trusted_origins = derive_trusted_origins(&allowed_hosts);
    let database = resolve_database(env, debug_mode, base_dir);

    let settings = Settings {
        base_dir: base_dir.to_path_buf(),
        secret_key,
        debug: debug_mode,
        allowed_hosts,
        csrf_trusted_origins,
        installed_apps: installed_apps(),
        middleware: Middleware::chain(),
        database,
        static_files: StaticFilesConfig::for_project(base_dir),
        media: MediaConfig::for_project(base_dir),
        security: resolve_security_headers(debug_mode),
        platform: resolve_platform_tuning(env),
    };

    info!(
        mode = if settings.debug { "debug" } else { "production" },
        hosts = settings.allowed_hosts.len(),
        database = settings.database.engine(),
        platform_tuning = settings.platform.is_some(),
        "Settings loaded",
    );

    Ok(settings)
}

/// Load settings from a snapshot of the process environment.
pub fn load_from_process(base_dir: &Path) -> Result<Settings, SettingsError> {
    load_settings(&Environment::from_process(), base_dir)
}

/// `SECRET_KEY` is required and has no fallback.
pub fn resolve_secret_key(env: &Environment) -> Result<String, SettingsError> {
    env.get(SECRET_KEY_ENV)
        .map(str::to_string)
        .ok_or_else(|| SettingsError::missing(SECRET_KEY_ENV))
}

/// Debug mode is on only when `DEBUG` is exactly `True`.
///
/// This is a literal comparison, not a boolean parse: `true`, `1` and `yes`
/// all leave debug mode off.
pub fn resolve_debug(env: &Environment) -> bool {
    env.get(DEBUG_ENV) == Some(DEBUG_ENABLED_VALUE)
}

pub fn resolve_allowed_hosts(env: &Environment, debug: bool) -> Vec<String> {
    if debug {
        return DEVELOPMENT_HOSTS.iter().map(|h| (*h).to_string()).collect();
    }

    let host = env
        .get(WEBSITE_HOSTNAME_ENV)
        .unwrap_or(DEFAULT_PRODUCTION_HOST)
        .to_string();
    vec![host]
}

/// `https://` + each host, order preserved.
pub fn derive_trusted_origins(hosts: &[String]) -> Vec<String> {
    hosts.iter().map(|host| format!("https://{host}")).collect()
}

pub fn resolve_database(env: &Environment, debug: bool, base_dir: &Path) -> DatabaseConfig {
    if debug {
        return DatabaseConfig::Sqlite {
            path: base_dir.join(SQLITE_FILE_NAME),
        };
    }

    let owned = |key: &str| env.get(key).map(str::to_string);
    let config = PostgresConfig {
        name: owned(DB_NAME_ENV),
        user: owned(DB_USER_ENV),
        password: owned(DB_PASSWORD_ENV),
        host: owned(DB_HOST_ENV),
        port: env.get(DB_PORT_ENV).unwrap_or(DEFAULT_DB_PORT).to_string(),
        ssl_mode: SslMode::Require,
    };

    let missing = config.missing_credentials();
    if !missing.is_empty() {
        warn!(
            missing = ?missing,
            "Production database credentials are incomplete; connecting will fail",
        );
    }

    DatabaseConfig::Postgres(config)
}

pub fn resolve_security_headers(debug: bool) -> Option<SecurityHeaders> {
    (!debug).then(SecurityHeaders::production)
}

/// Platform tuning follows the presence of `WEBSITE_SITE_NAME`, whatever
/// its value and whatever the debug flag.
pub fn resolve_platform_tuning(env: &Environment) -> Option<PlatformStaticTuning> {
    env.contains(WEBSITE_SITE_NAME_ENV)
        .then(PlatformStaticTuning::default)
}

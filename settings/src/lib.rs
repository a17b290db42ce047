//! # Settings
//!
//! Environment-driven settings for the online examination service.
//!
//! This crate provides:
//! - An explicit environment mapping, so loading never depends on ambient
//!   process state
//! - A single linear resolution pass producing an immutable [`Settings`]
//! - Database backend selection with deferred credential checks
//! - Static/media file layout and production security headers
//! - Settings file loading (TOML/YAML/JSON) and layered precedence
//! - Validation through the `validator` crate (see [`validation`])
//!
//! # Usage
//! ```rust,no_run
//! use settings::{Environment, load_settings};
//! use std::path::Path;
//!
//! let env = Environment::from_pairs([("SECRET_KEY", "s3cr3t"), ("DEBUG", "True")]);
//! let settings = load_settings(&env, Path::new("/srv/onlinexam")).unwrap();
//! assert!(settings.debug);
//! ```

pub mod application;
pub mod database;
pub mod environment;
pub mod file_loader;
pub mod loader;
pub mod precedence;
pub mod security;
pub mod settings;
pub mod static_files;
pub mod validation;

pub use application::{INSTALLED_APPS, Middleware};
pub use database::{DatabaseConfig, PostgresConfig, PostgresConnectOptions, SslMode};
pub use environment::Environment;
pub use errors::{DatabaseError, SettingsError};
pub use file_loader::{ConfigFileError, load_env_file};
pub use loader::{load_from_process, load_settings};
pub use precedence::merge_environments;
pub use security::{ProxySslHeader, SecurityHeaders};
pub use settings::Settings;
pub use static_files::{MediaConfig, PlatformStaticTuning, StaticFilesConfig, StaticStorage};
pub use validation::validate;

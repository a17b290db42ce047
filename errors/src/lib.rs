//! # Settings Errors
//!
//! Error handling for the online examination settings loader.
//!
//! - Uses `thiserror` for structured error definitions
//! - Errors carry the environment variable they concern, never its value

use serde::Serialize;
use thiserror::Error;

/// Errors raised while resolving settings at process start.
///
/// Any of these aborts startup: there is no partially-populated settings
/// object to fall back on.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SettingsError {
    #[error("Missing required configuration: {key} is not set")]
    MissingConfiguration { key: String },
}

impl SettingsError {
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingConfiguration { key: key.into() }
    }

    /// Environment variable the error concerns.
    pub fn key(&self) -> &str {
        match self {
            Self::MissingConfiguration { key } => key,
        }
    }
}

/// Errors raised when database settings are turned into a connection.
///
/// Production credentials are not checked while settings load; these surface
/// at the first attempt to connect.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DatabaseError {
    #[error("Database credential {field} is not set")]
    MissingCredential { field: String },

    #[error("Invalid database port: {value}")]
    InvalidPort { value: String },

    #[error("Cannot build connection URL for {engine}: {reason}")]
    InvalidUrl { engine: String, reason: String },
}

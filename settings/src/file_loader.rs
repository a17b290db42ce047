//! # Settings File Loading
//!
//! Loads environment values from an exported app-settings file.
//!
//! The file is a flat table of `NAME = value` pairs in TOML, YAML or JSON,
//! detected from the extension. Values become environment strings, so a file
//! can stand in for variables a hosting platform would otherwise inject.

use crate::environment::Environment;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Settings file loading error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(String),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(String),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(String),

    #[error("Value for {0} must be a string, number or boolean")]
    NestedValue(String),

    #[error("Value for {0} is too large to represent exactly; quote it as a string")]
    ImpreciseNumber(String),

    #[error("Settings file has no extension")]
    NoExtension,

    #[error("Unsupported settings file format: {0}")]
    UnsupportedFormat(String),
}

/// Load environment values from a file, detecting the format from its
/// extension.
///
/// # M-CANONICAL-DOCS
///
/// ## Supported Formats
/// - `.toml`
/// - `.yaml` / `.yml`
/// - `.json`
///
/// ## Conversion
/// - strings are taken verbatim
/// - numbers and booleans use their literal form (`5432`, `true`)
/// - `null` leaves the variable unset
/// - arrays and tables are rejected
///
/// Booleans are not translated: `DEBUG = true` yields the string `true`,
/// which does not enable debug mode. Write `DEBUG = "True"`.
///
/// ## Usage
/// ```rust,no_run
/// use settings::load_env_file;
/// use std::path::Path;
///
/// let env = load_env_file(Path::new("appsettings.toml")).unwrap();
/// println!("{} variables", env.len());
/// ```
pub fn load_env_file(path: &Path) -> Result<Environment, ConfigFileError> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or(ConfigFileError::NoExtension)?;

    let contents = match extension.to_lowercase().as_str() {
        "toml" | "yaml" | "yml" | "json" => std::fs::read_to_string(path)
            .map_err(|_e| ConfigFileError::FileNotFound(path.display().to_string()))?,
        other => return Err(ConfigFileError::UnsupportedFormat(other.to_string())),
    };

    let env = match extension.to_lowercase().as_str() {
        "toml" => {
            let table: toml::Table = toml::from_str(&contents)
                .map_err(|e| ConfigFileError::TomlParse(e.to_string()))?;
            flatten_toml(table)?
        }
        "json" => {
            let table: BTreeMap<String, Value> = serde_json::from_str(&contents)
                .map_err(|e| ConfigFileError::JsonParse(e.to_string()))?;
            flatten(table)?
        }
        _ => {
            if contents.trim().is_empty() {
                Environment::new()
            } else {
                let table: BTreeMap<String, Value> = serde_yaml::from_str(&contents)
                    .map_err(|e| ConfigFileError::YamlParse(e.to_string()))?;
                flatten(table)?
            }
        }
    };

    tracing::debug!(path = %path.display(), variables = env.len(), "Loaded settings file");
    Ok(env)
}

fn flatten(table: BTreeMap<String, Value>) -> Result<Environment, ConfigFileError> {
    let mut env = Environment::new();
    for (key, value) in table {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) if is_imprecise(&n) => {
                return Err(ConfigFileError::ImpreciseNumber(key));
            }
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => return Err(ConfigFileError::NestedValue(key)),
        };
        env.set(key, value);
    }
    Ok(env)
}

/// TOML integers are exact by construction; datetimes keep their RFC 3339
/// text.
fn flatten_toml(table: toml::Table) -> Result<Environment, ConfigFileError> {
    let mut env = Environment::new();
    for (key, value) in table {
        let value = match value {
            toml::Value::String(s) => s,
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            toml::Value::Boolean(b) => b.to_string(),
            toml::Value::Datetime(dt) => dt.to_string(),
            toml::Value::Array(_) | toml::Value::Table(_) => {
                return Err(ConfigFileError::NestedValue(key));
            }
        };
        env.set(key, value);
    }
    Ok(env)
}

/// A float at or beyond 2^53, typically an integer literal too wide for
/// `u64` that the parser could only keep approximately.
fn is_imprecise(n: &serde_json::Number) -> bool {
    const EXACT_FLOAT_LIMIT: f64 = 9_007_199_254_740_992.0;
    n.is_f64() && n.as_f64().is_some_and(|f| f.abs() >= EXACT_FLOAT_LIMIT)
}

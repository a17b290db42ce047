//! # Environment Precedence
//!
//! Merges environment layers with precedence rules.
//!
//! # Precedence Order
//! Layers are given lowest priority first. The CLI uses:
//! 1. Settings file (`--env-file`)
//! 2. Process environment (highest priority)

use crate::environment::Environment;
use crate::loader::{DB_PASSWORD_ENV, SECRET_KEY_ENV};

/// Keys whose values are never written to logs.
pub const SECRET_KEYS: [&str; 2] = [SECRET_KEY_ENV, DB_PASSWORD_ENV];

/// Merge environment layers, later layers overriding earlier ones.
///
/// # M-CANONICAL-DOCS
///
/// ## Purpose
/// Combines several sources of environment values into the single mapping the
/// loader consumes. Each value a layer contributes or changes is logged at
/// `info` with the layer's name; secret values are masked.
///
/// ## Usage
/// ```rust,no_run
/// use settings::{Environment, merge_environments};
///
/// let file = Environment::from_pairs([("DB_PORT", "6432")]);
/// let process = Environment::from_process();
/// let env = merge_environments(&[("file", file), ("env", process)]);
/// ```
pub fn merge_environments(layers: &[(&str, Environment)]) -> Environment {
    let mut merged = Environment::new();

    for (source_name, layer) in layers {
        let changes = merge_with_logging(&mut merged, layer);
        if !changes.is_empty() {
            tracing::info!("Configuration from {}: {:?}", source_name, changes);
        }
    }

    merged
}

fn merge_with_logging(base: &mut Environment, layer: &Environment) -> Vec<String> {
    let mut changes = Vec::new();

    for (key, value) in layer.iter() {
        if base.get(key) == Some(value) {
            continue;
        }
        changes.push(format!("{} = {}", key, display_value(key, value)));
        base.set(key, value);
    }

    changes
}

fn display_value<'a>(key: &str, value: &'a str) -> &'a str {
    if SECRET_KEYS.contains(&key) {
        "***"
    } else {
        value
    }
}

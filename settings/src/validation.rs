//! # Settings Validation
//!
//! Provides validation for [`Settings`] using the `validator` crate.
//!
//! Validation is a separate step from loading. The loader only refuses to
//! start without a secret key; everything here is an extra check callers
//! opt into (the CLI `check` command, a startup health check).

use crate::settings::Settings;
use validator::Validate;

/// Validate a settings record.
///
/// # M-CANONICAL-DOCS
///
/// ## Purpose
/// Checks invariants the loader guarantees by construction, so that settings
/// deserialized from elsewhere or edited by hand are held to the same rules.
///
/// ## Validation Rules
/// - `secret_key`: at least 1 character
/// - `allowed_hosts`: at least one entry, no empty entries
/// - `csrf_trusted_origins`: exactly `https://` + each allowed host, same order
/// - `static_files.url`, `media.url`: start and end with `/`
/// - `security.hsts_seconds`: at least 1 when the bundle is present
///
/// Database credentials are deliberately out of scope: they are checked when
/// a connection is opened.
pub fn validate(settings: &Settings) -> Result<(), validator::ValidationErrors> {
    settings.validate()
}

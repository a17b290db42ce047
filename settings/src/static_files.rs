//! # Static and Media Files
//!
//! URL prefixes and filesystem roots for collected static assets and user
//! uploads, plus the hosting-platform cache tuning.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::{Validate, ValidationError};

pub const STATIC_URL: &str = "/static/";
pub const MEDIA_URL: &str = "/media/";

/// Directory static assets are collected into, relative to the project root.
pub const STATIC_ROOT_DIR: &str = "staticfiles";
/// Source directory scanned for static assets, relative to the project root.
pub const STATIC_SOURCE_DIR: &str = "static";
pub const MEDIA_ROOT_DIR: &str = "media";

/// Cache lifetime applied on the hosting platform, in seconds.
pub const PLATFORM_MAX_AGE_SECONDS: u64 = 3600;

/// How collected static assets are stored and served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StaticStorage {
    /// Content-hashed file names listed in a manifest, with pre-compressed
    /// variants served alongside the originals.
    #[default]
    CompressedManifest,
}

impl StaticStorage {
    pub fn backend_path(self) -> &'static str {
        match self {
            Self::CompressedManifest => "whitenoise.storage.CompressedManifestStaticFilesStorage",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct StaticFilesConfig {
    /// URL prefix static assets are served under
    #[validate(custom(function = "validate_url_prefix"))]
    pub url: String,

    /// Directory assets are collected into for serving
    pub root: PathBuf,

    /// Source directories scanned during collection
    pub dirs: Vec<PathBuf>,

    #[serde(default)]
    pub storage: StaticStorage,
}

impl StaticFilesConfig {
    pub fn for_project(base_dir: &Path) -> Self {
        Self {
            url: STATIC_URL.to_string(),
            root: base_dir.join(STATIC_ROOT_DIR),
            dirs: vec![base_dir.join(STATIC_SOURCE_DIR)],
            storage: StaticStorage::CompressedManifest,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MediaConfig {
    #[validate(custom(function = "validate_url_prefix"))]
    pub url: String,
    pub root: PathBuf,
}

impl MediaConfig {
    pub fn for_project(base_dir: &Path) -> Self {
        Self {
            url: MEDIA_URL.to_string(),
            root: base_dir.join(MEDIA_ROOT_DIR),
        }
    }
}

/// URL prefixes must start and end with `/` so joined asset paths stay rooted.
fn validate_url_prefix(value: &str) -> Result<(), ValidationError> {
    if value.len() < 2 || !value.starts_with('/') || !value.ends_with('/') {
        return Err(ValidationError::new("url_prefix")
            .with_message("URL prefix must start and end with '/'".into()));
    }
    Ok(())
}

/// Static serving tuned for the hosting platform.
///
/// Present only when the platform's site-name variable is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformStaticTuning {
    /// Serve straight from the source directories as well as the collected root
    pub use_finders: bool,

    /// Fail on assets missing from the manifest
    pub manifest_strict: bool,

    pub max_age_seconds: u64,
}

impl Default for PlatformStaticTuning {
    fn default() -> Self {
        Self {
            use_finders: true,
            manifest_strict: false,
            max_age_seconds: PLATFORM_MAX_AGE_SECONDS,
        }
    }
}

impl PlatformStaticTuning {
    /// `Cache-Control` value for served static assets.
    pub fn cache_control_value(&self) -> String {
        format!("max-age={}, public", self.max_age_seconds)
    }
}

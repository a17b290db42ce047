//! # Installed Applications and Middleware
//!
//! The fixed application list and middleware chain handed to the web
//! framework at boot.

use serde::{Deserialize, Serialize};

/// Applications installed into the framework, in registration order.
///
/// Framework contrib apps first, then the static-file server's development
/// hook, then the examination service's own apps.
pub const INSTALLED_APPS: [&str; 11] = [
    "django.contrib.admin",
    "django.contrib.auth",
    "django.contrib.contenttypes",
    "django.contrib.sessions",
    "django.contrib.messages",
    "django.contrib.staticfiles",
    "whitenoise.runserver_nostatic",
    "exam",
    "teacher",
    "student",
    "widget_tweaks",
];

/// Local applications that make up the examination service.
pub const LOCAL_APPS: [&str; 4] = ["exam", "teacher", "student", "widget_tweaks"];

pub fn installed_apps() -> Vec<String> {
    INSTALLED_APPS
        .iter()
        .map(|app| (*app).to_string())
        .collect()
}

/// Request middleware, applied outermost first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Middleware {
    Security,
    StaticFiles,
    Session,
    Common,
    Authentication,
    Messages,
    Clickjacking,
}

impl Middleware {
    /// The chain order. Static file serving sits immediately after the
    /// security middleware so that assets skip sessions and auth.
    pub const ORDER: [Self; 7] = [
        Self::Security,
        Self::StaticFiles,
        Self::Session,
        Self::Common,
        Self::Authentication,
        Self::Messages,
        Self::Clickjacking,
    ];

    /// Dotted import path the framework expects.
    pub fn path(self) -> &'static str {
        match self {
            Self::Security => "django.middleware.security.SecurityMiddleware",
            Self::StaticFiles => "whitenoise.middleware.WhiteNoiseMiddleware",
            Self::Session => "django.contrib.sessions.middleware.SessionMiddleware",
            Self::Common => "django.middleware.common.CommonMiddleware",
            Self::Authentication => "django.contrib.auth.middleware.AuthenticationMiddleware",
            Self::Messages => "django.contrib.messages.middleware.MessageMiddleware",
            Self::Clickjacking => "django.middleware.clickjacking.XFrameOptionsMiddleware",
        }
    }

    pub fn chain() -> Vec<Self> {
        Self::ORDER.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middleware_order_is_fixed() {
        assert_eq!(
            Middleware::chain(),
            vec![
                Middleware::Security,
                Middleware::StaticFiles,
                Middleware::Session,
                Middleware::Common,
                Middleware::Authentication,
                Middleware::Messages,
                Middleware::Clickjacking,
            ],
        );
    }

    #[test]
    fn test_order_matches_ord_impl() {
        let mut sorted = Middleware::chain();
        sorted.sort();
        assert_eq!(sorted, Middleware::chain());
    }

    #[test]
    fn test_static_files_directly_follows_security() {
        let chain = Middleware::chain();
        let security = chain
            .iter()
            .position(|m| *m == Middleware::Security)
            .unwrap();
        assert_eq!(chain[security + 1], Middleware::StaticFiles);
    }

    #[test]
    fn test_middleware_display_and_path() {
        assert_eq!(Middleware::StaticFiles.to_string(), "static_files");
        assert_eq!(
            Middleware::Clickjacking.path(),
            "django.middleware.clickjacking.XFrameOptionsMiddleware",
        );
    }

    #[test]
    fn test_middleware_serializes_snake_case() {
        let json = serde_json::to_string(&Middleware::Authentication).unwrap();
        assert_eq!(json, "\"authentication\"");
    }

    #[test]
    fn test_installed_apps_end_with_local_apps() {
        let apps = installed_apps();
        assert_eq!(apps.len(), 11);
        assert_eq!(apps[0], "django.contrib.admin");
        assert_eq!(&apps[apps.len() - LOCAL_APPS.len()..], &LOCAL_APPS.map(String::from));
    }
}

//! # Production Security Headers
//!
//! Transport-security settings applied when debug mode is off.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// HSTS window: 30 days.
pub const HSTS_SECONDS: u64 = 2_592_000;

/// Header a reverse proxy sets to report the original request scheme.
///
/// `header` uses the CGI-style key the framework reads from the request
/// metadata; [`http_header_name`](Self::http_header_name) gives the wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxySslHeader {
    pub header: String,
    pub value: String,
}

impl Default for ProxySslHeader {
    fn default() -> Self {
        Self {
            header: "HTTP_X_FORWARDED_PROTO".to_string(),
            value: "https".to_string(),
        }
    }
}

impl ProxySslHeader {
    /// `HTTP_X_FORWARDED_PROTO` becomes `X-Forwarded-Proto`.
    pub fn http_header_name(&self) -> String {
        let name = self.header.strip_prefix("HTTP_").unwrap_or(&self.header);
        name.split('_')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let lower = part.to_ascii_lowercase();
                let mut chars = lower.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Whether a received header value marks the original request as secure.
    /// Exact match, as the framework does it.
    pub fn indicates_secure(&self, received: &str) -> bool {
        received == self.value
    }
}

/// Security bundle enabled outside debug mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SecurityHeaders {
    #[validate(range(min = 1))]
    pub hsts_seconds: u64,
    pub hsts_include_subdomains: bool,
    pub hsts_preload: bool,
    pub ssl_redirect: bool,
    pub session_cookie_secure: bool,
    pub csrf_cookie_secure: bool,
    pub proxy_ssl_header: ProxySslHeader,
}

impl SecurityHeaders {
    pub fn production() -> Self {
        Self {
            hsts_seconds: HSTS_SECONDS,
            hsts_include_subdomains: true,
            hsts_preload: true,
            ssl_redirect: true,
            session_cookie_secure: true,
            csrf_cookie_secure: true,
            proxy_ssl_header: ProxySslHeader::default(),
        }
    }

    /// `Strict-Transport-Security` header value, or `None` if HSTS is off.
    pub fn strict_transport_security(&self) -> Option<String> {
        if self.hsts_seconds == 0 {
            return None;
        }

        let mut value = format!("max-age={}", self.hsts_seconds);
        if self.hsts_include_subdomains {
            value.push_str("; includeSubDomains");
        }
        if self.hsts_preload {
            value.push_str("; preload");
        }
        Some(value)
    }

    /// Header pairs added to every secure response.
    pub fn response_headers(&self) -> Vec<(&'static str, String)> {
        self.strict_transport_security()
            .map(|hsts| ("Strict-Transport-Security", hsts))
            .into_iter()
            .collect()
    }
}

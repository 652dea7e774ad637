//! Cookie Management Infrastructure
//!
//! Common cookie handling utilities and configuration.
//!
//! The admin gate only ever reads and deletes cookies; both the session
//! token and the OTP value are set by the external login/issuance flow.

use axum::http::{HeaderMap, HeaderValue, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Attributes of a cookie owned by the gate
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
        }
    }
}

impl CookieConfig {
    /// Build a `Set-Cookie` value that deletes the cookie on the client
    pub fn build_delete_cookie(&self) -> String {
        let mut parts = vec![
            format!("{}=", self.name),
            format!("Path={}", self.path),
            "Max-Age=0".to_string(),
            "Expires=Thu, 01 Jan 1970 00:00:00 GMT".to_string(),
        ];

        if self.http_only {
            parts.push("HttpOnly".to_string());
        }
        if self.secure {
            parts.push("Secure".to_string());
        }
        parts.push(format!("SameSite={}", self.same_site.as_str()));

        parts.join("; ")
    }

    /// Deletion cookie as a header value, ready for `Set-Cookie`
    pub fn delete_header(&self) -> HeaderValue {
        HeaderValue::from_str(&self.build_delete_cookie())
            .unwrap_or_else(|_| HeaderValue::from_static(""))
    }
}

/// Extract a cookie value from request headers
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;

            if key == name {
                Some(value.to_string())
            } else {
                None
            }
        })
}

/// Whether a cookie with the given name is present at all.
///
/// Presence says nothing about validity; callers that need a verified
/// value must check it themselves.
pub fn has_cookie(headers: &HeaderMap, name: &str) -> bool {
    extract_cookie(headers, name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_delete_cookie() {
        let config = CookieConfig {
            name: "admin_otp".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
        };

        let cookie = config.build_delete_cookie();
        assert!(cookie.starts_with("admin_otp=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Lax"));
    }

    #[test]
    fn test_delete_cookie_insecure_dev() {
        let config = CookieConfig {
            name: "admin_otp".to_string(),
            secure: false,
            ..Default::default()
        };

        let cookie = config.build_delete_cookie();
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; admin_session=abc123; other=xyz"),
        );

        assert_eq!(
            extract_cookie(&headers, "admin_session"),
            Some("abc123".to_string())
        );
        assert_eq!(extract_cookie(&headers, "foo"), Some("bar".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_has_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("admin_session=x"));

        assert!(has_cookie(&headers, "admin_session"));
        assert!(!has_cookie(&headers, "admin_otp"));

        let empty = HeaderMap::new();
        assert!(!has_cookie(&empty, "admin_session"));
    }
}

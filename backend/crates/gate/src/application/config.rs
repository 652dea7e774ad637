//! Gate Configuration
//!
//! Configuration for the admin gate. There is intentionally no `Default`
//! implementation and no compiled-in signing secret: the secret must come
//! from deployment configuration, and startup fails loudly without it.

pub use platform::cookie::SameSite;
use platform::cookie::CookieConfig;

/// Admin gate configuration
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Session token cookie name
    pub session_cookie_name: String,
    /// OTP cookie name
    pub otp_cookie_name: String,
    /// Secret for verifying session token signatures (HS256)
    pub session_secret: Vec<u8>,
    /// Guarded admin page path
    pub admin_path: String,
    /// Guarded login page path
    pub login_path: String,
    /// Whether gate-owned cookies require the Secure attribute
    pub cookie_secure: bool,
    /// SameSite policy for gate-owned cookies
    pub cookie_same_site: SameSite,
}

impl GateConfig {
    /// Create a config with the conventional cookie names and paths.
    ///
    /// Cookie names and guarded paths are fixed by convention with the
    /// external login flow that issues both cookies.
    pub fn new(session_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            session_cookie_name: "admin_session".to_string(),
            otp_cookie_name: "admin_otp".to_string(),
            session_secret: session_secret.into(),
            admin_path: "/admin".to_string(),
            login_path: "/login".to_string(),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }

    /// Create config for development: random secret, insecure cookie.
    ///
    /// Tokens signed before a restart will not verify afterwards, which
    /// is acceptable for local development only.
    pub fn development() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            cookie_secure: false,
            ..Self::new(secret.to_vec())
        }
    }

    /// Attributes of the OTP cookie, used to build its deletion header
    pub fn otp_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.otp_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conventional_names() {
        let config = GateConfig::new(b"secret".to_vec());
        assert_eq!(config.session_cookie_name, "admin_session");
        assert_eq!(config.otp_cookie_name, "admin_otp");
        assert_eq!(config.admin_path, "/admin");
        assert_eq!(config.login_path, "/login");
        assert!(config.cookie_secure);
    }

    #[test]
    fn test_development_secret_is_random() {
        let a = GateConfig::development();
        let b = GateConfig::development();
        assert_eq!(a.session_secret.len(), 32);
        assert_ne!(a.session_secret, b.session_secret);
        assert!(!a.cookie_secure);
    }
}

//! Verify Session Use Case
//!
//! Verifies the signed session token and extracts its claims. The token
//! is stateless: signature and `exp` are the only checks, there is no
//! server-side session table or revocation list.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::application::config::GateConfig;
use crate::error::{GateError, GateResult};

/// Claims embedded in the admin session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub email: String,
    pub role: String,
    /// Expiry, Unix seconds
    pub exp: i64,
}

/// Verify session use case
pub struct VerifySessionUseCase {
    config: Arc<GateConfig>,
}

impl VerifySessionUseCase {
    pub fn new(config: Arc<GateConfig>) -> Self {
        Self { config }
    }

    /// Verify the token from the session cookie, if any.
    ///
    /// Every decode failure maps to an explicit variant; nothing here
    /// panics or surfaces as a 500:
    /// - absent cookie -> [`GateError::MissingToken`]
    /// - bad signature, malformed token, missing claims -> [`GateError::InvalidToken`]
    /// - `exp` strictly before now (zero leeway) -> [`GateError::TokenExpired`]
    pub fn execute(&self, token: Option<&str>) -> GateResult<AdminClaims> {
        let token = token.ok_or(GateError::MissingToken)?;

        let mut validation = Validation::new(Algorithm::HS256);
        // exp strictly less than now fails; the default 60s leeway would
        // let just-expired tokens through
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let key = DecodingKey::from_secret(&self.config.session_secret);

        decode::<AdminClaims>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => GateError::TokenExpired,
                _ => GateError::InvalidToken,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    const SECRET: &[u8] = b"test-secret-for-unit-tests";

    fn use_case() -> VerifySessionUseCase {
        VerifySessionUseCase::new(Arc::new(GateConfig::new(SECRET.to_vec())))
    }

    fn sign(claims: &AdminClaims, secret: &[u8]) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    fn claims_expiring_at(exp: i64) -> AdminClaims {
        AdminClaims {
            email: "a@b.com".to_string(),
            role: "admin".to_string(),
            exp,
        }
    }

    #[test]
    fn test_missing_token() {
        let err = use_case().execute(None).unwrap_err();
        assert!(matches!(err, GateError::MissingToken));
    }

    #[test]
    fn test_valid_token_returns_claims() {
        let exp = chrono::Utc::now().timestamp() + 3600;
        let token = sign(&claims_expiring_at(exp), SECRET);

        let claims = use_case().execute(Some(&token)).unwrap();
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp, exp);
    }

    #[test]
    fn test_expired_token() {
        // One second in the past must already be rejected
        let exp = chrono::Utc::now().timestamp() - 1;
        let token = sign(&claims_expiring_at(exp), SECRET);

        let err = use_case().execute(Some(&token)).unwrap_err();
        assert!(matches!(err, GateError::TokenExpired));
    }

    #[test]
    fn test_wrong_secret() {
        let exp = chrono::Utc::now().timestamp() + 3600;
        let token = sign(&claims_expiring_at(exp), b"some-other-secret");

        let err = use_case().execute(Some(&token)).unwrap_err();
        assert!(matches!(err, GateError::InvalidToken));
    }

    #[test]
    fn test_malformed_token() {
        for garbage in ["", "not-a-jwt", "a.b", "a.b.c.d"] {
            let err = use_case().execute(Some(garbage)).unwrap_err();
            assert!(matches!(err, GateError::InvalidToken), "input: {garbage:?}");
        }
    }

    #[test]
    fn test_token_without_exp_claim() {
        let claims = serde_json::json!({ "email": "a@b.com", "role": "admin" });
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        let err = use_case().execute(Some(&token)).unwrap_err();
        assert!(matches!(err, GateError::InvalidToken));
    }

    #[test]
    fn test_expired_and_resigned_is_invalid_not_expired() {
        // Wrong signature takes precedence over expiry
        let exp = chrono::Utc::now().timestamp() - 1;
        let token = sign(&claims_expiring_at(exp), b"some-other-secret");

        let err = use_case().execute(Some(&token)).unwrap_err();
        assert!(matches!(err, GateError::InvalidToken));
    }
}

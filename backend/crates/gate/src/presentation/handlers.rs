//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::application::{VerifyOtpUseCase, VerifySessionUseCase};
use crate::error::{GateError, GateResult};
use crate::presentation::dto::{
    AdminUser, OtpVerifyRequest, OtpVerifyResponse, SessionStatusResponse,
};

/// Shared state for gate handlers
#[derive(Clone)]
pub struct GateState {
    pub config: Arc<GateConfig>,
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/admin/session
///
/// Read-only verification of the session token cookie. Never mutates
/// cookies; failures render as 401 with `authenticated: false`.
pub async fn session_status(
    State(state): State<GateState>,
    headers: HeaderMap,
) -> GateResult<Json<SessionStatusResponse>> {
    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    let use_case = VerifySessionUseCase::new(state.config.clone());
    let claims = use_case.execute(token.as_deref())?;

    Ok(Json(SessionStatusResponse {
        authenticated: true,
        message: None,
        user: Some(AdminUser {
            email: claims.email,
            role: claims.role,
        }),
    }))
}

// ============================================================================
// OTP Verify
// ============================================================================

/// POST /api/admin/otp/verify
///
/// Single-use check: the stored OTP cookie is deleted on success and left
/// untouched on every failure path, so mismatches may retry until the
/// cookie expires naturally.
pub async fn verify_otp(
    State(state): State<GateState>,
    headers: HeaderMap,
    body: Bytes,
) -> GateResult<impl IntoResponse> {
    let submitted = parse_otp_body(&body)?;
    let stored = platform::cookie::extract_cookie(&headers, &state.config.otp_cookie_name);

    VerifyOtpUseCase::new().execute(submitted.as_deref(), stored.as_deref())?;

    tracing::info!("OTP verified, consuming stored code");

    let delete_otp = state.config.otp_cookie().delete_header();

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, delete_otp)],
        Json(OtpVerifyResponse {
            success: true,
            message: None,
        }),
    ))
}

/// Parse the OTP submission body.
///
/// An empty body is a missing code (400), while a non-empty body that is
/// not valid JSON is an unexpected client/transport fault (500). Cookies
/// are never touched on either path.
fn parse_otp_body(body: &Bytes) -> GateResult<Option<String>> {
    if body.is_empty() {
        return Ok(None);
    }

    let req: OtpVerifyRequest = serde_json::from_slice(body)
        .map_err(|e| GateError::Internal(format!("OTP body parse failed: {e}")))?;

    Ok(Some(req.otp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_otp_body_empty() {
        let parsed = parse_otp_body(&Bytes::new()).unwrap();
        assert_eq!(parsed, None);
    }

    #[test]
    fn test_parse_otp_body_valid() {
        let parsed = parse_otp_body(&Bytes::from_static(br#"{"otp":"483920"}"#)).unwrap();
        assert_eq!(parsed.as_deref(), Some("483920"));
    }

    #[test]
    fn test_parse_otp_body_missing_field() {
        // Field defaults to empty string; the use case rejects it as required
        let parsed = parse_otp_body(&Bytes::from_static(b"{}")).unwrap();
        assert_eq!(parsed.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_otp_body_malformed() {
        let err = parse_otp_body(&Bytes::from_static(b"not json")).unwrap_err();
        assert!(matches!(err, GateError::Internal(_)));
    }
}

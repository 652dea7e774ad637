//! Gate Error Types
//!
//! This module provides gate-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Credential failures deliberately degrade to a uniform "not
//! authenticated" / "not verified" response; the internal distinction
//! (missing vs malformed vs expired) is carried only in the
//! human-readable message, never in a structured code. Clients must not
//! branch on message text.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::presentation::dto::{OtpVerifyResponse, SessionStatusResponse};

/// Gate-specific result type alias
pub type GateResult<T> = Result<T, GateError>;

/// Gate-specific error variants
#[derive(Debug, Error)]
pub enum GateError {
    /// No session token cookie on the request
    #[error("no token found")]
    MissingToken,

    /// Token signature invalid or token malformed
    #[error("invalid token")]
    InvalidToken,

    /// Token signature valid but `exp` is in the past
    #[error("token expired")]
    TokenExpired,

    /// OTP field missing or empty in the request body
    #[error("OTP is required")]
    OtpRequired,

    /// No stored OTP cookie (consumed or timed out)
    #[error("OTP expired or not found")]
    OtpMissing,

    /// Submitted OTP does not match the stored value
    #[error("invalid OTP")]
    OtpMismatch,

    /// Unexpected failure; detail is logged, never sent to the client
    #[error("server error")]
    Internal(String),
}

impl GateError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GateError::MissingToken | GateError::InvalidToken | GateError::TokenExpired => {
                StatusCode::UNAUTHORIZED
            }
            GateError::OtpRequired | GateError::OtpMissing | GateError::OtpMismatch => {
                StatusCode::BAD_REQUEST
            }
            GateError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GateError::MissingToken | GateError::InvalidToken | GateError::TokenExpired => {
                ErrorKind::Unauthorized
            }
            GateError::OtpRequired | GateError::OtpMissing | GateError::OtpMismatch => {
                ErrorKind::BadRequest
            }
            GateError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            GateError::Internal(detail) => {
                tracing::error!(detail = %detail, "Gate internal error");
            }
            GateError::OtpMismatch => {
                tracing::warn!("OTP verification failed");
            }
            GateError::InvalidToken => {
                tracing::warn!("Session token rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Gate error");
            }
        }
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let message = Some(self.to_string());

        let is_token_error = matches!(
            self,
            GateError::MissingToken | GateError::InvalidToken | GateError::TokenExpired
        );

        if is_token_error {
            (
                status,
                Json(SessionStatusResponse {
                    authenticated: false,
                    message,
                    user: None,
                }),
            )
                .into_response()
        } else {
            // Display for Internal is the fixed "server error" string; the
            // logged detail never reaches the body.
            (
                status,
                Json(OtpVerifyResponse {
                    success: false,
                    message,
                }),
            )
                .into_response()
        }
    }
}

impl From<AppError> for GateError {
    fn from(err: AppError) -> Self {
        GateError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(GateError::MissingToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(GateError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(GateError::TokenExpired.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(GateError::OtpRequired.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(GateError::OtpMissing.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(GateError::OtpMismatch.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            GateError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_to_app_error_keeps_kind() {
        let app_err = GateError::MissingToken.to_app_error();
        assert_eq!(app_err.kind(), ErrorKind::Unauthorized);
        assert_eq!(app_err.status_code(), 401);

        let app_err = GateError::OtpRequired.to_app_error();
        assert_eq!(app_err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_internal_display_hides_detail() {
        let err = GateError::Internal("cookie jar exploded".into());
        assert_eq!(err.to_string(), "server error");
    }

    #[test]
    fn test_messages_match_contract() {
        assert_eq!(GateError::MissingToken.to_string(), "no token found");
        assert_eq!(GateError::InvalidToken.to_string(), "invalid token");
        assert_eq!(GateError::TokenExpired.to_string(), "token expired");
        assert_eq!(GateError::OtpRequired.to_string(), "OTP is required");
        assert_eq!(GateError::OtpMissing.to_string(), "OTP expired or not found");
        assert_eq!(GateError::OtpMismatch.to_string(), "invalid OTP");
    }
}

//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Session Status
// ============================================================================

/// Admin identity extracted from a verified session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub email: String,
    pub role: String,
}

/// Session status response
///
/// `message` is human-readable context for the failure cases; it is not a
/// machine-readable error code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AdminUser>,
}

// ============================================================================
// OTP Verify
// ============================================================================

/// OTP verify request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtpVerifyRequest {
    #[serde(default)]
    pub otp: String,
}

/// OTP verify response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpVerifyResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

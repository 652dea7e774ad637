//! Verify OTP Use Case
//!
//! Compares a submitted one-time passcode against the value stored in the
//! short-lived OTP cookie. Pure comparison; the handler owns the cookie
//! deletion that makes the code single-use.

use crate::error::{GateError, GateResult};

/// Verify OTP use case
pub struct VerifyOtpUseCase;

impl VerifyOtpUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Decide whether the submitted code matches the stored one.
    ///
    /// Exact string match, no normalization. A missing stored value means
    /// the code was already consumed or timed out.
    pub fn execute(&self, submitted: Option<&str>, stored: Option<&str>) -> GateResult<()> {
        let submitted = match submitted {
            Some(code) if !code.is_empty() => code,
            _ => return Err(GateError::OtpRequired),
        };

        let stored = stored.ok_or(GateError::OtpMissing)?;

        if submitted == stored {
            Ok(())
        } else {
            Err(GateError::OtpMismatch)
        }
    }
}

impl Default for VerifyOtpUseCase {
    fn default() -> Self {
        Self::new()
    }
}

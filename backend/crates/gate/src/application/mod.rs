//! Application Layer
//!
//! Use cases and gate configuration.

pub mod config;
pub mod verify_otp;
pub mod verify_session;

// Re-exports
pub use config::GateConfig;
pub use verify_otp::VerifyOtpUseCase;
pub use verify_session::{AdminClaims, VerifySessionUseCase};

//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of shared vocabulary:
//! - Common error types and result aliases
//! - Error classification mapped to HTTP status codes
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}

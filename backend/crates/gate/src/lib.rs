//! Admin Gate Backend Module
//!
//! The login gate in front of the marketing site's admin page:
//! - `application/` - Use cases and gate configuration
//! - `presentation/` - HTTP handlers, DTOs, router, route guard middleware
//!
//! ## Security Model
//! - Session tokens are HS256-signed JWTs carried in an HTTP-only cookie;
//!   they are stateless, so signature and `exp` are the only checks
//! - OTP values are single-use: the cookie is deleted on successful match
//! - The route guard checks cookie *presence* only; the session endpoint
//!   performs the deep signature/expiry verification (two-tier trust)
//! - Both cookies are issued by the external login flow, never by the gate

pub mod application;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::GateConfig;
pub use application::verify_session::AdminClaims;
pub use error::{GateError, GateResult};
pub use presentation::router::gate_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

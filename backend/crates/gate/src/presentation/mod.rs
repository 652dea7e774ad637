//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and route guard middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::GateState;
pub use middleware::{GuardState, guard_admin_pages};
pub use router::gate_router;

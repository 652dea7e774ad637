//! Gate Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::presentation::handlers::{self, GateState};

/// Create the admin gate router.
///
/// Mounted under `/api/admin` by the api app.
pub fn gate_router(config: GateConfig) -> Router {
    let state = GateState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/session", get(handlers::session_status))
        .route("/otp/verify", post(handlers::verify_otp))
        .with_state(state)
}

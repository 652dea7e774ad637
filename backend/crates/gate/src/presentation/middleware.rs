//! Route Guard Middleware
//!
//! Intercepts navigation to the admin and login pages before they render.
//!
//! The guard checks cookie *presence* only, by design: an expired or
//! garbage token still passes the guard, and the session endpoint is the
//! authority that rejects it. Two tiers on purpose; verifying signatures
//! here would duplicate that authority, not add one.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::config::GateConfig;

/// Middleware state
#[derive(Clone)]
pub struct GuardState {
    pub config: Arc<GateConfig>,
}

/// Guard the admin and login pages.
///
/// - admin page without a session cookie -> redirect to the login page
/// - login page with a session cookie -> redirect to the admin page
/// - everything else passes through unmodified
pub async fn guard_admin_pages(state: GuardState, req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path();
    let has_session =
        platform::cookie::has_cookie(req.headers(), &state.config.session_cookie_name);

    if path == state.config.admin_path && !has_session {
        tracing::debug!(path, "No session cookie, redirecting to login");
        return Redirect::temporary(&state.config.login_path).into_response();
    }

    if path == state.config.login_path && has_session {
        tracing::debug!(path, "Session cookie present, redirecting to admin");
        return Redirect::temporary(&state.config.admin_path).into_response();
    }

    next.run(req).await
}

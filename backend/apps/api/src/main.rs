//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use axum::{
    Router, http,
    http::{Method, header},
    middleware,
    response::Html,
    routing::get,
};
use gate::middleware::{GuardState, guard_admin_pages};
use gate::{GateConfig, gate_router};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,gate=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Gate configuration
    let gate_config = if cfg!(debug_assertions) {
        GateConfig::development()
    } else {
        // No compiled-in fallback secret: refuse to start without one
        let secret = env::var("ADMIN_SESSION_SECRET")
            .expect("ADMIN_SESSION_SECRET must be set in production");
        GateConfig::new(secret.into_bytes())
    };

    let guard_state = GuardState {
        config: Arc::new(gate_config.clone()),
    };

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Placeholder pages; the real marketing pages live in the frontend.
    // The guard only needs the two paths to exist.
    let pages = Router::new()
        .route("/", get(home_page))
        .route("/admin", get(admin_page))
        .route("/login", get(login_page))
        .layer(middleware::from_fn(move |req, next| {
            guard_admin_pages(guard_state.clone(), req, next)
        }));

    // Build router
    let app = Router::new()
        .nest("/api/admin", gate_router(gate_config))
        .merge(pages)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 31117));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn home_page() -> Html<&'static str> {
    Html("<h1>Welcome</h1>")
}

async fn admin_page() -> Html<&'static str> {
    Html("<h1>Admin</h1>")
}

async fn login_page() -> Html<&'static str> {
    Html("<h1>Login</h1>")
}

async fn not_found() -> AppError {
    AppError::not_found("Route not found")
}

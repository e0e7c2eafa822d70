//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: shared state (session registry + background sweep)
//! - `routes/`: HTTP routes + handlers (page, JSON mirror, system)
//! - `actions.rs`: session mutations and the notices they raise
//! - `view.rs`: page rendering
//! - `dto.rs`: form/JSON bodies
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::middleware;

pub mod actions;
pub mod dto;
pub mod errors;
pub mod notice;
pub mod routes;
pub mod services;
pub mod view;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Must be called inside a Tokio runtime: it starts the idle-session sweep.
pub async fn build_app(config: ApiConfig) -> Router {
    let services = Arc::new(services::build_services(&config));

    // Session-scoped routes: every request resolves (or starts) a session first.
    let scoped = routes::router()
        .layer(Extension(services.clone()))
        .layer(axum::middleware::from_fn_with_state(
            services,
            middleware::session_middleware,
        ));

    routes::public_router()
        .merge(scoped)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

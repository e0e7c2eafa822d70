use axum::{routing::get, Router};

pub mod items;
pub mod page;
pub mod system;

/// Router for all session-scoped endpoints.
pub fn router() -> Router {
    Router::new()
        .merge(page::router())
        .nest("/api", items::router())
}

/// Endpoints that never touch a session.
pub fn public_router() -> Router {
    Router::new().route("/health", get(system::health))
}

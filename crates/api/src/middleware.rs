use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use magazyn_core::SessionId;
use magazyn_infra::SessionStore;

use crate::app::services::AppServices;
use crate::context::SessionContext;

pub const SESSION_COOKIE: &str = "magazyn_session";

/// Resolve (or start) the visitor's session and expose it as [`SessionContext`].
///
/// A `Set-Cookie` is emitted whenever a new session had to be started, unless
/// the handler already set the cookie itself.
pub async fn session_middleware(
    State(services): State<Arc<AppServices>>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let presented = extract_session_id(req.headers());
    let (session_id, created) = services.sessions.open(presented, Utc::now());

    req.extensions_mut().insert(SessionContext::new(session_id));

    let mut response = next.run(req).await;

    if created && !response.headers().contains_key(header::SET_COOKIE) {
        if let Ok(value) = HeaderValue::from_str(&session_cookie(session_id)) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    response
}

pub fn session_cookie(session_id: SessionId) -> String {
    format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax")
}

pub fn expired_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

fn extract_session_id(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| value.trim().parse().ok())
}

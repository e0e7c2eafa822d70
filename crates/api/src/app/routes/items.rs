//! JSON mirror of the page actions, scoped to the caller's session.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use magazyn_core::DomainResult;
use magazyn_infra::{Session, SessionStore};

use crate::app::notice::Notice;
use crate::app::services::AppServices;
use crate::app::{actions, dto, errors};
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new().route("/items", get(list_items).post(create_item).delete(delete_item))
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    let items = services
        .sessions
        .with_session(session.session_id(), |s| s.inventory.items().to_vec());

    match items {
        Some(items) => {
            (StatusCode::OK, Json(dto::ItemsResponse { items, notice: None })).into_response()
        }
        None => errors::session_expired(),
    }
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    let outcome = services.sessions.with_session(session.session_id(), |s| {
        mutate(s, |s| actions::add_product(s, body.name))
    });
    respond(StatusCode::CREATED, outcome)
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    let outcome = services.sessions.with_session(session.session_id(), |s| {
        mutate(s, |s| actions::remove_product(s, &body.name))
    });
    respond(StatusCode::OK, outcome)
}

fn mutate(
    session: &mut Session,
    action: impl FnOnce(&mut Session) -> DomainResult<Notice>,
) -> DomainResult<dto::ItemsResponse> {
    let notice = action(session)?;
    Ok(dto::ItemsResponse {
        items: session.inventory.items().to_vec(),
        notice: Some(notice),
    })
}

fn respond(
    status: StatusCode,
    outcome: Option<DomainResult<dto::ItemsResponse>>,
) -> axum::response::Response {
    match outcome {
        Some(Ok(body)) => (status, Json(body)).into_response(),
        Some(Err(e)) => errors::domain_error_to_response(e),
        None => errors::session_expired(),
    }
}

//! The inventory page and its two form actions.
//!
//! Every handler mutates the session (if at all) and then recomputes the page
//! from the resulting state before answering.

use std::sync::Arc;

use axum::{
    extract::{Extension, Form, Path},
    http::header,
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Router,
};

use magazyn_infra::SessionStore;

use crate::app::notice::Notice;
use crate::app::services::AppServices;
use crate::app::{actions, dto, view};
use crate::context::SessionContext;
use crate::middleware;

pub fn router() -> Router {
    Router::new()
        .route("/", get(show))
        .route("/add", post(add_product))
        .route("/remove/:index", post(remove_product))
        .route("/session/end", post(end_session))
}

pub async fn show(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    render_after(&services, session, |_| Vec::new())
}

pub async fn add_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Form(form): Form<dto::AddProductForm>,
) -> axum::response::Response {
    render_after(&services, session, move |s| {
        s.product_input = form.product_input;
        let notice =
            actions::submit_product_input(s).unwrap_or_else(|e| Notice::for_error(&e));
        vec![notice]
    })
}

pub async fn remove_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(index): Path<usize>,
    Form(form): Form<dto::RemoveProductForm>,
) -> axum::response::Response {
    render_after(&services, session, move |s| {
        let notice = actions::remove_row(s, index, &form.name)
            .unwrap_or_else(|e| Notice::for_error(&e));
        vec![notice]
    })
}

pub async fn end_session(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    services.sessions.end(session.session_id());
    (
        [(header::SET_COOKIE, middleware::expired_session_cookie())],
        Redirect::to("/"),
    )
        .into_response()
}

/// Apply `mutate` to the session, then render the page from the new state.
///
/// A session that vanished between middleware and handler (idle sweep) sends
/// the visitor back to `/`, which starts a fresh one.
fn render_after(
    services: &AppServices,
    session: SessionContext,
    mutate: impl FnOnce(&mut magazyn_infra::Session) -> Vec<Notice>,
) -> axum::response::Response {
    let page = services.sessions.with_session(session.session_id(), |s| {
        let notices = mutate(s);
        view::render_page(s, &notices)
    });

    match page {
        Some(html) => Html(html).into_response(),
        None => Redirect::to("/").into_response(),
    }
}

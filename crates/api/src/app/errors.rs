use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use magazyn_core::DomainError;

use crate::app::notice::Notice;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let notice = Notice::for_error(&err);
    let (status, code) = match &err {
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
        DomainError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        DomainError::InvalidId(_) => (StatusCode::BAD_REQUEST, "invalid_id"),
    };
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": err.to_string(),
            "notice": notice,
        })),
    )
        .into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn session_expired() -> axum::response::Response {
    json_error(StatusCode::GONE, "session_expired", "session expired; retry to start a new one")
}

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use serde_json::json;

use wicket_auth::AuthError;
use wicket_core::DomainError;

/// Map a gate failure to its boundary representation: 401 (with a
/// `WWW-Authenticate: Bearer` challenge) for everything except an
/// insufficient-permission rejection, which is a distinct 403.
pub fn auth_error(err: &AuthError) -> axum::response::Response {
    if err.is_unauthorized() {
        let mut res = json_error(StatusCode::UNAUTHORIZED, "unauthorized", err.to_string());
        res.headers_mut()
            .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        res
    } else {
        json_error(StatusCode::FORBIDDEN, "forbidden", err.to_string())
    }
}

pub fn domain_error(err: DomainError) -> axum::response::Response {
    match &err {
        DomainError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg.clone())
        }
        // Duplicate registration surfaces as 403 at this boundary.
        DomainError::Conflict(_) => json_error(StatusCode::FORBIDDEN, "conflict", err.to_string()),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Internal(_) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "internal storage failure",
        ),
    }
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

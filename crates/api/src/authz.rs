//! Per-operation permission guard.
//!
//! Each protected handler declares its required permissions as a static
//! list (data, not behavior) and calls [`require`] before touching any
//! business logic. Authorization is all-or-nothing per operation.

use axum::http::StatusCode;
use axum::response::Response;

use wicket_auth::Permission;

use crate::app::errors;
use crate::context::CurrentUser;

/// Check that the current user's role grants every permission in `required`.
///
/// Returns a ready-to-send 403 response on the first missing permission, so
/// handlers can short-circuit with `?`-style early returns.
pub fn require(principal: &CurrentUser, required: &'static [Permission]) -> Result<(), Response> {
    wicket_auth::authorize(principal.role(), required).map_err(|e| {
        tracing::debug!(principal = %principal.email(), "permission denied: {e}");
        errors::json_error(
            StatusCode::FORBIDDEN,
            "forbidden",
            "not enough permissions to access this resource",
        )
    })
}

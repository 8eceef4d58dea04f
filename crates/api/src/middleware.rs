use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use wicket_auth::{AuthError, TokenService};
use wicket_store::UserStore;

use crate::app::errors;
use crate::context::CurrentUser;

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<TokenService>,
    pub users: Arc<dyn UserStore>,
}

/// Per-request authorization gate, steps 1-3: extract the bearer token,
/// validate it, resolve the principal. The permission check (step 4) runs
/// in the handlers, where the required set is declared.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer(req.headers())
        .ok_or_else(|| errors::auth_error(&AuthError::MissingCredentials))?;

    let subject = state.tokens.validate(token).map_err(|e| {
        tracing::debug!("rejected bearer token: {e}");
        errors::auth_error(&AuthError::InvalidToken(e))
    })?;

    // Existence is re-checked on every request; a principal deleted after
    // token issuance is rejected here.
    let user = state
        .users
        .find_by_email(&subject)
        .map_err(errors::domain_error)?
        .ok_or_else(|| errors::auth_error(&AuthError::UnknownPrincipal))?;

    req.extensions_mut()
        .insert(CurrentUser::new(user.email, user.role));

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let header = header.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        return None;
    }

    Some(token)
}

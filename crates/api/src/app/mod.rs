//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store/token-service construction and seeding
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app(jwt_secret: String) -> Router {
    let services = Arc::new(services::build_services(jwt_secret));
    build_app_with(services)
}

/// Build the router around pre-constructed services (used by tests to seed
/// stores directly).
pub fn build_app_with(services: Arc<services::AppServices>) -> Router {
    let auth_state = middleware::AuthState {
        tokens: services.tokens.clone(),
        users: services.users.clone(),
    };

    // Protected routes: the gate runs before every handler.
    let protected = Router::new()
        .nest("/v1/users", routes::users::router())
        .nest("/v1/items", routes::items::router())
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/v1/token", post(routes::users::login))
        .merge(protected)
        .layer(Extension(services))
}

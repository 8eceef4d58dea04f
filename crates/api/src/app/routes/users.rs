use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Form, Json, Router,
};
use chrono::Utc;

use wicket_auth::Permission;
use wicket_store::{User, UserUpdate};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz;
use crate::context::CurrentUser;

const REGISTER_USER: &[Permission] = &[Permission::UsersCreate];
const READ_USERS: &[Permission] = &[Permission::UsersRead];
const UPDATE_USER: &[Permission] = &[Permission::UsersCreate, Permission::UsersUpdate];
const DELETE_USER: &[Permission] = &[Permission::UsersDelete];

pub fn router() -> Router {
    Router::new().route(
        "/",
        post(create_user)
            .get(list_users)
            .patch(update_user)
            .delete(delete_user),
    )
}

/// Exchange credentials for a bearer token (public endpoint).
///
/// Unknown email and wrong password produce the same rejection, so the
/// endpoint cannot be used to enumerate registered identifiers.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Form(form): Form<dto::LoginForm>,
) -> axum::response::Response {
    let user = match services.users.find_by_email(&form.username) {
        Ok(user) => user,
        Err(e) => return errors::domain_error(e),
    };

    let verified = user
        .as_ref()
        .is_some_and(|u| wicket_auth::verify_password(&form.password, &u.password_hash));

    let Some(user) = user.filter(|_| verified) else {
        tracing::debug!("rejected login attempt");
        return errors::json_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "invalid user email or password",
        );
    };

    match services.tokens.issue(&user.email) {
        Ok(access_token) => Json(dto::TokenResponse {
            access_token,
            token_type: "bearer",
        })
        .into_response(),
        Err(e) => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "token_error",
            e.to_string(),
        ),
    }
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<CurrentUser>,
    Json(body): Json<dto::UserSignUpRequest>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&principal, REGISTER_USER) {
        return resp;
    }

    if body.email.trim().is_empty() || !body.email.contains('@') {
        return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", "invalid email format");
    }
    if body.name.trim().is_empty() {
        return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", "name cannot be empty");
    }

    let password_hash = match wicket_auth::hash_password(&body.password) {
        Ok(hash) => hash,
        Err(e) => {
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "password_error",
                e.to_string(),
            )
        }
    };

    let user = User {
        email: body.email,
        password_hash,
        name: body.name,
        surname: body.surname,
        role: body.role,
        register_date: Utc::now(),
    };

    match services.users.insert(user.clone()) {
        Ok(()) => (StatusCode::CREATED, Json(dto::UserResponse::from(user))).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<CurrentUser>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&principal, READ_USERS) {
        return resp;
    }

    match services.users.list() {
        Ok(users) => {
            let users: Vec<dto::UserResponse> =
                users.into_iter().map(dto::UserResponse::from).collect();
            Json(users).into_response()
        }
        Err(e) => errors::domain_error(e),
    }
}

pub async fn update_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<CurrentUser>,
    Query(query): Query<dto::UserEmailQuery>,
    Json(body): Json<dto::UserUpdateRequest>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&principal, UPDATE_USER) {
        return resp;
    }

    let update = UserUpdate {
        name: body.name,
        surname: body.surname,
        role: body.role,
    };

    match services.users.update(&query.user_email, update) {
        Ok(user) => Json(dto::UserResponse::from(user)).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<CurrentUser>,
    Query(query): Query<dto::UserEmailQuery>,
) -> axum::response::Response {
    if let Err(resp) = authz::require(&principal, DELETE_USER) {
        return resp;
    }

    match services.users.delete(&query.user_email) {
        Ok(()) => Json(serde_json::json!({
            "result": format!("user with email {} has been deleted", query.user_email),
        }))
        .into_response(),
        Err(e) => errors::domain_error(e),
    }
}

//! Service construction: stores + token service.

use std::sync::Arc;

use chrono::Utc;

use wicket_auth::{Role, TokenConfig, TokenService};
use wicket_store::{InMemoryItemStore, InMemoryUserStore, ItemStore, User, UserStore};

pub struct AppServices {
    pub users: Arc<dyn UserStore>,
    pub items: Arc<dyn ItemStore>,
    pub tokens: Arc<TokenService>,
}

/// Build the default service set: in-memory stores and an HS256 token
/// service around the supplied signing secret.
pub fn build_services(jwt_secret: String) -> AppServices {
    let services = AppServices {
        users: Arc::new(InMemoryUserStore::new()),
        items: Arc::new(InMemoryItemStore::new()),
        tokens: Arc::new(TokenService::new(TokenConfig::new(jwt_secret))),
    };

    seed_initial_administrator(&services);
    services
}

/// Seed a first administrator from the environment so that user management
/// endpoints are reachable on a fresh process (registration itself requires
/// USERS_CREATE).
fn seed_initial_administrator(services: &AppServices) {
    let (Ok(email), Ok(password)) = (
        std::env::var("WICKET_ADMIN_EMAIL"),
        std::env::var("WICKET_ADMIN_PASSWORD"),
    ) else {
        tracing::warn!(
            "WICKET_ADMIN_EMAIL/WICKET_ADMIN_PASSWORD not set; no initial administrator seeded"
        );
        return;
    };

    let password_hash = match wicket_auth::hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::warn!("failed to hash initial administrator password: {e}");
            return;
        }
    };

    let user = User {
        email: email.clone(),
        password_hash,
        name: "Administrator".to_string(),
        surname: None,
        role: Role::Administrator,
        register_date: Utc::now(),
    };

    match services.users.insert(user) {
        Ok(()) => tracing::info!(email = %email, "seeded initial administrator"),
        Err(e) => tracing::warn!("failed to seed initial administrator: {e}"),
    }
}

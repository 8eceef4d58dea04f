//! User storage: the principal directory.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wicket_auth::Role;
use wicket_core::DomainError;

/// A registered principal.
///
/// The email is the unique, immutable identifier. `password_hash` is opaque
/// to everything except the credential verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub surname: Option<String>,
    pub role: Role,
    pub register_date: DateTime<Utc>,
}

/// Partial update; unset fields are left untouched. Email is immutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub role: Option<Role>,
}

/// Lookup/maintenance contract for principals.
///
/// `find_by_email` must return exactly one matching user or none; matching
/// is exact and case-sensitive on the raw identifier.
pub trait UserStore: Send + Sync {
    fn insert(&self, user: User) -> Result<(), DomainError>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
    fn list(&self) -> Result<Vec<User>, DomainError>;
    fn update(&self, email: &str, update: UserUpdate) -> Result<User, DomainError>;
    fn delete(&self, email: &str) -> Result<(), DomainError>;
}

/// In-memory user store keyed by email.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn insert(&self, user: User) -> Result<(), DomainError> {
        let mut users = self.users.write().map_err(|_| DomainError::internal("store lock poisoned"))?;

        if users.contains_key(&user.email) {
            return Err(DomainError::conflict(format!(
                "email {} is already attached to a registered user",
                user.email
            )));
        }

        users.insert(user.email.clone(), user);
        Ok(())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().map_err(|_| DomainError::internal("store lock poisoned"))?;
        Ok(users.get(email).cloned())
    }

    fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().map_err(|_| DomainError::internal("store lock poisoned"))?;

        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| a.register_date.cmp(&b.register_date));
        Ok(all)
    }

    fn update(&self, email: &str, update: UserUpdate) -> Result<User, DomainError> {
        let mut users = self.users.write().map_err(|_| DomainError::internal("store lock poisoned"))?;

        let user = users.get_mut(email).ok_or(DomainError::NotFound)?;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(surname) = update.surname {
            user.surname = Some(surname);
        }
        if let Some(role) = update.role {
            user.role = role;
        }

        Ok(user.clone())
    }

    fn delete(&self, email: &str) -> Result<(), DomainError> {
        let mut users = self.users.write().map_err(|_| DomainError::internal("store lock poisoned"))?;

        users.remove(email).ok_or(DomainError::NotFound)?;
        Ok(())
    }
}

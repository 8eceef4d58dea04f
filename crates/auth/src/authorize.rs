//! Authorization policy check and the boundary error taxonomy.

use thiserror::Error;

use crate::{catalog, Permission, Role, TokenError};

/// Permission check failure: the credential was valid but insufficient.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("missing permission '{0}'")]
    Forbidden(Permission),
}

/// Everything that can go wrong between receiving a request and admitting it.
///
/// The first three variants are all surfaced as "unauthorized" (401); only
/// `Forbidden` is distinct (403), signaling a valid credential with
/// insufficient permissions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing credentials")]
    MissingCredentials,

    #[error("invalid or expired token")]
    InvalidToken(#[from] TokenError),

    #[error("unknown principal")]
    UnknownPrincipal,

    #[error("insufficient permissions: {0}")]
    Forbidden(#[from] AuthzError),
}

impl AuthError {
    /// True when the failure should be reported as 401 rather than 403.
    pub fn is_unauthorized(&self) -> bool {
        !matches!(self, AuthError::Forbidden(_))
    }
}

/// Check that `role` grants every permission in `required`.
///
/// Pure function of (role, required set); the role→permission mapping is the
/// static catalog. An operation may require more than one permission, and
/// authorization is all-or-nothing: the first missing permission rejects.
pub fn authorize(role: Role, required: &[Permission]) -> Result<(), AuthzError> {
    let granted = catalog::permissions_for(role);

    for permission in required {
        if !granted.contains(permission) {
            return Err(AuthzError::Forbidden(*permission));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_may_create_items() {
        assert_eq!(authorize(Role::User, &[Permission::ItemsCreate]), Ok(()));
    }

    #[test]
    fn user_may_not_delete_users() {
        assert_eq!(
            authorize(Role::User, &[Permission::UsersDelete]),
            Err(AuthzError::Forbidden(Permission::UsersDelete))
        );
    }

    #[test]
    fn all_required_permissions_must_be_granted() {
        // ItemsRead is granted, ItemsDelete is not: the whole set rejects.
        assert_eq!(
            authorize(Role::User, &[Permission::ItemsRead, Permission::ItemsDelete]),
            Err(AuthzError::Forbidden(Permission::ItemsDelete))
        );
    }

    #[test]
    fn empty_required_set_admits_any_role() {
        assert_eq!(authorize(Role::User, &[]), Ok(()));
        assert_eq!(authorize(Role::Administrator, &[]), Ok(()));
    }

    #[test]
    fn administrator_passes_every_check() {
        assert_eq!(
            authorize(
                Role::Administrator,
                &[
                    Permission::UsersCreate,
                    Permission::UsersDelete,
                    Permission::ItemsDelete,
                ]
            ),
            Ok(())
        );
    }

    #[test]
    fn forbidden_is_the_only_non_unauthorized_failure() {
        assert!(AuthError::MissingCredentials.is_unauthorized());
        assert!(AuthError::UnknownPrincipal.is_unauthorized());
        assert!(AuthError::InvalidToken(TokenError::Expired).is_unauthorized());
        assert!(
            !AuthError::Forbidden(AuthzError::Forbidden(Permission::UsersDelete))
                .is_unauthorized()
        );
    }
}

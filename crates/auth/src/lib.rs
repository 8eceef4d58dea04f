//! `wicket-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: token
//! issuance/validation, credential verification, and the role→permission
//! policy check all live here as plain functions over plain data.

pub mod authorize;
pub mod catalog;
pub mod password;
pub mod permissions;
pub mod roles;
pub mod token;

pub use authorize::{authorize, AuthError, AuthzError};
pub use catalog::permissions_for;
pub use password::{hash_password, verify_password, PasswordError};
pub use permissions::Permission;
pub use roles::Role;
pub use token::{TokenConfig, TokenError, TokenService, DEFAULT_TOKEN_TTL_MINUTES};

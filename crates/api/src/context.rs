use wicket_auth::Role;

/// The resolved principal for a request (authenticated identity + role).
///
/// Inserted into request extensions by the auth middleware; handlers can
/// rely on its presence on every protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    email: String,
    role: Role,
}

impl CurrentUser {
    pub fn new(email: String, role: Role) -> Self {
        Self { email, role }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

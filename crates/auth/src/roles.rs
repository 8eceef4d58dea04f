use serde::{Deserialize, Serialize};

/// Role assigned to a principal, drawn from a closed set.
///
/// The enumeration is validated at the data-model boundary (deserialization
/// of signup/update requests); everything downstream can rely on a role
/// being one of these values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Administrator,
    User,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Administrator, Role::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "ADMINISTRATOR",
            Role::User => "USER",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

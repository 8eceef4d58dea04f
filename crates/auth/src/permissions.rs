use serde::{Deserialize, Serialize};

/// Permission identifier: one allowed action on one resource kind.
///
/// Permissions are a fixed enumeration; assignment to roles happens in the
/// catalog, never at runtime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    UsersCreate,
    UsersRead,
    UsersUpdate,
    UsersDelete,
    ItemsCreate,
    ItemsRead,
    ItemsUpdate,
    ItemsDelete,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::UsersCreate => "USERS_CREATE",
            Permission::UsersRead => "USERS_READ",
            Permission::UsersUpdate => "USERS_UPDATE",
            Permission::UsersDelete => "USERS_DELETE",
            Permission::ItemsCreate => "ITEMS_CREATE",
            Permission::ItemsRead => "ITEMS_READ",
            Permission::ItemsUpdate => "ITEMS_UPDATE",
            Permission::ItemsDelete => "ITEMS_DELETE",
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

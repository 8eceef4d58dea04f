//! Permission catalog: the fixed role→permission mapping.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::{Permission, Role};

const USER_MANAGEMENT: [Permission; 4] = [
    Permission::UsersCreate,
    Permission::UsersRead,
    Permission::UsersUpdate,
    Permission::UsersDelete,
];

const ITEM_MANAGEMENT: [Permission; 4] = [
    Permission::ItemsCreate,
    Permission::ItemsRead,
    Permission::ItemsUpdate,
    Permission::ItemsDelete,
];

// Grants are declared in resource groups above and flattened into one
// deduplicated set per role at first use. Immutable for the process lifetime.
static ADMINISTRATOR_PERMISSIONS: LazyLock<HashSet<Permission>> = LazyLock::new(|| {
    USER_MANAGEMENT
        .into_iter()
        .chain(ITEM_MANAGEMENT)
        .collect()
});

static USER_PERMISSIONS: LazyLock<HashSet<Permission>> = LazyLock::new(|| {
    [
        Permission::ItemsCreate,
        Permission::ItemsRead,
        Permission::ItemsUpdate,
    ]
    .into_iter()
    .collect()
});

/// Resolve the full permission set granted to a role.
///
/// Total over the closed `Role` enumeration (the match below is exhaustive,
/// so an out-of-enumeration role is unrepresentable) and deterministic:
/// repeated calls for the same role observe the same set.
pub fn permissions_for(role: Role) -> &'static HashSet<Permission> {
    match role {
        Role::Administrator => &ADMINISTRATOR_PERMISSIONS,
        Role::User => &USER_PERMISSIONS,
    }
}

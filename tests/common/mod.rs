#![allow(dead_code)]

use podash::persistence::InMemoryRepository;
use podash::PermissionSession;
use podash_config::{BulkRemoveMode, EngineConfig};
use podash_models::{Permission, Role};

pub const READ_ORDERS: &str = "read-orders";
pub const WRITE_ORDERS: &str = "write-orders";
pub const READ_USERS: &str = "read-users";
pub const WRITE_USERS: &str = "write-users";
pub const READ_PRODUCTS: &str = "read-products";

pub const ORDERS: &str = "Orders";
pub const USERS: &str = "Users";
pub const PRODUCTS: &str = "Products";

/// Orders = {read-orders, write-orders}, Users = {read-users, write-users},
/// Products = {read-products}.
pub fn test_catalog() -> Vec<Permission> {
    vec![
        Permission::new(READ_ORDERS, "View orders", ORDERS),
        Permission::new(WRITE_ORDERS, "Process orders", ORDERS),
        Permission::new(READ_USERS, "View users", USERS),
        Permission::new(WRITE_USERS, "Edit users", USERS),
        Permission::new(READ_PRODUCTS, "View products", PRODUCTS),
    ]
}

pub fn test_role(id: &str, permissions: &[&str]) -> Role {
    Role::new(format!("Role {}", id))
        .with_id(id)
        .with_permissions(permissions.iter().copied())
}

/// Like [`test_role`], but last updated an hour ago.
pub fn stale_role(id: &str, permissions: &[&str]) -> Role {
    let mut role = test_role(id, permissions);
    role.updated_at -= chrono::Duration::hours(1);
    role
}

pub fn repository(roles: Vec<Role>) -> InMemoryRepository {
    InMemoryRepository::new(test_catalog(), roles)
}

pub async fn open_session(roles: Vec<Role>) -> PermissionSession<InMemoryRepository> {
    open_session_with(roles, BulkRemoveMode::Lossy).await
}

pub async fn open_session_with(
    roles: Vec<Role>,
    mode: BulkRemoveMode,
) -> PermissionSession<InMemoryRepository> {
    let config = EngineConfig::default().with_bulk_remove(mode);
    match PermissionSession::open(repository(roles), config).await {
        Ok(session) => session,
        Err(e) => panic!("failed to open session: {}", e),
    }
}

pub fn permission_ids(role: &Role) -> Vec<&str> {
    role.permissions.iter().map(|id| id.as_str()).collect()
}

//! Permission constants for the print-on-demand dashboard.
//!
//! This module provides centralized permission id and module name constants, and
//! the [`DEFAULT_CATALOG`] table the CLI seeds a fresh data directory with. The
//! engine itself never depends on these values: any catalog loaded at runtime is
//! authoritative.
//!
//! # Example
//!
//! ```ignore
//! use podash_core::permissions;
//!
//! if session.has_permission(&role_id, &permissions::ORDERS_UPDATE.into())? {
//!     // Edit order
//! }
//! ```

// =============================================================================
// Modules
// =============================================================================

pub const MODULE_ACCOUNTS: &str = "Accounts";
pub const MODULE_STORES: &str = "Stores";
pub const MODULE_ORDERS: &str = "Orders";
pub const MODULE_CONTENT: &str = "Content";
pub const MODULE_IDEAS: &str = "Ideas";
pub const MODULE_PRODUCTS: &str = "Products";
pub const MODULE_USERS: &str = "Users";
pub const MODULE_ROLES: &str = "Roles";

// =============================================================================
// Accounts permissions
// =============================================================================

/// Permission to connect marketplace accounts
pub const ACCOUNTS_CREATE: &str = "accounts:create";
/// Permission to read marketplace accounts
pub const ACCOUNTS_READ: &str = "accounts:read";
/// Permission to update marketplace accounts
pub const ACCOUNTS_UPDATE: &str = "accounts:update";
/// Permission to disconnect marketplace accounts
pub const ACCOUNTS_DELETE: &str = "accounts:delete";

// =============================================================================
// Stores permissions
// =============================================================================

pub const STORES_CREATE: &str = "stores:create";
pub const STORES_READ: &str = "stores:read";
pub const STORES_UPDATE: &str = "stores:update";
pub const STORES_DELETE: &str = "stores:delete";

// =============================================================================
// Orders permissions
// =============================================================================

/// Permission to read orders
pub const ORDERS_READ: &str = "orders:read";
/// Permission to edit orders and move them through fulfilment statuses
pub const ORDERS_UPDATE: &str = "orders:update";
/// Permission to cancel orders
pub const ORDERS_DELETE: &str = "orders:delete";

// =============================================================================
// Content permissions
// =============================================================================

pub const CONTENT_CREATE: &str = "content:create";
pub const CONTENT_READ: &str = "content:read";
pub const CONTENT_UPDATE: &str = "content:update";
pub const CONTENT_DELETE: &str = "content:delete";

// =============================================================================
// Ideas permissions
// =============================================================================

pub const IDEAS_CREATE: &str = "ideas:create";
pub const IDEAS_READ: &str = "ideas:read";
pub const IDEAS_UPDATE: &str = "ideas:update";
pub const IDEAS_DELETE: &str = "ideas:delete";

// =============================================================================
// Products permissions
// =============================================================================

pub const PRODUCTS_CREATE: &str = "products:create";
pub const PRODUCTS_READ: &str = "products:read";
pub const PRODUCTS_UPDATE: &str = "products:update";
pub const PRODUCTS_DELETE: &str = "products:delete";

// =============================================================================
// Users permissions
// =============================================================================

/// Permission to invite users
pub const USERS_CREATE: &str = "users:create";
/// Permission to read users
pub const USERS_READ: &str = "users:read";
/// Permission to update users
pub const USERS_UPDATE: &str = "users:update";
/// Permission to remove users
pub const USERS_DELETE: &str = "users:delete";

// =============================================================================
// Roles permissions
// =============================================================================

/// Permission to read roles and their permission sets
pub const ROLES_READ: &str = "roles:read";
/// Permission to grant and revoke role permissions
pub const ROLES_UPDATE: &str = "roles:update";

/// A row of the default catalog: `(id, display name, module, actions)`.
pub type CatalogEntry = (&'static str, &'static str, &'static str, &'static [&'static str]);

/// The catalog a fresh dashboard installation starts with, in display order.
pub const DEFAULT_CATALOG: &[CatalogEntry] = &[
    (ACCOUNTS_CREATE, "Connect accounts", MODULE_ACCOUNTS, &["create"]),
    (ACCOUNTS_READ, "View accounts", MODULE_ACCOUNTS, &["read"]),
    (ACCOUNTS_UPDATE, "Edit accounts", MODULE_ACCOUNTS, &["update"]),
    (ACCOUNTS_DELETE, "Disconnect accounts", MODULE_ACCOUNTS, &["delete"]),
    (STORES_CREATE, "Create stores", MODULE_STORES, &["create"]),
    (STORES_READ, "View stores", MODULE_STORES, &["read"]),
    (STORES_UPDATE, "Edit stores", MODULE_STORES, &["update"]),
    (STORES_DELETE, "Delete stores", MODULE_STORES, &["delete"]),
    (ORDERS_READ, "View orders", MODULE_ORDERS, &["read"]),
    (ORDERS_UPDATE, "Process orders", MODULE_ORDERS, &["read", "update"]),
    (ORDERS_DELETE, "Cancel orders", MODULE_ORDERS, &["delete"]),
    (CONTENT_CREATE, "Create content", MODULE_CONTENT, &["create"]),
    (CONTENT_READ, "View content", MODULE_CONTENT, &["read"]),
    (CONTENT_UPDATE, "Edit content", MODULE_CONTENT, &["update"]),
    (CONTENT_DELETE, "Delete content", MODULE_CONTENT, &["delete"]),
    (IDEAS_CREATE, "Submit ideas", MODULE_IDEAS, &["create"]),
    (IDEAS_READ, "View ideas", MODULE_IDEAS, &["read"]),
    (IDEAS_UPDATE, "Review ideas", MODULE_IDEAS, &["update"]),
    (IDEAS_DELETE, "Delete ideas", MODULE_IDEAS, &["delete"]),
    (PRODUCTS_CREATE, "Create products", MODULE_PRODUCTS, &["create"]),
    (PRODUCTS_READ, "View products", MODULE_PRODUCTS, &["read"]),
    (PRODUCTS_UPDATE, "Edit products", MODULE_PRODUCTS, &["update"]),
    (PRODUCTS_DELETE, "Delete products", MODULE_PRODUCTS, &["delete"]),
    (USERS_CREATE, "Invite users", MODULE_USERS, &["create"]),
    (USERS_READ, "View users", MODULE_USERS, &["read"]),
    (USERS_UPDATE, "Edit users", MODULE_USERS, &["update"]),
    (USERS_DELETE, "Remove users", MODULE_USERS, &["delete"]),
    (ROLES_READ, "View roles", MODULE_ROLES, &["read"]),
    (ROLES_UPDATE, "Manage role permissions", MODULE_ROLES, &["read", "update"]),
];

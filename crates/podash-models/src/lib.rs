//! # Podash Models
//!
//! Domain models and DTOs for the Podash permission engine.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed string identities
//! - [`permissions`]: Catalog permissions and the derived [`ModuleStatus`]
//! - [`roles`]: Roles and the role administration DTOs
//!
//! # Example
//!
//! ```ignore
//! use podash_models::{Permission, Role, ModuleStatus};
//!
//! let permission = Permission::new("orders:read", "View orders", "Orders");
//! let role = Role::new("Support").with_permissions([permission.id.clone()]);
//! ```

pub mod ids;
pub mod permissions;
pub mod roles;

// Re-export commonly used types at crate root for convenience
pub use ids::{PermissionId, RoleId};

pub use permissions::{ModuleStatus, Permission, PermissionAction};

pub use roles::{CreateRoleDto, Role, RoleWithPermissions, UpdateRoleDto};

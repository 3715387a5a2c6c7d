pub mod permissions;
pub mod roles;

pub use self::permissions::{ModuleIndex, PermissionCatalog};
pub use self::roles::{ChangeTracker, RoleStore};

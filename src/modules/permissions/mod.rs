pub mod aggregation;
pub mod catalog;

pub use aggregation::{has_permission, module_status, module_statuses};
pub use catalog::{Module, ModuleIndex, PermissionCatalog};

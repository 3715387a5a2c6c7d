pub mod service;
pub mod store;
pub mod tracker;

pub use service::{Mutation, revoke_module_grants, toggle_module_permissions, toggle_permission};
pub use store::{Provenance, RoleStore};
pub use tracker::ChangeTracker;

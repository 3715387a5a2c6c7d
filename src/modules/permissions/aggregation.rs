//! Read-side aggregation: membership tests and per-module tri-state status.
//!
//! Every function here is a pure function of the role and the module index it is
//! given, so repeated calls without an intervening mutation agree.

use super::catalog::{Module, ModuleIndex};
use podash_models::{ModuleStatus, Role};

pub fn has_permission(role: &Role, permission_id: &str) -> bool {
    role.permissions.contains(permission_id)
}

/// Status of one module for `role`. Empty modules are `None`, never vacuously `All`.
pub fn status_of(role: &Role, module: &Module) -> ModuleStatus {
    let held = module
        .permission_ids()
        .iter()
        .filter(|id| role.permissions.contains(*id))
        .count();
    ModuleStatus::from_counts(held, module.len())
}

/// Status of the named module; unknown modules are `None`.
pub fn module_status(role: &Role, modules: &ModuleIndex, module: &str) -> ModuleStatus {
    modules
        .get(module)
        .map_or(ModuleStatus::None, |module| status_of(role, module))
}

/// Status of every module, in catalog order.
pub fn module_statuses<'a>(role: &Role, modules: &'a ModuleIndex) -> Vec<(&'a str, ModuleStatus)> {
    modules
        .iter()
        .map(|module| (module.name(), status_of(role, module)))
        .collect()
}

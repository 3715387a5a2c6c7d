//! Mutation engine.
//!
//! Each operation takes the current role by reference and returns a [`Mutation`]
//! holding the updated copy, leaving every other role untouched by construction.
//! Inputs the catalog does not know (a foreign permission id, an unknown module)
//! yield `None`: the caller's state is left exactly as it was.
//!
//! # Bulk revoke is lossy
//!
//! [`toggle_module_permissions`] with `checked = false` strips every permission of
//! the module, including ones the role held before any bulk check and ones granted
//! one by one. Checking and then unchecking a module therefore does not restore a
//! partially granted module; it empties it. [`revoke_module_grants`] is the strict
//! alternative and only removes what a bulk check granted.

use crate::modules::permissions::{ModuleIndex, PermissionCatalog};
use podash_models::{PermissionId, Role};
use std::collections::BTreeSet;

/// Result of a successful mutation: the updated role and the ids that changed.
#[derive(Debug, Clone)]
pub struct Mutation {
    pub role: Role,
    pub granted: BTreeSet<PermissionId>,
    pub revoked: BTreeSet<PermissionId>,
}

impl Mutation {
    fn new(role: Role) -> Self {
        Self {
            role,
            granted: BTreeSet::new(),
            revoked: BTreeSet::new(),
        }
    }

    /// True when the permission set did not change (e.g. re-checking a full module).
    pub fn is_noop(&self) -> bool {
        self.granted.is_empty() && self.revoked.is_empty()
    }

    fn finish(mut self) -> Self {
        self.role.touch();
        self
    }
}

// ============ Single Permission ============

/// Revokes `permission_id` if the role holds it, grants it otherwise.
pub fn toggle_permission(
    role: &Role,
    catalog: &PermissionCatalog,
    permission_id: &str,
) -> Option<Mutation> {
    let permission = catalog.get(permission_id)?;
    let mut mutation = Mutation::new(role.clone());

    if mutation.role.permissions.remove(&permission.id) {
        mutation.revoked.insert(permission.id.clone());
    } else {
        mutation.role.permissions.insert(permission.id.clone());
        mutation.granted.insert(permission.id.clone());
    }

    Some(mutation.finish())
}

// ============ Whole Module ============

/// `checked = true`: role ∪ module. `checked = false`: role \ module (lossy).
pub fn toggle_module_permissions(
    role: &Role,
    modules: &ModuleIndex,
    module: &str,
    checked: bool,
) -> Option<Mutation> {
    let module = modules.get(module)?;
    let mut mutation = Mutation::new(role.clone());

    for id in module.permission_ids() {
        if checked {
            if mutation.role.permissions.insert(id.clone()) {
                mutation.granted.insert(id.clone());
            }
        } else if mutation.role.permissions.remove(id) {
            mutation.revoked.insert(id.clone());
        }
    }

    Some(mutation.finish())
}

/// Strict bulk revoke: removes only module permissions that are also in `granted`.
///
/// Removal is filtered by the module's id set from the index, never by
/// re-reading a permission's `module` tag.
pub fn revoke_module_grants(
    role: &Role,
    modules: &ModuleIndex,
    module: &str,
    granted: &BTreeSet<PermissionId>,
) -> Option<Mutation> {
    let module = modules.get(module)?;
    let mut mutation = Mutation::new(role.clone());

    for id in module.permission_ids().intersection(granted) {
        if mutation.role.permissions.remove(id) {
            mutation.revoked.insert(id.clone());
        }
    }

    Some(mutation.finish())
}

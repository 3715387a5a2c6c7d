//! In-memory role store.
//!
//! Holds the session's roles in load order and, per role, the permission ids a
//! bulk module check granted that have not been touched individually since. That
//! provenance is what strict bulk revoke consults.

use super::service::Mutation;
use anyhow::anyhow;
use podash_core::AppError;
use podash_models::{PermissionId, Role, RoleId};
use std::collections::{BTreeSet, HashMap};

/// How a mutation came about, for provenance bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Single-permission toggle; the permission is no longer bulk-owned.
    Individual,
    /// Bulk module check; newly granted ids become bulk-owned.
    BulkGrant,
    /// Bulk module uncheck; revoked ids stop being bulk-owned.
    BulkRevoke,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleStore {
    roles: Vec<Role>,
    positions: HashMap<RoleId, usize>,
    bulk_grants: HashMap<RoleId, BTreeSet<PermissionId>>,
}

impl RoleStore {
    /// Builds a store, rejecting duplicate role ids.
    pub fn new(roles: Vec<Role>) -> Result<Self, AppError> {
        let mut store = Self::default();
        for role in roles {
            store.insert(role)?;
        }
        Ok(store)
    }

    pub fn get(&self, role_id: &str) -> Option<&Role> {
        self.positions
            .get(role_id)
            .map(|&position| &self.roles[position])
    }

    pub fn contains(&self, role_id: &str) -> bool {
        self.positions.contains_key(role_id)
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn insert(&mut self, role: Role) -> Result<&Role, AppError> {
        if self.contains(role.id.as_str()) {
            return Err(AppError::conflict(anyhow!(
                "A role with id {} already exists",
                role.id
            )));
        }

        let position = self.roles.len();
        self.positions.insert(role.id.clone(), position);
        self.roles.push(role);
        Ok(&self.roles[position])
    }

    /// Replaces the stored role with the same id. Returns `None` for an unknown id.
    pub fn replace(&mut self, role: Role) -> Option<&Role> {
        let position = *self.positions.get(role.id.as_str())?;
        self.roles[position] = role;
        Some(&self.roles[position])
    }

    /// Stores the mutated role and updates bulk-grant provenance.
    pub fn apply(&mut self, mutation: Mutation, provenance: Provenance) -> Option<&Role> {
        let Mutation {
            role,
            granted,
            revoked,
        } = mutation;
        let role_id = role.id.clone();
        let position = *self.positions.get(role_id.as_str())?;

        let owned = self.bulk_grants.entry(role_id.clone()).or_default();
        match provenance {
            Provenance::BulkGrant => owned.extend(granted),
            Provenance::Individual | Provenance::BulkRevoke => {
                owned.retain(|id| !granted.contains(id) && !revoked.contains(id));
            }
        }
        if owned.is_empty() {
            self.bulk_grants.remove(&role_id);
        }

        self.roles[position] = role;
        Some(&self.roles[position])
    }

    /// Permission ids of `role_id` still owned by a bulk check.
    pub fn bulk_grants(&self, role_id: &str) -> BTreeSet<PermissionId> {
        self.bulk_grants.get(role_id).cloned().unwrap_or_default()
    }
}

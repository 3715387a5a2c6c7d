use chrono::{DateTime, Utc};
use podash_models::RoleId;
use std::collections::BTreeSet;

/// Tracks which roles carry uncommitted edits.
///
/// The session is dirty while any role is. Only a confirmed commit or an
/// explicit discard clears it.
#[derive(Debug, Clone, Default)]
pub struct ChangeTracker {
    dirty: BTreeSet<RoleId>,
    last_committed_at: Option<DateTime<Utc>>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_dirty(&mut self, role_id: &RoleId) {
        self.dirty.insert(role_id.clone());
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn is_role_dirty(&self, role_id: &str) -> bool {
        self.dirty.contains(role_id)
    }

    pub fn dirty_roles(&self) -> impl Iterator<Item = &RoleId> {
        self.dirty.iter()
    }

    pub fn len(&self) -> usize {
        self.dirty.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirty.is_empty()
    }

    /// Records a confirmed commit.
    pub fn mark_committed(&mut self, at: DateTime<Utc>) {
        self.dirty.clear();
        self.last_committed_at = Some(at);
    }

    /// Forgets pending edits without recording a commit.
    pub fn reset(&mut self) {
        self.dirty.clear();
    }

    pub fn last_committed_at(&self) -> Option<DateTime<Utc>> {
        self.last_committed_at
    }
}

use super::{PermissionRepository, RepositoryError};
use podash_core::AppError;
use podash_models::{Permission, Role};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
#[cfg(any(test, feature = "test-utils"))]
use std::sync::atomic::AtomicBool;
use tracing::debug;

/// Repository holding the catalog and committed roles in process memory.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    catalog: Vec<Permission>,
    roles: Mutex<Vec<Role>>,
    commits: AtomicUsize,
    #[cfg(any(test, feature = "test-utils"))]
    fail_commits: AtomicBool,
}

impl InMemoryRepository {
    pub fn new(catalog: Vec<Permission>, roles: Vec<Role>) -> Self {
        Self {
            catalog,
            roles: Mutex::new(roles),
            ..Default::default()
        }
    }

    /// Snapshot of the roles as last committed.
    pub fn committed_roles(&self) -> Vec<Role> {
        self.lock_roles().clone()
    }

    /// Number of successful commits.
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    /// Makes every following commit fail until switched off again.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn fail_commits(&self, fail: bool) {
        self.fail_commits.store(fail, Ordering::SeqCst);
    }

    fn lock_roles(&self) -> std::sync::MutexGuard<'_, Vec<Role>> {
        self.roles.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[cfg(any(test, feature = "test-utils"))]
    fn check_failure(&self) -> Result<(), RepositoryError> {
        if self.fail_commits.load(Ordering::SeqCst) {
            return Err(RepositoryError::Rejected(
                "in-memory repository is set to fail".to_string(),
            ));
        }
        Ok(())
    }

    #[cfg(not(any(test, feature = "test-utils")))]
    fn check_failure(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

impl PermissionRepository for InMemoryRepository {
    async fn load_catalog(&self) -> Result<Vec<Permission>, AppError> {
        Ok(self.catalog.clone())
    }

    async fn load_roles(&self) -> Result<Vec<Role>, AppError> {
        Ok(self.committed_roles())
    }

    async fn commit(&self, roles: &[Role]) -> Result<(), AppError> {
        self.check_failure().map_err(AppError::storage)?;

        let mut stored = self.lock_roles();
        upsert_roles(&mut stored, roles);
        self.commits.fetch_add(1, Ordering::SeqCst);

        debug!(roles = roles.len(), "Committed roles to memory");
        Ok(())
    }
}

/// Replaces roles with matching ids and appends the rest, keeping stored order.
pub(crate) fn upsert_roles(stored: &mut Vec<Role>, roles: &[Role]) {
    for role in roles {
        match stored.iter_mut().find(|existing| existing.id == role.id) {
            Some(existing) => *existing = role.clone(),
            None => stored.push(role.clone()),
        }
    }
}

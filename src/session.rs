//! Permission editing session.
//!
//! A [`PermissionSession`] owns the loaded catalog, the working [`RoleStore`], the
//! baseline it was loaded from, and the [`ChangeTracker`]. Every read and mutation
//! is synchronous and in memory; only [`PermissionSession::commit`] talks to the
//! repository.
//!
//! # Example
//!
//! ```no_run
//! use podash::persistence::InMemoryRepository;
//! use podash::session::PermissionSession;
//! use podash_config::EngineConfig;
//!
//! # async fn run(repo: InMemoryRepository) -> Result<(), podash_core::AppError> {
//! let mut session = PermissionSession::open(repo, EngineConfig::default()).await?;
//! session.toggle_module_permissions("support", "Orders", true)?;
//! session.commit().await?;
//! # Ok(())
//! # }
//! ```

use crate::modules::permissions::{self, ModuleIndex, PermissionCatalog};
use crate::modules::roles::{self, ChangeTracker, Mutation, Provenance, RoleStore};
use crate::persistence::PermissionRepository;
use anyhow::anyhow;
use chrono::{DateTime, Utc};
use podash_config::{BulkRemoveMode, EngineConfig};
use podash_core::AppError;
use podash_models::{
    CreateRoleDto, ModuleStatus, Role, RoleId, RoleWithPermissions, UpdateRoleDto,
};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Outcome of a successful commit.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitSummary {
    /// Roles handed to the repository, in id order. Empty for a clean session.
    pub committed: Vec<RoleId>,
    pub committed_at: Option<DateTime<Utc>>,
}

pub struct PermissionSession<R> {
    repository: R,
    catalog: PermissionCatalog,
    store: RoleStore,
    baseline: RoleStore,
    tracker: ChangeTracker,
    config: EngineConfig,
}

impl<R: PermissionRepository> PermissionSession<R> {
    /// Loads catalog and roles from `repository` and validates them against each other.
    #[instrument(skip(repository))]
    pub async fn open(repository: R, config: EngineConfig) -> Result<Self, AppError> {
        let catalog = PermissionCatalog::new(repository.load_catalog().await?)?;
        let roles = repository.load_roles().await?;

        for role in &roles {
            catalog.validate_role(role)?;
        }
        let store = RoleStore::new(roles)?;

        info!(
            permissions = catalog.len(),
            modules = catalog.modules().len(),
            roles = store.len(),
            bulk_remove = %config.bulk_remove,
            "Permission session opened"
        );

        Ok(Self {
            repository,
            catalog,
            baseline: store.clone(),
            store,
            tracker: ChangeTracker::new(),
            config,
        })
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ============ Reads ============

    pub fn catalog(&self) -> &PermissionCatalog {
        &self.catalog
    }

    pub fn modules(&self) -> &ModuleIndex {
        self.catalog.modules()
    }

    pub fn roles(&self) -> &[Role] {
        self.store.roles()
    }

    pub fn role(&self, role_id: &str) -> Result<&Role, AppError> {
        self.store
            .get(role_id)
            .ok_or_else(|| AppError::not_found(anyhow!("Role not found: {}", role_id)))
    }

    pub fn role_with_permissions(&self, role_id: &str) -> Result<RoleWithPermissions, AppError> {
        let role = self.role(role_id)?;
        Ok(RoleWithPermissions::new(role, self.catalog.resolve(role)))
    }

    pub fn has_permission(&self, role_id: &str, permission_id: &str) -> Result<bool, AppError> {
        Ok(permissions::has_permission(self.role(role_id)?, permission_id))
    }

    /// Tri-state status of `module` for the role. Unknown modules report `None`.
    pub fn module_status(&self, role_id: &str, module: &str) -> Result<ModuleStatus, AppError> {
        Ok(permissions::module_status(
            self.role(role_id)?,
            self.catalog.modules(),
            module,
        ))
    }

    /// Status of every module, in catalog order.
    pub fn module_statuses(&self, role_id: &str) -> Result<Vec<(&str, ModuleStatus)>, AppError> {
        Ok(permissions::module_statuses(
            self.role(role_id)?,
            self.catalog.modules(),
        ))
    }

    // ============ Mutations ============

    #[instrument(skip(self))]
    pub fn toggle_permission(&mut self, role_id: &str, permission_id: &str) -> Result<&Role, AppError> {
        let role = self.role(role_id)?;
        if !self.catalog.contains(permission_id) {
            warn!("Rejected toggle of unknown permission");
            return Err(AppError::not_found(anyhow!(
                "Permission not found: {}",
                permission_id
            )));
        }

        let mutation = roles::toggle_permission(role, &self.catalog, permission_id)
            .ok_or_else(|| AppError::internal(anyhow!("Toggle produced no mutation")))?;
        debug!(
            granted = mutation.granted.len(),
            revoked = mutation.revoked.len(),
            "Toggled permission"
        );
        self.apply(mutation, Provenance::Individual)
    }

    /// Checks (`checked = true`) or unchecks every permission of `module`.
    ///
    /// Unchecking follows the configured [`BulkRemoveMode`].
    #[instrument(skip(self), fields(mode = %self.config.bulk_remove))]
    pub fn toggle_module_permissions(
        &mut self,
        role_id: &str,
        module: &str,
        checked: bool,
    ) -> Result<&Role, AppError> {
        let role = self.role(role_id)?;
        let modules = self.catalog.modules();
        if modules.get(module).is_none() {
            warn!("Rejected toggle of unknown module");
            return Err(AppError::not_found(anyhow!("Module not found: {}", module)));
        }

        let (mutation, provenance) = match (checked, self.config.bulk_remove) {
            (true, _) => (
                roles::toggle_module_permissions(role, modules, module, true),
                Provenance::BulkGrant,
            ),
            (false, BulkRemoveMode::Lossy) => (
                roles::toggle_module_permissions(role, modules, module, false),
                Provenance::BulkRevoke,
            ),
            (false, BulkRemoveMode::Strict) => (
                roles::revoke_module_grants(role, modules, module, &self.store.bulk_grants(role_id)),
                Provenance::BulkRevoke,
            ),
        };
        let mutation =
            mutation.ok_or_else(|| AppError::internal(anyhow!("Module toggle produced no mutation")))?;

        debug!(
            granted = mutation.granted.len(),
            revoked = mutation.revoked.len(),
            "Toggled module permissions"
        );
        self.apply(mutation, provenance)
    }

    fn apply(&mut self, mutation: Mutation, provenance: Provenance) -> Result<&Role, AppError> {
        let role_id = mutation.role.id.clone();
        if self.store.apply(mutation, provenance).is_none() {
            return Err(AppError::not_found(anyhow!("Role not found: {}", role_id)));
        }
        self.tracker.mark_dirty(&role_id);
        self.role(role_id.as_str())
    }

    // ============ Role Administration ============

    #[instrument(skip(self, dto), fields(name = %dto.name))]
    pub fn create_role(&mut self, dto: CreateRoleDto) -> Result<&Role, AppError> {
        dto.validate().map_err(|e| AppError::validation(&e))?;

        let permission_ids = dto.permission_ids.unwrap_or_default();
        if let Some(unknown) = permission_ids
            .iter()
            .find(|id| !self.catalog.contains(id.as_str()))
        {
            warn!(permission = %unknown, "Rejected role with unknown permission");
            return Err(AppError::not_found(anyhow!(
                "Permission not found: {}",
                unknown
            )));
        }

        let mut role = Role::new(dto.name.trim()).with_permissions(permission_ids);
        role.description = dto.description;
        role.color = dto.color;

        let role_id = role.id.clone();
        self.store.insert(role)?;
        self.tracker.mark_dirty(&role_id);
        info!(role_id = %role_id, "Created role");
        self.role(role_id.as_str())
    }

    #[instrument(skip(self, dto))]
    pub fn update_role(&mut self, role_id: &str, dto: UpdateRoleDto) -> Result<&Role, AppError> {
        dto.validate().map_err(|e| AppError::validation(&e))?;

        let mut role = self.role(role_id)?.clone();
        dto.apply_to(&mut role);
        role.touch();

        let id = role.id.clone();
        if self.store.replace(role).is_none() {
            return Err(AppError::not_found(anyhow!("Role not found: {}", role_id)));
        }
        self.tracker.mark_dirty(&id);
        debug!("Updated role metadata");
        self.role(role_id)
    }

    // ============ Change Tracking ============

    pub fn is_dirty(&self) -> bool {
        self.tracker.is_dirty()
    }

    pub fn is_role_dirty(&self, role_id: &str) -> bool {
        self.tracker.is_role_dirty(role_id)
    }

    pub fn dirty_roles(&self) -> Vec<&RoleId> {
        self.tracker.dirty_roles().collect()
    }

    pub fn last_committed_at(&self) -> Option<DateTime<Utc>> {
        self.tracker.last_committed_at()
    }

    /// Persists every dirty role in a single repository call.
    ///
    /// On failure the session stays dirty and the working state is untouched, so
    /// the commit can be retried as is.
    #[instrument(skip(self), fields(dirty = self.tracker.len()))]
    pub async fn commit(&mut self) -> Result<CommitSummary, AppError> {
        if !self.tracker.is_dirty() {
            debug!("Nothing to commit");
            return Ok(CommitSummary {
                committed: Vec::new(),
                committed_at: self.tracker.last_committed_at(),
            });
        }

        let committed: Vec<RoleId> = self.tracker.dirty_roles().cloned().collect();
        let roles: Vec<Role> = committed
            .iter()
            .filter_map(|id| self.store.get(id.as_str()).cloned())
            .collect();

        if let Err(err) = self.repository.commit(&roles).await {
            warn!(error = %err, retryable = err.is_retryable(), "Commit failed");
            return Err(err);
        }

        let now = Utc::now();
        self.tracker.mark_committed(now);
        self.baseline = self.store.clone();
        info!(roles = committed.len(), "Committed roles");

        Ok(CommitSummary {
            committed,
            committed_at: Some(now),
        })
    }

    /// Drops uncommitted edits and returns to the last committed state.
    #[instrument(skip(self), fields(dirty = self.tracker.len()))]
    pub fn discard(&mut self) {
        self.store = self.baseline.clone();
        self.tracker.reset();
        info!("Discarded uncommitted changes");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::InMemoryRepository;
    use podash_core::ErrorKind;
    use podash_models::{Permission, PermissionId};

    fn catalog() -> Vec<Permission> {
        vec![
            Permission::new("read-orders", "View orders", "Orders"),
            Permission::new("write-orders", "Process orders", "Orders"),
            Permission::new("read-users", "View users", "Users"),
        ]
    }

    async fn session(roles: Vec<Role>) -> PermissionSession<InMemoryRepository> {
        let repo = InMemoryRepository::new(catalog(), roles);
        PermissionSession::open(repo, EngineConfig::default())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_open_rejects_unknown_permission_reference() {
        let role = Role::new("Ghost").with_id("ghost").with_permissions(["delete-all"]);
        let repo = InMemoryRepository::new(catalog(), vec![role]);

        let err = PermissionSession::open(repo, EngineConfig::default())
            .await
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::Unprocessable);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found_and_not_dirty() {
        let mut session = session(vec![Role::new("Support").with_id("support")]).await;

        let err = session.toggle_permission("support", "launch-rockets").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = session
            .toggle_module_permissions("support", "Rockets", true)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = session.toggle_permission("nobody", "read-orders").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        assert!(!session.is_dirty());
    }

    #[tokio::test]
    async fn test_create_role_validates_name() {
        let mut session = session(vec![]).await;
        let dto = CreateRoleDto {
            name: "   ".to_string(),
            description: None,
            color: None,
            permission_ids: None,
        };

        let err = session.create_role(dto).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unprocessable);
        assert!(err.to_string().contains("Name must not be blank"));
        assert!(session.roles().is_empty());
    }

    #[tokio::test]
    async fn test_create_role_rejects_unknown_permission() {
        let mut session = session(vec![]).await;
        let dto = CreateRoleDto {
            name: "Packer".to_string(),
            description: None,
            color: None,
            permission_ids: Some(vec![PermissionId::from("read-orders"), "nope".into()]),
        };

        let err = session.create_role(dto).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(!session.is_dirty());
    }

    #[tokio::test]
    async fn test_create_then_commit() {
        let mut session = session(vec![]).await;
        let dto = CreateRoleDto {
            name: " Packer ".to_string(),
            description: Some("Warehouse".to_string()),
            color: Some("teal".to_string()),
            permission_ids: Some(vec!["read-orders".into()]),
        };

        let role_id = session.create_role(dto).unwrap().id.clone();
        assert_eq!(session.role(role_id.as_str()).unwrap().name, "Packer");
        assert!(session.is_role_dirty(role_id.as_str()));

        let summary = session.commit().await.unwrap();
        assert_eq!(summary.committed, vec![role_id]);
        assert_eq!(session.repository().committed_roles().len(), 1);
    }

    #[tokio::test]
    async fn test_update_role_keeps_permissions() {
        let role = Role::new("Support")
            .with_id("support")
            .with_permissions(["read-orders"]);
        let mut session = session(vec![role]).await;

        let dto = UpdateRoleDto {
            name: Some("Customer Care".to_string()),
            ..Default::default()
        };
        let updated = session.update_role("support", dto).unwrap();

        assert_eq!(updated.name, "Customer Care");
        assert!(updated.permissions.contains("read-orders"));
        assert!(session.is_dirty());
    }

    #[tokio::test]
    async fn test_clean_commit_skips_repository() {
        let mut session = session(vec![Role::new("Support").with_id("support")]).await;

        let summary = session.commit().await.unwrap();

        assert!(summary.committed.is_empty());
        assert_eq!(session.repository().commit_count(), 0);
    }

    #[tokio::test]
    async fn test_discard_restores_baseline() {
        let mut session = session(vec![Role::new("Support").with_id("support")]).await;
        session
            .toggle_module_permissions("support", "Orders", true)
            .unwrap();

        session.discard();

        assert!(!session.is_dirty());
        assert_eq!(
            session.module_status("support", "Orders").unwrap(),
            ModuleStatus::None
        );
    }
}

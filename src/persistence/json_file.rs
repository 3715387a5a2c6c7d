//! JSON file repository.
//!
//! Layout of the data directory:
//!
//! ```text
//! storage/data/
//! ├── catalog.json   # array of Permission, in display order
//! └── roles.json     # array of Role
//! ```
//!
//! A missing `roles.json` loads as an empty role store. A commit rewrites
//! `roles.json` through a temporary file renamed over the original, so readers
//! see either the old or the new file, never a partial one.

use super::memory::upsert_roles;
use super::{PermissionRepository, RepositoryError};
use podash_config::StorageConfig;
use podash_core::AppError;
use podash_models::{Permission, Role};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    catalog_path: PathBuf,
    roles_path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(catalog_path: impl Into<PathBuf>, roles_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            roles_path: roles_path.into(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.catalog_path(), config.roles_path())
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    pub fn roles_path(&self) -> &Path {
        &self.roles_path
    }

    /// Overwrites the catalog file. Used when seeding a data directory.
    #[instrument(skip(self, permissions), fields(path = %self.catalog_path.display()))]
    pub async fn write_catalog(&self, permissions: &[Permission]) -> Result<(), AppError> {
        write_json_atomic(&self.catalog_path, &permissions)
            .await
            .map_err(AppError::storage)?;
        info!(permissions = permissions.len(), "Wrote permission catalog");
        Ok(())
    }

    /// Overwrites the roles file, dropping roles not in `roles`.
    #[instrument(skip(self, roles), fields(path = %self.roles_path.display()))]
    pub async fn write_roles(&self, roles: &[Role]) -> Result<(), AppError> {
        write_json_atomic(&self.roles_path, &roles)
            .await
            .map_err(AppError::storage)?;
        info!(roles = roles.len(), "Wrote roles");
        Ok(())
    }

    async fn read_roles(&self) -> Result<Vec<Role>, RepositoryError> {
        match read_json(&self.roles_path).await {
            Err(RepositoryError::Io { source, .. }) if source.kind() == IoErrorKind::NotFound => {
                debug!(path = %self.roles_path.display(), "No roles file yet");
                Ok(Vec::new())
            }
            other => other,
        }
    }
}

impl PermissionRepository for JsonFileRepository {
    async fn load_catalog(&self) -> Result<Vec<Permission>, AppError> {
        let catalog: Vec<Permission> = read_json(&self.catalog_path)
            .await
            .map_err(AppError::storage)?;
        debug!(permissions = catalog.len(), "Loaded catalog file");
        Ok(catalog)
    }

    async fn load_roles(&self) -> Result<Vec<Role>, AppError> {
        let roles = self.read_roles().await.map_err(AppError::storage)?;
        debug!(roles = roles.len(), "Loaded roles file");
        Ok(roles)
    }

    async fn commit(&self, roles: &[Role]) -> Result<(), AppError> {
        let mut stored = self.read_roles().await.map_err(AppError::storage)?;
        upsert_roles(&mut stored, roles);
        write_json_atomic(&self.roles_path, &stored)
            .await
            .map_err(AppError::storage)?;
        debug!(roles = roles.len(), total = stored.len(), "Committed roles file");
        Ok(())
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, RepositoryError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| RepositoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_slice(&bytes).map_err(|source| RepositoryError::Json {
        path: path.to_path_buf(),
        source,
    })
}

async fn write_json_atomic<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), RepositoryError> {
    let io_error = |source: std::io::Error| RepositoryError::Io {
        path: path.to_path_buf(),
        source,
    };

    let json = serde_json::to_vec_pretty(value).map_err(|source| RepositoryError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
    }

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, json).await.map_err(io_error)?;
    tokio::fs::rename(&tmp, path).await.map_err(io_error)?;
    Ok(())
}

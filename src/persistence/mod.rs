//! Persistence boundary.
//!
//! The engine never performs I/O itself. A [`PermissionRepository`] supplies the
//! catalog and the initial roles when a session opens, and receives every dirty
//! role on an explicit commit. A commit either succeeds as a whole or fails as a
//! whole; retry policy belongs to the repository's caller.
//!
//! - [`memory`]: In-process repository, used by tests and embedders
//! - [`json_file`]: `catalog.json` + `roles.json` in a data directory

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileRepository;
pub use memory::InMemoryRepository;

use podash_core::AppError;
use podash_models::{Permission, Role};
use std::future::Future;
use std::path::PathBuf;

pub trait PermissionRepository: Send + Sync {
    /// Loads the full permission catalog. Called once per session.
    fn load_catalog(&self) -> impl Future<Output = Result<Vec<Permission>, AppError>> + Send;

    /// Loads the persisted roles.
    fn load_roles(&self) -> impl Future<Output = Result<Vec<Role>, AppError>> + Send;

    /// Persists `roles`, replacing stored roles with the same id.
    fn commit(&self, roles: &[Role]) -> impl Future<Output = Result<(), AppError>> + Send;
}

/// Error type for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Commit rejected: {0}")]
    Rejected(String),
}

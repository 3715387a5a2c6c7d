use std::env;
use std::path::PathBuf;

pub const CATALOG_FILE: &str = "catalog.json";
pub const ROLES_FILE: &str = "roles.json";

/// Where the JSON repository keeps the permission catalog and the role store.
///
/// - `PODASH_DATA_DIR`: data directory (default: `storage/data`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("storage/data"),
        }
    }
}

impl StorageConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    #[must_use]
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("PODASH_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(|dir| Self {
                data_dir: PathBuf::from(dir),
            })
            .unwrap_or_default()
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(CATALOG_FILE)
    }

    pub fn roles_path(&self) -> PathBuf {
        self.data_dir.join(ROLES_FILE)
    }
}

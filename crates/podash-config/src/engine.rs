//! Mutation engine configuration.
//!
//! # Configuration
//!
//! - `PERMISSION_BULK_REMOVE`: `lossy` (default) or `strict`
//!
//! # Bulk Remove Modes
//!
//! Unchecking a module in the role editor revokes permissions in bulk:
//!
//! - **lossy**: every permission in the module is revoked, however it was granted.
//!   This is what administrators of the dashboard have always seen.
//! - **strict**: only permissions that a bulk check granted during the current
//!   session, and that were not toggled individually afterwards, are revoked.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkRemoveMode {
    #[default]
    Lossy,
    Strict,
}

impl FromStr for BulkRemoveMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lossy" => Ok(Self::Lossy),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown bulk remove mode: {other}")),
        }
    }
}

impl fmt::Display for BulkRemoveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lossy => f.write_str("lossy"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub bulk_remove: BulkRemoveMode,
}

impl EngineConfig {
    /// Falls back to [`BulkRemoveMode::Lossy`] when the variable is unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Rejects a set but unparsable `PERMISSION_BULK_REMOVE`.
    pub fn try_from_env() -> Result<Self, String> {
        Self::try_from_vars(|key| env::var(key).ok())
    }

    #[must_use]
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::try_from_vars(lookup).unwrap_or_else(|e| {
            warn!(error = %e, "Invalid PERMISSION_BULK_REMOVE, using lossy");
            Self::default()
        })
    }

    pub fn try_from_vars<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bulk_remove = match lookup("PERMISSION_BULK_REMOVE") {
            Some(value) => value.parse()?,
            None => BulkRemoveMode::default(),
        };
        Ok(Self { bulk_remove })
    }

    #[must_use]
    pub fn with_bulk_remove(mut self, mode: BulkRemoveMode) -> Self {
        self.bulk_remove = mode;
        self
    }
}

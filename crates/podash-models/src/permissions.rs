//! Permission catalog models and the derived per-module status.

use crate::ids::PermissionId;
use podash_core::serde::deserialize_optional_string;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// CRUD verb a permission covers. Descriptive only; the engine never compares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionAction {
    Create,
    Read,
    Update,
    Delete,
}

impl PermissionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl FromStr for PermissionAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "create" => Ok(Self::Create),
            "read" => Ok(Self::Read),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            other => Err(format!("unknown permission action: {other}")),
        }
    }
}

impl fmt::Display for PermissionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog-defined capability. Only `id` carries identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    pub id: PermissionId,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    pub module: String,
    #[serde(default)]
    pub actions: BTreeSet<PermissionAction>,
}

impl Permission {
    pub fn new(
        id: impl Into<PermissionId>,
        name: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            module: module.into(),
            actions: BTreeSet::new(),
        }
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = PermissionAction>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }
}

/// Aggregate membership of a role's permissions within one module.
///
/// The UI layer maps `All` to a checked box, `Partial` to an indeterminate one,
/// and `None` to an empty one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleStatus {
    None,
    Partial,
    All,
}

impl ModuleStatus {
    /// Classifies `held` of `total` module permissions. An empty module is `None`.
    pub fn from_counts(held: usize, total: usize) -> Self {
        if held == 0 || total == 0 {
            Self::None
        } else if held >= total {
            Self::All
        } else {
            Self::Partial
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Self::Partial)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Partial => "partial",
            Self::All => "all",
        }
    }
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

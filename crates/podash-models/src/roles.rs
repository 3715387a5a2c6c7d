//! Role domain models and DTOs.
//!
//! A role owns a set of permission ids. The set is only ever changed through the
//! engine's mutation functions; the DTOs here cover the descriptive metadata that
//! role administration edits.

use crate::ids::{PermissionId, RoleId};
use crate::permissions::Permission;
use chrono::{DateTime, Utc};
use podash_core::serde::deserialize_optional_string;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    /// Display tag for the dashboard badge.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub color: Option<String>,
    #[serde(default)]
    pub permissions: BTreeSet<PermissionId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Creates an empty role with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: RoleId::generate(),
            name: name.into(),
            description: None,
            color: None,
            permissions: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_id(mut self, id: impl Into<RoleId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_permissions<I, P>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PermissionId>,
    {
        self.permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    /// Sets `updated_at` to now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Compares everything except `updated_at`.
    pub fn same_content(&self, other: &Role) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.description == other.description
            && self.color == other.color
            && self.permissions == other.permissions
            && self.created_at == other.created_at
    }
}

/// A role with its permission ids resolved against a catalog, in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleWithPermissions {
    pub id: RoleId,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub permissions: Vec<Permission>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RoleWithPermissions {
    pub fn new(role: &Role, permissions: Vec<Permission>) -> Self {
        Self {
            id: role.id.clone(),
            name: role.name.clone(),
            description: role.description.clone(),
            color: role.color.clone(),
            permissions,
            created_at: role.created_at,
            updated_at: role.updated_at,
        }
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Name must not be blank".into());
        return Err(error);
    }
    Ok(())
}

// DTOs

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoleDto {
    #[validate(
        length(
            min = 1,
            max = 100,
            message = "Name must be between 1 and 100 characters"
        ),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 32, message = "Color must not exceed 32 characters"))]
    pub color: Option<String>,
    /// Permission ids to grant at creation
    pub permission_ids: Option<Vec<PermissionId>>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRoleDto {
    #[validate(
        length(
            min = 1,
            max = 100,
            message = "Name must be between 1 and 100 characters"
        ),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 32, message = "Color must not exceed 32 characters"))]
    pub color: Option<String>,
}

impl UpdateRoleDto {
    /// Applies the provided fields; absent fields keep their current value.
    pub fn apply_to(self, role: &mut Role) {
        if let Some(name) = self.name {
            role.name = name.trim().to_string();
        }
        if let Some(description) = self.description {
            role.description = Some(description);
        }
        if let Some(color) = self.color {
            role.color = Some(color);
        }
    }
}

//! Catalog seeding.

use anyhow::anyhow;
use podash_core::AppError;
use podash_core::permissions::DEFAULT_CATALOG;
use podash_models::{Permission, PermissionAction};

/// Builds the dashboard's default catalog from the constant table in `podash-core`.
pub fn default_catalog() -> Result<Vec<Permission>, AppError> {
    DEFAULT_CATALOG
        .iter()
        .map(|(id, name, module, actions)| {
            let actions = actions
                .iter()
                .map(|action| {
                    action.parse::<PermissionAction>().map_err(|_| {
                        AppError::internal(anyhow!("Unknown action {} on {}", action, id))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(Permission::new(*id, *name, *module).with_actions(actions))
        })
        .collect()
}

//! Permission catalog and the module index derived from it.
//!
//! The catalog is loaded once per session and never mutated. Modules are not
//! stored anywhere: [`ModuleIndex::build`] groups the catalog by each
//! permission's `module` tag every time a catalog is constructed, so a reloaded
//! catalog can never be paired with a stale grouping.

use anyhow::anyhow;
use podash_core::AppError;
use podash_models::{Permission, PermissionId, Role};
use std::collections::{BTreeSet, HashMap};

/// The permissions sharing one `module` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    name: String,
    permissions: BTreeSet<PermissionId>,
}

impl Module {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn permission_ids(&self) -> &BTreeSet<PermissionId> {
        &self.permissions
    }

    pub fn contains(&self, permission_id: &str) -> bool {
        self.permissions.contains(permission_id)
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}

/// Modules in order of first appearance in the catalog.
#[derive(Debug, Clone, Default)]
pub struct ModuleIndex {
    modules: Vec<Module>,
    by_name: HashMap<String, usize>,
}

impl ModuleIndex {
    pub fn build(permissions: &[Permission]) -> Self {
        let mut index = Self::default();

        for permission in permissions {
            let position = match index.by_name.get(&permission.module) {
                Some(&position) => position,
                None => {
                    index.modules.push(Module {
                        name: permission.module.clone(),
                        permissions: BTreeSet::new(),
                    });
                    let position = index.modules.len() - 1;
                    index.by_name.insert(permission.module.clone(), position);
                    position
                }
            };
            index.modules[position]
                .permissions
                .insert(permission.id.clone());
        }

        index
    }

    pub fn get(&self, module: &str) -> Option<&Module> {
        self.by_name.get(module).map(|&position| &self.modules[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(Module::name)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct PermissionCatalog {
    permissions: Vec<Permission>,
    positions: HashMap<PermissionId, usize>,
    modules: ModuleIndex,
}

impl PermissionCatalog {
    /// Builds a catalog, rejecting blank ids, blank module tags, and duplicate ids.
    pub fn new(permissions: Vec<Permission>) -> Result<Self, AppError> {
        let mut positions = HashMap::with_capacity(permissions.len());

        for (position, permission) in permissions.iter().enumerate() {
            if permission.id.is_blank() {
                return Err(AppError::unprocessable(anyhow!(
                    "Permission at position {} has an empty id",
                    position
                )));
            }
            if permission.module.trim().is_empty() {
                return Err(AppError::unprocessable(anyhow!(
                    "Permission {} has an empty module",
                    permission.id
                )));
            }
            if positions.insert(permission.id.clone(), position).is_some() {
                return Err(AppError::unprocessable(anyhow!(
                    "Duplicate permission id in catalog: {}",
                    permission.id
                )));
            }
        }

        let modules = ModuleIndex::build(&permissions);

        Ok(Self {
            permissions,
            positions,
            modules,
        })
    }

    pub fn get(&self, permission_id: &str) -> Option<&Permission> {
        self.positions
            .get(permission_id)
            .map(|&position| &self.permissions[position])
    }

    pub fn contains(&self, permission_id: &str) -> bool {
        self.positions.contains_key(permission_id)
    }

    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    pub fn modules(&self) -> &ModuleIndex {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Checks a loaded role against this catalog: non-blank name, no foreign permission ids.
    pub fn validate_role(&self, role: &Role) -> Result<(), AppError> {
        if role.name.trim().is_empty() {
            return Err(AppError::unprocessable(anyhow!(
                "Role {} has an empty name",
                role.id
            )));
        }

        let unknown: Vec<&str> = role
            .permissions
            .iter()
            .filter(|id| !self.contains(id.as_str()))
            .map(PermissionId::as_str)
            .collect();

        if !unknown.is_empty() {
            return Err(AppError::unprocessable(anyhow!(
                "Role {} references unknown permissions: {}",
                role.id,
                unknown.join(", ")
            )));
        }

        Ok(())
    }

    /// The role's permissions as catalog entries, in catalog order.
    pub fn resolve(&self, role: &Role) -> Vec<Permission> {
        self.permissions
            .iter()
            .filter(|permission| role.permissions.contains(&permission.id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podash_core::ErrorKind;

    fn catalog() -> Vec<Permission> {
        vec![
            Permission::new("orders:read", "View orders", "Orders"),
            Permission::new("users:read", "View users", "Users"),
            Permission::new("orders:update", "Process orders", "Orders"),
        ]
    }

    #[test]
    fn test_module_index_groups_by_tag() {
        let index = ModuleIndex::build(&catalog());

        assert_eq!(index.len(), 2);
        let orders = index.get("Orders").unwrap();
        assert_eq!(orders.len(), 2);
        assert!(orders.contains("orders:read"));
        assert!(orders.contains("orders:update"));
        assert!(!orders.contains("users:read"));
    }

    #[test]
    fn test_module_index_keeps_first_appearance_order() {
        let index = ModuleIndex::build(&catalog());
        let names: Vec<&str> = index.names().collect();
        assert_eq!(names, vec!["Orders", "Users"]);
    }

    #[test]
    fn test_module_index_unknown_module() {
        let index = ModuleIndex::build(&catalog());
        assert!(index.get("Products").is_none());
        assert!(index.get("orders").is_none());
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let mut permissions = catalog();
        permissions.push(Permission::new("orders:read", "Again", "Orders"));

        let err = PermissionCatalog::new(permissions).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unprocessable);
        assert!(err.to_string().contains("orders:read"));
    }

    #[test]
    fn test_catalog_rejects_blank_id_and_module() {
        let blank_id = vec![Permission::new(" ", "Nothing", "Orders")];
        assert!(PermissionCatalog::new(blank_id).is_err());

        let blank_module = vec![Permission::new("orders:read", "View orders", "")];
        assert!(PermissionCatalog::new(blank_module).is_err());
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = PermissionCatalog::new(catalog()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("users:read").unwrap().module, "Users");
        assert!(!catalog.contains("stores:read"));
    }

    #[test]
    fn test_validate_role() {
        let catalog = PermissionCatalog::new(catalog()).unwrap();

        let valid = Role::new("Support").with_permissions(["orders:read", "users:read"]);
        assert!(catalog.validate_role(&valid).is_ok());

        let foreign = Role::new("Support").with_permissions(["orders:read", "stores:read"]);
        let err = catalog.validate_role(&foreign).unwrap_err();
        assert!(err.to_string().contains("stores:read"));

        let unnamed = Role::new("  ");
        assert!(catalog.validate_role(&unnamed).is_err());
    }

    #[test]
    fn test_resolve_uses_catalog_order() {
        let catalog = PermissionCatalog::new(catalog()).unwrap();
        let role = Role::new("Ops").with_permissions(["orders:update", "orders:read"]);

        let ids: Vec<String> = catalog
            .resolve(&role)
            .into_iter()
            .map(|p| p.id.into_inner())
            .collect();
        assert_eq!(ids, vec!["orders:read", "orders:update"]);
    }
}

//! Role seeding functionality.
//!
//! Provides the fixed demo roles and generated roles with fake job titles and
//! random permission subsets.

use fake::Fake;
use fake::faker::job::en::Title;
use podash::ModuleIndex;
use podash_core::permissions::{MODULE_CONTENT, MODULE_IDEAS, MODULE_ORDERS, MODULE_PRODUCTS};
use podash_models::{Permission, Role};
use rand::Rng;
use rand::seq::SliceRandom;

use super::models::DemoRole;

const COLORS: &[&str] = &["slate", "red", "amber", "green", "teal", "blue", "violet", "pink"];

pub const DEMO_ROLES: &[DemoRole] = &[
    ("admin", "Administrator", "Full access to the dashboard", "red", &["*"]),
    (
        "fulfilment",
        "Fulfilment",
        "Processes orders and keeps products up to date",
        "amber",
        &[MODULE_ORDERS, MODULE_PRODUCTS],
    ),
    (
        "content-editor",
        "Content Editor",
        "Writes content and reviews ideas",
        "violet",
        &[MODULE_CONTENT, MODULE_IDEAS],
    ),
    ("viewer", "Viewer", "Read-only access", "slate", &[]),
];

/// Builds the demo roles against `catalog`.
///
/// The viewer role gets every `read` permission; the others get whole modules.
pub fn demo_roles(catalog: &[Permission]) -> Vec<Role> {
    let modules = ModuleIndex::build(catalog);

    DEMO_ROLES
        .iter()
        .map(|(id, name, description, color, granted)| {
            let permissions: Vec<_> = if granted.contains(&"*") {
                catalog.iter().map(|p| p.id.clone()).collect()
            } else if granted.is_empty() {
                catalog
                    .iter()
                    .filter(|p| p.id.as_str().ends_with(":read"))
                    .map(|p| p.id.clone())
                    .collect()
            } else {
                granted
                    .iter()
                    .filter_map(|module| modules.get(module))
                    .flat_map(|module| module.permission_ids().iter().cloned())
                    .collect()
            };

            let mut role = Role::new(*name)
                .with_id(*id)
                .with_permissions(permissions);
            role.description = Some(description.to_string());
            role.color = Some(color.to_string());
            role
        })
        .collect()
}

/// Generates `count` roles named after fake job titles, each holding a random
/// subset of `catalog`.
pub fn generate_roles<R: Rng>(catalog: &[Permission], count: usize, rng: &mut R) -> Vec<Role> {
    (0..count)
        .map(|idx| {
            let title: String = Title().fake();
            let permissions: Vec<_> = catalog
                .iter()
                .filter(|_| rng.gen_bool(0.35))
                .map(|p| p.id.clone())
                .collect();

            let mut role = Role::new(title)
                .with_id(format!("generated-{}", idx + 1))
                .with_permissions(permissions);
            role.color = COLORS.choose(rng).map(|c| c.to_string());
            role
        })
        .collect()
}

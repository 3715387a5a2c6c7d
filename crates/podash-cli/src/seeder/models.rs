//! Configuration for seeding a data directory.

/// Roles every fresh data directory starts with: `(id, name, description, color, modules)`.
///
/// A role is granted every permission of the listed modules; `"*"` grants the
/// whole catalog.
pub type DemoRole = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
);

#[derive(Clone, Debug, Default)]
pub struct SeedConfig {
    /// Overwrite an already seeded data directory.
    pub force: bool,
    /// Number of additional roles with generated names and random permissions.
    pub extra_roles: usize,
}

impl SeedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_extra_roles(mut self, extra_roles: usize) -> Self {
        self.extra_roles = extra_roles;
        self
    }
}

/// What a seeding run wrote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedSummary {
    pub permissions: usize,
    pub modules: usize,
    pub roles: usize,
}

//! # Podash
//!
//! Role-based permission engine for the Podash print-on-demand admin dashboard.
//!
//! ## Overview
//!
//! Administrators grant and revoke permissions on roles, one at a time or a whole
//! module at once, with tri-state feedback per module:
//!
//! - **Permission Catalog**: every permission the dashboard knows, tagged with a module
//! - **Module Index**: the catalog grouped by module, in catalog order
//! - **Role Store**: roles, each owning a set of permission ids
//! - **Aggregation**: `has_permission` and `module_status` (`none` / `partial` / `all`)
//! - **Mutation**: single toggles and bulk module check / uncheck
//! - **Change Tracker**: dirty state gating an explicit commit
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── modules/
//! │   ├── permissions/   # Catalog, Module Index, aggregation
//! │   └── roles/         # Role Store, mutation engine, change tracker
//! ├── persistence/       # Repository trait, in-memory and JSON file adapters
//! └── session.rs         # PermissionSession: the state store tying it together
//! ```
//!
//! Reads flow catalog → module index → aggregation. Writes flow through the mutation
//! engine into the role store and mark the change tracker dirty; nothing is durable
//! until [`PermissionSession::commit`] succeeds.
//!
//! ## Bulk Uncheck
//!
//! Unchecking a module is lossy by default: every permission of the module is
//! revoked, however it was granted. Set `PERMISSION_BULK_REMOVE=strict` to revoke only
//! what a bulk check granted. See [`podash_config::BulkRemoveMode`].
//!
//! ## Configuration
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PERMISSION_BULK_REMOVE` | `lossy` | `lossy` or `strict` bulk uncheck |
//! | `PODASH_DATA_DIR` | `storage/data` | Directory holding `catalog.json` and `roles.json` |
//! | `LOG_LEVEL` | `info` | Default log level |
//! | `LOG_FORMAT` | `compact` | `compact` or `json` console output |
//! | `LOG_DIR` | unset | Directory for daily rolling JSON log files |

pub mod modules;
pub mod persistence;
pub mod session;

pub use modules::permissions::{ModuleIndex, PermissionCatalog};
pub use modules::roles::{ChangeTracker, Mutation, Provenance, RoleStore};
pub use persistence::{InMemoryRepository, JsonFileRepository, PermissionRepository};
pub use session::{CommitSummary, PermissionSession};

pub use podash_config;
pub use podash_core;
pub use podash_models;

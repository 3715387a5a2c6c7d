//! # Podash Config
//!
//! Configuration types for the Podash permission engine.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`engine`]: Mutation engine behavior (bulk-remove mode)
//! - [`storage`]: Location of the JSON catalog and role files
//! - [`logging`]: Log level, console format, and optional log directory
//!
//! Every `from_env` constructor delegates to a `from_vars` constructor taking a
//! lookup function, so configuration can be built from any key/value source.
//!
//! # Example
//!
//! ```ignore
//! use podash_config::{EngineConfig, LoggingConfig, StorageConfig};
//!
//! // Load all configs from environment
//! let engine_config = EngineConfig::from_env();
//! let storage_config = StorageConfig::from_env();
//! let logging_config = LoggingConfig::from_env();
//! ```

pub mod engine;
pub mod logging;
pub mod storage;

// Re-export commonly used types at crate root
pub use engine::{BulkRemoveMode, EngineConfig};
pub use logging::{LogFormat, LoggingConfig};
pub use storage::StorageConfig;

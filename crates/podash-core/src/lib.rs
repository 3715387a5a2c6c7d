//! # Podash Core
//!
//! Core types, errors, and utilities for the Podash permission engine.
//!
//! This crate provides foundational types used throughout the workspace:
//!
//! - [`errors`]: Application error type with a coarse [`errors::ErrorKind`]
//! - [`permissions`]: Permission id and module name constants for the dashboard catalog
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use podash_core::errors::AppError;
//! use podash_core::permissions;
//!
//! // Create an error
//! let error = AppError::not_found(anyhow::anyhow!("Role not found"));
//!
//! // Reference a catalog permission
//! let id = permissions::ORDERS_READ;
//! ```

pub mod errors;
pub mod permissions;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorKind};

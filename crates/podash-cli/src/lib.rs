//! # Podash CLI
//!
//! Seeding and role administration for a Podash JSON data directory.
//!
//! This library crate provides the seeding and output helpers used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use podash::JsonFileRepository;
//! use podash_cli::seeder::{seed_all, SeedConfig};
//!
//! let repo = JsonFileRepository::from_config(&StorageConfig::from_env());
//! seed_all(&repo, SeedConfig::new().with_extra_roles(5)).await?;
//! ```

pub mod output;
pub mod seeder;

//! Data directory seeding.
//!
//! Writes the default print-on-demand catalog and a set of demo roles, plus any
//! number of generated roles, through a [`JsonFileRepository`].

pub mod catalog;
pub mod models;
pub mod roles;

pub use models::{SeedConfig, SeedSummary};

use anyhow::anyhow;
use podash::{JsonFileRepository, ModuleIndex};
use podash_core::AppError;
use std::time::Instant;
use tracing::info;

/// Seeds catalog and roles. Refuses to overwrite existing data unless `config.force`.
pub async fn seed_all(
    repo: &JsonFileRepository,
    config: SeedConfig,
) -> Result<SeedSummary, AppError> {
    let start_time = Instant::now();

    if !config.force && tokio::fs::try_exists(repo.catalog_path()).await? {
        return Err(AppError::conflict(anyhow!(
            "{} already exists; pass --force to overwrite",
            repo.catalog_path().display()
        )));
    }

    println!("🌱 Seeding permission catalog...");
    let permissions = catalog::default_catalog()?;
    let modules = ModuleIndex::build(&permissions).len();
    repo.write_catalog(&permissions).await?;
    println!(
        "   ✓ Wrote {} permissions in {} modules",
        permissions.len(),
        modules
    );

    println!("👥 Seeding roles...");
    let mut seeded = roles::demo_roles(&permissions);
    let generated = {
        let mut rng = rand::thread_rng();
        roles::generate_roles(&permissions, config.extra_roles, &mut rng)
    };
    seeded.extend(generated);
    repo.write_roles(&seeded).await?;
    println!("   ✓ Wrote {} roles", seeded.len());

    info!(elapsed = ?start_time.elapsed(), "Seeding complete");
    println!("\n✅ Seeding complete in {:?}", start_time.elapsed());

    Ok(SeedSummary {
        permissions: permissions.len(),
        modules,
        roles: seeded.len(),
    })
}

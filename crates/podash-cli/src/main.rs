use anyhow::anyhow;
use clap::{ArgGroup, Parser, Subcommand};
use dialoguer::{Confirm, Input};
use dotenvy::dotenv;
use podash::{CommitSummary, JsonFileRepository, PermissionRepository, PermissionSession};
use podash_cli::output;
use podash_cli::seeder::{self, SeedConfig};
use podash_config::{BulkRemoveMode, EngineConfig, LoggingConfig, StorageConfig};
use podash_core::AppError;
use podash_models::CreateRoleDto;
use podash_observability::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "podash-cli")]
#[command(about = "Podash CLI - Role and permission administration", long_about = None)]
struct Cli {
    /// Data directory (overrides PODASH_DATA_DIR)
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,

    /// Module uncheck revokes only permissions a module check granted
    #[arg(long, global = true)]
    strict: bool,

    /// Commit without asking for confirmation
    #[arg(short = 'y', long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default permission catalog and demo roles
    Seed {
        /// Overwrite an existing data directory
        #[arg(long)]
        force: bool,

        /// Number of extra roles with random permissions
        #[arg(long, default_value = "0")]
        extra_roles: usize,
    },
    /// List roles with their permission counts
    Roles,
    /// Show a role's permissions grouped by module
    Show {
        role_id: String,
    },
    /// Grant or revoke a single permission
    Toggle {
        role_id: String,
        permission_id: String,
    },
    /// Check or uncheck every permission of a module
    #[command(group(ArgGroup::new("direction").required(true).args(["grant", "revoke"])))]
    ToggleModule {
        role_id: String,
        module: String,

        #[arg(long)]
        grant: bool,

        #[arg(long)]
        revoke: bool,
    },
    /// Create a new role
    CreateRole {
        /// Role name (prompted if not provided)
        #[arg(short = 'n', long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Badge color
        #[arg(short = 'c', long)]
        color: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let _guard = init_logging(&LoggingConfig::from_env());

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let mut storage = StorageConfig::from_env();
    if let Some(data_dir) = cli.data_dir {
        storage.data_dir = data_dir;
    }
    let repo = JsonFileRepository::from_config(&storage);

    let engine = EngineConfig::try_from_env().map_err(|e| AppError::bad_request(anyhow!(e)))?;
    let engine = engine_config(engine, cli.strict);

    match cli.command {
        Commands::Seed { force, extra_roles } => {
            let config = SeedConfig::new()
                .with_force(force)
                .with_extra_roles(extra_roles);
            seeder::seed_all(&repo, config).await?;
            Ok(())
        }
        Commands::Roles => handle_roles(repo, engine).await,
        Commands::Show { role_id } => handle_show(repo, engine, &role_id).await,
        Commands::Toggle {
            role_id,
            permission_id,
        } => handle_toggle(repo, engine, &role_id, &permission_id, cli.yes).await,
        Commands::ToggleModule {
            role_id,
            module,
            grant,
            revoke: _,
        } => handle_toggle_module(repo, engine, &role_id, &module, grant, cli.yes).await,
        Commands::CreateRole {
            name,
            description,
            color,
        } => handle_create_role(repo, engine, name, description, color, cli.yes).await,
    }
}

/// `--strict` overrides `PERMISSION_BULK_REMOVE`.
fn engine_config(base: EngineConfig, strict: bool) -> EngineConfig {
    if strict {
        base.with_bulk_remove(BulkRemoveMode::Strict)
    } else {
        base
    }
}

async fn handle_roles(repo: JsonFileRepository, engine: EngineConfig) -> Result<(), AppError> {
    let session = PermissionSession::open(repo, engine).await?;

    if session.roles().is_empty() {
        println!("No roles found. Run `seed` first.");
        return Ok(());
    }

    for role in session.roles() {
        println!("{}", output::role_line(role));
    }
    Ok(())
}

async fn handle_show(
    repo: JsonFileRepository,
    engine: EngineConfig,
    role_id: &str,
) -> Result<(), AppError> {
    let session = PermissionSession::open(repo, engine).await?;
    print!("{}", output::module_table(&session, role_id)?);
    Ok(())
}

async fn handle_toggle(
    repo: JsonFileRepository,
    engine: EngineConfig,
    role_id: &str,
    permission_id: &str,
    yes: bool,
) -> Result<(), AppError> {
    let mut session = PermissionSession::open(repo, engine).await?;

    let granted = session
        .toggle_permission(role_id, permission_id)?
        .permissions
        .contains(permission_id);
    let verb = if granted { "Grant" } else { "Revoke" };

    confirm_and_commit(
        &mut session,
        &format!("{} {} on {}?", verb, permission_id, role_id),
        yes,
    )
    .await
}

async fn handle_toggle_module(
    repo: JsonFileRepository,
    engine: EngineConfig,
    role_id: &str,
    module: &str,
    grant: bool,
    yes: bool,
) -> Result<(), AppError> {
    let mut session = PermissionSession::open(repo, engine).await?;

    let before = session.module_status(role_id, module)?;
    session.toggle_module_permissions(role_id, module, grant)?;
    let after = session.module_status(role_id, module)?;

    println!(
        "{}: {} {} -> {} {}",
        module,
        output::status_marker(before),
        before,
        output::status_marker(after),
        after
    );

    let verb = if grant {
        "Grant all of"
    } else {
        println!("Bulk remove mode: {}", session.config().bulk_remove);
        "Revoke"
    };
    confirm_and_commit(
        &mut session,
        &format!("{} {} on {}?", verb, module, role_id),
        yes,
    )
    .await
}

async fn handle_create_role(
    repo: JsonFileRepository,
    engine: EngineConfig,
    name: Option<String>,
    description: Option<String>,
    color: Option<String>,
    yes: bool,
) -> Result<(), AppError> {
    let mut session = PermissionSession::open(repo, engine).await?;

    let name = match name {
        Some(name) => name,
        None => Input::<String>::new().with_prompt("Role name").interact_text()?,
    };

    let role = session.create_role(CreateRoleDto {
        name,
        description,
        color,
        permission_ids: None,
    })?;
    let prompt = format!("Create role {} ({})?", role.name, role.id);

    confirm_and_commit(&mut session, &prompt, yes).await
}

async fn confirm_and_commit<R: PermissionRepository>(
    session: &mut PermissionSession<R>,
    prompt: &str,
    yes: bool,
) -> Result<(), AppError> {
    let confirmed = yes
        || Confirm::new()
            .with_prompt(prompt)
            .default(true)
            .interact()?;

    let Some(summary) = finish(session, confirmed).await? else {
        println!("Discarded changes.");
        return Ok(());
    };

    println!("\n✅ Committed {} role(s)", summary.committed.len());
    for role_id in &summary.committed {
        if let Ok(role) = session.role(role_id.as_str()) {
            println!("   {}", output::role_line(role));
        }
    }
    Ok(())
}

/// Commits when confirmed; declining discards the session's changes.
async fn finish<R: PermissionRepository>(
    session: &mut PermissionSession<R>,
    confirmed: bool,
) -> Result<Option<CommitSummary>, AppError> {
    if !confirmed {
        session.discard();
        return Ok(None);
    }
    session.commit().await.map(Some)
}

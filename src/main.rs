use clap::Parser;
use color_eyre::Result;
use selfdev::cli::{Cli, Commands, ListOptions, NewTask};
use selfdev::{Config, Database, Profile};
use tracing_subscriber::{EnvFilter, prelude::*};

fn init_tracing(level: &str) -> Result<()> {
    // RUST_LOG wins over the configured level
    let env_filter = match std::env::var("RUST_LOG") {
        Ok(directives) => EnvFilter::try_new(directives)?,
        Err(_) => EnvFilter::try_new(format!("warn,selfdev={level}"))?,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(env_filter),
        )
        .init();
    Ok(())
}

/// Open the configured store with the schema applied
fn open_store(config: &Config) -> Result<Database> {
    let db = Database::open(&config.get_database_path())?;
    db.migrate()?;
    Ok(db)
}

fn main() -> Result<()> {
    // Set up error reporting with color-eyre
    color_eyre::install()?;

    let cli = Cli::parse();

    // --dev keeps a separate config and database
    let profile = if cli.dev { Profile::Dev } else { Profile::Prod };

    let mut config = Config::load_with_profile(profile)?;
    if let Some(path) = cli.database {
        config.set_database_path(path)?;
    }

    init_tracing(&config.log_level)?;

    match cli.command {
        // Startup owns its own wait loop; every other command opens the store directly
        Commands::Startup { seed } => selfdev::cli::handle_startup(config, seed)?,
        Commands::Migrate => {
            selfdev::cli::handle_migrate(&Database::open(&config.get_database_path())?)?
        }
        Commands::Seed { clear } => selfdev::cli::handle_seed(&open_store(&config)?, clear)?,
        Commands::AddUser {
            username,
            email,
            first_name,
            last_name,
        } => {
            let db = open_store(&config)?;
            selfdev::cli::handle_add_user(username, email, first_name, last_name, &db)?;
        }
        Commands::AddTask {
            username,
            title,
            description,
            priority,
            due,
            every,
            times,
            until,
            minutes,
            tags,
            group,
        } => {
            let new = NewTask {
                username,
                title,
                description,
                priority,
                due,
                every,
                times,
                until,
                minutes,
                tags,
                group,
            };
            selfdev::cli::handle_add_task(new, &open_store(&config)?)?;
        }
        Commands::AddGroup {
            username,
            name,
            description,
            color,
        } => {
            let db = open_store(&config)?;
            selfdev::cli::handle_add_group(username, name, description, color, &db)?;
        }
        Commands::ListGroups { username } => {
            selfdev::cli::handle_list_groups(username, &open_store(&config)?)?;
        }
        Commands::DeleteGroup { username, name } => {
            selfdev::cli::handle_delete_group(username, name, &open_store(&config)?)?;
        }
        Commands::CompleteTask { id } => {
            selfdev::cli::handle_complete_task(id, &open_store(&config)?)?;
        }
        Commands::ListTasks {
            user,
            status,
            priority,
            tag,
            group,
            json,
        } => {
            let options = ListOptions {
                user,
                status,
                priority,
                tag,
                group,
                json,
            };
            selfdev::cli::handle_list_tasks(options, &open_store(&config)?)?;
        }
        Commands::Progress { id } => selfdev::cli::handle_progress(id, &open_store(&config)?)?,
        Commands::DeleteUser { username } => {
            selfdev::cli::handle_delete_user(username, &open_store(&config)?)?;
        }
    }

    Ok(())
}

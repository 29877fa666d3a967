//! Process startup: wait for the store, apply the schema, optionally seed.

use chrono::{DateTime, Utc};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::database::{Database, DatabaseError};
use crate::seed::{self, SeedError, SeedReport};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Schema setup failed: {0}")]
    Schema(#[source] DatabaseError),
    #[error("Seeding failed: {0}")]
    Seed(#[from] SeedError),
}

pub struct StartupReport {
    pub database: Database,
    pub wait_attempts: u64,
    pub seed: Option<SeedReport>,
}

/// Block until the store at `path` answers a query.
///
/// Unavailability is never an error: the loop sleeps `interval` and tries
/// again with no upper bound. With `create_if_missing` off, a missing file
/// counts as unavailable. Returns the open store and the number of attempts.
pub fn wait_for_store(path: &Path, create_if_missing: bool, interval: Duration) -> (Database, u64) {
    let mut attempts = 0;
    let db = crate::utils::poll_until(
        interval,
        || {
            attempts += 1;
            let db = if create_if_missing {
                Database::open(path)?
            } else {
                Database::open_existing(path)?
            };
            db.ping()?;
            Ok::<_, DatabaseError>(db)
        },
        |attempt, err| {
            warn!(attempt, path = %path.display(), error = %err, "store unavailable, retrying");
        },
    );
    info!(path = %path.display(), attempts, "store is accepting connections");
    (db, attempts)
}

/// Run the startup sequence described by `config`, seeding as of `now`
pub fn run(config: &Config, now: DateTime<Utc>) -> Result<StartupReport, StartupError> {
    let path = config.get_database_path();
    let (database, wait_attempts) =
        wait_for_store(&path, config.create_if_missing, config.wait_interval());

    // Schema failures abort startup; there is no retry
    database.migrate().map_err(StartupError::Schema)?;

    let seed = if config.seed_on_startup {
        Some(seed::seed(&database, now)?)
    } else {
        info!("seeding disabled, skipping");
        None
    };

    // Integration setup and static assets belong to the web tier
    info!("external integration setup not configured, skipping");
    info!("static asset collection not configured, skipping");

    info!("startup complete");
    Ok(StartupReport {
        database,
        wait_attempts,
        seed,
    })
}

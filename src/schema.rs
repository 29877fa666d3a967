//! Versioned schema for the task store.
//!
//! Every migration is idempotent on its own and is recorded in
//! `schema_migrations` with `INSERT OR IGNORE`, so running [`migrate`] any
//! number of times leaves the same tables, indexes and bookkeeping rows.

use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("migration {version} ({name}) failed: {source}")]
    MigrationFailed {
        version: u32,
        name: &'static str,
        #[source]
        source: rusqlite::Error,
    },
    #[error("SQLite error: {0}")]
    SqliteError(#[from] rusqlite::Error),
}

/// A bookkeeping row from `schema_migrations`
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedMigration {
    pub version: u32,
    pub name: String,
    pub applied_at: DateTime<Utc>,
}

struct Migration {
    version: u32,
    name: &'static str,
    apply: fn(&Connection) -> rusqlite::Result<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "initial",
        apply: create_initial_tables,
    },
    Migration {
        version: 2,
        name: "task_units",
        apply: add_task_units,
    },
    Migration {
        version: 3,
        name: "task_groups",
        apply: add_task_groups,
    },
];

/// Highest version this build knows how to apply
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

/// Apply every migration in order, each in its own transaction.
/// Errors are fatal for startup and are never retried.
pub fn migrate(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version     INTEGER PRIMARY KEY,
            name        TEXT NOT NULL,
            applied_at  TEXT NOT NULL
        )",
    )?;

    for migration in MIGRATIONS {
        let tx = conn.unchecked_transaction()?;
        let failed = |source: rusqlite::Error| SchemaError::MigrationFailed {
            version: migration.version,
            name: migration.name,
            source,
        };
        (migration.apply)(&tx).map_err(failed)?;
        let recorded = tx
            .execute(
                "INSERT OR IGNORE INTO schema_migrations (version, name, applied_at)
                 VALUES (?1, ?2, ?3)",
                params![migration.version, migration.name, crate::utils::now_utc()],
            )
            .map_err(failed)?;
        tx.commit()?;

        if recorded > 0 {
            info!(version = migration.version, name = migration.name, "applied migration");
        } else {
            debug!(version = migration.version, name = migration.name, "migration already applied");
        }
    }

    Ok(())
}

/// Bookkeeping rows ordered by version
pub fn applied_migrations(conn: &Connection) -> Result<Vec<AppliedMigration>, SchemaError> {
    let mut stmt =
        conn.prepare("SELECT version, name, applied_at FROM schema_migrations ORDER BY version")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(AppliedMigration {
                version: row.get(0)?,
                name: row.get(1)?,
                applied_at: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Highest applied version, or 0 on a store that was never migrated
pub fn current_version(conn: &Connection) -> Result<u32, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_migrations')",
        [],
        |row| row.get(0),
    )?;
    if !exists {
        return Ok(0);
    }
    let version: Option<u32> =
        conn.query_row("SELECT MAX(version) FROM schema_migrations", [], |row| row.get(0))?;
    Ok(version.unwrap_or(0))
}

fn create_initial_tables(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS users (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            username        TEXT NOT NULL UNIQUE,
            email           TEXT NOT NULL DEFAULT '',
            first_name      TEXT NOT NULL DEFAULT '',
            last_name       TEXT NOT NULL DEFAULT '',
            is_active       INTEGER NOT NULL DEFAULT 1,
            date_joined     TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id                      INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id                 INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            title                   TEXT NOT NULL,
            description             TEXT NOT NULL DEFAULT '',
            status                  TEXT NOT NULL DEFAULT 'todo'
                                    CHECK (status IN ('todo', 'in_progress', 'completed', 'archived')),
            priority                TEXT NOT NULL DEFAULT 'medium'
                                    CHECK (priority IN ('low', 'medium', 'high', 'urgent')),
            due_date                TEXT,
            completed_at            TEXT,
            is_recurring            INTEGER NOT NULL DEFAULT 0,
            recurrence_period       TEXT
                                    CHECK (recurrence_period IN ('daily', 'weekly', 'biweekly', 'monthly', 'quarterly', 'yearly')),
            recurrence_target_count INTEGER DEFAULT 1 CHECK (recurrence_target_count >= 0),
            recurrence_end_date     TEXT,
            estimated_duration      INTEGER CHECK (estimated_duration >= 0),
            tags                    TEXT NOT NULL DEFAULT '',
            created_at              TEXT NOT NULL,
            updated_at              TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS task_completions (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            task_id             INTEGER NOT NULL REFERENCES tasks(id) ON DELETE CASCADE,
            completed_at        TEXT NOT NULL,
            notes               TEXT NOT NULL DEFAULT '',
            duration_minutes    INTEGER CHECK (duration_minutes >= 0)
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks(status);
        CREATE INDEX IF NOT EXISTS idx_tasks_priority ON tasks(priority);
        CREATE INDEX IF NOT EXISTS idx_tasks_due_date ON tasks(due_date);
        CREATE INDEX IF NOT EXISTS idx_tasks_user_status ON tasks(user_id, status);
        CREATE INDEX IF NOT EXISTS idx_tasks_is_recurring ON tasks(is_recurring);
        CREATE INDEX IF NOT EXISTS idx_completions_task_completed_at
            ON task_completions(task_id, completed_at);
        CREATE INDEX IF NOT EXISTS idx_completions_completed_at
            ON task_completions(completed_at);",
    )
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> rusqlite::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
        params![table, column],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

fn add_column(conn: &Connection, table: &str, column: &str, definition: &str) -> rusqlite::Result<()> {
    if !column_exists(conn, table, column)? {
        conn.execute(&format!("ALTER TABLE {table} ADD COLUMN {column} {definition}"), [])?;
    }
    Ok(())
}

fn add_task_units(conn: &Connection) -> rusqlite::Result<()> {
    add_column(
        conn,
        "tasks",
        "unit_type",
        "TEXT CHECK (unit_type IN ('minutes', 'hours', 'count', 'pages', 'kilometers', 'meters', 'calories', 'steps', 'custom'))",
    )?;
    add_column(conn, "tasks", "custom_unit_name", "TEXT NOT NULL DEFAULT ''")?;
    add_column(conn, "tasks", "target_value", "INTEGER CHECK (target_value >= 0)")?;
    add_column(
        conn,
        "task_completions",
        "completed_value",
        "INTEGER CHECK (completed_value >= 0)",
    )?;
    Ok(())
}

fn add_task_groups(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS task_groups (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            name        TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            color       TEXT NOT NULL DEFAULT '',
            icon        TEXT NOT NULL DEFAULT '',
            is_active   INTEGER NOT NULL DEFAULT 1,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL,
            UNIQUE (user_id, name)
        );",
    )?;
    // Tasks go with their group
    add_column(
        conn,
        "tasks",
        "group_id",
        "INTEGER REFERENCES task_groups(id) ON DELETE CASCADE",
    )?;
    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_tasks_group ON tasks(group_id);")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        conn
    }

    fn index_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'index' AND name LIKE 'idx_%' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<String>, _>>()
            .unwrap()
    }

    #[test]
    fn fresh_store_reaches_latest_version() {
        let conn = memory();
        assert_eq!(current_version(&conn).unwrap(), 0);
        migrate(&conn).unwrap();
        assert_eq!(current_version(&conn).unwrap(), latest_version());
        assert_eq!(latest_version(), 3);
    }

    #[test]
    fn migrate_twice_is_a_no_op() {
        let conn = memory();
        migrate(&conn).unwrap();
        let first = applied_migrations(&conn).unwrap();
        let indexes = index_names(&conn);

        migrate(&conn).unwrap();
        let second = applied_migrations(&conn).unwrap();

        assert_eq!(first, second);
        assert_eq!(second.len(), 3);
        assert_eq!(second[0].name, "initial");
        assert_eq!(second[1].name, "task_units");
        assert_eq!(second[2].name, "task_groups");
        assert_eq!(indexes, index_names(&conn));
    }

    #[test]
    fn creates_query_indexes() {
        let conn = memory();
        migrate(&conn).unwrap();
        assert_eq!(
            index_names(&conn),
            vec![
                "idx_completions_completed_at",
                "idx_completions_task_completed_at",
                "idx_tasks_due_date",
                "idx_tasks_group",
                "idx_tasks_is_recurring",
                "idx_tasks_priority",
                "idx_tasks_status",
                "idx_tasks_user_status",
            ]
        );
    }

    #[test]
    fn unit_columns_are_added() {
        let conn = memory();
        migrate(&conn).unwrap();
        assert!(column_exists(&conn, "tasks", "unit_type").unwrap());
        assert!(column_exists(&conn, "tasks", "target_value").unwrap());
        assert!(column_exists(&conn, "task_completions", "completed_value").unwrap());
    }

    #[test]
    fn group_names_are_unique_per_user() {
        let conn = memory();
        migrate(&conn).unwrap();
        assert!(column_exists(&conn, "tasks", "group_id").unwrap());
        conn.execute_batch(
            "INSERT INTO users (username, date_joined) VALUES ('ann', '2025-01-01 00:00:00+00:00');
             INSERT INTO users (username, date_joined) VALUES ('bob', '2025-01-01 00:00:00+00:00');
             INSERT INTO task_groups (user_id, name, created_at, updated_at)
                 VALUES (1, 'Fitness', '2025-01-01 00:00:00+00:00', '2025-01-01 00:00:00+00:00');
             INSERT INTO task_groups (user_id, name, created_at, updated_at)
                 VALUES (2, 'Fitness', '2025-01-01 00:00:00+00:00', '2025-01-01 00:00:00+00:00');",
        )
        .unwrap();
        let duplicate = conn.execute(
            "INSERT INTO task_groups (user_id, name, created_at, updated_at)
             VALUES (1, 'Fitness', '2025-01-01 00:00:00+00:00', '2025-01-01 00:00:00+00:00')",
            [],
        );
        assert!(duplicate.is_err());
    }

    #[test]
    fn defaults_match_the_data_model() {
        let conn = memory();
        migrate(&conn).unwrap();
        conn.execute(
            "INSERT INTO users (username, date_joined) VALUES ('ann', '2025-01-01 00:00:00+00:00')",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO tasks (user_id, title, created_at, updated_at)
             VALUES (1, 'Read', '2025-01-01 00:00:00+00:00', '2025-01-01 00:00:00+00:00')",
            [],
        )
        .unwrap();
        let (status, priority, target, recurring): (String, String, i64, i64) = conn
            .query_row(
                "SELECT status, priority, recurrence_target_count, is_recurring FROM tasks",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .unwrap();
        assert_eq!(status, "todo");
        assert_eq!(priority, "medium");
        assert_eq!(target, 1);
        assert_eq!(recurring, 0);
    }

    #[test]
    fn constraint_violations_surface_as_errors() {
        let conn = memory();
        migrate(&conn).unwrap();
        let orphan = conn.execute(
            "INSERT INTO tasks (user_id, title, created_at, updated_at)
             VALUES (42, 'Orphan', '2025-01-01 00:00:00+00:00', '2025-01-01 00:00:00+00:00')",
            [],
        );
        assert!(orphan.is_err());

        conn.execute(
            "INSERT INTO users (username, date_joined) VALUES ('ann', '2025-01-01 00:00:00+00:00')",
            [],
        )
        .unwrap();
        let bad_status = conn.execute(
            "INSERT INTO tasks (user_id, title, status, created_at, updated_at)
             VALUES (1, 'Read', 'someday', '2025-01-01 00:00:00+00:00', '2025-01-01 00:00:00+00:00')",
            [],
        );
        assert!(bad_status.is_err());
    }

    #[test]
    fn failing_migration_names_itself() {
        let conn = memory();
        // A pre-existing tasks table without a status column breaks the index step
        conn.execute_batch("CREATE TABLE tasks (id INTEGER PRIMARY KEY, title TEXT);").unwrap();
        match migrate(&conn) {
            Err(SchemaError::MigrationFailed { version, name, .. }) => {
                assert_eq!(version, 1);
                assert_eq!(name, "initial");
            }
            other => panic!("expected migration failure, got {other:?}"),
        }
        // Nothing was recorded for the failed step
        assert_eq!(current_version(&conn).unwrap(), 0);
    }
}

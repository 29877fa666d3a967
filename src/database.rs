use chrono::{DateTime, Utc};
use rusqlite::{Connection, OpenFlags, OptionalExtension, ToSql, params};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::models::{
    Priority, RecurrencePeriod, Task, TaskCompletion, TaskGroup, TaskProgress, TaskStatus, User,
};
use crate::schema::{self, SchemaError};

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    SqliteError(#[from] rusqlite::Error),
    #[error("Schema error: {0}")]
    SchemaError(#[from] SchemaError),
    #[error("Failed to create database directory: {0}")]
    DirectoryError(String),
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },
    #[error("Invalid task: {0}")]
    InvalidTask(String),
    #[error("Completion at {completed_at} precedes creation of task {task_id} at {created_at}")]
    CompletionBeforeCreation {
        task_id: i64,
        completed_at: DateTime<Utc>,
        created_at: DateTime<Utc>,
    },
    #[error("{0} has no id")]
    MissingId(&'static str),
}

/// Filters for [`Database::list_tasks`]; unset fields match everything
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub user_id: Option<i64>,
    pub group_id: Option<i64>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub is_recurring: Option<bool>,
    pub recurrence_period: Option<RecurrencePeriod>,
    pub due_before: Option<DateTime<Utc>>,
    pub due_after: Option<DateTime<Utc>>,
    pub tags_contains: Option<String>,
}

const TASK_COLUMNS: &str = "id, user_id, title, description, status, priority, due_date, completed_at, \
     is_recurring, recurrence_period, recurrence_target_count, recurrence_end_date, \
     estimated_duration, tags, unit_type, custom_unit_name, target_value, created_at, updated_at, group_id";

const GROUP_COLUMNS: &str =
    "id, user_id, name, description, color, icon, is_active, created_at, updated_at";

const USER_COLUMNS: &str = "id, username, email, first_name, last_name, is_active, date_joined";

const COMPLETION_COLUMNS: &str =
    "id, task_id, completed_at, notes, duration_minutes, completed_value";

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database file and configure the connection.
    /// The schema is not touched here; call [`Database::migrate`] first.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| DatabaseError::DirectoryError(e.to_string()))?;
            }
        }
        Self::from_connection(Connection::open(path)?)
    }

    /// Open an existing database file without creating it
    pub fn open_existing(path: &Path) -> Result<Self, DatabaseError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, DatabaseError> {
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 5000;",
        )?;
        // In-memory databases report "memory" and ignore WAL
        let _mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        Ok(Database { conn })
    }

    /// Round trip a trivial query to prove the store answers
    pub fn ping(&self) -> Result<(), DatabaseError> {
        self.conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }

    /// Apply the schema (idempotent)
    pub fn migrate(&self) -> Result<(), DatabaseError> {
        schema::migrate(&self.conn)?;
        Ok(())
    }

    /// Get a reference to the underlying connection
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // ---- users ----

    fn row_to_user(row: &rusqlite::Row) -> Result<User, rusqlite::Error> {
        Ok(User {
            id: Some(row.get(0)?),
            username: row.get(1)?,
            email: row.get(2)?,
            first_name: row.get(3)?,
            last_name: row.get(4)?,
            is_active: row.get(5)?,
            date_joined: row.get(6)?,
        })
    }

    /// Insert a user and return its ID
    pub fn insert_user(&self, user: &User) -> Result<i64, DatabaseError> {
        self.conn.execute(
            "INSERT INTO users (username, email, first_name, last_name, is_active, date_joined)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                user.username,
                user.email,
                user.first_name,
                user.last_name,
                user.is_active,
                user.date_joined
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a user unless the username is taken.
    /// Returns `None` when the insert was skipped because of the conflict.
    pub fn insert_user_if_absent(&self, user: &User) -> Result<Option<i64>, DatabaseError> {
        let inserted = self.conn.execute(
            "INSERT INTO users (username, email, first_name, last_name, is_active, date_joined)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(username) DO NOTHING",
            params![
                user.username,
                user.email,
                user.first_name,
                user.last_name,
                user.is_active,
                user.date_joined
            ],
        )?;
        if inserted == 0 {
            debug!(username = %user.username, "user already exists");
            return Ok(None);
        }
        Ok(Some(self.conn.last_insert_rowid()))
    }

    pub fn get_user(&self, id: i64) -> Result<User, DatabaseError> {
        self.conn
            .query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
                params![id],
                Self::row_to_user,
            )
            .optional()?
            .ok_or_else(|| DatabaseError::NotFound {
                entity: "user",
                key: id.to_string(),
            })
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let user = self
            .conn
            .query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?1"),
                params![username],
                Self::row_to_user,
            )
            .optional()?;
        Ok(user)
    }

    /// All users ordered by ID
    pub fn list_users(&self) -> Result<Vec<User>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))?;
        let users = stmt
            .query_map([], Self::row_to_user)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }

    /// Delete a user; its tasks and their completions go with it
    pub fn delete_user(&self, id: i64) -> Result<(), DatabaseError> {
        let tx = self.conn.unchecked_transaction()?;
        let deleted = tx.execute("DELETE FROM users WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(DatabaseError::NotFound {
                entity: "user",
                key: id.to_string(),
            });
        }
        tx.commit()?;
        Ok(())
    }

    // ---- groups ----

    fn row_to_group(row: &rusqlite::Row) -> Result<TaskGroup, rusqlite::Error> {
        Ok(TaskGroup {
            id: Some(row.get(0)?),
            user_id: row.get(1)?,
            name: row.get(2)?,
            description: row.get(3)?,
            color: row.get(4)?,
            icon: row.get(5)?,
            is_active: row.get(6)?,
            created_at: row.get(7)?,
            updated_at: row.get(8)?,
        })
    }

    /// Insert a task group and return its ID. Names are unique per user.
    pub fn insert_group(&self, group: &TaskGroup) -> Result<i64, DatabaseError> {
        self.conn.execute(
            "INSERT INTO task_groups (user_id, name, description, color, icon, is_active, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                group.user_id,
                group.name,
                group.description,
                group.color,
                group.icon,
                group.is_active,
                group.created_at,
                group.updated_at
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_group(&self, id: i64) -> Result<TaskGroup, DatabaseError> {
        self.conn
            .query_row(
                &format!("SELECT {GROUP_COLUMNS} FROM task_groups WHERE id = ?1"),
                params![id],
                Self::row_to_group,
            )
            .optional()?
            .ok_or_else(|| DatabaseError::NotFound {
                entity: "group",
                key: id.to_string(),
            })
    }

    pub fn get_group_by_name(
        &self,
        user_id: i64,
        name: &str,
    ) -> Result<Option<TaskGroup>, DatabaseError> {
        let group = self
            .conn
            .query_row(
                &format!("SELECT {GROUP_COLUMNS} FROM task_groups WHERE user_id = ?1 AND name = ?2"),
                params![user_id, name],
                Self::row_to_group,
            )
            .optional()?;
        Ok(group)
    }

    /// A user's groups ordered by name
    pub fn list_groups(&self, user_id: i64) -> Result<Vec<TaskGroup>, DatabaseError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {GROUP_COLUMNS} FROM task_groups WHERE user_id = ?1 ORDER BY name"
        ))?;
        let groups = stmt
            .query_map(params![user_id], Self::row_to_group)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(groups)
    }

    /// Delete a group together with its tasks and their completions
    pub fn delete_group(&self, id: i64) -> Result<(), DatabaseError> {
        let tx = self.conn.unchecked_transaction()?;
        let deleted = tx.execute("DELETE FROM task_groups WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(DatabaseError::NotFound {
                entity: "group",
                key: id.to_string(),
            });
        }
        tx.commit()?;
        Ok(())
    }

    /// Number of tasks in a group and how many of them are completed
    pub fn group_task_counts(&self, id: i64) -> Result<(u32, u32), DatabaseError> {
        let counts = self.conn.query_row(
            "SELECT COUNT(*), COUNT(CASE WHEN status = 'completed' THEN 1 END)
             FROM tasks WHERE group_id = ?1",
            params![id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(counts)
    }

    fn check_group_owner(&self, task: &Task) -> Result<(), DatabaseError> {
        let Some(group_id) = task.group_id else {
            return Ok(());
        };
        if self.get_group(group_id)?.user_id != task.user_id {
            return Err(DatabaseError::InvalidTask(format!(
                "group {} belongs to another user",
                group_id
            )));
        }
        Ok(())
    }

    // ---- tasks ----

    fn row_to_task(row: &rusqlite::Row) -> Result<Task, rusqlite::Error> {
        Ok(Task {
            id: Some(row.get(0)?),
            user_id: row.get(1)?,
            group_id: row.get(19)?,
            title: row.get(2)?,
            description: row.get(3)?,
            status: row.get(4)?,
            priority: row.get(5)?,
            due_date: row.get(6)?,
            completed_at: row.get(7)?,
            is_recurring: row.get(8)?,
            recurrence_period: row.get(9)?,
            recurrence_target_count: row.get(10)?,
            recurrence_end_date: row.get(11)?,
            estimated_duration: row.get(12)?,
            tags: row.get(13)?,
            unit_type: row.get(14)?,
            custom_unit_name: row.get(15)?,
            target_value: row.get(16)?,
            created_at: row.get(17)?,
            updated_at: row.get(18)?,
        })
    }

    /// Insert a task and return its ID
    pub fn insert_task(&self, task: &Task) -> Result<i64, DatabaseError> {
        task.validate().map_err(DatabaseError::InvalidTask)?;
        self.check_group_owner(task)?;
        self.conn.execute(
            "INSERT INTO tasks (user_id, title, description, status, priority, due_date, completed_at,
                 is_recurring, recurrence_period, recurrence_target_count, recurrence_end_date,
                 estimated_duration, tags, unit_type, custom_unit_name, target_value, created_at, updated_at,
                 group_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19)",
            params![
                task.user_id,
                task.title,
                task.description,
                task.status,
                task.priority,
                task.due_date,
                task.completed_at,
                task.is_recurring,
                task.recurrence_period,
                task.recurrence_target_count,
                task.recurrence_end_date,
                task.estimated_duration,
                task.tags,
                task.unit_type,
                task.custom_unit_name,
                task.target_value,
                task.created_at,
                task.updated_at,
                task.group_id
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_task(&self, id: i64) -> Result<Task, DatabaseError> {
        self.conn
            .query_row(
                &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"),
                params![id],
                Self::row_to_task,
            )
            .optional()?
            .ok_or_else(|| DatabaseError::NotFound {
                entity: "task",
                key: id.to_string(),
            })
    }

    /// Whether the user already has a task with this title
    pub fn task_exists(&self, user_id: i64, title: &str) -> Result<bool, DatabaseError> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM tasks WHERE user_id = ?1 AND title = ?2)",
            params![user_id, title],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    /// Update an existing task; `updated_at` is taken from the struct
    pub fn update_task(&self, task: &Task) -> Result<(), DatabaseError> {
        let id = task.id.ok_or(DatabaseError::MissingId("task"))?;
        task.validate().map_err(DatabaseError::InvalidTask)?;
        self.check_group_owner(task)?;

        let tx = self.conn.unchecked_transaction()?;
        let updated = tx.execute(
            "UPDATE tasks SET title = ?1, description = ?2, status = ?3, priority = ?4,
                 due_date = ?5, completed_at = ?6, is_recurring = ?7, recurrence_period = ?8,
                 recurrence_target_count = ?9, recurrence_end_date = ?10, estimated_duration = ?11,
                 tags = ?12, unit_type = ?13, custom_unit_name = ?14, target_value = ?15, updated_at = ?16,
                 group_id = ?17
             WHERE id = ?18",
            params![
                task.title,
                task.description,
                task.status,
                task.priority,
                task.due_date,
                task.completed_at,
                task.is_recurring,
                task.recurrence_period,
                task.recurrence_target_count,
                task.recurrence_end_date,
                task.estimated_duration,
                task.tags,
                task.unit_type,
                task.custom_unit_name,
                task.target_value,
                task.updated_at,
                task.group_id,
                id
            ],
        )?;
        if updated == 0 {
            return Err(DatabaseError::NotFound {
                entity: "task",
                key: id.to_string(),
            });
        }
        tx.commit()?;
        Ok(())
    }

    /// Delete a task; its completion log goes with it
    pub fn delete_task(&self, id: i64) -> Result<(), DatabaseError> {
        let tx = self.conn.unchecked_transaction()?;
        let deleted = tx.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(DatabaseError::NotFound {
                entity: "task",
                key: id.to_string(),
            });
        }
        tx.commit()?;
        Ok(())
    }

    /// Tasks matching `filter`, ordered by ID
    pub fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, DatabaseError> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(user_id) = filter.user_id {
            conditions.push("user_id = ?");
            values.push(Box::new(user_id));
        }
        if let Some(group_id) = filter.group_id {
            conditions.push("group_id = ?");
            values.push(Box::new(group_id));
        }
        if let Some(status) = filter.status {
            conditions.push("status = ?");
            values.push(Box::new(status));
        }
        if let Some(priority) = filter.priority {
            conditions.push("priority = ?");
            values.push(Box::new(priority));
        }
        if let Some(recurring) = filter.is_recurring {
            conditions.push("is_recurring = ?");
            values.push(Box::new(recurring));
        }
        if let Some(period) = filter.recurrence_period {
            conditions.push("recurrence_period = ?");
            values.push(Box::new(period));
        }
        if let Some(before) = filter.due_before {
            conditions.push("due_date <= ?");
            values.push(Box::new(before));
        }
        if let Some(after) = filter.due_after {
            conditions.push("due_date >= ?");
            values.push(Box::new(after));
        }
        if let Some(ref tag) = filter.tags_contains {
            conditions.push("tags LIKE '%' || ? || '%'");
            values.push(Box::new(tag.clone()));
        }

        let mut sql = format!("SELECT {TASK_COLUMNS} FROM tasks");
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY id");

        let params: Vec<&dyn ToSql> = values.iter().map(AsRef::as_ref).collect();
        let mut stmt = self.conn.prepare(&sql)?;
        let tasks = stmt
            .query_map(params.as_slice(), Self::row_to_task)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    // ---- completions ----

    fn row_to_completion(row: &rusqlite::Row) -> Result<TaskCompletion, rusqlite::Error> {
        Ok(TaskCompletion {
            id: Some(row.get(0)?),
            task_id: row.get(1)?,
            completed_at: row.get(2)?,
            notes: row.get(3)?,
            duration_minutes: row.get(4)?,
            completed_value: row.get(5)?,
        })
    }

    /// Append a completion to a task's log and return its ID.
    /// A completion may not predate the task it completes.
    pub fn insert_completion(&self, completion: &TaskCompletion) -> Result<i64, DatabaseError> {
        let created_at: Option<DateTime<Utc>> = self
            .conn
            .query_row(
                "SELECT created_at FROM tasks WHERE id = ?1",
                params![completion.task_id],
                |row| row.get(0),
            )
            .optional()?;
        let created_at = created_at.ok_or_else(|| DatabaseError::NotFound {
            entity: "task",
            key: completion.task_id.to_string(),
        })?;
        if completion.completed_at < created_at {
            return Err(DatabaseError::CompletionBeforeCreation {
                task_id: completion.task_id,
                completed_at: completion.completed_at,
                created_at,
            });
        }

        self.conn.execute(
            "INSERT INTO task_completions (task_id, completed_at, notes, duration_minutes, completed_value)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                completion.task_id,
                completion.completed_at,
                completion.notes,
                completion.duration_minutes,
                completion.completed_value
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// A task's completion log, newest first
    pub fn list_completions(&self, task_id: i64) -> Result<Vec<TaskCompletion>, DatabaseError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COMPLETION_COLUMNS} FROM task_completions
             WHERE task_id = ?1 ORDER BY completed_at DESC, id DESC"
        ))?;
        let completions = stmt
            .query_map(params![task_id], Self::row_to_completion)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(completions)
    }

    pub fn count_completions(&self, task_id: i64) -> Result<u32, DatabaseError> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM task_completions WHERE task_id = ?1",
            params![task_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Completions with `start <= completed_at < end`
    pub fn completions_between(
        &self,
        task_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<TaskCompletion>, DatabaseError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COMPLETION_COLUMNS} FROM task_completions
             WHERE task_id = ?1 AND completed_at >= ?2 AND completed_at < ?3
             ORDER BY completed_at DESC, id DESC"
        ))?;
        let completions = stmt
            .query_map(params![task_id, start, end], Self::row_to_completion)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(completions)
    }

    /// When the task was last done: newest completion for recurring tasks,
    /// `completed_at` otherwise
    pub fn last_completion(&self, task_id: i64) -> Result<Option<DateTime<Utc>>, DatabaseError> {
        let task = self.get_task(task_id)?;
        if !task.is_recurring {
            return Ok(task.completed_at);
        }
        let last = self.conn.query_row(
            "SELECT MAX(completed_at) FROM task_completions WHERE task_id = ?1",
            params![task_id],
            |row| row.get(0),
        )?;
        Ok(last)
    }

    /// Mark a task done at `now`.
    /// Recurring tasks log a completion; one-off tasks switch to completed.
    pub fn complete_task(
        &self,
        task_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Option<i64>, DatabaseError> {
        let mut task = self.get_task(task_id)?;
        if task.is_recurring {
            let mut completion = TaskCompletion::new(task_id, now);
            completion.duration_minutes = task.estimated_duration;
            return self.insert_completion(&completion).map(Some);
        }

        task.status = TaskStatus::Completed;
        task.completed_at = Some(now);
        task.updated_at = now;
        self.update_task(&task)?;
        Ok(None)
    }

    /// Where a task stands in its current recurrence period
    pub fn task_progress(
        &self,
        task_id: i64,
        now: DateTime<Utc>,
    ) -> Result<TaskProgress, DatabaseError> {
        let task = self.get_task(task_id)?;
        let in_period = match task.current_period(now) {
            Some((start, end)) => self.completions_between(task_id, start, end)?,
            None => Vec::new(),
        };
        Ok(TaskProgress::compute(&task, &in_period, now))
    }

    /// Row counts for users, tasks and completions
    pub fn counts(&self) -> Result<(u32, u32, u32), DatabaseError> {
        let counts = self.conn.query_row(
            "SELECT (SELECT COUNT(*) FROM users),
                    (SELECT COUNT(*) FROM tasks),
                    (SELECT COUNT(*) FROM task_completions)",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )?;
        Ok(counts)
    }
}

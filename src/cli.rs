use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::database::{Database, DatabaseError, TaskFilter};
use crate::models::{
    ParseEnumError, Priority, RecurrencePeriod, Task, TaskGroup, TaskStatus, User,
};
use crate::seed::{self, SeedError};
use crate::startup::{self, StartupError};
use crate::utils::{now_utc, parse_date, parse_due};
use crate::Config;

#[derive(Parser)]
#[command(name = "selfdev")]
#[command(about = "Task store for the self-development tracker: schema, seed data and startup")]
#[command(version)]
pub struct Cli {
    /// Database file (overrides the config file)
    #[arg(long, global = true, env = "SELFDEV_DATABASE")]
    pub database: Option<String>,

    /// Use development mode (separate config and database)
    #[arg(long, global = true)]
    pub dev: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Wait for the store, apply the schema and seed if configured
    Startup {
        /// Seed even if the config says not to
        #[arg(long)]
        seed: bool,
    },
    /// Apply the schema and print the bookkeeping rows
    Migrate,
    /// Insert the demo dataset
    Seed {
        /// Delete all users, tasks and completions first
        #[arg(long)]
        clear: bool,
    },
    /// Add a user
    AddUser {
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
    },
    /// Add a task for a user
    AddTask {
        /// Owner's username
        username: String,
        /// Task title
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// low, medium, high or urgent
        #[arg(long, default_value = "medium")]
        priority: String,
        /// Due date (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        due: Option<String>,
        /// Makes the task recurring: daily, weekly, biweekly, monthly, quarterly or yearly
        #[arg(long)]
        every: Option<String>,
        /// Completions per period for recurring tasks
        #[arg(long, default_value_t = 1)]
        times: u32,
        /// Last day of the recurring schedule (YYYY-MM-DD)
        #[arg(long)]
        until: Option<String>,
        /// Estimated duration in minutes
        #[arg(long)]
        minutes: Option<u32>,
        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
        /// Name of one of the user's groups
        #[arg(long)]
        group: Option<String>,
    },
    /// Add a task group for a user
    AddGroup {
        username: String,
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Hex color, e.g. #FF5733
        #[arg(long, default_value = "")]
        color: String,
    },
    /// List a user's task groups
    ListGroups { username: String },
    /// Delete a group with all of its tasks
    DeleteGroup { username: String, name: String },
    /// Mark a task done (recurring tasks log a completion)
    CompleteTask { id: i64 },
    /// List tasks
    ListTasks {
        /// Only this user's tasks
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        /// Only tasks whose tags contain this text
        #[arg(long)]
        tag: Option<String>,
        /// Only tasks in this group (requires --user)
        #[arg(long, requires = "user")]
        group: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show progress of a task in its current period
    Progress { id: i64 },
    /// Delete a user with all of their tasks and completions
    DeleteUser { username: String },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DatabaseError),
    #[error("Seed error: {0}")]
    SeedError(#[from] SeedError),
    #[error("Startup error: {0}")]
    StartupError(#[from] StartupError),
    #[error("Failed to parse date: {0}")]
    DateParseError(String),
    #[error(transparent)]
    InvalidArgument(#[from] ParseEnumError),
    #[error("No user named '{0}'")]
    UnknownUser(String),
    #[error("User '{0}' has no group named '{1}'")]
    UnknownGroup(String, String),
    #[error("Failed to encode output: {0}")]
    OutputError(#[from] serde_json::Error),
}

/// Handle the startup command
pub fn handle_startup(mut config: Config, force_seed: bool) -> Result<(), CliError> {
    config.seed_on_startup |= force_seed;
    let report = startup::run(&config, now_utc())?;
    if let Some(seed) = report.seed {
        print_seed_report(&seed);
    }
    let (users, tasks, completions) = report.database.counts()?;
    println!(
        "Store ready: {} users, {} tasks, {} completions",
        users, tasks, completions
    );
    Ok(())
}

/// Handle the migrate command
pub fn handle_migrate(db: &Database) -> Result<(), CliError> {
    db.migrate()?;
    let applied =
        crate::schema::applied_migrations(db.conn()).map_err(DatabaseError::from)?;
    for migration in applied {
        println!(
            "{:>3}  {:<12} {}",
            migration.version,
            migration.name,
            migration.applied_at.format("%Y-%m-%d %H:%M:%S")
        );
    }
    Ok(())
}

/// Handle the seed command
pub fn handle_seed(db: &Database, clear: bool) -> Result<(), CliError> {
    if clear {
        println!("Clearing existing data...");
        seed::clear(db)?;
    }
    let report = seed::seed(db, now_utc())?;
    print_seed_report(&report);
    Ok(())
}

fn print_seed_report(report: &seed::SeedReport) {
    println!(
        "Created {} users ({} already existed)",
        report.users_created, report.users_skipped
    );
    println!(
        "Created {} tasks ({} already existed)",
        report.tasks_created, report.tasks_skipped
    );
    println!("Created {} completions", report.completions_created);
}

/// Handle the add-user command
pub fn handle_add_user(
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    db: &Database,
) -> Result<(), CliError> {
    let mut user = User::new(username, email);
    user.first_name = first_name;
    user.last_name = last_name;
    let id = db.insert_user(&user)?;
    println!("User created successfully (ID: {})", id);
    Ok(())
}

fn lookup_user(db: &Database, username: &str) -> Result<User, CliError> {
    db.get_user_by_username(username)?
        .ok_or_else(|| CliError::UnknownUser(username.to_string()))
}

fn lookup_group(db: &Database, user: &User, name: &str) -> Result<TaskGroup, CliError> {
    let user_id = user.id.ok_or(DatabaseError::MissingId("user"))?;
    db.get_group_by_name(user_id, name)?
        .ok_or_else(|| CliError::UnknownGroup(user.username.clone(), name.to_string()))
}

/// Handle the add-group command
pub fn handle_add_group(
    username: String,
    name: String,
    description: String,
    color: String,
    db: &Database,
) -> Result<(), CliError> {
    let user = lookup_user(db, &username)?;
    let user_id = user.id.ok_or(DatabaseError::MissingId("user"))?;
    let mut group = TaskGroup::new(user_id, name);
    group.description = description;
    group.color = color;
    let id = db.insert_group(&group)?;
    println!("Group created successfully (ID: {})", id);
    Ok(())
}

/// Handle the list-groups command
pub fn handle_list_groups(username: String, db: &Database) -> Result<(), CliError> {
    let user = lookup_user(db, &username)?;
    let user_id = user.id.ok_or(DatabaseError::MissingId("user"))?;
    for group in db.list_groups(user_id)? {
        let id = group.id.ok_or(DatabaseError::MissingId("group"))?;
        let (tasks, completed) = db.group_task_counts(id)?;
        println!("{:>5}  {:<24} {}/{} completed", id, group.name, completed, tasks);
    }
    Ok(())
}

/// Handle the delete-group command
pub fn handle_delete_group(username: String, name: String, db: &Database) -> Result<(), CliError> {
    let user = lookup_user(db, &username)?;
    let group = lookup_group(db, &user, &name)?;
    db.delete_group(group.id.ok_or(DatabaseError::MissingId("group"))?)?;
    println!("Deleted group {} and all of its tasks", name);
    Ok(())
}

/// Fields of the add-task command
pub struct NewTask {
    pub username: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub due: Option<String>,
    pub every: Option<String>,
    pub times: u32,
    pub until: Option<String>,
    pub minutes: Option<u32>,
    pub tags: String,
    pub group: Option<String>,
}

/// Handle the add-task command
pub fn handle_add_task(new: NewTask, db: &Database) -> Result<(), CliError> {
    let user = lookup_user(db, &new.username)?;
    let user_id = user.id.ok_or(DatabaseError::MissingId("user"))?;

    let mut task = Task::new(user_id, new.title);
    if let Some(name) = new.group {
        task.group_id = lookup_group(db, &user, &name)?.id;
    }
    task.description = new.description;
    task.priority = new.priority.parse::<Priority>()?;
    task.tags = new.tags;
    task.estimated_duration = new.minutes;

    if let Some(due) = new.due {
        let parsed = parse_due(&due)
            .map_err(|e| CliError::DateParseError(format!("Invalid date format '{}': {}", due, e)))?;
        task.due_date = Some(parsed);
    }
    if let Some(every) = new.every {
        task = task.recurring(every.parse::<RecurrencePeriod>()?, new.times);
    }
    if let Some(until) = new.until {
        let parsed = parse_date(&until).map_err(|e| {
            CliError::DateParseError(format!("Invalid date format '{}': {}", until, e))
        })?;
        task.recurrence_end_date = Some(parsed);
    }

    let id = db.insert_task(&task)?;
    println!("Task created successfully (ID: {})", id);
    Ok(())
}

/// Handle the complete-task command
pub fn handle_complete_task(id: i64, db: &Database) -> Result<(), CliError> {
    match db.complete_task(id, now_utc())? {
        Some(completion_id) => println!("Logged completion {} for task {}", completion_id, id),
        None => println!("Task {} marked as completed", id),
    }
    Ok(())
}

/// Filters of the list-tasks command
pub struct ListOptions {
    pub user: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub tag: Option<String>,
    pub group: Option<String>,
    pub json: bool,
}

/// Handle the list-tasks command
pub fn handle_list_tasks(options: ListOptions, db: &Database) -> Result<(), CliError> {
    let mut filter = TaskFilter {
        tags_contains: options.tag,
        ..Default::default()
    };
    if let Some(username) = options.user {
        let user = lookup_user(db, &username)?;
        filter.user_id = user.id;
        if let Some(name) = options.group {
            filter.group_id = lookup_group(db, &user, &name)?.id;
        }
    }
    if let Some(status) = options.status {
        filter.status = Some(status.parse::<TaskStatus>()?);
    }
    if let Some(priority) = options.priority {
        filter.priority = Some(priority.parse::<Priority>()?);
    }

    let tasks = db.list_tasks(&filter)?;
    if options.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    let now = now_utc();
    for task in &tasks {
        let due = task
            .due_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        let overdue = if task.is_overdue(now) { " (overdue)" } else { "" };
        let recurrence = task.recurrence_display().unwrap_or_default();
        println!(
            "{:>5}  {:<11} {:<7} {:<10}{} {}  {}",
            task.id.unwrap_or_default(),
            task.status,
            task.priority,
            due,
            overdue,
            task.title,
            recurrence
        );
    }
    println!("{} task(s)", tasks.len());
    Ok(())
}

/// Handle the progress command
pub fn handle_progress(id: i64, db: &Database) -> Result<(), CliError> {
    let task = db.get_task(id)?;
    let progress = db.task_progress(id, now_utc())?;
    println!("{}", task.title);
    if let (Some(start), Some(end)) = (progress.period_start, progress.period_end) {
        println!(
            "Period: {} to {}",
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        );
    }
    if let Some(goal) = task.goal_display() {
        println!("Goal: {}", goal);
    }
    if let Some(last) = db.last_completion(id)? {
        println!("Last done: {}", last.format("%Y-%m-%d %H:%M"));
    }
    let unit = task.unit_display_name().unwrap_or_default();
    if task.target_value.is_some() {
        println!("Done: {} {}", progress.completed_value, unit);
    } else {
        println!("Done: {} time(s)", progress.completions);
    }
    if progress.is_complete {
        println!("Target reached");
    } else {
        println!("Remaining: {}", progress.remaining);
    }
    Ok(())
}

/// Handle the delete-user command
pub fn handle_delete_user(username: String, db: &Database) -> Result<(), CliError> {
    let user = lookup_user(db, &username)?;
    let id = user.id.ok_or(DatabaseError::MissingId("user"))?;
    db.delete_user(id)?;
    println!("Deleted user {} and all of their tasks", username);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.migrate().unwrap();
        db
    }

    fn new_task(title: &str) -> NewTask {
        NewTask {
            username: "ann".to_string(),
            title: title.to_string(),
            description: String::new(),
            priority: "high".to_string(),
            due: Some("2030-01-15".to_string()),
            every: None,
            times: 1,
            until: None,
            minutes: Some(20),
            tags: "reading".to_string(),
            group: None,
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_task_arguments() {
        let cli = Cli::try_parse_from([
            "selfdev", "add-task", "ann", "Read", "--every", "weekly", "--times", "3",
        ])
        .unwrap();
        match cli.command {
            Commands::AddTask { every, times, priority, .. } => {
                assert_eq!(every.as_deref(), Some("weekly"));
                assert_eq!(times, 3);
                assert_eq!(priority, "medium");
            }
            _ => panic!("expected add-task"),
        }
    }

    #[test]
    fn add_task_for_known_user() {
        let db = open();
        handle_add_user("ann".into(), "ann@example.com".into(), String::new(), String::new(), &db)
            .unwrap();
        handle_add_task(new_task("Read"), &db).unwrap();

        let tasks = db.list_tasks(&TaskFilter::default()).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].priority, Priority::High);
        assert_eq!(tasks[0].estimated_duration, Some(20));
        assert_eq!(
            tasks[0].due_date.unwrap().format("%Y-%m-%d").to_string(),
            "2030-01-15"
        );
    }

    #[test]
    fn add_recurring_task_with_end_date() {
        let db = open();
        handle_add_user("ann".into(), "ann@example.com".into(), String::new(), String::new(), &db)
            .unwrap();
        let mut new = new_task("Gym");
        new.every = Some("weekly".to_string());
        new.times = 3;
        new.until = Some("2030-06-30".to_string());
        handle_add_task(new, &db).unwrap();

        let task = &db.list_tasks(&TaskFilter::default()).unwrap()[0];
        assert!(task.is_recurring);
        assert_eq!(task.recurrence_period, Some(RecurrencePeriod::Weekly));
        assert_eq!(task.recurrence_target_count, Some(3));
        assert!(task.recurrence_end_date.is_some());
    }

    #[test]
    fn end_date_without_recurrence_is_rejected() {
        let db = open();
        handle_add_user("ann".into(), "ann@example.com".into(), String::new(), String::new(), &db)
            .unwrap();
        let mut new = new_task("Read");
        new.until = Some("2030-06-30".to_string());
        assert!(matches!(
            handle_add_task(new, &db),
            Err(CliError::DatabaseError(DatabaseError::InvalidTask(_)))
        ));
    }

    #[test]
    fn bad_arguments_are_reported() {
        let db = open();
        assert!(matches!(
            handle_add_task(new_task("Read"), &db),
            Err(CliError::UnknownUser(_))
        ));

        handle_add_user("ann".into(), "ann@example.com".into(), String::new(), String::new(), &db)
            .unwrap();
        let mut new = new_task("Read");
        new.priority = "whenever".to_string();
        assert!(matches!(handle_add_task(new, &db), Err(CliError::InvalidArgument(_))));

        let mut new = new_task("Read");
        new.due = Some("soon".to_string());
        assert!(matches!(handle_add_task(new, &db), Err(CliError::DateParseError(_))));
    }

    #[test]
    fn tasks_can_be_filed_into_groups() {
        let db = open();
        handle_add_user("ann".into(), "ann@example.com".into(), String::new(), String::new(), &db)
            .unwrap();
        handle_add_group("ann".into(), "Reading".into(), String::new(), "#336699".into(), &db)
            .unwrap();
        let mut new = new_task("Read");
        new.group = Some("Reading".to_string());
        handle_add_task(new, &db).unwrap();
        handle_add_task(new_task("Walk"), &db).unwrap();

        let group = db.get_group_by_name(1, "Reading").unwrap().unwrap();
        assert_eq!(group.color, "#336699");
        assert_eq!(db.group_task_counts(group.id.unwrap()).unwrap(), (1, 0));

        let mut missing = new_task("Swim");
        missing.group = Some("Sports".to_string());
        assert!(matches!(handle_add_task(missing, &db), Err(CliError::UnknownGroup(..))));

        handle_delete_group("ann".into(), "Reading".into(), &db).unwrap();
        let left = db.list_tasks(&TaskFilter::default()).unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].title, "Walk");
    }

    #[test]
    fn list_tasks_group_needs_a_user() {
        assert!(Cli::try_parse_from(["selfdev", "list-tasks", "--group", "Reading"]).is_err());
        assert!(
            Cli::try_parse_from(["selfdev", "list-tasks", "--user", "ann", "--group", "Reading"])
                .is_ok()
        );
    }

    #[test]
    fn delete_user_removes_everything() {
        let db = open();
        handle_seed(&db, false).unwrap();
        handle_delete_user("john_doe".to_string(), &db).unwrap();
        assert_eq!(db.counts().unwrap(), (9, 90, 81));
        assert!(matches!(
            handle_delete_user("john_doe".to_string(), &db),
            Err(CliError::UnknownUser(_))
        ));
    }

    #[test]
    fn seed_with_clear_rebuilds_the_dataset() {
        let db = open();
        handle_add_user("ann".into(), "ann@example.com".into(), String::new(), String::new(), &db)
            .unwrap();
        handle_seed(&db, true).unwrap();
        assert_eq!(db.counts().unwrap(), (10, 100, 90));
        assert!(db.get_user_by_username("ann").unwrap().is_none());
    }
}

//! Idempotent demo data loader.
//!
//! Seeding runs in two transactions. The first inserts the fixture users
//! (skipping usernames that already exist) and their tasks (skipping titles a
//! user already has). The second synthesizes completions for the first four
//! fixture tasks of every user, but only for tasks inserted by this run, so a
//! second run against a seeded store writes nothing and a fixture task that
//! was deleted comes back with its completions.

pub mod fixtures;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tracing::{debug, info};

use crate::database::{Database, DatabaseError};
use crate::models::{Priority, Task, TaskCompletion, TaskStatus, User};
use fixtures::{SeedUser, USERS};

/// Priority of task `i` in every user's list
pub const PRIORITY_LADDER: [Priority; 10] = [
    Priority::Low,
    Priority::Low,
    Priority::Medium,
    Priority::Medium,
    Priority::Medium,
    Priority::Medium,
    Priority::High,
    Priority::High,
    Priority::Urgent,
    Priority::Urgent,
];

/// Tasks before this index start as todo, the rest in progress
const IN_PROGRESS_FROM: usize = 5;
const DUE_STEP_DAYS: i64 = 7;
/// Only this many leading tasks per user get synthetic completions
const TASKS_WITH_COMPLETIONS: usize = 4;
const MAX_COMPLETIONS_PER_TASK: usize = 3;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DatabaseError),
    #[error("SQLite error: {0}")]
    SqliteError(#[from] rusqlite::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users_created: usize,
    pub users_skipped: usize,
    pub tasks_created: usize,
    pub tasks_skipped: usize,
    pub completions_created: usize,
}

/// Number of synthetic completions for the task at 1-based `ordinal`
pub fn completions_for(ordinal: usize) -> usize {
    if ordinal == 0 || ordinal > TASKS_WITH_COMPLETIONS {
        0
    } else {
        ordinal.min(MAX_COMPLETIONS_PER_TASK)
    }
}

/// Seeded rows are backdated so the oldest synthetic completion still
/// falls after task creation, and no task predates its owner.
fn seed_created_at(seed_time: DateTime<Utc>) -> DateTime<Utc> {
    seed_time - Duration::days(MAX_COMPLETIONS_PER_TASK as i64 - 1)
}

fn fixture_user(seed: &SeedUser, seed_time: DateTime<Utc>) -> User {
    let mut user = User::new(seed.username, seed.email);
    user.first_name = seed.first_name.to_string();
    user.last_name = seed.last_name.to_string();
    user.date_joined = seed_created_at(seed_time);
    user
}

fn fixture_task(user_id: i64, index: usize, seed: &SeedUser, seed_time: DateTime<Utc>) -> Task {
    let info = &seed.tasks[index];
    let created_at = seed_created_at(seed_time);
    let mut task = Task::new(user_id, info.title).recurring(info.period, info.target);
    task.description = info.description.to_string();
    task.priority = PRIORITY_LADDER[index];
    task.status = if index < IN_PROGRESS_FROM {
        TaskStatus::Todo
    } else {
        TaskStatus::InProgress
    };
    task.due_date = Some(seed_time + Duration::days(DUE_STEP_DAYS * (index as i64 + 1)));
    task.estimated_duration = Some(info.duration);
    task.tags = info.tags.to_string();
    task.created_at = created_at;
    task.updated_at = created_at;
    task
}

/// Insert the fixture dataset as of `seed_time`
pub fn seed(db: &Database, seed_time: DateTime<Utc>) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();

    let tx = db.conn().unchecked_transaction()?;
    let mut new_tasks = Vec::new();
    for seed_user in &USERS {
        let user_id = match db.insert_user_if_absent(&fixture_user(seed_user, seed_time))? {
            Some(id) => {
                report.users_created += 1;
                info!(username = seed_user.username, "created user");
                id
            }
            None => {
                report.users_skipped += 1;
                match db.get_user_by_username(seed_user.username)?.and_then(|u| u.id) {
                    Some(id) => id,
                    None => continue,
                }
            }
        };

        for (index, info) in seed_user.tasks.iter().enumerate() {
            let title = info.title;
            if db.task_exists(user_id, title)? {
                debug!(username = seed_user.username, title, "task already exists");
                report.tasks_skipped += 1;
                continue;
            }
            let task = fixture_task(user_id, index, seed_user, seed_time);
            let task_id = db.insert_task(&task)?;
            new_tasks.push(SeededTask {
                id: task_id,
                index,
                duration: task.estimated_duration,
            });
            report.tasks_created += 1;
        }
    }
    tx.commit()?;

    report.completions_created = synthesize_completions(db, seed_time, &new_tasks)?;

    info!(
        users_created = report.users_created,
        users_skipped = report.users_skipped,
        tasks_created = report.tasks_created,
        tasks_skipped = report.tasks_skipped,
        completions_created = report.completions_created,
        "seed finished"
    );
    Ok(report)
}

/// A task inserted by the current run and its position in the fixture list
struct SeededTask {
    id: i64,
    index: usize,
    duration: Option<u32>,
}

/// Give the fixture tasks at positions 1..=4 `min(position, 3)` completions,
/// touching only tasks inserted by this run.
fn synthesize_completions(
    db: &Database,
    seed_time: DateTime<Utc>,
    new_tasks: &[SeededTask],
) -> Result<usize, SeedError> {
    let tx = db.conn().unchecked_transaction()?;
    let mut created = 0;

    for task in new_tasks {
        for j in 0..completions_for(task.index + 1) {
            let mut completion = TaskCompletion::new(task.id, seed_time - Duration::days(j as i64));
            completion.notes = format!("Completed session {}", j + 1);
            completion.duration_minutes = task.duration;
            db.insert_completion(&completion)?;
            created += 1;
        }
    }

    tx.commit()?;
    Ok(created)
}

/// Remove all users, tasks and completions
pub fn clear(db: &Database) -> Result<(), SeedError> {
    let tx = db.conn().unchecked_transaction()?;
    tx.execute_batch(
        "DELETE FROM task_completions;
         DELETE FROM tasks;
         DELETE FROM users;",
    )?;
    tx.commit()?;
    info!("cleared users, tasks and completions");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::TaskFilter;
    use crate::models::RecurrencePeriod;
    use chrono::TimeZone;

    fn seed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn open() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.migrate().unwrap();
        db
    }

    fn tasks_of(db: &Database, user_id: i64) -> Vec<Task> {
        db.list_tasks(&TaskFilter {
            user_id: Some(user_id),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn fixture_shape() {
        assert_eq!(USERS.len(), 10);
        for user in &USERS {
            assert_eq!(user.tasks.len(), 10);
        }
        assert_eq!(USERS[0].username, "john_doe");
        assert_eq!(USERS[9].username, "lisa_thomas");
    }

    #[test]
    fn completion_counts_follow_the_window() {
        let counts: Vec<usize> = (1..=10).map(completions_for).collect();
        assert_eq!(counts, vec![1, 2, 3, 3, 0, 0, 0, 0, 0, 0]);
        assert_eq!(completions_for(0), 0);
    }

    #[test]
    fn fresh_seed_produces_the_full_dataset() {
        let db = open();
        let report = seed(&db, seed_time()).unwrap();
        assert_eq!(
            report,
            SeedReport {
                users_created: 10,
                users_skipped: 0,
                tasks_created: 100,
                tasks_skipped: 0,
                completions_created: 90,
            }
        );
        assert_eq!(db.counts().unwrap(), (10, 100, 90));
    }

    #[test]
    fn every_user_gets_ten_tasks_on_a_weekly_due_ladder() {
        let db = open();
        seed(&db, seed_time()).unwrap();

        for user in db.list_users().unwrap() {
            let tasks = tasks_of(&db, user.id.unwrap());
            assert_eq!(tasks.len(), 10);
            let offsets: Vec<i64> = tasks
                .iter()
                .map(|t| (t.due_date.unwrap() - seed_time()).num_days())
                .collect();
            assert_eq!(offsets, vec![7, 14, 21, 28, 35, 42, 49, 56, 63, 70]);

            let priorities: Vec<Priority> = tasks.iter().map(|t| t.priority).collect();
            assert_eq!(priorities, PRIORITY_LADDER.to_vec());

            for (i, task) in tasks.iter().enumerate() {
                let expected = if i < 5 { TaskStatus::Todo } else { TaskStatus::InProgress };
                assert_eq!(task.status, expected);
                assert!(task.is_recurring);
                assert!(task.recurrence_period.is_some());
                assert!(task.validate().is_ok());
            }
        }
    }

    #[test]
    fn completion_counts_per_user_are_1_2_3_3() {
        let db = open();
        seed(&db, seed_time()).unwrap();

        for user in db.list_users().unwrap() {
            let counts: Vec<u32> = tasks_of(&db, user.id.unwrap())
                .iter()
                .map(|t| db.count_completions(t.id.unwrap()).unwrap())
                .collect();
            assert_eq!(counts, vec![1, 2, 3, 3, 0, 0, 0, 0, 0, 0]);
        }
    }

    #[test]
    fn synthetic_completions_mirror_task_duration_and_backdate_by_day() {
        let db = open();
        seed(&db, seed_time()).unwrap();

        for task in db.list_tasks(&TaskFilter::default()).unwrap() {
            let log = db.list_completions(task.id.unwrap()).unwrap();
            for (j, completion) in log.iter().enumerate() {
                assert_eq!(completion.duration_minutes, task.estimated_duration);
                assert_eq!(completion.completed_at, seed_time() - Duration::days(j as i64));
                assert_eq!(completion.notes, format!("Completed session {}", j + 1));
                assert!(completion.completed_at >= task.created_at);
            }
        }
    }

    #[test]
    fn fixture_values_are_carried_over() {
        let db = open();
        seed(&db, seed_time()).unwrap();
        let john = db.get_user_by_username("john_doe").unwrap().unwrap();
        assert_eq!(john.email, "john@example.com");
        assert_eq!(john.full_name(), "John Doe");

        let first = &tasks_of(&db, john.id.unwrap())[0];
        assert_eq!(first.title, "Morning stretching routine");
        assert_eq!(first.recurrence_period, Some(RecurrencePeriod::Daily));
        assert_eq!(first.recurrence_target_count, Some(1));
        assert_eq!(first.estimated_duration, Some(10));
        assert_eq!(first.tags_list(), vec!["fitness", "morning", "flexibility"]);
    }

    #[test]
    fn reseeding_changes_nothing() {
        let db = open();
        seed(&db, seed_time()).unwrap();
        let users = db.list_users().unwrap();
        let tasks = db.list_tasks(&TaskFilter::default()).unwrap();

        let later = seed_time() + Duration::days(30);
        let report = seed(&db, later).unwrap();
        assert_eq!(
            report,
            SeedReport {
                users_created: 0,
                users_skipped: 10,
                tasks_created: 0,
                tasks_skipped: 100,
                completions_created: 0,
            }
        );
        assert_eq!(db.list_users().unwrap(), users);
        assert_eq!(db.list_tasks(&TaskFilter::default()).unwrap(), tasks);
        assert_eq!(db.counts().unwrap(), (10, 100, 90));
    }

    #[test]
    fn deleted_fixture_task_comes_back_with_its_completions() {
        let db = open();
        seed(&db, seed_time()).unwrap();
        let john = db.get_user_by_username("john_doe").unwrap().unwrap();
        let first = tasks_of(&db, john.id.unwrap())[0].clone();
        db.delete_task(first.id.unwrap()).unwrap();

        let report = seed(&db, seed_time()).unwrap();
        assert_eq!(report.tasks_created, 1);
        assert_eq!(report.completions_created, 1);

        let restored = db
            .list_tasks(&TaskFilter { user_id: john.id, ..Default::default() })
            .unwrap()
            .into_iter()
            .find(|t| t.title == first.title)
            .unwrap();
        assert_ne!(restored.id, first.id);
        assert_eq!(db.count_completions(restored.id.unwrap()).unwrap(), 1);
        assert_eq!(db.counts().unwrap(), (10, 100, 90));
    }

    #[test]
    fn seeded_users_join_before_their_tasks_exist() {
        let db = open();
        seed(&db, seed_time()).unwrap();
        for user in db.list_users().unwrap() {
            for task in tasks_of(&db, user.id.unwrap()) {
                assert!(user.date_joined <= task.created_at);
            }
        }
    }

    #[test]
    fn existing_username_keeps_its_own_fields() {
        let db = open();
        let mut squatter = User::new("jane_smith", "someone@else.org");
        squatter.date_joined = seed_time();
        let id = db.insert_user(&squatter).unwrap();

        let report = seed(&db, seed_time()).unwrap();
        assert_eq!(report.users_created, 9);
        assert_eq!(report.users_skipped, 1);
        assert_eq!(db.get_user(id).unwrap().email, "someone@else.org");
        // The skipped user still receives the fixture tasks it was missing
        assert_eq!(tasks_of(&db, id).len(), 10);
    }

    #[test]
    fn deleting_a_seeded_user_cascades() {
        let db = open();
        seed(&db, seed_time()).unwrap();
        let john = db.get_user_by_username("john_doe").unwrap().unwrap();
        db.delete_user(john.id.unwrap()).unwrap();
        // john had 9 completions: 1 + 2 + 3 + 3
        assert_eq!(db.counts().unwrap(), (9, 90, 81));
    }

    #[test]
    fn clear_then_seed_again() {
        let db = open();
        seed(&db, seed_time()).unwrap();
        clear(&db).unwrap();
        assert_eq!(db.counts().unwrap(), (0, 0, 0));
        let report = seed(&db, seed_time()).unwrap();
        assert_eq!(report.users_created, 10);
        assert_eq!(db.counts().unwrap(), (10, 100, 90));
    }
}

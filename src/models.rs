use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a stored or user-supplied enum value is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} '{value}': expected one of {expected}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

/// Implements the string conversions every stored enum needs:
/// `as_str`, `Display`, `FromStr` and the rusqlite `ToSql`/`FromSql` pair.
macro_rules! text_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($ty::$variant),)+
                    _ => Err(ParseEnumError {
                        kind: $kind,
                        value: s.to_string(),
                        expected: concat!($($text, " "),+),
                    }),
                }
            }
        }

        impl ToSql for $ty {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.as_str()))
            }
        }

        impl FromSql for $ty {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                value
                    .as_str()?
                    .parse()
                    .map_err(|e: ParseEnumError| FromSqlError::Other(Box::new(e)))
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

text_enum!(Priority, "priority", {
    Low => "low",
    Medium => "medium",
    High => "high",
    Urgent => "urgent",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
    Archived,
}

text_enum!(TaskStatus, "status", {
    Todo => "todo",
    InProgress => "in_progress",
    Completed => "completed",
    Archived => "archived",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrencePeriod {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Yearly,
}

text_enum!(RecurrencePeriod, "recurrence period", {
    Daily => "daily",
    Weekly => "weekly",
    Biweekly => "biweekly",
    Monthly => "monthly",
    Quarterly => "quarterly",
    Yearly => "yearly",
});

impl RecurrencePeriod {
    /// Start of the period containing `now`, on calendar boundaries
    pub fn period_start(self, now: DateTime<Utc>) -> DateTime<Utc> {
        let day = now.date_naive();
        let start = match self {
            RecurrencePeriod::Daily => day,
            RecurrencePeriod::Weekly => monday_of(day),
            RecurrencePeriod::Biweekly => {
                // Periods begin on even ISO weeks
                let odd_week = i64::from(day.iso_week().week() % 2);
                monday_of(day) - Duration::weeks(odd_week)
            }
            RecurrencePeriod::Monthly => day.with_day(1).unwrap_or(day),
            RecurrencePeriod::Quarterly => {
                let month = (day.month0() / 3) * 3 + 1;
                NaiveDate::from_ymd_opt(day.year(), month, 1).unwrap_or(day)
            }
            RecurrencePeriod::Yearly => NaiveDate::from_ymd_opt(day.year(), 1, 1).unwrap_or(day),
        };
        start.and_time(NaiveTime::MIN).and_utc()
    }

    /// Exclusive end of the period containing `now`
    pub fn period_end(self, now: DateTime<Utc>) -> DateTime<Utc> {
        let start = self.period_start(now);
        match self {
            RecurrencePeriod::Daily => start + Duration::days(1),
            RecurrencePeriod::Weekly => start + Duration::weeks(1),
            RecurrencePeriod::Biweekly => start + Duration::weeks(2),
            RecurrencePeriod::Monthly => add_months(start, 1),
            RecurrencePeriod::Quarterly => add_months(start, 3),
            RecurrencePeriod::Yearly => add_months(start, 12),
        }
    }

    fn adverb(self) -> &'static str {
        match self {
            RecurrencePeriod::Daily => "daily",
            RecurrencePeriod::Weekly => "weekly",
            RecurrencePeriod::Biweekly => "every 2 weeks",
            RecurrencePeriod::Monthly => "monthly",
            RecurrencePeriod::Quarterly => "quarterly",
            RecurrencePeriod::Yearly => "yearly",
        }
    }
}

fn monday_of(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
}

fn add_months(ts: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    ts.checked_add_months(Months::new(months)).unwrap_or(ts)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    Minutes,
    Hours,
    Count,
    Pages,
    Kilometers,
    Meters,
    Calories,
    Steps,
    Custom,
}

text_enum!(UnitType, "unit type", {
    Minutes => "minutes",
    Hours => "hours",
    Count => "count",
    Pages => "pages",
    Kilometers => "kilometers",
    Meters => "meters",
    Calories => "calories",
    Steps => "steps",
    Custom => "custom",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
}

impl User {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            email: email.into(),
            first_name: String::new(),
            last_name: String::new(),
            is_active: true,
            date_joined: crate::utils::now_utc(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub user_id: i64,
    pub group_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub is_recurring: bool,
    pub recurrence_period: Option<RecurrencePeriod>,
    pub recurrence_target_count: Option<u32>,
    pub recurrence_end_date: Option<NaiveDate>,
    pub estimated_duration: Option<u32>, // minutes
    pub tags: String,                    // comma-separated
    pub unit_type: Option<UnitType>,
    pub custom_unit_name: String,
    pub target_value: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(user_id: i64, title: impl Into<String>) -> Self {
        let now = crate::utils::now_utc();
        Self {
            id: None,
            user_id,
            group_id: None,
            title: title.into(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            due_date: None,
            completed_at: None,
            is_recurring: false,
            recurrence_period: None,
            recurrence_target_count: Some(1),
            recurrence_end_date: None,
            estimated_duration: None,
            tags: String::new(),
            unit_type: None,
            custom_unit_name: String::new(),
            target_value: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Make the task recurring with `target` completions per `period`
    pub fn recurring(mut self, period: RecurrencePeriod, target: u32) -> Self {
        self.is_recurring = true;
        self.recurrence_period = Some(period);
        self.recurrence_target_count = Some(target);
        self
    }

    /// Check that recurrence fields only appear on recurring tasks
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if self.is_recurring {
            if self.recurrence_period.is_none() {
                return Err("recurrence period is required for recurring tasks".to_string());
            }
            if self.recurrence_target_count == Some(0) {
                return Err("recurrence target count must be at least 1".to_string());
            }
        } else if self.recurrence_period.is_some() || self.recurrence_end_date.is_some() {
            return Err("recurrence settings require the task to be recurring".to_string());
        }
        Ok(())
    }

    pub fn tags_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.due_date {
            Some(due) => self.status != TaskStatus::Completed && now > due,
            None => false,
        }
    }

    /// Human-readable recurrence, e.g. "Once daily" or "3 times weekly"
    pub fn recurrence_display(&self) -> Option<String> {
        if !self.is_recurring {
            return None;
        }
        let target = self.recurrence_target_count.unwrap_or(1);
        let period = self.recurrence_period.map(|p| p.adverb()).unwrap_or("per period");
        if target == 1 {
            Some(format!("Once {}", period))
        } else {
            Some(format!("{} times {}", target, period))
        }
    }

    /// Bounds of the recurrence period containing `now`
    pub fn current_period(&self, now: DateTime<Utc>) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        if !self.is_recurring {
            return None;
        }
        let period = self.recurrence_period?;
        Some((period.period_start(now), period.period_end(now)))
    }

    pub fn unit_display_name(&self) -> Option<String> {
        let unit = self.unit_type?;
        let name = match unit {
            UnitType::Custom if self.custom_unit_name.is_empty() => "units",
            UnitType::Custom => self.custom_unit_name.as_str(),
            UnitType::Minutes => "min",
            UnitType::Hours => "h",
            UnitType::Count => "x",
            UnitType::Pages => "pages",
            UnitType::Kilometers => "km",
            UnitType::Meters => "m",
            UnitType::Calories => "kcal",
            UnitType::Steps => "steps",
        };
        Some(name.to_string())
    }

    /// Target with its unit, e.g. "1h 30min" or "20 pages"
    pub fn goal_display(&self) -> Option<String> {
        let target = self.target_value.filter(|t| *t > 0)?;
        let unit = self.unit_type?;
        let text = match unit {
            UnitType::Minutes if target >= 60 => match (target / 60, target % 60) {
                (hours, 0) => format!("{}h", hours),
                (hours, minutes) => format!("{}h {}min", hours, minutes),
            },
            UnitType::Minutes => format!("{} min", target),
            UnitType::Hours => format!("{}h", target),
            _ => format!("{} {}", target, self.unit_display_name()?),
        };
        Some(text)
    }

    /// Target converted to minutes; only time units convert
    pub fn target_in_minutes(&self) -> Option<u32> {
        let target = self.target_value.filter(|t| *t > 0)?;
        match self.unit_type? {
            UnitType::Minutes => Some(target),
            UnitType::Hours => Some(target.saturating_mul(60)),
            _ => None,
        }
    }
}

/// A named family of related tasks owned by one user.
/// Deleting the group deletes its tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskGroup {
    pub id: Option<i64>,
    pub user_id: i64,
    pub name: String,
    pub description: String,
    pub color: String,
    pub icon: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaskGroup {
    pub fn new(user_id: i64, name: impl Into<String>) -> Self {
        let now = crate::utils::now_utc();
        Self {
            id: None,
            user_id,
            name: name.into(),
            description: String::new(),
            color: String::new(),
            icon: String::new(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// One entry of a task's completion log. Never updated once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskCompletion {
    pub id: Option<i64>,
    pub task_id: i64,
    pub completed_at: DateTime<Utc>,
    pub notes: String,
    pub duration_minutes: Option<u32>,
    pub completed_value: Option<u32>,
}

impl TaskCompletion {
    pub fn new(task_id: i64, completed_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            task_id,
            completed_at,
            notes: String::new(),
            duration_minutes: None,
            completed_value: None,
        }
    }
}

/// Progress of a task within its current recurrence period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskProgress {
    pub task_id: i64,
    pub period_start: Option<DateTime<Utc>>,
    pub period_end: Option<DateTime<Utc>>,
    pub completions: u32,
    pub completed_value: u32,
    pub is_complete: bool,
    pub remaining: u32,
}

impl TaskProgress {
    /// Work out progress from the completions that fall inside the current period
    pub fn compute(task: &Task, in_period: &[TaskCompletion], now: DateTime<Utc>) -> Self {
        let task_id = task.id.unwrap_or_default();
        if !task.is_recurring {
            let done = task.status == TaskStatus::Completed;
            return Self {
                task_id,
                period_start: None,
                period_end: None,
                completions: 0,
                completed_value: 0,
                is_complete: done,
                remaining: if done { 0 } else { 1 },
            };
        }

        let bounds = task.current_period(now);
        let completions = in_period.len() as u32;
        let completed_value = in_period
            .iter()
            .filter_map(|c| c.completed_value)
            .fold(0u32, u32::saturating_add);
        let (is_complete, remaining) = match task.target_value {
            Some(target) if target > 0 => (
                completed_value >= target,
                target.saturating_sub(completed_value),
            ),
            _ => {
                let target = task.recurrence_target_count.unwrap_or(1).max(1);
                (completions >= target, target.saturating_sub(completions))
            }
        };

        Self {
            task_id,
            period_start: bounds.map(|b| b.0),
            period_end: bounds.map(|b| b.1),
            completions,
            completed_value,
            is_complete,
            remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 30, 0).unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn enum_text_round_trips() {
        for p in Priority::ALL {
            assert_eq!(p.as_str().parse::<Priority>().unwrap(), *p);
        }
        assert_eq!("in_progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert!("someday".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn parse_error_names_the_kind() {
        let err = "hourly".parse::<RecurrencePeriod>().unwrap_err();
        assert!(err.to_string().contains("recurrence period"));
        assert!(err.to_string().contains("hourly"));
    }

    #[test]
    fn priorities_order_by_urgency() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::High < Priority::Urgent);
    }

    #[test]
    fn daily_and_weekly_bounds() {
        // 2025-03-13 is a Thursday
        let now = at(2025, 3, 13, 15);
        assert_eq!(RecurrencePeriod::Daily.period_start(now), midnight(2025, 3, 13));
        assert_eq!(RecurrencePeriod::Daily.period_end(now), midnight(2025, 3, 14));
        assert_eq!(RecurrencePeriod::Weekly.period_start(now), midnight(2025, 3, 10));
        assert_eq!(RecurrencePeriod::Weekly.period_end(now), midnight(2025, 3, 17));
    }

    #[test]
    fn biweekly_starts_on_even_iso_week() {
        // 2025-03-13 is in ISO week 11, so the period began on week 10's Monday
        let now = at(2025, 3, 13, 15);
        assert_eq!(RecurrencePeriod::Biweekly.period_start(now), midnight(2025, 3, 3));
        assert_eq!(RecurrencePeriod::Biweekly.period_end(now), midnight(2025, 3, 17));
        // 2025-03-18 is in ISO week 12
        let now = at(2025, 3, 18, 9);
        assert_eq!(RecurrencePeriod::Biweekly.period_start(now), midnight(2025, 3, 17));
    }

    #[test]
    fn calendar_periods() {
        let now = at(2025, 8, 20, 12);
        assert_eq!(RecurrencePeriod::Monthly.period_start(now), midnight(2025, 8, 1));
        assert_eq!(RecurrencePeriod::Monthly.period_end(now), midnight(2025, 9, 1));
        assert_eq!(RecurrencePeriod::Quarterly.period_start(now), midnight(2025, 7, 1));
        assert_eq!(RecurrencePeriod::Quarterly.period_end(now), midnight(2025, 10, 1));
        assert_eq!(RecurrencePeriod::Yearly.period_start(now), midnight(2025, 1, 1));
        assert_eq!(RecurrencePeriod::Yearly.period_end(now), midnight(2026, 1, 1));
    }

    #[test]
    fn december_rolls_into_next_year() {
        let now = at(2025, 12, 31, 23);
        assert_eq!(RecurrencePeriod::Monthly.period_end(now), midnight(2026, 1, 1));
        assert_eq!(RecurrencePeriod::Quarterly.period_start(now), midnight(2025, 10, 1));
    }

    #[test]
    fn validate_recurrence_fields() {
        let task = Task::new(1, "Read");
        assert!(task.validate().is_ok());

        let mut task = Task::new(1, "Read");
        task.is_recurring = true;
        assert!(task.validate().is_err());

        let task = Task::new(1, "Read").recurring(RecurrencePeriod::Weekly, 3);
        assert!(task.validate().is_ok());

        let mut task = Task::new(1, "Read");
        task.recurrence_period = Some(RecurrencePeriod::Daily);
        assert!(task.validate().is_err());

        let task = Task::new(1, "Read").recurring(RecurrencePeriod::Daily, 0);
        assert!(task.validate().is_err());

        assert!(Task::new(1, "  ").validate().is_err());
    }

    #[test]
    fn tags_are_trimmed_and_non_empty() {
        let mut task = Task::new(1, "Run");
        task.tags = "running, cardio,, endurance ,".to_string();
        assert_eq!(task.tags_list(), vec!["running", "cardio", "endurance"]);
        task.tags.clear();
        assert!(task.tags_list().is_empty());
    }

    #[test]
    fn overdue_only_when_not_completed() {
        let now = at(2025, 3, 13, 15);
        let mut task = Task::new(1, "File taxes");
        assert!(!task.is_overdue(now));
        task.due_date = Some(now - Duration::days(1));
        assert!(task.is_overdue(now));
        task.status = TaskStatus::Completed;
        assert!(!task.is_overdue(now));
    }

    #[test]
    fn recurrence_display_text() {
        assert_eq!(Task::new(1, "x").recurrence_display(), None);
        let once = Task::new(1, "x").recurring(RecurrencePeriod::Daily, 1);
        assert_eq!(once.recurrence_display().as_deref(), Some("Once daily"));
        let thrice = Task::new(1, "x").recurring(RecurrencePeriod::Weekly, 3);
        assert_eq!(thrice.recurrence_display().as_deref(), Some("3 times weekly"));
    }

    #[test]
    fn unit_names() {
        let mut task = Task::new(1, "x");
        assert_eq!(task.unit_display_name(), None);
        task.unit_type = Some(UnitType::Kilometers);
        assert_eq!(task.unit_display_name().as_deref(), Some("km"));
        task.unit_type = Some(UnitType::Custom);
        assert_eq!(task.unit_display_name().as_deref(), Some("units"));
        task.custom_unit_name = "laps".to_string();
        assert_eq!(task.unit_display_name().as_deref(), Some("laps"));
    }

    #[test]
    fn progress_by_count_and_by_value() {
        let now = at(2025, 3, 13, 15);
        let mut task = Task::new(1, "Gym").recurring(RecurrencePeriod::Weekly, 3);
        task.id = Some(7);
        let done = vec![TaskCompletion::new(7, now), TaskCompletion::new(7, now)];

        let progress = TaskProgress::compute(&task, &done, now);
        assert_eq!(progress.completions, 2);
        assert!(!progress.is_complete);
        assert_eq!(progress.remaining, 1);
        assert_eq!(progress.period_start, Some(midnight(2025, 3, 10)));

        task.target_value = Some(50);
        let mut pages = TaskCompletion::new(7, now);
        pages.completed_value = Some(60);
        let progress = TaskProgress::compute(&task, &[pages], now);
        assert!(progress.is_complete);
        assert_eq!(progress.remaining, 0);
    }

    #[test]
    fn huge_completed_values_saturate() {
        let now = at(2025, 3, 13, 15);
        let mut task = Task::new(1, "Walk").recurring(RecurrencePeriod::Daily, 1);
        task.id = Some(3);
        task.target_value = Some(10);
        let mut big = TaskCompletion::new(3, now);
        big.completed_value = Some(3_000_000_000);
        let progress = TaskProgress::compute(&task, &[big.clone(), big], now);
        assert_eq!(progress.completed_value, u32::MAX);
        assert!(progress.is_complete);
        assert_eq!(progress.remaining, 0);
    }

    #[test]
    fn goal_display_formats_time_and_units() {
        let mut task = Task::new(1, "Practice");
        assert_eq!(task.goal_display(), None);
        task.target_value = Some(90);
        assert_eq!(task.goal_display(), None);

        task.unit_type = Some(UnitType::Minutes);
        assert_eq!(task.goal_display().as_deref(), Some("1h 30min"));
        task.target_value = Some(120);
        assert_eq!(task.goal_display().as_deref(), Some("2h"));
        task.target_value = Some(45);
        assert_eq!(task.goal_display().as_deref(), Some("45 min"));

        task.unit_type = Some(UnitType::Hours);
        task.target_value = Some(3);
        assert_eq!(task.goal_display().as_deref(), Some("3h"));

        task.unit_type = Some(UnitType::Pages);
        task.target_value = Some(20);
        assert_eq!(task.goal_display().as_deref(), Some("20 pages"));

        task.unit_type = Some(UnitType::Custom);
        task.custom_unit_name = "laps".to_string();
        assert_eq!(task.goal_display().as_deref(), Some("20 laps"));

        task.target_value = Some(0);
        assert_eq!(task.goal_display(), None);
    }

    #[test]
    fn only_time_targets_convert_to_minutes() {
        let mut task = Task::new(1, "Study");
        task.target_value = Some(2);
        assert_eq!(task.target_in_minutes(), None);
        task.unit_type = Some(UnitType::Hours);
        assert_eq!(task.target_in_minutes(), Some(120));
        task.unit_type = Some(UnitType::Minutes);
        assert_eq!(task.target_in_minutes(), Some(2));
        task.unit_type = Some(UnitType::Count);
        assert_eq!(task.target_in_minutes(), None);
    }

    #[test]
    fn progress_for_one_off_tasks() {
        let now = at(2025, 3, 13, 15);
        let mut task = Task::new(1, "Renew passport");
        let progress = TaskProgress::compute(&task, &[], now);
        assert_eq!((progress.is_complete, progress.remaining), (false, 1));
        task.status = TaskStatus::Completed;
        let progress = TaskProgress::compute(&task, &[], now);
        assert_eq!((progress.is_complete, progress.remaining), (true, 0));
    }
}

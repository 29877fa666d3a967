use chrono::{DateTime, Duration, NaiveDate, Utc};
use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;
use std::thread;

/// Profile mode for the application (dev or prod)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Dev,
    Prod,
}

impl Profile {
    fn app_name(self) -> &'static str {
        match self {
            Profile::Dev => "selfdev-dev",
            Profile::Prod => "selfdev",
        }
    }
}

/// Get the configuration directory path.
/// The dev profile gets its own directory so it never touches prod data.
pub fn get_config_dir(profile: Profile) -> Option<PathBuf> {
    ProjectDirs::from("com", "selfdev", profile.app_name())
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the data directory path (where the SQLite file lives by default)
pub fn get_data_dir(profile: Profile) -> Option<PathBuf> {
    ProjectDirs::from("com", "selfdev", profile.app_name())
        .map(|dirs| dirs.data_dir().to_path_buf())
}

/// Expand `~` in a path string to the user's home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = BaseDirs::new().map(|d| d.home_dir().to_path_buf()) {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Parse a date string in ISO 8601 format (YYYY-MM-DD)
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
}

/// Parse a due date given on the command line.
/// Accepts RFC 3339 timestamps or a bare date (taken as midnight UTC).
pub fn parse_due(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(ts) => Ok(ts.with_timezone(&Utc)),
        Err(_) => {
            let date = parse_date(value)?;
            Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
        }
    }
}

/// Current time truncated to whole seconds, matching what SQLite text columns round-trip
pub fn now_utc() -> DateTime<Utc> {
    let now = Utc::now();
    now - Duration::nanoseconds(i64::from(now.timestamp_subsec_nanos()))
}

/// Call `attempt` until it succeeds, sleeping `interval` between failures.
/// There is no retry limit; `on_retry` sees the attempt number and the error.
pub fn poll_until<T, E, F, R>(interval: std::time::Duration, mut attempt: F, mut on_retry: R) -> T
where
    F: FnMut() -> Result<T, E>,
    R: FnMut(u64, &E),
{
    let mut attempts: u64 = 0;
    loop {
        attempts += 1;
        match attempt() {
            Ok(value) => return value,
            Err(e) => {
                on_retry(attempts, &e);
                thread::sleep(interval);
            }
        }
    }
}

/// Parse a boolean-ish environment value ("1", "true", "yes", "on")
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn expand_path_leaves_absolute_paths_alone() {
        assert_eq!(expand_path("/tmp/app.db"), PathBuf::from("/tmp/app.db"));
    }

    #[test]
    fn parse_due_accepts_plain_dates() {
        let due = parse_due("2025-03-14").unwrap();
        assert_eq!((due.year(), due.month(), due.day()), (2025, 3, 14));
        assert_eq!(due.hour(), 0);
    }

    #[test]
    fn parse_due_accepts_rfc3339() {
        let due = parse_due("2025-03-14T10:30:00+02:00").unwrap();
        assert_eq!(due.hour(), 8);
    }

    #[test]
    fn parse_due_rejects_garbage() {
        assert!(parse_due("next tuesday").is_err());
    }

    #[test]
    fn now_utc_has_no_subsecond_part() {
        assert_eq!(now_utc().timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn poll_until_retries_until_success() {
        let mut calls = 0;
        let mut retries = Vec::new();
        let value = poll_until(
            std::time::Duration::from_millis(1),
            || {
                calls += 1;
                if calls < 4 { Err("not yet") } else { Ok(calls) }
            },
            |n, _| retries.push(n),
        );
        assert_eq!(value, 4);
        assert_eq!(retries, vec![1, 2, 3]);
    }

    #[test]
    fn flags() {
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" 1 "));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}

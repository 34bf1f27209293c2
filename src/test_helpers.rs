use chrono::NaiveDate;

use crate::task::Task;

/// Parse a `YYYY-MM-DD` literal for tests.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Create a `Task` from a name and a `YYYY-MM-DD` literal.
pub fn make_task(name: &str, due: &str) -> Task {
    Task::new(name, date(due))
}

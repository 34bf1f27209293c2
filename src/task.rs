use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Days-until-due at or below which a task is `High`.
pub const HIGH_MAX_DAYS: i64 = 2;
/// Days-until-due at or below which a task is `Medium` (and above `HIGH_MAX_DAYS`).
pub const MEDIUM_MAX_DAYS: i64 = 5;

/// How pressing a task is, derived from the days left until it is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    /// Classify a days-until-due count. Overdue (negative) counts are `High`.
    pub fn from_days(days: i64) -> Self {
        if days <= HIGH_MAX_DAYS {
            Urgency::High
        } else if days <= MEDIUM_MAX_DAYS {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::High => "High",
            Urgency::Medium => "Medium",
            Urgency::Low => "Low",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named item with a due date. Fields are fixed once constructed.
///
/// Everything time-dependent takes `today` explicitly, so the same task can be
/// evaluated against any calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    name: String,
    due_date: NaiveDate,
}

impl Task {
    pub fn new(name: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            due_date,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Whole calendar days from `today` until the due date; negative when overdue.
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }

    pub fn urgency_level(&self, today: NaiveDate) -> Urgency {
        Urgency::from_days(self.days_until_due(today))
    }

    /// The line shown for this task, e.g. `Pay bills - Due: 2025-01-01 (High)`.
    pub fn display(&self, today: NaiveDate) -> String {
        format!(
            "{} - Due: {} ({})",
            self.name,
            self.due_date.format("%Y-%m-%d"),
            self.urgency_level(today)
        )
    }
}

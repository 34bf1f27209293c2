use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{DateError, Error, Result};
use crate::task::Task;

/// Ordered, in-memory collection of tasks loaded from a line-oriented source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with the tasks parsed from `lines`.
    ///
    /// Lines that do not split into exactly two fields are skipped. A bad
    /// date on an otherwise well-formed line fails the whole load, and on
    /// any failure the previous contents are kept as they were.
    pub fn load<I, S>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tasks = parse_tasks(lines)?;
        info!(count = self.tasks.len(), "tasks loaded");
        Ok(())
    }

    /// Read `path` in full and [`load`](Self::load) its lines.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        self.load(split_lines(&content))
    }

    /// Stable sort, soonest due first, as of `today`.
    pub fn sort_by_urgency(&mut self, today: NaiveDate) {
        self.tasks.sort_by_key(|task| task.days_until_due(today));
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Parse every line into a fresh task list without touching any store.
pub fn parse_tasks<I, S>(lines: I) -> Result<Vec<Task>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tasks = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        let fields = split_fields(line.as_ref());
        let [name, due] = fields.as_slice() else {
            debug!(line = line_no, fields = fields.len(), "skipping malformed line");
            continue;
        };
        let value = due.trim();
        let due_date = parse_due_date(value).map_err(|source| Error::DateParse {
            line: line_no,
            value: value.to_string(),
            source,
        })?;
        tasks.push(Task::new(name.trim(), due_date));
    }
    Ok(tasks)
}

/// Split text into lines ended by `\r\n`, `\n` or a bare `\r`.
///
/// A terminator at the very end does not produce a trailing empty line.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        match rest.find(|c| c == '\r' || c == '\n') {
            Some(i) => {
                lines.push(&rest[..i]);
                let end = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + end..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

/// Split on commas, dropping trailing empty fields.
///
/// `"a, 2025-01-01,"` yields two fields and `"a,"` yields one.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Parse a strict `YYYY-MM-DD` calendar date.
pub fn parse_due_date(value: &str) -> std::result::Result<NaiveDate, DateError> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(DateError::Shape);
    }
    Ok(NaiveDate::parse_from_str(value, "%Y-%m-%d")?)
}

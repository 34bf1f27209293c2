use chrono::NaiveDate;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::task::{Task, Urgency};

#[derive(Debug, Serialize)]
struct TaskView<'a> {
    name: &'a str,
    due_date: NaiveDate,
    days_until_due: i64,
    urgency: Urgency,
}

/// One `display()` line per task, newline-terminated.
pub fn render_text(tasks: &[Task], today: NaiveDate) -> String {
    let mut out = String::new();
    for task in tasks {
        out.push_str(&task.display(today));
        out.push('\n');
    }
    out
}

pub fn render_json(tasks: &[Task], today: NaiveDate) -> Result<String> {
    let views: Vec<TaskView<'_>> = tasks
        .iter()
        .map(|task| TaskView {
            name: task.name(),
            due_date: task.due_date(),
            days_until_due: task.days_until_due(today),
            urgency: task.urgency_level(today),
        })
        .collect();
    let mut out = serde_json::to_string_pretty(&views)?;
    out.push('\n');
    Ok(out)
}

pub fn render(tasks: &[Task], today: NaiveDate, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(tasks, today)),
        OutputFormat::Json => render_json(tasks, today),
    }
}

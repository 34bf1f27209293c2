#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// Write `content` to `tasks.txt` inside `dir` and return its path.
pub fn write_tasks(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("tasks.txt");
    std::fs::write(&path, content).unwrap();
    path
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinError;
use tracing::{info, warn};

use crate::config::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::render;
use crate::store::TaskStore;

/// Terminal front end: owns one store and reloads it on request.
pub struct App {
    store: TaskStore,
    tasks_file: PathBuf,
    format: OutputFormat,
    today: Option<NaiveDate>,
}

/// What the interactive loop should do with one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reload,
    Quit,
    Unknown,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "" | "r" => Command::Reload,
            "q" => Command::Quit,
            _ => Command::Unknown,
        }
    }
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            store: TaskStore::new(),
            tasks_file: config.tasks_file.clone(),
            format: config.format,
            today: config.today,
        }
    }

    /// The date urgency is evaluated against: the configured override, or the
    /// local calendar date at call time.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Load and sort on a blocking worker, then publish the result in one step.
    /// On failure the store keeps whatever it held before.
    pub async fn reload(&mut self) -> Result<()> {
        let path = self.tasks_file.clone();
        let today = self.today();
        let joined = tokio::task::spawn_blocking(move || load_sorted(&path, today)).await;
        self.publish(joined)
    }

    /// Replace the store only when the worker finished and its load succeeded.
    fn publish(
        &mut self,
        joined: std::result::Result<Result<TaskStore>, JoinError>,
    ) -> Result<()> {
        let store = joined.map_err(|e| Error::Background(e.to_string()))??;
        self.store = store;
        Ok(())
    }

    /// Render the current contents.
    pub fn view(&self) -> Result<String> {
        render::render(self.store.tasks(), self.today(), self.format)
    }

    /// Reload, then show the listing on `out` or the failure on `err`.
    /// Returns whether the reload succeeded.
    pub async fn reload_and_show<W: Write, E: Write>(
        &mut self,
        out: &mut W,
        err: &mut E,
    ) -> Result<bool> {
        match self.reload().await {
            Ok(()) => {
                info!(
                    file = %self.tasks_file.display(),
                    count = self.store.len(),
                    "reloaded"
                );
                out.write_all(self.view()?.as_bytes())
                    .map_err(|e| Error::io("<stdout>", e))?;
                Ok(true)
            }
            Err(e) => {
                warn!(error = %e, "reload failed");
                writeln!(err, "Failed to load tasks: {e}")
                    .map_err(|e| Error::io("<stderr>", e))?;
                Ok(false)
            }
        }
    }

    /// Reload once on start, then once per reload command until quit or EOF.
    pub async fn run_interactive<R, W, E>(
        &mut self,
        input: R,
        out: &mut W,
        err: &mut E,
    ) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
        E: Write,
    {
        self.reload_and_show(out, err).await?;
        let mut lines = input.lines();
        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| Error::io("<stdin>", e))?
        {
            match Command::parse(&line) {
                Command::Reload => {
                    self.reload_and_show(out, err).await?;
                }
                Command::Quit => break,
                Command::Unknown => {
                    writeln!(
                        err,
                        "unknown command: {} (Enter or r to reload, q to quit)",
                        line.trim()
                    )
                    .map_err(|e| Error::io("<stderr>", e))?;
                }
            }
        }
        Ok(())
    }
}

fn load_sorted(path: &Path, today: NaiveDate) -> Result<TaskStore> {
    let mut store = TaskStore::new();
    store.load_file(path)?;
    store.sort_by_urgency(today);
    Ok(store)
}

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::{Error, Result};

pub const DEFAULT_CONFIG_FILE: &str = "urgency.toml";
pub const DEFAULT_TASKS_FILE: &str = "tasks.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::ConfigValidation(format!(
                "unknown format: {other} (expected: text, json)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub tasks_file: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub tasks_file: PathBuf,
    pub format: OutputFormat,
    pub today: Option<chrono::NaiveDate>,
    pub interactive: bool,
}

impl Config {
    /// Load the config file (explicit `--config`, else `urgency.toml` if it
    /// exists) and merge CLI overrides on top.
    pub fn load(cli: &Cli) -> Result<Self> {
        let file_config = match cli.config.as_deref() {
            Some(path) => {
                let path = Path::new(path);
                if !path.exists() {
                    return Err(Error::ConfigNotFound(path.to_path_buf()));
                }
                read_config(path)?
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    read_config(path)?
                } else {
                    ConfigFile::default()
                }
            }
        };

        merge(file_config, cli)
    }
}

fn read_config(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<ConfigFile> {
    let config: ConfigFile = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        OutputFormat::parse(format)?;
    }
    if let Some(ref tasks_file) = config.tasks_file
        && tasks_file.trim().is_empty()
    {
        return Err(Error::ConfigValidation(
            "tasks_file must not be empty".to_string(),
        ));
    }
    Ok(())
}

pub fn merge(file: ConfigFile, cli: &Cli) -> Result<Config> {
    let format = match cli.format.as_deref().or(file.format.as_deref()) {
        Some(f) => OutputFormat::parse(f)?,
        None => OutputFormat::default(),
    };
    Ok(Config {
        tasks_file: PathBuf::from(
            cli.file
                .clone()
                .or(file.tasks_file)
                .unwrap_or_else(|| DEFAULT_TASKS_FILE.to_string()),
        ),
        format,
        today: cli.today,
        interactive: cli.interactive,
    })
}

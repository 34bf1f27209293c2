use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    ConfigValidation(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: invalid due date {value:?}: {source}")]
    DateParse {
        line: usize,
        value: String,
        #[source]
        source: DateError,
    },

    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),

    #[error("background load failed: {0}")]
    Background(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Why a due date was rejected.
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    #[error("expected YYYY-MM-DD")]
    Shape,

    #[error(transparent)]
    Chrono(#[from] chrono::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

use std::path::PathBuf;
use thiserror::Error;

/// qlhier error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    ConfigValidation(String),

    #[error("Invalid class pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("Error creating DOT file {}: {source}", path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for qlhier operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config validation error
    pub fn config_validation(msg: impl Into<String>) -> Self {
        Error::ConfigValidation(msg.into())
    }

    /// Create an output creation error
    pub fn output_create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::OutputCreate {
            path: path.into(),
            source,
        }
    }
}

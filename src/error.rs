use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{0}")]
    Usage(String),

    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    #[error("Invalid argument '{argument}' for filter {filter}")]
    InvalidFilterArgument { filter: String, argument: String },

    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),
}

impl PipelineError {
    /// Classify an I/O failure on `path`, keeping "missing" apart from other errors.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => PipelineError::NotFound {
                path: path.to_path_buf(),
            },
            _ => PipelineError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Every error is fatal for the command line program.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

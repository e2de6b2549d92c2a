use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL, LOG_FILE_ENV, LOG_SINK_ENV,
};
use crate::error::{PipelineError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Sink name as written by the user; see [`LogSink::parse`]
    pub sink: String,
    pub file: PathBuf,
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            sink: LogSink::Console.as_str().to_string(),
            file: PathBuf::from(DEFAULT_LOG_FILE),
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Where diagnostic log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    Console,
    File,
    None,
}

impl LogSink {
    /// Case-insensitive lookup by name
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "console" => Some(LogSink::Console),
            "file" => Some(LogSink::File),
            "none" => Some(LogSink::None),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogSink::Console => "console",
            LogSink::File => "file",
            LogSink::None => "none",
        }
    }
}

impl LoggingConfig {
    /// The configured sink, falling back to the console for unknown names
    pub fn sink(&self) -> LogSink {
        LogSink::parse(&self.sink).unwrap_or(LogSink::Console)
    }

    /// True when the configured sink name is not one of the known sinks
    pub fn has_unknown_sink(&self) -> bool {
        LogSink::parse(&self.sink).is_none()
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `number_pipeline.toml` in the
    /// working directory is used when present, otherwise defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Apply `NUMBER_PIPELINE_LOG_*` overrides from the given lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(sink) = lookup(LOG_SINK_ENV).filter(|v| !v.trim().is_empty()) {
            self.logging.sink = sink;
        }
        if let Some(file) = lookup(LOG_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            self.logging.file = PathBuf::from(file);
        }
    }
}

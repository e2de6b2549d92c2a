use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::error::{PipelineError, Result};

/// Anything that can produce the full number sequence for a run
pub trait NumberSource {
    /// Human readable origin, used in log lines
    fn describe(&self) -> String;

    /// Read the whole sequence in source order
    fn read_numbers(&self) -> Result<Vec<i64>>;
}

/// Reads whitespace-separated integers from a text file
#[derive(Debug, Clone)]
pub struct FileNumberSource {
    path: PathBuf,
}

impl FileNumberSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NumberSource for FileNumberSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_numbers(&self) -> Result<Vec<i64>> {
        read_numbers(&self.path)
    }
}

/// A fixed sequence held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    numbers: Vec<i64>,
}

impl InMemorySource {
    pub fn new(numbers: Vec<i64>) -> Self {
        Self { numbers }
    }
}

impl NumberSource for InMemorySource {
    fn describe(&self) -> String {
        format!("<memory: {} numbers>", self.numbers.len())
    }

    fn read_numbers(&self) -> Result<Vec<i64>> {
        Ok(self.numbers.clone())
    }
}

/// Read all integers from `path`.
///
/// A missing file is [`PipelineError::NotFound`], never an empty sequence.
#[instrument]
pub fn read_numbers(path: &Path) -> Result<Vec<i64>> {
    let content = fs::read(path).map_err(|e| PipelineError::from_io(path, e))?;
    let numbers = parse_numbers(&content);
    debug!("Read {} numbers", numbers.len());
    Ok(numbers)
}

/// Extract integers the way formatted stream extraction does.
///
/// Leading whitespace is skipped, then an optional sign and a run of digits
/// are taken. Scanning stops for good at the first place where no integer
/// can be read, or where the digits overflow `i64`. `12abc` therefore yields
/// `12` and ends the scan, while `5-3` yields `5` and `-3`. Input is raw
/// bytes, so anything outside ASCII is just another non-integer.
pub fn parse_numbers(bytes: &[u8]) -> Vec<i64> {
    let mut numbers = Vec::new();
    let mut pos = 0;

    loop {
        while pos < bytes.len() && is_space(bytes[pos]) {
            pos += 1;
        }
        if pos == bytes.len() {
            break;
        }

        let start = pos;
        if bytes[pos] == b'+' || bytes[pos] == b'-' {
            pos += 1;
        }
        let digits_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == digits_start {
            break;
        }

        let parsed = std::str::from_utf8(&bytes[start..pos])
            .ok()
            .and_then(|digits| digits.parse::<i64>().ok());
        match parsed {
            Some(n) => numbers.push(n),
            None => break,
        }
    }

    numbers
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

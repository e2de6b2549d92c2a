use std::io::{self, Stdout, Write};

use tracing::warn;

/// Listener notified of every passing number and once when the run ends
pub trait NumberObserver {
    fn on_number(&mut self, number: i64);
    fn on_finished(&mut self);
}

/// Prints each passing number and a completion line
#[derive(Debug)]
pub struct PrintObserver<W: Write = Stdout> {
    out: W,
}

impl PrintObserver<Stdout> {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for PrintObserver<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> PrintObserver<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> NumberObserver for PrintObserver<W> {
    fn on_number(&mut self, number: i64) {
        if let Err(e) = writeln!(self.out, "Number passed: {}", number) {
            warn!("Failed to write passed number {}: {}", number, e);
        }
    }

    fn on_finished(&mut self) {
        if let Err(e) = writeln!(self.out, "Processing finished.").and_then(|_| self.out.flush()) {
            warn!("Failed to write completion line: {}", e);
        }
    }
}

/// Counts passing numbers and reports the total when the run ends
#[derive(Debug)]
pub struct CountObserver<W: Write = Stdout> {
    count: usize,
    out: W,
}

impl CountObserver<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for CountObserver<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> CountObserver<W> {
    pub fn with_writer(out: W) -> Self {
        Self { count: 0, out }
    }

    /// Numbers seen so far
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> NumberObserver for CountObserver<W> {
    fn on_number(&mut self, _number: i64) {
        self.count += 1;
    }

    fn on_finished(&mut self) {
        if let Err(e) = writeln!(self.out, "Total passed numbers: {}", self.count)
            .and_then(|_| self.out.flush())
        {
            warn!("Failed to write passed total: {}", e);
        }
    }
}

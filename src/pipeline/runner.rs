use tracing::{debug, info, instrument};

use super::filter::NumberFilter;
use super::observer::NumberObserver;
use super::source::NumberSource;
use crate::error::Result;

/// Counts from one complete run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Numbers evaluated by the filter
    pub total: usize,
    /// Numbers that passed and were handed to observers
    pub passed: usize,
}

impl RunSummary {
    pub fn rejected(&self) -> usize {
        self.total - self.passed
    }
}

/// Drives numbers through a filter and fans passing values out to observers.
///
/// Runs hold no state of their own. Observers are borrowed for the duration
/// of a run and notified in slice order.
pub struct PipelineRunner;

impl PipelineRunner {
    /// Read the whole sequence from `source`, then run it.
    ///
    /// A read failure ends the run before any observer is notified.
    #[instrument(skip_all, fields(source = %source.describe()))]
    pub fn run_source(
        source: &dyn NumberSource,
        filter: &dyn NumberFilter,
        observers: &mut [&mut dyn NumberObserver],
    ) -> Result<RunSummary> {
        debug!("Reading numbers");
        let numbers = source.read_numbers()?;
        Ok(Self::run(filter, observers, &numbers))
    }

    /// Evaluate every number in order; each passing number goes to every
    /// observer, then every observer is told the run finished, exactly once.
    #[instrument(skip_all, fields(filter = ?filter, total = numbers.len()))]
    pub fn run(
        filter: &dyn NumberFilter,
        observers: &mut [&mut dyn NumberObserver],
        numbers: &[i64],
    ) -> RunSummary {
        info!("Starting run with {} observers", observers.len());
        let mut summary = RunSummary {
            total: numbers.len(),
            passed: 0,
        };

        for &number in numbers {
            if !filter.keep(number) {
                continue;
            }
            summary.passed += 1;
            for observer in observers.iter_mut() {
                observer.on_number(number);
            }
        }

        for observer in observers.iter_mut() {
            observer.on_finished();
        }

        info!(
            "Run finished: {} passed, {} rejected",
            summary.passed,
            summary.rejected()
        );
        summary
    }
}

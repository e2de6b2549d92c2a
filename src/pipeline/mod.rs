// Number pipeline: source -> filter -> observers

pub mod filter;
pub mod observer;
pub mod registry;
pub mod runner;
pub mod source;

// Re-export key types from each stage
pub use filter::{EvenFilter, GreaterThanFilter, NumberFilter, OddFilter};
pub use observer::{CountObserver, NumberObserver, PrintObserver};
pub use registry::{FilterConstructor, FilterRegistry};
pub use runner::{PipelineRunner, RunSummary};
pub use source::{read_numbers, FileNumberSource, InMemorySource, NumberSource};

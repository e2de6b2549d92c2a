use clap::error::ErrorKind;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

use number_pipeline::config::Config;
use number_pipeline::constants;
use number_pipeline::error::{PipelineError, Result};
use number_pipeline::logging;
use number_pipeline::pipeline::{
    CountObserver, FileNumberSource, FilterRegistry, PipelineRunner, PrintObserver, RunSummary,
};

#[derive(Parser)]
#[command(name = "number_pipeline")]
#[command(about = "Filter the integers in a file and report the ones that pass")]
#[command(version)]
#[command(after_help = "Example filters: EVEN, ODD, GT5")]
struct Cli {
    /// Filter name, e.g. EVEN, ODD or GT5
    filter: String,

    /// Text file of whitespace-separated integers
    file: PathBuf,

    /// Configuration file (defaults to number_pipeline.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log sink: console, file or none
    #[arg(long)]
    log_sink: Option<String>,
}

fn main() {
    let code = run();
    std::process::exit(code);
}

/// Everything that must be dropped before exiting (the log writer guard) lives in here
fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return 0;
        }
        Err(_) => return fail(PipelineError::Usage(constants::usage())),
    };

    dotenv::dotenv().ok();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return fail(e),
    };
    config.apply_env_overrides(|key| std::env::var(key).ok());
    if let Some(sink) = cli.log_sink {
        config.logging.sink = sink;
    }

    let _guard = match logging::init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => return fail(e),
    };

    match process(&cli.filter, &cli.file) {
        Ok(summary) => {
            info!(
                "Processed {} numbers, {} passed",
                summary.total, summary.passed
            );
            0
        }
        Err(e) => fail(e),
    }
}

fn process(filter_name: &str, path: &Path) -> Result<RunSummary> {
    let registry = FilterRegistry::with_builtin_filters();
    let filter = registry.create(filter_name)?;

    let source = FileNumberSource::new(path);
    let mut printer = PrintObserver::new();
    let mut counter = CountObserver::new();

    PipelineRunner::run_source(&source, filter.as_ref(), &mut [&mut printer, &mut counter])
}

fn fail(err: PipelineError) -> i32 {
    // Below the default level so stderr carries one diagnostic line
    info!("Run failed: {}", err);
    match &err {
        PipelineError::Usage(usage) => eprintln!("{}", usage),
        other => eprintln!("error: {}", other),
    }
    err.exit_code()
}

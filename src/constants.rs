/// Filter prefixes registered by default
/// A requested filter name is matched against these, the remainder becomes the filter's argument
pub const EVEN_FILTER: &str = "EVEN";
pub const ODD_FILTER: &str = "ODD";
pub const GREATER_THAN_FILTER: &str = "GT";

/// Filter names shown in the usage message
pub const EXAMPLE_FILTERS: [&str; 3] = ["EVEN", "ODD", "GT5"];

// Configuration and log file defaults
pub const DEFAULT_CONFIG_FILE: &str = "number_pipeline.toml";
pub const DEFAULT_LOG_FILE: &str = "app.log";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// Environment overrides applied after the config file
pub const LOG_SINK_ENV: &str = "NUMBER_PIPELINE_LOG_SINK";
pub const LOG_FILE_ENV: &str = "NUMBER_PIPELINE_LOG_FILE";

/// Usage text printed when the command line cannot be parsed
pub fn usage() -> String {
    format!(
        "Usage: number_pipeline <FILTER> <FILE>\nExample filters: {}",
        EXAMPLE_FILTERS.join(", ")
    )
}

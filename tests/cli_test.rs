use anyhow::Result;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(dir: &Path, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_number_pipeline"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("NUMBER_PIPELINE_LOG_SINK")
        .env_remove("NUMBER_PIPELINE_LOG_FILE")
        .output()?;
    Ok(output)
}

fn workspace(numbers: &str) -> Result<TempDir> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("numbers.txt"), numbers)?;
    Ok(dir)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_even_run_prints_passed_numbers_and_total() -> Result<()> {
    let dir = workspace("1 2 3 4 5 6")?;
    let output = run_cli(dir.path(), &["EVEN", "numbers.txt"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "Number passed: 2\nNumber passed: 4\nNumber passed: 6\n\
         Processing finished.\nTotal passed numbers: 3\n"
    );
    Ok(())
}

#[test]
fn test_greater_than_run() -> Result<()> {
    let dir = workspace("1 2 3 4 5 6")?;
    let output = run_cli(dir.path(), &["GT4", "numbers.txt"])?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Number passed: 5\nNumber passed: 6\nProcessing finished.\nTotal passed numbers: 2\n"
    );
    Ok(())
}

#[test]
fn test_wrong_argument_count_prints_usage() -> Result<()> {
    let dir = workspace("")?;
    for args in [&[][..], &["EVEN"][..], &["EVEN", "numbers.txt", "extra"][..]] {
        let output = run_cli(dir.path(), args)?;
        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
        assert!(stdout(&output).is_empty());
        let err = stderr(&output);
        assert!(err.contains("Usage: number_pipeline <FILTER> <FILE>"), "{err}");
        assert!(err.contains("EVEN, ODD, GT5"), "{err}");
    }
    Ok(())
}

#[test]
fn test_unknown_filter_fails() -> Result<()> {
    let dir = workspace("1 2 3")?;
    let output = run_cli(dir.path(), &["PRIME", "numbers.txt"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert_eq!(stderr(&output).trim(), "error: Unknown filter: PRIME");
    Ok(())
}

#[test]
fn test_filter_without_threshold_fails() -> Result<()> {
    let dir = workspace("1 2 3")?;
    let output = run_cli(dir.path(), &["GT", "numbers.txt"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Invalid argument"));
    Ok(())
}

#[test]
fn test_missing_file_fails_without_output() -> Result<()> {
    let dir = workspace("")?;
    let output = run_cli(dir.path(), &["ODD", "absent.txt"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert_eq!(stderr(&output).trim(), "error: File not found: absent.txt");
    Ok(())
}

#[test]
fn test_empty_file_reports_zero() -> Result<()> {
    let dir = workspace("")?;
    let output = run_cli(dir.path(), &["ODD", "numbers.txt"])?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Processing finished.\nTotal passed numbers: 0\n"
    );
    Ok(())
}

#[test]
fn test_file_sink_from_config_writes_log() -> Result<()> {
    let dir = workspace("1 2 3")?;
    fs::write(
        dir.path().join("number_pipeline.toml"),
        "[logging]\nsink = \"file\"\nfile = \"run.log\"\nlevel = \"info\"\n",
    )?;

    let output = run_cli(dir.path(), &["ODD", "numbers.txt"])?;

    assert!(output.status.success());
    assert!(stderr(&output).is_empty());
    let log = fs::read_to_string(dir.path().join("run.log"))?;
    assert!(log.contains("Run finished: 2 passed, 1 rejected"), "{log}");
    Ok(())
}

#[test]
fn test_log_sink_flag_overrides_config() -> Result<()> {
    let dir = workspace("1 2 3")?;
    fs::write(
        dir.path().join("number_pipeline.toml"),
        "[logging]\nsink = \"file\"\nfile = \"run.log\"\n",
    )?;

    let output = run_cli(dir.path(), &["--log-sink", "none", "ODD", "numbers.txt"])?;

    assert!(output.status.success());
    assert!(!dir.path().join("run.log").exists());
    Ok(())
}

#[test]
fn test_missing_config_file_fails() -> Result<()> {
    let dir = workspace("1 2 3")?;
    let output = run_cli(dir.path(), &["--config", "nope.toml", "EVEN", "numbers.txt"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Configuration error"));
    Ok(())
}

#[test]
fn test_unopenable_log_file_fails_cleanly() -> Result<()> {
    let dir = workspace("1 2 3")?;
    fs::create_dir(dir.path().join("logs"))?;
    fs::write(
        dir.path().join("number_pipeline.toml"),
        "[logging]\nsink = \"file\"\nfile = \"logs\"\n",
    )?;

    let output = run_cli(dir.path(), &["ODD", "numbers.txt"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert_eq!(err.lines().count(), 1, "{err}");
    assert!(err.starts_with("error: Configuration error"), "{err}");
    Ok(())
}

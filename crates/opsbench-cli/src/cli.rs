//! CLI argument definitions and command execution for the `opsbench` binary.

use clap::Parser;
use opsbench_core::{
    all_suites, get_suite, io, report, run_suites, BenchError, BenchSuite, RunSummary,
};
use std::path::PathBuf;

const BANNER_TITLE: &str = "Rust Basic Operations Benchmark";

/// Run micro-benchmarks of basic Rust operations and print timings plus a
/// JSON summary.
#[derive(Parser, Debug)]
#[command(name = "opsbench")]
#[command(about = "Micro-benchmarks for basic Rust operations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Run only the named suites (repeatable; default runs all)
    #[arg(long = "suite", value_name = "ID")]
    pub suites: Vec<String>,

    /// List available suites and exit
    #[arg(long)]
    pub list: bool,

    /// Also write the JSON summary to a file
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print only the JSON summary, no per-result lines
    #[arg(long)]
    pub json_only: bool,

    /// Output verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful execution
    Success = 0,
    /// Invalid input or arguments (e.g. unknown suite id)
    InvalidInput = 2,
    /// File not found or inaccessible
    FileError = 4,
    /// Internal error
    InternalError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl From<&BenchError> for ExitCode {
    fn from(err: &BenchError) -> Self {
        match err {
            BenchError::UnknownSuite(_) => ExitCode::InvalidInput,
            BenchError::File(_) => ExitCode::FileError,
            BenchError::Serialization(_) => ExitCode::InternalError,
        }
    }
}

/// Run the CLI with the given arguments and return the exit code.
pub fn run(cli: &Cli) -> Result<ExitCode, BenchError> {
    if cli.list {
        for suite in all_suites() {
            println!("{:<12} {}", suite.id(), suite.title());
        }
        return Ok(ExitCode::Success);
    }

    let suites = select_suites(&cli.suites)?;

    if !cli.json_only {
        println!("{}", BANNER_TITLE);
        println!("{}", "=".repeat(BANNER_TITLE.len()));
        println!();
    }

    let results = run_suites(&suites, cli.json_only);
    let summary = RunSummary::new(results);

    if cli.json_only {
        println!("{}", report::summary_json(&summary)?);
    } else {
        report::print_summary(&summary)?;
    }

    if let Some(path) = &cli.output {
        let written = io::write_summary(path, &summary)?;
        tracing::info!(path = %written.display(), "summary written");
    }

    Ok(ExitCode::Success)
}

/// Resolve suite ids against the registry; empty means every suite.
fn select_suites(ids: &[String]) -> Result<Vec<Box<dyn BenchSuite>>, BenchError> {
    if ids.is_empty() {
        return Ok(all_suites());
    }
    ids.iter()
        .map(|id| get_suite(id).ok_or_else(|| BenchError::UnknownSuite(id.clone())))
        .collect()
}

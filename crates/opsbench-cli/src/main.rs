//! opsbench: micro-benchmark runner for basic Rust operations.
//!
//! # Usage
//!
//! ```bash
//! # Run every suite, print timings and the JSON summary
//! opsbench
//!
//! # Run a single suite
//! opsbench --suite arithmetic
//!
//! # Machine-readable output only, saved to a file as well
//! opsbench --json-only --output results.json
//!
//! # List available suites
//! opsbench --list
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 2: Invalid input or arguments
//! - 4: File not found or inaccessible
//! - 10: Internal error

mod cli;

use clap::Parser;
use cli::{run, Cli, ExitCode};

fn main() {
    let args = Cli::parse();

    // Initialize tracing subscriber for logging
    let default_level = if args.quiet {
        tracing::Level::ERROR
    } else {
        match args.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let exit_code = match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(&err)
        }
    };
    std::process::exit(exit_code.into());
}

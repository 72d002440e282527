//! Core library for ops-bench, a micro-benchmark suite that measures the
//! wall-clock cost of basic Rust operations.
//!
//! The reusable piece is the timing harness in [`timing`]: it runs a
//! caller-supplied closure for a warm-up phase, then times a tight sequential
//! loop with a monotonic clock and reports the average per-call duration in
//! fractional milliseconds. Everything else builds on that harness:
//!
//! - [`result`]: the [`BenchmarkResult`] record and the [`RunSummary`] JSON
//!   envelope (`language`, `runtime`, `results`)
//! - [`suites`]: the [`BenchSuite`] trait, the suite registry, and the
//!   arithmetic / string / list benchmark suites
//! - [`report`]: console rendering (section headers, aligned result lines,
//!   indented JSON summary)
//! - [`io`]: writing and reading summary files
//!
//! # Usage
//!
//! ```rust,no_run
//! use opsbench_core::{run_all_suites, report, RunSummary};
//!
//! let results = run_all_suites();
//! let summary = RunSummary::new(results);
//! report::print_summary(&summary).unwrap();
//! ```

pub mod error;
pub mod io;
pub mod report;
pub mod result;
pub mod suites;
pub mod timing;

pub use error::{BenchError, Result};
pub use result::{BenchmarkResult, RunSummary};
pub use suites::{
    all_suites, get_suite, list_suite_ids, run_all_suites, run_suites, BenchCase, BenchSuite,
};
pub use timing::{measure, measure_with_warmup, warmup_count};

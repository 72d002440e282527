//! Benchmark suites and the suite registry.
//!
//! Each suite implements the [`BenchSuite`] trait and contributes a list of
//! [`BenchCase`]s: a stable result id, a console label, an iteration count,
//! and the operation to time. [`all_suites`] is the canonical registry and
//! runs in a fixed order so result sequences are stable across runs.

mod arithmetic;
mod lists;
mod strings;

pub use arithmetic::ArithmeticSuite;
pub use lists::ListSuite;
pub use strings::StringSuite;

use crate::report;
use crate::result::BenchmarkResult;
use crate::timing;

/// Category tag shared by every suite in this crate.
pub const CATEGORY: &str = "basic_ops";

/// A single benchmark case: one operation timed over a fixed iteration count.
#[derive(Debug, Clone, Copy)]
pub struct BenchCase {
    /// Stable identifier used in the JSON output (e.g. "int_add")
    pub id: &'static str,
    /// Human-readable label for the console line (e.g. "Add two integers")
    pub label: &'static str,
    /// Number of measured iterations
    pub iterations: u32,
    /// The operation to time
    pub op: fn(),
}

impl BenchCase {
    /// Time this case and produce its result record.
    pub fn measure(&self) -> BenchmarkResult {
        let value = timing::measure(self.op, self.iterations);
        BenchmarkResult::new(self.id, value, CATEGORY)
    }
}

/// A named group of benchmark cases.
pub trait BenchSuite: Send + Sync {
    /// Unique lowercase identifier for this suite (e.g. "arithmetic").
    fn id(&self) -> &str;

    /// Console section title (e.g. "Arithmetic Operations").
    fn title(&self) -> &str;

    /// The cases in this suite, in output order.
    fn cases(&self) -> Vec<BenchCase>;

    /// Run every case and collect results without printing.
    fn run(&self) -> Vec<BenchmarkResult> {
        self.cases().iter().map(BenchCase::measure).collect()
    }
}

impl std::fmt::Debug for dyn BenchSuite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenchSuite").field("id", &self.id()).finish()
    }
}

/// Registry of all benchmark suites, in output order.
pub fn all_suites() -> Vec<Box<dyn BenchSuite>> {
    vec![
        Box::new(ArithmeticSuite),
        Box::new(StringSuite),
        Box::new(ListSuite),
    ]
}

/// Get a specific suite by id.
pub fn get_suite(id: &str) -> Option<Box<dyn BenchSuite>> {
    all_suites().into_iter().find(|s| s.id() == id)
}

/// List all available suite ids.
pub fn list_suite_ids() -> Vec<String> {
    all_suites().iter().map(|s| s.id().to_string()).collect()
}

/// Run the given suites in order, printing a section header and one result
/// line per case unless `quiet` is set. Returns the ordered results.
///
/// A panic in any measured operation propagates and aborts the remaining
/// sequence; no partial summary is produced.
pub fn run_suites(suites: &[Box<dyn BenchSuite>], quiet: bool) -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    for suite in suites {
        tracing::info!(suite = suite.id(), "running suite");
        if !quiet {
            report::print_header(suite.title());
        }
        for case in suite.cases() {
            let result = case.measure();
            tracing::debug!(case = case.id, value_ms = result.value, "case complete");
            if !quiet {
                report::print_result(case.label, result.value);
            }
            results.push(result);
        }
        if !quiet {
            println!();
        }
    }

    results
}

/// Run every registered suite with console output.
pub fn run_all_suites() -> Vec<BenchmarkResult> {
    run_suites(&all_suites(), false)
}

//! Benchmark result records and the JSON summary envelope.

use serde::{Deserialize, Serialize};

/// A single benchmark measurement.
///
/// Immutable once created; constructed by the runner after each timed run and
/// collected into an ordered sequence for final reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Identifier for the measured operation (e.g. "int_add")
    pub name: String,

    /// Average per-call duration in fractional milliseconds
    pub value: f64,

    /// Tag grouping related results (e.g. "basic_ops")
    pub category: String,
}

impl BenchmarkResult {
    /// Create a new benchmark result.
    pub fn new(name: impl Into<String>, value: f64, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            category: category.into(),
        }
    }
}

impl std::fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} = {:.6} ms", self.category, self.name, self.value)
    }
}

/// The JSON summary emitted after all benchmarks complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Implementation language of the measured operations
    pub language: String,

    /// Toolchain identification for the run
    pub runtime: String,

    /// Ordered sequence of benchmark results
    pub results: Vec<BenchmarkResult>,
}

impl RunSummary {
    /// Build a summary for this toolchain from an ordered result sequence.
    pub fn new(results: Vec<BenchmarkResult>) -> Self {
        Self {
            language: "Rust".to_string(),
            runtime: concat!("rustc ", env!("CARGO_PKG_RUST_VERSION")).to_string(),
            results,
        }
    }
}

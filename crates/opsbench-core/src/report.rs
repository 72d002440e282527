//! Console rendering for benchmark output.
//!
//! Output shape: each suite prints a `== <title> ==` header followed by one
//! aligned line per result, and the run ends with an indented JSON summary
//! under a `JSON Output:` marker.

use crate::error::Result;
use crate::result::RunSummary;

/// Section header line for a suite.
pub fn section_header(title: &str) -> String {
    format!("== {} ==", title)
}

/// A single result line: name left-aligned to 40 chars, value 12 chars wide
/// with 6 decimal places, `ms` suffix.
pub fn result_line(label: &str, value_ms: f64) -> String {
    format!("  {:<40} {:>12.6} ms", label, value_ms)
}

/// Print a suite header to stdout.
pub fn print_header(title: &str) {
    println!("{}", section_header(title));
}

/// Print a single result line to stdout.
pub fn print_result(label: &str, value_ms: f64) {
    println!("{}", result_line(label, value_ms));
}

/// Render the summary as indented JSON.
pub fn summary_json(summary: &RunSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Print the JSON summary block to stdout.
pub fn print_summary(summary: &RunSummary) -> Result<()> {
    println!("JSON Output:");
    println!("{}", summary_json(summary)?);
    Ok(())
}

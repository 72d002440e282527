//! Timing harness: run a closure N times and report the average per-call
//! duration.
//!
//! The harness runs a warm-up phase first so that one-time costs (lazy
//! initialization, cold caches) do not land in the measured window, then
//! times a tight sequential loop with a monotonic clock. GC-based runtimes
//! force a collection between warm-up and measurement; Rust has no background
//! collector to quiesce, so that step has no equivalent here.
//!
//! Measurement is strictly single-threaded and synchronous. Panics raised by
//! the measured closure propagate unmodified; there is no retry and no
//! suppression.

use std::time::Instant;

/// Number of warm-up invocations for a given iteration count.
///
/// One tenth of the iteration count, capped at 1000.
pub fn warmup_count(iterations: u32) -> u32 {
    (iterations / 10).min(1000)
}

/// Measure the average per-call duration of `operation` over `iterations`
/// calls, in fractional milliseconds.
///
/// Runs [`warmup_count`] unmeasured invocations first. The return value is
/// elapsed wall-clock time divided by `iterations`, unrounded; rounding is a
/// presentation concern for the caller.
///
/// The closure is invoked purely for its side effects. Wrap computed values
/// in [`std::hint::black_box`] inside the closure when the optimizer would
/// otherwise delete the work being measured.
///
/// # Panics
///
/// Panics if `iterations` is zero, and propagates any panic raised by
/// `operation` during warm-up or measurement.
pub fn measure<F: FnMut()>(operation: F, iterations: u32) -> f64 {
    let warmup = warmup_count(iterations);
    measure_with_warmup(operation, iterations, warmup)
}

/// [`measure`] with an explicit warm-up count instead of the default rule.
pub fn measure_with_warmup<F: FnMut()>(mut operation: F, iterations: u32, warmup: u32) -> f64 {
    assert!(iterations > 0, "iterations must be positive");

    for _ in 0..warmup {
        operation();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        operation();
    }
    let elapsed = start.elapsed();

    elapsed.as_secs_f64() * 1_000.0 / f64::from(iterations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::hint::black_box;
    use std::time::Duration;

    #[test]
    fn test_noop_returns_non_negative() {
        let value = measure(|| {}, 10_000);
        assert!(value >= 0.0);
    }

    #[test]
    fn test_warmup_count_rule() {
        assert_eq!(warmup_count(100_000), 1000);
        assert_eq!(warmup_count(10_000), 1000);
        assert_eq!(warmup_count(1_000), 100);
        assert_eq!(warmup_count(100), 10);
        assert_eq!(warmup_count(9), 0);
        assert_eq!(warmup_count(1), 0);
    }

    #[test]
    fn test_invocation_count_is_warmup_plus_iterations() {
        let mut calls = 0u32;
        let iterations = 5_000;
        measure(|| calls += 1, iterations);
        assert_eq!(calls, warmup_count(iterations) + iterations);
    }

    #[test]
    fn test_explicit_warmup_invocation_count() {
        let mut calls = 0u32;
        measure_with_warmup(|| calls += 1, 200, 7);
        assert_eq!(calls, 207);
    }

    #[test]
    fn test_busy_wait_approximates_known_cost() {
        // Spin for a fixed 200us per call; the reported average should land
        // near that, with a wide band since timing tests are approximate.
        let per_call = Duration::from_micros(200);
        let value = measure(
            || {
                let start = Instant::now();
                while start.elapsed() < per_call {
                    black_box(());
                }
            },
            50,
        );
        assert!(value >= 0.2, "measured {value} ms, expected >= 0.2 ms");
        assert!(value < 4.0, "measured {value} ms, expected < 4.0 ms");
    }

    #[test]
    fn test_repeated_measurement_has_no_systematic_drift() {
        let per_call = Duration::from_micros(100);
        let op = || {
            let start = Instant::now();
            while start.elapsed() < per_call {
                black_box(());
            }
        };
        let first = measure(op, 30);
        let second = measure(op, 30);
        // Noise only, not accumulation: both runs stay in the same band.
        assert!(first > 0.0 && second > 0.0);
        assert!(second / first < 10.0);
        assert!(first / second < 10.0);
    }

    #[test]
    fn test_simple_addition_end_to_end() {
        let value = measure(|| {
            black_box(black_box(1) + black_box(1));
        }, 1_000);
        assert!(value >= 0.0);
        assert!(value < 10.0);
    }

    #[test]
    #[should_panic(expected = "iterations must be positive")]
    fn test_zero_iterations_panics() {
        measure(|| {}, 0);
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_operation_panic_propagates() {
        measure(|| panic!("boom"), 100);
    }

    proptest! {
        #[test]
        fn prop_invocation_count(iterations in 1u32..500) {
            let mut calls = 0u32;
            measure(|| calls += 1, iterations);
            prop_assert_eq!(calls, warmup_count(iterations) + iterations);
        }

        #[test]
        fn prop_warmup_never_exceeds_cap(iterations in 1u32..u32::MAX) {
            prop_assert!(warmup_count(iterations) <= 1000);
            prop_assert!(warmup_count(iterations) <= iterations / 10);
        }
    }
}

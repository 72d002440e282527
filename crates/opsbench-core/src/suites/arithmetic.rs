//! Arithmetic operation benchmarks: integer and float add, multiply, divide.

use super::{BenchCase, BenchSuite};
use std::hint::black_box;

/// Integer and floating-point arithmetic on fixed operands.
pub struct ArithmeticSuite;

impl BenchSuite for ArithmeticSuite {
    fn id(&self) -> &str {
        "arithmetic"
    }

    fn title(&self) -> &str {
        "Arithmetic Operations"
    }

    fn cases(&self) -> Vec<BenchCase> {
        vec![
            BenchCase {
                id: "int_add",
                label: "Add two integers",
                iterations: 100_000,
                op: int_add,
            },
            BenchCase {
                id: "int_multiply",
                label: "Multiply two integers",
                iterations: 100_000,
                op: int_multiply,
            },
            BenchCase {
                id: "int_divide",
                label: "Divide two integers",
                iterations: 100_000,
                op: int_divide,
            },
            BenchCase {
                id: "float_add",
                label: "Add two floats",
                iterations: 100_000,
                op: float_add,
            },
            BenchCase {
                id: "float_multiply",
                label: "Multiply two floats",
                iterations: 100_000,
                op: float_multiply,
            },
            BenchCase {
                id: "float_divide",
                label: "Divide two floats",
                iterations: 100_000,
                op: float_divide,
            },
        ]
    }
}

// Operands are routed through black_box so the operations survive constant
// folding and the results are not dead-code eliminated.

fn int_add() {
    black_box(black_box(123_i64) + black_box(456_i64));
}

fn int_multiply() {
    black_box(black_box(123_i64) * black_box(456_i64));
}

fn int_divide() {
    black_box(black_box(123_i64) / black_box(456_i64));
}

fn float_add() {
    black_box(black_box(123.456_f64) + black_box(789.012_f64));
}

fn float_multiply() {
    black_box(black_box(123.456_f64) * black_box(789.012_f64));
}

fn float_divide() {
    black_box(black_box(123.456_f64) / black_box(789.012_f64));
}

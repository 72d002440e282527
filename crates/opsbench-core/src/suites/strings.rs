//! String operation benchmarks: concatenation, formatting, join, split.

use super::{BenchCase, BenchSuite};
use std::hint::black_box;

const HELLO_X10: &str = "hellohellohellohellohellohellohellohellohellohello";
const WORLD_X10: &str = "worldworldworldworldworldworldworldworldworldworld";
const WORDS: [&str; 4] = ["hello", "world", "python", "test"];
const SENTENCE: &str = "hello world python test";

/// String construction and decomposition on fixed inputs.
pub struct StringSuite;

impl BenchSuite for StringSuite {
    fn id(&self) -> &str {
        "strings"
    }

    fn title(&self) -> &str {
        "String Operations"
    }

    fn cases(&self) -> Vec<BenchCase> {
        vec![
            BenchCase {
                id: "concat_small",
                label: "Concatenation (+) small strings",
                iterations: 100_000,
                op: concat_small,
            },
            BenchCase {
                id: "concat_medium",
                label: "Concatenation (+) medium strings",
                iterations: 10_000,
                op: concat_medium,
            },
            BenchCase {
                id: "f_string",
                label: "Inline format! interpolation",
                iterations: 100_000,
                op: inline_format,
            },
            BenchCase {
                id: "format_method",
                label: "Positional format! arguments",
                iterations: 100_000,
                op: positional_format,
            },
            BenchCase {
                id: "percent_formatting",
                label: "Concatenation formatting",
                iterations: 100_000,
                op: push_str_format,
            },
            BenchCase {
                id: "join_small",
                label: "Join small list",
                iterations: 100_000,
                op: join_small,
            },
            BenchCase {
                id: "split",
                label: "Split string",
                iterations: 100_000,
                op: split,
            },
        ]
    }
}

fn concat_small() {
    let s1 = black_box("hello");
    let s2 = black_box("world");
    black_box(s1.to_owned() + " " + s2);
}

fn concat_medium() {
    let s1 = black_box(HELLO_X10);
    let s2 = black_box(WORLD_X10);
    black_box(s1.to_owned() + " " + s2);
}

fn inline_format() {
    let name = black_box("Alice");
    let age = black_box(30);
    black_box(format!("Hello {name}, you are {age} years old"));
}

fn positional_format() {
    black_box(format!(
        "Hello {}, you are {} years old",
        black_box("Alice"),
        black_box(30)
    ));
}

fn push_str_format() {
    let name = black_box("Alice");
    let age = black_box(30);
    let mut s = String::from("Hello ");
    s.push_str(name);
    s.push_str(", you are ");
    s.push_str(&age.to_string());
    s.push_str(" years old");
    black_box(s);
}

fn join_small() {
    black_box(black_box(WORDS).join(" "));
}

fn split() {
    black_box(black_box(SENTENCE).split_whitespace().collect::<Vec<&str>>());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_shape() {
        let suite = StringSuite;
        assert_eq!(suite.id(), "strings");
        assert_eq!(suite.title(), "String Operations");
        assert_eq!(suite.cases().len(), 7);
    }

    #[test]
    fn test_case_ids() {
        let ids: Vec<&str> = StringSuite.cases().iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                "concat_small",
                "concat_medium",
                "f_string",
                "format_method",
                "percent_formatting",
                "join_small",
                "split"
            ]
        );
    }

    #[test]
    fn test_medium_operands_are_ten_repeats() {
        assert_eq!(HELLO_X10, "hello".repeat(10));
        assert_eq!(WORLD_X10, "world".repeat(10));
    }

    #[test]
    fn test_measured_values_non_negative() {
        for case in StringSuite.cases() {
            let result = case.measure();
            assert!(result.value >= 0.0, "{} was negative", case.id);
        }
    }
}

//! Vector operation benchmarks: push, collect vs. loop construction at
//! several sizes, extend, clone.

use super::{BenchCase, BenchSuite};
use std::hint::black_box;
use std::sync::OnceLock;

// Shared read-only clone source, built outside the measured window.
static CLONE_SOURCE: OnceLock<Vec<i32>> = OnceLock::new();

fn clone_source() -> &'static Vec<i32> {
    CLONE_SOURCE.get_or_init(|| (0..100).collect())
}

/// Vec construction and growth on fixed sizes.
pub struct ListSuite;

impl BenchSuite for ListSuite {
    fn id(&self) -> &str {
        "lists"
    }

    fn title(&self) -> &str {
        "List Operations"
    }

    fn cases(&self) -> Vec<BenchCase> {
        vec![
            BenchCase {
                id: "list_append",
                label: "Vec::push() single item",
                iterations: 100_000,
                op: vec_push,
            },
            BenchCase {
                id: "list_comp_10",
                label: "Range collect (10 items)",
                iterations: 10_000,
                op: collect_10,
            },
            BenchCase {
                id: "for_loop_10",
                label: "For-loop (10 items)",
                iterations: 10_000,
                op: for_loop_10,
            },
            BenchCase {
                id: "list_comp_100",
                label: "Range collect (100 items)",
                iterations: 10_000,
                op: collect_100,
            },
            BenchCase {
                id: "for_loop_100",
                label: "For-loop (100 items)",
                iterations: 10_000,
                op: for_loop_100,
            },
            BenchCase {
                id: "list_comp_1000",
                label: "Range collect (1000 items)",
                iterations: 1_000,
                op: collect_1000,
            },
            BenchCase {
                id: "for_loop_1000",
                label: "For-loop (1000 items)",
                iterations: 1_000,
                op: for_loop_1000,
            },
            BenchCase {
                id: "list_extend",
                label: "Vec::extend() 3 items",
                iterations: 100_000,
                op: vec_extend,
            },
            BenchCase {
                id: "list_copy_100",
                label: "Vec clone (100 items)",
                iterations: 10_000,
                op: vec_clone_100,
            },
        ]
    }
}

fn vec_push() {
    let mut v = Vec::new();
    v.push(black_box(1));
    black_box(v);
}

fn collect_10() {
    black_box((0..black_box(10)).collect::<Vec<i32>>());
}

fn for_loop_10() {
    let mut v = Vec::new();
    for i in 0..black_box(10) {
        v.push(i);
    }
    black_box(v);
}

fn collect_100() {
    black_box((0..black_box(100)).collect::<Vec<i32>>());
}

fn for_loop_100() {
    let mut v = Vec::new();
    for i in 0..black_box(100) {
        v.push(i);
    }
    black_box(v);
}

fn collect_1000() {
    black_box((0..black_box(1000)).collect::<Vec<i32>>());
}

fn for_loop_1000() {
    let mut v = Vec::new();
    for i in 0..black_box(1000) {
        v.push(i);
    }
    black_box(v);
}

fn vec_extend() {
    let mut a = vec![1, 2, 3];
    a.extend_from_slice(black_box(&[4, 5, 6]));
    black_box(a);
}

fn vec_clone_100() {
    black_box(clone_source().clone());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_shape() {
        let suite = ListSuite;
        assert_eq!(suite.id(), "lists");
        assert_eq!(suite.title(), "List Operations");
        assert_eq!(suite.cases().len(), 9);
    }

    #[test]
    fn test_case_ids() {
        let ids: Vec<&str> = ListSuite.cases().iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                "list_append",
                "list_comp_10",
                "for_loop_10",
                "list_comp_100",
                "for_loop_100",
                "list_comp_1000",
                "for_loop_1000",
                "list_extend",
                "list_copy_100"
            ]
        );
    }

    #[test]
    fn test_clone_source_is_100_items() {
        assert_eq!(clone_source().len(), 100);
        assert_eq!(clone_source()[99], 99);
    }

    #[test]
    fn test_measured_values_non_negative() {
        for case in ListSuite.cases() {
            let result = case.measure();
            assert!(result.value >= 0.0, "{} was negative", case.id);
        }
    }
}

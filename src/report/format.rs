use std::fmt::Write;

use crate::solver::{Solution, ValueStore};

/// Every value of every level, sorted by value within a level.
pub fn format_levels(store: &ValueStore) -> String {
    let mut out = String::new();
    for (number, level) in store.levels() {
        let _ = writeln!(out, "\nUsed {}, {} times:\n", store.digit(), number);

        let mut entries: Vec<_> = level.iter().collect();
        entries.sort_unstable_by_key(|&(value, _)| value);
        for (value, path) in entries {
            let _ = writeln!(out, "{} = {}", value, path);
        }
    }
    out
}

/// How many values each level produced.
pub fn format_summary(store: &ValueStore) -> String {
    let mut out = String::from("\nTotal Report:\n");
    for (number, level) in store.levels() {
        let _ = writeln!(
            out,
            "Numbers produced with {}, {}s: {}",
            number,
            store.digit(),
            level.len()
        );
    }
    out
}

pub fn format_solution(solution: &Solution) -> String {
    format!(
        "{} = {} (uses {})",
        solution.target, solution.path, solution.uses
    )
}

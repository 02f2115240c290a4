use indexmap::IndexSet;
use log::info;

/// A target reached by the search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub target: i64,
    pub path: String,
    /// Occurrences of the base digit in `path`.
    pub uses: usize,
}

/// Outstanding targets. Each one is reported at most once.
#[derive(Debug, Clone)]
pub struct TargetTracker {
    digit: char,
    outstanding: IndexSet<i64>,
}

impl TargetTracker {
    /// Duplicate targets collapse into one.
    pub fn new(digit: u8, targets: &[i64]) -> Self {
        Self {
            digit: char::from(b'0' + digit),
            outstanding: targets.iter().copied().collect(),
        }
    }

    /// Remove `value` from the outstanding set if present, returning its record.
    pub fn check(&mut self, value: i64, path: &str) -> Option<Solution> {
        if !self.outstanding.shift_remove(&value) {
            return None;
        }

        let uses = path.chars().filter(|&c| c == self.digit).count();
        info!("Found {} = {} using {} digits", value, path, uses);
        Some(Solution {
            target: value,
            path: path.to_string(),
            uses,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.outstanding.is_empty()
    }

    /// Targets not yet found, in the order they were given.
    pub fn outstanding(&self) -> Vec<i64> {
        self.outstanding.iter().copied().collect()
    }
}

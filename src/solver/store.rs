use indexmap::IndexMap;
use indexmap::map::Entry;
use log::debug;

use crate::utils::{repunit, repunit_path};

/// Values reachable with one exact digit count, each bound to the first path
/// found for it. Iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct Level {
    entries: IndexMap<i64, String>,
}

impl Level {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` unless it is already present. Returns whether it was new.
    pub fn insert(&mut self, value: i64, path: String) -> bool {
        match self.entries.entry(value) {
            Entry::Vacant(slot) => {
                slot.insert(path);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.entries.contains_key(&value)
    }

    pub fn path(&self, value: i64) -> Option<&str> {
        self.entries.get(&value).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Values in insertion order.
    pub fn values(&self) -> Vec<i64> {
        self.entries.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> {
        self.entries.iter().map(|(v, p)| (*v, p.as_str()))
    }
}

/// One [`Level`] per digit count, starting at 1.
#[derive(Debug, Clone)]
pub struct ValueStore {
    digit: u8,
    levels: Vec<Level>,
}

impl ValueStore {
    pub fn new(digit: u8) -> Self {
        Self {
            digit,
            levels: Vec::new(),
        }
    }

    pub fn digit(&self) -> u8 {
        self.digit
    }

    /// Number of levels opened so far.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn level(&self, level: usize) -> Option<&Level> {
        level.checked_sub(1).and_then(|i| self.levels.get(i))
    }

    /// Levels with their digit counts, lowest first.
    pub fn levels(&self) -> impl Iterator<Item = (usize, &Level)> {
        self.levels.iter().enumerate().map(|(i, l)| (i + 1, l))
    }

    /// Open the next level, seeded with the digit written that many times.
    ///
    /// Returns the new level number and the seeded value, or `None` for the
    /// value once the repunit no longer fits in an `i64`.
    pub fn push_level(&mut self) -> (usize, Option<i64>) {
        let number = self.levels.len() + 1;
        let mut level = Level::new();

        let seed = match repunit(self.digit, number) {
            Ok(value) => {
                level.insert(value, repunit_path(self.digit, number));
                Some(value)
            }
            Err(e) => {
                debug!("Level {} left unseeded: {}", number, e);
                None
            }
        };

        self.levels.push(level);
        (number, seed)
    }

    /// Earlier levels (index `j - 1` holds level `j`) alongside `level` itself.
    ///
    /// # Panics
    ///
    /// Panics if `level` has not been opened.
    pub(crate) fn split_for(&mut self, level: usize) -> (&[Level], &mut Level) {
        let (earlier, rest) = self.levels.split_at_mut(level - 1);
        (earlier, &mut rest[0])
    }
}

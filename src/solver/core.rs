use log::{debug, info};
use rayon::prelude::*;

use crate::operator::{BinaryOp, UnaryOp};
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::solver::pairing::pairs_for;
use crate::solver::store::{Level, ValueStore};
use crate::solver::tracker::{Solution, TargetTracker};
use crate::utils::validate_base_digit;

/// Outcome of a search: one solution per distinct target, in discovery order,
/// plus every level built along the way.
#[derive(Debug, Clone)]
pub struct Calculation {
    pub solutions: Vec<Solution>,
    pub store: ValueStore,
}

/// Main solver for building targets from as few copies of a digit as possible
pub struct Solver {
    digit: u8,
    config: SolverConfig,
}

impl Solver {
    /// # Errors
    ///
    /// Returns an error if `digit` is not in 1..=9.
    pub fn new(digit: u8, config: SolverConfig) -> Result<Self, SolverError> {
        validate_base_digit(digit)?;
        Ok(Self { digit, config })
    }

    pub fn digit(&self) -> u8 {
        self.digit
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search levels 1, 2, 3, ... until every target has been reached.
    ///
    /// Without a `max_level` this does not return while a target is
    /// unreachable under the operator set and closure depth.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::LevelLimitReached`] when `max_level` is set and
    /// targets remain after that level.
    pub fn calculate(&self, targets: &[i64]) -> Result<Calculation, SolverError> {
        let mut search = Search::new(self.digit, &self.config, targets);
        info!(
            "Searching for {:?} using the digit {}",
            search.tracker.outstanding(),
            self.digit
        );

        while !search.tracker.is_empty() {
            let level = search.advance();

            if let Some(max_level) = self.config.max_level
                && level >= max_level
                && !search.tracker.is_empty()
            {
                return Err(SolverError::LevelLimitReached {
                    level,
                    remaining: search.tracker.outstanding(),
                });
            }
        }

        info!("All targets found after {} levels", search.store.depth());
        Ok(Calculation {
            solutions: search.solutions,
            store: search.store,
        })
    }
}

/// State of one `calculate` run.
struct Search<'c> {
    config: &'c SolverConfig,
    store: ValueStore,
    tracker: TargetTracker,
    solutions: Vec<Solution>,
}

/// A binary result waiting to be inserted, with its operands in written order.
struct Candidate<'a> {
    value: i64,
    op: BinaryOp,
    left: &'a str,
    right: &'a str,
}

fn record(solutions: &mut Vec<Solution>, found: Option<Solution>) {
    if let Some(solution) = found {
        solutions.push(solution);
    }
}

impl<'c> Search<'c> {
    fn new(digit: u8, config: &'c SolverConfig, targets: &[i64]) -> Self {
        Self {
            config,
            store: ValueStore::new(digit),
            tracker: TargetTracker::new(digit, targets),
            solutions: Vec::new(),
        }
    }

    /// Build the next level completely and return its number.
    fn advance(&mut self) -> usize {
        let (level, seed) = self.store.push_level();

        if let Some(value) = seed
            && let Some(path) = self.store.level(level).and_then(|l| l.path(value))
        {
            record(&mut self.solutions, self.tracker.check(value, path));
        }

        if level > 1 {
            for (j, k) in pairs_for(level) {
                self.combine(level, j, k);
            }
        }

        self.close_level(level);

        debug!(
            "Level {} holds {} values",
            level,
            self.store.level(level).map_or(0, Level::len)
        );
        level
    }

    /// Insert every binary combination of levels `j` and `k` into `level`.
    fn combine(&mut self, level: usize, j: usize, k: usize) {
        let (earlier, current) = self.store.split_for(level);
        let (Some(left), Some(right)) = (earlier.get(j - 1), earlier.get(k - 1)) else {
            return;
        };

        let candidates = evaluate_pairs(left, right, self.config.parallel);
        debug!(
            "Level {}: {} x {} values from levels {} and {} gave {} candidates",
            level,
            left.len(),
            right.len(),
            j,
            k,
            candidates.len()
        );

        for candidate in candidates {
            if current.contains(candidate.value) {
                continue;
            }
            let path = candidate.op.join(candidate.left, candidate.right);
            record(&mut self.solutions, self.tracker.check(candidate.value, &path));
            current.insert(candidate.value, path);
        }
    }

    /// Expand every value currently in `level` by unary operators.
    fn close_level(&mut self, level: usize) {
        let (_, current) = self.store.split_for(level);
        let mut closure = UnaryClosure {
            level: current,
            tracker: &mut self.tracker,
            solutions: &mut self.solutions,
            max_depth: self.config.max_closure_depth,
        };

        for value in closure.level.values() {
            if let Some(path) = closure.level.path(value).map(str::to_owned) {
                closure.close(value, &path, 1);
            }
        }
    }
}

/// Every binary operator result over `left` x `right`, in insertion order:
/// left operand outermost, then right operand, then operator, then
/// `(v1 op v2)` before `(v2 op v1)`.
fn evaluate_pairs<'a>(left: &'a Level, right: &'a Level, parallel: bool) -> Vec<Candidate<'a>> {
    let lhs: Vec<(i64, &'a str)> = left.iter().collect();
    let rhs: Vec<(i64, &'a str)> = right.iter().collect();

    let expand = |&(v1, p1): &(i64, &'a str)| {
        let mut out = Vec::new();
        for &(v2, p2) in &rhs {
            for op in BinaryOp::ALL {
                if let Ok(value) = op.apply(v1, v2) {
                    out.push(Candidate {
                        value,
                        op,
                        left: p1,
                        right: p2,
                    });
                }
                if v1 != v2
                    && let Ok(value) = op.apply(v2, v1)
                {
                    out.push(Candidate {
                        value,
                        op,
                        left: p2,
                        right: p1,
                    });
                }
            }
        }
        out
    };

    // Ordered collect keeps the sequential insertion order.
    if parallel {
        lhs.par_iter().flat_map_iter(expand).collect()
    } else {
        lhs.iter().flat_map(expand).collect()
    }
}

/// Unary expansion within a single level.
struct UnaryClosure<'s> {
    level: &'s mut Level,
    tracker: &'s mut TargetTracker,
    solutions: &'s mut Vec<Solution>,
    max_depth: usize,
}

impl UnaryClosure<'_> {
    fn close(&mut self, value: i64, path: &str, depth: usize) {
        if depth > self.max_depth {
            return;
        }

        for op in UnaryOp::ALL {
            // Negating a negation only undoes it.
            if op == UnaryOp::Neg && path.chars().nth(1) == Some('-') {
                continue;
            }

            let Ok(result) = op.apply(value) else {
                continue;
            };
            if self.level.contains(result) {
                continue;
            }

            let wrapped = op.wrap(path);
            self.level.insert(result, wrapped.clone());
            record(self.solutions, self.tracker.check(result, &wrapped));
            self.close(result, &wrapped, depth + 1);
        }
    }
}

/// Default bound on consecutive unary operators applied within one level.
pub const DEFAULT_MAX_CLOSURE_DEPTH: usize = 4;

/// Configuration for the level-by-level search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Longest chain of unary operators applied to a value without an
    /// intervening binary combination.
    pub max_closure_depth: usize,
    /// Stop with an error after this level instead of searching forever.
    /// `None` searches until every target is found.
    pub max_level: Option<usize>,
    /// Evaluate binary combinations on the rayon thread pool. Results are
    /// identical either way.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_closure_depth: DEFAULT_MAX_CLOSURE_DEPTH,
            max_level: None,
            parallel: true,
        }
    }
}

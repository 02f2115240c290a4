use log::debug;

/// Level pairs `(j, k)` with `j <= k` and `j + k == level`, ascending in `j`.
///
/// Combining a value from level `j` with one from level `k` through a binary
/// operator yields a value for `level`.
pub fn pairs_for(level: usize) -> Vec<(usize, usize)> {
    let pairs: Vec<_> = (1..=level / 2).map(|j| (j, level - j)).collect();
    debug!("Level {} combines pairs {:?}", level, pairs);
    pairs
}

use super::direction::Direction;

/// Trailing run length of `target` at every index of `directions`,
/// computed in one forward pass:
///
/// history[i] = history[i-1] + 1 if directions[i] == target, else 0.
///
/// A Flat day matches neither Up nor Down, so it zeroes both the up-
/// and down-histories at its index.
pub fn streak_history(directions: &[Direction], target: Direction) -> Vec<u32> {
    let mut history = Vec::with_capacity(directions.len());
    let mut run = 0u32;

    for &direction in directions {
        run = if direction == target { run + 1 } else { 0 };
        history.push(run);
    }

    history
}

/// The streak ending at the last index (the *current* streak) and the
/// streak ending one index earlier (the streak as of the prior close).
/// Either is 0 where the history is too short to have that index.
pub fn latest_pair(history: &[u32]) -> (u32, u32) {
    let n = history.len();
    let current = if n >= 1 { history[n - 1] } else { 0 };
    let previous = if n >= 2 { history[n - 2] } else { 0 };
    (current, previous)
}

/// Close recorded the last time the streak hit exactly `target`.
///
/// Scans backward from the most recent index, so when the target length
/// occurred several times only the latest occurrence is returned; older
/// matches are ignored. Returns None when no index ever hit `target`.
///
/// `closes` must be aligned 1:1 with `history`: entry `i` of both refers
/// to the same day (the day each streak value ends on).
pub fn last_price_at_streak(history: &[u32], closes: &[f64], target: u32) -> Option<f64> {
    debug_assert_eq!(history.len(), closes.len());

    history
        .iter()
        .rposition(|&streak| streak == target)
        .map(|i| closes[i])
}

//! Ticker substring search over a universe.

use crate::SeriesResult;

/// Case-insensitive substring match of `query` against every ticker.
///
/// Results keep the universe's order. A blank query matches nothing rather
/// than everything.
pub fn search<'a>(universe: &'a [SeriesResult], query: &str) -> Vec<&'a SeriesResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    universe
        .iter()
        .filter(|series| series.ticker().as_str().to_lowercase().contains(&needle))
        .collect()
}

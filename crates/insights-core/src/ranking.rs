//! Top-N gainers and losers.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{InsightsError, SeriesResult};

/// Which end of the percent-change distribution to rank from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Gainers,
    Losers,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gainers => "gainers",
            Self::Losers => "losers",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rank `analyzed` by percent change and keep the first `n`.
///
/// Gainers sort descending, losers ascending; equal percent changes fall back
/// to ascending ticker order. The input is left untouched.
pub fn top_movers(
    analyzed: &[SeriesResult],
    direction: Direction,
    n: i64,
) -> Result<Vec<&SeriesResult>, InsightsError> {
    if n < 0 {
        return Err(InsightsError::invalid("n", format!("must be >= 0, got {n}")));
    }
    let limit = usize::try_from(n).unwrap_or(usize::MAX);

    let mut ranked: Vec<&SeriesResult> = analyzed.iter().collect();
    ranked.sort_by(|a, b| compare(a, b, direction));
    ranked.truncate(limit);
    Ok(ranked)
}

fn compare(a: &SeriesResult, b: &SeriesResult, direction: Direction) -> Ordering {
    let by_change = match direction {
        Direction::Gainers => b.percent_change().total_cmp(&a.percent_change()),
        Direction::Losers => a.percent_change().total_cmp(&b.percent_change()),
    };
    by_change.then_with(|| a.ticker().cmp(b.ticker()))
}

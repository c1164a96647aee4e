//! Round scoring.

use crate::core::{SeatId, SeatMap};

/// Turn final board sums into round scores.
///
/// The seat that finished first has its score doubled when its sum is
/// strictly greater than the lowest sum at the table. A tie with the
/// lowest sum does not double, and negative sums are doubled like any
/// other.
#[must_use]
pub fn score_round(sums: &SeatMap<i32>, finisher: Option<SeatId>) -> SeatMap<i32> {
    let mut scores = sums.clone();
    if let Some(finisher) = finisher {
        let min = sums.values().copied().min().unwrap_or(0);
        if sums[finisher] > min {
            scores[finisher] *= 2;
        }
    }
    scores
}

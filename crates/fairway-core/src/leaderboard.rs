//! Finishing order for a single event.
//!
//! Positions are never shared: when two cards tie, the one entered first
//! takes the better position. There is no countback.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{EventResult, ScoringFormat};
use crate::points::points_for_position;

/// One member's finishing position in an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Placing {
    pub member_id: String,
    pub position: usize,
    pub points: u32,
}

/// Resolve an event's results into a strict 1..=n finishing order.
///
/// Stableford sorts high to low, every other format sorts gross score low
/// to high. Cards missing the score the format ranks on are left out.
pub fn resolve_leaderboard(results: &[EventResult], format: ScoringFormat) -> Vec<Placing> {
    let mut scored: Vec<(&str, i32)> = results
        .iter()
        .filter_map(|result| match result.score_for(format) {
            Some(score) => Some((result.member_id.as_str(), score)),
            None => {
                debug!(member_id = %result.member_id, format = %format, "No score for format, skipping card");
                None
            }
        })
        .collect();

    // Stable sort so ties keep entry order
    if format.is_points_based() {
        scored.sort_by(|a, b| b.1.cmp(&a.1));
    } else {
        scored.sort_by(|a, b| a.1.cmp(&b.1));
    }

    scored
        .into_iter()
        .enumerate()
        .map(|(index, (member_id, _))| {
            let position = index + 1;
            Placing {
                member_id: member_id.to_string(),
                position,
                points: points_for_position(position),
            }
        })
        .collect()
}

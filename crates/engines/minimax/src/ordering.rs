//! Capture-first move ordering.
//!
//! Alpha-beta prunes more when strong moves come early, so captures are
//! floated to the front, most valuable victim first. This is purely a
//! performance policy: the ordering never changes which score the search
//! returns, only how much of the tree it has to visit.

use std::cmp::Reverse;

use game_rules::CandidateMove;

use crate::eval::piece_value;

/// Stably reorders `moves` so captures come first, sorted by the material
/// value of the captured piece (descending). Non-captures keep their
/// relative order behind them. No moves are added or dropped.
pub fn order_captures_first(moves: &mut [CandidateMove]) {
    moves.sort_by_key(|m| Reverse(m.captured.map(piece_value).unwrap_or(0)));
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;

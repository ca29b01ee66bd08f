//! Depth-bounded minimax search with alpha-beta pruning.
//!
//! The search mutates the ambient position through the rules engine's
//! apply/undo pair. Every applied move is undone in LIFO order before the
//! call returns, so a caller's position is untouched once the search
//! finishes, pruned branches included.

use game_rules::{CandidateMove, Rules};

use crate::eval::evaluate;
use crate::ordering::order_captures_first;

/// Terminal score for a checkmated node. The sign follows the recursion's
/// maximizing flag, not the white/black sign convention of the static
/// evaluator: mate is catastrophic for whoever was to move at that node.
pub const MATE_SCORE: i32 = 99_999;

/// Score for any drawn terminal position.
pub const DRAW_SCORE: i32 = 0;

/// Plays an enumerated move, treating rejection as a rules-engine bug.
///
/// Skipping a rejected move would silently unbalance the apply/undo
/// nesting, so this is a hard failure rather than a recoverable one.
pub(crate) fn apply_enumerated<R: Rules>(rules: &mut R, mv: &CandidateMove) {
    if let Err(err) = rules.apply(mv) {
        panic!("rules engine rejected a move it enumerated as legal: {err}");
    }
}

/// Minimax with alpha-beta pruning over the rules engine's current
/// position. Returns the exact minimax value for the searched depth;
/// pruning only changes how much of the tree is visited.
///
/// `maximizing` selects whether this node picks the max or min over its
/// children; scores themselves stay white-positive per [`evaluate`],
/// except for the terminal mate/draw scores above.
pub fn alpha_beta<R: Rules>(
    rules: &mut R,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 || rules.is_game_over() {
        if rules.is_checkmate() {
            return if maximizing { -MATE_SCORE } else { MATE_SCORE };
        }
        if rules.is_draw() {
            return DRAW_SCORE;
        }
        return evaluate(&rules.board());
    }

    let mut moves = rules.legal_moves(None);
    order_captures_first(&mut moves);

    if maximizing {
        let mut best = i32::MIN;
        for mv in &moves {
            apply_enumerated(rules, mv);
            *nodes += 1;
            let score = alpha_beta(rules, depth - 1, alpha, beta, false, nodes);
            rules.undo();

            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                break; // prune
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in &moves {
            apply_enumerated(rules, mv);
            *nodes += 1;
            let score = alpha_beta(rules, depth - 1, alpha, beta, true, nodes);
            rules.undo();

            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                break; // prune
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;

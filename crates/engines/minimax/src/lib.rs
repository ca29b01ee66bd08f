//! Minimax Chess Opponent
//!
//! Depth-bounded minimax with alpha-beta pruning and capture-first move
//! ordering, behind a difficulty-based selection policy:
//! - Easy: random pick with a coin-flip bias toward captures, no search
//! - Medium: full search at depth 2
//! - Hard: full search at depth 3
//!
//! All chess legality lives behind the `game_rules::Rules` trait; this
//! crate only scores positions and walks the tree.

mod eval;
mod ordering;
mod search;

use game_rules::{move_to_uci, CandidateMove, Rules, Side};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

pub use eval::{evaluate, piece_value, positional_value};
pub use ordering::order_captures_first;
pub use search::{alpha_beta, DRAW_SCORE, MATE_SCORE};

/// Playing strength setting, resolved once per selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    /// Random with a bias toward captures; never searches.
    Easy,
    /// Alpha-beta search, depth 2.
    Medium,
    /// Alpha-beta search, depth 3.
    Hard,
}

impl Difficulty {
    /// Search depth in plies, or `None` for the heuristic easy pick.
    pub fn search_depth(self) -> Option<u8> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(2),
            Difficulty::Hard => Some(3),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

/// The game-playing opponent: picks one move per call for the side to move.
///
/// Holds no position state of its own; the position lives in the rules
/// engine, and every apply performed during a selection is undone before
/// the call returns.
#[derive(Debug, Clone, Default)]
pub struct Opponent {
    /// Node counter for statistics
    nodes: u64,
}

impl Opponent {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the most recent selection.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Selects a move for the side to move, or `None` if no legal move
    /// exists (game over for the caller, not an error).
    ///
    /// Medium and hard never consult randomness, so repeated calls on the
    /// same position return the same move.
    pub fn select_move<R: Rules>(
        &mut self,
        rules: &mut R,
        difficulty: Difficulty,
    ) -> Option<CandidateMove> {
        self.select_with_rng(rules, difficulty, &mut thread_rng())
    }

    /// [`Opponent::select_move`] with a caller-supplied randomness source,
    /// so easy-mode behavior can be pinned down in tests.
    pub fn select_with_rng<R: Rules, G: Rng>(
        &mut self,
        rules: &mut R,
        difficulty: Difficulty,
        rng: &mut G,
    ) -> Option<CandidateMove> {
        self.nodes = 0;

        let moves = rules.legal_moves(None);
        if moves.is_empty() {
            return None;
        }

        let depth = match difficulty.search_depth() {
            None => return Some(pick_biased_random(&moves, rng)),
            Some(depth) => depth,
        };

        // White maximizes, black minimizes, matching the evaluator's
        // white-positive sign.
        let maximizing = rules.side_to_move() == Side::White;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        // First enumerated move is the defined fallback when nothing
        // scores strictly better.
        let mut best_move = moves[0];

        // Root moves stay in enumeration order; capture-first ordering is
        // applied only inside the recursion.
        for mv in &moves {
            search::apply_enumerated(rules, mv);
            self.nodes += 1;
            let score = alpha_beta(
                rules,
                depth - 1,
                i32::MIN,
                i32::MAX,
                !maximizing,
                &mut self.nodes,
            );
            rules.undo();

            let improved = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improved {
                best_score = score;
                best_move = *mv;
            }
        }

        log::debug!(
            "selected {} score {} after {} nodes at depth {}",
            move_to_uci(&best_move),
            best_score,
            self.nodes,
            depth
        );
        Some(best_move)
    }
}

/// Easy-mode pick: when captures exist, a fair coin decides whether to
/// sample among them; otherwise sample among all legal moves. Falls back
/// to the first move rather than failing, so selection never halts a game.
fn pick_biased_random<G: Rng>(moves: &[CandidateMove], rng: &mut G) -> CandidateMove {
    let captures: Vec<CandidateMove> = moves.iter().filter(|m| m.is_capture()).copied().collect();
    if !captures.is_empty() && rng.gen_bool(0.5) {
        return captures.choose(rng).copied().unwrap_or(moves[0]);
    }
    moves.choose(rng).copied().unwrap_or(moves[0])
}

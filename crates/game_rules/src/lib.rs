//! Rules-engine interface for the chess opponent core.
//!
//! The opponent engine knows nothing about chess legality. Everything it
//! needs from the rules side goes through the [`Rules`] trait: enumerate
//! legal moves, apply/undo a move, report whose turn it is, and report
//! terminal-state predicates. The [`CozyRules`] adapter backs the trait
//! with the `cozy-chess` crate; the engine crates only ever see the trait.

mod cozy;
pub mod types;

pub use cozy::CozyRules;
pub use types::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulesError {
    /// The move is not legal in the current position.
    #[error("illegal move {0}")]
    IllegalMove(String),
    /// The FEN string could not be parsed into a position.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}

/// The rules-engine surface the opponent core is written against.
///
/// Implementations own the ambient position. `apply` and `undo` must be
/// strictly paired in LIFO order along any search path; callers that keep
/// that discipline observe an unchanged position once their loop unwinds.
pub trait Rules {
    /// All legal moves for the side to move, or only those originating
    /// from `from` when given. Enumeration order must be stable for a
    /// fixed position.
    fn legal_moves(&self, from: Option<u8>) -> Vec<CandidateMove>;

    /// Plays a move, mutating the ambient position.
    ///
    /// Returns an error if the move is illegal. A rejected move that this
    /// same implementation enumerated via [`Rules::legal_moves`] is a
    /// contract violation, and callers are entitled to treat it as fatal.
    fn apply(&mut self, mv: &CandidateMove) -> Result<(), RulesError>;

    /// Reverts the most recent unmatched [`Rules::apply`].
    ///
    /// # Panics
    /// Panics if there is no applied move to revert.
    fn undo(&mut self);

    fn side_to_move(&self) -> Side;

    fn is_in_check(&self) -> bool;
    fn is_checkmate(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn is_fifty_move_draw(&self) -> bool;
    fn is_threefold_repetition(&self) -> bool;
    fn is_insufficient_material(&self) -> bool;

    /// Any draw condition: stalemate, fifty-move rule, threefold
    /// repetition, or insufficient material.
    fn is_draw(&self) -> bool {
        self.is_stalemate()
            || self.is_fifty_move_draw()
            || self.is_threefold_repetition()
            || self.is_insufficient_material()
    }

    /// Checkmate or any draw condition.
    fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }

    /// A read-only snapshot of the current board.
    fn board(&self) -> BoardSnapshot;
}

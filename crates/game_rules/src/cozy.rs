//! `cozy-chess` adapter for the [`Rules`] trait.
//!
//! Apply/undo is realized as a stack of board states: `apply` pushes the
//! previous board, `undo` pops it back. Cloning a `cozy_chess::Board` is a
//! few copies of bitboards, so this keeps the trait's undo contract without
//! any incremental make/unmake bookkeeping. The stack doubles as the game
//! history used for threefold-repetition counting.

use cozy_chess::{Board, Color, Piece as CozyPiece, Square};

use crate::types::{self, BoardSnapshot, CandidateMove, Piece, PieceKind, Side};
use crate::{Rules, RulesError};

pub struct CozyRules {
    board: Board,
    /// Boards preceding each unmatched `apply`, oldest first.
    history: Vec<Board>,
}

impl CozyRules {
    /// The standard starting position.
    pub fn startpos() -> Self {
        Self {
            board: Board::default(),
            history: Vec::new(),
        }
    }

    /// Loads a position from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let board =
            Board::from_fen(fen, false).map_err(|e| RulesError::InvalidFen(e.to_string()))?;
        Ok(Self {
            board,
            history: Vec::new(),
        })
    }

    /// Number of unmatched applies, i.e. how deep the undo stack is.
    pub fn applied_count(&self) -> usize {
        self.history.len()
    }

    fn has_any_move(&self) -> bool {
        let mut any = false;
        self.board.generate_moves(|_| {
            any = true;
            true
        });
        any
    }

    /// Builds the candidate description for a legal cozy move in the
    /// current position. cozy-chess encodes castling as the king capturing
    /// its own rook; that must become a castle flag, not a capture.
    fn describe(&self, mv: cozy_chess::Move) -> CandidateMove {
        let mut cand = CandidateMove::new(mv.from as u8, mv.to as u8);
        cand.promotion = mv.promotion.map(to_kind);
        match self.board.color_on(mv.to) {
            Some(c) if c == self.board.side_to_move() => cand.is_castle = true,
            Some(_) => cand.captured = self.board.piece_on(mv.to).map(to_kind),
            None => {
                // A pawn changing file onto an empty square is en passant.
                if self.board.piece_on(mv.from) == Some(CozyPiece::Pawn)
                    && mv.from.file() != mv.to.file()
                {
                    cand.is_en_passant = true;
                    cand.captured = Some(PieceKind::Pawn);
                }
            }
        }
        cand
    }
}

impl Default for CozyRules {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Rules for CozyRules {
    fn legal_moves(&self, from: Option<u8>) -> Vec<CandidateMove> {
        let mut moves = Vec::with_capacity(64);
        match from {
            Some(s) => {
                let mask = Square::ALL[s as usize].bitboard();
                self.board.generate_moves_for(mask, |ml| {
                    for m in ml {
                        moves.push(self.describe(m));
                    }
                    false
                });
            }
            None => {
                self.board.generate_moves(|ml| {
                    for m in ml {
                        moves.push(self.describe(m));
                    }
                    false
                });
            }
        }
        moves
    }

    fn apply(&mut self, mv: &CandidateMove) -> Result<(), RulesError> {
        let cozy_mv = cozy_chess::Move {
            from: Square::ALL[mv.from as usize],
            to: Square::ALL[mv.to as usize],
            promotion: mv.promotion.map(to_cozy_kind),
        };
        let mut next = self.board.clone();
        next.try_play(cozy_mv)
            .map_err(|_| RulesError::IllegalMove(types::move_to_uci(mv)))?;
        self.history.push(std::mem::replace(&mut self.board, next));
        Ok(())
    }

    fn undo(&mut self) {
        match self.history.pop() {
            Some(prev) => self.board = prev,
            None => panic!("undo called with no unmatched apply"),
        }
    }

    fn side_to_move(&self) -> Side {
        to_side(self.board.side_to_move())
    }

    fn is_in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    fn is_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_any_move()
    }

    fn is_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_any_move()
    }

    fn is_fifty_move_draw(&self) -> bool {
        self.board.halfmove_clock() >= 100
    }

    fn is_threefold_repetition(&self) -> bool {
        let key = self.board.hash();
        let past = self.history.iter().filter(|b| b.hash() == key).count();
        past + 1 >= 3
    }

    fn is_insufficient_material(&self) -> bool {
        let majors = self.board.pieces(CozyPiece::Pawn)
            | self.board.pieces(CozyPiece::Rook)
            | self.board.pieces(CozyPiece::Queen);
        if !majors.is_empty() {
            return false;
        }
        let knights = self.board.pieces(CozyPiece::Knight);
        let bishops = self.board.pieces(CozyPiece::Bishop);
        if (knights | bishops).len() <= 1 {
            // Bare kings, or a lone minor piece.
            return true;
        }
        if !knights.is_empty() {
            return false;
        }
        // Bishops only: dead when they all stand on one square color.
        let mut dark = 0u32;
        let mut light = 0u32;
        for sq in bishops {
            if (sq.file() as usize + sq.rank() as usize) % 2 == 0 {
                dark += 1;
            } else {
                light += 1;
            }
        }
        dark == 0 || light == 0
    }

    fn board(&self) -> BoardSnapshot {
        let mut snap = BoardSnapshot::empty();
        for sq in Square::ALL {
            let (Some(kind), Some(color)) = (self.board.piece_on(sq), self.board.color_on(sq))
            else {
                continue;
            };
            snap.set(
                sq as u8,
                Some(Piece {
                    side: to_side(color),
                    kind: to_kind(kind),
                }),
            );
        }
        snap
    }
}

fn to_side(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

fn to_kind(piece: CozyPiece) -> PieceKind {
    match piece {
        CozyPiece::Pawn => PieceKind::Pawn,
        CozyPiece::Knight => PieceKind::Knight,
        CozyPiece::Bishop => PieceKind::Bishop,
        CozyPiece::Rook => PieceKind::Rook,
        CozyPiece::Queen => PieceKind::Queen,
        CozyPiece::King => PieceKind::King,
    }
}

fn to_cozy_kind(kind: PieceKind) -> CozyPiece {
    match kind {
        PieceKind::Pawn => CozyPiece::Pawn,
        PieceKind::Knight => CozyPiece::Knight,
        PieceKind::Bishop => CozyPiece::Bishop,
        PieceKind::Rook => CozyPiece::Rook,
        PieceKind::Queen => CozyPiece::Queen,
        PieceKind::King => CozyPiece::King,
    }
}

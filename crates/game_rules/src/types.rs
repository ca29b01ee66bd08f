//! Core value types shared between the rules side and the opponent engine.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn idx(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

/// A legal move as enumerated by the rules engine.
///
/// The opponent engine treats this as opaque apart from `captured` and
/// `promotion`, which drive move ordering and easy-mode sampling. The
/// coordinates use whatever encoding the producing rules engine uses for
/// special moves (the cozy-chess adapter encodes castling as king-to-rook).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateMove {
    pub from: u8, // 0..63
    pub to: u8,   // 0..63
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl CandidateMove {
    pub fn new(from: u8, to: u8) -> Self {
        Self {
            from,
            to,
            captured: None,
            promotion: None,
            is_en_passant: false,
            is_castle: false,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Read-only view of the 64 squares of a position.
///
/// Index convention: `rank * 8 + file`, a1 = 0, h8 = 63.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BoardSnapshot {
    squares: [Option<Piece>; 64],
}

impl BoardSnapshot {
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.squares[sq as usize]
    }

    pub fn set(&mut self, sq: u8, piece: Option<Piece>) {
        self.squares[sq as usize] = piece;
    }

    /// Iterates occupied squares as `(square, piece)` pairs.
    pub fn occupied(&self) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|p| (i as u8, p)))
    }
}

impl std::fmt::Debug for BoardSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Print ranks top-down so the output reads like a diagram.
        for rank in (0..8).rev() {
            for file in 0..8 {
                let c = match self.piece_at(rank * 8 + file) {
                    None => '.',
                    Some(p) => {
                        let c = match p.kind {
                            PieceKind::Pawn => 'p',
                            PieceKind::Knight => 'n',
                            PieceKind::Bishop => 'b',
                            PieceKind::Rook => 'r',
                            PieceKind::Queen => 'q',
                            PieceKind::King => 'k',
                        };
                        if p.side == Side::White {
                            c.to_ascii_uppercase()
                        } else {
                            c
                        }
                    }
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// Square helpers
pub fn file_of(sq: u8) -> u8 {
    sq % 8
}

pub fn rank_of(sq: u8) -> u8 {
    sq / 8
}

pub fn sq(file: u8, rank: u8) -> u8 {
    debug_assert!(file < 8 && rank < 8);
    rank * 8 + file
}

pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % 8)) as char;
    let r = (b'1' + (sq / 8)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    Some((r - b'1') * 8 + (f - b'a'))
}

/// Formats a move in UCI coordinate notation, e.g. `e2e4` or `a7a8q`.
pub fn move_to_uci(mv: &CandidateMove) -> String {
    let promo = match mv.promotion {
        Some(PieceKind::Knight) => "n",
        Some(PieceKind::Bishop) => "b",
        Some(PieceKind::Rook) => "r",
        Some(PieceKind::Queen) => "q",
        _ => "",
    };
    format!("{}{}{}", sq_to_coord(mv.from), sq_to_coord(mv.to), promo)
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

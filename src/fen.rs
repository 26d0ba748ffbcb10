//! FEN decoder module.
//! Consumes only the piece-placement field of a FEN string (rank 8 first) and
//! produces an 8x8 grid of piece identities. The remaining FEN fields (turn,
//! castling, en passant, clocks) are stripped by the caller beforehand.

use thiserror::Error;

/// Board edge length in squares. Only standard 8x8 boards are supported.
pub const BOARD_SIZE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceColor {
    White,
    Black,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece identity: color plus kind, no per-piece state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: PieceColor,
    pub kind: PieceKind,
}

impl Piece {
    /// All twelve identities, white set first.
    pub const ALL: [Piece; 12] = {
        use PieceColor::*;
        use PieceKind::*;
        [
            Piece { color: White, kind: Pawn },
            Piece { color: White, kind: Knight },
            Piece { color: White, kind: Bishop },
            Piece { color: White, kind: Rook },
            Piece { color: White, kind: Queen },
            Piece { color: White, kind: King },
            Piece { color: Black, kind: Pawn },
            Piece { color: Black, kind: Knight },
            Piece { color: Black, kind: Bishop },
            Piece { color: Black, kind: Rook },
            Piece { color: Black, kind: Queen },
            Piece { color: Black, kind: King },
        ]
    };

    /// Maps a FEN letter to a piece identity. Uppercase is white, lowercase
    /// is black. Returns None for anything that is not a piece letter.
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece { color, kind })
    }
}

impl std::fmt::Display for PieceColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceColor::White => write!(f, "white"),
            PieceColor::Black => write!(f, "black"),
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        write!(f, "{}", name)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

/// 8x8 board, indexed `[rank][file]` with rank 0 at the top (rank 8 in chess
/// terms), matching FEN order. Built fresh per input line.
pub type BoardGrid = [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedFen {
    #[error("placement has {found} ranks, expected 8")]
    WrongRankCount { found: usize },
    #[error("rank segment '{segment}' expands past 8 squares")]
    RankOverflow { segment: String },
    #[error("rank segment '{segment}' expands to {found} squares, expected 8")]
    RankUnderflow { segment: String, found: usize },
    #[error("invalid character '{ch}' in rank segment '{segment}'")]
    BadChar { segment: String, ch: char },
}

/// Decodes a FEN piece-placement field into a board grid.
///
/// Fails fast on the first violation: wrong rank count, a rank that does not
/// expand to exactly 8 squares, or a character that is neither a piece letter
/// nor a digit 1-8. No partial grid is ever returned.
pub fn decode(placement: &str) -> Result<BoardGrid, MalformedFen> {
    let segments: Vec<&str> = placement.split('/').collect();
    if segments.len() != BOARD_SIZE {
        return Err(MalformedFen::WrongRankCount {
            found: segments.len(),
        });
    }

    let mut grid: BoardGrid = [[None; BOARD_SIZE]; BOARD_SIZE];
    for (rank, segment) in segments.iter().enumerate() {
        let mut file = 0usize;
        for c in segment.chars() {
            match c {
                '1'..='8' => {
                    // A digit inserts that many consecutive empty squares.
                    let run = c as usize - '0' as usize;
                    if file + run > BOARD_SIZE {
                        return Err(MalformedFen::RankOverflow {
                            segment: segment.to_string(),
                        });
                    }
                    file += run;
                }
                _ => {
                    let piece =
                        Piece::from_fen_char(c).ok_or_else(|| MalformedFen::BadChar {
                            segment: segment.to_string(),
                            ch: c,
                        })?;
                    if file >= BOARD_SIZE {
                        return Err(MalformedFen::RankOverflow {
                            segment: segment.to_string(),
                        });
                    }
                    grid[rank][file] = Some(piece);
                    file += 1;
                }
            }
        }
        if file != BOARD_SIZE {
            return Err(MalformedFen::RankUnderflow {
                segment: segment.to_string(),
                found: file,
            });
        }
    }
    Ok(grid)
}

//! Move types and the reversal record produced by applying a move.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;
use crate::board::error::MoveParseError;

/// A proposed move: source and destination square.
///
/// Displays and parses in coordinate form (`e2e4`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength {
                len: s.chars().count(),
            });
        }
        let from = s[0..2].parse()?;
        let to = s[2..4].parse()?;
        Ok(Move { from, to })
    }
}

/// The rook relocation that accompanies a castling move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RookShift {
    pub from: Square,
    pub to: Square,
    /// The rook as it stood before castling.
    pub rook: Piece,
}

/// Everything needed to reverse one applied move exactly.
///
/// Returned by [`Board::make_move`](crate::board::Board::make_move) and
/// consumed by [`Board::unmake_move`](crate::board::Board::unmake_move).
/// The game also keeps the last committed record to decide en passant
/// eligibility on the following ply.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The moving piece as it was before the move, including its old `has_moved`.
    pub piece: Piece,
    /// The removed enemy piece and the square it was removed from.
    /// For en passant this is not `to`.
    pub captured: Option<(Square, Piece)>,
    pub castle: Option<RookShift>,
}

impl MoveRecord {
    #[inline]
    #[must_use]
    pub const fn as_move(&self) -> Move {
        Move::new(self.from, self.to)
    }

    #[inline]
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub fn is_castle(&self) -> bool {
        self.castle.is_some()
    }

    #[must_use]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.captured, Some((sq, _)) if sq != self.to)
    }

    /// True for a pawn advancing two ranks in one move.
    #[must_use]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn
            && self.from.file() == self.to.file()
            && self.from.rank().abs_diff(self.to.rank()) == 2
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.piece.glyph(), self.as_move())
    }
}

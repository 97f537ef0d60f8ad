//! Read-only view of the board for renderers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Piece, Square};

/// A copy of every square's occupant, detached from the live board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardSnapshot {
    /// `ranks[r][f]`: rank 0 is rank 1, file 0 is file a.
    ranks: [[Option<Piece>; 8]; 8],
}

impl BoardSnapshot {
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.ranks[usize::from(sq.rank())][usize::from(sq.file())]
    }

    /// The eight squares of a rank (0-7), file a first.
    #[must_use]
    pub fn rank(&self, rank: u8) -> Option<&[Option<Piece>; 8]> {
        self.ranks.get(usize::from(rank))
    }

    /// Every square with its occupant, a1 first.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        Square::all().map(move |sq| (sq, self.get(sq)))
    }

    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.iter()
            .filter(|(_, piece)| piece.is_some_and(|p| p.color == color))
            .count()
    }
}

impl Board {
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut ranks = [[None; 8]; 8];
        for sq in Square::all() {
            ranks[usize::from(sq.rank())][usize::from(sq.file())] = self.piece_at(sq);
        }
        BoardSnapshot { ranks }
    }
}

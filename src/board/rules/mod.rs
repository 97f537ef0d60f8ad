//! Pseudo-legal move predicates.
//!
//! A move is pseudo-legal when the piece can make it geometrically, nothing
//! blocks its path and it does not land on a piece of its own color. Whether
//! it leaves the mover's own king attacked is decided by the caller (see
//! [`Board::is_legal`]).

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::{castling_rook_squares, king_step};
pub(crate) use knights::knight_jump;
pub(crate) use pawns::pawn_attacks;

use super::rays;
use super::{Board, MoveRecord, PieceKind, Square};

impl Board {
    /// Whether the piece on `from` may move to `to`, ignoring self-check.
    ///
    /// `last_move` is the opponent's previous move; it decides en passant
    /// eligibility and may be `None` at the start of a game.
    #[must_use]
    pub fn is_pseudo_legal(&self, from: Square, to: Square, last_move: Option<&MoveRecord>) -> bool {
        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        if from == to || self.color_on(to) == Some(piece.color) {
            return false;
        }

        match piece.kind {
            PieceKind::Pawn => self.pawn_move_is_valid(piece.color, from, to, last_move),
            PieceKind::Knight => knight_jump(from, to),
            PieceKind::Bishop => self.bishop_reaches(from, to),
            PieceKind::Rook => self.rook_reaches(from, to),
            PieceKind::Queen => self.queen_reaches(from, to),
            PieceKind::King => king_step(from, to) || self.can_castle(piece, from, to),
        }
    }

    /// True if no piece stands strictly between `from` and `to`.
    ///
    /// Only meaningful for squares on a common file, rank or diagonal;
    /// unaligned pairs have nothing "between" them and report `true`.
    #[inline]
    #[must_use]
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        !rays::between(from, to).intersects(self.all_occupied)
    }
}

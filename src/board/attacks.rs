//! Attack and check queries.

use super::rules::{king_step, knight_jump, pawn_attacks};
use super::{Board, Color, Piece, PieceKind, Square};

impl Board {
    /// Whether `piece`, standing on `from`, could capture on `target`.
    ///
    /// Occupancy of `target` itself is ignored, so empty squares and squares
    /// held by the attacker's own side can be tested too. Castling never attacks.
    pub(crate) fn attacks_from(&self, from: Square, piece: Piece, target: Square) -> bool {
        if from == target {
            return false;
        }
        match piece.kind {
            PieceKind::Pawn => pawn_attacks(piece.color, from, target),
            PieceKind::Knight => knight_jump(from, target),
            PieceKind::Bishop => self.bishop_reaches(from, target),
            PieceKind::Rook => self.rook_reaches(from, target),
            PieceKind::Queen => self.queen_reaches(from, target),
            PieceKind::King => king_step(from, target),
        }
    }

    /// True if any piece of `by_color` attacks `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        self.pieces(by_color)
            .any(|(from, piece)| self.attacks_from(from, piece, square))
    }

    /// Squares holding pieces of `by_color` that attack `square`.
    #[must_use]
    pub fn attackers_of(&self, square: Square, by_color: Color) -> Vec<Square> {
        self.pieces(by_color)
            .filter(|&(from, piece)| self.attacks_from(from, piece, square))
            .map(|(from, _)| from)
            .collect()
    }

    /// True if the king of `color` is attacked.
    ///
    /// A board without a king of that color reports `false`.
    #[must_use]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }
}

use super::{Board, MoveRecord, PieceKind, Square};
use crate::board::Color;

impl Board {
    pub(crate) fn pawn_move_is_valid(
        &self,
        color: Color,
        from: Square,
        to: Square,
        last_move: Option<&MoveRecord>,
    ) -> bool {
        let dir = color.pawn_direction();
        let (df, dr) = from.delta(to);

        match (df.abs(), dr) {
            (0, d) if d == dir => self.is_empty(to),
            (0, d) if d == 2 * dir => {
                from.rank() == color.pawn_start_rank()
                    && self.is_empty(to)
                    && self.is_path_clear(from, to)
            }
            (1, d) if d == dir => {
                !self.is_empty(to) || self.is_en_passant_capture(color, from, to, last_move)
            }
            _ => false,
        }
    }

    /// A diagonal step onto an empty square is en passant when the previous
    /// move was an enemy double push landing beside the capturing pawn.
    pub(crate) fn is_en_passant_capture(
        &self,
        color: Color,
        from: Square,
        to: Square,
        last_move: Option<&MoveRecord>,
    ) -> bool {
        let Some(last) = last_move else {
            return false;
        };
        let victim = Square::from_coords(to.file(), from.rank());

        last.is_double_pawn_push()
            && last.piece.color != color
            && last.to == victim
            && self
                .piece_at(victim)
                .is_some_and(|p| p.is(PieceKind::Pawn, color.opponent()))
    }
}

/// Pawns attack the two squares diagonally ahead, whether or not anything stands there.
#[inline]
pub(crate) fn pawn_attacks(color: Color, from: Square, target: Square) -> bool {
    let (df, dr) = from.delta(target);
    df.abs() == 1 && dr == color.pawn_direction()
}

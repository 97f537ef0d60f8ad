use super::{Board, PieceKind, Square};
use crate::board::Piece;

#[inline]
pub(crate) fn king_step(from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    df.abs().max(dr.abs()) == 1
}

/// For a king moving two files along its rank, the rook's (from, to) squares.
///
/// Kingside uses the rook on file h, queenside the rook on file a; the rook
/// lands next to the king's destination on the side it came from.
pub(crate) fn castling_rook_squares(king_from: Square, king_to: Square) -> Option<(Square, Square)> {
    let (df, dr) = king_from.delta(king_to);
    if dr != 0 || df.abs() != 2 {
        return None;
    }
    let rank = king_from.rank();
    if df > 0 {
        Some((
            Square::from_coords(7, rank),
            Square::from_coords(king_to.file() - 1, rank),
        ))
    } else {
        Some((
            Square::from_coords(0, rank),
            Square::from_coords(king_to.file() + 1, rank),
        ))
    }
}

impl Board {
    pub(crate) fn can_castle(&self, king: Piece, from: Square, to: Square) -> bool {
        let Some((rook_from, _)) = castling_rook_squares(from, to) else {
            return false;
        };
        if king.has_moved {
            return false;
        }
        let rook_ready = self
            .piece_at(rook_from)
            .is_some_and(|rook| rook.is(PieceKind::Rook, king.color) && !rook.has_moved);
        if !rook_ready || !self.is_path_clear(from, rook_from) {
            return false;
        }

        // Start, transit and destination squares must all be safe.
        let opponent = king.color.opponent();
        let step = from.delta(to).0.signum();
        (0..=2)
            .filter_map(|i| from.offset(step * i, 0))
            .all(|sq| !self.is_square_attacked(sq, opponent))
    }
}

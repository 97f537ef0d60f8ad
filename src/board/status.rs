//! Legal move enumeration and terminal-state detection.
//!
//! Every query here works by trial: apply a candidate, ask whether the
//! mover's king is attacked, then undo it.

use super::{Board, Color, Move, MoveRecord, Square};

impl Board {
    /// Whether the piece on `from` may move to `to` without exposing its own king.
    pub fn is_legal(&mut self, from: Square, to: Square, last_move: Option<&MoveRecord>) -> bool {
        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        self.is_pseudo_legal(from, to, last_move)
            && self
                .trial(from, to, |board| !board.is_king_in_check(piece.color))
                .unwrap_or(false)
    }

    /// All fully legal moves for `color`.
    pub fn legal_moves(&mut self, color: Color, last_move: Option<&MoveRecord>) -> Vec<Move> {
        let origins: Vec<Square> = self.occupied_by(color).iter().collect();
        let mut moves = Vec::new();
        for from in origins {
            for to in Square::all() {
                if self.is_legal(from, to, last_move) {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    /// True if `color` has at least one legal move. Stops at the first one found.
    pub fn has_legal_move(&mut self, color: Color, last_move: Option<&MoveRecord>) -> bool {
        let origins: Vec<Square> = self.occupied_by(color).iter().collect();
        for from in origins {
            for to in Square::all() {
                if self.is_legal(from, to, last_move) {
                    return true;
                }
            }
        }
        false
    }

    /// `color` is in check and no legal move escapes it.
    pub fn is_checkmate(&mut self, color: Color, last_move: Option<&MoveRecord>) -> bool {
        self.is_king_in_check(color) && !self.has_legal_move(color, last_move)
    }

    /// `color` is not in check but has no legal move.
    pub fn is_stalemate(&mut self, color: Color, last_move: Option<&MoveRecord>) -> bool {
        !self.is_king_in_check(color) && !self.has_legal_move(color, last_move)
    }
}

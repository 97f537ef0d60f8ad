use super::rules::castling_rook_squares;
use super::{Board, MoveError, MoveRecord, PieceKind, RookShift, Square};

impl Board {
    /// Apply a move without checking it, returning the record that reverses it.
    ///
    /// A king moving two files also relocates the matching rook. A pawn moving
    /// diagonally onto an empty square captures en passant, removing the
    /// enemy pawn beside it. The moved piece (and a castling rook) come out
    /// with `has_moved` set.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        let piece = self
            .piece_at(from)
            .ok_or(MoveError::NoPiece { square: from })?;

        let mut castle = None;
        if piece.kind == PieceKind::King {
            if let Some((rook_from, rook_to)) = castling_rook_squares(from, to) {
                if let Some(rook) = self.take_piece(rook_from) {
                    self.set_piece(rook_to, rook.moved());
                    castle = Some(RookShift {
                        from: rook_from,
                        to: rook_to,
                        rook,
                    });
                }
            }
        }

        let mut captured = None;
        if piece.kind == PieceKind::Pawn && from.file() != to.file() && self.is_empty(to) {
            let victim = Square::from_coords(to.file(), from.rank());
            if self
                .piece_at(victim)
                .is_some_and(|p| p.is(PieceKind::Pawn, piece.color.opponent()))
            {
                captured = self.take_piece(victim).map(|pawn| (victim, pawn));
            }
        }

        self.take_piece(from);
        if let Some(victim) = self.set_piece(to, piece.moved()) {
            captured = Some((to, victim));
        }

        Ok(MoveRecord {
            from,
            to,
            piece,
            captured,
            castle,
        })
    }

    /// Reverse a move applied by [`make_move`](Board::make_move).
    ///
    /// Records must be unmade in reverse order of application.
    pub fn unmake_move(&mut self, record: MoveRecord) {
        self.take_piece(record.to);
        self.set_piece(record.from, record.piece);
        if let Some((sq, victim)) = record.captured {
            self.set_piece(sq, victim);
        }
        if let Some(shift) = record.castle {
            self.take_piece(shift.to);
            self.set_piece(shift.from, shift.rook);
        }
    }

    /// Apply a move, run `probe` on the resulting position, then undo the move.
    ///
    /// The board is left exactly as it was before the call.
    pub fn trial<R>(
        &mut self,
        from: Square,
        to: Square,
        probe: impl FnOnce(&Board) -> R,
    ) -> Result<R, MoveError> {
        let record = self.make_move(from, to)?;
        log_event!(trace, "trial {}", record);
        let result = probe(self);
        self.unmake_move(record);
        Ok(result)
    }
}

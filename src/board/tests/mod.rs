//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `pseudo_legal.rs` - Per-piece movement rules
//! - `castling.rs` - Castling preconditions and execution
//! - `en_passant.rs` - En passant eligibility and capture
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `status.rs` - Check, checkmate and stalemate detection
//! - `proptest.rs` - Property-based tests

mod make_unmake;
mod proptest;

use crate::board::{Board, BoardBuilder, Color, PieceKind, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().expect("valid square in test")
}

/// Board with both kings tucked away in the corners plus the given pieces.
pub(super) fn with_kings(pieces: &[(&str, Color, PieceKind)]) -> Board {
    pieces
        .iter()
        .fold(
            BoardBuilder::new()
                .piece(sq("a1"), Color::White, PieceKind::King)
                .piece(sq("a8"), Color::Black, PieceKind::King),
            |builder, &(square, color, kind)| builder.piece(sq(square), color, kind),
        )
        .build()
}

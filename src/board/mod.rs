//! Chess board representation and move rules.
//!
//! The board owns all 64 squares and answers every spatial question the
//! rules need: line of sight, attacks, check, and whether a side has any
//! legal move left. Moves are applied with [`Board::make_move`], which hands
//! back a [`MoveRecord`] that [`Board::unmake_move`] uses to restore the
//! previous position exactly.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Square};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves(Color::White, None);
//! assert_eq!(moves.len(), 20);
//!
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! let record = board.make_move(e2, e4).unwrap();
//! board.unmake_move(record);
//! assert_eq!(board, Board::new());
//! ```

mod attacks;
mod builder;
mod error;
mod make_unmake;
pub mod prelude;
mod rays;
mod rules;
mod snapshot;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, MoveParseError, SquareError};
pub use snapshot::BoardSnapshot;
pub use state::Board;
pub use types::{
    Bitboard, BitboardIter, Color, Move, MoveRecord, Piece, PieceKind, RookShift, Square,
};

//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let mut game = new_game();
//! assert!(game.play_move("e2", "e4"));
//! assert_eq!(game.current_turn(), Color::Black);
//! ```

pub use super::{
    Board, BoardBuilder, BoardSnapshot, Color, Move, MoveError, MoveParseError, MoveRecord, Piece,
    PieceKind, Square, SquareError,
};
pub use crate::game::{new_game, Game, GameStatus};
pub use crate::sync::SharedGame;

//! Rules engine for standard chess.
//!
//! Keeps the board, decides which moves are legal for every piece
//! (castling and en passant included), detects check, checkmate and
//! stalemate, and applies or reverses moves exactly. Rendering and input
//! handling are left to the caller, which talks to the engine through
//! [`Game`] and the read-only [`BoardSnapshot`].
//!
//! # Example
//! ```
//! use chess_rules::{new_game, Color};
//!
//! let mut game = new_game();
//! for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
//!     assert!(game.play_move(from, to));
//! }
//! assert!(game.is_checkmate(Color::White));
//! ```

/// Emit a `log` record when the `logging` feature is enabled.
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        log::$level!($($arg)+);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)+);
    }};
}

pub mod board;
pub mod game;
pub mod sync;

pub use board::{
    Board, BoardBuilder, BoardSnapshot, Color, Move, MoveError, MoveParseError, MoveRecord, Piece,
    PieceKind, Square, SquareError,
};
pub use game::{new_game, Game, GameStatus};
pub use sync::SharedGame;

//! Error types for board and game operations.

use std::fmt;

use super::{Color, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: u8 },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: u8 },
    /// Index out of bounds (must be 0-63)
    IndexOutOfBounds { index: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for coordinate move parsing failures (`e2e4`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string must be exactly 4 characters
    InvalidLength { len: usize },
    /// One of the two squares is malformed
    InvalidSquare(SquareError),
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for MoveParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveParseError::InvalidSquare(err) => Some(err),
            MoveParseError::InvalidLength { .. } => None,
        }
    }
}

impl From<SquareError> for MoveParseError {
    fn from(err: SquareError) -> Self {
        MoveParseError::InvalidSquare(err)
    }
}

/// Why a proposed move was rejected.
///
/// A rejected move never changes the board or the turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A coordinate could not be parsed
    InvalidSquare(SquareError),
    /// No piece stands on the source square
    NoPiece { square: Square },
    /// The piece on the source square belongs to the side not on move
    WrongTurn { square: Square, turn: Color },
    /// The destination holds a piece of the mover's own color
    FriendlyFire { from: Square, to: Square },
    /// The piece cannot move that way (geometry, blocked path, castling conditions)
    IllegalMove { from: Square, to: Square },
    /// The move would leave the mover's own king in check
    ExposesKing { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidSquare(err) => write!(f, "{err}"),
            MoveError::NoPiece { square } => write!(f, "No piece on {square}"),
            MoveError::WrongTurn { square, turn } => {
                write!(f, "Piece on {square} cannot move, it is {turn}'s turn")
            }
            MoveError::FriendlyFire { from, to } => {
                write!(f, "Move {from}{to} would capture a friendly piece")
            }
            MoveError::IllegalMove { from, to } => write!(f, "Illegal move {from}{to}"),
            MoveError::ExposesKing { from, to } => {
                write!(f, "Move {from}{to} leaves the king in check")
            }
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidSquare(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveError {
    fn from(err: SquareError) -> Self {
        MoveError::InvalidSquare(err)
    }
}

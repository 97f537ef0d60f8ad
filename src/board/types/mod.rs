//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `PieceKind`, `Piece` and `Color` - what stands on a square
//! - `Square` - a checked board coordinate
//! - `Bitboard` - 64-bit square set
//! - `Move` and `MoveRecord` - proposed moves and their reversal records

mod bitboard;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::{Move, MoveRecord, RookShift};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

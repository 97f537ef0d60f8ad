//! Shared access to a game from several threads.
//!
//! Legality checks apply a move to the board and take it back again, so no
//! other thread may touch the board while one of them is in flight. A
//! [`SharedGame`] serializes every operation behind one lock per game.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{BoardSnapshot, Color, Move, MoveRecord};
use crate::game::{Game, GameStatus};

/// A game behind an exclusive lock. Clones refer to the same game.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<Game>>);

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }

    /// Run `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        let mut game = self.0.lock();
        f(&mut game)
    }

    pub fn play_move(&self, from: &str, to: &str) -> bool {
        self.with(|game| game.play_move(from, to))
    }

    pub fn undo_move(&self) -> Option<MoveRecord> {
        self.with(Game::undo_move)
    }

    #[must_use]
    pub fn current_turn(&self) -> Color {
        self.0.lock().current_turn()
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.0.lock().snapshot()
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.0.lock().is_in_check(color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.with(|game| game.is_checkmate(color))
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        self.with(|game| game.is_stalemate(color))
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.with(Game::legal_moves)
    }

    pub fn status(&self) -> GameStatus {
        self.with(Game::status)
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame::new(game)
    }
}

//! Turn controller.
//!
//! A [`Game`] owns one [`Board`], knows whose turn it is and remembers the
//! moves played so far. It is the only place the self-check rule is
//! enforced: a move is tried on the board, and if it leaves the mover's own
//! king attacked it is taken back and rejected.

use crate::board::{Board, BoardSnapshot, Color, Move, MoveError, MoveRecord, Square};

/// Position of the side to move, as seen before it picks a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The given side is in check but has a way out.
    Check(Color),
    /// The given side is in check with no legal move.
    Checkmate(Color),
    /// The given side is not in check but has no legal move.
    Stalemate(Color),
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate(_))
    }
}

/// One game of chess: the board, the side to move and the move history.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    last_move: Option<MoveRecord>,
    history: Vec<MoveRecord>,
}

/// Start a game from the standard position with White to move.
#[must_use]
pub fn new_game() -> Game {
    Game::new()
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Game::from_board(Board::new(), Color::White)
    }

    /// Start from an arbitrary position (see [`BoardBuilder`](crate::board::BoardBuilder)).
    #[must_use]
    pub fn from_board(board: Board, turn: Color) -> Self {
        Game {
            board,
            turn,
            last_move: None,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_turn(&self) -> Color {
        self.turn
    }

    /// The most recently committed move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    /// Every committed move, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Play a move given in algebraic coordinates (`"e2"`, `"e4"`).
    ///
    /// Returns `false` and leaves the game untouched if either coordinate is
    /// malformed or the move is illegal.
    pub fn play_move(&mut self, from: &str, to: &str) -> bool {
        self.try_play_move(from, to).is_ok()
    }

    /// Like [`play_move`](Game::play_move), but says why a move was rejected.
    pub fn try_play_move(&mut self, from: &str, to: &str) -> Result<MoveRecord, MoveError> {
        let from: Square = from.parse()?;
        let to: Square = to.parse()?;
        self.play(from, to)
    }

    /// Play a move for the side to move.
    ///
    /// On success the move is committed, becomes the last move (for en
    /// passant on the next ply) and the turn passes to the other side.
    /// On failure nothing changes.
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        let result = self.commit(from, to);
        match &result {
            Ok(record) => log_event!(debug, "{} played {}", record.piece.color, record),
            Err(err) => log_event!(debug, "rejected {}{}: {}", from, to, err),
        }
        result
    }

    fn commit(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::NoPiece { square: from })?;
        if piece.color != self.turn {
            return Err(MoveError::WrongTurn {
                square: from,
                turn: self.turn,
            });
        }

        if !self.board.is_pseudo_legal(from, to, self.last_move.as_ref()) {
            return Err(if self.board.color_on(to) == Some(piece.color) {
                MoveError::FriendlyFire { from, to }
            } else {
                MoveError::IllegalMove { from, to }
            });
        }

        let record = self.board.make_move(from, to)?;
        if self.board.is_king_in_check(self.turn) {
            self.board.unmake_move(record);
            return Err(MoveError::ExposesKing { from, to });
        }

        self.last_move = Some(record);
        self.history.push(record);
        self.turn = self.turn.opponent();
        Ok(record)
    }

    /// Take back the most recent move. Returns `None` if no move was played.
    pub fn undo_move(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;
        self.board.unmake_move(record);
        self.turn = record.piece.color;
        self.last_move = self.history.last().copied();
        log_event!(debug, "undid {}", record);
        Some(record)
    }

    /// Whether the side to move may play `from` -> `to`.
    pub fn is_legal(&mut self, from: Square, to: Square) -> bool {
        self.board.color_on(from) == Some(self.turn)
            && self.board.is_legal(from, to, self.last_move.as_ref())
    }

    /// Every legal move for the side to move.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        self.board.legal_moves(self.turn, self.last_move.as_ref())
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_king_in_check(color)
    }

    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.board.is_checkmate(color, self.last_move.as_ref())
    }

    pub fn is_stalemate(&mut self, color: Color) -> bool {
        self.board.is_stalemate(color, self.last_move.as_ref())
    }

    /// Check, checkmate or stalemate for the side to move.
    pub fn status(&mut self) -> GameStatus {
        let turn = self.turn;
        let in_check = self.board.is_king_in_check(turn);
        let can_move = self.board.has_legal_move(turn, self.last_move.as_ref());
        let status = match (in_check, can_move) {
            (true, true) => GameStatus::Check(turn),
            (true, false) => GameStatus::Checkmate(turn),
            (false, true) => GameStatus::Ongoing,
            (false, false) => GameStatus::Stalemate(turn),
        };
        if status.is_over() {
            log_event!(debug, "game over: {:?}", status);
        }
        status
    }
}

use super::{Bitboard, Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 64 squares and the pieces standing on them.
///
/// The board owns every live piece. Moving a piece transfers it from one
/// square to another; a captured piece simply leaves the board (or sits in
/// a [`MoveRecord`](super::MoveRecord) until the move is undone).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; 64],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            for (file, kind) in (0u8..).zip(BACK_RANK) {
                board.set_piece(
                    Square::from_coords(file, color.back_rank()),
                    Piece::new(kind, color),
                );
                board.set_piece(
                    Square::from_coords(file, color.pawn_start_rank()),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        !self.all_occupied.contains(sq)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|piece| piece.color)
    }

    /// Squares occupied by `color`.
    #[inline]
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color_index(color)]
    }

    /// Every piece of `color` with its square, in square order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied_by(color)
            .iter()
            .filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Locate the king of `color`, if one is on the board.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Put `piece` on `sq`, returning whatever stood there before.
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        let previous = self.take_piece(sq);
        self.squares[sq.index()] = Some(piece);
        self.occupied[color_index(piece.color)].insert(sq);
        self.all_occupied.insert(sq);
        previous
    }

    /// Remove and return the piece on `sq`.
    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.squares[sq.index()].take()?;
        self.occupied[color_index(piece.color)].remove(sq);
        self.all_occupied.remove(sq);
        Some(piece)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[inline]
const fn color_index(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => 1,
    }
}

use super::{Board, Square};

impl Board {
    pub(crate) fn rook_reaches(&self, from: Square, to: Square) -> bool {
        let (df, dr) = from.delta(to);
        (df == 0) != (dr == 0) && self.is_path_clear(from, to)
    }

    pub(crate) fn bishop_reaches(&self, from: Square, to: Square) -> bool {
        let (df, dr) = from.delta(to);
        df != 0 && df.abs() == dr.abs() && self.is_path_clear(from, to)
    }

    pub(crate) fn queen_reaches(&self, from: Square, to: Square) -> bool {
        self.rook_reaches(from, to) || self.bishop_reaches(from, to)
    }
}

//! Precomputed line-of-sight tables.

use once_cell::sync::Lazy;

use super::{Bitboard, Square};

/// `BETWEEN[a][b]` holds the squares strictly between `a` and `b` when they
/// share a file, rank or diagonal, and is empty otherwise.
static BETWEEN: Lazy<Box<[[Bitboard; 64]; 64]>> = Lazy::new(|| {
    let mut table = Box::new([[Bitboard::EMPTY; 64]; 64]);
    for from in Square::all() {
        for to in Square::all() {
            if !aligned(from, to) {
                continue;
            }
            let (df, dr) = from.delta(to);
            let (step_f, step_r) = (df.signum(), dr.signum());
            let mut mask = Bitboard::EMPTY;
            let mut cursor = from.offset(step_f, step_r);
            while let Some(sq) = cursor {
                if sq == to {
                    break;
                }
                mask.insert(sq);
                cursor = sq.offset(step_f, step_r);
            }
            table[from.index()][to.index()] = mask;
        }
    }
    table
});

/// True when two distinct squares share a file, rank or diagonal.
#[inline]
pub(crate) fn aligned(a: Square, b: Square) -> bool {
    let (df, dr) = a.delta(b);
    (df, dr) != (0, 0) && (df == 0 || dr == 0 || df.abs() == dr.abs())
}

#[inline]
pub(crate) fn between(a: Square, b: Square) -> Bitboard {
    BETWEEN[a.index()][b.index()]
}

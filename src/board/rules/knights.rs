use super::Square;

#[inline]
pub(crate) fn knight_jump(from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    matches!((df.abs(), dr.abs()), (1, 2) | (2, 1))
}

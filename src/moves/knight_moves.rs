/// Knight movement rule: an L of (1, 2) or (2, 1) in either sign.
///
/// Both axes must change, neither may change by more than two.
#[inline]
pub const fn is_legal_knight_delta(d_file: i8, d_rank: i8) -> bool {
    if d_file == 0 || d_rank == 0 {
        return false;
    }
    let (f, r) = (d_file.abs(), d_rank.abs());
    if f > 2 || r > 2 {
        return false;
    }
    (f == 2 && r == 1) || (f == 1 && r == 2)
}

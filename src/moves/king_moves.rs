//! King movement rule.
//!
//! One step in any direction, staying put is not a move. Like every rule in
//! `moves`, this is a pure function of the delta and knows nothing about
//! what else is on the board.

#[inline]
pub const fn is_legal_king_delta(d_file: i8, d_rank: i8) -> bool {
    if d_file.abs() > 1 || d_rank.abs() > 1 {
        return false;
    }
    !(d_file == 0 && d_rank == 0)
}

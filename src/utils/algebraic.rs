//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and [`Square`]
//! values used by the board and the move engine.

use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Square::new(file - b'a', rank - b'1')
        .ok_or_else(|| format!("Invalid algebraic square: {square}"))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Split a move token such as `"e1e2"` or `"e1 e2"` into its two squares.
pub fn parse_move_pair(token: &str) -> Result<(Square, Square), String> {
    let compact: String = token
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(format!("Invalid move: {token}"));
    }
    let from = algebraic_to_square(&compact[..2])?;
    let to = algebraic_to_square(&compact[2..])?;
    Ok((from, to))
}

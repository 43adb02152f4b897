//! Canonical setup constants.
//!
//! The starting placement only has the pieces this board knows how to move:
//! both kings on the e-file and the four knights on their usual squares.

use crate::game_state::chess_types::{Color, PieceKind};

/// Number of files and ranks.
pub const BOARD_SIZE: usize = 8;

/// `(file, rank, color, kind)` for every piece of the starting position.
pub const STARTING_PLACEMENT: [(u8, u8, Color, PieceKind); 6] = [
    (4, 0, Color::White, PieceKind::King),
    (1, 0, Color::White, PieceKind::Knight),
    (6, 0, Color::White, PieceKind::Knight),
    (4, 7, Color::Black, PieceKind::King),
    (1, 7, Color::Black, PieceKind::Knight),
    (6, 7, Color::Black, PieceKind::Knight),
];

//! Board occupancy.
//!
//! `Board` owns every piece placed on it. Cells are plain `Option<Piece>`
//! values: moving a piece moves the value between cells, capturing drops it.

use crate::game_state::chess_rules::{BOARD_SIZE, STARTING_PLACEMENT};
use crate::game_state::chess_types::{Piece, Square};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    // [file][rank]
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Kings on e1/e8, knights on b1, g1, b8 and g8.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (file, rank, color, kind) in STARTING_PLACEMENT {
            if let Some(square) = Square::new(file, rank) {
                board.place(square, Piece::new(color, kind));
            }
        }
        board
    }

    #[inline]
    pub fn occupant_at(&self, square: Square) -> Option<&Piece> {
        self.cells[square.file() as usize][square.rank() as usize].as_ref()
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.occupant_at(square).is_some()
    }

    /// Put `piece` on `square` during setup. Returns the piece it displaced,
    /// if any.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.cell_mut(square).replace(piece)
    }

    /// Take the piece off `square`.
    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.cell_mut(square).take()
    }

    /// Move whatever sits on `from` onto `to`, leaving `from` empty.
    ///
    /// Returns the previous occupant of `to`. No rule checks happen here; the
    /// move engine validates before calling this.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        if from == to {
            return None;
        }
        let moving = self.remove(from);
        std::mem::replace(self.cell_mut(to), moving)
    }

    /// Occupied squares in file-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.occupant_at(square).map(|p| (square, *p)))
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    #[inline]
    fn cell_mut(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.cells[square.file() as usize][square.rank() as usize]
    }
}

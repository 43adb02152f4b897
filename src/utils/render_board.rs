//! Text grid renderer with an explicit refresh contract.
//!
//! `RenderCache` keeps one 3-character code per cell. It is derived from a
//! [`Board`] but never watches it: build it with [`RenderCache::initialize_from`]
//! after setup and call [`RenderCache::update_cell`] after every relocation,
//! or the grid goes stale.
//!
//! Rows of the rendered grid follow the board's file index (row 0 is the
//! a-file, each row lists ranks 1 through 8).

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Square;

pub const BLANK_CELL: &str = "   ";

const ROW_SEPARATOR: &str = "________________________________";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCache {
    cells: [[String; BOARD_SIZE]; BOARD_SIZE],
}

impl RenderCache {
    pub fn initialize_from(board: &Board) -> Self {
        let cells = std::array::from_fn(|file| {
            std::array::from_fn(|rank| {
                Square::new(file as u8, rank as u8)
                    .and_then(|square| board.occupant_at(square))
                    .map_or_else(|| BLANK_CELL.to_owned(), |piece| piece.display_code())
            })
        });
        Self { cells }
    }

    /// Mirror a relocation: `to` takes `from`'s code and `from` is blanked.
    pub fn update_cell(&mut self, from: Square, to: Square) {
        if from == to {
            return;
        }
        let code = std::mem::replace(self.cell_mut(from), BLANK_CELL.to_owned());
        *self.cell_mut(to) = code;
    }

    #[inline]
    pub fn cell(&self, square: Square) -> &str {
        &self.cells[square.file() as usize][square.rank() as usize]
    }

    /// Whether every cached code still matches `board`.
    pub fn is_in_sync_with(&self, board: &Board) -> bool {
        *self == Self::initialize_from(board)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for (i, row) in self.cells.iter().enumerate() {
            for code in row {
                out.push('|');
                out.push_str(code);
            }
            out.push_str("|\n");
            if i != BOARD_SIZE - 1 {
                out.push_str(ROW_SEPARATOR);
            }
            out.push('\n');
        }

        out
    }

    #[inline]
    fn cell_mut(&mut self, square: Square) -> &mut String {
        &mut self.cells[square.file() as usize][square.rank() as usize]
    }
}

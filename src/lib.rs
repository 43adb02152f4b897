//! Crate root module declarations for the sjakk board.
//!
//! Exposes the board model (pieces, occupancy, setup constants), the
//! per-piece movement rules, the move engine and the text utilities so the
//! driver binary, tests and benches can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_board;
}

//! Rejection reasons for a move request.
//!
//! Every variant is a soft outcome: the move engine reports it and leaves the
//! board untouched. Nothing here is meant to be propagated as a fatal fault.

use std::fmt;

use crate::game_state::chess_types::{Piece, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    /// A coordinate did not name a square on the board.
    ///
    /// Payload: the parser's diagnostic.
    InvalidSquare(String),

    /// Nothing stands on the origin square.
    EmptySource(Square),

    /// The piece's movement rule does not allow this delta.
    IllegalMove { piece: Piece, from: Square, to: Square },

    /// The destination holds a piece of the mover's color.
    ///
    /// Displays exactly like [`MoveRejection::IllegalMove`]; only the variant
    /// tells the two apart.
    FriendlyOccupied {
        piece: Piece,
        occupant: Piece,
        from: Square,
        to: Square,
    },
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::InvalidSquare(reason) => write!(f, "invalid square: {reason}"),
            MoveRejection::EmptySource(from) => write!(f, "no piece at {from}"),
            MoveRejection::IllegalMove { piece, from, to }
            | MoveRejection::FriendlyOccupied {
                piece, from, to, ..
            } => write!(f, "can not move {} from {from} to {to}", piece.kind_name()),
        }
    }
}

impl std::error::Error for MoveRejection {}

//! Core piece and square types shared by the board, the movement rules and
//! the move engine.

use std::fmt;

use crate::moves::{king_moves::is_legal_king_delta, knight_moves::is_legal_knight_delta};

/// Side a piece belongs to. Fixed for the lifetime of the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }

    #[inline]
    pub const fn short_code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kinds with movement rules. Closed on purpose: adding a kind means
/// adding an arm to [`PieceKind::is_legal_delta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Knight,
}

impl PieceKind {
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Knight => "knight",
        }
    }

    /// Two-character abbreviation used in the rendered grid. The king's
    /// abbreviation is padded so every cell is three characters wide.
    #[inline]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            PieceKind::King => "K ",
            PieceKind::Knight => "Kn",
        }
    }

    /// Movement predicate over a file/rank delta. Never looks at occupancy.
    #[inline]
    pub fn is_legal_delta(self, d_file: i8, d_rank: i8) -> bool {
        match self {
            PieceKind::King => is_legal_king_delta(d_file, d_rank),
            PieceKind::Knight => is_legal_knight_delta(d_file, d_rank),
        }
    }
}

/// A board square, `file` and `rank` both in `0..8` (`a1 == (0, 0)`).
///
/// The only constructors validate their input, so a `Square` can always be
/// used to index the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Signed `(d_file, d_rank)` from `self` to `to`.
    #[inline]
    pub const fn delta_to(self, to: Square) -> (i8, i8) {
        (
            to.file as i8 - self.file as i8,
            to.rank as i8 - self.rank as i8,
        )
    }

    /// All 64 squares, file-major (`a1, a2, .., a8, b1, ..`).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|file| (0..8u8).map(move |rank| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.file),
            char::from(b'1' + self.rank)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    #[inline]
    pub const fn king(color: Color) -> Self {
        Self::new(color, PieceKind::King)
    }

    #[inline]
    pub const fn knight(color: Color) -> Self {
        Self::new(color, PieceKind::Knight)
    }

    /// `"white king"`, `"black knight"`, ...
    pub fn kind_name(&self) -> String {
        format!("{} {}", self.color.name(), self.kind.name())
    }

    /// Fixed-width grid code: `"wK "`, `"bKn"`, ...
    pub fn display_code(&self) -> String {
        format!("{}{}", self.color.short_code(), self.kind.abbreviation())
    }

    /// Whether this piece may travel from `from` to `to` on an empty board.
    ///
    /// Pure: same-color occupancy and blocking are the caller's concern.
    #[inline]
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        let (d_file, d_rank) = from.delta_to(to);
        self.kind.is_legal_delta(d_file, d_rank)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Piece, PieceKind, Square};

    #[test]
    fn names_and_codes_match_grid_notation() {
        assert_eq!(Piece::king(Color::White).kind_name(), "white king");
        assert_eq!(Piece::knight(Color::Black).kind_name(), "black knight");
        assert_eq!(Piece::king(Color::White).display_code(), "wK ");
        assert_eq!(Piece::king(Color::Black).display_code(), "bK ");
        assert_eq!(Piece::knight(Color::White).display_code(), "wKn");
        assert_eq!(Piece::knight(Color::Black).display_code(), "bKn");
    }

    #[test]
    fn display_codes_are_three_chars_wide() {
        for color in [Color::White, Color::Black] {
            for kind in [PieceKind::King, PieceKind::Knight] {
                assert_eq!(Piece::new(color, kind).display_code().len(), 3);
            }
        }
    }

    #[test]
    fn square_rejects_out_of_range_and_formats_algebraic() {
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        let e4 = Square::new(4, 3).expect("e4 is on the board");
        assert_eq!(e4.to_string(), "e4");
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn delta_is_signed() {
        let e1 = Square::new(4, 0).expect("e1");
        let c2 = Square::new(2, 1).expect("c2");
        assert_eq!(e1.delta_to(c2), (-2, 1));
        assert_eq!(c2.delta_to(e1), (2, -1));
    }
}

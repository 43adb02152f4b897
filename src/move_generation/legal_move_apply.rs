//! Move application: validate, resolve capture, relocate, refresh.
//!
//! A request moves through `parsed -> validated -> (capture resolved) ->
//! applied`, or stops at `rejected` without touching the board. The decision
//! part ([`plan_move`]) is pure; [`MoveEngine`] performs the mutation and
//! collects what happened as [`MoveEvent`]s, which callers can print via
//! [`MoveReport::lines`].

use std::fmt;

use crate::chess_errors::MoveRejection;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::render_board::RenderCache;

/// A move that passed every check and can be applied as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

impl MovePlan {
    #[inline]
    pub fn captures_king(&self) -> bool {
        matches!(self.captured, Some(p) if p.kind == PieceKind::King)
    }
}

/// Decide whether `from -> to` may be played on `board`.
///
/// Checks run in a fixed order: empty origin, movement rule, then
/// destination color. Same-color occupancy is only looked at once the rule
/// has passed.
pub fn plan_move(board: &Board, from: Square, to: Square) -> Result<MovePlan, MoveRejection> {
    let piece = *board
        .occupant_at(from)
        .ok_or(MoveRejection::EmptySource(from))?;

    if !piece.is_legal_move(from, to) {
        return Err(MoveRejection::IllegalMove { piece, from, to });
    }

    let captured = match board.occupant_at(to) {
        Some(occupant) if occupant.color == piece.color => {
            return Err(MoveRejection::FriendlyOccupied {
                piece,
                occupant: *occupant,
                from,
                to,
            });
        }
        other => other.copied(),
    };

    Ok(MovePlan {
        piece,
        from,
        to,
        captured,
    })
}

/// Something observable that happened while handling a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveEvent {
    /// The piece passed its movement rule and is heading for `to`.
    Moving { piece: Piece, from: Square, to: Square },
    /// An enemy piece was taken off `at`.
    Captured { piece: Piece, at: Square },
    /// The captured piece was a king. Purely informational, play goes on.
    KingLost(Color),
    /// Full grid after a successful move.
    BoardRendered(String),
}

impl fmt::Display for MoveEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveEvent::Moving { piece, from, to } => {
                write!(f, "{} is moving from {from} to {to}", piece.kind_name())
            }
            MoveEvent::Captured { piece, at } => {
                write!(f, "{} is being removed from {at}", piece.kind_name())
            }
            MoveEvent::KingLost(color) => write!(f, "{} lost the game", color.name()),
            MoveEvent::BoardRendered(grid) => f.write_str(grid),
        }
    }
}

/// Everything a single request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub events: Vec<MoveEvent>,
    pub outcome: Result<MovePlan, MoveRejection>,
}

impl MoveReport {
    fn rejected(events: Vec<MoveEvent>, rejection: MoveRejection) -> Self {
        Self {
            events,
            outcome: Err(rejection),
        }
    }

    #[inline]
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }

    #[inline]
    pub fn rejection(&self) -> Option<&MoveRejection> {
        self.outcome.as_ref().err()
    }

    /// Human-readable report, one entry per event, with the rejection reason
    /// last when the move failed. The rendered board is a single multi-line
    /// entry.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.events.iter().map(ToString::to_string).collect();
        if let Err(rejection) = &self.outcome {
            lines.push(rejection.to_string());
        }
        lines
    }
}

/// Owns the board and its render cache and keeps them in step.
#[derive(Debug, Clone)]
pub struct MoveEngine {
    board: Board,
    render_cache: RenderCache,
}

impl Default for MoveEngine {
    fn default() -> Self {
        Self::new(Board::starting_position())
    }
}

impl MoveEngine {
    /// Take ownership of a fully set-up board and build its render cache.
    pub fn new(board: Board) -> Self {
        let render_cache = RenderCache::initialize_from(&board);
        Self {
            board,
            render_cache,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn render_cache(&self) -> &RenderCache {
        &self.render_cache
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    #[inline]
    pub fn render(&self) -> String {
        self.render_cache.render()
    }

    /// Boolean facade over [`MoveEngine::apply`].
    pub fn apply_move(&mut self, from: &str, to: &str) -> bool {
        self.apply(from, to).succeeded()
    }

    /// Handle one request given in algebraic notation (`"e1"`, `"e2"`).
    ///
    /// Coordinates that do not name a square are rejected with
    /// [`MoveRejection::InvalidSquare`].
    pub fn apply(&mut self, from: &str, to: &str) -> MoveReport {
        let squares = algebraic_to_square(from).and_then(|from| {
            let to = algebraic_to_square(to)?;
            Ok((from, to))
        });
        match squares {
            Ok((from, to)) => self.apply_squares(from, to),
            Err(reason) => {
                MoveReport::rejected(Vec::new(), MoveRejection::InvalidSquare(reason))
            }
        }
    }

    pub fn apply_squares(&mut self, from: Square, to: Square) -> MoveReport {
        let plan = match plan_move(&self.board, from, to) {
            Ok(plan) => plan,
            Err(rejection) => {
                // The mover's rule passed before the friendly piece was seen.
                let events = match rejection {
                    MoveRejection::FriendlyOccupied {
                        piece, from, to, ..
                    } => vec![MoveEvent::Moving { piece, from, to }],
                    _ => Vec::new(),
                };
                return MoveReport::rejected(events, rejection);
            }
        };

        let mut events = vec![MoveEvent::Moving {
            piece: plan.piece,
            from,
            to,
        }];

        if let Some(captured) = plan.captured {
            events.push(MoveEvent::Captured {
                piece: captured,
                at: to,
            });
            if captured.kind == PieceKind::King {
                events.push(MoveEvent::KingLost(captured.color));
            }
        }

        // The returned piece is the capture recorded above; dropping it here
        // removes it from the game.
        let _ = self.board.relocate(from, to);
        self.render_cache.update_cell(from, to);
        debug_assert!(self.render_cache.is_in_sync_with(&self.board));

        events.push(MoveEvent::BoardRendered(self.render()));

        MoveReport {
            events,
            outcome: Ok(plan),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{plan_move, MoveEngine, MoveEvent};
    use crate::chess_errors::MoveRejection;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::render_board::RenderCache;

    fn engine_with(pieces: &[(&str, Piece)]) -> MoveEngine {
        let mut board = Board::empty();
        for (name, piece) in pieces {
            board.place(algebraic_to_square(name).expect("test square"), *piece);
        }
        MoveEngine::new(board)
    }

    #[test]
    fn empty_origin_is_rejected_without_events() {
        let mut engine = MoveEngine::default();
        let before = engine.board().clone();

        let report = engine.apply("e3", "e2");

        assert!(!report.succeeded());
        assert!(report.events.is_empty());
        assert_eq!(report.lines(), vec!["no piece at e3".to_owned()]);
        assert_eq!(engine.board(), &before);
    }

    #[test]
    fn illegal_delta_is_rejected() {
        let mut engine = MoveEngine::default();
        let report = engine.apply("e1", "e3");
        assert!(matches!(
            report.rejection(),
            Some(MoveRejection::IllegalMove { .. })
        ));
        assert_eq!(
            report.lines(),
            vec!["can not move white king from e1 to e3".to_owned()]
        );
    }

    #[test]
    fn friendly_destination_reports_moving_then_rejects() {
        let mut engine = engine_with(&[
            ("e1", Piece::king(Color::White)),
            ("e2", Piece::knight(Color::White)),
        ]);
        let before = engine.render();

        let report = engine.apply("e1", "e2");

        assert!(matches!(
            report.rejection(),
            Some(MoveRejection::FriendlyOccupied { .. })
        ));
        assert_eq!(
            report.lines(),
            vec![
                "white king is moving from e1 to e2".to_owned(),
                "can not move white king from e1 to e2".to_owned(),
            ]
        );
        assert_eq!(engine.render(), before);
        assert_eq!(engine.board().piece_count(), 2);
    }

    #[test]
    fn enemy_capture_removes_piece_and_refreshes_grid() {
        let mut engine = engine_with(&[
            ("d4", Piece::knight(Color::White)),
            ("e6", Piece::knight(Color::Black)),
        ]);

        let report = engine.apply("d4", "e6");

        assert!(report.succeeded());
        assert_eq!(
            report.events[1],
            MoveEvent::Captured {
                piece: Piece::knight(Color::Black),
                at: algebraic_to_square("e6").expect("e6"),
            }
        );
        assert_eq!(engine.board().piece_count(), 1);
        assert!(engine.render_cache().is_in_sync_with(engine.board()));
        assert_eq!(
            report.events.last(),
            Some(&MoveEvent::BoardRendered(engine.render()))
        );
    }

    #[test]
    fn king_capture_logs_loss_and_play_continues() {
        let mut engine = engine_with(&[
            ("f6", Piece::knight(Color::White)),
            ("e8", Piece::king(Color::Black)),
            ("g8", Piece::knight(Color::Black)),
        ]);

        let report = engine.apply("f6", "e8");
        let lines = report.lines();
        assert_eq!(lines[0], "white knight is moving from f6 to e8");
        assert_eq!(lines[1], "black king is being removed from e8");
        assert_eq!(lines[2], "black lost the game");
        assert!(report.outcome.as_ref().is_ok_and(|plan| plan.captures_king()));

        assert!(engine.apply_move("g8", "h6"));
    }

    #[test]
    fn bad_coordinates_are_soft_rejections() {
        let mut engine = MoveEngine::default();
        let report = engine.apply("e1", "e9");
        assert!(matches!(
            report.rejection(),
            Some(MoveRejection::InvalidSquare(_))
        ));
        assert!(!engine.apply_move("z1", "e2"));
        assert_eq!(engine.board(), &Board::starting_position());
    }

    #[test]
    fn plan_is_pure() {
        let board = Board::starting_position();
        let g1 = algebraic_to_square("g1").expect("g1");
        let f3 = algebraic_to_square("f3").expect("f3");

        let plan = plan_move(&board, g1, f3).expect("g1f3 is a knight move");

        assert_eq!(plan.piece.kind, PieceKind::Knight);
        assert_eq!(plan.captured, None);
        assert_eq!(board, Board::starting_position());
        assert_eq!(
            RenderCache::initialize_from(&board),
            RenderCache::initialize_from(&Board::starting_position())
        );
    }
}

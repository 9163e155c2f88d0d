//! Valid-move counter invariants.

use super::Invariant;
use crate::Game;
use crate::rules::{is_draw, is_full};

/// Invariant: the counter never exceeds the number of squares.
pub struct MoveCountBounded;

impl Invariant<Game> for MoveCountBounded {
    fn holds(game: &Game) -> bool {
        game.valid_move_count() <= game.max_valid_moves()
    }

    fn description() -> &'static str {
        "Valid-move count never exceeds N*N"
    }
}

/// Invariant: every accepted move marked exactly one square.
///
/// Squares never revert to empty, so the number of occupied squares must
/// equal the number of accepted moves.
pub struct MoveCountMatchesBoard;

impl Invariant<Game> for MoveCountMatchesBoard {
    fn holds(game: &Game) -> bool {
        game.board().occupied() == game.valid_move_count()
    }

    fn description() -> &'static str {
        "Occupied squares equal the valid-move count"
    }
}

/// Invariant: the board is full exactly when the counter reaches N*N.
pub struct FullBoardAtMaxCount;

impl Invariant<Game> for FullBoardAtMaxCount {
    fn holds(game: &Game) -> bool {
        is_full(game.board()) == is_draw(game.board_size(), game.valid_move_count())
    }

    fn description() -> &'static str {
        "Board is full exactly when the valid-move count reaches N*N"
    }
}

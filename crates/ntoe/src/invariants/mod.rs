//! Runtime invariants of the game engine.
//!
//! Invariants are properties that hold after every call to
//! [`Game::apply_move`](crate::Game::apply_move). A violation means the
//! engine itself is broken, so the engine checks them in debug builds and
//! panics on failure instead of returning an error.

use crate::Game;
use tracing::{error, instrument};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        check_one::<S, I4>(state, &mut violations);
        into_result(violations)
    }
}

pub mod move_count;
pub mod turn_cursor;

pub use move_count::{FullBoardAtMaxCount, MoveCountBounded, MoveCountMatchesBoard};
pub use turn_cursor::TurnCursorInRange;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    TurnCursorInRange,
    MoveCountBounded,
    MoveCountMatchesBoard,
    FullBoardAtMaxCount,
);

/// Asserts that all engine invariants hold (panics on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &Game) {
    if cfg!(debug_assertions)
        && let Err(violations) = EngineInvariants::check_all(game)
    {
        let descriptions = violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        error!(%descriptions, "Engine invariant violated");
        panic!("engine invariant violated: {}", descriptions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Location, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new(3, 2);
        assert!(EngineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Game::new(3, 2);
        game.apply_move(Player::new(1), Location::new(0, 0));
        game.apply_move(Player::new(1), Location::new(1, 1));
        game.apply_move(Player::new(1), Location::new(5, 5));
        assert!(EngineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_corruption() {
        let mut game = Game::new(3, 2);
        game.board.mark(2, 2, Player::new(2));

        let violations = EngineInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, MoveCountMatchesBoard::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::new(4, 3);
        type TwoInvariants = (TurnCursorInRange, MoveCountBounded);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "engine invariant violated")]
    fn test_assert_invariants_panics_on_corruption() {
        let mut game = Game::new(3, 2);
        game.valid_move_count = 4;
        assert_invariants(&game);
    }
}

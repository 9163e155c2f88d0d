//! Turn cursor invariant: the next player is always a real player.

use super::Invariant;
use crate::Game;

/// Invariant: `1 <= whose_turn <= num_players`.
pub struct TurnCursorInRange;

impl Invariant<Game> for TurnCursorInRange {
    fn holds(game: &Game) -> bool {
        (1..=game.num_players()).contains(&game.whose_turn().id())
    }

    fn description() -> &'static str {
        "Turn cursor stays within 1..=num_players"
    }
}

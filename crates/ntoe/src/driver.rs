//! Move-sequence driver: feeds moves to a game until it ends.

use crate::translate::StatusCode;
use crate::{Game, Move, MoveResult};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// When the driver stops processing moves.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum HaltPolicy {
    /// Stop on the first win, draw or invalid move.
    #[default]
    AnyTerminal,
    /// Stop only on a win or a draw; invalid moves are reported and play goes on.
    WinOrDraw,
}

impl HaltPolicy {
    /// Whether the driver stops after a move classified as `result`.
    pub fn halts_on(self, result: MoveResult) -> bool {
        match self {
            HaltPolicy::AnyTerminal => result != MoveResult::Continue,
            HaltPolicy::WinOrDraw => result.is_game_over(),
        }
    }
}

/// Applies `moves` in order and returns one status per processed move.
///
/// The returned sequence ends with the status that made the driver halt,
/// if any; later moves are not applied.
#[instrument(skip(game, moves), fields(moves = moves.len()))]
pub fn play(game: &mut Game, moves: &[Move], policy: HaltPolicy) -> Vec<StatusCode> {
    let mut statuses = Vec::with_capacity(moves.len());
    for mov in moves {
        let result = game.apply_move(mov.player, mov.location);
        let status = game.status_code(result, mov.player);
        statuses.push(status);
        if policy.halts_on(result) {
            info!(%mov, %result, status, "Game halted");
            break;
        }
    }
    statuses
}

/// Applies `moves` with the default [`HaltPolicy::AnyTerminal`].
pub fn play_tictactoe(game: &mut Game, moves: &[Move]) -> Vec<StatusCode> {
    play(game, moves, HaltPolicy::default())
}

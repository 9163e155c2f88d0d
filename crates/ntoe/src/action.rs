//! Moves and their classification.
//!
//! A move is the player's intent: who plays and where. It is validated by
//! [`Game::apply_move`](crate::Game::apply_move) and never stored afterwards.

use super::Player;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A location on the board as submitted by a caller.
///
/// Coordinates are signed so that any externally supplied value can be
/// represented; off-board values are classified as invalid moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Location {
    /// Row index, 0-based from the top.
    pub row: i32,
    /// Column index, 0-based from the left.
    pub col: i32,
}

impl Location {
    /// Returns `(row, col)` as board indices if the location lies on a
    /// `size`×`size` board.
    pub fn on_board(self, size: usize) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok().filter(|r| *r < size)?;
        let col = usize::try_from(self.col).ok().filter(|c| *c < size)?;
        Some((row, col))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move: a player placing their mark at a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the player places their mark.
    pub location: Location,
}

impl Move {
    /// Builds a move from the raw `(player, row, col)` triple used by batch input.
    pub fn from_triple(player: i32, row: i32, col: i32) -> Self {
        Self::new(Player::new(player), Location::new(row, col))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {} -> {}", self.player, self.location)
    }
}

/// Outcome of a single [`Game::apply_move`](crate::Game::apply_move) call.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum MoveResult {
    /// The move completed a row, column or diagonal.
    #[display("win")]
    Win,
    /// Wrong player, off the board, or onto an occupied square.
    #[display("invalid")]
    Invalid,
    /// The board is full and nobody won.
    #[display("draw")]
    Draw,
    /// The move was accepted and play continues.
    #[display("continue")]
    Continue,
}

impl MoveResult {
    /// Whether the game is over after this result.
    pub fn is_game_over(self) -> bool {
        matches!(self, MoveResult::Win | MoveResult::Draw)
    }
}

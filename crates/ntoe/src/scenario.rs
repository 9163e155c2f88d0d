//! Self-contained game setups with their move lists.

use crate::{Game, Move};
use serde::{Deserialize, Serialize};

/// A board size, a player count and the moves to play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Side length of the board.
    pub board_size: usize,
    /// Number of players taking turns.
    pub num_players: i32,
    /// Moves in the order they are played.
    pub moves: Vec<Move>,
}

impl Scenario {
    /// Creates a fresh game for this scenario.
    pub fn new_game(&self) -> Game {
        Game::new(self.board_size, self.num_players)
    }

    /// Reference 5×5 game for three players.
    ///
    /// Player 3 completes the anti-diagonal on the eighteenth move.
    pub fn reference() -> Self {
        const MOVES: [(i32, i32, i32); 18] = [
            (1, 1, 0),
            (2, 3, 3),
            (3, 1, 3),
            (1, 0, 2),
            (2, 0, 0),
            (3, 2, 2),
            (1, 4, 1),
            (2, 4, 2),
            (3, 3, 1),
            (1, 1, 2),
            (2, 4, 3),
            (3, 2, 1),
            (1, 4, 4),
            (2, 1, 1),
            (3, 0, 4),
            (1, 0, 1),
            (2, 2, 3),
            (3, 4, 0),
        ];
        Self {
            board_size: 5,
            num_players: 3,
            moves: MOVES
                .iter()
                .map(|&(p, r, c)| Move::from_triple(p, r, c))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_shape() {
        let scenario = Scenario::reference();
        assert_eq!(scenario.moves.len(), 18);
        let game = scenario.new_game();
        assert_eq!(game.board_size(), 5);
        assert_eq!(game.num_players(), 3);
    }
}

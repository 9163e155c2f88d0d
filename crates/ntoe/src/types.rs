//! Core domain types for N-player tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player identifier.
///
/// Valid players are numbered `1..=num_players`. Any other value can still be
/// submitted with a move; the engine simply treats it as the wrong player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct Player(i32);

impl Player {
    /// The player who moves first.
    pub const FIRST: Player = Player(1);

    /// Creates a player from a raw id.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub const fn id(self) -> i32 {
        self.0
    }

    /// Returns the player who moves after this one in a game of `num_players`.
    ///
    /// Ids wrap cyclically: `k -> (k mod num_players) + 1`.
    pub fn successor(self, num_players: i32) -> Self {
        Self(self.0 % num_players + 1)
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square marked by a player.
    Occupied(Player),
}

impl Square {
    /// Printable value of the square: `0` when empty, otherwise the player id.
    pub fn value(self) -> i32 {
        match self {
            Square::Empty => 0,
            Square::Occupied(player) => player.id(),
        }
    }
}

/// Square N×N board, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty `size`×`size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the square at `(row, col)`, or `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.squares.get(row * self.size + col).copied()
    }

    /// Checks if the square at `(row, col)` is on the board and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Marks `(row, col)` for `player`.
    ///
    /// Callers must have checked that the square is on the board.
    pub(crate) fn mark(&mut self, row: usize, col: usize, player: Player) {
        debug_assert!(row < self.size && col < self.size);
        self.squares[row * self.size + col] = Square::Occupied(player);
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        // chunks() panics on zero; an empty board simply has no rows
        self.squares.chunks(self.size.max(1))
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares
            .iter()
            .filter(|s| matches!(s, Square::Occupied(_)))
            .count()
    }
}

/// One row per line, values space-separated, `0` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line = row
                .iter()
                .map(|s| s.value().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successor_cycles() {
        let p = Player::FIRST;
        assert_eq!(p.successor(3), Player::new(2));
        assert_eq!(Player::new(2).successor(3), Player::new(3));
        assert_eq!(Player::new(3).successor(3), Player::new(1));
    }

    #[test]
    fn test_single_player_always_succeeds_self() {
        assert_eq!(Player::FIRST.successor(1), Player::FIRST);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4);
        assert_eq!(board.squares().len(), 16);
        assert_eq!(board.occupied(), 0);
        assert!(board.is_empty(3, 3));
    }

    #[test]
    fn test_get_off_board() {
        let board = Board::new(3);
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
        assert!(!board.is_empty(5, 5));
    }

    #[test]
    fn test_mark_square() {
        let mut board = Board::new(3);
        board.mark(1, 2, Player::new(2));
        assert_eq!(board.get(1, 2), Some(Square::Occupied(Player::new(2))));
        assert_eq!(board.occupied(), 1);
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new(3);
        board.mark(0, 0, Player::new(1));
        board.mark(2, 1, Player::new(3));
        assert_eq!(board.to_string(), "1 0 0\n0 0 0\n0 3 0\n");
    }
}

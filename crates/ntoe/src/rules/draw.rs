//! Draw detection logic.

use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if `valid_move_count` accepted moves have filled a
/// `board_size`×`board_size` board.
///
/// A full board with no winner is a cat's game.
pub fn is_draw(board_size: usize, valid_move_count: usize) -> bool {
    valid_move_count == board_size * board_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(3);
        assert!(!is_full(&board));
        assert!(!is_draw(3, 0));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3);
        board.mark(1, 1, Player::new(1));
        assert!(!is_full(&board));
        assert!(!is_draw(3, 1));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2);
        for (i, (r, c)) in [(0, 0), (0, 1), (1, 0), (1, 1)].into_iter().enumerate() {
            board.mark(r, c, Player::new(i as i32 % 3 + 1));
        }
        assert!(is_full(&board));
        assert!(is_draw(2, 4));
    }
}

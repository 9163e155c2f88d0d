//! Win detection logic.

use crate::{Board, MoveResult, Player, Square};
use tracing::instrument;

/// Checks whether `player` just won by playing at `(row, col)`.
///
/// Only the lines through the played square can have been completed: its
/// row, its column, and each main diagonal it lies on. All of them are
/// scanned together in a single pass over `0..N`, giving up as soon as
/// every candidate line contains a square not held by `player`.
///
/// Returns [`MoveResult::Win`] or [`MoveResult::Continue`]. Every other
/// classification is decided before the mark is placed.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_win(board: &Board, row: usize, col: usize, player: Player) -> MoveResult {
    let n = board.size();
    let held = |r: usize, c: usize| board.get(r, c) == Some(Square::Occupied(player));

    let mut row_win = true;
    let mut col_win = true;
    let mut diag_down = row == col;
    let mut diag_up = row + col + 1 == n;

    for i in 0..n {
        row_win = row_win && held(row, i);
        col_win = col_win && held(i, col);
        diag_down = diag_down && held(i, i);
        diag_up = diag_up && held(i, n - 1 - i);

        if !(row_win || col_win || diag_down || diag_up) {
            return MoveResult::Continue;
        }
    }

    MoveResult::Win
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, marks: &[(usize, usize, i32)]) -> Board {
        let mut board = Board::new(size);
        for &(r, c, p) in marks {
            board.mark(r, c, Player::new(p));
        }
        board
    }

    #[test]
    fn test_row_win() {
        let board = board_with(3, &[(0, 0, 1), (0, 1, 1), (0, 2, 1)]);
        assert_eq!(check_win(&board, 0, 1, Player::new(1)), MoveResult::Win);
    }

    #[test]
    fn test_column_win() {
        let board = board_with(4, &[(0, 2, 2), (1, 2, 2), (2, 2, 2), (3, 2, 2)]);
        assert_eq!(check_win(&board, 3, 2, Player::new(2)), MoveResult::Win);
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = board_with(3, &[(0, 0, 1), (1, 1, 1), (2, 2, 1)]);
        assert_eq!(check_win(&board, 2, 2, Player::new(1)), MoveResult::Win);
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_with(5, &[(0, 4, 3), (1, 3, 3), (2, 2, 3), (3, 1, 3), (4, 0, 3)]);
        assert_eq!(check_win(&board, 4, 0, Player::new(3)), MoveResult::Win);
    }

    #[test]
    fn test_diagonal_ignored_off_diagonal() {
        // Main diagonal is complete but (0, 1) is not on it.
        let board = board_with(3, &[(0, 0, 1), (1, 1, 1), (2, 2, 1), (0, 1, 1)]);
        assert_eq!(check_win(&board, 0, 1, Player::new(1)), MoveResult::Continue);
    }

    #[test]
    fn test_line_held_by_other_player() {
        let board = board_with(3, &[(0, 0, 2), (0, 1, 2), (0, 2, 2)]);
        assert_eq!(check_win(&board, 0, 2, Player::new(1)), MoveResult::Continue);
    }

    #[test]
    fn test_incomplete_line() {
        let board = board_with(3, &[(0, 0, 1), (0, 1, 1)]);
        assert_eq!(check_win(&board, 0, 1, Player::new(1)), MoveResult::Continue);
    }

    #[test]
    fn test_single_square_board() {
        let board = board_with(1, &[(0, 0, 1)]);
        assert_eq!(check_win(&board, 0, 0, Player::new(1)), MoveResult::Win);
    }

    #[test]
    fn test_deterministic() {
        let board = board_with(3, &[(1, 0, 1), (1, 1, 2), (1, 2, 1)]);
        let first = check_win(&board, 1, 2, Player::new(1));
        for _ in 0..5 {
            assert_eq!(check_win(&board, 1, 2, Player::new(1)), first);
        }
    }
}

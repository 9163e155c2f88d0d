//! Game engine: board state, turn order and move classification.

use crate::invariants::assert_invariants;
use crate::rules::{check_win, is_draw};
use crate::translate::{StatusCode, cats_game, translate};
use crate::{Board, Location, MoveResult, Player};
use tracing::{debug, instrument, warn};

/// N-player tic-tac-toe on an N×N board.
///
/// The engine is the sole owner of the board. Each call to
/// [`apply_move`](Game::apply_move) is processed atomically and classified
/// as a win, an invalid move, a draw, or a continuation.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) board: Board,
    num_players: i32,
    pub(crate) whose_turn: Player,
    pub(crate) valid_move_count: usize,
}

impl Game {
    /// Creates a game on a `board_size`×`board_size` board for `num_players`
    /// players. Player 1 moves first.
    ///
    /// Arguments are not validated. A board size of zero yields a board on
    /// which every move is off the board.
    ///
    /// # Panics
    ///
    /// [`apply_move`](Game::apply_move) panics if `num_players` is zero.
    #[instrument]
    pub fn new(board_size: usize, num_players: i32) -> Self {
        debug!("Creating new game");
        Self {
            board: Board::new(board_size),
            num_players,
            whose_turn: Player::FIRST,
            valid_move_count: 0,
        }
    }

    /// Applies `player`'s move at `location` and classifies it.
    ///
    /// The turn cursor advances on every call, even when the move is then
    /// rejected. Rejected moves leave the board and the valid-move count
    /// untouched.
    #[instrument(skip(self), fields(turn = %self.whose_turn))]
    pub fn apply_move(&mut self, player: Player, location: Location) -> MoveResult {
        let wrong_player = player != self.whose_turn;
        self.whose_turn = self.whose_turn.successor(self.num_players);

        let square = location.on_board(self.board.size());
        let already_filled = square.is_some_and(|(row, col)| !self.board.is_empty(row, col));

        let result = match square {
            _ if wrong_player => {
                warn!("Wrong player attempted to move");
                MoveResult::Invalid
            }
            None => {
                warn!("Move is off the board");
                MoveResult::Invalid
            }
            Some(_) if already_filled => {
                warn!("Square is already occupied");
                MoveResult::Invalid
            }
            Some(_) if is_draw(self.board.size(), self.valid_move_count) => MoveResult::Draw,
            Some((row, col)) => {
                self.board.mark(row, col, player);
                self.valid_move_count += 1;
                match check_win(&self.board, row, col, player) {
                    MoveResult::Continue if is_draw(self.board.size(), self.valid_move_count) => {
                        MoveResult::Draw
                    }
                    other => other,
                }
            }
        };

        debug!(%result, valid_moves = self.valid_move_count, "Move classified");
        assert_invariants(self);
        result
    }

    /// Converts `result` for `player` into a status code for this game.
    pub fn status_code(&self, result: MoveResult, player: Player) -> StatusCode {
        translate(result, player, self.num_players)
    }

    /// Status code of a cat's game: one past the highest player id.
    pub fn cats_game(&self) -> StatusCode {
        cats_game(self.num_players)
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the board.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Number of players taking turns.
    pub fn num_players(&self) -> i32 {
        self.num_players
    }

    /// The player due to move next.
    pub fn whose_turn(&self) -> Player {
        self.whose_turn
    }

    /// Number of moves accepted so far.
    pub fn valid_move_count(&self) -> usize {
        self.valid_move_count
    }

    /// Maximum number of accepted moves: one per square.
    pub fn max_valid_moves(&self) -> usize {
        self.board.size() * self.board.size()
    }

    /// Renders the board, one row per line.
    pub fn render(&self) -> String {
        self.board.to_string()
    }
}

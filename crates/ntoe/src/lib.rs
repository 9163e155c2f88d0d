//! Move validation and win/draw detection for N-player tic-tac-toe.
//!
//! The board is N×N and a player wins by filling a whole row, column or
//! main diagonal. Players `1..=P` take turns cyclically.
//!
//! # Example
//!
//! ```
//! use ntoe::{Game, Move, driver};
//!
//! let mut game = Game::new(3, 2);
//! let moves = [(1, 0, 0), (2, 1, 1), (1, 0, 1), (2, 2, 2), (1, 0, 2)]
//!     .map(|(p, r, c)| Move::from_triple(p, r, c));
//!
//! assert_eq!(driver::play_tictactoe(&mut game, &moves), vec![0, 0, 0, 0, 1]);
//! ```

#![warn(missing_docs)]

mod action;
mod game;
mod scenario;
mod types;

pub mod driver;
pub mod invariants;
pub mod rules;
pub mod translate;

pub use action::{Location, Move, MoveResult};
pub use driver::HaltPolicy;
pub use game::Game;
pub use scenario::Scenario;
pub use translate::{NEXT_PLAYER, StatusCode, translate};
pub use types::{Board, Player, Square};

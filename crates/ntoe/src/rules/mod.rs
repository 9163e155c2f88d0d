//! Game rules for N-player tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They are kept apart from
//! the engine so each rule can be tested on hand-built boards.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_win;

//! Conversion from move classifications to external status codes.

use crate::{MoveResult, Player};

/// Integer game status reported to callers.
pub type StatusCode = i32;

/// Status meaning "play continues with the next player".
///
/// Never collides with a player id, since ids start at 1.
pub const NEXT_PLAYER: StatusCode = 0;

/// Status reported for a cat's game in a game of `num_players`.
///
/// One past the highest player id, so it never collides with a win.
/// `num_players` must be below `i32::MAX`.
pub const fn cats_game(num_players: i32) -> StatusCode {
    num_players + 1
}

/// Converts a move result into a game status.
///
/// | result     | status            |
/// |------------|-------------------|
/// | `Win`      | `player`          |
/// | `Draw`     | `num_players + 1` |
/// | `Invalid`  | `-player`         |
/// | `Continue` | `0`               |
///
/// Callers keep `player` above `i32::MIN` and `num_players` below
/// `i32::MAX`; the batch reader rejects both before play starts.
pub fn translate(result: MoveResult, player: Player, num_players: i32) -> StatusCode {
    match result {
        MoveResult::Win => player.id(),
        MoveResult::Draw => cats_game(num_players),
        MoveResult::Invalid => -player.id(),
        MoveResult::Continue => NEXT_PLAYER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_mapping() {
        let p = Player::new(2);
        assert_eq!(translate(MoveResult::Win, p, 3), 2);
        assert_eq!(translate(MoveResult::Draw, p, 3), 4);
        assert_eq!(translate(MoveResult::Invalid, p, 3), -2);
        assert_eq!(translate(MoveResult::Continue, p, 3), NEXT_PLAYER);
    }

    #[test]
    fn test_statuses_never_collide() {
        let num_players = 4;
        for id in 1..=num_players {
            let player = Player::new(id);
            let codes: Vec<_> = MoveResult::iter()
                .map(|r| translate(r, player, num_players))
                .collect();
            for (i, a) in codes.iter().enumerate() {
                for b in &codes[i + 1..] {
                    assert_ne!(a, b, "player {} produced duplicate status", id);
                }
            }
        }
    }

    #[test]
    fn test_cats_game_exceeds_every_player() {
        for num_players in 1..10 {
            assert!((1..=num_players).all(|p| p < cats_game(num_players)));
        }
    }
}

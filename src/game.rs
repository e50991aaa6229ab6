//! Game container: the two defending boards and end-of-game detection.

use crate::board::Board;
use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};

/// Which player's own ships a board holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Human,
    Computer,
}

/// A match in progress: exactly two boards, mutated in alternating turns by
/// a single driver thread.
pub struct Game {
    boards: [Board; 2],
}

impl Game {
    pub fn new() -> Self {
        Self {
            boards: [
                Board::new(BOARD_WIDTH, BOARD_HEIGHT),
                Board::new(BOARD_WIDTH, BOARD_HEIGHT),
            ],
        }
    }

    fn index(side: Side) -> usize {
        match side {
            Side::Human => 0,
            Side::Computer => 1,
        }
    }

    /// The board holding `side`'s own ships.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[Self::index(side)]
    }

    pub fn board_mut(&mut self, side: Side) -> &mut Board {
        &mut self.boards[Self::index(side)]
    }

    /// True as soon as either fleet is fully sunk, even mid-turn.
    pub fn ended(&self) -> bool {
        self.boards.iter().any(Board::is_game_over)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

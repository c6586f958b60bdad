//! Player intents accepted by the turn controller.

use dungeon::Point;
use error::{GameError, GameResult};
use serde::{Deserialize, Serialize};

/// One cardinal step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> Point {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Everything a front end may ask of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Move(Direction),
    /// Hit every enemy on the eight surrounding cells
    Attack,
    /// Continue after a completed level
    NextLevel,
    /// Start over from level 1
    Restart,
}

impl Intent {
    /// Decode a raw movement delta; only single cardinal steps are accepted.
    pub fn from_delta(dx: i32, dy: i32) -> GameResult<Self> {
        Direction::from_delta(dx, dy)
            .map(Intent::Move)
            .ok_or(GameError::InvalidIntent { dx, dy })
    }
}

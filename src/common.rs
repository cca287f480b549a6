//! Common types for the 2048 engine: move directions, outcomes, and game status.

use core::fmt;

/// Direction of a move request, the only valid input to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Number of counter-clockwise quarter-turns that align this direction
    /// with a leftward compress/merge pass.
    pub fn quarter_turns(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }

    /// Map a key or button name from the caller-facing boundary to a
    /// direction. Unrecognized input yields `None` and is to be ignored,
    /// never surfaced as an error.
    pub fn from_input(input: &str) -> Option<Self> {
        match input {
            "ArrowUp" | "Up" | "up" => Some(Direction::Up),
            "ArrowDown" | "Down" | "down" => Some(Direction::Down),
            "ArrowLeft" | "Left" | "left" => Some(Direction::Left),
            "ArrowRight" | "Right" | "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Result of a move request against the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome<T> {
    /// The grid changed; `gained` was added to the score.
    Moved { gained: T },
    /// The move would not change the grid (or the game is already over);
    /// state was left untouched and no tile was spawned.
    Rejected,
}

impl<T> MoveOutcome<T> {
    /// `true` when the move was rejected as a no-op.
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveOutcome::Rejected)
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Playing,
    GameOver,
}

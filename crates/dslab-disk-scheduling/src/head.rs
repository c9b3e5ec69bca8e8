//! Disk head state.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::Cylinder;
use crate::error::ParseNameError;

/// Direction of the head movement.
///
/// Honoured by SCAN and LOOK only, other policies accept it and have a fixed traversal sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards higher cylinder numbers.
    #[default]
    Up,
    /// Towards lower cylinder numbers.
    Down,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(ParseNameError::new("direction", s)),
        }
    }
}

/// Current position and movement direction of the simulated head.
///
/// Lives for the duration of a single policy call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadState {
    /// Cylinder the head is currently over.
    pub position: Cylinder,
    /// Direction the head is currently moving in.
    pub direction: Direction,
}

impl HeadState {
    /// Creates head state at given position.
    pub fn new(position: Cylinder, direction: Direction) -> Self {
        Self { position, direction }
    }

    /// Moves the head to given cylinder and returns the travelled distance.
    pub fn move_to(&mut self, cylinder: Cylinder) -> u64 {
        let distance = self.position.abs_diff(cylinder);
        self.position = cylinder;
        distance
    }

    /// Flips the movement direction.
    pub fn reverse(&mut self) {
        self.direction = self.direction.reversed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_direction() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!(" DOWN ".parse::<Direction>(), Ok(Direction::Down));
        assert!("left".parse::<Direction>().is_err());
        assert_eq!(Direction::default(), Direction::Up);
        assert_eq!(Direction::Down.to_string(), "down");
    }

    #[test]
    fn head_moves_and_reverses() {
        let mut head = HeadState::new(53, Direction::Up);
        assert_eq!(head.move_to(14), 39);
        assert_eq!(head.move_to(14), 0);
        head.reverse();
        assert_eq!(head.direction, Direction::Down);
        assert_eq!(head.position, 14);
    }
}

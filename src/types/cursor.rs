//! Editing cursor.

use std::str::FromStr;

use crate::error::{RepixError, Result};

use super::Coordinate;

/// A single cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl FromStr for Direction {
    type Err = RepixError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "u" | "up" => Ok(Self::Up),
            "d" | "down" => Ok(Self::Down),
            "l" | "left" => Ok(Self::Left),
            "r" | "right" => Ok(Self::Right),
            _ => Err(RepixError::Parse {
                message: format!("Invalid direction '{}'", s),
                help: Some("Use up, down, left or right (or u, d, l, r)".to_string()),
            }),
        }
    }
}

/// A movable cursor over the logical pixel grid.
///
/// Moving up or left stops at zero. Moving right or down is unbounded; a
/// cursor outside the rendered map is simply not drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    position: Coordinate,
}

impl Cursor {
    pub fn new(position: Coordinate) -> Self {
        Self { position }
    }

    pub fn position(self) -> Coordinate {
        self.position
    }

    pub fn move_up(&mut self) {
        self.position.y = self.position.y.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.position.y = self.position.y.saturating_add(1);
    }

    pub fn move_left(&mut self) {
        self.position.x = self.position.x.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.position.x = self.position.x.saturating_add(1);
    }

    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
        }
    }
}

impl From<Coordinate> for Cursor {
    fn from(position: Coordinate) -> Self {
        Self::new(position)
    }
}

//! Endless ground made of two tiles.
//!
//! Both tiles scroll left together; a tile that has left the screen is moved
//! to the right edge of the other one.

use serde::{Deserialize, Serialize};

/// The scrolling ground strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ground {
    /// Vertical position of both tiles.
    pub y: f32,
    /// Left edge of the first tile.
    pub x1: f32,
    /// Left edge of the second tile.
    pub x2: f32,
    /// Width of one tile.
    pub width: f32,
    /// Pixels scrolled per tick.
    pub velocity: f32,
}

impl Ground {
    /// Creates the ground with the first tile at the left screen edge.
    pub fn new(y: f32, width: f32, velocity: f32) -> Self {
        Self {
            y,
            x1: 0.0,
            x2: width,
            width,
            velocity,
        }
    }

    /// Scrolls both tiles and wraps the one that left the screen.
    pub fn advance(&mut self) {
        self.x1 -= self.velocity;
        self.x2 -= self.velocity;

        if self.x1 + self.width < 0.0 {
            self.x1 = self.x2 + self.width;
        }
        if self.x2 + self.width < 0.0 {
            self.x2 = self.x1 + self.width;
        }
    }

    /// Left edges of both tiles.
    pub fn tiles(&self) -> [f32; 2] {
        [self.x1, self.x2]
    }
}

//! Monsters scrolling from right to left.

use serde::{Deserialize, Serialize};

/// An obstacle the player has to jump over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Horizontal position of the sprite's left edge.
    pub x: f32,
    /// Vertical position of the sprite's top edge.
    pub y: f32,
    /// Set once a player has moved past this obstacle.
    pub passed: bool,
    /// Sprite width, used to decide when the obstacle has left the screen.
    pub width: f32,
}

impl Obstacle {
    /// Creates an unpassed obstacle.
    pub fn new(x: f32, y: f32, width: f32) -> Self {
        Self {
            x,
            y,
            passed: false,
            width,
        }
    }

    /// Scrolls the obstacle left by `velocity` pixels.
    pub fn advance(&mut self, velocity: f32) {
        self.x -= velocity;
    }

    /// Marks the obstacle as passed if a player at `player_x` is past it.
    ///
    /// # Returns
    ///
    /// `true` only on the call that flips the flag.
    pub fn check_passed(&mut self, player_x: f32) -> bool {
        if !self.passed && self.x < player_x {
            self.passed = true;
            return true;
        }
        false
    }

    /// Checks if the obstacle has scrolled fully past the left edge.
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }

    /// Right edge of the sprite.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

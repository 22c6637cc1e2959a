//! The jumping turtle.
//!
//! A player only ever moves vertically. Jumps follow a quadratic arc driven by
//! a counter that runs from `+jump_count` down to `-jump_count`; the sign
//! change of the squared term turns the rise into a fall.

use serde::{Deserialize, Serialize};

use super::params::GameParams;

/// A player entity controlled by a human or by an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Horizontal position (constant for the lifetime of the player).
    pub x: f32,
    /// Vertical position of the sprite's top edge.
    pub y: f32,
    /// Initial vertical velocity used by the gravity formula.
    pub vel: f32,
    /// Ticks since the last jump or ground contact.
    pub tick_count: u32,
    /// Remaining jump progress. Decreases during a jump.
    pub jump_count: f32,
    /// Whether a jump is in progress.
    pub is_jump: bool,
    jump_start: f32,
    jump_step: f32,
    gravity: f32,
    ground_threshold: f32,
}

impl Player {
    /// Creates a grounded, idle player at the given position.
    ///
    /// # Arguments
    ///
    /// * `x` - Horizontal position
    /// * `y` - Vertical position
    /// * `params` - Game constants providing the jump and gravity settings
    pub fn new(x: f32, y: f32, params: &GameParams) -> Self {
        Self {
            x,
            y,
            vel: 0.0,
            tick_count: 0,
            jump_count: params.jump_count,
            is_jump: false,
            jump_start: params.jump_count,
            jump_step: params.jump_step,
            gravity: params.gravity,
            ground_threshold: params.ground_threshold,
        }
    }

    /// Creates a player at the start position of `params`.
    pub fn at_start(params: &GameParams) -> Self {
        Self::new(params.player_x, params.player_y, params)
    }

    /// Requests a jump. Has no effect on the arc of a jump already running.
    pub fn trigger_jump(&mut self) {
        if !self.is_jump {
            self.tick_count = 0;
        }
        self.is_jump = true;
    }

    /// Advances the jump arc by one step.
    ///
    /// While jumping, `y` is displaced by `-(c * |c|) / 2` for the current
    /// counter `c`, after which the counter drops by one step. Once the
    /// counter has fallen below `-jump_count` the next call ends the jump and
    /// restores the counter.
    pub fn jump(&mut self) {
        if !self.is_jump {
            return;
        }

        if self.jump_count >= -self.jump_start {
            self.y -= (self.jump_count * self.jump_count.abs()) * 0.5;
            self.jump_count -= self.jump_step;
        } else {
            self.jump_count = self.jump_start;
            self.is_jump = false;
        }
    }

    /// Applies gravity for one tick.
    ///
    /// The displacement `vel * t + gravity * t²` only applies while the
    /// player is not jumping and is at or above the ground threshold, and it
    /// never carries the player below that threshold. Grounded players
    /// restart the tick counter.
    pub fn move_vertical(&mut self) {
        self.tick_count += 1;

        if self.is_jump || self.y > self.ground_threshold {
            return;
        }

        let t = self.tick_count as f32;
        let d = self.vel * t + self.gravity * t * t;

        self.y = (self.y + d).min(self.ground_threshold);

        if self.is_grounded() {
            self.tick_count = 0;
        }
    }

    /// Checks whether the player stands on the ground threshold.
    pub fn is_grounded(&self) -> bool {
        self.y >= self.ground_threshold
    }
}

use serde::{Deserialize, Serialize};

/// Game constants shared by the manual and the agent mode.
///
/// All positions are in screen pixels with the origin at the top left corner,
/// so a smaller `y` is higher up on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameParams {
    /// Window width.
    pub window_width: f32,
    /// Window height.
    pub window_height: f32,
    /// Horizontal position of every player.
    pub player_x: f32,
    /// Vertical start position of every player.
    pub player_y: f32,
    /// Players at or above this height are subject to gravity.
    pub ground_threshold: f32,
    /// Vertical position of the ground strip.
    pub ground_y: f32,
    /// Pixels the ground scrolls per tick.
    pub ground_velocity: f32,
    /// Pixels an obstacle scrolls per tick.
    pub obstacle_velocity: f32,
    /// Vertical position of every obstacle.
    pub obstacle_y: f32,
    /// Horizontal position of the obstacle present at session start.
    pub first_obstacle_x: f32,
    /// Inclusive lower bound for the x of a spawned obstacle.
    pub spawn_x_min: i32,
    /// Exclusive upper bound for the x of a spawned obstacle.
    pub spawn_x_max: i32,
    /// Jump counter value at the start of a jump.
    pub jump_count: f32,
    /// Amount the jump counter decreases per jump step.
    pub jump_step: f32,
    /// Quadratic coefficient of the gravity displacement.
    pub gravity: f32,
    /// Target ticks per second.
    pub tick_rate: u32,
    /// Font size of the score text.
    pub score_font_size: f32,
    /// Distance of the score text from the top right corner.
    pub score_margin: f32,
    /// RGB colour of the score text.
    pub score_color: [u8; 3],
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            window_width: 1000.0,
            window_height: 800.0,
            player_x: 230.0,
            player_y: 630.0,
            ground_threshold: 630.0,
            ground_y: 730.0,
            ground_velocity: 10.0,
            obstacle_velocity: 10.0,
            obstacle_y: 630.0,
            first_obstacle_x: 800.0,
            spawn_x_min: 550,
            spawn_x_max: 1000,
            jump_count: 10.0,
            jump_step: 0.5,
            gravity: 1.5,
            tick_rate: 60,
            score_font_size: 50.0,
            score_margin: 10.0,
            score_color: [128, 128, 128],
        }
    }
}

/// Fitness adjustments applied to agents during an episode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rewards {
    /// Added to every live agent for each tick it survives.
    pub survival: f32,
    /// Added to every live agent whenever an obstacle is passed.
    pub pass: f32,
    /// Subtracted from an agent when it collides.
    pub collision_penalty: f32,
    /// Decision outputs above this value trigger a jump.
    pub jump_threshold: f32,
}

impl Default for Rewards {
    fn default() -> Self {
        Self {
            survival: 0.1,
            pass: 5.0,
            collision_penalty: 1.0,
            jump_threshold: 0.5,
        }
    }
}

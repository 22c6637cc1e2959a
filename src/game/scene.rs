//! Back-to-front render orchestration.
//!
//! The game core never talks to a graphics library. It describes a frame as a
//! [`Scene`] and issues draw calls through the [`Canvas`] trait in a fixed
//! order: background, obstacles, score, ground, players.

use super::ground::Ground;
use super::obstacle::Obstacle;
use super::params::GameParams;
use super::player::Player;

/// The sprites a canvas knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    /// Full-window background image.
    Background,
    /// An obstacle.
    Obstacle,
    /// One ground tile.
    Ground,
    /// A player.
    Player,
}

/// Drawing surface provided by the frontend.
pub trait Canvas {
    /// Draws a sprite with its top left corner at (`x`, `y`).
    fn draw_sprite(&mut self, sprite: SpriteKind, x: f32, y: f32);

    /// Width of `text` rendered at `font_size`.
    fn text_width(&self, text: &str, font_size: f32) -> f32;

    /// Draws `text` with its top left corner at (`x`, `y`).
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: [u8; 3]);
}

/// Everything visible in one frame.
#[derive(Debug)]
pub struct Scene<'a> {
    /// Game constants for layout.
    pub params: &'a GameParams,
    /// Active obstacles.
    pub obstacles: &'a [Obstacle],
    /// The ground strip.
    pub ground: &'a Ground,
    /// Live players.
    pub players: Vec<&'a Player>,
    /// Current score.
    pub score: u32,
}

/// Text shown in the top right corner.
pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

/// Draws `scene` onto `canvas`, players last so they end up on top.
pub fn render(scene: &Scene<'_>, canvas: &mut impl Canvas) {
    canvas.draw_sprite(SpriteKind::Background, 0.0, 0.0);

    for obstacle in scene.obstacles {
        canvas.draw_sprite(SpriteKind::Obstacle, obstacle.x, obstacle.y);
    }

    let text = score_text(scene.score);
    let font_size = scene.params.score_font_size;
    let margin = scene.params.score_margin;
    let x = scene.params.window_width - margin - canvas.text_width(&text, font_size);
    canvas.draw_text(&text, x, margin, font_size, scene.params.score_color);

    for x in scene.ground.tiles() {
        canvas.draw_sprite(SpriteKind::Ground, x, scene.ground.y);
    }

    for player in &scene.players {
        canvas.draw_sprite(SpriteKind::Player, player.x, player.y);
    }
}

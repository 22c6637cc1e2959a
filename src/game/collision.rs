use super::obstacle::Obstacle;
use super::player::Player;
use super::silhouette::Silhouette;

/// Silhouettes and tile sizes the game core needs from the sprite assets.
#[derive(Debug, Clone)]
pub struct SpriteSet {
    /// Opacity mask of the player sprite.
    pub player: Silhouette,
    /// Opacity mask of the obstacle sprite.
    pub obstacle: Silhouette,
    /// Width of one ground tile.
    pub ground_width: f32,
}

impl SpriteSet {
    /// Width of the obstacle sprite.
    pub fn obstacle_width(&self) -> f32 {
        self.obstacle.width() as f32
    }
}

/// Tests whether `player` touches `obstacle`.
///
/// The obstacle silhouette is placed relative to the player at
/// `(obstacle.x - player.x, obstacle.y - round(player.y))`.
pub fn collide(obstacle: &Obstacle, player: &Player, sprites: &SpriteSet) -> bool {
    let offset = (
        (obstacle.x - player.x).round() as i64,
        (obstacle.y - player.y.round()).round() as i64,
    );

    sprites.player.overlaps(&sprites.obstacle, offset)
}

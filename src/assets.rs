//! Sprite bundle loaded once at startup.
//!
//! All images are decoded with the `image` crate and scaled up 2x with
//! nearest-neighbour filtering. The bundle is immutable afterwards and is
//! passed explicitly to the world and the frontend.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::game::collision::SpriteSet;
use crate::game::silhouette::Silhouette;

/// Default directory holding the sprite files.
pub const ASSET_DIR: &str = "imgs";
/// File name of the player sprite.
pub const PLAYER_FILE: &str = "cute_turtle.png";
/// File name of the obstacle sprite.
pub const OBSTACLE_FILE: &str = "monster_cup.png";
/// File name of the ground tile.
pub const GROUND_FILE: &str = "new_ground.png";
/// File name of the background image.
pub const BACKGROUND_FILE: &str = "bgbg.jpg";

/// Upscaling factor applied to every sprite.
pub const SCALE: u32 = 2;

/// A decoded, upscaled sprite.
#[derive(Debug, Clone)]
pub struct Sprite {
    /// RGBA pixels.
    pub image: RgbaImage,
}

impl Sprite {
    /// Wraps an already scaled image.
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Decodes the image at `path` and scales it up by [`SCALE`].
    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("failed to load sprite {}", path.display()))?
            .to_rgba8();
        Ok(Self::new(scale_up(&image, SCALE)))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Opacity mask of the sprite.
    pub fn silhouette(&self) -> Silhouette {
        Silhouette::from_image(&self.image)
    }
}

/// The four sprites of the game.
#[derive(Debug, Clone)]
pub struct AssetBundle {
    /// The turtle.
    pub player: Sprite,
    /// The monster.
    pub obstacle: Sprite,
    /// One ground tile.
    pub ground: Sprite,
    /// Full-window background.
    pub background: Sprite,
}

impl AssetBundle {
    /// Loads all sprites from `dir`. Any missing or broken file is an error.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = |file: &str| -> PathBuf { dir.join(file) };

        Ok(Self {
            player: Sprite::load(&path(PLAYER_FILE))?,
            obstacle: Sprite::load(&path(OBSTACLE_FILE))?,
            ground: Sprite::load(&path(GROUND_FILE))?,
            background: Sprite::load(&path(BACKGROUND_FILE))?,
        })
    }

    /// Silhouettes and tile sizes for the game core.
    pub fn sprite_set(&self) -> SpriteSet {
        SpriteSet {
            player: self.player.silhouette(),
            obstacle: self.obstacle.silhouette(),
            ground_width: self.ground.width() as f32,
        }
    }
}

/// Scales `image` up by an integer `factor`, repeating pixels.
pub fn scale_up(image: &RgbaImage, factor: u32) -> RgbaImage {
    imageops::resize(
        image,
        image.width() * factor,
        image.height() * factor,
        FilterType::Nearest,
    )
}

//! Per-pixel opacity masks.
//!
//! A silhouette marks which pixels of a sprite are solid. Two silhouettes
//! collide when any solid pixel of one lands on a solid pixel of the other.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Pixels with an alpha above this value count as solid.
pub const ALPHA_THRESHOLD: u8 = 127;

/// Opacity mask of a sprite, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Silhouette {
    width: u32,
    height: u32,
    solid: Vec<bool>,
}

impl Silhouette {
    /// Creates a silhouette where every pixel is solid.
    pub fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            solid: vec![true; (width * height) as usize],
        }
    }

    /// Creates a silhouette from a row-major opacity vector.
    ///
    /// Returns `None` if the vector length does not match the dimensions.
    pub fn from_bits(width: u32, height: u32, solid: Vec<bool>) -> Option<Self> {
        (solid.len() == (width * height) as usize).then_some(Self {
            width,
            height,
            solid,
        })
    }

    /// Builds the silhouette of an RGBA image from its alpha channel.
    pub fn from_image(image: &RgbaImage) -> Self {
        let solid = image
            .pixels()
            .map(|pixel| pixel.0[3] > ALPHA_THRESHOLD)
            .collect();

        Self {
            width: image.width(),
            height: image.height(),
            solid,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Checks whether the pixel at (`x`, `y`) is solid. Out of range is never solid.
    pub fn is_solid(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return false;
        }
        self.solid[(y as usize) * self.width as usize + x as usize]
    }

    /// Number of solid pixels.
    pub fn count(&self) -> usize {
        self.solid.iter().filter(|&&s| s).count()
    }

    /// Tests whether `other`, placed at `offset` relative to this silhouette's
    /// top left corner, shares at least one solid pixel with it.
    ///
    /// # Arguments
    ///
    /// * `other` - The silhouette to test against
    /// * `offset` - Position of `other`'s top left corner in this silhouette's coordinates
    pub fn overlaps(&self, other: &Silhouette, offset: (i64, i64)) -> bool {
        let (dx, dy) = offset;

        let x_start = dx.max(0);
        let y_start = dy.max(0);
        let x_end = i64::from(self.width).min(dx + i64::from(other.width));
        let y_end = i64::from(self.height).min(dy + i64::from(other.height));

        if x_start >= x_end || y_start >= y_end {
            return false;
        }

        (y_start..y_end).any(|y| {
            (x_start..x_end).any(|x| self.is_solid(x, y) && other.is_solid(x - dx, y - dy))
        })
    }
}

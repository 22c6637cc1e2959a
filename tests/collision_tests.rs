#![allow(missing_docs)]

use image::{Rgba, RgbaImage};
use skippy::game::collision::{self, SpriteSet};
use skippy::game::obstacle::Obstacle;
use skippy::game::params::GameParams;
use skippy::game::player::Player;
use skippy::game::silhouette::Silhouette;

fn create_test_sprites() -> SpriteSet {
    SpriteSet {
        player: Silhouette::filled(40, 40),
        obstacle: Silhouette::filled(30, 40),
        ground_width: 672.0,
    }
}

/// A 4x4 silhouette where only the top left and bottom right pixels are solid.
fn create_corner_silhouette() -> Silhouette {
    let mut bits = vec![false; 16];
    bits[0] = true;
    bits[15] = true;
    Silhouette::from_bits(4, 4, bits).unwrap()
}

#[test]
fn test_filled_silhouettes_overlap() {
    let a = Silhouette::filled(10, 10);
    let b = Silhouette::filled(5, 5);

    assert!(a.overlaps(&b, (0, 0)));
    assert!(a.overlaps(&b, (9, 9)));
    assert!(a.overlaps(&b, (-4, -4)));
}

#[test]
fn test_touching_edges_do_not_overlap() {
    let a = Silhouette::filled(10, 10);
    let b = Silhouette::filled(5, 5);

    assert!(!a.overlaps(&b, (10, 0)));
    assert!(!a.overlaps(&b, (0, 10)));
    assert!(!a.overlaps(&b, (-5, 0)));
    assert!(!a.overlaps(&b, (0, -5)));
}

#[test]
fn test_overlap_is_pixel_accurate() {
    let corners = create_corner_silhouette();
    let dot = Silhouette::filled(1, 1);

    // the bounding boxes overlap everywhere in 0..4, the pixels only at two corners
    let hits: Vec<(i64, i64)> = (0..4)
        .flat_map(|y| (0..4).map(move |x| (x, y)))
        .filter(|&offset| corners.overlaps(&dot, offset))
        .collect();

    assert_eq!(hits, vec![(0, 0), (3, 3)]);
}

#[test]
fn test_overlap_is_symmetric() {
    let corners = create_corner_silhouette();
    let block = Silhouette::filled(2, 2);

    for dy in -4..6 {
        for dx in -4..6 {
            assert_eq!(
                corners.overlaps(&block, (dx, dy)),
                block.overlaps(&corners, (-dx, -dy)),
                "offset ({dx}, {dy})"
            );
        }
    }
}

#[test]
fn test_from_bits_rejects_wrong_length() {
    assert!(Silhouette::from_bits(3, 3, vec![true; 8]).is_none());
    assert!(Silhouette::from_bits(3, 3, vec![true; 9]).is_some());
}

#[test]
fn test_out_of_range_pixels_are_not_solid() {
    let s = Silhouette::filled(3, 3);

    assert!(s.is_solid(0, 0));
    assert!(s.is_solid(2, 2));
    assert!(!s.is_solid(-1, 0));
    assert!(!s.is_solid(3, 0));
    assert!(!s.is_solid(0, 3));
}

#[test]
fn test_silhouette_from_alpha_threshold() {
    let mut image = RgbaImage::new(3, 1);
    image.put_pixel(0, 0, Rgba([255, 0, 0, 127]));
    image.put_pixel(1, 0, Rgba([255, 0, 0, 128]));
    image.put_pixel(2, 0, Rgba([0, 0, 0, 0]));

    let s = Silhouette::from_image(&image);

    assert_eq!(s.width(), 3);
    assert_eq!(s.height(), 1);
    assert!(!s.is_solid(0, 0));
    assert!(s.is_solid(1, 0));
    assert!(!s.is_solid(2, 0));
    assert_eq!(s.count(), 1);
}

#[test]
fn test_grounded_player_hits_obstacle_in_front() {
    let params = GameParams::default();
    let sprites = create_test_sprites();
    let player = Player::at_start(&params);

    assert!(collision::collide(
        &Obstacle::new(260.0, 630.0, 30.0),
        &player,
        &sprites
    ));
    assert!(collision::collide(
        &Obstacle::new(201.0, 630.0, 30.0),
        &player,
        &sprites
    ));
    assert!(!collision::collide(
        &Obstacle::new(270.0, 630.0, 30.0),
        &player,
        &sprites
    ));
    assert!(!collision::collide(
        &Obstacle::new(200.0, 630.0, 30.0),
        &player,
        &sprites
    ));
}

#[test]
fn test_player_above_obstacle_does_not_collide() {
    let params = GameParams::default();
    let sprites = create_test_sprites();
    let obstacle = Obstacle::new(230.0, 630.0, 30.0);

    let mut player = Player::new(params.player_x, 590.0, &params);
    assert!(!collision::collide(&obstacle, &player, &sprites));

    player.y = 591.0;
    assert!(collision::collide(&obstacle, &player, &sprites));
}

#[test]
fn test_collide_rounds_positions() {
    let params = GameParams::default();
    let sprites = create_test_sprites();
    let obstacle = Obstacle::new(230.0, 630.0, 30.0);

    // 589.6 rounds up to 590, which is exactly one sprite height above
    let player = Player::new(params.player_x, 589.6, &params);
    assert!(!collision::collide(&obstacle, &player, &sprites));

    // 269.6 - 230 rounds to 40, just past the player's right edge
    let player = Player::at_start(&params);
    assert!(!collision::collide(
        &Obstacle::new(269.6, 630.0, 30.0),
        &player,
        &sprites
    ));
    assert!(collision::collide(
        &Obstacle::new(269.4, 630.0, 30.0),
        &player,
        &sprites
    ));
}

#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use skippy::game::collision::SpriteSet;
use skippy::game::events::TickEvent;
use skippy::game::ground::Ground;
use skippy::game::obstacle::Obstacle;
use skippy::game::params::GameParams;
use skippy::game::player::Player;
use skippy::game::silhouette::Silhouette;
use skippy::game::world::World;

const GROUND_WIDTH: f32 = 672.0;

fn create_test_sprites() -> SpriteSet {
    SpriteSet {
        player: Silhouette::filled(40, 40),
        obstacle: Silhouette::filled(30, 40),
        ground_width: GROUND_WIDTH,
    }
}

fn create_test_world() -> World {
    World::with_seed(GameParams::default(), create_test_sprites(), 7)
}

/// A player high above the obstacles so collisions never interfere.
fn create_flying_player(params: &GameParams) -> Player {
    Player::new(params.player_x, 0.0, params)
}

#[test]
fn test_world_creation() {
    let world = create_test_world();

    assert_eq!(world.obstacles.len(), 1);
    assert_eq!(world.obstacles[0].x, 800.0);
    assert_eq!(world.obstacles[0].y, 630.0);
    assert_eq!(world.obstacles[0].width, 30.0);
    assert!(!world.obstacles[0].passed);
    assert_eq!(world.score, 0);
    assert_eq!(world.ground.x1, 0.0);
    assert_eq!(world.ground.x2, GROUND_WIDTH);
}

#[test]
fn test_first_obstacle_is_passed_on_tick_57() {
    let mut world = create_test_world();
    let player = create_flying_player(&world.params);

    // ticks 0..=56 leave the obstacle at or right of the player
    for _ in 0..57 {
        let report = world.step_obstacles(&[&player]);
        world.finish_tick();
        assert!(!report.any_passed());
    }
    assert_eq!(world.obstacles[0].x, 230.0);
    assert_eq!(world.score, 0);

    // tick 57 moves it to 220, strictly behind the player
    let report = world.step_obstacles(&[&player]);
    world.finish_tick();

    assert!(report.any_passed());
    assert_eq!(world.score, 1);
    assert_eq!(world.obstacles.len(), 2);
    assert!(world.obstacles[0].passed);

    let spawned = &world.obstacles[1];
    assert!((550.0..1000.0).contains(&spawned.x));
    assert_eq!(spawned.y, 630.0);
    assert!(
        report
            .events()
            .contains(&TickEvent::ObstacleSpawned { x: spawned.x })
    );
}

#[test]
fn test_pass_scores_once_for_many_players() {
    let mut world = create_test_world();
    let players: Vec<Player> = (0..5).map(|_| create_flying_player(&world.params)).collect();
    let player_refs: Vec<&Player> = players.iter().collect();

    for _ in 0..58 {
        world.step_obstacles(&player_refs);
        world.finish_tick();
    }

    assert_eq!(world.score, 1);
    assert_eq!(world.obstacles.len(), 2);
}

#[test]
fn test_two_obstacles_passed_in_one_tick_spawn_once() {
    let mut world = create_test_world();
    let width = world.sprites.obstacle_width();
    world.obstacles = vec![
        Obstacle::new(235.0, 630.0, width),
        Obstacle::new(238.0, 630.0, width),
    ];
    let player = create_flying_player(&world.params);

    let report = world.step_obstacles(&[&player]);

    let passes = report
        .events()
        .iter()
        .filter(|e| matches!(e, TickEvent::ObstaclePassed { .. }))
        .count();
    assert_eq!(passes, 2);
    assert_eq!(world.score, 1);
    assert_eq!(world.obstacles.len(), 3);
}

#[test]
fn test_passed_obstacle_does_not_score_again() {
    let mut world = create_test_world();
    let player = create_flying_player(&world.params);

    for _ in 0..70 {
        world.step_obstacles(&[&player]);
        world.finish_tick();
    }

    // the replacement spawns at x >= 550 and cannot be passed within 12 ticks
    assert_eq!(world.score, 1);
}

#[test]
fn test_off_screen_obstacle_is_retired() {
    let mut world = create_test_world();
    let width = world.sprites.obstacle_width();
    let mut gone = Obstacle::new(-25.0, 630.0, width);
    gone.passed = true;
    world.obstacles = vec![gone, Obstacle::new(600.0, 630.0, width)];
    let player = create_flying_player(&world.params);

    let report = world.step_obstacles(&[&player]);

    assert_eq!(world.obstacles.len(), 1);
    assert_eq!(world.obstacles[0].x, 590.0);
    assert!(
        report
            .events()
            .contains(&TickEvent::ObstacleRetired { x: -35.0 })
    );
}

#[test]
fn test_no_off_screen_obstacle_survives_a_tick() {
    let mut world = create_test_world();
    let player = create_flying_player(&world.params);
    let mut retired = 0;

    for _ in 0..2000 {
        let report = world.step_obstacles(&[&player]);
        world.finish_tick();

        retired += report
            .events()
            .iter()
            .filter(|e| matches!(e, TickEvent::ObstacleRetired { .. }))
            .count();

        assert!(world.obstacles.iter().all(|o| !o.is_off_screen()));
        assert!(!world.obstacles.is_empty());
    }

    // every obstacle ever created is either retired or still active
    assert_eq!(retired + world.obstacles.len(), world.score as usize + 1);
}

#[test]
fn test_collisions_are_reported_per_player() {
    let mut world = create_test_world();
    let width = world.sprites.obstacle_width();
    world.obstacles = vec![Obstacle::new(250.0, 630.0, width)];
    let grounded = Player::at_start(&world.params);
    let flying = create_flying_player(&world.params);

    let report = world.step_obstacles(&[&flying, &grounded, &grounded]);

    assert_eq!(report.collided_players(), vec![1, 2]);
}

#[test]
fn test_same_seed_spawns_same_obstacles() {
    let mut world_a = create_test_world();
    let mut world_b = create_test_world();
    let player = create_flying_player(&world_a.params);

    for _ in 0..500 {
        world_a.step_obstacles(&[&player]);
        world_b.step_obstacles(&[&player]);
    }

    assert_eq!(world_a.obstacles, world_b.obstacles);
    assert_eq!(world_a.score, world_b.score);
}

#[test]
fn test_relevant_obstacle() {
    let mut world = create_test_world();
    let width = world.sprites.obstacle_width();

    assert_eq!(world.relevant_obstacle(230.0), Some(0));

    world.obstacles = vec![
        Obstacle::new(195.0, 630.0, width),
        Obstacle::new(700.0, 630.0, width),
    ];
    // right edge of the first obstacle is at 225
    assert_eq!(world.relevant_obstacle(230.0), Some(1));
    assert_eq!(world.relevant_obstacle(225.0), Some(0));

    world.obstacles.truncate(1);
    assert_eq!(world.relevant_obstacle(230.0), Some(0));

    world.obstacles.clear();
    assert_eq!(world.relevant_obstacle(230.0), None);
}

#[test]
fn test_ground_tiles_stay_one_width_apart() {
    let mut ground = Ground::new(730.0, GROUND_WIDTH, 10.0);

    for _ in 0..10_000 {
        ground.advance();

        assert_eq!((ground.x1 - ground.x2).abs(), GROUND_WIDTH);
        assert!(ground.x1.min(ground.x2) <= 0.0);
        assert!(ground.x1.min(ground.x2) + GROUND_WIDTH >= 0.0);
    }
}

#[test]
fn test_ground_wraps_first_tile_behind_second() {
    let mut ground = Ground::new(730.0, GROUND_WIDTH, 10.0);

    // after 68 ticks the first tile sits at -680 and must wrap
    for _ in 0..68 {
        ground.advance();
    }

    assert_eq!(ground.x2, GROUND_WIDTH - 680.0);
    assert_eq!(ground.x1, ground.x2 + GROUND_WIDTH);
}

#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use std::cell::RefCell;

use skippy::evolution::decision::Observation;
use skippy::game::agents::{AgentEpisode, AgentId};
use skippy::game::collision::SpriteSet;
use skippy::game::params::{GameParams, Rewards};
use skippy::game::session::{SessionStatus, Termination};
use skippy::game::silhouette::Silhouette;
use skippy::game::world::World;

type Policy = fn(&Observation) -> f32;

fn never_jump(_: &Observation) -> f32 {
    0.0
}

fn always_jump(_: &Observation) -> f32 {
    1.0
}

fn create_test_world(first_obstacle_x: f32) -> World {
    let params = GameParams {
        first_obstacle_x,
        ..GameParams::default()
    };
    let sprites = SpriteSet {
        player: Silhouette::filled(40, 40),
        obstacle: Silhouette::filled(30, 40),
        ground_width: 672.0,
    };
    World::with_seed(params, sprites, 11)
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_episode_creates_one_agent_per_network() {
    let networks: [Policy; 3] = [never_jump, always_jump, never_jump];
    let episode = AgentEpisode::new(create_test_world(800.0), &networks, Rewards::default());

    let ids: Vec<AgentId> = episode.agents().iter().map(|a| a.id).collect();

    assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2)]);
    assert!(episode.agents().iter().all(|a| a.fitness == 0.0));
    assert_eq!(episode.status(), SessionStatus::Running);
}

#[test]
fn test_idle_agent_dies_and_jumper_survives() {
    let networks: [Policy; 2] = [never_jump, always_jump];
    let mut episode = AgentEpisode::new(create_test_world(365.0), &networks, Rewards::default());

    for _ in 0..9 {
        assert_eq!(episode.tick(false), SessionStatus::Running);
        assert_eq!(episode.agents().len(), 2);
    }

    // the obstacle reaches x = 265 and hits the grounded agent
    assert_eq!(episode.tick(false), SessionStatus::Running);

    let agents = episode.agents();
    assert_eq!(agents.len(), 1);
    assert_eq!(agents[0].id, AgentId(1));
    assert_close(agents[0].fitness, 1.0);

    let fitness = episode.into_fitness();
    assert_close(fitness[0], 0.0);
    assert_close(fitness[1], 1.0);
}

#[test]
fn test_pass_rewards_survivors() {
    let networks: [Policy; 2] = [never_jump, always_jump];
    let mut episode = AgentEpisode::new(create_test_world(365.0), &networks, Rewards::default());

    for _ in 0..13 {
        episode.tick(false);
    }
    assert_eq!(episode.world.score, 0);

    // the obstacle moves to x = 225, behind the player
    episode.tick(false);

    assert_eq!(episode.world.score, 1);
    assert_close(episode.agents()[0].fitness, 6.4);
}

#[test]
fn test_population_goes_extinct() {
    let networks: [Policy; 3] = [never_jump, never_jump, never_jump];
    let mut episode = AgentEpisode::new(create_test_world(800.0), &networks, Rewards::default());

    let mut ticks = 0;
    while episode.tick(false) == SessionStatus::Running {
        ticks += 1;
    }

    assert_eq!(ticks, 53);
    assert_eq!(
        episode.status(),
        SessionStatus::Terminated(Termination::Extinct)
    );
    assert!(episode.agents().is_empty());

    // 54 survived ticks minus the collision penalty
    for value in episode.into_fitness() {
        assert_close(value, 4.4);
    }
}

#[test]
fn test_quit_stops_episode_and_keeps_fitness() {
    let networks: [Policy; 2] = [never_jump, always_jump];
    let mut episode = AgentEpisode::new(create_test_world(800.0), &networks, Rewards::default());

    for _ in 0..5 {
        episode.tick(false);
    }
    let status = episode.tick(true);

    assert_eq!(status, SessionStatus::Terminated(Termination::Quit));
    assert_eq!(episode.agents().len(), 2);

    // a terminated episode does not advance
    episode.tick(false);
    assert_eq!(episode.world.ticks, 5);

    let fitness = episode.into_fitness();
    assert_close(fitness[0], 0.5);
    assert_close(fitness[1], 0.5);
}

#[test]
fn test_empty_population_is_extinct() {
    let networks: [Policy; 0] = [];
    let mut episode = AgentEpisode::new(create_test_world(800.0), &networks, Rewards::default());

    assert_eq!(
        episode.tick(false),
        SessionStatus::Terminated(Termination::Extinct)
    );
    assert!(episode.into_fitness().is_empty());
}

#[test]
fn test_observation_measures_distance_to_obstacle() {
    let seen = RefCell::new(Vec::new());
    let recorder = |observation: &Observation| {
        seen.borrow_mut().push(*observation);
        0.0_f32
    };
    let networks = [recorder];
    let mut episode = AgentEpisode::new(create_test_world(800.0), &networks, Rewards::default());

    episode.tick(false);
    episode.tick(false);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].x, 230.0);
    assert_eq!(seen[0].distance, 570.0);
    assert_eq!(seen[1].distance, 560.0);
}

#[test]
fn test_observation_without_obstacles_uses_window_width() {
    let networks: [Policy; 1] = [never_jump];
    let mut world = create_test_world(800.0);
    world.obstacles.clear();
    let episode = AgentEpisode::new(world, &networks, Rewards::default());

    let observation = episode.observe(&episode.agents()[0].player);

    assert_eq!(observation.distance, 1000.0);
}

#[test]
fn test_fitness_stays_with_its_network() {
    // agents alternate so removals happen in the middle of the collection
    let networks: [Policy; 6] = [
        always_jump,
        never_jump,
        always_jump,
        never_jump,
        always_jump,
        never_jump,
    ];
    let mut episode = AgentEpisode::new(create_test_world(365.0), &networks, Rewards::default());

    for _ in 0..10 {
        episode.tick(false);
    }

    let ids: Vec<AgentId> = episode.agents().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![AgentId(0), AgentId(2), AgentId(4)]);

    let fitness = episode.into_fitness();
    for (i, value) in fitness.iter().enumerate() {
        let expected = if i % 2 == 0 { 1.0 } else { 0.0 };
        assert_close(*value, expected);
    }
}

#[test]
fn test_scene_shows_live_agents() {
    let networks: [Policy; 2] = [never_jump, always_jump];
    let mut episode = AgentEpisode::new(create_test_world(365.0), &networks, Rewards::default());

    for _ in 0..10 {
        episode.tick(false);
    }

    let scene = episode.scene();
    assert_eq!(scene.players.len(), 1);
    assert!(scene.players[0].y < 630.0);
}

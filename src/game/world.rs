//! Obstacles, ground and score of a running session.
//!
//! The world owns everything that scrolls. Players are owned by the session
//! driving the world and are handed in each tick, so the same rules serve a
//! single human player and a whole population of agents.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::collision::{self, SpriteSet};
use super::events::{TickEvent, TickReport};
use super::ground::Ground;
use super::obstacle::Obstacle;
use super::params::GameParams;
use super::player::Player;

/// Scrolling state shared by all players of a session.
#[derive(Debug, Clone)]
pub struct World {
    /// Game constants.
    pub params: GameParams,
    /// Silhouettes and tile sizes.
    pub sprites: SpriteSet,
    /// Active obstacles, oldest first.
    pub obstacles: Vec<Obstacle>,
    /// The scrolling ground.
    pub ground: Ground,
    /// Number of obstacles passed so far.
    pub score: u32,
    /// Ticks processed so far.
    pub ticks: u64,
    rng: StdRng,
}

impl World {
    /// Creates a world with one obstacle at its start position.
    ///
    /// # Arguments
    ///
    /// * `params` - Game constants
    /// * `sprites` - Silhouettes and tile sizes of the loaded assets
    /// * `rng` - Source for spawn positions
    pub fn new(params: GameParams, sprites: SpriteSet, rng: StdRng) -> Self {
        let obstacles = vec![Obstacle::new(
            params.first_obstacle_x,
            params.obstacle_y,
            sprites.obstacle_width(),
        )];
        let ground = Ground::new(params.ground_y, sprites.ground_width, params.ground_velocity);

        Self {
            params,
            sprites,
            obstacles,
            ground,
            score: 0,
            ticks: 0,
            rng,
        }
    }

    /// Creates a world whose spawn positions are reproducible.
    pub fn with_seed(params: GameParams, sprites: SpriteSet, seed: u64) -> Self {
        Self::new(params, sprites, StdRng::seed_from_u64(seed))
    }

    /// Creates a world seeded from the operating system.
    pub fn from_entropy(params: GameParams, sprites: SpriteSet) -> Self {
        Self::new(params, sprites, StdRng::from_os_rng())
    }

    /// Advances every obstacle and resolves collisions, passes, retirements
    /// and spawns for the given players.
    ///
    /// At most one obstacle is spawned and the score rises by at most one per
    /// tick, no matter how many players or obstacles triggered a pass.
    pub fn step_obstacles(&mut self, players: &[&Player]) -> TickReport {
        let mut report = TickReport::new();
        let mut spawn = false;

        for (obstacle_idx, obstacle) in self.obstacles.iter_mut().enumerate() {
            obstacle.advance(self.params.obstacle_velocity);

            for (player_idx, player) in players.iter().enumerate() {
                if collision::collide(obstacle, player, &self.sprites) {
                    report.push(TickEvent::Collision {
                        player: player_idx,
                        obstacle: obstacle_idx,
                    });
                }

                if obstacle.check_passed(player.x) {
                    spawn = true;
                    report.push(TickEvent::ObstaclePassed {
                        obstacle: obstacle_idx,
                    });
                }
            }
        }

        for obstacle in self.obstacles.iter().filter(|o| o.is_off_screen()) {
            debug!(x = obstacle.x, "obstacle retired");
            report.push(TickEvent::ObstacleRetired { x: obstacle.x });
        }
        self.obstacles.retain(|o| !o.is_off_screen());

        if spawn {
            self.score += 1;
            let x = self.spawn_obstacle();
            debug!(score = self.score, x, "obstacle passed");
            report.push(TickEvent::ObstacleSpawned { x });
        }

        report
    }

    /// Scrolls the ground and counts the tick as complete.
    pub fn finish_tick(&mut self) {
        self.ground.advance();
        self.ticks += 1;
    }

    /// Index of the obstacle a player at `player_x` should look at.
    ///
    /// This is the second obstacle once the player is past the right edge of
    /// the first one and a second one exists, otherwise the first.
    pub fn relevant_obstacle(&self, player_x: f32) -> Option<usize> {
        match self.obstacles.as_slice() {
            [] => None,
            [first, _, ..] if player_x > first.right() => Some(1),
            _ => Some(0),
        }
    }

    fn spawn_obstacle(&mut self) -> f32 {
        let x = self
            .rng
            .random_range(self.params.spawn_x_min..self.params.spawn_x_max) as f32;
        self.obstacles.push(Obstacle::new(
            x,
            self.params.obstacle_y,
            self.sprites.obstacle_width(),
        ));
        x
    }
}

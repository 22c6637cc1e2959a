//! Single player session controlled by the keyboard.

use tracing::info;

use super::player::Player;
use super::scene::Scene;
use super::session::{Input, SessionStatus, Termination};
use super::world::World;

/// A session with one human-controlled player.
#[derive(Debug, Clone)]
pub struct ManualSession {
    /// Obstacles, ground and score.
    pub world: World,
    /// The player.
    pub player: Player,
    status: SessionStatus,
}

impl ManualSession {
    /// Starts a session with the player at its start position.
    pub fn new(world: World) -> Self {
        let player = Player::at_start(&world.params);
        Self {
            world,
            player,
            status: SessionStatus::Running,
        }
    }

    /// Current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Processes one tick.
    ///
    /// A held jump key starts or continues a jump. A quit request or any
    /// collision ends the session; a terminated session ignores further ticks.
    pub fn tick(&mut self, input: Input) -> SessionStatus {
        if self.status.is_terminated() {
            return self.status;
        }

        if input.quit {
            info!(score = self.world.score, "session closed");
            self.status = SessionStatus::Terminated(Termination::Quit);
            return self.status;
        }

        if input.jump {
            self.player.trigger_jump();
        }
        self.player.jump();
        self.player.move_vertical();

        let report = self.world.step_obstacles(&[&self.player]);

        self.world.finish_tick();

        if !report.collided_players().is_empty() {
            info!(score = self.world.score, tick = self.world.ticks, "collided");
            self.status = SessionStatus::Terminated(Termination::Collision);
        }

        self.status
    }

    /// Describes the current frame.
    pub fn scene(&self) -> Scene<'_> {
        Scene {
            params: &self.world.params,
            obstacles: &self.world.obstacles,
            ground: &self.world.ground,
            players: vec![&self.player],
            score: self.world.score,
        }
    }
}

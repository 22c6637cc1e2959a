//! Population episode: one player per candidate network.
//!
//! Agents are kept in a single collection of records. Each record is
//! identified by the index of its candidate in the network slice, which stays
//! valid no matter how many agents die, so removing an agent never shifts
//! the association between a player, its network and its fitness.

use tracing::{debug, info};

use super::params::Rewards;
use super::player::Player;
use super::scene::Scene;
use super::session::{SessionStatus, Termination};
use super::world::World;
use crate::evolution::decision::{DecisionFn, Observation};

/// Stable identifier of an agent: the index of its candidate network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub usize);

/// A live agent.
#[derive(Debug, Clone)]
pub struct Agent {
    /// Identifier of the agent and its network.
    pub id: AgentId,
    /// The agent's player.
    pub player: Player,
    /// Fitness accumulated so far.
    pub fitness: f32,
}

/// One episode of the agent mode.
///
/// Borrows the candidate networks for the lifetime of the episode and
/// produces one fitness value per candidate when it is finished.
pub struct AgentEpisode<'a, D: DecisionFn> {
    /// Obstacles, ground and score.
    pub world: World,
    networks: &'a [D],
    agents: Vec<Agent>,
    results: Vec<f32>,
    rewards: Rewards,
    status: SessionStatus,
}

impl<'a, D: DecisionFn> AgentEpisode<'a, D> {
    /// Creates an agent with zero fitness for every network.
    pub fn new(world: World, networks: &'a [D], rewards: Rewards) -> Self {
        let agents = (0..networks.len())
            .map(|i| Agent {
                id: AgentId(i),
                player: Player::at_start(&world.params),
                fitness: 0.0,
            })
            .collect();

        Self {
            world,
            networks,
            agents,
            results: vec![0.0; networks.len()],
            rewards,
            status: SessionStatus::Running,
        }
    }

    /// Live agents.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Observation of a player at `player`.
    pub fn observe(&self, player: &Player) -> Observation {
        let distance = match self.world.relevant_obstacle(player.x) {
            Some(idx) => (player.x - self.world.obstacles[idx].x).abs(),
            None => self.world.params.window_width,
        };

        Observation {
            x: player.x,
            distance,
        }
    }

    /// Processes one tick.
    ///
    /// Every live agent is rewarded for surviving, decides whether to jump
    /// and moves. Colliding agents are penalised and removed after the
    /// obstacle pass; a pass rewards every agent still alive. The episode
    /// ends when the window is closed or no agent is left.
    pub fn tick(&mut self, quit: bool) -> SessionStatus {
        if self.status.is_terminated() {
            return self.status;
        }

        if quit {
            info!(score = self.world.score, alive = self.agents.len(), "episode closed");
            self.status = SessionStatus::Terminated(Termination::Quit);
            return self.status;
        }

        if self.agents.is_empty() {
            self.status = SessionStatus::Terminated(Termination::Extinct);
            return self.status;
        }

        let decisions: Vec<bool> = self
            .agents
            .iter()
            .map(|agent| {
                let observation = self.observe(&agent.player);
                self.networks[agent.id.0].decide(&observation) > self.rewards.jump_threshold
            })
            .collect();

        for (agent, jump) in self.agents.iter_mut().zip(decisions) {
            agent.fitness += self.rewards.survival;
            if jump {
                agent.player.trigger_jump();
            }
            agent.player.jump();
            agent.player.move_vertical();
        }

        let players: Vec<&Player> = self.agents.iter().map(|a| &a.player).collect();
        let report = self.world.step_obstacles(&players);

        let collided: Vec<AgentId> = report
            .collided_players()
            .into_iter()
            .map(|slot| self.agents[slot].id)
            .collect();

        for agent in self.agents.iter_mut().filter(|a| collided.contains(&a.id)) {
            agent.fitness -= self.rewards.collision_penalty;
            self.results[agent.id.0] = agent.fitness;
            debug!(agent = agent.id.0, fitness = agent.fitness, "agent collided");
        }
        self.agents.retain(|a| !collided.contains(&a.id));

        if report.any_passed() {
            for agent in &mut self.agents {
                agent.fitness += self.rewards.pass;
            }
        }

        self.world.finish_tick();

        if self.agents.is_empty() {
            info!(score = self.world.score, ticks = self.world.ticks, "population extinct");
            self.status = SessionStatus::Terminated(Termination::Extinct);
        }

        self.status
    }

    /// Describes the current frame.
    pub fn scene(&self) -> Scene<'_> {
        Scene {
            params: &self.world.params,
            obstacles: &self.world.obstacles,
            ground: &self.world.ground,
            players: self.agents.iter().map(|a| &a.player).collect(),
            score: self.world.score,
        }
    }

    /// Fitness of every candidate, in network order.
    ///
    /// Agents still alive contribute the fitness they have accumulated.
    pub fn into_fitness(self) -> Vec<f32> {
        let mut results = self.results;
        for agent in &self.agents {
            results[agent.id.0] = agent.fitness;
        }
        results
    }
}

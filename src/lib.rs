//! # Skippy - a side-scrolling jumper for humans and evolved agents
//!
//! A turtle runs along an endless ground strip and has to jump over monsters
//! that scroll in from the right. The game is either played by hand or by a
//! population of small neural networks that is evolved generation by
//! generation.
//!
//! ## Features
//!
//! - Parabolic jump arc and gravity for the player
//! - Obstacle spawning, scrolling, retirement and scoring
//! - Pixel-accurate collisions from sprite silhouettes
//! - Manual mode driven by a single jump key
//! - Agent mode where every candidate network controls its own turtle
//! - Generational evolution (elitism, crossover, mutation) with statistics
//!
//! ## Core Modules
//!
//! - [`game::world`] - Obstacles, ground and score for one session
//! - [`game::manual`] - Single player session
//! - [`game::agents`] - Population episode with fitness bookkeeping
//! - [`game::scene`] - Back-to-front render orchestration
//! - [`evolution::population`] - Evolution of the decision networks
//! - [`assets`] - Immutable sprite bundle

/// Immutable sprite bundle loaded once at startup.
pub mod assets;
/// Interactive mode selection.
pub mod cli;
/// Fixed-rate frame pacing.
pub mod clock;

/// Render-free game state and tick processing.
pub mod game {
    /// Population episode: one player per candidate network.
    pub mod agents;
    /// Silhouette overlap test between a player and an obstacle.
    pub mod collision;
    /// Events produced while processing one tick.
    pub mod events;
    /// Scrolling ground strip built from two tiles.
    pub mod ground;
    /// Single player session controlled by the keyboard.
    pub mod manual;
    /// Moving hazards the player has to jump over.
    pub mod obstacle;
    /// Game constants and fitness rewards.
    pub mod params;
    /// The jumping player entity.
    pub mod player;
    /// Back-to-front rendering through the [`scene::Canvas`] trait.
    pub mod scene;
    /// Input and termination types shared by both modes.
    pub mod session;
    /// Per-pixel opacity masks built from sprites.
    pub mod silhouette;
    /// Obstacles, ground and score of a running session.
    pub mod world;
}

/// Decision networks and the evolutionary loop that breeds them.
pub mod evolution {
    /// Multi-layer perceptron used as decision function.
    pub mod brain;
    /// Population parameters loaded from JSON.
    pub mod config;
    /// Decision function trait and agent observations.
    pub mod decision;
    /// Capability interface between the game and an evolutionary algorithm.
    pub mod evolver;
    /// A candidate network with its fitness.
    pub mod genome;
    /// Generational population with selection, crossover and mutation.
    pub mod population;
    /// Per-generation fitness statistics.
    pub mod stats;
}

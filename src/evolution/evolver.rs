//! Capability interface between the game and an evolutionary algorithm.
//!
//! The game only needs three things from an evolver: one decision function
//! per candidate, a way to hand back one fitness value per candidate, and the
//! best candidate found. Everything else (selection, mutation, crossover)
//! stays behind this trait.
//!
//! The interface is ask/tell shaped so a frame-paced frontend can run an
//! episode across many frames between asking for networks and reporting
//! fitness. [`Evolver::run`] wraps the same steps for synchronous evaluators.

use anyhow::Result;

use super::decision::DecisionFn;

/// Result of evaluating one generation.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// One fitness value per candidate, in network order.
    Scored(Vec<f32>),
    /// Evaluation was aborted and evolution should stop.
    Quit,
}

/// Best candidate found so far.
#[derive(Debug, Clone)]
pub struct Champion<N> {
    /// Key of the candidate.
    pub key: usize,
    /// Generation the fitness was reached in.
    pub generation: usize,
    /// Fitness of the candidate.
    pub fitness: f32,
    /// The candidate's decision function.
    pub network: N,
}

/// A population of candidates that improves from fitness feedback.
pub trait Evolver {
    /// Decision function instantiated for each candidate.
    type Network: DecisionFn;

    /// Index of the generation awaiting evaluation.
    fn generation(&self) -> usize;

    /// One decision function per candidate of the current generation.
    fn networks(&self) -> Vec<Self::Network>;

    /// Reports the fitness of the current generation and breeds the next one.
    ///
    /// `fitness` must contain exactly one value per network returned by
    /// [`Evolver::networks`].
    fn tell(&mut self, fitness: &[f32]) -> Result<()>;

    /// Whether no further generation should be evaluated.
    fn is_finished(&self) -> bool;

    /// Best candidate seen across all evaluated generations.
    fn champion(&self) -> Option<Champion<Self::Network>>;

    /// Evaluates generations until the evolver finishes or `evaluate` quits.
    ///
    /// # Returns
    ///
    /// The best candidate seen, if any generation was evaluated.
    fn run<F>(&mut self, mut evaluate: F) -> Result<Option<Champion<Self::Network>>>
    where
        Self: Sized,
        F: FnMut(&[Self::Network]) -> Result<Evaluation>,
    {
        while !self.is_finished() {
            let networks = self.networks();
            match evaluate(&networks)? {
                Evaluation::Scored(fitness) => self.tell(&fitness)?,
                Evaluation::Quit => break,
            }
        }

        Ok(self.champion())
    }
}

use serde::{Deserialize, Serialize};

use super::brain::Brain;

/// A candidate of the population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genome {
    /// Unique key, kept when the genome survives into the next generation.
    pub key: usize,
    /// Network weights.
    pub brain: Brain,
    /// Fitness of the last evaluation, `None` until evaluated.
    pub fitness: Option<f32>,
}

impl Genome {
    /// Creates an unevaluated genome.
    pub fn new(key: usize, brain: Brain) -> Self {
        Self {
            key,
            brain,
            fitness: None,
        }
    }

    /// Fitness used for ranking; unevaluated genomes rank last.
    pub fn rank_fitness(&self) -> f32 {
        self.fitness.unwrap_or(f32::NEG_INFINITY)
    }
}

//! Per-generation fitness statistics.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Fitness summary of one evaluated generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation index.
    pub generation: usize,
    /// Number of evaluated candidates.
    pub population_size: usize,
    /// Highest fitness.
    pub best_fitness: f32,
    /// Key of the candidate with the highest fitness.
    pub best_key: usize,
    /// Mean fitness.
    pub mean_fitness: f32,
    /// Population standard deviation of the fitness.
    pub stdev_fitness: f32,
}

/// Records generation statistics and logs each one as it arrives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatisticsReporter {
    history: Vec<GenerationStats>,
}

impl StatisticsReporter {
    /// Creates an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Summarises one generation from `(key, fitness)` pairs and stores it.
    ///
    /// Returns `None` for an empty generation.
    pub fn record(
        &mut self,
        generation: usize,
        fitness: impl IntoIterator<Item = (usize, f32)>,
    ) -> Option<&GenerationStats> {
        let fitness: Vec<(usize, f32)> = fitness.into_iter().collect();
        let (best_key, best_fitness) = fitness
            .iter()
            .copied()
            .max_by(|a, b| a.1.total_cmp(&b.1))?;

        let n = fitness.len() as f32;
        let mean_fitness = fitness.iter().map(|(_, f)| f).sum::<f32>() / n;
        let variance = fitness
            .iter()
            .map(|(_, f)| (f - mean_fitness).powi(2))
            .sum::<f32>()
            / n;

        let stats = GenerationStats {
            generation,
            population_size: fitness.len(),
            best_fitness,
            best_key,
            mean_fitness,
            stdev_fitness: variance.sqrt(),
        };

        info!(
            generation = stats.generation,
            population = stats.population_size,
            best = stats.best_fitness,
            best_key = stats.best_key,
            mean = stats.mean_fitness,
            stdev = stats.stdev_fitness,
            "generation evaluated"
        );

        self.history.push(stats);
        self.history.last()
    }

    /// All recorded generations, oldest first.
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// Best fitness of every generation.
    pub fn best_fitness_curve(&self) -> Vec<f32> {
        self.history.iter().map(|s| s.best_fitness).collect()
    }

    /// Mean fitness of every generation.
    pub fn mean_fitness_curve(&self) -> Vec<f32> {
        self.history.iter().map(|s| s.mean_fitness).collect()
    }
}

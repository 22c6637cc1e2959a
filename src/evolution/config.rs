//! Population parameters.
//!
//! Stored as JSON in the working directory. A missing file
//! falls back to the defaults; a file that exists but cannot be parsed or
//! fails validation is an error.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::decision::{NUM_INPUTS, NUM_OUTPUTS};

/// Default file name of the evolution config.
pub const CONFIG_FILE: &str = "config-feedforward.json";

/// Parameters of the evolutionary run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Number of candidates per generation.
    pub population_size: usize,
    /// Maximum number of generations to evaluate.
    pub generations: usize,
    /// Evolution stops once a candidate reaches this fitness.
    pub fitness_threshold: f32,
    /// Sizes of the hidden layers between the two inputs and the one output.
    pub hidden_layers: Vec<usize>,
    /// Initial weights and biases are drawn from `[-scale, scale)`.
    pub weight_init_scale: f32,
    /// Fraction of the population copied unchanged into the next generation.
    pub elitism: f32,
    /// Fraction of the best candidates allowed to become parents.
    pub survival_threshold: f32,
    /// Probability that a child is bred by crossover instead of cloning.
    pub crossover_probability: f32,
    /// Lower bound of the log-uniform mutation scale.
    pub mutation_scale_min: f32,
    /// Upper bound of the log-uniform mutation scale.
    pub mutation_scale_max: f32,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            fitness_threshold: 100.0,
            hidden_layers: vec![4],
            weight_init_scale: 0.5,
            elitism: 0.04,
            survival_threshold: 0.2,
            crossover_probability: 0.5,
            mutation_scale_min: 0.002,
            mutation_scale_max: 0.2,
        }
    }
}

impl EvolutionConfig {
    /// Layer sizes of the decision network, inputs and output included.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.hidden_layers.len() + 2);
        sizes.push(NUM_INPUTS);
        sizes.extend_from_slice(&self.hidden_layers);
        sizes.push(NUM_OUTPUTS);
        sizes
    }

    /// Number of candidates copied unchanged into the next generation.
    pub fn elite_count(&self) -> usize {
        ((self.population_size as f32 * self.elitism).ceil() as usize).min(self.population_size)
    }

    /// Number of candidates allowed to become parents.
    pub fn parent_count(&self) -> usize {
        ((self.population_size as f32 * self.survival_threshold).ceil() as usize)
            .clamp(1, self.population_size.max(1))
    }

    /// Checks that the parameters describe a runnable population.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            bail!("population_size must be at least 1");
        }
        if self.hidden_layers.contains(&0) {
            bail!("hidden layers must not be empty: {:?}", self.hidden_layers);
        }
        for (name, value) in [
            ("elitism", self.elitism),
            ("survival_threshold", self.survival_threshold),
            ("crossover_probability", self.crossover_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                bail!("{name} must be within [0, 1], got {value}");
            }
        }
        if self.weight_init_scale <= 0.0 {
            bail!("weight_init_scale must be positive");
        }
        if !(self.mutation_scale_min > 0.0 && self.mutation_scale_min < self.mutation_scale_max) {
            bail!(
                "mutation scale range must satisfy 0 < min < max, got [{}, {}]",
                self.mutation_scale_min,
                self.mutation_scale_max
            );
        }
        Ok(())
    }

    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("invalid evolution config")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the config at `path`, or the defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(path = %path.display(), "evolution config not found, using defaults");
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("failed to load {}", path.display()))
    }
}

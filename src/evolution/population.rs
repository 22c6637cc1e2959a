//! Generational evolution of decision networks.
//!
//! Each generation is evaluated as a whole. The next generation keeps the
//! elite unchanged and fills the remaining slots with children of the best
//! candidates, bred either by crossover of two parents or by cloning one
//! parent and mutating it.

use anyhow::{Result, bail};
use rand::Rng;
use tracing::info;

use super::brain::Brain;
use super::config::EvolutionConfig;
use super::evolver::{Champion, Evolver};
use super::genome::Genome;
use super::stats::StatisticsReporter;

/// A population of genomes evolved generation by generation.
#[derive(Debug, Clone)]
pub struct Population {
    config: EvolutionConfig,
    genomes: Vec<Genome>,
    generation: usize,
    next_key: usize,
    best: Option<Champion<Brain>>,
    stats: StatisticsReporter,
    finished: bool,
}

impl Population {
    /// Creates a population of random genomes.
    pub fn new(config: EvolutionConfig) -> Result<Self> {
        config.validate()?;

        let layer_sizes = config.layer_sizes();
        let genomes = (0..config.population_size)
            .map(|key| Genome::new(key, Brain::new(&layer_sizes, config.weight_init_scale)))
            .collect();

        Ok(Self {
            next_key: config.population_size,
            finished: config.generations == 0,
            config,
            genomes,
            generation: 0,
            best: None,
            stats: StatisticsReporter::new(),
        })
    }

    /// Population parameters.
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Genomes of the current generation.
    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    /// Statistics of all evaluated generations.
    pub fn stats(&self) -> &StatisticsReporter {
        &self.stats
    }

    /// Builds the next generation from the evaluated current one.
    fn reproduce(&mut self) {
        let mut ranked = std::mem::take(&mut self.genomes);
        ranked.sort_by(|a, b| b.rank_fitness().total_cmp(&a.rank_fitness()));

        let elite_count = self.config.elite_count();
        let parent_count = self.config.parent_count().min(ranked.len());

        let mut next: Vec<Genome> = Vec::with_capacity(self.config.population_size);

        for elite in ranked.iter().take(elite_count) {
            next.push(Genome::new(elite.key, elite.brain.clone()));
        }

        let mut rng = rand::rng();
        while next.len() < self.config.population_size {
            let brain = if parent_count >= 2
                && rng.random::<f32>() < self.config.crossover_probability
            {
                let parent_1 = rng.random_range(0..parent_count);
                let mut parent_2 = rng.random_range(0..parent_count);
                while parent_2 == parent_1 {
                    parent_2 = rng.random_range(0..parent_count);
                }
                Brain::crossover(&ranked[parent_1].brain, &ranked[parent_2].brain)
            } else {
                let parent = rng.random_range(0..parent_count);
                let mut brain = ranked[parent].brain.clone();
                brain.mutate(self.sample_mutation_scale(&mut rng));
                brain
            };

            next.push(Genome::new(self.next_key, brain));
            self.next_key += 1;
        }

        self.genomes = next;
    }

    /// Samples a mutation scale using logarithmic random distribution.
    fn sample_mutation_scale(&self, rng: &mut impl Rng) -> f32 {
        let log_min = self.config.mutation_scale_min.ln();
        let log_max = self.config.mutation_scale_max.ln();
        rng.random_range(log_min..log_max).exp()
    }
}

impl Evolver for Population {
    type Network = Brain;

    fn generation(&self) -> usize {
        self.generation
    }

    fn networks(&self) -> Vec<Brain> {
        self.genomes.iter().map(|g| g.brain.clone()).collect()
    }

    fn tell(&mut self, fitness: &[f32]) -> Result<()> {
        if self.finished {
            bail!("population has finished evolving");
        }
        if fitness.len() != self.genomes.len() {
            bail!(
                "expected {} fitness values, got {}",
                self.genomes.len(),
                fitness.len()
            );
        }

        for (genome, &value) in self.genomes.iter_mut().zip(fitness) {
            genome.fitness = Some(value);
        }

        let generation = self.generation;
        let summary = self
            .stats
            .record(generation, self.genomes.iter().map(|g| (g.key, g.rank_fitness())))
            .cloned();

        if let Some(summary) = summary {
            let improved = self
                .best
                .as_ref()
                .is_none_or(|best| summary.best_fitness > best.fitness);
            if improved {
                if let Some(genome) = self.genomes.iter().find(|g| g.key == summary.best_key) {
                    self.best = Some(Champion {
                        key: genome.key,
                        generation,
                        fitness: summary.best_fitness,
                        network: genome.brain.clone(),
                    });
                }
            }

            if summary.best_fitness >= self.config.fitness_threshold {
                info!(
                    generation,
                    fitness = summary.best_fitness,
                    "fitness threshold reached"
                );
                self.finished = true;
            }
        }

        self.generation += 1;
        if self.generation >= self.config.generations {
            self.finished = true;
        }

        if !self.finished {
            self.reproduce();
        }

        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn champion(&self) -> Option<Champion<Brain>> {
        self.best.clone()
    }
}

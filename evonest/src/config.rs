use std::time::Duration;

use serde::{Deserialize, Serialize};

use nest2d::util::NestConfig;

/// Configuration for the evolutionary optimizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvoConfig {
    /// Engine configuration shared by every candidate evaluation
    pub nest: NestConfig,
    /// Number of candidate solutions per generation
    pub population_size: usize,
    /// Generation budget
    pub n_generations: usize,
    /// Optional wall-clock budget, checked between generations. Expiry is
    /// normal termination: the best result so far is returned.
    pub time_limit: Option<Duration>,
    /// Probability of producing offspring by crossover rather than cloning a parent
    pub crossover_rate: f64,
    /// Per-gene mutation probability
    pub mutation_rate: f64,
    /// Number of best candidates copied unchanged into the next generation
    pub elite_count: usize,
    /// Tournament size for parent selection
    pub tournament_size: usize,
    /// Seed for the PRNG. If undefined, the optimizer will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
}

impl Default for EvoConfig {
    fn default() -> Self {
        Self {
            nest: NestConfig::default(),
            population_size: 24,
            n_generations: 32,
            time_limit: None,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            elite_count: 2,
            tournament_size: 3,
            prng_seed: Some(0),
        }
    }
}

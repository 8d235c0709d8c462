//! Generational evolutionary search over item orderings and rotation choices.

use std::time::Instant;

use itertools::Itertools;
use log::{debug, info};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use nest2d::entities::{Instance, PackGroup};
use nest2d::nester::Nester;

use crate::config::EvoConfig;
use crate::fitness::Fitness;
use crate::individual::Individual;

/// Evolutionary layout optimizer.
///
/// Wraps the deterministic [`Nester`] in a population-based search over
/// (item order, rotation choice) assignments. Candidates of one generation
/// are evaluated in parallel and merged at the generation boundary; evolution
/// itself is single-threaded, so runs with the same seed and budget are
/// reproducible.
pub struct EvoNester {
    nester: Nester,
    config: EvoConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    rng: SmallRng,
}

impl EvoNester {
    pub fn new(instance: Instance, config: EvoConfig) -> Self {
        assert!(config.population_size > 0);
        let rng = match config.prng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let nester = Nester::new(instance, config.nest.clone());
        EvoNester {
            nester,
            config,
            rng,
        }
    }

    /// Runs the search and returns the best packing found within the budget.
    pub fn solve(&mut self) -> PackGroup {
        let start = Instant::now();
        let instance = self.nester.instance.clone();

        //generation zero: the greedy identity pass plus random permutations
        let mut population: Vec<Individual> = Vec::with_capacity(self.config.population_size);
        population.push(Individual::identity(&instance));
        while population.len() < self.config.population_size {
            population.push(Individual::random(&instance, &mut self.rng));
        }
        evaluate(&self.nester, &mut population);

        let (mut best, mut best_fitness) = {
            let (idx, fitness) = best_of(&population);
            (population[idx].clone(), fitness)
        };
        info!("[EVO] gen 0: fitness {best_fitness:?}");

        let mut generation = 0;
        while generation + 1 < self.config.n_generations && !self.out_of_time(start) {
            generation += 1;
            population = self.next_generation(&population, &instance);
            evaluate(&self.nester, &mut population);

            //results are merged even if the deadline expired while this
            //generation was being evaluated; completed work is never discarded
            let (idx, fitness) = best_of(&population);
            if fitness < best_fitness {
                best = population[idx].clone();
                best_fitness = fitness;
                info!("[EVO] gen {generation}: improved to {best_fitness:?}");
            } else {
                debug!("[EVO] gen {generation}: no improvement ({fitness:?})");
            }
        }

        let pack_group = self.nester.pack(&best.order, Some(&best.rotations));
        info!(
            "[EVO] finished after {} generation(s) in {:.3}ms: {} container(s), {} unplaced, density {:.3}",
            generation + 1,
            start.elapsed().as_secs_f64() * 1000.0,
            pack_group.n_containers(),
            pack_group.unplaced.len(),
            pack_group.density(),
        );
        pack_group
    }

    fn out_of_time(&self, start: Instant) -> bool {
        self.config
            .time_limit
            .is_some_and(|limit| start.elapsed() >= limit)
    }

    /// Breeds the next generation: elites survive unchanged, the rest are
    /// tournament-selected parents recombined and mutated.
    fn next_generation(
        &mut self,
        population: &[Individual],
        instance: &Instance,
    ) -> Vec<Individual> {
        //rank by fitness, stable on the candidate index
        let ranked: Vec<&Individual> = population
            .iter()
            .enumerate()
            .sorted_by_key(|&(i, ind)| (ind.fitness.expect("unevaluated individual"), i))
            .map(|(_, ind)| ind)
            .collect();

        let mut next = Vec::with_capacity(self.config.population_size);
        for elite in ranked.iter().take(self.config.elite_count) {
            next.push((*elite).clone());
        }

        while next.len() < self.config.population_size {
            let parent_a = self.select(&ranked);
            let mut child = match self.rng.random_bool(self.config.crossover_rate) {
                true => {
                    let parent_b = self.select(&ranked);
                    parent_a.crossover(parent_b, &mut self.rng)
                }
                false => parent_a.clone(),
            };
            child.fitness = None;
            child.mutate(instance, self.config.mutation_rate, &mut self.rng);
            next.push(child);
        }
        next
    }

    /// Tournament selection on the ranked population (lower rank = fitter).
    fn select<'a>(&mut self, ranked: &[&'a Individual]) -> &'a Individual {
        let mut best_rank = self.rng.random_range(0..ranked.len());
        for _ in 1..self.config.tournament_size {
            best_rank = best_rank.min(self.rng.random_range(0..ranked.len()));
        }
        ranked[best_rank]
    }
}

/// Evaluates every unevaluated candidate by one nesting pass, in parallel.
fn evaluate(nester: &Nester, population: &mut [Individual]) {
    population.par_iter_mut().for_each(|ind| {
        if ind.fitness.is_none() {
            let pack_group = nester.pack(&ind.order, Some(&ind.rotations));
            ind.fitness = Some(Fitness::of(&pack_group));
        }
    });
}

/// Deterministic best pick: lowest fitness, ties broken by candidate index.
fn best_of(population: &[Individual]) -> (usize, Fitness) {
    population
        .iter()
        .enumerate()
        .map(|(i, ind)| (i, ind.fitness.expect("unevaluated individual")))
        .min_by_key(|&(i, f)| (f, i))
        .expect("population is empty")
}

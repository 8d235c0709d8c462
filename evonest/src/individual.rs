use rand::Rng;
use rand::seq::SliceRandom;

use nest2d::entities::Instance;

use crate::fitness::Fitness;

/// One candidate solution: the order in which items are fed to the nester
/// plus, per item id, the index of the rotation candidate to try first.
#[derive(Clone, Debug)]
pub struct Individual {
    pub order: Vec<usize>,
    pub rotations: Vec<usize>,
    /// Set once evaluated; offspring start unevaluated
    pub fitness: Option<Fitness>,
}

impl Individual {
    /// The identity candidate: items in input order, first rotation
    /// candidates. Seeds the population with the plain greedy pass.
    pub fn identity(instance: &Instance) -> Self {
        Individual {
            order: (0..instance.items.len()).collect(),
            rotations: vec![0; instance.items.len()],
            fitness: None,
        }
    }

    pub fn random(instance: &Instance, rng: &mut impl Rng) -> Self {
        let mut order: Vec<usize> = (0..instance.items.len()).collect();
        order.shuffle(rng);
        let rotations = instance
            .items
            .iter()
            .map(|item| rng.random_range(0..item.rotations.len()))
            .collect();
        Individual {
            order,
            rotations,
            fitness: None,
        }
    }

    /// Order crossover (OX): a contiguous slice of `self`'s ordering
    /// survives, the remaining positions are filled with the missing items in
    /// the order they appear in `other`. Rotation genes are inherited
    /// uniformly per item.
    pub fn crossover(&self, other: &Individual, rng: &mut impl Rng) -> Individual {
        let n = self.order.len();
        if n < 2 {
            return Individual {
                order: self.order.clone(),
                rotations: self.rotations.clone(),
                fitness: None,
            };
        }

        let a = rng.random_range(0..n);
        let b = rng.random_range(0..n);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        let mut inherited = vec![false; n];
        for &id in &self.order[lo..=hi] {
            inherited[id] = true;
        }
        let mut rest = other.order.iter().copied().filter(|&id| !inherited[id]);
        let order = (0..n)
            .map(|i| match (lo..=hi).contains(&i) {
                true => self.order[i],
                false => rest.next().expect("orders are permutations of the same set"),
            })
            .collect();

        let rotations = (0..n)
            .map(|id| match rng.random_bool(0.5) {
                true => self.rotations[id],
                false => other.rotations[id],
            })
            .collect();

        Individual {
            order,
            rotations,
            fitness: None,
        }
    }

    /// Swap mutation on the ordering plus rerolls of rotation genes, each
    /// applied with probability `rate`.
    pub fn mutate(&mut self, instance: &Instance, rate: f64, rng: &mut impl Rng) {
        let n = self.order.len();
        for i in 0..n {
            if rng.random_bool(rate) {
                let j = rng.random_range(0..n);
                self.order.swap(i, j);
                self.fitness = None;
            }
        }
        for (id, gene) in self.rotations.iter_mut().enumerate() {
            let n_rotations = instance.items[id].rotations.len();
            if n_rotations > 1 && rng.random_bool(rate) {
                *gene = rng.random_range(0..n_rotations);
                self.fitness = None;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/population_test.rs"]
mod population_test;

use super::{Candidate, TestCase};
use crate::config::SearchConfig;
use crate::utils::{compare_floats, Float, GenericResult, Random};
use std::sync::Arc;

/// A generation of candidates kept sorted by fitness ascending, together with the
/// parameters which govern its evolution. Each evolution step discards the previous
/// generation wholesale. Sorting uses the standard library's stable sort, so equally
/// fit candidates keep their insertion order.
pub struct Population {
    tests: Vec<Arc<TestCase>>,
    candidates: Vec<Candidate>,
    size: usize,
    set_size: usize,
    elitism_rate: Float,
    crossover_rate: Float,
    mutation_rate: Float,
    tournament_size: usize,
    random: Arc<dyn Random>,
}

impl Population {
    /// Creates a new instance of `Population` from randomly generated candidates.
    pub fn new(config: &SearchConfig, tests: &[Arc<TestCase>], random: Arc<dyn Random>) -> GenericResult<Self> {
        if config.population_size == 0 {
            return Err("population size must be positive".into());
        }

        let mut candidates = (0..config.population_size)
            .map(|_| Candidate::generate_random(config.set_size, tests, random.as_ref()))
            .collect::<GenericResult<Vec<_>>>()?;
        candidates.sort_by(|a, b| compare_floats(a.fitness(), b.fitness()));

        Ok(Self {
            tests: tests.to_vec(),
            candidates,
            size: config.population_size,
            set_size: config.set_size,
            elitism_rate: config.elitism_rate,
            crossover_rate: config.crossover_rate,
            mutation_rate: config.mutation_rate,
            tournament_size: config.tournament_size,
            random,
        })
    }

    /// Returns the candidate with the best (lowest) fitness.
    pub fn fittest(&self) -> &Candidate {
        &self.candidates[0]
    }

    /// Returns the mean fitness of the generation.
    pub fn average_fitness(&self) -> Float {
        self.candidates.iter().map(|candidate| candidate.fitness()).sum::<Float>() / self.size as Float
    }

    /// Breeds the next generation and replaces the current one with it: parents are
    /// tournament selected from the elite slice, recombined with the crossover
    /// probability at a random cut point and mutated independently with the mutation
    /// probability. Two children are appended per iteration, one on the final slot of
    /// an odd sized population.
    pub fn evolve(&mut self) -> GenericResult<()> {
        let elite_count = ((self.size as Float * self.elitism_rate).round() as usize).max(1);

        let mut next_gen = Vec::with_capacity(self.size);
        while next_gen.len() < self.size {
            let father = self.select_parent(elite_count);
            let mother = self.select_parent(elite_count);

            let (son, daughter) = if self.random.is_hit(self.crossover_rate) {
                let cut_point = self.random.uniform_int(0, self.set_size as i32 - 1) as usize;
                (father.crossover(mother, cut_point)?, mother.crossover(father, cut_point)?)
            } else {
                (father.clone(), mother.clone())
            };

            let son = self.maybe_mutate(son);
            let daughter = self.maybe_mutate(daughter);

            next_gen.push(son);
            if next_gen.len() < self.size {
                next_gen.push(daughter);
            }
        }

        next_gen.sort_by(|a, b| compare_floats(a.fitness(), b.fitness()));
        self.candidates = next_gen;

        Ok(())
    }

    fn maybe_mutate(&self, candidate: Candidate) -> Candidate {
        if self.random.is_hit(self.mutation_rate) {
            candidate.mutate(&self.tests, self.random.as_ref())
        } else {
            candidate
        }
    }

    /// Standard tournament selection scoped to the best `limit` ranked candidates.
    fn select_parent(&self, limit: usize) -> &Candidate {
        let mut parent = &self.candidates[self.random.uniform_int(0, limit as i32 - 1) as usize];

        for _ in 0..self.tournament_size {
            let opponent = &self.candidates[self.random.uniform_int(0, limit as i32 - 1) as usize];
            if opponent.fitness() < parent.fitness() {
                parent = opponent;
            }
        }

        parent
    }
}

#[cfg(test)]
#[path = "../../tests/unit/search/genetic_test.rs"]
mod genetic_test;

use super::*;
use crate::model::Population;

/// Evolves a population of candidate orderings, recombining the best found so far into
/// better ones until improvement stalls for the configured amount of generations.
pub struct GeneticSearch {
    environment: Arc<Environment>,
}

impl GeneticSearch {
    /// Creates a new instance of `GeneticSearch`.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self { environment }
    }
}

impl Search for GeneticSearch {
    fn name(&self) -> &'static str {
        "genetic"
    }

    fn environment(&self) -> &Environment {
        self.environment.as_ref()
    }

    fn search(&self, config: &SearchConfig, tests: &[Arc<TestCase>]) -> GenericResult<SearchResult> {
        validate_pool(config.set_size, tests)?;

        let timer = Timer::start();
        let logger = &self.environment.logger;

        let mut population = Population::new(config, tests, self.environment.random.clone())?;
        let mut best = population.fittest().clone();
        let mut generations = 1;
        let mut stalls = 0;

        (logger)(&format!("[{}s] generation {generations}, best: {best}", timer.elapsed_secs()));

        while best.fitness() > 0. && stalls < config.stall_limit {
            population.evolve()?;

            let fittest = population.fittest();
            if fittest.fitness() < best.fitness() {
                best = fittest.clone();
                stalls = 0;
            } else {
                stalls += 1;
            }

            generations += 1;
            (logger)(&format!(
                "[{}s] generation {generations}, best: {:.7}, average: {:.7}",
                timer.elapsed_secs(),
                best.fitness(),
                population.average_fitness()
            ));
        }

        Ok(SearchResult::Genetic { best, generations })
    }
}

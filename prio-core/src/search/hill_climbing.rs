#[cfg(test)]
#[path = "../../tests/unit/search/hill_climbing_test.rs"]
mod hill_climbing_test;

use super::*;
use crate::utils::compare_floats;

/// Stochastic local search: starts from a random ordering and follows the best
/// improving substitution neighbor. Plateaus are escaped by sampling fresh random
/// orderings; exhausting that budget without improvement ends the run.
pub struct HillClimbingSearch {
    environment: Arc<Environment>,
}

impl HillClimbingSearch {
    /// Creates a new instance of `HillClimbingSearch`.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self { environment }
    }
}

impl Search for HillClimbingSearch {
    fn name(&self) -> &'static str {
        "hill climbing"
    }

    fn environment(&self) -> &Environment {
        self.environment.as_ref()
    }

    fn search(&self, config: &SearchConfig, tests: &[Arc<TestCase>]) -> GenericResult<SearchResult> {
        validate_pool(config.set_size, tests)?;

        let timer = Timer::start();
        let logger = &self.environment.logger;
        let random = self.environment.random.as_ref();

        let mut best = Candidate::generate_random(config.set_size, tests, random)?;
        let mut climbs = 1;
        let mut restarts = 0;

        (logger)(&format!("[{}s] {climbs}. start: {best}", timer.elapsed_secs()));

        while best.fitness() > 0. {
            climbs += 1;

            let improving = best
                .neighbors(tests)
                .into_iter()
                .filter(|neighbor| neighbor.fitness() < best.fitness())
                .min_by(|a, b| compare_floats(a.fitness(), b.fitness()));

            if let Some(neighbor) = improving {
                best = neighbor;
                (logger)(&format!("[{}s] {climbs}. new best: {best}", timer.elapsed_secs()));
                continue;
            }

            // plateau: spend the restart budget on fresh random orderings
            let mut attempts = 0;
            while attempts < config.restart_limit {
                let candidate = Candidate::generate_random(config.set_size, tests, random)?;
                if candidate.fitness() < best.fitness() {
                    best = candidate;
                    break;
                }
                attempts += 1;
            }

            if attempts == config.restart_limit {
                return Ok(SearchResult::HillClimbing { best, climbs, restarts });
            }

            restarts += 1;
            (logger)(&format!("[{}s] {climbs}. restart number {restarts}", timer.elapsed_secs()));
        }

        Ok(SearchResult::HillClimbing { best, climbs, restarts })
    }
}

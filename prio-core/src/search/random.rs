#[cfg(test)]
#[path = "../../tests/unit/search/random_test.rs"]
mod random_test;

use super::*;

/// Samples the space at random: fresh orderings are generated independently and one is
/// kept only when it strictly improves on the best found so far.
pub struct RandomSearch {
    environment: Arc<Environment>,
}

impl RandomSearch {
    /// Creates a new instance of `RandomSearch`.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self { environment }
    }
}

impl Search for RandomSearch {
    fn name(&self) -> &'static str {
        "random"
    }

    fn environment(&self) -> &Environment {
        self.environment.as_ref()
    }

    fn search(&self, config: &SearchConfig, tests: &[Arc<TestCase>]) -> GenericResult<SearchResult> {
        validate_pool(config.set_size, tests)?;

        let timer = Timer::start();
        let logger = &self.environment.logger;
        let random = self.environment.random.as_ref();

        let mut best: Option<Candidate> = None;
        let mut attempts = 0;

        while attempts <= config.random_limit && best.as_ref().map_or(true, |best| best.fitness() > 0.) {
            attempts += 1;

            let candidate = Candidate::generate_random(config.set_size, tests, random)?;
            if best.as_ref().map_or(true, |best| candidate.fitness() < best.fitness()) {
                (logger)(&format!("[{}s] {attempts}. new best: {candidate}", timer.elapsed_secs()));
                best = Some(candidate);
            }
        }

        let best = best.ok_or("random search sampled no candidate")?;

        Ok(SearchResult::Random { best, attempts })
    }
}

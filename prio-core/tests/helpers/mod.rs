//! Provides builders shared by unit tests.

use crate::config::SearchConfig;
use crate::model::TestCase;
use crate::utils::{DefaultRandom, Environment, InfoLogger};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Creates a test case with the given detection data.
pub fn create_test_case(name: &str, faults: &[usize], total_faults: usize) -> Arc<TestCase> {
    Arc::new(TestCase::new(name, faults.iter().copied().collect::<FxHashSet<_>>(), total_faults))
}

/// Creates a pool of three tests over two faults: t1 detects {1}, t2 detects {2} and
/// t3 detects both.
pub fn create_test_pool() -> Vec<Arc<TestCase>> {
    vec![create_test_case("t1", &[1], 2), create_test_case("t2", &[2], 2), create_test_case("t3", &[1, 2], 2)]
}

/// Creates a wider pool of four tests over three faults.
pub fn create_wide_pool() -> Vec<Arc<TestCase>> {
    vec![
        create_test_case("a", &[1], 3),
        create_test_case("b", &[2], 3),
        create_test_case("c", &[3], 3),
        create_test_case("d", &[1, 2, 3], 3),
    ]
}

/// Creates a configuration suitable for the small test pools.
pub fn create_test_config() -> SearchConfig {
    SearchConfig {
        set_size: 3,
        benchmark_runs: 2,
        random_limit: 10,
        population_size: 10,
        crossover_rate: 0.9,
        elitism_rate: 0.4,
        mutation_rate: 0.1,
        tournament_size: 3,
        stall_limit: 5,
        restart_limit: 3,
    }
}

/// Creates an environment with seeded randomness and a silent logger.
pub fn create_test_environment(seed: u64) -> Arc<Environment> {
    Arc::new(Environment::new(Arc::new(DefaultRandom::new_with_seed(seed)), create_silent_logger()))
}

/// Creates a logger which discards all messages.
pub fn create_silent_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}

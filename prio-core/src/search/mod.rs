//! Search strategies which explore the space of test orderings.

use crate::config::SearchConfig;
use crate::model::{distinct_size, Candidate, TestCase};
use crate::utils::{Environment, Float, GenericError, GenericResult, Timer};
use std::sync::Arc;

mod genetic;
pub use self::genetic::GeneticSearch;

mod hill_climbing;
pub use self::hill_climbing::HillClimbingSearch;

mod random;
pub use self::random::RandomSearch;

/// Identifies one of the available search strategies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchKind {
    /// Evolves a population of orderings with genetic operators.
    Genetic,
    /// Climbs through substitution neighborhoods with random restarts.
    HillClimbing,
    /// Samples fresh orderings at random.
    Random,
}

impl std::str::FromStr for SearchKind {
    type Err = GenericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ga" | "genetic" => Ok(Self::Genetic),
            "hill" | "climb" => Ok(Self::HillClimbing),
            "random" => Ok(Self::Random),
            _ => Err(format!("unknown search strategy: '{s}'").into()),
        }
    }
}

/// Creates a search strategy of the given kind.
pub fn create_search(kind: SearchKind, environment: Arc<Environment>) -> Box<dyn Search> {
    match kind {
        SearchKind::Genetic => Box::new(GeneticSearch::new(environment)),
        SearchKind::HillClimbing => Box::new(HillClimbingSearch::new(environment)),
        SearchKind::Random => Box::new(RandomSearch::new(environment)),
    }
}

/// A best found ordering together with strategy specific counters.
#[derive(Clone, Debug)]
pub enum SearchResult {
    /// A result of the genetic search.
    Genetic {
        /// Best candidate found.
        best: Candidate,
        /// Total amount of generations evolved.
        generations: usize,
    },
    /// A result of the hill climbing search.
    HillClimbing {
        /// Best candidate found.
        best: Candidate,
        /// Amount of climb iterations.
        climbs: usize,
        /// Amount of successful random restarts.
        restarts: usize,
    },
    /// A result of the random search.
    Random {
        /// Best candidate found.
        best: Candidate,
        /// Amount of sampled candidates.
        attempts: usize,
    },
}

impl SearchResult {
    /// Returns the best candidate found by the search.
    pub fn best(&self) -> &Candidate {
        match self {
            Self::Genetic { best, .. } | Self::HillClimbing { best, .. } | Self::Random { best, .. } => best,
        }
    }

    /// Returns the fitness of the best candidate.
    pub fn fitness(&self) -> Float {
        self.best().fitness()
    }

    /// Returns strategy specific counters as name value pairs.
    pub fn counters(&self) -> Vec<(&'static str, usize)> {
        match self {
            Self::Genetic { generations, .. } => vec![("generations", *generations)],
            Self::HillClimbing { climbs, restarts, .. } => vec![("climbs", *climbs), ("restarts", *restarts)],
            Self::Random { attempts, .. } => vec![("attempts", *attempts)],
        }
    }
}

/// Aggregated statistics of repeated search runs.
#[derive(Clone, Debug)]
pub struct BenchmarkMetrics {
    /// Amount of runs performed.
    pub runs: usize,
    /// Mean fitness of the best candidates.
    pub mean_fitness: Float,
    /// Mean wall clock duration of one run in milliseconds.
    pub mean_duration_ms: Float,
    /// Mean values of the strategy specific counters.
    pub mean_counters: Vec<(&'static str, Float)>,
}

/// A search strategy capable of producing a prioritized ordering for a test suite.
pub trait Search {
    /// Returns a name of the strategy used in log output.
    fn name(&self) -> &'static str;

    /// Returns the ambient environment of the strategy.
    fn environment(&self) -> &Environment;

    /// Searches the given test pool for the best ordering.
    fn search(&self, config: &SearchConfig, tests: &[Arc<TestCase>]) -> GenericResult<SearchResult>;

    /// Runs `search` repeatedly and reports mean fitness, counters and wall clock time
    /// per run through the logger. Runs are fully independent of each other.
    fn benchmark(&self, config: &SearchConfig, tests: &[Arc<TestCase>]) -> GenericResult<BenchmarkMetrics> {
        if config.benchmark_runs == 0 {
            return Err("benchmark requires at least one run".into());
        }

        let logger = &self.environment().logger;
        (logger)(&format!("starting {} benchmark", self.name()));

        let runs = config.benchmark_runs;
        let mut total_fitness = 0.;
        let mut total_millis = 0u128;
        let mut totals: Vec<(&'static str, usize)> = Vec::new();

        for run in 1..=runs {
            (logger)(&format!("starting run {run}"));

            let timer = Timer::start();
            let result = self.search(config, tests)?;
            let millis = timer.elapsed_millis();

            total_fitness += result.fitness();
            total_millis += millis;
            for (index, (name, value)) in result.counters().into_iter().enumerate() {
                match totals.get_mut(index) {
                    Some((_, total)) => *total += value,
                    None => totals.push((name, value)),
                }
            }

            let counters =
                result.counters().iter().map(|(name, value)| format!("{value} {name}")).collect::<Vec<_>>().join(", ");
            (logger)(&format!("finished run {run} in {millis}ms, took {counters}, best: {}", result.best()));
        }

        let metrics = BenchmarkMetrics {
            runs,
            mean_fitness: total_fitness / runs as Float,
            mean_duration_ms: total_millis as Float / runs as Float,
            mean_counters: totals.into_iter().map(|(name, total)| (name, total as Float / runs as Float)).collect(),
        };

        (logger)(&format!("finished {} benchmark", self.name()));
        (logger)(&format!("mean fitness: {:.7}", metrics.mean_fitness));
        for (name, value) in &metrics.mean_counters {
            (logger)(&format!("mean {name}: {value:.1}"));
        }
        (logger)(&format!("mean time: {:.1}ms", metrics.mean_duration_ms));

        Ok(metrics)
    }
}

/// Checks that a pool of tests can supply candidate orderings of the given size: the
/// pool is not empty, every test agrees on a positive total fault count and enough
/// distinct tests exist. Strategies run this before constructing any candidate.
pub fn validate_pool(set_size: usize, tests: &[Arc<TestCase>]) -> GenericResult<()> {
    if tests.is_empty() {
        return Err("test pool is empty".into());
    }

    if set_size == 0 {
        return Err("size must be positive".into());
    }

    if tests.iter().any(|test| test.total_faults() == 0) {
        return Err("total fault count must be positive".into());
    }

    if tests.windows(2).any(|pair| pair[0].total_faults() != pair[1].total_faults()) {
        return Err("tests disagree on the total fault count".into());
    }

    let distinct = distinct_size(tests);
    if set_size > distinct {
        return Err(format!("cannot build orderings of {set_size} tests: the pool has {distinct} distinct tests").into());
    }

    Ok(())
}

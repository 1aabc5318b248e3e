#[cfg(test)]
#[path = "../../tests/unit/model/candidate_test.rs"]
mod candidate_test;

use super::TestCase;
use crate::utils::{compare_floats, Float, GenericResult, Random};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// A candidate solution: a duplicate free sequence of tests interpreted as the order in
/// which the suite is executed. The fitness value is computed once at construction and
/// cached; lower values are better. Every operator produces a new candidate instead of
/// mutating an existing one.
#[derive(Clone, Debug)]
pub struct Candidate {
    tests: Vec<Arc<TestCase>>,
    fitness: Float,
}

impl Candidate {
    /// Creates a new instance of `Candidate` from the given execution order.
    pub fn new(tests: Vec<Arc<TestCase>>) -> Self {
        assert!(!tests.is_empty(), "candidate must contain at least one test");
        let fitness = calculate_fitness(tests.as_slice());

        Self { tests, fitness }
    }

    /// Generates a candidate of the given size by drawing distinct tests uniformly from
    /// the pool. Sizes the pool cannot satisfy with distinct tests are rejected upfront
    /// as resampling would never terminate on them.
    pub fn generate_random(size: usize, pool: &[Arc<TestCase>], random: &dyn Random) -> GenericResult<Self> {
        if size == 0 {
            return Err("candidate size must be positive".into());
        }

        let distinct = distinct_size(pool);
        if size > distinct {
            return Err(format!("cannot draw {size} distinct tests from a pool of {distinct}").into());
        }

        let mut tests: Vec<Arc<TestCase>> = Vec::with_capacity(size);
        while tests.len() < size {
            let test = &pool[random.uniform_int(0, pool.len() as i32 - 1) as usize];
            if !tests.iter().any(|present| present.as_ref() == test.as_ref()) {
                tests.push(test.clone());
            }
        }

        Ok(Self::new(tests))
    }

    /// Returns tests in their execution order.
    pub fn tests(&self) -> &[Arc<TestCase>] {
        &self.tests
    }

    /// Returns an amount of tests in the ordering.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Returns true if the ordering has no tests. Constructed candidates never have.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Returns the fitness of the ordering.
    pub fn fitness(&self) -> Float {
        self.fitness
    }

    /// Combines this candidate with another parent: the first `cut_point` tests are kept
    /// from this candidate, the remaining slots are filled by scanning the other
    /// parent's order and skipping tests already present. An underfilled child (the
    /// other parent cannot supply enough distinct tests) is an error, never a shorter
    /// candidate.
    pub fn crossover(&self, other: &Self, cut_point: usize) -> GenericResult<Self> {
        let mut tests = self.tests[..cut_point].to_vec();

        for test in other.tests() {
            if tests.len() == self.len() {
                break;
            }
            if !tests.iter().any(|present| present.as_ref() == test.as_ref()) {
                tests.push(test.clone());
            }
        }

        if tests.len() != self.len() {
            return Err(format!("crossover at {cut_point} filled {} of {} slots", tests.len(), self.len()).into());
        }

        Ok(Self::new(tests))
    }

    /// Replaces one randomly chosen position with a pool test not present elsewhere in
    /// the ordering. When the pool offers no replacement, the candidate is returned
    /// unchanged.
    pub fn mutate(&self, pool: &[Arc<TestCase>], random: &dyn Random) -> Self {
        let eligible: Vec<_> = pool.iter().filter(|test| !self.contains(test)).collect();
        if eligible.is_empty() {
            return self.clone();
        }

        let position = random.uniform_int(0, self.len() as i32 - 1) as usize;
        let replacement = eligible[random.uniform_int(0, eligible.len() as i32 - 1) as usize];

        let mut tests = self.tests.clone();
        tests[position] = replacement.clone();

        Self::new(tests)
    }

    /// Returns the full neighborhood: for every position and every pool test, the
    /// candidate with that test substituted in. A substitution which collides with an
    /// already present test yields the unmodified candidate instead, keeping the
    /// neighborhood size at `pool size * ordering size`.
    pub fn neighbors(&self, pool: &[Arc<TestCase>]) -> Vec<Self> {
        let mut neighbors = Vec::with_capacity(pool.len() * self.len());

        for position in 0..self.len() {
            for test in pool {
                if self.contains(test) {
                    neighbors.push(self.clone());
                } else {
                    let mut tests = self.tests.clone();
                    tests[position] = test.clone();
                    neighbors.push(Self::new(tests));
                }
            }
        }

        neighbors
    }

    fn contains(&self, test: &TestCase) -> bool {
        self.tests.iter().any(|present| present.as_ref() == test)
    }
}

/// Candidates are ordered by fitness ascending; ties compare equal.
impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        compare_floats(self.fitness, other.fitness) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_floats(self.fitness, other.fitness)
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names = self.tests.iter().map(|test| test.name()).collect::<Vec<_>>().join(", ");
        write!(f, "[{names}] ({:.7})", self.fitness)
    }
}

/// Scores an ordering with the APFD style metric: the mean first detection rank over
/// all faults, normalized by the ordering size and shifted by the half slot correction.
/// An undetected fault ranks one past the end. The metric's floor is `1/(2 * size)`.
fn calculate_fitness(tests: &[Arc<TestCase>]) -> Float {
    let total_faults = tests[0].total_faults();
    let size = tests.len();

    let sum_ranks: usize = (1..=total_faults)
        .map(|fault| tests.iter().position(|test| test.detects(fault)).map_or(size + 1, |index| index + 1))
        .sum();

    sum_ranks as Float / (total_faults * size) as Float - 1. / (2. * size as Float)
}

/// Counts pool entries distinct by their detection data.
pub(crate) fn distinct_size(pool: &[Arc<TestCase>]) -> usize {
    let mut distinct: Vec<&TestCase> = Vec::with_capacity(pool.len());

    for test in pool {
        if !distinct.iter().any(|present| *present == test.as_ref()) {
            distinct.push(test.as_ref());
        }
    }

    distinct.len()
}

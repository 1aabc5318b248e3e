#[cfg(test)]
#[path = "../../tests/unit/model/test_case_test.rs"]
mod test_case_test;

use crate::utils::Float;
use rustc_hash::FxHashSet;
use std::fmt::{Display, Formatter};

/// An immutable descriptor of a single test: which faults it detects and how many
/// distinct faults exist in the whole suite. Instances are created once when the suite
/// is loaded and shared read only between all candidate orderings.
#[derive(Clone, Debug)]
pub struct TestCase {
    name: String,
    faults: FxHashSet<usize>,
    total_faults: usize,
}

impl TestCase {
    /// Creates a new instance of `TestCase`.
    pub fn new<S: Into<String>>(name: S, faults: FxHashSet<usize>, total_faults: usize) -> Self {
        Self { name: name.into(), faults, total_faults }
    }

    /// Returns a name of the test.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the test detects the given fault.
    pub fn detects(&self, fault: usize) -> bool {
        self.faults.contains(&fault)
    }

    /// Returns an amount of faults the test detects.
    pub fn faults_found(&self) -> usize {
        self.faults.len()
    }

    /// Returns a total amount of faults in the suite.
    pub fn total_faults(&self) -> usize {
        self.total_faults
    }

    /// Returns a ratio of faults detected by the test to all faults in the suite.
    pub fn coverage(&self) -> Float {
        self.faults.len() as Float / self.total_faults as Float
    }
}

/// Tests are equal when their detection data is: two differently named tests with the
/// same fault set are interchangeable within an ordering.
impl PartialEq for TestCase {
    fn eq(&self, other: &Self) -> bool {
        self.total_faults == other.total_faults && self.faults == other.faults
    }
}

impl Eq for TestCase {}

impl Display for TestCase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

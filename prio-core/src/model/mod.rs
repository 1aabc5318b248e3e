//! Types which describe the test suite and candidate orderings.

mod test_case;
pub use self::test_case::TestCase;

mod candidate;
pub use self::candidate::Candidate;
pub(crate) use self::candidate::distinct_size;

mod population;
pub use self::population::Population;

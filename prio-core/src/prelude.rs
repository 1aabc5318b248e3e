//! This module reimports commonly used types.

pub use crate::config::SearchConfig;
pub use crate::config::ValidationError;

pub use crate::model::Candidate;
pub use crate::model::Population;
pub use crate::model::TestCase;

pub use crate::search::create_search;
pub use crate::search::validate_pool;
pub use crate::search::BenchmarkMetrics;
pub use crate::search::Search;
pub use crate::search::SearchKind;
pub use crate::search::SearchResult;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::Timer;
pub use crate::utils::{GenericError, GenericResult};
pub use crate::utils::{Random, RandomGen};

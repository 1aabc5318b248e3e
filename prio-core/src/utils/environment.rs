use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// Specifies a logger type which takes a string message.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Keeps ambient state shared by the search strategies: the source of randomness and
/// the progress logger.
pub struct Environment {
    /// A random generator.
    pub random: Arc<dyn Random>,
    /// A logger used to report search progress.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }

    /// Creates a new instance of `Environment` with repeatable randomness.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::new(Arc::new(DefaultRandom::new_with_seed(seed)), default_logger())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRandom::default()), default_logger())
    }
}

fn default_logger() -> InfoLogger {
    Arc::new(|msg: &str| println!("{msg}"))
}

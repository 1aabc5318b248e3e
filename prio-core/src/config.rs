//! Validated configuration of a search run.

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use crate::utils::{Float, GenericError};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Numeric parameters of a search run, read from a flat properties map and validated
/// before any search starts.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// An amount of tests in each candidate ordering.
    pub set_size: usize,
    /// An amount of repeated runs performed by a benchmark.
    pub benchmark_runs: usize,
    /// A limit on random search attempts.
    pub random_limit: usize,
    /// An amount of candidates in the genetic population.
    pub population_size: usize,
    /// A probability of crossover.
    pub crossover_rate: Float,
    /// A fraction of top ranked candidates eligible as parents.
    pub elitism_rate: Float,
    /// A probability of mutation.
    pub mutation_rate: Float,
    /// An amount of tournament rounds when selecting a parent.
    pub tournament_size: usize,
    /// An amount of stalled generations after which the genetic search stops.
    pub stall_limit: usize,
    /// An amount of failed restart attempts after which hill climbing stops.
    pub restart_limit: usize,
}

impl SearchConfig {
    /// Reads and validates the configuration from a properties map. Every offending key
    /// is collected, so a single pass reports all of them at once.
    pub fn parse(properties: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let mut reader = PropertyReader { properties, errors: vec![] };

        let config = Self {
            set_size: reader.int("size"),
            benchmark_runs: reader.int("benchmark"),
            random_limit: reader.int("random.limit"),
            population_size: reader.int("ga.population"),
            crossover_rate: reader.rate("ga.crossover"),
            elitism_rate: reader.rate("ga.elitism"),
            mutation_rate: reader.rate("ga.mutation"),
            tournament_size: reader.int("ga.tournament"),
            stall_limit: reader.int("ga.limit"),
            restart_limit: reader.int("stall"),
        };

        if reader.errors.is_empty() { Ok(config) } else { Err(ValidationError { errors: reader.errors }) }
    }
}

/// An error which lists every configuration key that is missing or holds a value of the
/// wrong type.
#[derive(Debug)]
pub struct ValidationError {
    errors: Vec<ParameterError>,
}

/// A single offending configuration parameter.
#[derive(Debug)]
pub struct ParameterError {
    /// A configuration key.
    pub key: &'static str,
    /// What is wrong with the key's value.
    pub reason: String,
}

impl ValidationError {
    /// Returns all offending parameters.
    pub fn errors(&self) -> &[ParameterError] {
        &self.errors
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let details =
            self.errors.iter().map(|error| format!("{} {}", error.key, error.reason)).collect::<Vec<_>>().join("; ");
        write!(f, "invalid configuration: {details}")
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for GenericError {
    fn from(error: ValidationError) -> Self {
        error.to_string().into()
    }
}

struct PropertyReader<'a> {
    properties: &'a HashMap<String, String>,
    errors: Vec<ParameterError>,
}

impl PropertyReader<'_> {
    fn int(&mut self, key: &'static str) -> usize {
        match self.properties.get(key) {
            None => self.fail(key, "property is missing"),
            Some(value) => value.parse().unwrap_or_else(|_| self.fail(key, "must be an integer")),
        }
    }

    fn rate(&mut self, key: &'static str) -> Float {
        match self.properties.get(key) {
            None => self.fail(key, "property is missing") as Float,
            Some(value) => match value.parse::<Float>() {
                Ok(rate) if (0. ..=1.).contains(&rate) => rate,
                _ => self.fail(key, "must be a float in [0, 1]") as Float,
            },
        }
    }

    fn fail(&mut self, key: &'static str, reason: &str) -> usize {
        self.errors.push(ParameterError { key, reason: reason.to_string() });
        0
    }
}

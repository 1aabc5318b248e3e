//! Reading of test suite fault matrix files.

#[cfg(test)]
#[path = "../tests/unit/suite_test.rs"]
mod suite_test;

use prio_core::prelude::{GenericError, GenericResult, TestCase};
use rustc_hash::FxHashSet;
use std::io::{BufRead, BufReader, Read};
use std::sync::Arc;

/// Reads the fault matrix format: one test per line as
/// `<name>: v1: <count> v2: <count> ...` where a positive count means the test detects
/// that fault. The amount of verdict columns defines the suite's total fault count and
/// must be the same on every line.
pub fn read_suite<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<Arc<TestCase>>> {
    let mut tests: Vec<Arc<TestCase>> = Vec::new();
    let mut total_faults = None;

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let test = parse_test(line).map_err(|err| GenericError::from(format!("line {}: {err}", number + 1)))?;

        match total_faults {
            None => total_faults = Some(test.total_faults()),
            Some(expected) if expected != test.total_faults() => {
                return Err(format!(
                    "line {}: expected {expected} verdict columns, got {}",
                    number + 1,
                    test.total_faults()
                )
                .into());
            }
            Some(_) => {}
        }

        tests.push(Arc::new(test));
    }

    if tests.is_empty() {
        return Err("suite file contains no tests".into());
    }

    Ok(tests)
}

fn parse_test(line: &str) -> GenericResult<TestCase> {
    let mut tokens = line.split_whitespace();

    let name = tokens.next().ok_or("missing test name")?.trim_end_matches(':');
    let verdicts: Vec<&str> = tokens.collect();

    if verdicts.is_empty() || verdicts.len() % 2 != 0 {
        return Err("expected 'v<N>: <count>' verdict pairs".into());
    }

    let mut faults = FxHashSet::default();
    let mut columns = 0;

    for pair in verdicts.chunks(2) {
        let count: i64 =
            pair[1].parse().map_err(|_| GenericError::from(format!("cannot parse verdict count '{}'", pair[1])))?;

        columns += 1;
        if count > 0 {
            faults.insert(columns);
        }
    }

    Ok(TestCase::new(name, faults, columns))
}

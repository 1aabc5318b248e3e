//! Reading of `.properties` configuration files.

#[cfg(test)]
#[path = "../tests/unit/properties_test.rs"]
mod properties_test;

use prio_core::prelude::{GenericError, GenericResult};
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};

/// Reads a java style `.properties` file into a flat key value map: one `key=value`
/// pair per line, lines starting with `#` or `!` are comments.
pub fn read_properties<R: Read>(reader: BufReader<R>) -> GenericResult<HashMap<String, String>> {
    let mut properties = HashMap::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| GenericError::from(format!("line {}: expected 'key=value', got '{line}'", number + 1)))?;

        properties.insert(key.trim().to_string(), value.trim().to_string());
    }

    Ok(properties)
}

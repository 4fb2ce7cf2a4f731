use toml::{Value, map::Map};

use super::ConfigError;

const SEPARATOR: char = '.';

fn split_key(key: &str) -> Result<Vec<&str>, ConfigError> {
    let parts: Vec<&str> = key.split(SEPARATOR).collect();

    if parts.iter().any(|part| part.is_empty()) {
        return Err(ConfigError::InvalidPath(format!(
            "Malformed key '{key}': empty segment"
        )));
    }

    Ok(parts)
}

/// Looks up the value addressed by a dotted key such as `tls.cert-path`.
///
/// # Errors
/// * `ConfigError::InvalidPath` - If the key is malformed or does not exist
pub(super) fn navigate_path<'a>(value: &'a Value, key: &str) -> Result<&'a Value, ConfigError> {
    let parts = split_key(key)?;
    let mut current = value;

    for (i, part) in parts.iter().enumerate() {
        let Value::Table(table) = current else {
            return Err(ConfigError::InvalidPath(format!(
                "Cannot navigate into {} at '{}'",
                current.type_str(),
                parts[..i].join("."),
            )));
        };

        current = table.get(*part).ok_or_else(|| {
            ConfigError::InvalidPath(format!("Key '{key}' is not set"))
        })?;
    }

    Ok(current)
}

/// Writes `new_value` at a dotted key, creating intermediate tables on the way.
///
/// # Errors
/// * `ConfigError::InvalidPath` - If the key is malformed or crosses a non-table value
pub(super) fn set_value_at_path(
    value: &mut Value,
    key: &str,
    new_value: Value,
) -> Result<(), ConfigError> {
    let parts = split_key(key)?;
    let Some((last, parents)) = parts.split_last() else {
        return Err(ConfigError::InvalidPath("Empty key".to_string()));
    };

    let mut current = value;
    for (i, part) in parents.iter().enumerate() {
        current = step_mut(current, part, &parts[..=i])?;
    }

    match current {
        Value::Table(table) => {
            table.insert((*last).to_string(), new_value);
            Ok(())
        }
        other => Err(ConfigError::InvalidPath(format!(
            "Cannot insert into {} at '{}'",
            other.type_str(),
            parents.join(".")
        ))),
    }
}

fn step_mut<'a>(
    current: &'a mut Value,
    part: &str,
    path_so_far: &[&str],
) -> Result<&'a mut Value, ConfigError> {
    match current {
        Value::Table(table) => Ok(table
            .entry(part.to_string())
            .or_insert(Value::Table(Map::new()))),
        other => Err(ConfigError::InvalidPath(format!(
            "Cannot navigate into {} at '{}'",
            other.type_str(),
            path_so_far.join(".")
        ))),
    }
}

//! Configuration file upgrades: detect keys missing from an older YAML file
//! and fill them in with their defaults, leaving user values untouched.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every current config file is expected to carry.
pub const KNOWN_KEYS: [&str; 5] = [
    "database",
    "baseline_hours",
    "notify_offset_minutes",
    "normalization",
    "notifications",
];

const NORMALIZATION_DOC: &str = "  # normalization options:\n\
     #   single-step → one borrow and one ±24 wrap (exact for ordinary input)\n\
     #   modular     → full modulo-24h arithmetic for any input\n";

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{:?} is not a YAML mapping",
            path
        ))),
    }
}

/// List the known keys absent from the config file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(KNOWN_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .collect())
}

/// Add every missing key with its default value.
/// Returns the keys that were added (empty when nothing had to change).
pub fn migrate_missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = read_mapping(path)?;
    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Other("default config is not a mapping".into())),
    };

    let mut added = Vec::new();
    for key in KNOWN_KEYS {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k)
            && let Some(default) = defaults.get(&k)
        {
            map.insert(k, default.clone());
            added.push(key);
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(map))?;

    // Inject documentation comment right after the `normalization` line
    let mut new_content = String::new();
    for line in serialized.lines() {
        new_content.push_str(line);
        new_content.push('\n');

        if line.starts_with("normalization:") && added.contains(&"normalization") {
            new_content.push_str(NORMALIZATION_DOC);
        }
    }

    fs::write(path, new_content).map_err(|_| AppError::ConfigSave)?;
    Ok(added)
}

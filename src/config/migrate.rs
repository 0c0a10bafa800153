//! Configuration file upgrades: detect keys missing from an older
//! `stafftime.conf` and fill them in with defaults.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys present in the default config but absent from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key (with its default value) to the config file.
/// Existing values are never touched.
///
/// Returns the number of keys added.
pub fn fill_missing_keys(path: &Path) -> AppResult<usize> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;

    let mut added = 0;
    for (k, v) in defaults {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                info(format!("Adding missing config key '{}'", name));
            }
            current.insert(k, v);
            added += 1;
        }
    }

    if added > 0 {
        let yaml = serde_yaml::to_string(&Value::Mapping(current))
            .map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, yaml)?;
        success(format!("Configuration updated: {} key(s) added.", added));
    } else {
        info("Configuration is up to date.");
    }

    Ok(added)
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;

    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(AppError::Config(format!(
            "{}: top level must be a mapping",
            path.display()
        ))),
        Err(e) => Err(AppError::ConfigLoad(format!("{}: {}", path.display(), e))),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default()) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(_) => Err(AppError::Other("default config is not a mapping".into())),
        Err(e) => Err(AppError::Config(e.to_string())),
    }
}

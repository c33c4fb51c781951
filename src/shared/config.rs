// src/shared/config.rs
use std::str::FromStr;

/// Source of configuration values. Production reads the process
/// environment; tests pass a map.
pub trait ConfigLookup {
    fn get(&self, key: &str) -> Option<String>;
}

impl<F> ConfigLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("Failed to load {key}: {reason}")]
    Unreadable { key: &'static str, reason: String },
}

/// Non-blank value for `key`, trimmed.
pub fn optional_var(lookup: &impl ConfigLookup, key: &str) -> Option<String> {
    lookup
        .get(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn required_var(lookup: &impl ConfigLookup, key: &'static str) -> Result<String, ConfigError> {
    optional_var(lookup, key).ok_or(ConfigError::Missing(key))
}

pub fn var_or(lookup: &impl ConfigLookup, key: &str, default: &str) -> String {
    optional_var(lookup, key).unwrap_or_else(|| default.to_string())
}

pub fn parse_var<T>(lookup: &impl ConfigLookup, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
{
    match optional_var(lookup, key) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

use crate::ids::{IdGenerator, RandomIds, SequentialIds};
use crate::tracker::DEFAULT_CALORIE_LIMIT;
use std::env;
use std::num::NonZeroU32;
use std::sync::Arc;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a port number, got '{0}'")]
    InvalidPort(String),

    #[error("CALORIE_LIMIT must be a positive whole number, got '{0}'")]
    InvalidCalorieLimit(String),

    #[error("ID_STRATEGY must be 'random' or 'sequential', got '{0}'")]
    InvalidIdStrategy(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    #[default]
    Random,
    Sequential,
}

impl IdStrategy {
    pub fn generator(self) -> Arc<dyn IdGenerator> {
        match self {
            IdStrategy::Random => Arc::new(RandomIds),
            IdStrategy::Sequential => Arc::new(SequentialIds::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub calorie_limit: NonZeroU32,
    pub id_strategy: IdStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            calorie_limit: DEFAULT_CALORIE_LIMIT,
            id_strategy: IdStrategy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset or blank keys keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(value) = get("PORT") {
            config.port = value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?;
        }

        if let Some(value) = get("CALORIE_LIMIT") {
            config.calorie_limit = value
                .parse::<NonZeroU32>()
                .map_err(|_| ConfigError::InvalidCalorieLimit(value))?;
        }

        if let Some(value) = get("ID_STRATEGY") {
            config.id_strategy = match value.to_lowercase().as_str() {
                "random" => IdStrategy::Random,
                "sequential" => IdStrategy::Sequential,
                _ => return Err(ConfigError::InvalidIdStrategy(value)),
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 8080);
        assert_eq!(config.calorie_limit.get(), 2000);
        assert_eq!(config.id_strategy, IdStrategy::Random);
    }

    #[test]
    fn reads_all_keys() {
        let config = load(&[
            ("PORT", "3000"),
            ("CALORIE_LIMIT", " 2500 "),
            ("ID_STRATEGY", "Sequential"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.calorie_limit.get(), 2500);
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            load(&[("PORT", "http")]),
            Err(ConfigError::InvalidPort(_))
        ));
        for limit in ["0", "-10", "lots"] {
            assert!(matches!(
                load(&[("CALORIE_LIMIT", limit)]),
                Err(ConfigError::InvalidCalorieLimit(_))
            ));
        }
        assert!(matches!(
            load(&[("ID_STRATEGY", "uuid7")]),
            Err(ConfigError::InvalidIdStrategy(_))
        ));
    }

    #[test]
    fn sequential_strategy_builds_counter() {
        let ids = IdStrategy::Sequential.generator();
        assert_eq!(ids.next_id().as_str(), "1");
    }
}

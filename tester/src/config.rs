use rand::Rng;
use thiserror::Error;

pub const SEED_VAR: &str = "SLIST_TEST_SEED";
pub const OPS_VAR: &str = "SLIST_TEST_OPS";
pub const MAX_VALUE_VAR: &str = "SLIST_TEST_MAX_VALUE";

const DEFAULT_OPS: usize = 2000;
const DEFAULT_MAX_VALUE: i32 = 64;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },

    #[error("{var} must be positive, got {value}")]
    NotPositive { var: &'static str, value: i64 },
}

/// Settings for a differential test run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TesterConfig {
    /// Fixed seed for replaying a run; a fresh one is drawn when `None`.
    pub seed: Option<u64>,
    pub ops: usize,
    /// Generated values are drawn from `0..max_value`.
    pub max_value: i32,
}

impl Default for TesterConfig {
    fn default() -> Self {
        Self {
            seed: None,
            ops: DEFAULT_OPS,
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}

impl TesterConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from any variable source, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(SEED_VAR) {
            config.seed = Some(parse(SEED_VAR, value)?);
        }
        if let Some(value) = lookup(OPS_VAR) {
            config.ops = parse(OPS_VAR, value)?;
        }
        if let Some(value) = lookup(MAX_VALUE_VAR) {
            let max_value: i32 = parse(MAX_VALUE_VAR, value)?;
            if max_value <= 0 {
                return Err(ConfigError::NotPositive {
                    var: MAX_VALUE_VAR,
                    value: max_value.into(),
                });
            }
            config.max_value = max_value;
        }
        Ok(config)
    }

    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::thread_rng().gen())
    }
}

fn parse<V: core::str::FromStr>(var: &'static str, value: String) -> Result<V, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn defaults() {
        let config = TesterConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, TesterConfig::default());
        assert_eq!(config.ops, 2000);
        assert_eq!(config.max_value, 64);
        assert!(config.seed.is_none());
    }

    #[test]
    fn overrides() {
        let config = TesterConfig::from_lookup(lookup(&[
            (SEED_VAR, "42"),
            (OPS_VAR, " 10 "),
            (MAX_VALUE_VAR, "5"),
        ]))
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.resolve_seed(), 42);
        assert_eq!(config.ops, 10);
        assert_eq!(config.max_value, 5);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            TesterConfig::from_lookup(lookup(&[(OPS_VAR, "many")])),
            Err(ConfigError::Invalid {
                var: OPS_VAR,
                value: "many".into()
            })
        );
        assert_eq!(
            TesterConfig::from_lookup(lookup(&[(MAX_VALUE_VAR, "0")])),
            Err(ConfigError::NotPositive {
                var: MAX_VALUE_VAR,
                value: 0
            })
        );
    }
}

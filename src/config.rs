//! Environment-derived runtime configuration.

use crate::constants::TICK_INTERVAL_MS;
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_ACHIEVEMENTS_ENABLED: &str = "RETRODESK_ACHIEVEMENTS_ENABLED";
pub const ENV_DATA_DIR: &str = "RETRODESK_DATA_DIR";
pub const ENV_TICK_MS: &str = "RETRODESK_TICK_MS";
pub const ENV_LOG: &str = "RETRODESK_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Global gate: when false no achievement can ever unlock.
    pub achievements_enabled: bool,
    /// Overrides `~/.retrodesk/` for progress and logs.
    pub data_dir: Option<PathBuf>,
    pub tick_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            achievements_enabled: true,
            data_dir: None,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any variable source. Unparseable values fall back
    /// to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let achievements_enabled = lookup(ENV_ACHIEVEMENTS_ENABLED)
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.achievements_enabled);

        let data_dir = lookup(ENV_DATA_DIR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let tick_interval = lookup(ENV_TICK_MS)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_interval);

        Self {
            achievements_enabled,
            data_dir,
            tick_interval,
        }
    }
}

/// Accepts the usual spellings of a boolean environment flag.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert!(config.achievements_enabled);
    }

    #[test]
    fn test_flag_disables_achievements() {
        for value in ["0", "false", "OFF", " no "] {
            let config = Config::from_lookup(lookup_from(&[(ENV_ACHIEVEMENTS_ENABLED, value)]));
            assert!(!config.achievements_enabled, "value {:?}", value);
        }
    }

    #[test]
    fn test_garbage_flag_keeps_default() {
        let config = Config::from_lookup(lookup_from(&[(ENV_ACHIEVEMENTS_ENABLED, "maybe")]));
        assert!(config.achievements_enabled);
    }

    #[test]
    fn test_data_dir_and_tick() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_DATA_DIR, "/tmp/desk"),
            (ENV_TICK_MS, "33"),
        ]));
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/desk")));
        assert_eq!(config.tick_interval, Duration::from_millis(33));
    }

    #[test]
    fn test_zero_tick_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[(ENV_TICK_MS, "0")]));
        assert_eq!(config.tick_interval, Duration::from_millis(TICK_INTERVAL_MS));
    }
}

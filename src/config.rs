//! Startup configuration from `BLOCK_BLAST_*` environment variables.

use std::env;
use std::path::PathBuf;

pub const SEED_VAR: &str = "BLOCK_BLAST_SEED";
pub const LOG_PATH_VAR: &str = "BLOCK_BLAST_LOG_PATH";
pub const LOG_FILTER_VAR: &str = "BLOCK_BLAST_LOG";
pub const MOUSE_VAR: &str = "BLOCK_BLAST_MOUSE";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed dealer seed. `None` means pick one at random.
    pub seed: Option<u32>,
    /// Log file. The terminal is owned by the game, so logging is off without one.
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
    pub mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            mouse: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = non_empty(SEED_VAR).and_then(|s| s.parse().ok());
        let log_path = non_empty(LOG_PATH_VAR).map(PathBuf::from);
        let log_filter =
            non_empty(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let mouse = non_empty(MOUSE_VAR)
            .map(|v| !(v == "0" || v.eq_ignore_ascii_case("false")))
            .unwrap_or(true);

        Self {
            seed,
            log_path,
            log_filter,
            mouse,
        }
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), Config::default());
        assert!(Config::default().mouse);
        assert_eq!(Config::default().log_filter, "info");
    }

    #[test]
    fn parses_all_variables() {
        let cfg = config(&[
            (SEED_VAR, "42"),
            (LOG_PATH_VAR, " /tmp/block-blast.log "),
            (LOG_FILTER_VAR, "debug"),
            (MOUSE_VAR, "false"),
        ]);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.resolve_seed(), 42);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/block-blast.log")));
        assert_eq!(cfg.log_filter, "debug");
        assert!(!cfg.mouse);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = config(&[(SEED_VAR, "-3"), (LOG_PATH_VAR, "  "), (MOUSE_VAR, "yes")]);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.log_path, None);
        assert!(cfg.mouse);
        assert!(!config(&[(MOUSE_VAR, "0")]).mouse);
        assert!(!config(&[(MOUSE_VAR, "FALSE")]).mouse);
    }
}

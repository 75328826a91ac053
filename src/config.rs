//! Session configuration
//!
//! Values come from defaults, then from `TRIPLE_ECC_*` environment variables,
//! and finally from command-line flags applied by the caller.

use crate::error::{EccError, EccResult};

/// Seed for the session RNG (decimal `u64`)
pub const ENV_SEED: &str = "TRIPLE_ECC_SEED";
/// `true/false/1/0/yes/no/on/off`
pub const ENV_PARALLEL: &str = "TRIPLE_ECC_PARALLEL";
/// Number of timed runs per side in the security comparison
pub const ENV_BENCH_RUNS: &str = "TRIPLE_ECC_BENCH_RUNS";

/// Runs per side in the timing comparison unless configured otherwise
pub const DEFAULT_BENCH_RUNS: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Fixed RNG seed for reproducible keys and ciphertexts; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Run point arithmetic on the rayon thread pool
    pub parallel: bool,
    /// Timed runs per side in [`crate::benchmark::compare_security`]
    pub benchmark_runs: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            parallel: true,
            benchmark_runs: DEFAULT_BENCH_RUNS,
        }
    }
}

impl SessionConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> EccResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> EccResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SEED) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| EccError::Config(format!("{}={:?}: {}", ENV_SEED, raw, e)))?;
            config.seed = Some(seed);
        }

        if let Some(raw) = lookup(ENV_PARALLEL) {
            config.parallel = parse_bool(&raw).ok_or_else(|| {
                EccError::Config(format!("{}={:?}: expected a boolean", ENV_PARALLEL, raw))
            })?;
        }

        if let Some(raw) = lookup(ENV_BENCH_RUNS) {
            let runs = raw
                .trim()
                .parse::<usize>()
                .map_err(|e| EccError::Config(format!("{}={:?}: {}", ENV_BENCH_RUNS, raw, e)))?;
            config.benchmark_runs = runs;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_benchmark_runs(mut self, runs: usize) -> Self {
        self.benchmark_runs = runs;
        self
    }

    pub fn validate(&self) -> EccResult<()> {
        if self.benchmark_runs == 0 {
            return Err(EccError::Config(
                "benchmark runs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SessionConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.seed, None);
        assert!(config.parallel);
        assert_eq!(config.benchmark_runs, 10);
    }

    #[test]
    fn test_values_from_lookup() {
        let config = SessionConfig::from_lookup(lookup_from(&[
            (ENV_SEED, " 1234 "),
            (ENV_PARALLEL, "off"),
            (ENV_BENCH_RUNS, "3"),
        ]))
        .unwrap();
        assert_eq!(config.seed, Some(1234));
        assert!(!config.parallel);
        assert_eq!(config.benchmark_runs, 3);
    }

    #[test]
    fn test_bad_values_rejected() {
        for pairs in [
            [(ENV_SEED, "-1")],
            [(ENV_PARALLEL, "maybe")],
            [(ENV_BENCH_RUNS, "ten")],
            [(ENV_BENCH_RUNS, "0")],
        ] {
            let err = SessionConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
            assert!(matches!(err, EccError::Config(_)), "{:?}", pairs);
        }
    }

    #[test]
    fn test_builders() {
        let config = SessionConfig::default()
            .with_seed(9)
            .with_parallel(false)
            .with_benchmark_runs(2);
        assert_eq!(config.seed, Some(9));
        assert!(!config.parallel);
        assert_eq!(config.benchmark_runs, 2);
        assert!(config.validate().is_ok());
        assert!(config.with_benchmark_runs(0).validate().is_err());
    }
}

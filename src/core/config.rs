//! Simulation configuration.
//!
//! The box pool is fixed; configuration only shapes the random input
//! stream fed to `simulate`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::score::Weight;

/// Parameters for a seeded random game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Random seed for the weight stream.
    /// Same seed produces the same game.
    pub seed: u64,

    /// Number of turns (input weights) to play.
    pub turns: usize,

    /// Largest weight the stream may produce (inclusive).
    pub max_weight: Weight,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            turns: 16,
            max_weight: 100,
        }
    }
}

impl SimulationConfig {
    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of turns.
    #[must_use]
    pub fn with_turns(mut self, turns: usize) -> Self {
        self.turns = turns;
        self
    }

    /// Set the inclusive weight bound.
    #[must_use]
    pub fn with_max_weight(mut self, max_weight: Weight) -> Self {
        self.max_weight = max_weight;
        self
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_weight == 0 {
            return Err(ConfigError::ZeroMaxWeight);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.turns, 16);
        assert_eq!(config.max_weight, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = SimulationConfig::default()
            .with_seed(7)
            .with_turns(0)
            .with_max_weight(5);

        assert_eq!(config.seed, 7);
        assert_eq!(config.turns, 0);
        assert_eq!(config.max_weight, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_max_weight_rejected() {
        let config = SimulationConfig::default().with_max_weight(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxWeight));
    }

    #[test]
    fn test_config_serde() {
        let config = SimulationConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}

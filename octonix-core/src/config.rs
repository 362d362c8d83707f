//! Engine configuration
//!
//! Fields are stored raw so a configuration can be built in a `const`
//! context from generated board constants; [`EngineConfig::validate`]
//! checks them against the protocol ranges before use.

use octonix_protocol::{CrossfadeRate, CrossfadeSteps, ShuffleRate};

use crate::random::DEFAULT_SEED;

/// Power-on behavior of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Crossfade length applied to every tube at boot (1-10)
    pub crossfade_steps: u8,
    /// Crossfade rate table index (0-6)
    pub crossfade_rate_index: u8,
    /// Ticks between shuffle draws (10-200)
    pub shuffle_rate: u8,
    /// Seed for the shuffle digit generator
    pub shuffle_seed: u16,
    /// Boot with the command lock engaged
    pub start_locked: bool,
}

impl EngineConfig {
    /// Power-on defaults
    pub const DEFAULT: Self = Self {
        crossfade_steps: 5,
        crossfade_rate_index: 3,
        shuffle_rate: 26,
        shuffle_seed: DEFAULT_SEED,
        start_locked: false,
    };

    /// Check every field against its range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.crossfade_steps()?;
        self.crossfade_rate()?;
        self.shuffle_rate()?;
        Ok(())
    }

    /// Validated crossfade length
    pub fn crossfade_steps(&self) -> Result<CrossfadeSteps, ConfigError> {
        CrossfadeSteps::new(self.crossfade_steps)
            .ok_or(ConfigError::CrossfadeSteps(self.crossfade_steps))
    }

    /// Validated crossfade rate index
    pub fn crossfade_rate(&self) -> Result<CrossfadeRate, ConfigError> {
        CrossfadeRate::new(self.crossfade_rate_index)
            .ok_or(ConfigError::CrossfadeRate(self.crossfade_rate_index))
    }

    /// Validated shuffle rate
    pub fn shuffle_rate(&self) -> Result<ShuffleRate, ConfigError> {
        ShuffleRate::new(self.shuffle_rate).ok_or(ConfigError::ShuffleRate(self.shuffle_rate))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration field outside its range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Crossfade length not in 1..=10
    CrossfadeSteps(u8),
    /// Crossfade rate index above 6
    CrossfadeRate(u8),
    /// Shuffle rate not in 10..=200
    ShuffleRate(u8),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::CrossfadeSteps(v) => {
                write!(f, "crossfade_steps = {} (must be 1..=10)", v)
            }
            ConfigError::CrossfadeRate(v) => {
                write!(f, "crossfade_rate_index = {} (must be 0..=6)", v)
            }
            ConfigError::ShuffleRate(v) => write!(f, "shuffle_rate = {} (must be 10..=200)", v),
        }
    }
}

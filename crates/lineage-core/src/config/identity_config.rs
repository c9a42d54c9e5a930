//! Identity source configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants;

/// How identities are minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityStrategy {
    /// UUID v4 tokens.
    #[default]
    Random,
    /// Counter-based tokens starting at `seed`.
    Sequential,
}

impl FromStr for IdentityStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "sequential" => Ok(Self::Sequential),
            other => Err(format!(
                "unknown identity strategy '{other}' (expected random or sequential)"
            )),
        }
    }
}

/// Configuration for the identity source.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IdentityConfig {
    /// Minting strategy. Default: random.
    pub strategy: Option<IdentityStrategy>,
    /// First value of the sequential strategy. Default: 1.
    pub seed: Option<u64>,
}

impl IdentityConfig {
    pub fn effective_strategy(&self) -> IdentityStrategy {
        self.strategy.unwrap_or_default()
    }

    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(constants::DEFAULT_SEQUENTIAL_SEED)
    }
}

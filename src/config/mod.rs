#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::DEFAULT_API_BASE_URL;
use crate::core::score::STARTING_HAND_SIZE;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_DECK_COUNT: u32 = 1;
pub const MAX_DECK_COUNT: u32 = 20;
pub const MAX_STARTING_HAND_SIZE: usize = 10;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Resolved table settings, whichever source they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub api_base_url: String,
    pub deck_count: u32,
    pub starting_hand_size: usize,
    pub timeout_seconds: u64,
}

impl Settings {
    pub fn from_provider(provider: &impl ConfigProvider) -> Self {
        Self {
            api_base_url: provider.api_base_url().to_string(),
            deck_count: provider.deck_count(),
            starting_hand_size: provider.starting_hand_size(),
            timeout_seconds: provider.timeout_seconds(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            deck_count: DEFAULT_DECK_COUNT,
            starting_hand_size: STARTING_HAND_SIZE,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ConfigProvider for Settings {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn deck_count(&self) -> u32 {
        self.deck_count
    }

    fn starting_hand_size(&self) -> usize {
        self.starting_hand_size
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_base_url", &self.api_base_url)?;
        validation::validate_range("deck_count", self.deck_count, 1, MAX_DECK_COUNT)?;
        validation::validate_range(
            "starting_hand_size",
            self.starting_hand_size,
            1,
            MAX_STARTING_HAND_SIZE,
        )?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        Ok(())
    }
}

use crate::config::{
    DEFAULT_DECK_COUNT, DEFAULT_TIMEOUT_SECONDS, MAX_DECK_COUNT, MAX_STARTING_HAND_SIZE,
    MAX_TIMEOUT_SECONDS,
};
use crate::core::score::STARTING_HAND_SIZE;
use crate::core::ConfigProvider;
use crate::utils::error::{GameError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: ApiConfig,
    pub game: Option<GameConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub deck_count: Option<u32>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub starting_hand_size: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
    pub level: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GameError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GameError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GameError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        let base_url = validation::validate_required_field("api.base_url", &self.api.base_url)?;
        validation::validate_url("api.base_url", base_url)?;
        validation::validate_range("api.deck_count", self.deck_count(), 1, MAX_DECK_COUNT)?;
        validation::validate_range(
            "api.timeout_seconds",
            self.timeout_seconds(),
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        validation::validate_range(
            "game.starting_hand_size",
            self.starting_hand_size(),
            1,
            MAX_STARTING_HAND_SIZE,
        )?;

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            if LogFormat::parse(format).is_none() {
                return Err(GameError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.to_string(),
                    reason: "Supported formats: compact, json".to_string(),
                });
            }
        }

        if let Some(level) = self.log_level() {
            if level.parse::<LevelFilter>().is_err() {
                return Err(GameError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: "Supported levels: off, error, warn, info, debug, trace".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .and_then(LogFormat::parse)
            .unwrap_or_default()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base_url(&self) -> &str {
        self.api.base_url.as_deref().unwrap_or_default()
    }

    fn deck_count(&self) -> u32 {
        self.api.deck_count.unwrap_or(DEFAULT_DECK_COUNT)
    }

    fn starting_hand_size(&self) -> usize {
        self.game
            .as_ref()
            .and_then(|g| g.starting_hand_size)
            .unwrap_or(STARTING_HAND_SIZE)
    }

    fn timeout_seconds(&self) -> u64 {
        self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

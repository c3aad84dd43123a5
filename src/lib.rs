pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::DeckApiClient;
pub use crate::app::Table;
pub use crate::config::{toml_config::TomlConfig, Settings};
pub use crate::core::game::{GameState, Phase};
pub use crate::core::score::{calculate_score, calculate_winner};
pub use crate::utils::error::{GameError, Result};

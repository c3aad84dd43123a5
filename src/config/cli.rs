use crate::adapters::DEFAULT_API_BASE_URL;
use crate::core::ConfigProvider;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "remote-blackjack")]
#[command(about = "Play Blackjack against the house using a remote deck-of-cards API")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    #[arg(long, default_value = "1")]
    pub deck_count: u32,

    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,

    /// TOML configuration file; replaces the table flags above when given
    #[arg(short, long)]
    pub config: Option<String>,

    /// Run these commands instead of reading stdin, e.g. start,hit,stand
    #[arg(long, value_delimiter = ',')]
    pub commands: Vec<String>,

    #[arg(long, help = "Print a JSON summary of every finished round")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn deck_count(&self) -> u32 {
        self.deck_count
    }

    fn starting_hand_size(&self) -> usize {
        crate::core::score::STARTING_HAND_SIZE
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_secs
    }
}

use anyhow::Context;
use clap::Parser;
use remote_blackjack::app::{self, ConsoleOptions};
use remote_blackjack::utils::error::ErrorSeverity;
use remote_blackjack::utils::logger::{self, LogFormat};
use remote_blackjack::utils::validation::Validate;
use remote_blackjack::{CliConfig, DeckApiClient, GameError, GameState, Settings, Table, TomlConfig};
use std::io::{IsTerminal, Write};
use tokio::io::BufReader;

fn load_settings(config: &CliConfig) -> Result<(Settings, LogFormat, Option<String>), GameError> {
    match &config.config {
        Some(path) => {
            let toml = TomlConfig::from_file(path)?;
            toml.validate()?;
            Ok((
                Settings::from_provider(&toml),
                toml.log_format(),
                toml.log_level().map(str::to_string),
            ))
        }
        None => Ok((Settings::from_provider(config), LogFormat::default(), None)),
    }
}

fn exit_code(e: &GameError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: GameError) -> ! {
    tracing::error!(
        "❌ Blackjack session failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let (settings, log_format, log_level) = match load_settings(&config) {
        Ok(loaded) => loaded,
        Err(e) => {
            logger::init_cli_logger(config.verbose);
            fail(e);
        }
    };
    logger::init_logger(config.verbose, log_level.as_deref(), log_format);

    tracing::info!("Starting remote-blackjack");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        fail(e);
    }

    tracing::info!("🌐 Deck service: {}", settings.api_base_url);
    let deck = match DeckApiClient::new(settings.api_base_url.clone(), settings.request_timeout()) {
        Ok(deck) => deck,
        Err(e) => fail(e),
    };
    let table = Table::new(deck, &settings);
    let mut stdout = std::io::stdout();

    let result = if config.commands.is_empty() {
        let options = ConsoleOptions {
            json_summaries: config.json,
            prompt: std::io::stdin().is_terminal(),
        };
        let reader = BufReader::new(tokio::io::stdin());
        app::run(&table, GameState::new(), reader, &mut stdout, options).await
    } else {
        let options = ConsoleOptions {
            json_summaries: config.json,
            prompt: false,
        };
        let script = config.commands.join("\n");
        app::run(&table, GameState::new(), script.as_bytes(), &mut stdout, options).await
    };

    stdout.flush().context("failed to flush the table output")?;

    match result {
        Ok(report) => {
            tracing::info!(
                "✅ Session finished after {} round(s), final phase: {}",
                report.rounds.len(),
                report.final_state.phase()
            );
            Ok(())
        }
        Err(e) => fail(e),
    }
}

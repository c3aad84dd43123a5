use crate::app::table::{Command, Table};
use crate::app::view::{self, HELP_TEXT};
use crate::core::game::GameState;
use crate::domain::model::RoundSummary;
use crate::domain::ports::DeckService;
use crate::utils::error::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOptions {
    /// Write each finished round as a JSON line after the table.
    pub json_summaries: bool,
    pub prompt: bool,
}

#[derive(Debug, Clone)]
pub struct SessionReport {
    pub final_state: GameState,
    pub rounds: Vec<RoundSummary>,
}

/// Reads one command per line and applies it to the table, one event at a
/// time. Stops at `quit` or end of input.
pub async fn run<D, R, W>(
    table: &Table<D>,
    initial: GameState,
    reader: R,
    out: &mut W,
    options: ConsoleOptions,
) -> Result<SessionReport>
where
    D: DeckService,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut state = initial;
    let mut rounds = Vec::new();
    let mut lines = reader.lines();

    write!(out, "{}", view::render(&state))?;
    writeln!(out, "{}", HELP_TEXT)?;

    loop {
        if options.prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let command = match Command::parse(input) {
            Some(command) => command,
            None => {
                tracing::debug!("Unknown command: {}", input);
                writeln!(out, "Unknown command '{}'. {}", input, HELP_TEXT)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{}", HELP_TEXT)?;
                continue;
            }
            _ => {}
        }

        let transition = table.dispatch(&state, command).await;
        state = transition.state;

        if let Some(alert) = &transition.alert {
            writeln!(out, "⚠️  {}", alert)?;
        }
        write!(out, "{}", view::render(&state))?;

        if let Some(summary) = transition.summary {
            if options.json_summaries {
                writeln!(out, "{}", serde_json::to_string(&summary)?)?;
            }
            rounds.push(summary);
        }
    }

    Ok(SessionReport {
        final_state: state,
        rounds,
    })
}

use crate::config::Settings;
use crate::core::game::GameState;
use crate::core::setup::SetupSequence;
use crate::domain::model::RoundSummary;
use crate::domain::ports::DeckService;
use crate::utils::error::GameError;

const HIT_CARD_COUNT: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Hit,
    Stand,
    Help,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "start" | "s" | "new" => Some(Command::Start),
            "hit" | "h" => Some(Command::Hit),
            "stand" | "t" => Some(Command::Stand),
            "help" | "?" => Some(Command::Help),
            "quit" | "q" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Result of handling one table event.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: GameState,
    pub alert: Option<String>,
    pub summary: Option<RoundSummary>,
}

impl Transition {
    fn applied(state: GameState) -> Self {
        Self {
            state,
            alert: None,
            summary: None,
        }
    }

    fn alerted(state: GameState, alert: String) -> Self {
        tracing::warn!("⚠️ {}", alert);
        Self {
            state,
            alert: Some(alert),
            summary: None,
        }
    }
}

/// Event handlers for one table. Holds no game state of its own: every
/// handler takes the current state and returns the next one.
pub struct Table<D: DeckService> {
    deck: D,
    setup: SetupSequence,
}

impl<D: DeckService> Table<D> {
    pub fn new(deck: D, settings: &Settings) -> Self {
        Self {
            deck,
            setup: SetupSequence::standard(settings.deck_count, settings.starting_hand_size),
        }
    }

    pub async fn dispatch(&self, state: &GameState, command: Command) -> Transition {
        match command {
            Command::Start => self.start(state).await,
            Command::Hit => self.hit(state).await,
            Command::Stand => self.stand(state),
            Command::Help | Command::Quit => Transition::applied(state.clone()),
        }
    }

    pub async fn start(&self, state: &GameState) -> Transition {
        tracing::info!("🚀 Starting a new game");
        match self.setup.execute(state, &self.deck).await {
            Ok(next) => {
                tracing::info!(
                    "🃏 Dealt: house {} / player {}",
                    next.house_score(),
                    next.player_score()
                );
                Transition::applied(next)
            }
            Err(failure) => {
                let alert = failure.to_string();
                Transition::alerted(failure.state, alert)
            }
        }
    }

    pub async fn hit(&self, state: &GameState) -> Transition {
        if !state.can_hit() {
            let refused = GameError::InvalidAction {
                action: "hit".to_string(),
                phase: state.phase().to_string(),
            };
            return Transition::alerted(state.clone(), refused.user_friendly_message());
        }

        let drawn = match state.deck() {
            Some(handle) => self.deck.draw(handle, HIT_CARD_COUNT).await,
            None => Err(GameError::NoDeck),
        };

        match drawn.and_then(|cards| state.hit(cards)) {
            Ok(next) => {
                tracing::info!("➕ Player hits, score now {}", next.player_score());
                Transition::applied(next)
            }
            Err(e) => Transition::alerted(state.clone(), format!("unable to draw cards: {}", e)),
        }
    }

    pub fn stand(&self, state: &GameState) -> Transition {
        match state.stand() {
            Ok(next) => {
                let summary = next.summary();
                if let Some(summary) = &summary {
                    tracing::info!(
                        "🏁 Winner: {} (house {}, player {})",
                        summary.winner,
                        summary.house_score,
                        summary.player_score
                    );
                }
                Transition {
                    state: next,
                    alert: None,
                    summary,
                }
            }
            Err(e) => Transition::alerted(state.clone(), e.user_friendly_message()),
        }
    }
}

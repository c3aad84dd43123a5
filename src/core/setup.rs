use crate::core::game::GameState;
use crate::core::score::STARTING_HAND_SIZE;
use crate::domain::ports::DeckService;
use crate::utils::error::{GameError, Result};
use std::fmt;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStage {
    Reset,
    Shuffle,
    DealHouse,
    DealPlayer,
}

impl fmt::Display for SetupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupStage::Reset => f.write_str("reset the table"),
            SetupStage::Shuffle => f.write_str("shuffle deck"),
            SetupStage::DealHouse => f.write_str("deal the house hand"),
            SetupStage::DealPlayer => f.write_str("deal the player hand"),
        }
    }
}

/// Setup stopped at `stage`. `state` is whatever the earlier steps produced;
/// nothing is rolled back.
#[derive(Debug, thiserror::Error)]
#[error("unable to {stage}: {error}")]
pub struct SetupFailure {
    pub stage: SetupStage,
    pub state: GameState,
    #[source]
    pub error: GameError,
}

/// One fallible step of starting a game.
#[async_trait::async_trait]
pub trait SetupStep: Send + Sync {
    fn stage(&self) -> SetupStage;

    async fn apply(&self, state: &GameState, deck: &dyn DeckService) -> Result<GameState>;
}

pub struct ResetStep;

#[async_trait::async_trait]
impl SetupStep for ResetStep {
    fn stage(&self) -> SetupStage {
        SetupStage::Reset
    }

    async fn apply(&self, state: &GameState, _deck: &dyn DeckService) -> Result<GameState> {
        state.reset()
    }
}

pub struct ShuffleStep {
    deck_count: u32,
}

impl ShuffleStep {
    pub fn new(deck_count: u32) -> Self {
        Self { deck_count }
    }
}

#[async_trait::async_trait]
impl SetupStep for ShuffleStep {
    fn stage(&self) -> SetupStage {
        SetupStage::Shuffle
    }

    async fn apply(&self, state: &GameState, deck: &dyn DeckService) -> Result<GameState> {
        let handle = deck.shuffle(self.deck_count).await?;
        tracing::debug!("🃏 Shuffled deck {}", handle);
        Ok(state.with_deck(handle))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    House,
    Player,
}

pub struct DealStep {
    seat: Seat,
    count: usize,
}

impl DealStep {
    pub fn new(seat: Seat, count: usize) -> Self {
        Self { seat, count }
    }
}

#[async_trait::async_trait]
impl SetupStep for DealStep {
    fn stage(&self) -> SetupStage {
        match self.seat {
            Seat::House => SetupStage::DealHouse,
            Seat::Player => SetupStage::DealPlayer,
        }
    }

    async fn apply(&self, state: &GameState, deck: &dyn DeckService) -> Result<GameState> {
        let handle = state.deck().ok_or(GameError::NoDeck)?;
        let cards = deck.draw(handle, self.count).await?;
        tracing::debug!("🂠 Dealt {} card(s) to {:?}", cards.len(), self.seat);

        Ok(match self.seat {
            Seat::House => state.deal_house(cards),
            Seat::Player => state.deal_player(cards),
        })
    }
}

/// Runs setup steps strictly in order. Each step sees the state the previous
/// one produced, and the first failure ends the run.
pub struct SetupSequence {
    steps: Vec<Box<dyn SetupStep>>,
}

impl SetupSequence {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// reset, shuffle, deal the house, deal the player.
    pub fn standard(deck_count: u32, hand_size: usize) -> Self {
        let mut sequence = Self::new();
        sequence.add_step(Box::new(ResetStep));
        sequence.add_step(Box::new(ShuffleStep::new(deck_count)));
        sequence.add_step(Box::new(DealStep::new(Seat::House, hand_size)));
        sequence.add_step(Box::new(DealStep::new(Seat::Player, hand_size)));
        sequence
    }

    pub fn add_step(&mut self, step: Box<dyn SetupStep>) {
        self.steps.push(step);
    }

    pub fn stages(&self) -> Vec<SetupStage> {
        self.steps.iter().map(|step| step.stage()).collect()
    }

    pub async fn execute(
        &self,
        initial: &GameState,
        deck: &dyn DeckService,
    ) -> std::result::Result<GameState, SetupFailure> {
        let mut state = initial.clone();

        for step in &self.steps {
            let start_time = Instant::now();

            match step.apply(&state, deck).await {
                Ok(next) => {
                    tracing::debug!(
                        "✅ Setup step done: {} (duration: {:?})",
                        step.stage(),
                        start_time.elapsed()
                    );
                    state = next;
                }
                Err(error) => {
                    tracing::warn!("❌ Setup step failed: {} ({})", step.stage(), error);
                    return Err(SetupFailure {
                        stage: step.stage(),
                        state,
                        error,
                    });
                }
            }
        }

        Ok(state)
    }
}

impl Default for SetupSequence {
    fn default() -> Self {
        Self::standard(1, STARTING_HAND_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::Phase;
    use crate::domain::model::{Card, DeckHandle, Rank};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockDeck {
        fail_shuffle: bool,
        fail_draw_after: Option<usize>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl MockDeck {
        fn failing_shuffle() -> Self {
            Self {
                fail_shuffle: true,
                ..Self::default()
            }
        }

        fn failing_draw_after(successful_draws: usize) -> Self {
            Self {
                fail_draw_after: Some(successful_draws),
                ..Self::default()
            }
        }

        async fn calls(&self) -> Vec<String> {
            self.calls.lock().await.clone()
        }
    }

    #[async_trait::async_trait]
    impl DeckService for MockDeck {
        async fn shuffle(&self, deck_count: u32) -> Result<DeckHandle> {
            self.calls.lock().await.push(format!("shuffle:{deck_count}"));
            if self.fail_shuffle {
                return Err(GameError::DeckServiceError {
                    status: 503,
                    message: "Service Unavailable".to_string(),
                });
            }
            Ok(DeckHandle::new("deck-1"))
        }

        async fn draw(&self, deck: &DeckHandle, count: usize) -> Result<Vec<Card>> {
            let mut calls = self.calls.lock().await;
            let draws_so_far = calls.iter().filter(|c| c.starts_with("draw")).count();
            calls.push(format!("draw:{}:{count}", deck));
            if self.fail_draw_after == Some(draws_so_far) {
                return Err(GameError::DeckServiceError {
                    status: 500,
                    message: "Internal Server Error".to_string(),
                });
            }
            Ok((0..count).map(|_| Card::new(Rank::Nine, "9.png")).collect())
        }
    }

    #[test]
    fn test_standard_sequence_order() {
        let sequence = SetupSequence::standard(1, 2);
        assert_eq!(
            sequence.stages(),
            vec![
                SetupStage::Reset,
                SetupStage::Shuffle,
                SetupStage::DealHouse,
                SetupStage::DealPlayer
            ]
        );
    }

    #[tokio::test]
    async fn test_successful_setup_deals_two_cards_each() {
        let deck = MockDeck::default();
        let state = SetupSequence::standard(1, 2)
            .execute(&GameState::new(), &deck)
            .await
            .unwrap();

        assert_eq!(state.phase(), Phase::InProgress);
        assert_eq!(state.deck(), Some(&DeckHandle::new("deck-1")));
        assert_eq!(state.house().len(), 2);
        assert_eq!(state.player().len(), 2);
        assert_eq!(
            deck.calls().await,
            vec!["shuffle:1", "draw:deck-1:2", "draw:deck-1:2"]
        );
    }

    #[tokio::test]
    async fn test_shuffle_failure_stops_before_dealing() {
        let deck = MockDeck::failing_shuffle();
        let failure = SetupSequence::standard(1, 2)
            .execute(&GameState::new(), &deck)
            .await
            .unwrap_err();

        assert_eq!(failure.stage, SetupStage::Shuffle);
        assert!(failure.to_string().starts_with("unable to shuffle deck"));
        assert_eq!(failure.state.phase(), Phase::InProgress);
        assert!(failure.state.deck().is_none());
        assert!(failure.state.house().is_empty());
        assert_eq!(deck.calls().await, vec!["shuffle:1"]);
    }

    #[tokio::test]
    async fn test_player_deal_failure_keeps_house_hand() {
        let deck = MockDeck::failing_draw_after(1);
        let failure = SetupSequence::standard(1, 2)
            .execute(&GameState::new(), &deck)
            .await
            .unwrap_err();

        assert_eq!(failure.stage, SetupStage::DealPlayer);
        assert_eq!(failure.state.house().len(), 2);
        assert!(failure.state.player().is_empty());
    }

    #[tokio::test]
    async fn test_reset_refused_mid_game() {
        let deck = MockDeck::default();
        let sequence = SetupSequence::standard(1, 2);
        let running = sequence.execute(&GameState::new(), &deck).await.unwrap();

        let failure = sequence.execute(&running, &deck).await.unwrap_err();
        assert_eq!(failure.stage, SetupStage::Reset);
        assert_eq!(failure.state, running);
    }

    #[tokio::test]
    async fn test_deal_without_deck_reports_no_deck() {
        let deck = MockDeck::default();
        let mut sequence = SetupSequence::new();
        sequence.add_step(Box::new(ResetStep));
        sequence.add_step(Box::new(DealStep::new(Seat::House, 2)));

        let failure = sequence.execute(&GameState::new(), &deck).await.unwrap_err();
        assert_eq!(failure.stage, SetupStage::DealHouse);
        assert!(matches!(failure.error, GameError::NoDeck));
        assert!(deck.calls().await.is_empty());
    }
}

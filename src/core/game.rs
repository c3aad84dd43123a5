use crate::core::score::{calculate_score, calculate_winner};
use crate::domain::model::{Card, DeckHandle, Hand, Party, RoundSummary};
use crate::utils::error::{GameError, Result};
use chrono::Utc;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Ended,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::NotStarted => f.write_str("not started"),
            Phase::InProgress => f.write_str("in progress"),
            Phase::Ended => f.write_str("over"),
        }
    }
}

/// Snapshot of the table. Transitions never mutate a state in place;
/// each one hands back the next value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    house: Hand,
    player: Hand,
    deck: Option<DeckHandle>,
    started: bool,
    ended: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (self.started, self.ended) {
            (false, _) => Phase::NotStarted,
            (true, false) => Phase::InProgress,
            (true, true) => Phase::Ended,
        }
    }

    pub fn house(&self) -> &Hand {
        &self.house
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn deck(&self) -> Option<&DeckHandle> {
        self.deck.as_ref()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn can_start(&self) -> bool {
        self.phase() != Phase::InProgress
    }

    pub fn can_hit(&self) -> bool {
        self.phase() == Phase::InProgress
    }

    pub fn can_stand(&self) -> bool {
        self.phase() == Phase::InProgress
    }

    pub fn house_score(&self) -> u32 {
        calculate_score(self.house.cards())
    }

    pub fn player_score(&self) -> u32 {
        calculate_score(self.player.cards())
    }

    /// Fresh table for a new game. The previous deck handle is dropped.
    pub fn reset(&self) -> Result<Self> {
        self.require(self.can_start(), "start a new game")?;
        Ok(Self {
            house: Hand::new(),
            player: Hand::new(),
            deck: None,
            started: true,
            ended: false,
        })
    }

    pub fn with_deck(&self, deck: DeckHandle) -> Self {
        Self {
            deck: Some(deck),
            ..self.clone()
        }
    }

    pub fn deal_house(&self, cards: Vec<Card>) -> Self {
        Self {
            house: self.house.with_cards(cards),
            ..self.clone()
        }
    }

    pub fn deal_player(&self, cards: Vec<Card>) -> Self {
        Self {
            player: self.player.with_cards(cards),
            ..self.clone()
        }
    }

    pub fn hit(&self, cards: Vec<Card>) -> Result<Self> {
        self.require(self.can_hit(), "hit")?;
        Ok(self.deal_player(cards))
    }

    pub fn stand(&self) -> Result<Self> {
        self.require(self.can_stand(), "stand")?;
        Ok(Self {
            ended: true,
            ..self.clone()
        })
    }

    pub fn winner(&self) -> Option<Party> {
        if self.phase() == Phase::Ended {
            Some(calculate_winner(self.house.cards(), self.player.cards()))
        } else {
            None
        }
    }

    pub fn summary(&self) -> Option<RoundSummary> {
        let winner = self.winner()?;
        Some(RoundSummary {
            winner,
            house_score: self.house_score(),
            player_score: self.player_score(),
            house_cards: self.house.cards().iter().map(Card::label).collect(),
            player_cards: self.player.cards().iter().map(Card::label).collect(),
            finished_at: Utc::now(),
        })
    }

    fn require(&self, allowed: bool, action: &str) -> Result<()> {
        if allowed {
            Ok(())
        } else {
            Err(GameError::InvalidAction {
                action: action.to_string(),
                phase: self.phase().to_string(),
            })
        }
    }
}

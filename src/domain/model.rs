use crate::utils::error::{GameError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card rank. Serialized the way the deck service spells it in the `value` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub fn api_value(&self) -> &'static str {
        match self {
            Rank::Ace => "ACE",
            Rank::Jack => "JACK",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
            numeric => numeric.label(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl FromStr for Rank {
    type Err = GameError;

    fn from_str(value: &str) -> Result<Self> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.api_value() == value)
            .ok_or_else(|| GameError::UnknownCardValue {
                value: value.to_string(),
            })
    }
}

impl TryFrom<String> for Rank {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rank> for String {
    fn from(rank: Rank) -> Self {
        rank.api_value().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    /// Unknown suit names are tolerated; they only matter for display.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "SPADES" => Some(Suit::Spades),
            "HEARTS" => Some(Suit::Hearts),
            "DIAMONDS" => Some(Suit::Diamonds),
            "CLUBS" => Some(Suit::Clubs),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suit: Option<Suit>,
}

impl Card {
    pub fn new(rank: Rank, image: impl Into<String>) -> Self {
        Self {
            rank,
            image: image.into(),
            code: None,
            suit: None,
        }
    }

    pub fn with_suit(mut self, suit: Suit) -> Self {
        self.suit = Some(suit);
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn label(&self) -> String {
        match self.suit {
            Some(suit) => format!("{}{}", self.rank.label(), suit.symbol()),
            None => self.rank.label().to_string(),
        }
    }
}

/// Cards held by one party. Append-only: every addition yields a new hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cards(&self, cards: impl IntoIterator<Item = Card>) -> Self {
        let mut next = self.cards.clone();
        next.extend(cards);
        Self { cards: next }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Opaque `deck_id` handed out by the deck service for one shuffled deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckHandle(String);

impl DeckHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeckHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Party {
    House,
    Player,
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::House => f.write_str("House"),
            Party::Player => f.write_str("Player"),
        }
    }
}

/// Outcome of one finished game, emitted once when the player stands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub winner: Party,
    pub house_score: u32,
    pub player_score: u32,
    pub house_cards: Vec<String>,
    pub player_cards: Vec<String>,
    pub finished_at: DateTime<Utc>,
}

pub mod game;
pub mod score;
pub mod setup;

pub use crate::domain::model::{Card, DeckHandle, Hand, Party, Rank, RoundSummary, Suit};
pub use crate::domain::ports::{ConfigProvider, DeckService};
pub use crate::utils::error::Result;

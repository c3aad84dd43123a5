use crate::domain::model::{Card, DeckHandle};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote source of shuffled decks. The shuffle itself is trusted as-is.
#[async_trait]
pub trait DeckService: Send + Sync {
    async fn shuffle(&self, deck_count: u32) -> Result<DeckHandle>;
    async fn draw(&self, deck: &DeckHandle, count: usize) -> Result<Vec<Card>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn deck_count(&self) -> u32;
    fn starting_hand_size(&self) -> usize;
    fn timeout_seconds(&self) -> u64;
}

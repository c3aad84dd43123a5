use crate::domain::model::{Card, DeckHandle, Suit};
use crate::domain::ports::DeckService;
use crate::utils::error::{GameError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://deckofcardsapi.com/api";

#[derive(Debug, Deserialize)]
struct ShuffleResponse {
    success: bool,
    #[serde(default)]
    deck_id: Option<String>,
    #[serde(default)]
    remaining: Option<u32>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DrawResponse {
    success: bool,
    #[serde(default)]
    cards: Vec<ApiCard>,
    #[serde(default)]
    remaining: Option<u32>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiCard {
    value: String,
    image: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    suit: Option<String>,
}

impl TryFrom<ApiCard> for Card {
    type Error = GameError;

    fn try_from(card: ApiCard) -> Result<Self> {
        let rank = card.value.parse()?;
        Ok(Card {
            rank,
            image: card.image,
            code: card.code,
            suit: card.suit.as_deref().and_then(Suit::parse),
        })
    }
}

/// Client for the deck-of-cards JSON API.
#[derive(Debug, Clone)]
pub struct DeckApiClient {
    base_url: String,
    client: Client,
}

impl DeckApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(GameError::DeckServiceError {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }

    fn rejected(status: u16, error: Option<String>) -> GameError {
        GameError::DeckServiceError {
            status,
            message: error.unwrap_or_else(|| "request was not successful".to_string()),
        }
    }
}

#[async_trait::async_trait]
impl DeckService for DeckApiClient {
    async fn shuffle(&self, deck_count: u32) -> Result<DeckHandle> {
        let url = format!("{}/deck/new/shuffle/", self.base_url);
        let body: ShuffleResponse = self
            .get(&url, &[("deck_count", deck_count.to_string())])
            .await?;

        match (body.success, body.deck_id) {
            (true, Some(deck_id)) => {
                tracing::debug!(
                    "Deck {} ready ({} cards remaining)",
                    deck_id,
                    body.remaining.unwrap_or_default()
                );
                Ok(DeckHandle::new(deck_id))
            }
            (true, None) => Err(Self::rejected(200, Some("response had no deck_id".to_string()))),
            (false, _) => Err(Self::rejected(200, body.error)),
        }
    }

    async fn draw(&self, deck: &DeckHandle, count: usize) -> Result<Vec<Card>> {
        let url = format!("{}/deck/{}/draw/", self.base_url, deck.as_str());
        let body: DrawResponse = self.get(&url, &[("count", count.to_string())]).await?;

        if !body.success {
            return Err(Self::rejected(200, body.error));
        }
        tracing::debug!(
            "Drew {} card(s), {} remaining",
            body.cards.len(),
            body.remaining.unwrap_or_default()
        );

        body.cards.into_iter().map(Card::try_from).collect()
    }
}

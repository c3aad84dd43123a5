// Adapters layer: concrete implementations of the domain ports.

pub mod deck_api;

pub use deck_api::{DeckApiClient, DEFAULT_API_BASE_URL};

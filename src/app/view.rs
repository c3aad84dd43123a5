use crate::core::game::GameState;
use crate::core::score::{calculate_score, is_blackjack, is_bust};
use crate::domain::model::Hand;
use std::fmt;

const TITLE: &str = "Blackjack";
const HOUSE_LABEL: &str = "House";
const PLAYER_LABEL: &str = "Player";
const ACTIONS_LABEL: &str = "Player Actions";
const WINNER_LABEL: &str = "The winner is";

pub const HELP_TEXT: &str = "Commands: start (s), hit (h), stand (t), help (?), quit (q)";

/// Text view of the table. Scores only appear once a game started.
pub struct TableView<'a>(pub &'a GameState);

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;

        writeln!(f, "=== {} ===", TITLE)?;
        write_hand(f, HOUSE_LABEL, state.house(), state.is_started())?;
        write_hand(f, PLAYER_LABEL, state.player(), state.is_started())?;

        writeln!(
            f,
            "{}: {} {} {}",
            ACTIONS_LABEL,
            control("s", "Start Game", state.can_start()),
            control("h", "Hit", state.can_hit()),
            control("t", "Stand", state.can_stand()),
        )?;

        if let Some(winner) = state.winner() {
            writeln!(f, "{}: {}", WINNER_LABEL, winner)?;
        }

        Ok(())
    }
}

pub fn render(state: &GameState) -> String {
    TableView(state).to_string()
}

fn write_hand(f: &mut fmt::Formatter<'_>, label: &str, hand: &Hand, show_score: bool) -> fmt::Result {
    let cards = hand.cards();
    if show_score {
        let note = if is_blackjack(cards) {
            ", blackjack"
        } else if is_bust(cards) {
            ", bust"
        } else {
            ""
        };
        writeln!(f, "{} (score: {}{})", label, calculate_score(cards), note)?;
    } else {
        writeln!(f, "{}", label)?;
    }

    for card in cards {
        writeln!(f, "  {:<4} {}", card.label(), card.image)?;
    }
    Ok(())
}

fn control(key: &str, label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{}] {}", key, label)
    } else {
        format!("[-] {}", label)
    }
}

use crate::domain::model::{Card, Party, Rank};

pub const BLACKJACK_VALUE: u32 = 21;
pub const FACE_CARD_VALUE: u32 = 10;
/// Extra points an ace is worth when counted soft (11 instead of 1).
pub const SOFT_ACE_BONUS: u32 = 10;
pub const STARTING_HAND_SIZE: usize = 2;
/// A natural is an ace plus a ten-valued card, whatever the configured deal size.
pub const NATURAL_CARD_COUNT: usize = 2;

fn hard_value(rank: Rank) -> u32 {
    match rank {
        Rank::Ace => 1,
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten => 10,
        Rank::Jack | Rank::Queen | Rank::King => FACE_CARD_VALUE,
    }
}

/// Best total for a hand: every ace starts at 1 and is promoted to 11
/// one at a time while the total stays at or under 21.
pub fn calculate_score(cards: &[Card]) -> u32 {
    let mut total = 0;
    let mut ace_count = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            ace_count += 1;
        }
        total += hard_value(card.rank);
    }

    for _ in 0..ace_count {
        if total + SOFT_ACE_BONUS <= BLACKJACK_VALUE {
            total += SOFT_ACE_BONUS;
        } else {
            break;
        }
    }

    total
}

pub fn is_bust(cards: &[Card]) -> bool {
    calculate_score(cards) > BLACKJACK_VALUE
}

pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == NATURAL_CARD_COUNT && calculate_score(cards) == BLACKJACK_VALUE
}

/// Decides a finished game. The house takes ties at any value and mutual busts.
pub fn calculate_winner(house: &[Card], player: &[Card]) -> Party {
    let house_score = calculate_score(house);
    let player_score = calculate_score(player);

    let house_bust = house_score > BLACKJACK_VALUE;
    let player_bust = player_score > BLACKJACK_VALUE;

    let player_wins = (house_bust && !player_bust)
        || (!player_bust && player_score > house_score)
        || (player_score == BLACKJACK_VALUE && house_score != BLACKJACK_VALUE);

    if player_wins {
        Party::Player
    } else {
        Party::House
    }
}

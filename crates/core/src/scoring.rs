use crate::{Card, Rank};

pub const JOKER_VALUE: u32 = 30;
pub const ACE_VALUE: u32 = 20;
pub const MONKEY_VALUE: u32 = 10;

/// Penalty points a card is worth when it is still in hand at the end of a
/// round.
pub fn value(card: Card) -> u32 {
    match card {
        Card::Joker => JOKER_VALUE,
        Card::Standard { rank: Rank::Ace, .. } => ACE_VALUE,
        Card::Standard { rank, .. } if rank.is_monkey() => MONKEY_VALUE,
        Card::Standard { rank, .. } => u32::from(rank.number()),
    }
}

pub fn hand_score(cards: &[Card]) -> u32 {
    cards.iter().copied().map(value).sum()
}

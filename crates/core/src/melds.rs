//! Pure predicates over card sequences: trios, straights, royal straights and
//! the checks used when cards are given to a lowered meld.

use crate::Card;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

pub const TRIO_LEN: usize = 3;
pub const STRAIGHT_LEN: usize = 4;
pub const ROYAL_STRAIGHT_LEN: usize = 13;
pub const MAX_JOKERS_PER_MELD: usize = 1;

/// Rank positions wrap around after the king, so K, A, 2 is a run.
const RUN_MODULUS: i32 = 13;
/// Two jokers this close (or closer) in a run are rejected.
const MIN_JOKER_DISTANCE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeldKind {
    Trio,
    Straight,
    RoyalStraight,
}

impl MeldKind {
    pub fn id(self) -> &'static str {
        match self {
            MeldKind::Trio => "trio",
            MeldKind::Straight => "straight",
            MeldKind::RoyalStraight => "royal_straight",
        }
    }
}

impl fmt::Display for MeldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// End of a straight a card is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

pub fn count_jokers(cards: &[Card]) -> usize {
    cards.iter().filter(|card| card.is_joker()).count()
}

pub fn are_ranks_equal(cards: &[Card]) -> bool {
    let ranks: HashSet<_> = cards.iter().filter_map(Card::rank).collect();
    ranks.len() <= 1
}

/// Every non-joker card at position `n` must sit on the same run slot
/// `(rank - n) mod 13`; jokers stand in for whatever rank their position needs.
pub fn are_ranks_consecutive(cards: &[Card]) -> bool {
    let slots: HashSet<i32> = cards
        .iter()
        .enumerate()
        .filter_map(|(n, card)| {
            let rank = i32::from(card.rank()?.number());
            Some((rank - n as i32).rem_euclid(RUN_MODULUS))
        })
        .collect();
    slots.len() <= 1
}

pub fn are_suits_equal(cards: &[Card]) -> bool {
    let suits: HashSet<_> = cards.iter().filter_map(Card::suit).collect();
    suits.len() <= 1
}

pub fn is_trio(cards: &[Card]) -> bool {
    cards.len() == TRIO_LEN
        && are_ranks_equal(cards)
        && count_jokers(cards) <= MAX_JOKERS_PER_MELD
}

pub fn is_straight(cards: &[Card]) -> bool {
    cards.len() == STRAIGHT_LEN
        && are_suits_equal(cards)
        && are_ranks_consecutive(cards)
        && count_jokers(cards) <= MAX_JOKERS_PER_MELD
}

/// Unlike trios and straights, the order the cards come in does not matter:
/// they are sorted by rank (jokers first) before the run is checked.
pub fn is_royal_straight(cards: &[Card]) -> bool {
    let sorted = sorted_by_rank(cards);
    sorted.len() == ROYAL_STRAIGHT_LEN
        && are_suits_equal(&sorted)
        && are_ranks_consecutive(&sorted)
        && count_jokers(&sorted) <= MAX_JOKERS_PER_MELD
}

pub fn sorted_by_rank(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(Card::rank_number);
    sorted
}

pub fn is_meld(kind: MeldKind, cards: &[Card]) -> bool {
    match kind {
        MeldKind::Trio => is_trio(cards),
        MeldKind::Straight => is_straight(cards),
        MeldKind::RoyalStraight => is_royal_straight(cards),
    }
}

pub fn classify(cards: &[Card]) -> Option<MeldKind> {
    [MeldKind::Trio, MeldKind::Straight, MeldKind::RoyalStraight]
        .into_iter()
        .find(|kind| is_meld(*kind, cards))
}

pub fn has_jokers_too_close(cards: &[Card]) -> bool {
    let mut last_joker: Option<usize> = None;
    for (n, card) in cards.iter().enumerate() {
        if !card.is_joker() {
            continue;
        }
        if let Some(last) = last_joker {
            if n - last <= MIN_JOKER_DISTANCE {
                return true;
            }
        }
        last_joker = Some(n);
    }
    false
}

/// Lowered trios keep growing past three cards as long as the ranks match.
pub fn can_give_to_trio(card: Card, trio: &[Card]) -> bool {
    let mut cards = trio.to_vec();
    cards.push(card);
    are_ranks_equal(&cards)
}

pub fn can_give_to_straight_at_left(card: Card, straight: &[Card]) -> bool {
    let mut cards = Vec::with_capacity(straight.len() + 1);
    cards.push(card);
    cards.extend_from_slice(straight);
    is_extended_run(&cards)
}

pub fn can_give_to_straight_at_right(card: Card, straight: &[Card]) -> bool {
    let mut cards = straight.to_vec();
    cards.push(card);
    is_extended_run(&cards)
}

pub fn can_give_to_straight(card: Card, straight: &[Card], side: Side) -> bool {
    match side {
        Side::Left => can_give_to_straight_at_left(card, straight),
        Side::Right => can_give_to_straight_at_right(card, straight),
    }
}

fn is_extended_run(cards: &[Card]) -> bool {
    !has_jokers_too_close(cards) && are_suits_equal(cards) && are_ranks_consecutive(cards)
}

/// Multiset containment: no card appears in `subset` more often than in
/// `superset`.
pub fn is_card_subset(subset: &[Card], superset: &[Card]) -> bool {
    let available = card_counts(superset);
    card_counts(subset)
        .into_iter()
        .all(|(card, needed)| available.get(&card).copied().unwrap_or(0) >= needed)
}

/// Same cards, same number of times each, in any order.
pub fn is_same_cards(a: &[Card], b: &[Card]) -> bool {
    a.len() == b.len() && is_card_subset(a, b)
}

pub fn card_counts(cards: &[Card]) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}

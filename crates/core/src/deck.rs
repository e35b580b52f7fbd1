use crate::{Card, Rank, RngState, Suit};

pub const JOKERS_PER_DECK: usize = 2;
pub const DECK_SIZE: usize = 52 + JOKERS_PER_DECK;

/// One deck in its fixed, unshuffled order: every rank in all four suits,
/// followed by the two jokers.
pub fn create_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards.extend([Card::Joker; JOKERS_PER_DECK]);
    cards
}

/// The shared piles of a round: the face-down stack and the face-up well.
/// Both are drawn from the tail.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub stack: Vec<Card>,
    pub well: Vec<Card>,
}

impl Deck {
    /// `decks` concatenated decks, shuffled once.
    pub fn shuffled(decks: usize, rng: &mut RngState) -> Self {
        let mut stack = Vec::with_capacity(decks * DECK_SIZE);
        for _ in 0..decks {
            stack.extend(create_deck());
        }
        rng.shuffle(&mut stack);
        Self {
            stack,
            well: Vec::new(),
        }
    }

    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(card) = self.stack.pop() {
                cards.push(card);
            } else {
                break;
            }
        }
        cards
    }

    pub fn peek_well(&self) -> Option<Card> {
        self.well.last().copied()
    }

    pub fn pop_well(&mut self) -> Option<Card> {
        self.well.pop()
    }

    pub fn pop_stack(&mut self) -> Option<Card> {
        self.stack.pop()
    }

    pub fn push_well(&mut self, card: Card) {
        self.well.push(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deck_has_54_cards_and_two_jokers() {
        let deck = create_deck();
        assert_eq!(deck.len(), 54);
        assert_eq!(deck.iter().filter(|card| card.is_joker()).count(), 2);
    }

    #[test]
    fn deck_covers_every_rank_and_suit() {
        let deck = create_deck();
        let ranks: HashSet<u8> = deck.iter().map(Card::rank_number).collect();
        assert_eq!(ranks.len(), 14);
        let suits: HashSet<Suit> = deck.iter().filter_map(Card::suit).collect();
        assert_eq!(suits.len(), 4);
    }

    #[test]
    fn rendering_round_trips() {
        for card in create_deck() {
            let parsed: Card = card.to_string().parse().expect("parse rendered card");
            assert_eq!(parsed, card);
        }
    }

    #[test]
    fn shuffled_deck_is_a_permutation() {
        let mut rng = RngState::from_seed(7);
        let deck = Deck::shuffled(2, &mut rng);
        assert_eq!(deck.stack.len(), 2 * DECK_SIZE);

        let mut expected: Vec<String> = create_deck()
            .into_iter()
            .chain(create_deck())
            .map(|card| card.to_string())
            .collect();
        let mut actual: Vec<String> = deck.stack.iter().map(|card| card.to_string()).collect();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn same_seed_same_order() {
        let a = Deck::shuffled(1, &mut RngState::from_seed(99));
        let b = Deck::shuffled(1, &mut RngState::from_seed(99));
        assert_eq!(a.stack, b.stack);
    }

    #[test]
    fn draw_stops_when_stack_runs_out() {
        let mut deck = Deck {
            stack: create_deck(),
            well: Vec::new(),
        };
        assert_eq!(deck.draw_cards(50).len(), 50);
        assert_eq!(deck.draw_cards(10).len(), 4);
        assert!(deck.pop_stack().is_none());
    }
}

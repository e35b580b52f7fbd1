use super::*;
use crate::config::{ensure_enough_cards, validate_players};
use crate::{RngState, SetupError, HAND_SIZE};
use tracing::info;

impl Round {
    /// Shuffles `decks` decks and deals twelve cards to each player, one card
    /// to the well and the rest to the stack.
    pub fn new(
        rule: RoundRule,
        players: usize,
        decks: usize,
        first_turn: usize,
        rng: &mut RngState,
    ) -> Result<Self, SetupError> {
        validate_players(players)?;
        check_first_turn(first_turn, players)?;
        if decks == 0 {
            return Err(SetupError::NoDecks);
        }
        ensure_enough_cards(players, decks)?;

        let mut deck = Deck::shuffled(decks, rng);
        let hands: Vec<Vec<Card>> = (0..players).map(|_| deck.draw_cards(HAND_SIZE)).collect();
        let well = deck.draw_cards(1);
        deck.well = well;
        info!(%rule, players, decks, first_turn, seed = rng.seed(), "round dealt");
        Ok(Self::from_zones(rule, deck, hands, first_turn))
    }

    /// Builds a round from explicit zones, skipping the shuffle.
    pub fn from_deal(rule: RoundRule, first_turn: usize, deal: Deal) -> Result<Self, SetupError> {
        deal.validate()?;
        let players = deal.hands.len();
        check_first_turn(first_turn, players)?;
        let deck = Deck {
            stack: deal.stack,
            well: deal.well,
        };
        info!(%rule, players, first_turn, "round set up from a fixed deal");
        Ok(Self::from_zones(rule, deck, deal.hands, first_turn))
    }

    fn from_zones(rule: RoundRule, deck: Deck, hands: Vec<Vec<Card>>, first_turn: usize) -> Self {
        let players = hands.len();
        Self {
            rule,
            deck,
            hands,
            lowered: vec![LoweredMelds::default(); players],
            player_in_turn: first_turn,
            card_taken: false,
            played_first_turn: vec![false; players],
            did_lower: vec![false; players],
            scores: None,
        }
    }

    pub fn rule(&self) -> RoundRule {
        self.rule
    }

    pub fn nr_players(&self) -> usize {
        self.hands.len()
    }

    pub fn player_in_turn(&self) -> usize {
        self.player_in_turn
    }

    pub fn card_taken(&self) -> bool {
        self.card_taken
    }

    pub fn played_first_turn(&self, player: usize) -> bool {
        self.played_first_turn.get(player).copied().unwrap_or(false)
    }

    pub fn did_lower(&self, player: usize) -> bool {
        self.did_lower.get(player).copied().unwrap_or(false)
    }

    /// The only card of the well that can be taken.
    pub fn peek_well_card(&self) -> Option<Card> {
        self.deck.peek_well()
    }

    pub fn well(&self) -> &[Card] {
        &self.deck.well
    }

    pub fn stack_len(&self) -> usize {
        self.deck.stack.len()
    }

    pub fn hands(&self) -> &[Vec<Card>] {
        &self.hands
    }

    pub fn hand(&self, player: usize) -> Option<&[Card]> {
        self.hands.get(player).map(Vec::as_slice)
    }

    pub fn lowered(&self, player: usize) -> Option<&LoweredMelds> {
        self.lowered.get(player)
    }

    pub fn meld(&self, meld: MeldRef) -> Option<&[Card]> {
        self.lowered
            .get(meld.player)?
            .melds(meld.kind)
            .get(meld.index)
            .map(Vec::as_slice)
    }

    /// Every card of the round, whatever zone it is in.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = Vec::new();
        cards.extend_from_slice(&self.deck.stack);
        cards.extend_from_slice(&self.deck.well);
        for hand in &self.hands {
            cards.extend_from_slice(hand);
        }
        for melds in &self.lowered {
            cards.extend(melds.cards().copied());
        }
        cards
    }

    pub(super) fn ensure_in_play(&self) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::RoundOver);
        }
        Ok(())
    }

    pub(super) fn ensure_card_taken(&self) -> Result<(), MoveError> {
        if !self.card_taken {
            return Err(MoveError::NoCardTaken(self.player_in_turn));
        }
        Ok(())
    }

    pub(super) fn ensure_in_hand(&self, card: Card) -> Result<(), RuleViolation> {
        let player = self.player_in_turn;
        if !self.hands[player].contains(&card) {
            return Err(RuleViolation::CardNotInHand { card, player });
        }
        Ok(())
    }

    /// Removes one occurrence of `card` from the hand of the player in turn.
    pub(super) fn remove_from_hand(&mut self, card: Card) {
        let hand = &mut self.hands[self.player_in_turn];
        if let Some(pos) = hand.iter().position(|held| *held == card) {
            hand.remove(pos);
        }
    }
}

fn check_first_turn(first_turn: usize, players: usize) -> Result<(), SetupError> {
    if first_turn >= players {
        return Err(SetupError::InvalidFirstTurn {
            first_turn,
            players,
        });
    }
    Ok(())
}

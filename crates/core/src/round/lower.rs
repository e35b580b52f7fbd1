use super::*;
use crate::{format_cards, is_card_subset, is_meld, sorted_by_rank, Event, EventBus};
use tracing::debug;

const MELD_KINDS: [MeldKind; 3] = [MeldKind::Trio, MeldKind::Straight, MeldKind::RoyalStraight];

impl Round {
    /// The player in turn puts down the melds this round asks for. Everything
    /// is checked before any card leaves the hand. Does not end the turn.
    pub fn lower(&mut self, melds: LoweredMelds, events: &mut EventBus) -> Result<(), RoundError> {
        self.ensure_in_play()?;
        self.ensure_card_taken()?;
        let player = self.player_in_turn;
        if !self.played_first_turn[player] {
            return Err(MoveError::FirstTurn(player).into());
        }
        if self.did_lower[player] {
            return Err(RuleViolation::AlreadyLowered(player).into());
        }
        for kind in MELD_KINDS {
            self.check_melds(kind, melds.melds(kind))?;
        }
        let cards: Vec<Card> = melds.cards().copied().collect();
        if !is_card_subset(&cards, &self.hands[player]) {
            return Err(RuleViolation::CardsNotInHand(player).into());
        }

        for card in &cards {
            self.remove_from_hand(*card);
        }
        let mut melds = melds;
        for royal in &mut melds.royal_straights {
            *royal = sorted_by_rank(royal);
        }
        self.lowered[player] = melds;
        self.did_lower[player] = true;
        debug!(player, cards = cards.len(), "melds lowered");
        events.push(Event::Lowered {
            player,
            cards: cards.len(),
        });
        self.announce_if_over(events);
        Ok(())
    }

    fn check_melds(&self, kind: MeldKind, melds: &[Vec<Card>]) -> Result<(), RuleViolation> {
        if let Some(invalid) = melds.iter().find(|cards| !is_meld(kind, cards)) {
            return Err(RuleViolation::InvalidMeld {
                kind,
                cards: format_cards(invalid),
            });
        }
        let required = self.rule.required(kind);
        if melds.len() != required {
            return Err(RuleViolation::WrongMeldCount {
                kind,
                required,
                provided: melds.len(),
            });
        }
        Ok(())
    }
}

use super::*;
use crate::{
    can_give_to_straight_at_left, can_give_to_straight_at_right, can_give_to_trio, format_cards,
    is_same_cards, Event, EventBus, Side,
};
use tracing::debug;

/// Kinds of lowered melds that accept extra cards.
const GIVABLE_KINDS: [MeldKind; 2] = [MeldKind::Trio, MeldKind::Straight];

impl Round {
    /// The player in turn adds `card` to one of `target`'s lowered melds,
    /// named by its cards. Returns the end the card went to.
    pub fn give_to(
        &mut self,
        card: Card,
        target: usize,
        lowered_set: &[Card],
        side: Option<Side>,
        events: &mut EventBus,
    ) -> Result<Side, RoundError> {
        self.ensure_can_give(card)?;
        let meld = self.find_meld(target, lowered_set)?;
        self.place(card, meld, side, events)
    }

    /// Same as [`Round::give_to`], addressing the meld by position.
    pub fn give_to_meld(
        &mut self,
        card: Card,
        meld: MeldRef,
        side: Option<Side>,
        events: &mut EventBus,
    ) -> Result<Side, RoundError> {
        self.ensure_can_give(card)?;
        if meld.player >= self.nr_players() {
            return Err(RuleViolation::UnknownPlayer(meld.player).into());
        }
        if !GIVABLE_KINDS.contains(&meld.kind) || self.meld(meld).is_none() {
            return Err(RuleViolation::UnknownLoweredSet {
                player: meld.player,
                cards: format!("{} #{}", meld.kind, meld.index),
            }
            .into());
        }
        self.place(card, meld, side, events)
    }

    fn ensure_can_give(&self, card: Card) -> Result<(), RoundError> {
        self.ensure_in_play()?;
        self.ensure_card_taken()?;
        let player = self.player_in_turn;
        if !self.did_lower[player] {
            return Err(MoveError::NotLowered(player).into());
        }
        self.ensure_in_hand(card)?;
        Ok(())
    }

    fn find_meld(&self, target: usize, lowered_set: &[Card]) -> Result<MeldRef, RuleViolation> {
        let melds = self
            .lowered
            .get(target)
            .ok_or(RuleViolation::UnknownPlayer(target))?;
        GIVABLE_KINDS
            .into_iter()
            .find_map(|kind| {
                melds
                    .melds(kind)
                    .iter()
                    .position(|cards| is_same_cards(lowered_set, cards))
                    .map(|index| MeldRef {
                        player: target,
                        kind,
                        index,
                    })
            })
            .ok_or_else(|| RuleViolation::UnknownLoweredSet {
                player: target,
                cards: format_cards(lowered_set),
            })
    }

    fn place(
        &mut self,
        card: Card,
        meld: MeldRef,
        side: Option<Side>,
        events: &mut EventBus,
    ) -> Result<Side, RoundError> {
        let cards = &self.lowered[meld.player].melds(meld.kind)[meld.index];
        let placed = if meld.kind == MeldKind::Trio && can_give_to_trio(card, cards) {
            Some(Side::Right)
        } else if side != Some(Side::Right) && can_give_to_straight_at_left(card, cards) {
            Some(Side::Left)
        } else if side != Some(Side::Left) && can_give_to_straight_at_right(card, cards) {
            Some(Side::Right)
        } else {
            None
        };
        let Some(placed) = placed else {
            return Err(RuleViolation::CannotGive {
                card,
                player: meld.player,
                cards: format_cards(cards),
            }
            .into());
        };

        self.remove_from_hand(card);
        let cards = &mut self.lowered[meld.player].melds_mut(meld.kind)[meld.index];
        match placed {
            Side::Left => cards.insert(0, card),
            Side::Right => cards.push(card),
        }
        let player = self.player_in_turn;
        debug!(player, target = meld.player, kind = %meld.kind, %card, ?placed, "card given");
        events.push(Event::CardGiven {
            player,
            target: meld.player,
            kind: meld.kind,
            index: meld.index,
            side: placed,
            card,
        });
        self.announce_if_over(events);
        Ok(placed)
    }
}

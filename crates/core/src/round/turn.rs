use super::*;
use crate::{DrawSource, Event, EventBus};
use tracing::debug;

impl Round {
    /// The player in turn takes the top card of the well.
    pub fn take_from_well(&mut self, events: &mut EventBus) -> Result<Card, RoundError> {
        self.take(DrawSource::Well, events)
    }

    /// The player in turn takes the top card of the stack.
    pub fn take_from_stack(&mut self, events: &mut EventBus) -> Result<Card, RoundError> {
        self.take(DrawSource::Stack, events)
    }

    fn take(&mut self, source: DrawSource, events: &mut EventBus) -> Result<Card, RoundError> {
        self.ensure_in_play()?;
        if self.card_taken {
            return Err(MoveError::CardAlreadyTaken.into());
        }
        let card = match source {
            DrawSource::Well => self.deck.pop_well().ok_or(MoveError::WellEmpty)?,
            DrawSource::Stack => self.deck.pop_stack().ok_or(MoveError::StackEmpty)?,
        };

        let player = self.player_in_turn;
        self.hands[player].push(card);
        self.card_taken = true;
        debug!(player, ?source, %card, "card taken");
        events.push(Event::CardTaken {
            player,
            source,
            card,
        });
        Ok(card)
    }

    /// Ends the turn by dropping `card` from hand onto the well.
    pub fn drop_to_well(&mut self, card: Card, events: &mut EventBus) -> Result<(), RoundError> {
        self.ensure_in_play()?;
        self.ensure_card_taken()?;
        self.ensure_in_hand(card)?;

        let player = self.player_in_turn;
        self.remove_from_hand(card);
        self.deck.push_well(card);

        self.card_taken = false;
        self.played_first_turn[player] = true;
        self.player_in_turn = (player + 1) % self.nr_players();
        debug!(player, %card, next = self.player_in_turn, "card dropped to the well");
        events.push(Event::CardDropped { player, card });
        events.push(Event::TurnPassed {
            from: player,
            to: self.player_in_turn,
        });
        self.announce_if_over(events);
        Ok(())
    }
}

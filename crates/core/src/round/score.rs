use super::*;
use crate::{hand_score, Event, EventBus};
use tracing::info;

impl Round {
    /// A round ends as soon as any hand is empty.
    pub fn is_over(&self) -> bool {
        self.hands.iter().any(Vec::is_empty)
    }

    /// The first player left without cards.
    pub fn winner(&self) -> Option<usize> {
        self.hands.iter().position(Vec::is_empty)
    }

    /// Penalty points of every player, from the cards left in hand.
    pub fn calculate_scores(&mut self, events: &mut EventBus) -> Result<Vec<u32>, RoundError> {
        if !self.is_over() {
            return Err(MoveError::RoundNotOver.into());
        }
        let scores: Vec<u32> = self.hands.iter().map(|hand| hand_score(hand)).collect();
        info!(?scores, "round scored");
        events.push(Event::ScoresCalculated {
            scores: scores.clone(),
        });
        self.scores = Some(scores.clone());
        Ok(scores)
    }

    pub fn scores(&self) -> Option<&[u32]> {
        self.scores.as_deref()
    }

    pub(super) fn announce_if_over(&self, events: &mut EventBus) {
        if let Some(winner) = self.winner() {
            info!(winner, rule = %self.rule, "round over");
            events.push(Event::RoundOver { winner });
        }
    }
}

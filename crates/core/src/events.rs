use crate::{Card, MeldKind, RoundRule, Side};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DrawSource {
    Stack,
    Well,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    RoundStarted {
        rule: RoundRule,
        players: usize,
        first_turn: usize,
    },
    CardTaken {
        player: usize,
        source: DrawSource,
        card: Card,
    },
    Lowered {
        player: usize,
        cards: usize,
    },
    CardGiven {
        player: usize,
        target: usize,
        kind: MeldKind,
        index: usize,
        side: Side,
        card: Card,
    },
    CardDropped { player: usize, card: Card },
    TurnPassed { from: usize, to: usize },
    RoundOver { winner: usize },
    ScoresCalculated { scores: Vec<u32> },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

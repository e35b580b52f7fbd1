use crate::config::validate_players;
use crate::{Card, Deck, MeldKind, RoundRule, SetupError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod give;
mod lower;
mod score;
mod state;
mod turn;

/// The move is not allowed in the current turn state. The caller should pick
/// another move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cannot take another card, already took one")]
    CardAlreadyTaken,
    #[error("player {0} must take a card first")]
    NoCardTaken(usize),
    #[error("player {0} cannot lower during the first turn")]
    FirstTurn(usize),
    #[error("player {0} hasn't lowered yet")]
    NotLowered(usize),
    #[error("the stack is empty")]
    StackEmpty,
    #[error("the well is empty")]
    WellEmpty,
    #[error("the round is over")]
    RoundOver,
    #[error("the round is not over yet")]
    RoundNotOver,
}

/// The move is allowed now, but the cards given with it break a rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("player {0} already lowered")]
    AlreadyLowered(usize),
    #[error("invalid {kind} in {cards}")]
    InvalidMeld { kind: MeldKind, cards: String },
    #[error("{required} {kind}s are needed, {provided} provided")]
    WrongMeldCount {
        kind: MeldKind,
        required: usize,
        provided: usize,
    },
    #[error("not all cards are in player {0}'s hand")]
    CardsNotInHand(usize),
    #[error("{card} is not in player {player}'s hand")]
    CardNotInHand { card: Card, player: usize },
    #[error("there is no player {0}")]
    UnknownPlayer(usize),
    #[error("{cards} is not one of player {player}'s lowered sets")]
    UnknownLoweredSet { player: usize, cards: String },
    #[error("cannot put {card} in the lowered set {cards} of player {player}")]
    CannotGive {
        card: Card,
        player: usize,
        cards: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),
    #[error("rule violation: {0}")]
    Rule(#[from] RuleViolation),
}

impl RoundError {
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, RoundError::InvalidMove(_))
    }

    pub fn is_rule_violation(&self) -> bool {
        matches!(self, RoundError::Rule(_))
    }
}

/// Melds one player put down. Also the argument of [`Round::lower`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoweredMelds {
    #[serde(default)]
    pub trios: Vec<Vec<Card>>,
    #[serde(default)]
    pub straights: Vec<Vec<Card>>,
    #[serde(default)]
    pub royal_straights: Vec<Vec<Card>>,
}

impl LoweredMelds {
    pub fn melds(&self, kind: MeldKind) -> &[Vec<Card>] {
        match kind {
            MeldKind::Trio => &self.trios,
            MeldKind::Straight => &self.straights,
            MeldKind::RoyalStraight => &self.royal_straights,
        }
    }

    fn melds_mut(&mut self, kind: MeldKind) -> &mut Vec<Vec<Card>> {
        match kind {
            MeldKind::Trio => &mut self.trios,
            MeldKind::Straight => &mut self.straights,
            MeldKind::RoyalStraight => &mut self.royal_straights,
        }
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.trios
            .iter()
            .chain(&self.straights)
            .chain(&self.royal_straights)
            .flatten()
    }

    pub fn card_count(&self) -> usize {
        self.cards().count()
    }

    pub fn is_empty(&self) -> bool {
        self.card_count() == 0
    }
}

/// Addresses one lowered meld: whose it is, what it is and where it sits in
/// that player's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeldRef {
    pub player: usize,
    pub kind: MeldKind,
    pub index: usize,
}

/// Explicit card zones to start a round from instead of a shuffled deal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub hands: Vec<Vec<Card>>,
    #[serde(default)]
    pub well: Vec<Card>,
    #[serde(default)]
    pub stack: Vec<Card>,
}

impl Deal {
    /// Checks the player count and that the well has a card to take.
    pub fn validate(&self) -> Result<(), SetupError> {
        validate_players(self.hands.len())?;
        if self.well.is_empty() {
            return Err(SetupError::EmptyWell);
        }
        Ok(())
    }
}

/// One round of play. Owns the stack, the well, every hand and every lowered
/// meld until the round is over.
#[derive(Debug, Clone)]
pub struct Round {
    rule: RoundRule,
    deck: Deck,
    hands: Vec<Vec<Card>>,
    lowered: Vec<LoweredMelds>,
    player_in_turn: usize,
    card_taken: bool,
    played_first_turn: Vec<bool>,
    did_lower: Vec<bool>,
    scores: Option<Vec<u32>>,
}

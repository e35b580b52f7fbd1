use crate::{MeldKind, DECK_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
pub const HAND_SIZE: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("{0} players cannot play, need between 2 and 4")]
    InvalidPlayerCount(usize),
    #[error("player {first_turn} cannot start a round of {players} players")]
    InvalidFirstTurn { first_turn: usize, players: usize },
    #[error("at least one deck is needed")]
    NoDecks,
    #[error("the game has no rounds configured")]
    EmptySchedule,
    #[error("{available} cards are not enough to deal {needed}")]
    NotEnoughCards { needed: usize, available: usize },
    #[error("the well cannot start empty")]
    EmptyWell,
}

/// How many melds of each kind a player must lower in one round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundRule {
    #[serde(default)]
    pub trios: usize,
    #[serde(default)]
    pub straights: usize,
    #[serde(default)]
    pub royal_straights: usize,
}

impl RoundRule {
    pub const fn new(trios: usize, straights: usize, royal_straights: usize) -> Self {
        Self {
            trios,
            straights,
            royal_straights,
        }
    }

    pub fn required(&self, kind: MeldKind) -> usize {
        match kind {
            MeldKind::Trio => self.trios,
            MeldKind::Straight => self.straights,
            MeldKind::RoyalStraight => self.royal_straights,
        }
    }
}

impl fmt::Display for RoundRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.royal_straights > 0 {
            f.write_str("ER")
        } else {
            write!(f, "{}T {}E", self.trios, self.straights)
        }
    }
}

pub const STANDARD_ROUNDS: [RoundRule; 9] = [
    RoundRule::new(2, 0, 0),
    RoundRule::new(1, 1, 0),
    RoundRule::new(0, 2, 0),
    RoundRule::new(3, 0, 0),
    RoundRule::new(2, 1, 0),
    RoundRule::new(1, 2, 0),
    RoundRule::new(4, 0, 0),
    RoundRule::new(0, 3, 0),
    RoundRule::new(0, 0, 1),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub players: usize,
    #[serde(default = "default_decks")]
    pub decks: usize,
    #[serde(default)]
    pub first_turn: usize,
    #[serde(default = "default_rounds")]
    pub rounds: Vec<RoundRule>,
}

fn default_decks() -> usize {
    2
}

fn default_rounds() -> Vec<RoundRule> {
    STANDARD_ROUNDS.to_vec()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: MIN_PLAYERS,
            decks: default_decks(),
            first_turn: 0,
            rounds: default_rounds(),
        }
    }
}

impl GameConfig {
    pub fn with_players(players: usize) -> Self {
        Self {
            players,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        validate_players(self.players)?;
        if self.first_turn >= self.players {
            return Err(SetupError::InvalidFirstTurn {
                first_turn: self.first_turn,
                players: self.players,
            });
        }
        if self.decks == 0 {
            return Err(SetupError::NoDecks);
        }
        if self.rounds.is_empty() {
            return Err(SetupError::EmptySchedule);
        }
        ensure_enough_cards(self.players, self.decks)
    }
}

pub(crate) fn validate_players(players: usize) -> Result<(), SetupError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
        Ok(())
    } else {
        Err(SetupError::InvalidPlayerCount(players))
    }
}

pub(crate) fn ensure_enough_cards(players: usize, decks: usize) -> Result<(), SetupError> {
    let needed = players * HAND_SIZE + 1;
    let available = decks * DECK_SIZE;
    if available < needed {
        return Err(SetupError::NotEnoughCards { needed, available });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.rounds.len(), 9);
        assert_eq!(config.rounds[8].required(MeldKind::RoyalStraight), 1);
    }

    #[test]
    fn rejects_bad_player_counts() {
        assert_eq!(
            GameConfig::with_players(1).validate(),
            Err(SetupError::InvalidPlayerCount(1))
        );
        assert_eq!(
            GameConfig::with_players(5).validate(),
            Err(SetupError::InvalidPlayerCount(5))
        );
        assert_eq!(GameConfig::with_players(4).validate(), Ok(()));
    }

    #[test]
    fn rejects_first_turn_outside_table() {
        let config = GameConfig {
            first_turn: 3,
            ..GameConfig::with_players(3)
        };
        assert_eq!(
            config.validate(),
            Err(SetupError::InvalidFirstTurn {
                first_turn: 3,
                players: 3
            })
        );
    }

    #[test]
    fn rejects_empty_schedule_and_zero_decks() {
        let config = GameConfig {
            rounds: Vec::new(),
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(SetupError::EmptySchedule));
        let config = GameConfig {
            decks: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(SetupError::NoDecks));
    }

    #[test]
    fn round_labels() {
        assert_eq!(RoundRule::new(2, 1, 0).to_string(), "2T 1E");
        assert_eq!(RoundRule::new(0, 0, 1).to_string(), "ER");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"players": 3}"#).unwrap();
        assert_eq!(config.decks, 2);
        assert_eq!(config.first_turn, 0);
        assert_eq!(config.rounds, STANDARD_ROUNDS.to_vec());
        let rule: RoundRule = serde_json::from_str(r#"{"straights": 2}"#).unwrap();
        assert_eq!(rule, RoundRule::new(0, 2, 0));
    }
}

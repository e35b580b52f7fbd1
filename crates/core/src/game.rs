use crate::{Deal, Event, EventBus, GameConfig, RngState, Round, RoundError, RoundRule, SetupError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no more rounds available, cannot go to a next round")]
    NoMoreRounds,
    #[error("round {0} is still being played")]
    RoundInProgress(usize),
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error(transparent)]
    Round(#[from] RoundError),
}

/// Scores of one finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub rule: RoundRule,
    pub first_turn: usize,
    pub winner: Option<usize>,
    pub scores: Vec<u32>,
}

/// Plays the configured rounds one after another, rotating who starts.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    rng: RngState,
    next_round: usize,
    first_turn: usize,
    current: Option<Round>,
    history: Vec<RoundSummary>,
}

impl Game {
    pub fn new(config: GameConfig, rng: RngState) -> Result<Self, SetupError> {
        config.validate()?;
        let first_turn = config.first_turn;
        Ok(Self {
            config,
            rng,
            next_round: 0,
            first_turn,
            current: None,
            history: Vec::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of rounds started so far.
    pub fn rounds_played(&self) -> usize {
        self.next_round
    }

    /// Who starts the next round.
    pub fn next_first_turn(&self) -> usize {
        self.first_turn
    }

    /// True once every configured round has been dealt and the last one is
    /// over.
    pub fn is_over(&self) -> bool {
        self.next_round >= self.config.rounds.len()
            && self.current.as_ref().map_or(true, Round::is_over)
    }

    /// Closes the current round, if any, and deals the next one.
    pub fn go_to_next_round(&mut self, events: &mut EventBus) -> Result<&mut Round, GameError> {
        let players = self.config.players;
        let decks = self.config.decks;
        self.start_round(events, |rule, first_turn, rng| {
            Round::new(rule, players, decks, first_turn, rng)
        })
    }

    /// Like [`Game::go_to_next_round`] but plays the next rule on a fixed deal
    /// instead of a shuffled one. The deal must have one hand per player.
    pub fn deal_next_round(
        &mut self,
        deal: Deal,
        events: &mut EventBus,
    ) -> Result<&mut Round, GameError> {
        if deal.hands.len() != self.config.players {
            return Err(SetupError::InvalidPlayerCount(deal.hands.len()).into());
        }
        self.start_round(events, |rule, first_turn, _| {
            Round::from_deal(rule, first_turn, deal)
        })
    }

    fn start_round<F>(&mut self, events: &mut EventBus, build: F) -> Result<&mut Round, GameError>
    where
        F: FnOnce(RoundRule, usize, &mut RngState) -> Result<Round, SetupError>,
    {
        if let Some(round) = self.current.as_ref() {
            if !round.is_over() {
                return Err(GameError::RoundInProgress(self.next_round - 1));
            }
        }
        let rule = *self
            .config
            .rounds
            .get(self.next_round)
            .ok_or(GameError::NoMoreRounds)?;
        self.finish_current(events)?;

        let first_turn = self.first_turn;
        let round = build(rule, first_turn, &mut self.rng)?;
        info!(round = self.next_round, %rule, first_turn, "starting round");
        events.push(Event::RoundStarted {
            rule,
            players: self.config.players,
            first_turn,
        });
        self.next_round += 1;
        self.first_turn = (first_turn + 1) % self.config.players;
        Ok(self.current.insert(round))
    }

    /// Records the scores of the last round once it is over. Called by
    /// [`Game::go_to_next_round`]; call it directly after the final round.
    pub fn finish_current(&mut self, events: &mut EventBus) -> Result<(), GameError> {
        let Some(mut round) = self.current.take() else {
            return Ok(());
        };
        if !round.is_over() {
            let index = self.next_round - 1;
            self.current = Some(round);
            return Err(GameError::RoundInProgress(index));
        }
        let scores = match round.scores() {
            Some(scores) => scores.to_vec(),
            None => round.calculate_scores(events)?,
        };
        let first_turn = (self.first_turn + self.config.players - 1) % self.config.players;
        self.history.push(RoundSummary {
            rule: round.rule(),
            first_turn,
            winner: round.winner(),
            scores,
        });
        Ok(())
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.current.as_ref()
    }

    pub fn current_round_mut(&mut self) -> Option<&mut Round> {
        self.current.as_mut()
    }

    pub fn history(&self) -> &[RoundSummary] {
        &self.history
    }

    /// Accumulated penalty points per player over the finished rounds.
    pub fn totals(&self) -> Vec<u32> {
        let mut totals = vec![0; self.config.players];
        for summary in &self.history {
            for (total, score) in totals.iter_mut().zip(&summary.scores) {
                *total += score;
            }
        }
        totals
    }

    /// Players ordered from fewest to most penalty points.
    pub fn standings(&self) -> Vec<(usize, u32)> {
        let mut standings: Vec<(usize, u32)> = self.totals().into_iter().enumerate().collect();
        standings.sort_by_key(|(player, total)| (*total, *player));
        standings
    }
}

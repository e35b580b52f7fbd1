#![allow(dead_code)]

use carioca_core::{parse_cards, Card, Deal, EventBus, Round, RoundRule};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Installs a test subscriber once. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));
        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn c(notation: &str) -> Card {
    notation.parse().expect("valid card")
}

pub fn cs(notation: &str) -> Vec<Card> {
    parse_cards(notation).expect("valid cards")
}

/// Two player round with fixed hands; player 0 starts.
pub fn two_player_round(
    rule: RoundRule,
    hand0: &str,
    hand1: &str,
    well: &str,
    stack: &str,
) -> Round {
    init_logging();
    let deal = Deal {
        hands: vec![cs(hand0), cs(hand1)],
        well: cs(well),
        stack: cs(stack),
    };
    Round::from_deal(rule, 0, deal).expect("valid deal")
}

/// Both players take the well card and drop it straight back.
pub fn dummy_first_turns(round: &mut Round, events: &mut EventBus) {
    for _ in 0..round.nr_players() {
        let card = round.take_from_well(events).expect("take from well");
        round.drop_to_well(card, events).expect("drop to well");
    }
}

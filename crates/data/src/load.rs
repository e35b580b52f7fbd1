use anyhow::Context;
use carioca_core::{Deal, GameConfig};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Conventional name of the game configuration inside an assets directory.
pub const GAME_CONFIG_FILE: &str = "game.json";

pub fn load_game_config(path: &Path) -> anyhow::Result<GameConfig> {
    let raw = read(path)?;
    parse_game_config(&raw).with_context(|| format!("load {}", path.display()))
}

/// Parses and validates a game configuration. Missing fields fall back to the
/// defaults, so `{"players": 3}` is a complete config.
pub fn parse_game_config(raw: &str) -> anyhow::Result<GameConfig> {
    let config: GameConfig = parse_json(raw)?;
    config.validate().context("invalid game config")?;
    debug!(
        players = config.players,
        decks = config.decks,
        rounds = config.rounds.len(),
        "game config loaded"
    );
    Ok(config)
}

pub fn load_deal(path: &Path) -> anyhow::Result<Deal> {
    let raw = read(path)?;
    parse_deal(&raw).with_context(|| format!("load {}", path.display()))
}

/// Parses a scripted deal. Cards use their text notation (`"A♠"`, `"JOKER"`);
/// the stack is drawn from its end.
pub fn parse_deal(raw: &str) -> anyhow::Result<Deal> {
    let deal: Deal = parse_json(raw)?;
    deal.validate().context("invalid deal")?;
    debug!(
        players = deal.hands.len(),
        well = deal.well.len(),
        stack = deal.stack.len(),
        "deal loaded"
    );
    Ok(deal)
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

fn parse_json<T: DeserializeOwned>(raw: &str) -> anyhow::Result<T> {
    let value = serde_json::from_str(raw).context("parse json")?;
    Ok(value)
}

//! Carioca round engine. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod game;
pub mod melds;
pub mod rng;
pub mod round;
pub mod scoring;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use game::*;
pub use melds::*;
pub use rng::*;
pub use round::*;
pub use scoring::*;

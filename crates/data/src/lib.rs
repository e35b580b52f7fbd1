//! Loading and validation of game configuration and scripted deals.

pub mod load;

pub use load::*;

//! Core types: player identity, per-player counters, configuration.

pub mod config;
pub mod player;

pub use config::{GameConfig, MAX_PLAYERS};
pub use player::{Ledger, PlayerId, PlayerStats};

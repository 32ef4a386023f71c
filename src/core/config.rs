//! Game configuration and validation.
//!
//! A `GameConfig` carries the board dimensions, the player count, and the
//! per-player area quota. Validation happens once, at game construction;
//! everything downstream may rely on the values being in range.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Most players a single game supports.
///
/// Bounded by the render alphabet: `'1'..='9'` plus `'a'..='z'`.
pub const MAX_PLAYERS: u32 = 35;

/// Static parameters of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width (columns).
    pub width: u32,
    /// Board height (rows).
    pub height: u32,
    /// Number of players, 1..=[`MAX_PLAYERS`].
    pub players: u32,
    /// Most areas a single player may hold at once.
    pub area_quota: u32,
}

impl GameConfig {
    /// Create a configuration. Call [`GameConfig::validate`] (or construct
    /// the game through [`crate::Game::new`]) before relying on it.
    #[must_use]
    pub const fn new(width: u32, height: u32, players: u32, area_quota: u32) -> Self {
        Self {
            width,
            height,
            players,
            area_quota,
        }
    }

    /// Check every parameter is in range.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.players == 0 || self.players > MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount(self.players));
        }
        if self.area_quota == 0 {
            return Err(GameError::InvalidQuota);
        }
        Ok(())
    }

    /// Total number of board cells.
    #[must_use]
    pub const fn total_cells(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

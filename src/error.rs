//! Error types for construction and move validation.
//!
//! Construction failures never yield a partial game, and a rejected move
//! leaves the game state completely unmodified.

use crate::core::PlayerId;

/// Rejected game construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board dimensions must be nonzero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("player count must be between 1 and 35, got {0}")]
    InvalidPlayerCount(u32),

    #[error("area quota must be nonzero")]
    InvalidQuota,
}

/// Rejected move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("{0} is not part of this game")]
    UnknownPlayer(PlayerId),

    #[error("coordinate ({x}, {y}) is outside the board")]
    OutOfBounds { x: u32, y: u32 },

    #[error("cell ({x}, {y}) is already claimed")]
    Occupied { x: u32, y: u32 },

    #[error("{0} holds its full quota of areas and cannot start a new one")]
    QuotaExhausted(PlayerId),
}

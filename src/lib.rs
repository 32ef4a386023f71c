//! # territory
//!
//! A quota-bounded territory-claiming board game engine.
//!
//! Players take turns claiming empty cells on a rectangular board.
//! Orthogonally adjacent same-owner cells coalesce into connected *areas*,
//! and each player may hold at most a fixed quota of distinct areas at a
//! time. The engine tracks area membership incrementally: claiming a cell
//! next to several of a player's areas merges them, and a maintained
//! per-player boundary count answers "how many cells can this player still
//! reach?" in bounded time once the quota is exhausted.
//!
//! ## Design Principles
//!
//! 1. **Incremental accounting**: per-player counters are corrected after
//!    every accepted move, never recomputed from the grid.
//!
//! 2. **Eager relabeling**: fusing areas rewrites the merged region's tags
//!    immediately, so later tag comparisons are O(1).
//!
//! 3. **Atomic moves**: a rejected move returns before the first mutation
//!    and leaves the game unchanged.
//!
//! ## Modules
//!
//! - `core`: player identifiers, per-player counters, configuration
//! - `grid`: board storage and pure neighborhood probes
//! - `area`: placement classification and flood-fill merging
//! - `game`: the facade enforcing preconditions and serving queries
//! - `error`: construction and move rejection types
//!
//! ## Example
//!
//! ```
//! use territory::{Game, PlayerId};
//!
//! let mut game = Game::new(10, 10, 2, 3).unwrap();
//! let p1 = PlayerId::new(0);
//!
//! game.request_move(p1, 0, 0).unwrap();
//! assert_eq!(game.placed_cells(p1), 1);
//! assert_eq!(game.reachable_cells(p1), 99);
//! ```

pub mod area;
pub mod core;
pub mod error;
pub mod game;
pub mod grid;

// Re-export commonly used types
pub use crate::area::{Placement, NEIGHBOR_SLOTS};
pub use crate::core::{GameConfig, Ledger, PlayerId, PlayerStats, MAX_PLAYERS};
pub use crate::error::{GameError, MoveError};
pub use crate::game::Game;
pub use crate::grid::{AreaId, Cell, Grid, NeighborCoords};

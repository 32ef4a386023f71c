//! Game facade: move validation, the move algorithm, and read-only queries.
//!
//! ## Move processing
//!
//! A move request is validated against the grid and the ledger, classified
//! by the neighborhood probes, applied to the grid (including the flood-fill
//! relabel on fusion), and finally settled in the boundary accounting. A
//! rejected move returns before the first mutation, so the game is left
//! bit-for-bit unchanged.
//!
//! ## Concurrency
//!
//! Everything here is synchronous and single-threaded. A game that must
//! cross threads needs external mutual exclusion around the whole value; a
//! move mutates the grid and the ledger without atomicity between the two.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::area::{self, Placement};
use crate::core::{GameConfig, Ledger, PlayerId};
use crate::error::{GameError, MoveError};
use crate::grid::{AreaId, Grid};

/// A running game. Sole owner of its grid and ledger.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    ledger: Ledger,
}

impl Game {
    /// Create a game, validating every parameter.
    ///
    /// ```
    /// use territory::{Game, GameError};
    ///
    /// assert!(Game::new(10, 10, 2, 3).is_ok());
    /// assert_eq!(
    ///     Game::new(0, 0, 0, 0).unwrap_err(),
    ///     GameError::InvalidDimensions { width: 0, height: 0 }
    /// );
    /// ```
    pub fn new(width: u32, height: u32, players: u32, area_quota: u32) -> Result<Self, GameError> {
        Self::with_config(GameConfig::new(width, height, players, area_quota))
    }

    /// Create a game from a prebuilt configuration.
    pub fn with_config(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(config.width, config.height),
            ledger: Ledger::new(config.players as usize),
            config,
        })
    }

    // === Moves ===

    /// Claim `(x, y)` for `player`.
    ///
    /// Fails without touching the game if the player is unknown, the
    /// coordinate is off the board, the cell is taken, or the move would
    /// start a new area while the player's quota is exhausted.
    pub fn request_move(&mut self, player: PlayerId, x: u32, y: u32) -> Result<(), MoveError> {
        if !self.ledger.contains(player) {
            return Err(MoveError::UnknownPlayer(player));
        }
        if !self.grid.in_bounds(x, y) {
            return Err(MoveError::OutOfBounds { x, y });
        }
        if self.grid.get(x, y).owner.is_some() {
            return Err(MoveError::Occupied { x, y });
        }

        let around = self.grid.adjacent_count(Some(player), x, y);
        let tags = self.grid.neighbor_tags(player, x, y);

        match area::classify(&tags, around) {
            Placement::Isolated => {
                if self.ledger[player].areas == self.config.area_quota {
                    trace!(%player, x, y, "isolated placement rejected: quota exhausted");
                    return Err(MoveError::QuotaExhausted(player));
                }
                let stats = &mut self.ledger[player];
                stats.areas += 1;
                let tag = AreaId::new(stats.areas);
                self.grid.set(x, y, player, tag);
            }
            Placement::Extend { tag, redundant } => {
                self.grid.set(x, y, player, tag);
                let stats = &mut self.ledger[player];
                stats.areas = stats.areas.saturating_sub(redundant);
                stats.boundary = stats.boundary.saturating_sub(1);
            }
            Placement::Fuse { tag, joined } => {
                debug!(%player, x, y, joined, "fusing areas");
                self.grid.set(x, y, player, tag);
                let stats = &mut self.ledger[player];
                stats.areas = stats.areas.saturating_sub(joined - 1);
                stats.boundary = stats.boundary.saturating_sub(1);
                area::relabel_region(&mut self.grid, player, tag, x, y);
            }
        }

        self.settle_boundaries(player, x, y);
        self.ledger[player].placed += 1;
        trace!(%player, x, y, "move accepted");
        Ok(())
    }

    /// Boundary corrections shared by every accepted move, applied after the
    /// cell is claimed: credit the newly exposed free neighbors, back out
    /// double counts, and take the claimed cell out of every other adjacent
    /// player's boundary.
    fn settle_boundaries(&mut self, player: PlayerId, x: u32, y: u32) {
        let gained = u64::from(self.grid.adjacent_count(None, x, y));
        let doubled = u64::from(self.grid.two_apart_count(player, x, y))
            + u64::from(self.grid.diagonal_shared_count(player, x, y));

        let stats = &mut self.ledger[player];
        stats.boundary = (stats.boundary + gained).saturating_sub(doubled);

        for (nx, ny) in self.grid.neighbor_coords(x, y) {
            if let Some(other) = self.grid.get(nx, ny).owner {
                if other != player {
                    let boundary = &mut self.ledger[other].boundary;
                    *boundary = boundary.saturating_sub(1);
                }
            }
        }
    }

    // === Queries ===

    /// Tokens `player` has placed. Unknown players report 0.
    #[must_use]
    pub fn placed_cells(&self, player: PlayerId) -> u64 {
        self.ledger.get(player).map_or(0, |s| s.placed)
    }

    /// Cells still open to `player` for expansion: the maintained boundary
    /// once the area quota is exhausted, otherwise every empty cell on the
    /// board. Unknown players report 0.
    #[must_use]
    pub fn reachable_cells(&self, player: PlayerId) -> u64 {
        let Some(stats) = self.ledger.get(player) else {
            return 0;
        };
        if stats.areas == self.config.area_quota {
            stats.boundary
        } else {
            let placed: u64 = self.ledger.iter().map(|(_, s)| s.placed).sum();
            self.config.total_cells() - placed
        }
    }

    /// Current counters for `player`, or `None` for an unknown player.
    #[must_use]
    pub fn stats(&self, player: PlayerId) -> Option<crate::core::PlayerStats> {
        self.ledger.get(player).copied()
    }

    /// Board width.
    #[must_use]
    pub const fn board_width(&self) -> u32 {
        self.config.width
    }

    /// Board height.
    #[must_use]
    pub const fn board_height(&self) -> u32 {
        self.config.height
    }

    /// Number of players.
    #[must_use]
    pub const fn player_count(&self) -> u32 {
        self.config.players
    }

    /// Per-player area quota.
    #[must_use]
    pub const fn area_quota(&self) -> u32 {
        self.config.area_quota
    }

    /// Board symbol for `player`, `'.'` when the player is not in this game.
    #[must_use]
    pub fn player_symbol(&self, player: PlayerId) -> char {
        if self.ledger.contains(player) {
            player.symbol()
        } else {
            '.'
        }
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Render the board as text: one line per row, top row (`height - 1`)
    /// first, `'.'` for empty cells, every row newline-terminated.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(
            (self.config.width as usize + 1) * self.config.height as usize,
        );
        for y in (0..self.config.height).rev() {
            for x in 0..self.config.width {
                match self.grid.get(x, y).owner {
                    Some(p) => out.push(p.symbol()),
                    None => out.push('.'),
                }
            }
            out.push('\n');
        }
        out
    }
}

//! Player identification and per-player bookkeeping.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Indices are 0-based internally; the symbol
//! shown on a rendered board is `'1'..='9'` for the first nine players and
//! `'a'..='z'` after that, which is where the 35-player ceiling comes from.
//!
//! ## Ledger
//!
//! Per-player counters backed by `Vec` for O(1) access, indexable by
//! `PlayerId`. The counters are maintained incrementally by the move
//! algorithm and are never recomputed from the grid.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::MAX_PLAYERS;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)` and renders
/// as `'1'` on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Board symbol for this player: `'1'..='9'` for indices 0-8, then
    /// `'a'..='z'` for 9-34. Indices past the ceiling render as `'.'`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self.0 {
            0..=8 => (b'1' + self.0) as char,
            9..=34 => (b'a' + self.0 - 9) as char,
            _ => '.',
        }
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use territory::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    /// Displays the 1-based player number, matching the board symbols.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", u32::from(self.0) + 1)
    }
}

/// Per-player counters, corrected after every accepted move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Empty cells orthogonally touching this player's tokens, corrected for
    /// double-counting and diagonal double-exposure. An approximation that is
    /// maintained, not recomputed.
    pub boundary: u64,
    /// Areas currently charged against the quota.
    pub areas: u32,
    /// Tokens placed so far. Monotonically increasing.
    pub placed: u64,
}

/// Per-player counter storage with O(1) access by `PlayerId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    stats: Vec<PlayerStats>,
}

impl Ledger {
    /// Create a ledger with zeroed counters for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(
            player_count <= MAX_PLAYERS as usize,
            "At most 35 players supported"
        );

        Self {
            stats: vec![PlayerStats::default(); player_count],
        }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.stats.len()
    }

    /// Check whether `player` belongs to this ledger.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.stats.len()
    }

    /// Get a player's counters, or `None` for an unknown player.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&PlayerStats> {
        self.stats.get(player.index())
    }

    /// Iterate over (PlayerId, &PlayerStats) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &PlayerStats)> {
        self.stats
            .iter()
            .enumerate()
            .map(|(i, s)| (PlayerId(i as u8), s))
    }
}

impl Index<PlayerId> for Ledger {
    type Output = PlayerStats;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.stats[player.index()]
    }
}

impl IndexMut<PlayerId> for Ledger {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.stats[player.index()]
    }
}

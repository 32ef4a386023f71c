//! Pure neighborhood queries used by the move algorithm.
//!
//! All probes are read-only and orthogonal unless stated otherwise. They see
//! the grid as it is at call time; the move algorithm decides whether to
//! probe before or after claiming the cell.

use super::{AreaId, Grid};
use crate::core::PlayerId;

impl Grid {
    /// Count the in-bounds orthogonal neighbors of `(x, y)` whose owner is
    /// `owner`. Pass `None` to count free neighbors.
    #[must_use]
    pub fn adjacent_count(&self, owner: Option<PlayerId>, x: u32, y: u32) -> u32 {
        self.neighbor_coords(x, y)
            .iter()
            .filter(|&&(nx, ny)| self.get(nx, ny).owner == owner)
            .count() as u32
    }

    /// Count the cells exactly two steps from `(x, y)` on the same axis that
    /// `owner` occupies. A free cell sitting between two tokens of one
    /// player is adjacent to both; this count backs out the second credit.
    #[must_use]
    pub fn two_apart_count(&self, owner: PlayerId, x: u32, y: u32) -> u32 {
        let owner = Some(owner);
        let mut count = 0;
        if x >= 2 && self.get(x - 2, y).owner == owner {
            count += 1;
        }
        if u64::from(x) + 2 < u64::from(self.width) && self.get(x + 2, y).owner == owner {
            count += 1;
        }
        if y >= 2 && self.get(x, y - 2).owner == owner {
            count += 1;
        }
        if u64::from(y) + 2 < u64::from(self.height) && self.get(x, y + 2).owner == owner {
            count += 1;
        }
        count
    }

    /// Diagonal double-exposure at `(x, y)`.
    ///
    /// For the down-left and up-right diagonals (the other two are covered
    /// when the move algorithm runs for the opposite cell), if the diagonal
    /// cell belongs to `owner`, each empty orthogonal cell between it and
    /// `(x, y)` counts once. Those cells touch both tokens and would
    /// otherwise be credited to the boundary twice.
    #[must_use]
    pub fn diagonal_shared_count(&self, owner: PlayerId, x: u32, y: u32) -> u32 {
        let owner = Some(owner);
        let mut count = 0;
        if x > 0 && y > 0 && self.get(x - 1, y - 1).owner == owner {
            if self.get(x, y - 1).owner.is_none() {
                count += 1;
            }
            if self.get(x - 1, y).owner.is_none() {
                count += 1;
            }
        }
        if x + 1 < self.width && y + 1 < self.height && self.get(x + 1, y + 1).owner == owner {
            if self.get(x, y + 1).owner.is_none() {
                count += 1;
            }
            if self.get(x + 1, y).owner.is_none() {
                count += 1;
            }
        }
        count
    }

    /// Area tags of the same-owner orthogonal neighbors of `(x, y)`, in
    /// fixed left/right/down/up slot order. `None` marks a direction with no
    /// same-owner neighbor (including off-board directions).
    #[must_use]
    pub fn neighbor_tags(&self, owner: PlayerId, x: u32, y: u32) -> [Option<AreaId>; 4] {
        let tag_at = |nx: u32, ny: u32| -> Option<AreaId> {
            let cell = self.get(nx, ny);
            if cell.owner == Some(owner) {
                Some(cell.area)
            } else {
                None
            }
        };

        let mut tags = [None; 4];
        if x > 0 {
            tags[0] = tag_at(x - 1, y);
        }
        if x + 1 < self.width {
            tags[1] = tag_at(x + 1, y);
        }
        if y > 0 {
            tags[2] = tag_at(x, y - 1);
        }
        if y + 1 < self.height {
            tags[3] = tag_at(x, y + 1);
        }
        tags
    }
}

//! Board storage: per-cell ownership and area tags.
//!
//! ## Cell
//!
//! A cell is either empty or claimed by one player; a claimed cell also
//! carries an area tag. Tags are unique *per owner*, not globally - two
//! players may share a numeric tag with no relation implied. Cells are
//! claimed at most once and never cleared.
//!
//! ## Grid
//!
//! One contiguous buffer indexed `x * height + y`. Bounds are the caller's
//! contract: the facade validates coordinates before touching the grid.

pub mod probe;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;

/// Area tag, opaque outside tag comparisons.
///
/// Tags start at 1; the default (0) only appears on empty cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AreaId(pub u32);

impl AreaId {
    /// Create a new area tag.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// A single board square.
///
/// `area` is meaningful only while `owner` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub owner: Option<PlayerId>,
    pub area: AreaId,
}

/// Up to four in-bounds orthogonal neighbor coordinates.
pub type NeighborCoords = SmallVec<[(u32, u32); 4]>;

/// Fixed-size 2D cell store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid. Dimensions must be nonzero (validated by
    /// the game configuration).
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    /// Board width (columns).
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Board height (rows).
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Check whether `(x, y)` lies on the board.
    #[must_use]
    pub const fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(self.in_bounds(x, y), "coordinate ({x}, {y}) out of bounds");
        x as usize * self.height as usize + y as usize
    }

    /// Read a cell.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Cell {
        self.cells[self.offset(x, y)]
    }

    /// Claim a cell for `owner` with tag `area`.
    pub fn set(&mut self, x: u32, y: u32, owner: PlayerId, area: AreaId) {
        let idx = self.offset(x, y);
        self.cells[idx] = Cell {
            owner: Some(owner),
            area,
        };
    }

    /// In-bounds orthogonal neighbors of `(x, y)`, in left/right/down/up
    /// order.
    #[must_use]
    pub fn neighbor_coords(&self, x: u32, y: u32) -> NeighborCoords {
        let mut out = NeighborCoords::new();
        if x > 0 {
            out.push((x - 1, y));
        }
        if x + 1 < self.width {
            out.push((x + 1, y));
        }
        if y > 0 {
            out.push((x, y - 1));
        }
        if y + 1 < self.height {
            out.push((x, y + 1));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4, 3);

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        for x in 0..4 {
            for y in 0..3 {
                assert_eq!(grid.get(x, y), Cell::default());
            }
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(4, 3);
        let player = PlayerId::new(1);

        grid.set(2, 1, player, AreaId::new(7));

        let cell = grid.get(2, 1);
        assert_eq!(cell.owner, Some(player));
        assert_eq!(cell.area, AreaId::new(7));
        assert_eq!(grid.get(2, 0).owner, None);
    }

    #[test]
    fn test_in_bounds() {
        let grid = Grid::new(4, 3);

        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(3, 2));
        assert!(!grid.in_bounds(4, 0));
        assert!(!grid.in_bounds(0, 3));
    }

    #[test]
    fn test_neighbor_coords_center() {
        let grid = Grid::new(5, 5);

        let coords = grid.neighbor_coords(2, 2);
        assert_eq!(coords.as_slice(), &[(1, 2), (3, 2), (2, 1), (2, 3)]);
    }

    #[test]
    fn test_neighbor_coords_corners() {
        let grid = Grid::new(5, 5);

        assert_eq!(grid.neighbor_coords(0, 0).as_slice(), &[(1, 0), (0, 1)]);
        assert_eq!(grid.neighbor_coords(4, 4).as_slice(), &[(3, 4), (4, 3)]);
    }

    #[test]
    fn test_single_cell_board() {
        let grid = Grid::new(1, 1);

        assert!(grid.neighbor_coords(0, 0).is_empty());
    }

    #[test]
    fn test_grid_serialization() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 1, PlayerId::new(0), AreaId::new(1));

        let json = serde_json::to_string(&grid).unwrap();
        let deserialized: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, deserialized);
    }
}

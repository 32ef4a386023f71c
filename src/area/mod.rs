//! Placement classification and area merging.
//!
//! A move with at least one same-owner orthogonal neighbor either extends a
//! single existing area or fuses several of them into one. Fusion relabels
//! the whole merged region eagerly, so later tag comparisons stay O(1); the
//! cost is one flood fill over the region, paid once per merge.

use crate::core::PlayerId;
use crate::grid::{AreaId, Grid};

/// Number of neighbor tag slots; order matches
/// [`Grid::neighbor_tags`]: left, right, down, up.
pub const NEIGHBOR_SLOTS: usize = 4;

/// How a move relates to the mover's existing areas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// No same-owner orthogonal neighbor: the move starts a new area and is
    /// subject to the quota.
    Isolated,
    /// A single area in the neighborhood; the cell adopts `tag`.
    /// `redundant` is the number of extra directions reaching that area;
    /// the mover's area count drops by this amount to stay consistent with
    /// the per-direction bookkeeping.
    Extend { tag: AreaId, redundant: u32 },
    /// `joined` areas become one. The cell adopts `tag` and every cell of
    /// the merged region is relabeled to it.
    Fuse { tag: AreaId, joined: u32 },
}

/// Classify a move from the neighbor tag slots and the count `around` of
/// same-owner orthogonal neighbors.
///
/// The adopted tag is the first occupied slot in left/right/down/up order.
#[must_use]
pub fn classify(tags: &[Option<AreaId>; NEIGHBOR_SLOTS], around: u32) -> Placement {
    if around == 0 {
        return Placement::Isolated;
    }
    let Some(tag) = tags.iter().copied().flatten().next() else {
        // No occupied slot: nothing to extend.
        return Placement::Isolated;
    };

    let joined = distinct_area_count(tags, around);
    if joined == 1 {
        Placement::Extend {
            tag,
            redundant: around - 1,
        }
    } else {
        Placement::Fuse { tag, joined }
    }
}

/// Number of pairwise-distinct tags among the neighbor slots.
///
/// Four occupied slots short-circuit to 4. Pairs are compared in the fixed
/// order (0,1),(0,2),(0,3),(1,2),(1,3),(2,3), counting stops once it reaches
/// `around`, and an all-equal (or single-pair) neighborhood reports 1.
#[must_use]
pub fn distinct_area_count(tags: &[Option<AreaId>; NEIGHBOR_SLOTS], around: u32) -> u32 {
    if around == 4 {
        return 4;
    }

    let mut distinct = 0;
    for i in 0..NEIGHBOR_SLOTS - 1 {
        for j in i + 1..NEIGHBOR_SLOTS {
            if distinct >= around {
                break;
            }
            if let (Some(a), Some(b)) = (tags[i], tags[j]) {
                if a != b {
                    distinct += 1;
                }
            }
        }
    }

    if distinct == 0 {
        1
    } else {
        distinct
    }
}

/// Relabel every cell of `owner` reachable from the orthogonal neighbors of
/// `(x, y)` to `tag`.
///
/// Iterative flood fill with an explicit work stack, so the call stack stays
/// bounded regardless of region size. A cell already carrying `tag` is
/// terminal, which makes every cell visited at most once.
pub fn relabel_region(grid: &mut Grid, owner: PlayerId, tag: AreaId, x: u32, y: u32) {
    let mut work: Vec<(u32, u32)> = grid.neighbor_coords(x, y).into_vec();

    while let Some((cx, cy)) = work.pop() {
        let cell = grid.get(cx, cy);
        if cell.owner == Some(owner) && cell.area != tag {
            grid.set(cx, cy, owner, tag);
            work.extend(grid.neighbor_coords(cx, cy));
        }
    }
}

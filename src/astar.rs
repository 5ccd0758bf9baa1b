//! A* shortest-path search over a [`CostGrid`].
//!
//! Nodes live in a flat arena indexed by `y * width + x`; the frontier is a
//! `BinaryHeap` of `(index, f)` references with reversed ordering so the
//! max-heap pops the lowest `f` first. Each search owns a fresh arena, so
//! concurrent searches share no mutable state.

use std::collections::BinaryHeap;

use crate::distance::octile;
use crate::geom::Point;
use crate::grid::CostGrid;

/// Sentinel accumulated cost for a node not yet reached.
const UNREACHABLE: i32 = i32::MAX;

#[derive(Clone)]
struct Node {
    g: i32,
    parent: usize,
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: usize::MAX,
            open: false,
        }
    }
}

/// Reference into the node arena, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute the lowest-cost path from `from` to `to`.
///
/// Both endpoints must be in bounds and walkable; the facade validates this
/// before calling. Returns the full path (including both endpoints) and its
/// total cost, or `None` if no path exists.
pub(crate) fn search(grid: &CostGrid, from: Point, to: Point) -> Option<(Vec<Point>, i32)> {
    let start_idx = grid.idx(from)?;
    let goal_idx = grid.idx(to)?;

    if start_idx == goal_idx {
        return Some((vec![from], 0));
    }

    let mut nodes = vec![Node::default(); (grid.width() * grid.height()) as usize];
    nodes[start_idx].g = 0;
    nodes[start_idx].open = true;

    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    open.push(NodeRef {
        idx: start_idx,
        f: octile(from, to),
    });

    let mut nbuf: Vec<Point> = Vec::with_capacity(8);

    let mut found = false;
    while let Some(current) = open.pop() {
        let ci = current.idx;

        // Skip stale heap entries.
        if !nodes[ci].open {
            continue;
        }

        if ci == goal_idx {
            found = true;
            break;
        }

        nodes[ci].open = false;
        let current_g = nodes[ci].g;
        let current_point = point_at(grid, ci);

        grid.neighbors(current_point, &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            let Some(entry_cost) = grid.cell(np).and_then(|c| c.cost()) else {
                continue;
            };

            // Saturating: entry costs may approach the sentinel range.
            let tentative_g = current_g
                .saturating_add(octile(current_point, np))
                .saturating_add(entry_cost);

            let n = &mut nodes[ni];
            if tentative_g >= n.g {
                continue;
            }

            n.g = tentative_g;
            n.parent = ci;
            n.open = true;
            open.push(NodeRef {
                idx: ni,
                f: tentative_g.saturating_add(octile(np, to)),
            });
        }
    }

    if !found {
        return None;
    }

    // Retrace predecessor links from the goal, then reverse.
    let total_cost = nodes[goal_idx].g;
    let mut path = Vec::new();
    let mut ci = goal_idx;
    while ci != usize::MAX {
        path.push(point_at(grid, ci));
        ci = nodes[ci].parent;
    }
    path.reverse();
    Some((path, total_cost))
}

#[inline]
fn point_at(grid: &CostGrid, idx: usize) -> Point {
    let w = grid.width();
    Point::new(idx as i32 % w, idx as i32 / w)
}

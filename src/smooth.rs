//! String-pulling path smoothing.
//!
//! Reduces a valid path to the fewest waypoints such that consecutive kept
//! waypoints have unobstructed line of sight. Visibility is assumed
//! monotonic along the path: the scan stops at the first waypoint that
//! fails, rather than probing past the break.

use crate::distance::octile;
use crate::geom::Point;
use crate::grid::CostGrid;

/// Smooth `path` and recompute its total cost.
///
/// Skipped cells are no longer charged, so the cost is re-derived from the
/// shortened path (octile distance plus entry cost per kept segment) rather
/// than reused from the search. Paths with fewer than 2 nodes are returned
/// unchanged.
pub(crate) fn smooth(grid: &CostGrid, path: Vec<Point>) -> (Vec<Point>, i32) {
    if path.len() < 2 {
        return (path, 0);
    }

    let mut smoothed = vec![path[0]];
    let mut cur = 0;

    while cur < path.len() - 1 {
        let mut last_visible = cur + 1;
        for i in (cur + 2)..path.len() {
            if line_of_sight(grid, path[cur], path[i]) {
                last_visible = i;
            } else {
                break;
            }
        }
        smoothed.push(path[last_visible]);
        cur = last_visible;
    }

    let cost = path_cost(grid, &smoothed);
    (smoothed, cost)
}

/// Total cost of a waypoint sequence: octile distance plus destination
/// entry cost per consecutive pair.
pub(crate) fn path_cost(grid: &CostGrid, path: &[Point]) -> i32 {
    path.windows(2)
        .map(|w| {
            let entry = grid.cell(w[1]).and_then(|c| c.cost()).unwrap_or(0);
            octile(w[0], w[1]) + entry
        })
        .sum()
}

/// Bresenham line walk from `a` to `b`, requiring every visited cell to be
/// walkable. Diagonal steps additionally require both flanking orthogonal
/// cells to be walkable, mirroring the corner-cutting rule of neighbor
/// enumeration, so the smoother never proposes a segment the search itself
/// would forbid.
pub(crate) fn line_of_sight(grid: &CostGrid, a: Point, b: Point) -> bool {
    let mut x0 = a.x;
    let mut y0 = a.y;
    let x1 = b.x;
    let y1 = b.y;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        if !grid.is_walkable(Point::new(x0, y0)) {
            return false;
        }
        if x0 == x1 && y0 == y1 {
            return true;
        }

        let e2 = 2 * err;
        let x_old = x0;
        let y_old = y0;

        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }

        if x0 != x_old && y0 != y_old {
            // Diagonal step: both flanking orthogonals must be open.
            if !grid.is_walkable(Point::new(x0, y_old))
                || !grid.is_walkable(Point::new(x_old, y0))
            {
                return false;
            }
        }
    }
}

//! Nearest-walkable-cell fallback for blocked destinations.

use crate::distance::octile;
use crate::geom::Point;
use crate::grid::CostGrid;

/// Find the walkable cell nearest to `target`, searching outward in square
/// rings of growing Chebyshev radius.
///
/// The first radius that yields any walkable cell wins; among that ring's
/// candidates the one with the smallest octile distance from `start` is
/// chosen, ties broken by scan order. The start cell itself is never a
/// candidate. Returns `None` if every ring up to `max(width, height) - 1`
/// is exhausted.
pub(crate) fn nearest_walkable(grid: &CostGrid, start: Point, target: Point) -> Option<Point> {
    let max_radius = grid.width().max(grid.height());
    for radius in 1..max_radius {
        let mut best: Option<(Point, i32)> = None;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                // Perimeter cells only; inner cells were covered by
                // smaller radii.
                if dx.abs() != radius && dy.abs() != radius {
                    continue;
                }
                let candidate = target.shift(dx, dy);
                if candidate == start || !grid.is_walkable(candidate) {
                    continue;
                }
                let d = octile(start, candidate);
                if best.is_none_or(|(_, bd)| d < bd) {
                    best = Some((candidate, d));
                }
            }
        }
        if let Some((p, _)) = best {
            return Some(p);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::BLOCKED;

    const W: i32 = 0;
    const O: i32 = BLOCKED;

    fn grid(rows: &[Vec<i32>]) -> CostGrid {
        CostGrid::new(rows).unwrap()
    }

    #[test]
    fn picks_adjacent_open_cell() {
        let g = grid(&[vec![W, W, W], vec![W, O, W], vec![W, W, W]]);
        let found = nearest_walkable(&g, Point::new(0, 0), Point::new(1, 1)).unwrap();
        // Ring 1 around (1,1); nearest to the start corner is (0,0)'s
        // neighborhood, but (0,0) is the start so the tie goes to scan
        // order among distance-10 candidates.
        assert_eq!(octile(Point::new(0, 0), found), 10);
    }

    #[test]
    fn expands_to_larger_rings() {
        // Everything within radius 1 of the target is blocked.
        let g = grid(&[
            vec![W, W, W, W, W],
            vec![W, O, O, O, W],
            vec![W, O, O, O, W],
            vec![W, O, O, O, W],
            vec![W, W, W, W, W],
        ]);
        let found = nearest_walkable(&g, Point::new(0, 0), Point::new(2, 2)).unwrap();
        // Radius 2 ring is the border; nearest to (0,0) that is not the
        // start itself.
        assert_eq!(octile(Point::new(0, 0), found), 10);
    }

    #[test]
    fn stops_at_first_radius_with_candidates() {
        // Both (2,1) at radius 1 and (3,1) at radius 2 are open; the
        // radius-1 candidate wins even though (3,1) is no further from
        // the start in rings terms.
        let g = grid(&[vec![O, O, O, O], vec![W, O, W, W]]);
        let found = nearest_walkable(&g, Point::new(0, 1), Point::new(1, 1)).unwrap();
        assert_eq!(found, Point::new(2, 1));
    }

    #[test]
    fn excludes_start_cell() {
        let g = grid(&[vec![W, O, O]]);
        assert_eq!(
            nearest_walkable(&g, Point::new(0, 0), Point::new(1, 0)),
            None
        );
    }

    #[test]
    fn exhausts_all_rings() {
        let g = grid(&[vec![W, O], vec![O, O]]);
        assert_eq!(
            nearest_walkable(&g, Point::new(0, 0), Point::new(1, 1)),
            None
        );
    }
}

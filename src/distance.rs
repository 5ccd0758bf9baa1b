//! Grid distance functions shared by search and smoothing.

use crate::geom::Point;

/// Cost of a horizontal or vertical step.
pub const MOVE_STRAIGHT_COST: i32 = 10;

/// Cost of a diagonal step (√2 scaled ×10).
pub const MOVE_DIAGONAL_COST: i32 = 14;

/// Octile distance between two points.
///
/// The exact movement distance on an 8-way grid with unit step costs, and
/// therefore an admissible A* heuristic. Also used as the per-step cost
/// between adjacent cells, where it reduces to [`MOVE_STRAIGHT_COST`] or
/// [`MOVE_DIAGONAL_COST`].
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    if dx > dy {
        MOVE_DIAGONAL_COST * dy + MOVE_STRAIGHT_COST * (dx - dy)
    } else {
        MOVE_DIAGONAL_COST * dx + MOVE_STRAIGHT_COST * (dy - dx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_moves() {
        assert_eq!(octile(Point::new(0, 0), Point::new(3, 0)), 30);
        assert_eq!(octile(Point::new(0, 0), Point::new(0, 5)), 50);
    }

    #[test]
    fn diagonal_moves() {
        assert_eq!(octile(Point::new(0, 0), Point::new(2, 2)), 28);
        assert_eq!(octile(Point::new(1, 1), Point::new(0, 0)), 14);
    }

    #[test]
    fn mixed_moves() {
        // 2 diagonal + 2 straight.
        assert_eq!(octile(Point::new(0, 0), Point::new(4, 2)), 48);
        assert_eq!(octile(Point::new(4, 2), Point::new(0, 0)), 48);
    }

    #[test]
    fn zero_distance() {
        assert_eq!(octile(Point::new(7, 7), Point::new(7, 7)), 0);
    }
}

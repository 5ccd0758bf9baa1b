//! Query options and path results.

use crate::geom::Point;

/// Per-query configuration flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathOptions {
    /// Run the string-pulling smoother on the found path.
    pub smooth_path: bool,
    /// Read and write the path cache.
    pub use_cache: bool,
    /// Substitute the nearest walkable cell when the destination is blocked.
    pub find_closest_if_blocked: bool,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            smooth_path: false,
            use_cache: true,
            find_closest_if_blocked: false,
        }
    }
}

impl PathOptions {
    /// Enable path smoothing.
    pub fn with_smoothing(mut self) -> Self {
        self.smooth_path = true;
        self
    }

    /// Bypass the cache on both read and write.
    pub fn without_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }

    /// Enable the nearest-walkable-cell fallback for blocked destinations.
    pub fn with_closest_fallback(mut self) -> Self {
        self.find_closest_if_blocked = true;
        self
    }

    /// Canonical fixed-bit-flag encoding, used in cache keys so the key
    /// contract does not depend on a structural hash.
    pub(crate) fn bits(self) -> u8 {
        (self.smooth_path as u8)
            | (self.use_cache as u8) << 1
            | (self.find_closest_if_blocked as u8) << 2
    }
}

/// An ordered walkable route and its accumulated cost.
///
/// Empty with cost 0 when no route exists, whether because the query was
/// out of bounds, an endpoint was unwalkable, or the grid has no
/// connection; the caller cannot and need not distinguish these.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Waypoints from start to end inclusive; empty when no path exists.
    pub nodes: Vec<Point>,
    /// Total path cost; 0 for a single-node or empty path.
    pub total_cost: i32,
}

impl PathResult {
    /// The "no route" result.
    pub(crate) fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            total_cost: 0,
        }
    }

    /// A path that starts and ends on the same cell.
    pub(crate) fn single(p: Point) -> Self {
        Self {
            nodes: vec![p],
            total_cost: 0,
        }
    }

    /// Whether no route was found.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_result_round_trip() {
        let result = PathResult {
            nodes: vec![Point::new(0, 0), Point::new(1, 1)],
            total_cost: 14,
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: PathResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }

    #[test]
    fn options_round_trip() {
        let opts = PathOptions::default().with_smoothing();
        let json = serde_json::to_string(&opts).unwrap();
        let back: PathOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(opts, back);
    }
}

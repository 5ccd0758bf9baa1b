//! Deterministic pathfinding on 2D cost grids.
//!
//! Given a rectangular matrix of entry costs (with `i32::MAX` marking
//! unwalkable cells) and a start/end coordinate, this crate computes a
//! lowest-cost 8-way route:
//!
//! - **A\*** search with an octile-distance heuristic ([`Pathfinder::find_path`])
//! - **String-pulling** waypoint reduction ([`PathOptions::with_smoothing`])
//! - **Nearest-cell fallback** when the destination is blocked
//!   ([`PathOptions::with_closest_fallback`])
//! - **Query memoization** keyed by grid content ([`PathCache`])
//!
//! Diagonal movement never cuts corners: a diagonal step is legal only when
//! both flanking orthogonal cells are walkable, and the smoother honors the
//! same rule.
//!
//! Routing failures — out-of-bounds coordinates, blocked endpoints, no
//! route — all resolve to an empty [`PathResult`]; the only hard failure is
//! a malformed input matrix ([`GridError`]).
//!
//! # Example
//!
//! ```
//! use pathgrid::{CostGrid, PathOptions, Pathfinder, Point, BLOCKED};
//!
//! let grid = CostGrid::new(&[
//!     vec![0, BLOCKED, 0],
//!     vec![0, BLOCKED, 0],
//!     vec![0, 0, 0],
//! ])?;
//! let pathfinder = Pathfinder::new();
//! let result = pathfinder.find_path(
//!     &grid,
//!     Point::new(0, 0),
//!     Point::new(2, 0),
//!     PathOptions::default(),
//! );
//! assert_eq!(result.nodes.first(), Some(&Point::new(0, 0)));
//! assert_eq!(result.nodes.last(), Some(&Point::new(2, 0)));
//! # Ok::<(), pathgrid::GridError>(())
//! ```

mod astar;
mod cache;
mod distance;
mod geom;
mod grid;
mod nearest;
mod pathfinder;
mod smooth;
mod types;

pub use cache::{PathCache, QueryKey};
pub use distance::{MOVE_DIAGONAL_COST, MOVE_STRAIGHT_COST, octile};
pub use geom::Point;
pub use grid::{BLOCKED, Cell, CostGrid, GridError};
pub use pathfinder::{Pathfinder, find_path};
pub use types::{PathOptions, PathResult};

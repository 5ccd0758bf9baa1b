//! The pathfinder facade: validation, cache lookup, search, fallback,
//! smoothing, and cache population.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, trace};
use once_cell::sync::Lazy;

use crate::astar;
use crate::cache::{PathCache, QueryKey};
use crate::geom::Point;
use crate::grid::CostGrid;
use crate::nearest::nearest_walkable;
use crate::smooth::smooth;
use crate::types::{PathOptions, PathResult};

static SHARED: Lazy<Pathfinder> = Lazy::new(Pathfinder::new);

/// Grid path queries against a (possibly shared) [`PathCache`].
///
/// Cloning is cheap and shares the cache, so one `Pathfinder` can serve
/// many threads; the cache is the only state shared across queries.
#[derive(Clone, Default)]
pub struct Pathfinder {
    cache: Arc<PathCache>,
}

impl Pathfinder {
    /// Create a pathfinder with its own isolated cache.
    pub fn new() -> Self {
        Self {
            cache: Arc::new(PathCache::new()),
        }
    }

    /// Create a pathfinder against an injected cache.
    pub fn with_cache(cache: Arc<PathCache>) -> Self {
        Self { cache }
    }

    /// The process-wide default instance used by the crate-level
    /// [`find_path`] convenience function.
    pub fn shared() -> &'static Pathfinder {
        &SHARED
    }

    /// This pathfinder's cache, e.g. for explicit invalidation after the
    /// grid changes.
    pub fn cache(&self) -> &PathCache {
        &self.cache
    }

    /// Compute a lowest-cost walkable route from `start` to `end`.
    ///
    /// Routing failures (out-of-bounds or unwalkable endpoints, no
    /// connection, exhausted fallback) all resolve to an empty result with
    /// cost 0. Cache hits return the originally stored result, sharing
    /// ownership; treat it as immutable.
    pub fn find_path(
        &self,
        grid: &CostGrid,
        start: Point,
        end: Point,
        options: PathOptions,
    ) -> Arc<PathResult> {
        if options.use_cache {
            let key = QueryKey::new(grid.content_hash(), start, end, options.bits());
            if let Some(hit) = self.cache.get(&key) {
                trace!("cache hit for {start} -> {end}");
                return hit;
            }
            let result = Arc::new(self.compute(grid, start, end, options));
            self.cache.set(key, Arc::clone(&result));
            return result;
        }
        Arc::new(self.compute(grid, start, end, options))
    }

    /// Run a query as an independently scheduled unit of work.
    ///
    /// The grid is moved into the worker; the cache is shared with this
    /// pathfinder, so the completed query populates it as usual. There is
    /// no cancellation: a caller that drops the handle still lets the
    /// search finish.
    pub fn spawn_find_path(
        &self,
        grid: CostGrid,
        start: Point,
        end: Point,
        options: PathOptions,
    ) -> JoinHandle<Arc<PathResult>> {
        let pathfinder = self.clone();
        thread::spawn(move || pathfinder.find_path(&grid, start, end, options))
    }

    fn compute(
        &self,
        grid: &CostGrid,
        start: Point,
        end: Point,
        options: PathOptions,
    ) -> PathResult {
        trace!("find_path {start} -> {end} ({}x{})", grid.width(), grid.height());

        let (Some(start_cell), Some(end_cell)) = (grid.cell(start), grid.cell(end)) else {
            debug!("start or end out of bounds");
            return PathResult::empty();
        };
        if !start_cell.is_walkable() {
            debug!("start {start} is blocked");
            return PathResult::empty();
        }

        let mut goal = end;
        if !end_cell.is_walkable() {
            if !options.find_closest_if_blocked {
                debug!("end {end} is blocked");
                return PathResult::empty();
            }
            match nearest_walkable(grid, start, end) {
                Some(substitute) => {
                    trace!("end {end} blocked, substituting {substitute}");
                    goal = substitute;
                }
                None => {
                    debug!("end {end} blocked and no walkable cell in any ring");
                    return PathResult::empty();
                }
            }
        }

        if start == goal {
            return PathResult::single(start);
        }

        let Some((nodes, total_cost)) = astar::search(grid, start, goal) else {
            debug!("no path from {start} to {goal}");
            return PathResult::empty();
        };

        if options.smooth_path {
            let (nodes, total_cost) = smooth(grid, nodes);
            return PathResult { nodes, total_cost };
        }
        PathResult { nodes, total_cost }
    }
}

/// Find a path using the shared default [`Pathfinder`].
pub fn find_path(
    grid: &CostGrid,
    start: Point,
    end: Point,
    options: PathOptions,
) -> Arc<PathResult> {
    Pathfinder::shared().find_path(grid, start, end, options)
}

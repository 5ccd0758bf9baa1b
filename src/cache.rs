//! Thread-safe memoization of path queries.

use std::sync::Arc;

use dashmap::DashMap;

use crate::geom::Point;
use crate::types::PathResult;

/// Composite key identifying one path query: grid content, endpoints, and
/// the canonical options encoding. Two structurally identical grids produce
/// equal keys regardless of object identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    grid_hash: u64,
    start: Point,
    end: Point,
    options: u8,
}

impl QueryKey {
    pub(crate) fn new(grid_hash: u64, start: Point, end: Point, options: u8) -> Self {
        Self {
            grid_hash,
            start,
            end,
            options,
        }
    }
}

/// Concurrent map from [`QueryKey`] to a shared, immutable [`PathResult`].
///
/// Entries never expire on their own; [`clear`](PathCache::clear) is the
/// only eviction mechanism. Concurrent `set` calls with equal keys may
/// race; the surviving entry is one of the written values. Hits hand back
/// the same `Arc`, so callers relying on identity to short-circuit
/// re-processing observe reference equality.
#[derive(Default)]
pub struct PathCache {
    entries: DashMap<QueryKey, Arc<PathResult>>,
}

impl PathCache {
    /// Create an isolated cache instance.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Look up a cached result.
    pub fn get(&self, key: &QueryKey) -> Option<Arc<PathResult>> {
        self.entries.get(key).map(|entry| Arc::clone(&entry))
    }

    /// Store a result, replacing any existing entry for the key.
    pub fn set(&self, key: QueryKey, result: Arc<PathResult>) {
        self.entries.insert(key, result);
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

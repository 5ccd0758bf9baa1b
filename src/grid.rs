//! The cost grid: bounds-checked cell lookups and neighbor enumeration.
//!
//! A [`CostGrid`] is built once per query from a raw `i32` matrix in which
//! [`BLOCKED`] (`i32::MAX`) marks an unwalkable cell and any other
//! non-negative value is the additional cost of entering that cell. The
//! sentinel encoding is converted to tagged [`Cell`] values at construction
//! so search and smoothing arithmetic never see it.

use thiserror::Error;

use crate::geom::Point;

/// Sentinel matrix value marking a cell unwalkable.
pub const BLOCKED: i32 = i32::MAX;

/// A grid cell: walkable with an entry cost, or blocked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Walkable, with the extra cost charged for entering the cell.
    Walkable(i32),
    /// Unwalkable.
    Blocked,
}

impl Cell {
    /// Whether the cell can be entered.
    #[inline]
    pub fn is_walkable(self) -> bool {
        matches!(self, Cell::Walkable(_))
    }

    /// Entry cost of a walkable cell, `None` if blocked.
    #[inline]
    pub fn cost(self) -> Option<i32> {
        match self {
            Cell::Walkable(c) => Some(c),
            Cell::Blocked => None,
        }
    }

    /// The raw matrix encoding of this cell.
    #[inline]
    fn raw(self) -> i32 {
        match self {
            Cell::Walkable(c) => c,
            Cell::Blocked => BLOCKED,
        }
    }
}

/// A malformed input matrix. The only hard failure in the crate; every
/// routing-level failure resolves to an empty path result instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("grid rows are empty")]
    ZeroWidth,
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("negative cost {cost} at ({x}, {y})")]
    NegativeCost { x: i32, y: i32, cost: i32 },
}

/// An immutable rectangular cost grid, row-major, indexed by [`Point`].
#[derive(Clone, Debug)]
pub struct CostGrid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl CostGrid {
    /// Build a grid from a matrix of rows (`rows[y][x]`).
    ///
    /// Fails on an empty matrix, ragged rows, or negative cell values.
    pub fn new(rows: &[Vec<i32>]) -> Result<Self, GridError> {
        let height = rows.len();
        if height == 0 {
            return Err(GridError::Empty);
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(GridError::ZeroWidth);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    len: row.len(),
                    expected: width,
                });
            }
            for (x, &v) in row.iter().enumerate() {
                if v < 0 {
                    return Err(GridError::NegativeCost {
                        x: x as i32,
                        y: y as i32,
                        cost: v,
                    });
                }
                cells.push(if v == BLOCKED {
                    Cell::Blocked
                } else {
                    Cell::Walkable(v)
                });
            }
        }

        Ok(Self {
            width: width as i32,
            height: height as i32,
            cells,
        })
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Convert a point to a flat index. `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<Cell> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.cell(p).is_some_and(Cell::is_walkable)
    }

    /// Append the in-bounds Moore neighbors of `p` into `buf` (cleared
    /// first). Blocked neighbors are included; it is the search's job to
    /// skip them. A diagonal neighbor is excluded unless both orthogonal
    /// cells flanking the step are walkable, so diagonal movement cannot
    /// clip through a blocking pair of obstacles. An out-of-bounds `p`
    /// yields no neighbors.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.clear();
        if self.cell(p).is_none() {
            return;
        }
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let n = p.shift(dx, dy);
                if self.cell(n).is_none() {
                    continue;
                }
                if dx != 0 && dy != 0 {
                    // Corner-cutting rule.
                    if !self.is_walkable(Point::new(p.x + dx, p.y))
                        || !self.is_walkable(Point::new(p.x, p.y + dy))
                    {
                        continue;
                    }
                }
                buf.push(n);
            }
        }
    }

    /// Order-dependent FNV-1a fold over all cell values in row-major order.
    ///
    /// Structurally identical grids hash equal regardless of object
    /// identity, which the path cache relies on for key correctness.
    pub fn content_hash(&self) -> u64 {
        const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
        const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

        let mut hash = FNV_OFFSET_BASIS;
        for cell in &self.cells {
            hash = (hash ^ cell.raw() as u64).wrapping_mul(FNV_PRIME);
        }
        hash
    }
}

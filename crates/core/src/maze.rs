//! Maze module - the immutable grid the game is played on
//!
//! The maze is a square `size x size` grid stored as a flat array for cache
//! locality. Coordinates: (x, y) where x grows left to right and y top to
//! bottom. Lookups take signed coordinates so callers can probe one step off
//! the grid without pre-checking; out-of-bounds reads resolve to `Wall`.

use crate::types::{CellKind, Position};

/// A square maze grid
///
/// Produced by [`crate::generate::generate`] and treated as immutable
/// afterwards: gameplay only reads it, and a "new maze" replaces it
/// wholesale. By construction the start is at `(1, 1)` and the goal at
/// `(size-2, size-2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    size: usize,
    /// Flat array of cells, row-major order (y * size + x)
    cells: Vec<CellKind>,
    start: Position,
    goal: Position,
}

impl Maze {
    /// Create a maze with every cell set to `Wall`
    ///
    /// This is the carving starting state. `size` must be at least 1; the
    /// generator owns the odd-size handling.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellKind::Wall; size * size],
            start: Position::new(1, 1),
            goal: Position::new(size as i32 - 2, size as i32 - 2),
        }
    }

    /// Grid dimension (width and height are equal)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Where the player begins, `(1, 1)` by construction
    pub fn start(&self) -> Position {
        self.start
    }

    /// The winning cell, `(size-2, size-2)` by construction
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.size as i32 || y < 0 || y >= self.size as i32 {
            return None;
        }
        Some((y as usize) * self.size + (x as usize))
    }

    /// Get the cell at (x, y), or `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<CellKind> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Get the cell at (x, y), treating out-of-bounds as `Wall`
    ///
    /// This is the read the traversal engine uses: stepping off the grid
    /// behaves exactly like walking into a wall, never a fault.
    pub fn cell_or_wall(&self, x: i32, y: i32) -> CellKind {
        self.get(x, y).unwrap_or(CellKind::Wall)
    }

    /// Whether the player can stand on (x, y)
    pub fn is_open(&self, position: Position) -> bool {
        self.cell_or_wall(position.x, position.y).is_open()
    }

    /// Set the cell at (x, y)
    ///
    /// Returns false if out of bounds. Only the generator and tests write
    /// cells; the game never mutates a maze it plays on.
    pub fn set(&mut self, x: i32, y: i32, kind: CellKind) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = kind;
                true
            }
            None => false,
        }
    }

    /// Count cells matching a predicate (test and diagnostics helper)
    pub fn count_cells(&self, f: impl Fn(CellKind) -> bool) -> usize {
        self.cells.iter().filter(|&&c| f(c)).count()
    }
}

//! Dense grid of cell states
//!
//! A grid has fixed dimensions for its whole lifetime; resizing means building a
//! new grid. Evolution never edits a grid in place, it produces a fresh one.

use ndarray::Array2;

use crate::io::error::{AutomatonError, Result, invalid_parameter};
use crate::spatial::boundary::BoundaryMode;

/// Identifier of a cell state, dense in `0..N`
pub type StateId = u8;

/// Rectangular grid of cell states indexed by `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<StateId>,
}

impl Grid {
    /// Create a grid with every cell in state 0
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::zeros((rows, cols)),
        }
    }

    /// Wrap an existing array of states
    pub const fn from_array(cells: Array2<StateId>) -> Self {
        Self { cells }
    }

    /// Build a grid from row slices
    ///
    /// # Errors
    ///
    /// Returns an error if the rows have different lengths
    pub fn from_rows(rows: &[&[StateId]]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.len());
        if let Some(bad) = rows.iter().find(|row| row.len() != cols) {
            return Err(invalid_parameter(
                "rows",
                &bad.len(),
                &format!("every row must have {cols} cells"),
            ));
        }

        let flat: Vec<StateId> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        let cells = Array2::from_shape_vec((rows.len(), cols), flat).map_err(|e| {
            invalid_parameter("rows", &rows.len(), &e)
        })?;
        Ok(Self { cells })
    }

    /// Grid dimensions that fit a screen of the given pixel size
    ///
    /// Partial cells at the right and bottom edges are dropped.
    pub const fn dimensions_for_screen(
        screen_width: usize,
        screen_height: usize,
        cell_size: usize,
    ) -> (usize, usize) {
        if cell_size == 0 {
            return (0, 0);
        }
        (screen_height / cell_size, screen_width / cell_size)
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Read-only access to the underlying array
    pub const fn as_array(&self) -> &Array2<StateId> {
        &self.cells
    }

    /// Read an in-range cell
    pub fn get(&self, row: usize, col: usize) -> Option<StateId> {
        self.cells.get([row, col]).copied()
    }

    /// Read any coordinate through a boundary policy
    ///
    /// Coordinates the policy maps outside the grid read as state 0.
    pub fn get_resolved(&self, boundary: BoundaryMode, row: isize, col: isize) -> StateId {
        boundary
            .resolve(self.dimensions(), row, col)
            .and_then(|(r, c)| self.get(r, c))
            .unwrap_or(0)
    }

    /// Overwrite a single cell
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate is outside the grid
    pub fn set(&mut self, row: usize, col: usize, state: StateId) -> Result<()> {
        let dimensions = self.dimensions();
        let cell = self
            .cells
            .get_mut([row, col])
            .ok_or(AutomatonError::OutOfRange {
                row: row as isize,
                col: col as isize,
                dimensions,
            })?;
        *cell = state;
        Ok(())
    }

    /// Advance a cell to the next state, wrapping after the last one
    ///
    /// Returns the new state.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate is outside the grid or `state_count` is 0
    pub fn cycle(&mut self, row: usize, col: usize, state_count: usize) -> Result<StateId> {
        if state_count == 0 {
            return Err(invalid_parameter(
                "state_count",
                &state_count,
                &"at least one state is required",
            ));
        }
        let current = self.get(row, col).ok_or(AutomatonError::OutOfRange {
            row: row as isize,
            col: col as isize,
            dimensions: self.dimensions(),
        })?;
        let next = ((usize::from(current) + 1) % state_count) as StateId;
        self.set(row, col, next)?;
        Ok(next)
    }

    /// Reset every cell to state 0
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Number of cells in the given state
    pub fn population(&self, state: StateId) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Coordinates of every cell in the given state, in row-major order
    pub fn cells_in_state(&self, state: StateId) -> Vec<(usize, usize)> {
        self.cells
            .indexed_iter()
            .filter(|&(_, &s)| s == state)
            .map(|(pos, _)| pos)
            .collect()
    }
}

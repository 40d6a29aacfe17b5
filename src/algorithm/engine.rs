//! Grid evolution engine
//!
//! Each step reads the current grid through a shared reference and writes a
//! freshly allocated output, so no cell can observe a neighbor's next state.
//! Rows are independent units of work, which is what `step_parallel` splits on.

use ndarray::Array2;
use rayon::prelude::*;

use crate::algorithm::config::AutomatonConfig;
use crate::algorithm::rules::{ALIVE, GridView, RuleConfig};
use crate::io::error::{AutomatonError, Result, invalid_parameter};
use crate::spatial::{Grid, StateId};

/// Stateless stepper bound to one validated configuration
#[derive(Debug, Clone)]
pub struct Engine {
    config: AutomatonConfig,
}

impl Engine {
    /// Create an engine for a configuration
    pub const fn new(config: AutomatonConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine steps with
    pub const fn config(&self) -> &AutomatonConfig {
        &self.config
    }

    /// All-zero grid of the configured size
    pub fn blank_grid(&self) -> Grid {
        self.config.blank_grid()
    }

    /// Compute the next generation
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The grid dimensions differ from the configured dimensions
    /// - The grid holds a state outside the state set
    /// - A transition function returns a state outside the state set
    pub fn step(&self, grid: &Grid) -> Result<Grid> {
        self.validate_grid(grid)?;
        let rows = (0..grid.rows())
            .map(|row| self.evolve_row(grid, row))
            .collect::<Result<Vec<_>>>()?;
        Self::assemble(grid, rows)
    }

    /// Compute the next generation with rows spread over the rayon pool
    ///
    /// Produces exactly the grid `step` would. When several cells fail, which
    /// one is reported is unspecified.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Engine::step`]
    pub fn step_parallel(&self, grid: &Grid) -> Result<Grid> {
        self.validate_grid(grid)?;
        let rows = (0..grid.rows())
            .into_par_iter()
            .map(|row| self.evolve_row(grid, row))
            .collect::<Result<Vec<_>>>()?;
        Self::assemble(grid, rows)
    }

    /// Boundary-aware read of any coordinate
    ///
    /// Out-of-range coordinates are resolved by the configured boundary; under
    /// an open boundary they read as state 0.
    pub fn get_cell(&self, grid: &Grid, row: isize, col: isize) -> StateId {
        grid.get_resolved(self.config.boundary(), row, col)
    }

    /// Write one in-range cell
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate is outside the grid or the state is
    /// not declared
    pub fn set_cell(&self, grid: &mut Grid, row: isize, col: isize, state: StateId) -> Result<()> {
        let dimensions = grid.dimensions();
        let out_of_range = AutomatonError::OutOfRange {
            row,
            col,
            dimensions,
        };
        let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(col)) else {
            return Err(out_of_range);
        };
        if r >= dimensions.0 || c >= dimensions.1 {
            return Err(out_of_range);
        }

        let state_count = self.config.states().len();
        if !self.config.states().contains(state) {
            return Err(AutomatonError::InvalidState {
                row: r,
                col: c,
                state,
                state_count,
            });
        }
        grid.set(r, c, state)
    }

    /// Check that a grid fits this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions differ from the configured ones or
    /// a cell holds an undeclared state (the first such cell in row-major order)
    pub fn validate_grid(&self, grid: &Grid) -> Result<()> {
        let expected = self.config.dimensions();
        if grid.dimensions() != expected {
            return Err(AutomatonError::DimensionMismatch {
                expected,
                found: grid.dimensions(),
            });
        }

        let states = self.config.states();
        if let Some(((row, col), &state)) = grid
            .as_array()
            .indexed_iter()
            .find(|&(_, &s)| !states.contains(s))
        {
            return Err(AutomatonError::InvalidState {
                row,
                col,
                state,
                state_count: states.len(),
            });
        }
        Ok(())
    }

    fn evolve_row(&self, grid: &Grid, row: usize) -> Result<Vec<StateId>> {
        let view = GridView::new(grid, self.config.boundary(), self.config.states());
        (0..grid.cols())
            .map(|col| self.evolve_cell(&view, grid, row, col))
            .collect()
    }

    fn evolve_cell(&self, view: &GridView<'_>, grid: &Grid, row: usize, col: usize) -> Result<StateId> {
        let (r, c) = (row as isize, col as isize);
        match self.config.rule() {
            RuleConfig::Counting(rule) => {
                let alive = self
                    .config
                    .neighborhood()
                    .offsets()
                    .iter()
                    .filter(|&&(dr, dc)| view.get(r + dr, c + dc) == ALIVE)
                    .count();
                let current = grid.get(row, col).unwrap_or(0);
                Ok(rule.next_state(current, alive))
            }
            RuleConfig::Transition(transition) => {
                let next = transition(view, r, c);
                let states = self.config.states();
                if states.contains(next) {
                    Ok(next)
                } else {
                    Err(AutomatonError::InvalidState {
                        row,
                        col,
                        state: next,
                        state_count: states.len(),
                    })
                }
            }
        }
    }

    fn assemble(grid: &Grid, rows: Vec<Vec<StateId>>) -> Result<Grid> {
        let dimensions = grid.dimensions();
        let flat: Vec<StateId> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec(dimensions, flat)
            .map_err(|e| invalid_parameter("grid", &format!("{}x{}", dimensions.0, dimensions.1), &e))?;
        Ok(Grid::from_array(cells))
    }
}

//! Caller-side run state: the grid being edited or run, and its generation
//!
//! The engine itself is stateless; a session owns the current grid and drives
//! the editing/running cycle an interactive viewer would. Painting is allowed
//! in both modes.

use crate::algorithm::engine::Engine;
use crate::io::error::{Result, WithGeneration};
use crate::spatial::{Grid, StateId};

/// Whether ticks advance the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Ticks do nothing; the grid is edited cell by cell
    #[default]
    Editing,
    /// Every tick computes one generation
    Running,
}

/// A grid under evolution together with its run state
#[derive(Debug, Clone)]
pub struct Session {
    engine: Engine,
    grid: Grid,
    generation: u64,
    mode: RunMode,
    parallel: bool,
}

impl Session {
    /// Start editing a blank grid
    pub fn new(engine: Engine) -> Self {
        let grid = engine.blank_grid();
        Self {
            engine,
            grid,
            generation: 0,
            mode: RunMode::Editing,
            parallel: false,
        }
    }

    /// Start editing an existing grid
    ///
    /// # Errors
    ///
    /// Returns an error if the grid does not fit the engine's configuration
    /// or holds undeclared states
    pub fn with_grid(engine: Engine, grid: Grid) -> Result<Self> {
        engine.validate_grid(&grid)?;
        Ok(Self {
            grid,
            ..Self::new(engine)
        })
    }

    /// Compute generations across the rayon pool
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The engine driving this session
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The current grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generations computed since the last reset
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Current run mode
    pub const fn mode(&self) -> RunMode {
        self.mode
    }

    /// True while ticks advance the grid
    pub fn is_running(&self) -> bool {
        self.mode == RunMode::Running
    }

    /// Switch between editing and running, returning the new mode
    pub const fn toggle_running(&mut self) -> RunMode {
        self.mode = match self.mode {
            RunMode::Editing => RunMode::Running,
            RunMode::Running => RunMode::Editing,
        };
        self.mode
    }

    /// Stop running and return to editing
    pub const fn pause(&mut self) {
        self.mode = RunMode::Editing;
    }

    /// Clear the grid, zero the generation counter and return to editing
    pub fn reset(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.mode = RunMode::Editing;
    }

    /// Cycle a cell to the next declared state, returning it
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate is outside the grid
    pub fn paint(&mut self, row: usize, col: usize) -> Result<StateId> {
        let state_count = self.engine.config().states().len();
        self.grid.cycle(row, col, state_count)
    }

    /// Reset a cell to state 0
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate is outside the grid
    pub fn erase(&mut self, row: usize, col: usize) -> Result<()> {
        self.grid.set(row, col, 0)
    }

    /// Write a specific state into a cell
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate is outside the grid or the state is
    /// not declared
    pub fn set_cell(&mut self, row: isize, col: isize, state: StateId) -> Result<()> {
        self.engine.set_cell(&mut self.grid, row, col, state)
    }

    /// Advance one generation if running
    ///
    /// Returns whether a generation was computed.
    ///
    /// # Errors
    ///
    /// Returns the step error; grid and generation are left unchanged
    pub fn tick(&mut self) -> Result<bool> {
        if self.is_running() {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Advance one generation regardless of mode
    ///
    /// # Errors
    ///
    /// Returns the step error; grid and generation are left unchanged
    pub fn advance(&mut self) -> Result<()> {
        let next = if self.parallel {
            self.engine.step_parallel(&self.grid)
        } else {
            self.engine.step(&self.grid)
        }
        .with_generation(self.generation)?;

        self.grid = next;
        self.generation += 1;
        Ok(())
    }
}

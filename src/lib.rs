//! Configurable 2D cellular automaton engine
//!
//! A rectangular grid of cells evolves under neighborhood-counting survive/birth
//! rules (as in Conway's Game of Life) or an arbitrary per-cell transition
//! function. Neighbor lookups beyond the edges follow a periodic, mirror or
//! open boundary policy, and every step produces a fresh grid from an
//! immutable snapshot of the previous one.

#![forbid(unsafe_code)]

/// Rules, configuration, the evolution engine and run sessions
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grids, boundary policies and neighborhoods
pub mod spatial;

pub use algorithm::{AutomatonConfig, Engine, RuleConfig, Session};
pub use io::error::{AutomatonError, Result};
pub use spatial::{BoundaryMode, Grid, Neighborhood, StateId};

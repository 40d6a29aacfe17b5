//! Spatial data structures and coordinate handling
//!
//! This module contains spatial-related functionality including:
//! - Boundary resolution for out-of-range coordinates
//! - Grid storage and cell editing
//! - Neighborhood offset sets

/// Boundary policies for neighbor lookups
pub mod boundary;
/// Grid storage and cell editing
pub mod grid;
/// Neighborhood offset sets
pub mod neighborhood;

pub use boundary::BoundaryMode;
pub use grid::{Grid, StateId};
pub use neighborhood::{Neighborhood, Offset};

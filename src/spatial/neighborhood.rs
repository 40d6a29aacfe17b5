//! Neighborhoods as sets of relative offsets
//!
//! Offsets are plain data: the standard shapes are constructors, but any set of
//! non-zero offsets is accepted, including sparse or long-range ones.

use std::collections::BTreeSet;

use crate::io::error::{Result, configuration_error};

/// Relative offset `(delta_row, delta_col)`
pub type Offset = (isize, isize);

/// Fixed set of offsets defining which cells influence a cell
///
/// Offsets are deduplicated and kept in sorted order, and never contain `(0, 0)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Neighborhood {
    offsets: Vec<Offset>,
}

impl Neighborhood {
    /// The 8-connected Moore neighborhood
    pub fn moore() -> Self {
        Self::moore_radius(1)
    }

    /// The 4-connected von Neumann neighborhood
    pub fn von_neumann() -> Self {
        Self::von_neumann_radius(1)
    }

    /// Every offset within Chebyshev distance `radius`
    pub fn moore_radius(radius: usize) -> Self {
        let r = radius as isize;
        Self::from_filtered(r, |_, _| true)
    }

    /// Every offset within Manhattan distance `radius`
    pub fn von_neumann_radius(radius: usize) -> Self {
        let r = radius as isize;
        Self::from_filtered(r, |dr, dc| dr.abs() + dc.abs() <= r)
    }

    /// Arbitrary offsets
    ///
    /// Duplicates are collapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if the set contains the zero offset
    pub fn custom(offsets: impl IntoIterator<Item = Offset>) -> Result<Self> {
        let set: BTreeSet<Offset> = offsets.into_iter().collect();
        if set.contains(&(0, 0)) {
            return Err(configuration_error(
                &"neighborhood must not contain the cell itself (offset (0, 0))",
            ));
        }
        Ok(Self {
            offsets: set.into_iter().collect(),
        })
    }

    fn from_filtered(radius: isize, keep: impl Fn(isize, isize) -> bool) -> Self {
        let mut offsets = Vec::new();
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if (dr, dc) != (0, 0) && keep(dr, dc) {
                    offsets.push((dr, dc));
                }
            }
        }
        Self { offsets }
    }

    /// The offsets in sorted order
    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    /// Number of offsets
    pub const fn len(&self) -> usize {
        self.offsets.len()
    }

    /// True if the neighborhood has no offsets
    pub const fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Largest absolute row or column component over all offsets
    pub fn extent(&self) -> usize {
        self.offsets
            .iter()
            .map(|&(dr, dc)| dr.unsigned_abs().max(dc.unsigned_abs()))
            .max()
            .unwrap_or(0)
    }
}

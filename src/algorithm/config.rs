//! Validated, immutable automaton configuration
//!
//! Everything the engine needs is bundled here and checked once, up front.
//! A configuration that builds is one the engine can step without hitting a
//! configuration error mid-run; only invalid states produced by transition
//! functions can still surface at step time.

use std::fmt;

use crate::algorithm::rules::RuleConfig;
use crate::algorithm::states::{ColorTable, StateSet};
use crate::io::error::{Result, configuration_error, invalid_parameter};
use crate::spatial::{BoundaryMode, Grid, Neighborhood};

/// Suspicious but usable configuration detected during validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Mirror boundary with offsets reaching past the opposite edge
    ///
    /// Lookups fold back more than once, which a single reflection would not.
    MirrorReflectionRange {
        /// Largest absolute offset component
        extent: usize,
        /// Grid rows
        rows: usize,
        /// Grid columns
        cols: usize,
    },
    /// Survive or birth count that exceeds the number of neighbors
    UnreachableCount {
        /// The count that can never be reached
        count: usize,
        /// Number of neighbors in the neighborhood
        neighbors: usize,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MirrorReflectionRange { extent, rows, cols } => write!(
                f,
                "neighborhood reaches {extent} cells, beyond a single mirror reflection on a {rows}x{cols} grid"
            ),
            Self::UnreachableCount { count, neighbors } => write!(
                f,
                "count {count} can never be reached with {neighbors} neighbors"
            ),
        }
    }
}

/// Everything needed to evolve a grid, validated at construction
#[derive(Debug, Clone)]
pub struct AutomatonConfig {
    dimensions: (usize, usize),
    states: StateSet,
    colors: ColorTable,
    neighborhood: Neighborhood,
    rule: RuleConfig,
    boundary: BoundaryMode,
    warnings: Vec<ConfigWarning>,
}

impl AutomatonConfig {
    /// Validate and bundle a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero
    /// - The color table does not have one color per state
    /// - A counting rule is paired with anything other than two states
    /// - A counting rule is paired with an empty neighborhood
    /// - A neighborhood offset reaches too far to add to a cell coordinate
    pub fn new(
        dimensions: (usize, usize),
        states: StateSet,
        colors: ColorTable,
        neighborhood: Neighborhood,
        rule: RuleConfig,
        boundary: BoundaryMode,
    ) -> Result<Self> {
        let (rows, cols) = dimensions;
        if rows == 0 || cols == 0 {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{rows}x{cols}"),
                &"rows and columns must be greater than 0",
            ));
        }

        if colors.len() != states.len() {
            return Err(configuration_error(&format!(
                "{} colors for {} states; every state needs exactly one color",
                colors.len(),
                states.len()
            )));
        }

        // Cell coordinate plus offset must stay within isize for every cell
        let extent = neighborhood.extent();
        let reach_limit = isize::MAX.unsigned_abs().saturating_sub(rows.max(cols));
        if extent > reach_limit {
            return Err(configuration_error(&format!(
                "neighborhood offset reach {extent} exceeds {reach_limit} on a {rows}x{cols} grid"
            )));
        }

        let mut warnings = Vec::new();

        if let RuleConfig::Counting(counting) = &rule {
            if states.len() != 2 {
                return Err(configuration_error(&format!(
                    "counting rules need exactly 2 states, got {}",
                    states.len()
                )));
            }
            if neighborhood.is_empty() {
                return Err(configuration_error(
                    &"counting rules need a non-empty neighborhood",
                ));
            }

            let neighbors = neighborhood.len();
            for set in [&counting.survive, &counting.birth] {
                warnings.extend(
                    set.to_vec()
                        .into_iter()
                        .filter(|&count| count > neighbors)
                        .map(|count| ConfigWarning::UnreachableCount { count, neighbors }),
                );
            }
        }

        if boundary == BoundaryMode::Mirror {
            if extent > rows - 1 || extent > cols - 1 {
                warnings.push(ConfigWarning::MirrorReflectionRange { extent, rows, cols });
            }
        }

        Ok(Self {
            dimensions,
            states,
            colors,
            neighborhood,
            rule,
            boundary,
            warnings,
        })
    }

    /// Same configuration for a different grid size
    ///
    /// # Errors
    ///
    /// Returns an error if the new dimensions fail validation
    pub fn with_dimensions(self, rows: usize, cols: usize) -> Result<Self> {
        Self::new(
            (rows, cols),
            self.states,
            self.colors,
            self.neighborhood,
            self.rule,
            self.boundary,
        )
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        self.dimensions
    }

    /// Declared states
    pub const fn states(&self) -> &StateSet {
        &self.states
    }

    /// Display colors, one per state
    pub const fn colors(&self) -> &ColorTable {
        &self.colors
    }

    /// Neighborhood offsets
    pub const fn neighborhood(&self) -> &Neighborhood {
        &self.neighborhood
    }

    /// Update rule
    pub const fn rule(&self) -> &RuleConfig {
        &self.rule
    }

    /// Boundary policy
    pub const fn boundary(&self) -> BoundaryMode {
        self.boundary
    }

    /// Warnings collected during validation
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// All-zero grid of the configured size
    pub fn blank_grid(&self) -> Grid {
        Grid::new(self.dimensions.0, self.dimensions.1)
    }
}

//! JSON rule files describing a counting-rule automaton
//!
//! ```json
//! {
//!   "width": 1000, "height": 800,
//!   "frontier": "Periodic",
//!   "states": ["dead", "alive"],
//!   "colors": [[10, 10, 10], [255, 255, 255]],
//!   "neighborhood": { "kind": "moore" },
//!   "evolution": { "birth": [3], "survive": [2, 3] }
//! }
//! ```
//!
//! `width` and `height` are screen sizes in pixels; the grid gets one cell per
//! `cell_size` pixels along each axis. Transition functions are Rust closures
//! and cannot be expressed in a rule file.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::algorithm::config::AutomatonConfig;
use crate::algorithm::rules::{CountingRule, RuleConfig};
use crate::algorithm::states::{ColorTable, Rgb, StateSet};
use crate::io::configuration::{DEFAULT_CELL_SIZE, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH};
use crate::io::error::{AutomatonError, Result, invalid_parameter};
use crate::spatial::{BoundaryMode, Grid, Neighborhood};

/// Neighborhood section of a rule file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NeighborhoodDef {
    /// 8-connected
    Moore,
    /// 4-connected
    VonNeumann,
    /// Every offset within Chebyshev distance `k`
    Radius {
        /// Reach along each axis
        k: usize,
    },
    /// Explicit `[row, col]` offsets
    Custom {
        /// Offsets relative to the cell
        offsets: Vec<[isize; 2]>,
    },
}

impl NeighborhoodDef {
    /// Build the neighborhood this section describes
    ///
    /// # Errors
    ///
    /// Returns an error if a custom neighborhood contains the zero offset
    pub fn build(&self) -> Result<Neighborhood> {
        match self {
            Self::Moore => Ok(Neighborhood::moore()),
            Self::VonNeumann => Ok(Neighborhood::von_neumann()),
            Self::Radius { k } => Ok(Neighborhood::moore_radius(*k)),
            Self::Custom { offsets } => {
                Neighborhood::custom(offsets.iter().map(|&[dr, dc]| (dr, dc)))
            }
        }
    }
}

/// Evolution section of a rule file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EvolutionDef {
    /// Explicit count lists
    Counts {
        /// Counts at which a dead cell becomes alive
        birth: Vec<usize>,
        /// Counts at which an alive cell survives
        survive: Vec<usize>,
    },
    /// B/S rulestring such as `B3/S23`
    Rulestring {
        /// The rulestring
        rule: String,
    },
}

impl EvolutionDef {
    /// Build the counting rule this section describes
    ///
    /// # Errors
    ///
    /// Returns an error if the rulestring cannot be parsed
    pub fn build(&self) -> Result<CountingRule> {
        match self {
            Self::Counts { birth, survive } => {
                Ok(CountingRule::new(survive.iter().copied(), birth.iter().copied()))
            }
            Self::Rulestring { rule } => CountingRule::parse(rule),
        }
    }
}

/// Parsed rule file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleFile {
    /// Screen width in pixels
    #[serde(default = "default_width")]
    pub width: usize,
    /// Screen height in pixels
    #[serde(default = "default_height")]
    pub height: usize,
    /// Cell side length in pixels
    #[serde(default = "default_cell_size")]
    pub cell_size: usize,
    /// Boundary policy; names match without regard to case
    #[serde(default, deserialize_with = "deserialize_frontier")]
    pub frontier: BoundaryMode,
    /// State names in id order
    pub states: Vec<String>,
    /// One color per state
    pub colors: Vec<Rgb>,
    /// Neighborhood
    pub neighborhood: NeighborhoodDef,
    /// Survive/birth rule
    pub evolution: EvolutionDef,
}

const FRONTIER_NAMES: &[&str] = &["Periodic", "Mirror", "Open"];

fn deserialize_frontier<'de, D>(deserializer: D) -> std::result::Result<BoundaryMode, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    BoundaryMode::from_name(&name).ok_or_else(|| de::Error::unknown_variant(&name, FRONTIER_NAMES))
}

const fn default_width() -> usize {
    DEFAULT_SCREEN_WIDTH
}

const fn default_height() -> usize {
    DEFAULT_SCREEN_HEIGHT
}

const fn default_cell_size() -> usize {
    DEFAULT_CELL_SIZE
}

impl RuleFile {
    /// Load and parse a rule file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid rule file
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| AutomatonError::FileSystem {
            path: path.to_path_buf(),
            operation: "read rule file",
            source: e,
        })?;
        Self::parse(&text, path)
    }

    /// Parse rule file text; `origin` is only used in error messages
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid rule file
    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| AutomatonError::RuleFile {
            path: PathBuf::from(origin),
            source: e,
        })
    }

    /// Grid dimensions (rows, cols) for the screen size and cell size
    ///
    /// # Errors
    ///
    /// Returns an error if the screen size or cell size is zero
    pub fn grid_dimensions(&self) -> Result<(usize, usize)> {
        for (parameter, value) in [
            ("width", self.width),
            ("height", self.height),
            ("cell_size", self.cell_size),
        ] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be greater than 0"));
            }
        }
        Ok(Grid::dimensions_for_screen(
            self.width,
            self.height,
            self.cell_size,
        ))
    }

    /// Validate the file into a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any section is invalid or the sections do not fit
    /// together (see [`AutomatonConfig::new`])
    pub fn to_config(&self) -> Result<AutomatonConfig> {
        let dimensions = self.grid_dimensions()?;
        let states = StateSet::new(self.states.iter().cloned())?;
        let colors = ColorTable::new(self.colors.clone());
        let neighborhood = self.neighborhood.build()?;
        let rule = RuleConfig::Counting(self.evolution.build()?);

        AutomatonConfig::new(
            dimensions,
            states,
            colors,
            neighborhood,
            rule,
            self.frontier,
        )
    }
}

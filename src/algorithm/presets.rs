//! Ready-made configurations

use crate::algorithm::config::AutomatonConfig;
use crate::algorithm::rules::{CountingRule, RuleConfig};
use crate::algorithm::states::{ColorTable, StateSet};
use crate::io::error::{Result, configuration_error};
use crate::spatial::{BoundaryMode, Neighborhood};

/// Conway's Game of Life on a torus
///
/// # Errors
///
/// Returns an error if either dimension is zero
pub fn conway(rows: usize, cols: usize) -> Result<AutomatonConfig> {
    AutomatonConfig::new(
        (rows, cols),
        StateSet::dead_alive(),
        ColorTable::monochrome(),
        Neighborhood::moore(),
        CountingRule::conway().into(),
        BoundaryMode::Periodic,
    )
}

/// B3/S23 over a sparse cross reaching three cells along each axis
///
/// # Errors
///
/// Returns an error if either dimension is zero
pub fn cross(rows: usize, cols: usize) -> Result<AutomatonConfig> {
    let neighborhood = Neighborhood::custom([(-3, 0), (3, 0), (0, -3), (0, 3)])?;
    AutomatonConfig::new(
        (rows, cols),
        StateSet::dead_alive(),
        ColorTable::monochrome(),
        neighborhood,
        CountingRule::conway().into(),
        BoundaryMode::Periodic,
    )
}

/// Three-state automaton driven by the right and lower neighbors
///
/// A cell becomes `b` when its right neighbor is `a`; otherwise it becomes
/// `c` when the cell below is `b`, and `a` in every other case. Off-grid
/// cells read as `a`.
///
/// # Errors
///
/// Returns an error if either dimension is zero
pub fn three_state(rows: usize, cols: usize) -> Result<AutomatonConfig> {
    let states = StateSet::new(["a", "b", "c"])?;
    let (Some(a), Some(b), Some(c)) = (states.id("a"), states.id("b"), states.id("c")) else {
        return Err(configuration_error(&"states a, b and c must be declared"));
    };

    let rule = RuleConfig::transition(move |view, row, col| {
        if view.get(row, col + 1) == a {
            b
        } else if view.get(row + 1, col) == b {
            c
        } else {
            a
        }
    });

    AutomatonConfig::new(
        (rows, cols),
        states,
        ColorTable::new(vec![[255, 0, 0], [0, 0, 0], [0, 255, 0]]),
        Neighborhood::custom([(0, 1), (1, 0)])?,
        rule,
        BoundaryMode::Open,
    )
}

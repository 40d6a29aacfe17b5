//! Update rules: survive/birth counting and arbitrary transition functions

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::algorithm::counts::CountSet;
use crate::algorithm::states::StateSet;
use crate::io::error::{AutomatonError, Result, rule_parse_error};
use crate::spatial::{BoundaryMode, Grid, StateId};

/// State id counted as alive by counting rules
pub const ALIVE: StateId = 1;
/// State id counting rules produce for dead cells
pub const DEAD: StateId = 0;

/// Read-only, boundary-aware view of the grid being evolved
///
/// Handed to transition functions so every lookup goes through the configured
/// boundary policy and never observes next-generation values.
#[derive(Clone, Copy)]
pub struct GridView<'a> {
    grid: &'a Grid,
    boundary: BoundaryMode,
    states: &'a StateSet,
}

impl<'a> GridView<'a> {
    /// Create a view over a grid
    pub const fn new(grid: &'a Grid, boundary: BoundaryMode, states: &'a StateSet) -> Self {
        Self {
            grid,
            boundary,
            states,
        }
    }

    /// State at any coordinate, resolved through the boundary policy
    pub fn get(&self, row: isize, col: isize) -> StateId {
        self.grid.get_resolved(self.boundary, row, col)
    }

    /// Id of a state by name
    pub fn state(&self, name: &str) -> Option<StateId> {
        self.states.id(name)
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// The boundary policy lookups go through
    pub const fn boundary(&self) -> BoundaryMode {
        self.boundary
    }
}

/// Per-cell next-state function: `(view, row, col) -> state`
pub type TransitionFn = dyn Fn(&GridView<'_>, isize, isize) -> StateId + Send + Sync;

/// Survive/birth thresholds over the count of alive neighbors
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountingRule {
    /// Counts at which an alive cell stays alive
    pub survive: CountSet,
    /// Counts at which a dead cell becomes alive
    pub birth: CountSet,
}

impl CountingRule {
    /// Build a rule from survive and birth counts
    pub fn new(
        survive: impl IntoIterator<Item = usize>,
        birth: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            survive: survive.into_iter().collect(),
            birth: birth.into_iter().collect(),
        }
    }

    /// Conway's Game of Life, B3/S23
    pub fn conway() -> Self {
        Self::new([2, 3], [3])
    }

    /// Next state of a cell given its current state and alive neighbor count
    pub fn next_state(&self, current: StateId, alive_neighbors: usize) -> StateId {
        let counts = if current == ALIVE {
            &self.survive
        } else {
            &self.birth
        };
        if counts.contains(alive_neighbors) {
            ALIVE
        } else {
            DEAD
        }
    }

    /// Parse a B/S rulestring such as `B3/S23`, `s23/b3` or `23/3`
    ///
    /// Digits run together are single counts; use commas for counts above 9,
    /// as in `B3/S2,3,12`. A bare `S/B` pair without letters is also accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty, repeats a part, or contains
    /// anything other than counts after a `B` or `S` prefix
    pub fn parse(rule: &str) -> Result<Self> {
        let trimmed = rule.trim();
        if trimmed.is_empty() {
            return Err(rule_parse_error(rule, &"rule is empty"));
        }

        let parts: Vec<&str> = trimmed.split('/').map(str::trim).collect();
        let has_prefix = parts
            .iter()
            .any(|p| p.starts_with(['b', 'B', 's', 'S']));

        if !has_prefix {
            return match parts.as_slice() {
                [survive, birth] => Ok(Self {
                    survive: parse_counts(rule, survive)?,
                    birth: parse_counts(rule, birth)?,
                }),
                _ => Err(rule_parse_error(
                    rule,
                    &"expected B<counts>/S<counts> or <survive>/<birth>",
                )),
            };
        }

        let mut survive = None;
        let mut birth = None;
        for part in parts {
            let mut chars = part.chars();
            let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut birth,
                Some('S') => &mut survive,
                _ => {
                    return Err(rule_parse_error(
                        rule,
                        &format!("part '{part}' must start with B or S"),
                    ));
                }
            };
            if slot.is_some() {
                return Err(rule_parse_error(
                    rule,
                    &format!("part '{part}' is given more than once"),
                ));
            }
            *slot = Some(parse_counts(rule, chars.as_str())?);
        }

        Ok(Self {
            survive: survive.unwrap_or_default(),
            birth: birth.unwrap_or_default(),
        })
    }
}

fn parse_counts(rule: &str, digits: &str) -> Result<CountSet> {
    if digits.contains(',') {
        digits
            .split(',')
            .map(|n| {
                n.trim()
                    .parse::<usize>()
                    .map_err(|e| rule_parse_error(rule, &format!("'{n}': {e}")))
            })
            .collect()
    } else {
        digits
            .chars()
            .map(|c| {
                c.to_digit(10).map(|d| d as usize).ok_or_else(|| {
                    rule_parse_error(rule, &format!("'{c}' is not a neighbor count"))
                })
            })
            .collect()
    }
}

impl FromStr for CountingRule {
    type Err = AutomatonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CountingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", self.birth, self.survive)
    }
}

/// How a cell's next state is computed
#[derive(Clone)]
pub enum RuleConfig {
    /// Survive/birth on alive-neighbor counts; requires exactly two states
    Counting(CountingRule),
    /// Arbitrary per-cell function of the current grid
    Transition(Arc<TransitionFn>),
}

impl RuleConfig {
    /// Wrap a closure as a transition rule
    pub fn transition<F>(f: F) -> Self
    where
        F: Fn(&GridView<'_>, isize, isize) -> StateId + Send + Sync + 'static,
    {
        Self::Transition(Arc::new(f))
    }

    /// The counting rule, if this is one
    pub const fn as_counting(&self) -> Option<&CountingRule> {
        match self {
            Self::Counting(rule) => Some(rule),
            Self::Transition(_) => None,
        }
    }
}

impl From<CountingRule> for RuleConfig {
    fn from(rule: CountingRule) -> Self {
        Self::Counting(rule)
    }
}

impl fmt::Debug for RuleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Counting(rule) => f.debug_tuple("Counting").field(rule).finish(),
            Self::Transition(_) => f.write_str("Transition(<fn>)"),
        }
    }
}

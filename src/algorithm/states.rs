//! Named cell states and their display colors

use crate::io::error::{Result, configuration_error};
use crate::spatial::StateId;

/// Maximum number of distinct states a grid can hold
pub const MAX_STATES: usize = StateId::MAX as usize + 1;

/// RGB display color
pub type Rgb = [u8; 3];

/// Ordered mapping from state names to dense ids `0..N`
///
/// The position of a name is its id, so the first name is the background
/// state that off-grid cells read as under an open boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSet {
    names: Vec<String>,
}

impl StateSet {
    /// Build a state set from names in id order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No names are given
    /// - A name is empty or repeated
    /// - There are more names than `MAX_STATES`
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return Err(configuration_error(&"at least one state is required"));
        }
        if names.len() > MAX_STATES {
            return Err(configuration_error(&format!(
                "{} states declared, at most {MAX_STATES} are supported",
                names.len()
            )));
        }
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(configuration_error(&"state names must not be empty"));
        }
        for (i, name) in names.iter().enumerate() {
            if names.iter().skip(i + 1).any(|other| other == name) {
                return Err(configuration_error(&format!(
                    "state '{name}' is declared more than once"
                )));
            }
        }

        Ok(Self { names })
    }

    /// The classic two-state set: `dead` (0) and `alive` (1)
    pub fn dead_alive() -> Self {
        Self {
            names: vec!["dead".to_string(), "alive".to_string()],
        }
    }

    /// Id of a state by name
    pub fn id(&self, name: &str) -> Option<StateId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| i as StateId)
    }

    /// Name of a state by id
    pub fn name(&self, id: StateId) -> Option<&str> {
        self.names.get(usize::from(id)).map(String::as_str)
    }

    /// True if `id` names a declared state
    pub fn contains(&self, id: StateId) -> bool {
        usize::from(id) < self.names.len()
    }

    /// Number of states
    pub const fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed set; kept for API symmetry with `len`
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// State names in id order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Display color for each state id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    colors: Vec<Rgb>,
}

impl ColorTable {
    /// Colors in state id order
    pub const fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    /// Near-black background and white foreground
    pub fn monochrome() -> Self {
        Self::new(vec![[10, 10, 10], [255, 255, 255]])
    }

    /// Color of a state
    pub fn color(&self, id: StateId) -> Option<Rgb> {
        self.colors.get(usize::from(id)).copied()
    }

    /// Number of colors
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// True if the table has no colors
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors in state id order
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Look up the state drawn with an exact color
    pub fn state_for(&self, color: Rgb) -> Option<StateId> {
        self.colors
            .iter()
            .position(|&c| c == color)
            .map(|i| i as StateId)
    }
}

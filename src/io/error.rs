//! Error types and context management for automaton operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all automaton operations
#[derive(Debug)]
pub enum AutomatonError {
    /// Configuration is internally inconsistent and cannot be used
    ///
    /// Raised while building an `AutomatonConfig`, before any step runs.
    Configuration {
        /// Description of what is wrong with the configuration
        reason: String,
    },

    /// A single parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A cell holds or would receive a state id outside the state set
    InvalidState {
        /// Row of the offending cell
        row: usize,
        /// Column of the offending cell
        col: usize,
        /// The invalid state id
        state: u8,
        /// Number of declared states
        state_count: usize,
    },

    /// Direct cell access outside the grid
    OutOfRange {
        /// Requested row
        row: isize,
        /// Requested column
        col: isize,
        /// Grid dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Grid dimensions do not match the configured dimensions
    DimensionMismatch {
        /// Configured dimensions (rows, cols)
        expected: (usize, usize),
        /// Dimensions of the grid supplied
        found: (usize, usize),
    },

    /// Rulestring could not be parsed
    RuleParse {
        /// The rulestring as given
        rule: String,
        /// Description of the parse failure
        reason: String,
    },

    /// Rule file could not be parsed
    RuleFile {
        /// Path to the rule file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A step failed while running a session
    Step {
        /// Generation the session was at when the step failed
        generation: u64,
        /// The engine error
        source: Box<AutomatonError>,
    },
}

impl fmt::Display for AutomatonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { reason } => {
                write!(f, "Invalid configuration: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidState {
                row,
                col,
                state,
                state_count,
            } => {
                write!(
                    f,
                    "State {state} at ({row}, {col}) is not a declared state (have {state_count})"
                )
            }
            Self::OutOfRange {
                row,
                col,
                dimensions,
            } => {
                write!(
                    f,
                    "Cell ({row}, {col}) is outside the grid (size {}x{})",
                    dimensions.0, dimensions.1
                )
            }
            Self::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "Grid size {}x{} does not match configured size {}x{}",
                    found.0, found.1, expected.0, expected.1
                )
            }
            Self::RuleParse { rule, reason } => {
                write!(f, "Cannot parse rule '{rule}': {reason}")
            }
            Self::RuleFile { path, source } => {
                write!(f, "Failed to read rule file '{}': {source}", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Step { generation, source } => {
                write!(f, "Step from generation {generation} failed: {source}")
            }
        }
    }
}

impl std::error::Error for AutomatonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::RuleFile { source, .. } => Some(source),
            Self::Step { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl AutomatonError {
    /// True for errors a caller can recover from by skipping or retrying a step
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidState { .. } => true,
            Self::Step { source, .. } => source.is_recoverable(),
            _ => false,
        }
    }
}

/// Convenience type alias for automaton results
pub type Result<T> = std::result::Result<T, AutomatonError>;

/// Attaches the session generation to step errors
pub trait WithGeneration<T> {
    /// Wrap an error in [`AutomatonError::Step`]
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped with the generation it occurred at
    fn with_generation(self, generation: u64) -> Result<T>;
}

impl<T> WithGeneration<T> for Result<T> {
    fn with_generation(self, generation: u64) -> Result<T> {
        self.map_err(|e| AutomatonError::Step {
            generation,
            source: Box::new(e),
        })
    }
}

impl From<std::io::Error> for AutomatonError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a configuration error
pub fn configuration_error(reason: &impl ToString) -> AutomatonError {
    AutomatonError::Configuration {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AutomatonError {
    AutomatonError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a rulestring parse error
pub fn rule_parse_error(rule: &str, reason: &impl ToString) -> AutomatonError {
    AutomatonError::RuleParse {
        rule: rule.to_string(),
        reason: reason.to_string(),
    }
}

/// Validated automaton configuration and warnings
pub mod config;
/// Neighbor count sets for survive/birth rules
pub mod counts;
/// Grid evolution engine
pub mod engine;
/// Ready-made configurations
pub mod presets;
/// Counting rules, transition functions and rulestrings
pub mod rules;
/// Caller-side run state machine
pub mod session;
/// State names and display colors
pub mod states;

pub use config::{AutomatonConfig, ConfigWarning};
pub use engine::Engine;
pub use rules::{CountingRule, GridView, RuleConfig};
pub use session::{RunMode, Session};
pub use states::{ColorTable, StateSet};

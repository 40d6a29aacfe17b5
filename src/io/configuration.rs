//! Runtime configuration defaults

// Screen geometry the grid size is derived from
/// Side length of one cell in pixels
pub const DEFAULT_CELL_SIZE: usize = 20;
/// Default screen width in pixels
pub const DEFAULT_SCREEN_WIDTH: usize = 800;
/// Default screen height in pixels
pub const DEFAULT_SCREEN_HEIGHT: usize = 600;

/// Color of the one pixel gutter between rendered cells
pub const GRID_LINE_COLOR: [u8; 3] = [40, 40, 40];

// Default values for configurable parameters
/// Fixed seed for reproducible random fills
pub const DEFAULT_SEED: u64 = 42;

/// Default number of generations to compute
pub const DEFAULT_GENERATIONS: u64 = 100;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 100;
/// Multiplier applied to the final frame delay so the end state stays visible
pub const FINAL_FRAME_HOLD: u32 = 10;
/// Upper bound on GIF frames reserved before a run starts
pub const MAX_PREALLOCATED_FRAMES: usize = 1024;

/// Progress bar width in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

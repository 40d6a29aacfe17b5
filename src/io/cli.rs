//! Command-line interface for headless automaton runs

use crate::algorithm::config::AutomatonConfig;
use crate::algorithm::engine::Engine;
use crate::algorithm::presets;
use crate::algorithm::session::Session;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_GENERATIONS, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH,
    DEFAULT_SEED, GIF_FRAME_DELAY_MS, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_grid_as_png;
use crate::io::prefill::{grid_from_png, random_grid};
use crate::io::progress::ProgressManager;
use crate::io::rulefile::RuleFile;
use crate::io::visualization::GenerationCapture;
use crate::spatial::{Grid, StateId};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Built-in configurations selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Conway's Game of Life on a torus
    Conway,
    /// B3/S23 over a sparse cross of reach three
    Cross,
    /// Three-state transition automaton with an open boundary
    ThreeState,
}

impl Preset {
    /// Build the preset for a grid size
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn build(self, rows: usize, cols: usize) -> Result<AutomatonConfig> {
        match self {
            Self::Conway => presets::conway(rows, cols),
            Self::Cross => presets::cross(rows, cols),
            Self::ThreeState => presets::three_state(rows, cols),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Conway => "conway",
            Self::Cross => "cross",
            Self::ThreeState => "three_state",
        }
    }
}

#[derive(Parser)]
#[command(name = "cellgrid")]
#[command(author, version, about = "Run a 2D cellular automaton and render the result")]
/// Command-line arguments for a headless automaton run
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// JSON rule file; a preset is used when omitted
    #[arg(value_name = "RULES", conflicts_with = "preset")]
    pub rules: Option<PathBuf>,

    /// Built-in configuration to run
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Number of generations to compute
    #[arg(short, long, default_value_t = DEFAULT_GENERATIONS)]
    pub generations: u64,

    /// Output PNG path for the final generation
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write every generation as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Spread each step across all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// PNG to seed the grid from, one pixel per cell
    #[arg(long, conflicts_with = "density")]
    pub prefill: Option<PathBuf>,

    /// Fill the grid randomly at this density (0.0 to 1.0)
    #[arg(short, long)]
    pub density: Option<f64>,

    /// Random seed for reproducible fills
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Screen width in pixels
    #[arg(short = 'W', long)]
    pub width: Option<usize>,

    /// Screen height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Cell side length in pixels
    #[arg(short, long)]
    pub cell_size: Option<usize>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// The preset to use when no rule file is given
    pub fn effective_preset(&self) -> Preset {
        self.preset.unwrap_or(Preset::Conway)
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Generations computed
    pub generation: u64,
    /// Cells not in state 0 after the last generation
    pub population: usize,
    /// Where the final PNG was written
    pub output: PathBuf,
    /// Where the GIF was written, if requested
    pub visualization: Option<PathBuf>,
}

/// Orchestrates a run: configuration, seeding, stepping and export
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, seeding, stepping or export fails
    // Allow print for user feedback on warnings and the final summary
    #[allow(clippy::print_stderr)]
    pub fn run(&self) -> Result<RunSummary> {
        let (config, cell_size) = self.load_config()?;

        if !self.cli.quiet {
            for warning in config.warnings() {
                eprintln!("warning: {warning}");
            }
        }

        let grid = self.initial_grid(&config)?;
        let colors = config.colors().clone();
        let mut session = Session::with_grid(Engine::new(config), grid)?.parallel(self.cli.parallel);

        let mut capture = self.cli.visualize.then(|| {
            GenerationCapture::new(colors.clone(), cell_size, self.cli.generations)
        });
        if let Some(ref mut capture) = capture {
            capture.record(session.grid());
        }

        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(&self.label(), self.cli.generations));

        session.toggle_running();
        for _ in 0..self.cli.generations {
            session.tick()?;
            if let Some(ref mut capture) = capture {
                capture.record(session.grid());
            }
            if let Some(ref pm) = progress {
                pm.update(session.generation(), live_population(session.grid()));
            }
        }
        session.pause();

        if let Some(ref pm) = progress {
            pm.finish();
        }

        let output = self.output_path();
        export_grid_as_png(session.grid(), &colors, cell_size, &output)?;

        let visualization = match capture {
            Some(capture) => {
                let path = Self::sibling_path(&output, "_visualization", "gif");
                capture.export_gif(&path, GIF_FRAME_DELAY_MS)?;
                Some(path)
            }
            None => None,
        };

        let summary = RunSummary {
            generation: session.generation(),
            population: live_population(session.grid()),
            output,
            visualization,
        };

        if !self.cli.quiet {
            eprintln!(
                "{}: generation {}, population {}, written to {}",
                self.label(),
                summary.generation,
                summary.population,
                summary.output.display()
            );
        }

        Ok(summary)
    }

    /// Build the configuration and the cell size used for rendering
    ///
    /// # Errors
    ///
    /// Returns an error if the rule file cannot be loaded or the configuration
    /// is invalid
    pub fn load_config(&self) -> Result<(AutomatonConfig, usize)> {
        if let Some(path) = &self.cli.rules {
            let mut rule_file = RuleFile::from_path(path)?;
            if let Some(width) = self.cli.width {
                rule_file.width = width;
            }
            if let Some(height) = self.cli.height {
                rule_file.height = height;
            }
            if let Some(cell_size) = self.cli.cell_size {
                rule_file.cell_size = cell_size;
            }
            let config = rule_file.to_config()?;
            return Ok((config, rule_file.cell_size));
        }

        let cell_size = self.cli.cell_size.unwrap_or(DEFAULT_CELL_SIZE);
        if cell_size == 0 {
            return Err(invalid_parameter("cell_size", &cell_size, &"must be greater than 0"));
        }
        let (rows, cols) = Grid::dimensions_for_screen(
            self.cli.width.unwrap_or(DEFAULT_SCREEN_WIDTH),
            self.cli.height.unwrap_or(DEFAULT_SCREEN_HEIGHT),
            cell_size,
        );
        let config = self.cli.effective_preset().build(rows, cols)?;
        Ok((config, cell_size))
    }

    fn initial_grid(&self, config: &AutomatonConfig) -> Result<Grid> {
        if let Some(path) = &self.cli.prefill {
            return grid_from_png(path, config.colors(), config.dimensions());
        }
        if let Some(density) = self.cli.density {
            // Seed the first non-background state
            let state: StateId = if config.states().len() > 1 { 1 } else { 0 };
            return random_grid(config.dimensions(), state, density, self.cli.seed);
        }
        Ok(config.blank_grid())
    }

    fn label(&self) -> String {
        match &self.cli.rules {
            Some(path) => path
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
            None => self.cli.effective_preset().name().to_string(),
        }
    }

    /// Path of the final PNG
    pub fn output_path(&self) -> PathBuf {
        if let Some(output) = &self.cli.output {
            return output.clone();
        }
        match &self.cli.rules {
            Some(path) => Self::sibling_path(path, OUTPUT_SUFFIX, "png"),
            None => PathBuf::from(format!("{}{OUTPUT_SUFFIX}.png", self.label())),
        }
    }

    fn sibling_path(path: &Path, suffix: &str, extension: &str) -> PathBuf {
        let stem = path.file_stem().unwrap_or_default();
        let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

        if let Some(parent) = path.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}

fn live_population(grid: &Grid) -> usize {
    let (rows, cols) = grid.dimensions();
    rows * cols - grid.population(0)
}

//! CLI entry point for headless cellular automaton runs

use cellgrid::io::cli::{Cli, Runner};
use clap::Parser;

fn main() -> cellgrid::Result<()> {
    let cli = Cli::parse();
    Runner::new(cli).run()?;
    Ok(())
}

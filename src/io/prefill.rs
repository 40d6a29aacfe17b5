//! Initial grid seeding from PNG images or seeded random soups

use crate::algorithm::states::ColorTable;
use crate::io::error::{AutomatonError, Result, invalid_parameter};
use crate::spatial::{Grid, StateId};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::Path;

/// Seed a grid from a PNG, one pixel per cell
///
/// The image is placed at the top-left corner. Pixels whose RGB color is in
/// the color table become that state; every other pixel, and every cell the
/// image does not cover, stays in state 0.
///
/// # Errors
///
/// Returns an error if:
/// - The PNG file cannot be loaded
/// - The image is larger than the grid
/// - The image contains no color from the color table
pub fn grid_from_png(
    path: &Path,
    colors: &ColorTable,
    dimensions: (usize, usize),
) -> Result<Grid> {
    let img = image::open(path).map_err(|e| AutomatonError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let rgb_img = img.to_rgb8();
    let (width, height) = rgb_img.dimensions();
    let (rows, cols) = dimensions;
    if height as usize > rows || width as usize > cols {
        return Err(invalid_parameter(
            "prefill",
            &format!("{width}x{height}"),
            &format!("image must fit inside the {cols}x{rows} grid"),
        ));
    }

    let mut grid = Grid::new(rows, cols);
    let mut matched = 0usize;

    for (x, y, pixel) in rgb_img.enumerate_pixels() {
        if let Some(state) = colors.state_for(pixel.0) {
            // Image x is the grid column
            grid.set(y as usize, x as usize, state)?;
            matched += 1;
        }
    }

    if matched == 0 {
        return Err(invalid_parameter(
            "prefill",
            &path.display(),
            &"image contains no colors from the state color table",
        ));
    }

    Ok(grid)
}

/// Fill a grid with `state` at the given density, reproducibly for a seed
///
/// # Errors
///
/// Returns an error if `density` is not within `0.0..=1.0`
pub fn random_grid(
    dimensions: (usize, usize),
    state: StateId,
    density: f64,
    seed: u64,
) -> Result<Grid> {
    if !(0.0..=1.0).contains(&density) {
        return Err(invalid_parameter(
            "density",
            &density,
            &"must be between 0 and 1",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let (rows, cols) = dimensions;
    let mut grid = Grid::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            if rng.random_bool(density) {
                grid.set(row, col, state)?;
            }
        }
    }
    Ok(grid)
}

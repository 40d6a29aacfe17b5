//! PNG rendering of a grid through its color table

use crate::algorithm::states::ColorTable;
use crate::io::configuration::GRID_LINE_COLOR;
use crate::io::error::{AutomatonError, Result, invalid_parameter};
use crate::spatial::Grid;
use image::{Rgb, RgbImage};
use std::path::Path;

/// Render a grid with `cell_size` pixel cells separated by a one pixel gutter
///
/// Cells of size 1 are drawn without a gutter.
///
/// # Errors
///
/// Returns an error if:
/// - `cell_size` is zero
/// - The image would be wider or taller than `u32::MAX` pixels
/// - A cell holds a state the color table has no color for
pub fn render_grid(grid: &Grid, colors: &ColorTable, cell_size: usize) -> Result<RgbImage> {
    if cell_size == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"must be greater than 0",
        ));
    }

    let pixels = |cells: usize| {
        cells
            .checked_mul(cell_size)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                invalid_parameter(
                    "cell_size",
                    &cell_size,
                    &format!("{cells} cells of this size exceed the maximum image side"),
                )
            })
    };
    let width = pixels(grid.cols())?;
    let height = pixels(grid.rows())?;
    let mut img = RgbImage::from_pixel(width, height, Rgb(GRID_LINE_COLOR));

    // Match the viewer: each cell leaves its last pixel row and column as gutter
    let inner = if cell_size > 1 { cell_size - 1 } else { 1 };

    for ((row, col), &state) in grid.as_array().indexed_iter() {
        let color = colors.color(state).ok_or(AutomatonError::InvalidState {
            row,
            col,
            state,
            state_count: colors.len(),
        })?;

        let x0 = col * cell_size;
        let y0 = row * cell_size;
        for y in y0..y0 + inner {
            for x in x0..x0 + inner {
                img.put_pixel(x as u32, y as u32, Rgb(color));
            }
        }
    }

    Ok(img)
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The grid cannot be rendered (see [`render_grid`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid: &Grid,
    colors: &ColorTable,
    cell_size: usize,
    output_path: &Path,
) -> Result<()> {
    let img = render_grid(grid, colors, cell_size)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AutomatonError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| AutomatonError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

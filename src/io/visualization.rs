//! Frame capture and GIF generation for automaton runs

use crate::algorithm::states::ColorTable;
use crate::io::configuration::{FINAL_FRAME_HOLD, MAX_PREALLOCATED_FRAMES};
use crate::io::error::{AutomatonError, Result};
use crate::io::image::render_grid;
use crate::spatial::Grid;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame};
use std::path::Path;

/// Captures one grid per generation for later animation
pub struct GenerationCapture {
    generations: Vec<Grid>,
    colors: ColorTable,
    cell_size: usize,
}

impl GenerationCapture {
    /// Start an empty capture rendered with the given colors and cell size
    ///
    /// At most `MAX_PREALLOCATED_FRAMES` frames are reserved up front; longer
    /// runs grow the buffer as frames arrive.
    pub fn new(colors: ColorTable, cell_size: usize, expected_generations: u64) -> Self {
        let reserved = usize::try_from(expected_generations)
            .map_or(MAX_PREALLOCATED_FRAMES, |n| n.min(MAX_PREALLOCATED_FRAMES));
        Self {
            generations: Vec::with_capacity(reserved.saturating_add(1)),
            colors,
            cell_size,
        }
    }

    /// Records a snapshot of the grid
    pub fn record(&mut self, grid: &Grid) {
        self.generations.push(grid.clone());
    }

    /// Returns all recorded grids in order
    pub fn generations(&self) -> &[Grid] {
        &self.generations
    }

    /// Returns the number of recorded grids
    pub const fn frame_count(&self) -> usize {
        self.generations.len()
    }

    /// Export the captured generations as a looping GIF
    ///
    /// The last frame is held longer so the final state is readable.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No generations were captured
    /// - A grid cannot be rendered
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.generations.is_empty() {
            return Err(AutomatonError::InvalidParameter {
                parameter: "generations",
                value: "0".to_string(),
                reason: "No generations captured for visualization".to_string(),
            });
        }

        let frames = self.render_frames(frame_delay_ms)?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AutomatonError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| AutomatonError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let export_error = |e| AutomatonError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        };
        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;
        encoder.encode_frames(frames).map_err(export_error)?;

        Ok(())
    }

    fn render_frames(&self, delay_ms: u32) -> Result<Vec<Frame>> {
        let last = self.generations.len().saturating_sub(1);
        self.generations
            .iter()
            .enumerate()
            .map(|(i, grid)| {
                let img = render_grid(grid, &self.colors, self.cell_size)?;
                let rgba = DynamicImage::ImageRgb8(img).into_rgba8();
                let delay = if i == last {
                    delay_ms.saturating_mul(FINAL_FRAME_HOLD)
                } else {
                    delay_ms
                };
                Ok(Frame::from_parts(
                    rgba,
                    0,
                    0,
                    Delay::from_numer_denom_ms(delay, 1),
                ))
            })
            .collect()
    }
}

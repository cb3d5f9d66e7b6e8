//! Preview image output.
//!
//! Paints each quantized cell with its palette colour and upscales with
//! nearest-neighbour replication so block edges stay crisp.

use std::path::Path;

use image::{ImageBuffer, RgbImage};

use crate::error::{McPixelError, Result};
use crate::types::{grid_size, IndexGrid, Palette};

/// Upscale factor for preview images.
pub const PREVIEW_SCALE: u32 = 8;

/// Render a quantized grid to an image.
///
/// # Arguments
///
/// * `grid` - Palette indices, one per cell
/// * `palette` - Palette the indices refer to
/// * `scale` - Integer scale factor (0 is treated as 1)
pub fn render_preview(grid: &IndexGrid, palette: &Palette, scale: u32) -> RgbImage {
    let scale = scale.max(1);
    let (width, height) = grid_size(grid);

    let mut img: RgbImage = ImageBuffer::new(width as u32 * scale, height as u32 * scale);

    for (y, row) in grid.iter().enumerate() {
        for (x, &index) in row.iter().enumerate() {
            let rgb = image::Rgb(palette.colour_of(index).to_array());

            for sy in 0..scale {
                for sx in 0..scale {
                    let px = x as u32 * scale + sx;
                    let py = y as u32 * scale + sy;
                    img.put_pixel(px, py, rgb);
                }
            }
        }
    }

    img
}

/// Render a preview and save it to `path`.
///
/// The encoding is chosen from the file extension.
pub fn write_preview(grid: &IndexGrid, palette: &Palette, path: &Path, scale: u32) -> Result<()> {
    let img = render_preview(grid, palette, scale);

    img.save(path).map_err(|e| McPixelError::Preview {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

//! Core domain types for mcpixel.
//!
//! - `Rgb` - opaque colour values
//! - `Palette` - ordered named colours for one block family
//! - `PixelGrid` / `IndexGrid` - row-major image and quantized grids

mod colour;
mod palette;

pub use colour::Rgb;
pub use palette::{BlockFamily, Palette, CONCRETE_PALETTE, MAX_PALETTE_SIZE, WOOL_PALETTE};

/// Resized image pixels, indexed `[row][col]`.
pub type PixelGrid = Vec<Vec<Rgb>>;

/// Palette indices, same shape as the [`PixelGrid`] they came from.
pub type IndexGrid = Vec<Vec<u8>>;

/// Width and height of a row-major grid.
pub fn grid_size<T>(grid: &[Vec<T>]) -> (usize, usize) {
    let height = grid.len();
    let width = grid.first().map_or(0, |r| r.len());
    (width, height)
}

//! mcpixel - Minecraft pixel art generator
//!
//! Maps an image onto a 16-colour block palette and writes one `setblock`
//! command per pixel into a `.mcfunction` file, with an optional preview.

pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod types;

pub use error::{McPixelError, Result};
pub use manifest::Manifest;
pub use pipeline::{convert, ConvertOptions, ConvertReport, PreviewOutcome};
pub use render::{
    emit_commands, normalize, offset_token, quantize, render_preview, write_commands,
    write_preview, EmitOptions, Offsets,
};
pub use types::{BlockFamily, IndexGrid, Palette, PixelGrid, Rgb};

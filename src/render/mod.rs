//! Rendering stages for mcpixel.
//!
//! Each stage is a plain function: normalize the source image, quantize it
//! to a block palette, then emit commands and an optional preview.

mod mcfunction;
mod normalize;
mod preview;
mod quantize;

pub use mcfunction::{
    block_id, check_command_limit, emit_commands, offset_token, setblock_command,
    write_commands, EmitOptions, Offsets, DEFAULT_MAX_COMMANDS, NAMESPACE,
};
pub use normalize::{flatten_alpha, load_image, normalize, target_height};
pub use preview::{render_preview, write_preview, PREVIEW_SCALE};
pub use quantize::quantize;

//! `.mcfunction` output.
//!
//! Turns a quantized grid into one `setblock` command per cell and writes
//! them to a function file, one command per line.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{McPixelError, Result};
use crate::types::{grid_size, BlockFamily, IndexGrid, Palette};

/// Namespace prefix for every block id.
pub const NAMESPACE: &str = "minecraft";

/// Default safety limit on emitted commands.
pub const DEFAULT_MAX_COMMANDS: usize = 100_000;

/// Start offsets for the placed image.
///
/// `x` and `z` are relative offsets, `y` is the absolute height of the
/// whole layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offsets {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Default for Offsets {
    fn default() -> Self {
        Self { x: 0, y: 64, z: 0 }
    }
}

/// Configuration for command emission.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Block family appended to each colour name.
    pub family: BlockFamily,
    /// Start offsets.
    pub start: Offsets,
    /// When set, row 0 maps to depth offset 0; otherwise the top row gets
    /// the largest depth offset.
    pub flip_vertical: bool,
    /// Abort when the grid would produce more commands than this.
    pub max_commands: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            family: BlockFamily::default(),
            start: Offsets::default(),
            flip_vertical: false,
            max_commands: DEFAULT_MAX_COMMANDS,
        }
    }
}

/// Format a relative coordinate: `0 -> "~"`, `5 -> "~5"`, `-2 -> "~-2"`.
pub fn offset_token(offset: i64) -> String {
    if offset == 0 {
        "~".to_string()
    } else {
        format!("~{}", offset)
    }
}

/// Full block id, e.g. `minecraft:white_concrete`.
pub fn block_id(namespace: &str, colour: &str, family: BlockFamily) -> String {
    format!("{}:{}_{}", namespace, colour, family)
}

/// Format a single `setblock` command.
pub fn setblock_command(x_offset: i64, y: i64, z_offset: i64, block: &str) -> String {
    format!(
        "setblock {} {} {} {} replace",
        offset_token(x_offset),
        y,
        offset_token(z_offset),
        block
    )
}

/// Check the projected command count against the limit.
pub fn check_command_limit(width: usize, height: usize, max_commands: usize) -> Result<usize> {
    let count = width.saturating_mul(height);
    if count > max_commands {
        return Err(McPixelError::CommandLimitExceeded {
            count,
            max: max_commands,
        });
    }
    Ok(count)
}

/// Build commands for every cell, in row-major order.
///
/// The limit is checked up front, so an oversized grid fails before any
/// command is formatted.
pub fn emit_commands(
    grid: &IndexGrid,
    palette: &Palette,
    options: &EmitOptions,
) -> Result<Vec<String>> {
    let (width, height) = grid_size(grid);
    let count = check_command_limit(width, height, options.max_commands)?;

    // Block ids only depend on the palette entry
    let blocks: Vec<String> = palette
        .entries()
        .map(|(name, _)| block_id(NAMESPACE, name, options.family))
        .collect();

    let mut commands = Vec::with_capacity(count);
    let y = options.start.y;

    for (row_idx, row) in grid.iter().enumerate() {
        let depth = if options.flip_vertical {
            row_idx
        } else {
            height - 1 - row_idx
        };
        let z_offset = options.start.z + depth as i64;

        for (col_idx, &index) in row.iter().enumerate() {
            let x_offset = options.start.x + col_idx as i64;
            commands.push(setblock_command(
                x_offset,
                y,
                z_offset,
                &blocks[index as usize],
            ));
        }
    }

    Ok(commands)
}

/// Write commands to `path`, one per line, replacing any existing file.
///
/// Commands go to a temporary file next to `path` that is renamed into
/// place once complete, so a failed write never leaves a partial file.
/// Returns the number of commands written.
pub fn write_commands(path: &Path, commands: &[String]) -> Result<usize> {
    let write_err = |e: std::io::Error| McPixelError::OutputWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(write_err)?;
    }

    let staged = NamedTempFile::new_in(dir).map_err(write_err)?;
    let mut writer = BufWriter::new(staged);

    for cmd in commands {
        writeln!(writer, "{}", cmd).map_err(write_err)?;
    }

    let staged = writer.into_inner().map_err(|e| write_err(e.into_error()))?;
    staged.persist(path).map_err(|e| write_err(e.error))?;

    Ok(commands.len())
}

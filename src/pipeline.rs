//! The convert pipeline.
//!
//! load → flatten → resize → quantize → emit → write, then an optional
//! preview. The command limit is checked before the output file is opened.

use std::path::PathBuf;

use crate::error::{McPixelError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{
    check_command_limit, emit_commands, load_image, normalize, quantize, target_height,
    write_commands, write_preview, EmitOptions, Offsets, DEFAULT_MAX_COMMANDS, PREVIEW_SCALE,
};
use crate::types::{grid_size, BlockFamily};

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "pixelart.mcfunction";

/// Default grid width in blocks.
pub const DEFAULT_WIDTH: u32 = 64;

/// Fully resolved settings for one conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub width: u32,
    pub output: PathBuf,
    pub start: Offsets,
    pub family: BlockFamily,
    pub flip_vertical: bool,
    pub preview: Option<PathBuf>,
    pub max_commands: usize,
}

impl ConvertOptions {
    /// Options with defaults for everything except the input.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            width: DEFAULT_WIDTH,
            output: PathBuf::from(DEFAULT_OUTPUT),
            start: Offsets::default(),
            family: BlockFamily::default(),
            flip_vertical: false,
            preview: None,
            max_commands: DEFAULT_MAX_COMMANDS,
        }
    }

    fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            family: self.family,
            start: self.start,
            flip_vertical: self.flip_vertical,
            max_commands: self.max_commands,
        }
    }
}

/// What happened to the optional preview.
#[derive(Debug)]
pub enum PreviewOutcome {
    /// No preview was requested.
    Skipped,
    /// Preview written to this path.
    Written(PathBuf),
    /// Preview failed; the command file was still written.
    Failed(McPixelError),
}

/// Summary of a finished conversion.
#[derive(Debug)]
pub struct ConvertReport {
    pub width: usize,
    pub height: usize,
    pub command_count: usize,
    pub output: PathBuf,
    pub preview: PreviewOutcome,
}

/// Run the full conversion.
pub fn convert(options: &ConvertOptions, printer: &Printer) -> Result<ConvertReport> {
    let img = load_image(&options.input)?;
    printer.status(
        "Loading",
        &format!(
            "{} ({}x{})",
            display_path(&options.input),
            img.width(),
            img.height()
        ),
    );

    // Fail before resizing or any per-pixel work
    let grid_height = target_height(img.width(), img.height(), options.width)?;
    check_command_limit(
        options.width as usize,
        grid_height as usize,
        options.max_commands,
    )?;

    let pixels = normalize(&img, options.width)?;
    let (width, height) = grid_size(&pixels);
    printer.status("Resized", &format!("to {}x{} blocks", width, height));

    let palette = options.family.palette();
    let indices = quantize(&pixels, &palette);
    printer.status(
        "Quantized",
        &format!("to {} {} colours", palette.len(), palette.name),
    );

    let commands = emit_commands(&indices, &palette, &options.emit_options())?;
    let command_count = write_commands(&options.output, &commands)?;
    printer.status(
        "Saved",
        &format!(
            "{} to {}",
            plural(command_count, "command", "commands"),
            printer.cyan(&display_path(&options.output))
        ),
    );

    let preview = match &options.preview {
        None => PreviewOutcome::Skipped,
        Some(path) => match write_preview(&indices, &palette, path, PREVIEW_SCALE) {
            Ok(()) => {
                printer.status("Saved", &format!("preview {}", display_path(path)));
                PreviewOutcome::Written(path.clone())
            }
            Err(e) => {
                printer.warning("Warning", &e.to_string());
                PreviewOutcome::Failed(e)
            }
        },
    };

    Ok(ConvertReport {
        width,
        height,
        command_count,
        output: options.output.clone(),
        preview,
    })
}

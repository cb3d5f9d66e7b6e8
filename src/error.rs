use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mcpixel operations
#[derive(Error, Diagnostic, Debug)]
pub enum McPixelError {
    #[error("Failed to load image {path}: {message}")]
    #[diagnostic(code(mcpixel::image_load))]
    ImageLoad { path: PathBuf, message: String },

    #[error("Invalid dimension: {message}")]
    #[diagnostic(code(mcpixel::dimension))]
    InvalidDimension {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Aborting: {count} commands exceeds max-commands ({max})")]
    #[diagnostic(
        code(mcpixel::command_limit),
        help("Lower --width or raise --max-commands")
    )]
    CommandLimitExceeded { count: usize, max: usize },

    #[error("Failed to write {path}: {message}")]
    #[diagnostic(code(mcpixel::output))]
    OutputWrite { path: PathBuf, message: String },

    #[error("Failed to write preview {path}: {message}")]
    #[diagnostic(code(mcpixel::preview))]
    Preview { path: PathBuf, message: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(mcpixel::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, McPixelError>;

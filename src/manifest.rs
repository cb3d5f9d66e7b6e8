//! Project manifest (mcpixel.yaml) parsing.
//!
//! The manifest supplies defaults for `convert` options. Values given on
//! the command line always win.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{McPixelError, Result};
use crate::types::BlockFamily;

/// File name looked up in the working directory.
pub const MANIFEST_FILE: &str = "mcpixel.yaml";

/// Convert defaults loaded from mcpixel.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Target grid width in blocks.
    pub width: Option<u32>,

    /// Destination .mcfunction file.
    pub output: Option<PathBuf>,

    /// Relative X offset of the first column.
    pub start_x: Option<i64>,

    /// Absolute Y (height) of the layer.
    pub start_y: Option<i64>,

    /// Relative Z offset of the first row.
    pub start_z: Option<i64>,

    /// Block family (`concrete` or `wool`).
    pub family: Option<BlockFamily>,

    /// Map row 0 to depth offset 0.
    pub flip_vertical: Option<bool>,

    /// Preview image path.
    pub preview: Option<PathBuf>,

    /// Safety limit on emitted commands.
    pub max_commands: Option<usize>,
}

impl Manifest {
    /// Load manifest from a mcpixel.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| McPixelError::Config {
            message: format!("Failed to read manifest {}: {}", path.display(), e),
            help: None,
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| McPixelError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILE)),
        })
    }

    /// Resolve the manifest for a run.
    ///
    /// An explicit path must exist. Without one, `mcpixel.yaml` in `dir` is
    /// used if present, otherwise an empty manifest.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(MANIFEST_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}

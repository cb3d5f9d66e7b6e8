pub mod completions;
pub mod convert;
pub mod palettes;

use clap::{Parser, Subcommand};

/// mcpixel - Minecraft pixel art from images
#[derive(Parser, Debug)]
#[command(name = "mcpixel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an image into a .mcfunction file of setblock commands
    Convert(convert::ConvertArgs),

    /// List the built-in block palettes
    Palettes(palettes::PalettesArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

//! Convert command implementation.
//!
//! Resolves options from flags, the project manifest and defaults, then
//! runs the conversion pipeline.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::{display_path, Printer};
use crate::pipeline::{convert, ConvertOptions, ConvertReport, PreviewOutcome};
use crate::render::{Offsets, NAMESPACE};
use crate::types::BlockFamily;

/// Convert an image into a .mcfunction file of setblock commands
#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// Input image (png, jpg, ...)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Target width in blocks, height keeps the aspect ratio [default: 64]
    #[arg(long, short = 'W')]
    pub width: Option<u32>,

    /// Output .mcfunction file [default: pixelart.mcfunction]
    #[arg(long, short, visible_alias = "out")]
    pub output: Option<PathBuf>,

    /// Relative X offset of the first column [default: 0]
    #[arg(long, visible_alias = "startx", allow_negative_numbers = true)]
    pub start_x: Option<i64>,

    /// Absolute Y of the placed layer [default: 64]
    #[arg(long, visible_alias = "starty", allow_negative_numbers = true)]
    pub start_y: Option<i64>,

    /// Relative Z offset of the first row [default: 0]
    #[arg(long, visible_alias = "startz", allow_negative_numbers = true)]
    pub start_z: Option<i64>,

    /// Block family, selects the palette [default: concrete]
    #[arg(long, value_enum, visible_alias = "blocktype")]
    pub family: Option<BlockFamily>,

    /// Map the top image row to depth offset 0 instead of the largest offset
    #[arg(long, visible_alias = "flipy", overrides_with = "no_flip_vertical")]
    pub flip_vertical: bool,

    /// Keep the default orientation even if the manifest flips it
    #[arg(long, overrides_with = "flip_vertical")]
    pub no_flip_vertical: bool,

    /// Save an 8x upscaled preview of the mapped colours
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Abort if the command count would exceed this [default: 100000]
    #[arg(long)]
    pub max_commands: Option<usize>,

    /// Project manifest [default: ./mcpixel.yaml if present]
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ConvertArgs {
    /// Orientation set on the command line, if any.
    fn flip_flag(&self) -> Option<bool> {
        if self.flip_vertical {
            Some(true)
        } else if self.no_flip_vertical {
            Some(false)
        } else {
            None
        }
    }

    /// Merge flags over manifest values over defaults.
    pub fn resolve(&self, manifest: &Manifest) -> ConvertOptions {
        let defaults = ConvertOptions::new(&self.input);
        let start = Offsets {
            x: self.start_x.or(manifest.start_x).unwrap_or(defaults.start.x),
            y: self.start_y.or(manifest.start_y).unwrap_or(defaults.start.y),
            z: self.start_z.or(manifest.start_z).unwrap_or(defaults.start.z),
        };

        ConvertOptions {
            width: self.width.or(manifest.width).unwrap_or(defaults.width),
            output: self
                .output
                .clone()
                .or_else(|| manifest.output.clone())
                .unwrap_or(defaults.output.clone()),
            start,
            family: self.family.or(manifest.family).unwrap_or(defaults.family),
            flip_vertical: self
                .flip_flag()
                .or(manifest.flip_vertical)
                .unwrap_or(defaults.flip_vertical),
            preview: self.preview.clone().or_else(|| manifest.preview.clone()),
            max_commands: self
                .max_commands
                .or(manifest.max_commands)
                .unwrap_or(defaults.max_commands),
            ..defaults
        }
    }
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let manifest = Manifest::discover(args.config.as_deref(), &cwd)?;
    let options = args.resolve(&manifest);

    let report = convert(&options, printer)?;
    print_usage_hints(&report, printer);

    Ok(())
}

/// Tell the user how to run the generated function in game.
fn print_usage_hints(report: &ConvertReport, printer: &Printer) {
    let function = function_name(&report.output);

    printer.info(
        "Finished",
        &format!(
            "{}x{} blocks{}",
            report.width,
            report.height,
            match &report.preview {
                PreviewOutcome::Written(path) => format!(", preview {}", display_path(path)),
                PreviewOutcome::Failed(_) => ", preview failed".to_string(),
                PreviewOutcome::Skipped => String::new(),
            }
        ),
    );
    printer.info(
        "Install",
        "copy the file into datapacks/<pack>/data/<namespace>/function/",
    );
    printer.info(
        "Run",
        &format!("/function <namespace>:{} in game", function),
    );
    printer.info(
        "Note",
        &format!(
            "blocks use the {} namespace; large functions may hit the command chain limit",
            NAMESPACE
        ),
    );
}

/// Function name the game derives from the file name.
fn function_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("pixelart")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &str) -> ConvertArgs {
        ConvertArgs {
            input: PathBuf::from(input),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let options = args("in.png").resolve(&Manifest::default());

        assert_eq!(options.input, PathBuf::from("in.png"));
        assert_eq!(options.width, 64);
        assert_eq!(options.output, PathBuf::from("pixelart.mcfunction"));
        assert_eq!(options.start, Offsets { x: 0, y: 64, z: 0 });
        assert_eq!(options.family, BlockFamily::Concrete);
        assert!(!options.flip_vertical);
        assert_eq!(options.preview, None);
        assert_eq!(options.max_commands, 100_000);
    }

    #[test]
    fn test_resolve_manifest_fills_gaps() {
        let manifest = Manifest {
            width: Some(32),
            start_y: Some(90),
            family: Some(BlockFamily::Wool),
            flip_vertical: Some(true),
            ..Default::default()
        };

        let options = args("in.png").resolve(&manifest);

        assert_eq!(options.width, 32);
        assert_eq!(options.start.y, 90);
        assert_eq!(options.family, BlockFamily::Wool);
        assert!(options.flip_vertical);
    }

    #[test]
    fn test_resolve_flags_override_manifest() {
        let manifest = Manifest {
            width: Some(32),
            output: Some(PathBuf::from("from-manifest.mcfunction")),
            start_x: Some(7),
            max_commands: Some(10),
            ..Default::default()
        };

        let cli = ConvertArgs {
            width: Some(16),
            output: Some(PathBuf::from("from-cli.mcfunction")),
            start_x: Some(-4),
            max_commands: Some(500),
            ..args("in.png")
        };

        let options = cli.resolve(&manifest);

        assert_eq!(options.width, 16);
        assert_eq!(options.output, PathBuf::from("from-cli.mcfunction"));
        assert_eq!(options.start.x, -4);
        assert_eq!(options.max_commands, 500);
    }

    #[test]
    fn test_resolve_flag_turns_off_manifest_flip() {
        let manifest = Manifest {
            flip_vertical: Some(true),
            ..Default::default()
        };

        let cli = ConvertArgs {
            no_flip_vertical: true,
            ..args("in.png")
        };
        assert!(!cli.resolve(&manifest).flip_vertical);

        let cli = ConvertArgs {
            flip_vertical: true,
            ..args("in.png")
        };
        let manifest = Manifest {
            flip_vertical: Some(false),
            ..Default::default()
        };
        assert!(cli.resolve(&manifest).flip_vertical);
    }

    #[test]
    fn test_cli_last_flip_flag_wins() {
        use crate::cli::{Cli, Commands};
        use clap::Parser;

        let cli = Cli::try_parse_from([
            "mcpixel",
            "convert",
            "in.png",
            "--flipy",
            "--no-flip-vertical",
        ])
        .unwrap();

        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert!(!args.flip_vertical);
        assert!(args.no_flip_vertical);
        assert!(!args.resolve(&Manifest {
            flip_vertical: Some(true),
            ..Default::default()
        })
        .flip_vertical);
    }

    #[test]
    fn test_function_name() {
        assert_eq!(
            function_name(Path::new("packs/data/art/function/castle.mcfunction")),
            "castle"
        );
    }

    #[test]
    fn test_cli_parses_reference_aliases() {
        use crate::cli::{Cli, Commands};
        use clap::Parser;

        let cli = Cli::try_parse_from([
            "mcpixel",
            "convert",
            "in.png",
            "-W",
            "32",
            "--out",
            "art.mcfunction",
            "--startx",
            "-5",
            "--starty",
            "70",
            "--blocktype",
            "wool",
            "--flipy",
        ])
        .unwrap();

        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.width, Some(32));
        assert_eq!(args.output, Some(PathBuf::from("art.mcfunction")));
        assert_eq!(args.start_x, Some(-5));
        assert_eq!(args.start_y, Some(70));
        assert_eq!(args.family, Some(BlockFamily::Wool));
        assert!(args.flip_vertical);
    }
}

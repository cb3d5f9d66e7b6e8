use clap::Parser;
use mcpixel::cli::{Cli, Commands};
use mcpixel::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = if cli.quiet {
        Printer::quiet()
    } else {
        Printer::new()
    };

    match cli.command {
        Commands::Convert(args) => mcpixel::cli::convert::run(args, &printer)?,
        Commands::Palettes(args) => mcpixel::cli::palettes::run(args, &printer)?,
        Commands::Completions(args) => mcpixel::cli::completions::run(args)?,
    }

    Ok(())
}

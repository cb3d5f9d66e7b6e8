//! Palettes command implementation.
//!
//! Prints the built-in block palettes, as a table on stdout or as JSON.

use clap::Args;
use serde::Serialize;

use crate::error::{McPixelError, Result};
use crate::output::Printer;
use crate::render::{block_id, NAMESPACE};
use crate::types::BlockFamily;

/// List the built-in block palettes
#[derive(Args, Debug)]
pub struct PalettesArgs {
    /// Only list this block family
    #[arg(long, value_enum)]
    pub family: Option<BlockFamily>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// One palette entry in JSON output.
#[derive(Debug, Serialize, PartialEq)]
pub struct PaletteEntry {
    pub index: usize,
    pub name: String,
    pub rgb: [u8; 3],
    pub hex: String,
    pub block: String,
}

/// A palette in JSON output.
#[derive(Debug, Serialize, PartialEq)]
pub struct PaletteListing {
    pub family: BlockFamily,
    pub colours: Vec<PaletteEntry>,
}

/// Describe the palettes for the selected families.
pub fn listings(family: Option<BlockFamily>) -> Vec<PaletteListing> {
    let families: Vec<BlockFamily> = match family {
        Some(f) => vec![f],
        None => BlockFamily::ALL.to_vec(),
    };

    families
        .into_iter()
        .map(|family| {
            let palette = family.palette();
            let colours = palette
                .entries()
                .enumerate()
                .map(|(index, (name, rgb))| PaletteEntry {
                    index,
                    name: name.to_string(),
                    rgb: rgb.to_array(),
                    hex: rgb.to_string(),
                    block: block_id(NAMESPACE, name, family),
                })
                .collect();
            PaletteListing { family, colours }
        })
        .collect()
}

pub fn run(args: PalettesArgs, printer: &Printer) -> Result<()> {
    let listings = listings(args.family);

    if args.json {
        let json = serde_json::to_string_pretty(&listings).map_err(|e| McPixelError::Config {
            message: format!("Failed to serialize palettes: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    for listing in &listings {
        printer.info("Palette", listing.family.as_str());
        for entry in &listing.colours {
            println!(
                "{:>3}  {:<12} {}  {}",
                entry.index,
                entry.name,
                entry.hex,
                printer.dim(&entry.block)
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listings_all_families() {
        let all = listings(None);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].family, BlockFamily::Concrete);
        assert_eq!(all[1].family, BlockFamily::Wool);
        assert!(all.iter().all(|l| l.colours.len() == 16));
    }

    #[test]
    fn test_listings_single_family() {
        let wool = listings(Some(BlockFamily::Wool));
        assert_eq!(wool.len(), 1);

        let first = &wool[0].colours[0];
        assert_eq!(first.index, 0);
        assert_eq!(first.name, "white");
        assert_eq!(first.rgb, [234, 236, 237]);
        assert_eq!(first.hex, "#EAECED");
        assert_eq!(first.block, "minecraft:white_wool");
    }

    #[test]
    fn test_listing_json_shape() {
        let listing = listings(Some(BlockFamily::Concrete));
        let value = serde_json::to_value(&listing).unwrap();

        assert_eq!(value[0]["family"], "concrete");
        assert_eq!(value[0]["colours"][15]["name"], "black");
        assert_eq!(value[0]["colours"][15]["rgb"][2], 25);
    }
}

//! Block palettes: ordered named colour collections.
//!
//! Entry order is significant. Nearest-colour ties resolve to the lowest
//! index, so the built-in tables must keep their order for reproducible
//! output.

use std::collections::HashSet;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{McPixelError, Result};

use super::Rgb;

/// Minecraft concrete colours, in dye order.
pub const CONCRETE_PALETTE: [(&str, Rgb); 16] = [
    ("white", Rgb::new(209, 213, 214)),
    ("orange", Rgb::new(240, 118, 19)),
    ("magenta", Rgb::new(189, 68, 179)),
    ("light_blue", Rgb::new(58, 175, 217)),
    ("yellow", Rgb::new(249, 198, 39)),
    ("lime", Rgb::new(112, 185, 25)),
    ("pink", Rgb::new(237, 141, 172)),
    ("gray", Rgb::new(62, 68, 71)),
    ("light_gray", Rgb::new(142, 142, 134)),
    ("cyan", Rgb::new(21, 137, 142)),
    ("purple", Rgb::new(121, 42, 172)),
    ("blue", Rgb::new(53, 57, 157)),
    ("brown", Rgb::new(100, 58, 36)),
    ("green", Rgb::new(73, 91, 36)),
    ("red", Rgb::new(161, 39, 34)),
    ("black", Rgb::new(20, 21, 25)),
];

/// Minecraft wool colours, in dye order.
pub const WOOL_PALETTE: [(&str, Rgb); 16] = [
    ("white", Rgb::new(234, 236, 237)),
    ("orange", Rgb::new(241, 118, 20)),
    ("magenta", Rgb::new(238, 77, 201)),
    ("light_blue", Rgb::new(128, 199, 248)),
    ("yellow", Rgb::new(250, 198, 39)),
    ("lime", Rgb::new(112, 185, 25)),
    ("pink", Rgb::new(242, 141, 170)),
    ("gray", Rgb::new(57, 57, 57)),
    ("light_gray", Rgb::new(151, 151, 151)),
    ("cyan", Rgb::new(20, 137, 140)),
    ("purple", Rgb::new(107, 50, 168)),
    ("blue", Rgb::new(44, 46, 143)),
    ("brown", Rgb::new(96, 59, 31)),
    ("green", Rgb::new(73, 91, 36)),
    ("red", Rgb::new(176, 46, 38)),
    ("black", Rgb::new(12, 12, 12)),
];

/// Largest palette addressable by a `u8` index.
pub const MAX_PALETTE_SIZE: usize = 256;

/// A family of placeable blocks sharing one material style.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BlockFamily {
    #[default]
    Concrete,
    Wool,
}

impl BlockFamily {
    /// All built-in families.
    pub const ALL: [BlockFamily; 2] = [BlockFamily::Concrete, BlockFamily::Wool];

    /// Block id suffix, e.g. `concrete` in `white_concrete`.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockFamily::Concrete => "concrete",
            BlockFamily::Wool => "wool",
        }
    }

    /// The built-in palette for this family.
    pub fn palette(self) -> Palette {
        let table = match self {
            BlockFamily::Concrete => &CONCRETE_PALETTE,
            BlockFamily::Wool => &WOOL_PALETTE,
        };

        Palette {
            name: self.as_str().to_string(),
            entries: table
                .iter()
                .map(|(name, colour)| (name.to_string(), *colour))
                .collect(),
        }
    }
}

impl fmt::Display for BlockFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered list of named colours.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Palette name
    pub name: String,

    entries: Vec<(String, Rgb)>,
}

impl Palette {
    /// Create a palette from ordered entries.
    ///
    /// Fails if the palette is empty, larger than [`MAX_PALETTE_SIZE`], or
    /// contains a duplicate colour name.
    pub fn new<N, I>(name: impl Into<String>, entries: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Rgb)>,
    {
        let name = name.into();
        let entries: Vec<(String, Rgb)> = entries
            .into_iter()
            .map(|(n, c)| (n.into(), c))
            .collect();

        if entries.is_empty() {
            return Err(McPixelError::Config {
                message: format!("Palette '{}' has no colours", name),
                help: None,
            });
        }

        if entries.len() > MAX_PALETTE_SIZE {
            return Err(McPixelError::Config {
                message: format!(
                    "Palette '{}' has {} colours, the limit is {}",
                    name,
                    entries.len(),
                    MAX_PALETTE_SIZE
                ),
                help: None,
            });
        }

        let mut seen = HashSet::new();
        for (colour_name, _) in &entries {
            if !seen.insert(colour_name.as_str()) {
                return Err(McPixelError::Config {
                    message: format!("Duplicate colour '{}' in palette '{}'", colour_name, name),
                    help: Some("Colour names within a palette must be unique".to_string()),
                });
            }
        }

        Ok(Self { name, entries })
    }

    /// Get an entry by index.
    pub fn get(&self, index: u8) -> Option<(&str, Rgb)> {
        self.entries
            .get(index as usize)
            .map(|(name, colour)| (name.as_str(), *colour))
    }

    /// Colour name at `index`.
    ///
    /// Panics if `index` is out of range; quantized grids only hold valid
    /// indices.
    pub fn name_of(&self, index: u8) -> &str {
        &self.entries[index as usize].0
    }

    /// RGB value at `index`. Panics if `index` is out of range.
    pub fn colour_of(&self, index: u8) -> Rgb {
        self.entries[index as usize].1
    }

    /// Find the index of a colour by name.
    pub fn index_of(&self, name: &str) -> Option<u8> {
        self.entries
            .iter()
            .position(|(n, _)| n == name)
            .map(|i| i as u8)
    }

    /// Iterate over `(name, colour)` pairs in palette order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Rgb)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), *c))
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the nearest palette entry to `colour`.
    ///
    /// Returns the index and squared distance. Scans in palette order and
    /// only replaces the best match on a strictly smaller distance, so the
    /// lowest index wins ties.
    pub fn nearest(&self, colour: Rgb) -> (u8, u32) {
        let mut best_index: u8 = 0;
        let mut best_dist = u32::MAX;

        for (i, (_, pc)) in self.entries.iter().enumerate() {
            let dist = colour.distance_sq(*pc);
            if dist < best_dist {
                best_dist = dist;
                best_index = i as u8;
                if dist == 0 {
                    break;
                }
            }
        }

        (best_index, best_dist)
    }
}

impl Default for Palette {
    fn default() -> Self {
        BlockFamily::default().palette()
    }
}

//! Nearest-colour quantization to a block palette.

use crate::types::{IndexGrid, Palette, PixelGrid};

/// Map every pixel to the index of its nearest palette colour.
///
/// Distance is squared Euclidean RGB distance. Equidistant entries resolve
/// to the lowest palette index.
pub fn quantize(pixels: &PixelGrid, palette: &Palette) -> IndexGrid {
    pixels
        .iter()
        .map(|row| row.iter().map(|&c| palette.nearest(c).0).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BlockFamily, Rgb};

    #[test]
    fn test_quantize_preserves_shape() {
        let pixels = vec![vec![Rgb::WHITE; 3]; 2];
        let indices = quantize(&pixels, &BlockFamily::Concrete.palette());

        assert_eq!(indices.len(), 2);
        assert!(indices.iter().all(|row| row.len() == 3));
    }

    #[test]
    fn test_quantize_exact_colours() {
        let palette = BlockFamily::Wool.palette();
        let row: Vec<Rgb> = palette.entries().map(|(_, c)| c).collect();

        let indices = quantize(&vec![row], &palette);
        assert_eq!(indices[0], (0..16).collect::<Vec<u8>>());
    }

    #[test]
    fn test_quantize_white_and_black() {
        let palette = BlockFamily::Concrete.palette();
        let pixels = vec![vec![Rgb::WHITE, Rgb::new(20, 21, 25)]];

        let indices = quantize(&pixels, &palette);
        assert_eq!(palette.name_of(indices[0][0]), "white");
        assert_eq!(palette.name_of(indices[0][1]), "black");
    }

    #[test]
    fn test_quantize_tie_takes_first_entry() {
        let palette = Palette::new(
            "tie",
            [("a", Rgb::new(10, 10, 10)), ("b", Rgb::new(10, 10, 30))],
        )
        .unwrap();

        let indices = quantize(&vec![vec![Rgb::new(10, 10, 20)]], &palette);
        assert_eq!(indices, vec![vec![0]]);
    }

    #[test]
    fn test_quantize_empty_grid() {
        let indices = quantize(&Vec::new(), &Palette::default());
        assert!(indices.is_empty());
    }
}

//! Image loading and normalisation.
//!
//! Flattens transparency onto white and resizes to the target grid width,
//! keeping the aspect ratio.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

use crate::error::{McPixelError, Result};
use crate::types::{PixelGrid, Rgb};

/// Open and decode an image file.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| McPixelError::ImageLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Grid height for `width` columns, preserving the source aspect ratio.
///
/// Computes `round(width * src_height / src_width)` exactly, with ties
/// rounded to even.
pub fn target_height(src_width: u32, src_height: u32, width: u32) -> Result<u32> {
    if width == 0 {
        return Err(McPixelError::InvalidDimension {
            message: "target width must be at least 1".to_string(),
            help: Some("Pass a positive --width".to_string()),
        });
    }

    if src_width == 0 || src_height == 0 {
        return Err(McPixelError::InvalidDimension {
            message: format!("source image is {}x{}", src_width, src_height),
            help: None,
        });
    }

    let num = width as u64 * src_height as u64;
    let den = src_width as u64;
    let (quot, rem) = (num / den, num % den);

    let height = match (2 * rem).cmp(&den) {
        std::cmp::Ordering::Less => quot,
        std::cmp::Ordering::Greater => quot + 1,
        std::cmp::Ordering::Equal => quot + (quot & 1),
    };

    if height == 0 {
        return Err(McPixelError::InvalidDimension {
            message: format!(
                "a {}x{} image at width {} rounds to zero rows",
                src_width, src_height, width
            ),
            help: Some("Increase --width".to_string()),
        });
    }

    u32::try_from(height).map_err(|_| McPixelError::InvalidDimension {
        message: format!("resized height {} is too large", height),
        help: Some("Decrease --width".to_string()),
    })
}

/// Composite every pixel onto an opaque white background.
pub fn flatten_alpha(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    let mut flat = RgbImage::new(rgba.width(), rgba.height());

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        flat.put_pixel(x, y, image::Rgb(Rgb::from_rgba(r, g, b, a).to_array()));
    }

    flat
}

/// Flatten and resize an image into a grid `width` cells wide.
pub fn normalize(img: &DynamicImage, width: u32) -> Result<PixelGrid> {
    let height = target_height(img.width(), img.height(), width)?;
    let flat = flatten_alpha(img);

    let resized = if flat.dimensions() == (width, height) {
        flat
    } else {
        imageops::resize(&flat, width, height, FilterType::Lanczos3)
    };

    Ok(resized
        .rows()
        .map(|row| row.map(|p| Rgb::from(p.0)).collect())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::grid_size;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_target_height_preserves_aspect() {
        assert_eq!(target_height(200, 100, 64).unwrap(), 32);
        assert_eq!(target_height(100, 300, 10).unwrap(), 30);
        assert_eq!(target_height(2, 1, 2).unwrap(), 1);
    }

    #[test]
    fn test_target_height_rounds() {
        // 10 * 7 / 3 = 23.33
        assert_eq!(target_height(3, 7, 10).unwrap(), 23);
        // 10 * 8 / 3 = 26.67
        assert_eq!(target_height(3, 8, 10).unwrap(), 27);
    }

    #[test]
    fn test_target_height_ties_to_even() {
        // 5 * 1 / 2 = 2.5 and 3 * 1 / 2 = 1.5
        assert_eq!(target_height(2, 1, 5).unwrap(), 2);
        assert_eq!(target_height(2, 1, 3).unwrap(), 2);
    }

    #[test]
    fn test_target_height_zero_width() {
        assert!(matches!(
            target_height(10, 10, 0),
            Err(McPixelError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_target_height_degenerate_result() {
        // 1 * 1 / 100 rounds to 0
        assert!(matches!(
            target_height(100, 1, 1),
            Err(McPixelError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_flatten_alpha_uses_white_background() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([10, 20, 30, 0]));
        img.put_pixel(1, 0, Rgba([10, 20, 30, 255]));

        let flat = flatten_alpha(&DynamicImage::ImageRgba8(img));
        assert_eq!(flat.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(flat.get_pixel(1, 0).0, [10, 20, 30]);
    }

    #[test]
    fn test_normalize_same_size_passes_through() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([20, 21, 25, 255]));

        let grid = normalize(&DynamicImage::ImageRgba8(img), 2).unwrap();
        assert_eq!(grid, vec![vec![Rgb::WHITE, Rgb::new(20, 21, 25)]]);
    }

    #[test]
    fn test_normalize_downscales_to_requested_width() {
        let img = RgbaImage::from_pixel(40, 20, Rgba([100, 150, 200, 255]));

        let grid = normalize(&DynamicImage::ImageRgba8(img), 8).unwrap();
        assert_eq!(grid_size(&grid), (8, 4));

        // A flat image stays flat through the filter
        for row in &grid {
            for px in row {
                assert!(px.distance_sq(Rgb::new(100, 150, 200)) <= 3);
            }
        }
    }

    #[test]
    fn test_normalize_transparent_image_is_white() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));

        let grid = normalize(&DynamicImage::ImageRgba8(img), 2).unwrap();
        assert_eq!(grid, vec![vec![Rgb::WHITE; 2]; 2]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_image(Path::new("/nonexistent/input.png"));
        assert!(matches!(result, Err(McPixelError::ImageLoad { .. })));
    }
}

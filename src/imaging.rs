//! Image loading and downsampling for dominant-color extraction.
//!
//! The engine only ever sees decoded RGB buffers; this module is the
//! image-source collaborator that produces them. `image::open` sniffs the
//! file format and rejects non-image files, `to_rgb8` normalizes the
//! channel depth to 3, and the resize step brings uploads down to each
//! strategy's working resolution.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use color_engine::{ExtractError, ExtractStrategy, PixelBuffer, Rgb};

use crate::error::AppError;

/// Working resolution for the frequency-mode strategy.
const MODE_SAMPLE_SIZE: u32 = 50;

/// Working resolution for the cluster-center strategy.
const CLUSTER_SAMPLE_SIZE: u32 = 100;

/// Decoded RGB samples with their dimensions, owned by the host.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pixels: Vec<Rgb>,
    width: u32,
    height: u32,
}

impl DecodedImage {
    /// Borrow the samples as an engine pixel buffer.
    pub fn buffer(&self) -> Result<PixelBuffer<'_>, ExtractError> {
        PixelBuffer::new(&self.pixels, self.width, self.height)
    }

    /// Decoded width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Decoded height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Load an image file and prepare it for the given extraction strategy.
///
/// Mode works on a 50x50 downsample (exact-value counting needs repeats),
/// cluster-center on a 100x100 downsample, and mean on the image at its
/// native size.
pub fn load_for_strategy(path: &Path, strategy: ExtractStrategy) -> Result<DecodedImage, AppError> {
    let decoded = image::open(path)?;
    tracing::debug!(
        path = %path.display(),
        width = decoded.width(),
        height = decoded.height(),
        "decoded image"
    );

    let working = match strategy {
        ExtractStrategy::Mode => {
            decoded.resize_exact(MODE_SAMPLE_SIZE, MODE_SAMPLE_SIZE, FilterType::Triangle)
        }
        ExtractStrategy::ClusterCenter { .. } => {
            decoded.resize_exact(CLUSTER_SAMPLE_SIZE, CLUSTER_SAMPLE_SIZE, FilterType::Triangle)
        }
        ExtractStrategy::Mean => decoded,
    };

    Ok(flatten_rgb(&working))
}

/// Convert any channel layout to flat 3-channel RGB samples.
fn flatten_rgb(image: &DynamicImage) -> DecodedImage {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    let pixels = rgb
        .pixels()
        .map(|pixel| Rgb::new(pixel[0], pixel[1], pixel[2]))
        .collect();
    DecodedImage {
        pixels,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage, RgbImage};

    #[test]
    fn test_flatten_preserves_dimensions_and_values() {
        let img = RgbImage::from_pixel(4, 3, image::Rgb([10, 20, 30]));
        let decoded = flatten_rgb(&DynamicImage::ImageRgb8(img));

        assert_eq!(decoded.width(), 4);
        assert_eq!(decoded.height(), 3);
        let buffer = decoded.buffer().unwrap();
        assert_eq!(buffer.pixels().len(), 12);
        assert!(buffer
            .pixels()
            .iter()
            .all(|&p| p == Rgb::new(10, 20, 30)));
    }

    #[test]
    fn test_flatten_drops_alpha_channel() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([200, 100, 50, 128]));
        let decoded = flatten_rgb(&DynamicImage::ImageRgba8(img));

        let buffer = decoded.buffer().unwrap();
        assert!(buffer
            .pixels()
            .iter()
            .all(|&p| p == Rgb::new(200, 100, 50)));
    }

    #[test]
    fn test_missing_file_is_an_image_error() {
        let result = load_for_strategy(
            Path::new("/definitely/not/here.png"),
            ExtractStrategy::Mean,
        );
        assert!(matches!(result, Err(AppError::Image(_))));
    }
}

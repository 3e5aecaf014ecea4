//! Per-channel arithmetic-mean extraction.

use super::{DominantColor, ExtractError, PixelBuffer};
use crate::color::Rgb;

/// Mean strategy: per-channel arithmetic mean over all samples.
///
/// The cheapest strategy, suitable for low-latency processing of captured
/// frames at native resolution. Each channel mean is truncated (not
/// rounded) to an integer; the result is bounded by construction since the
/// inputs are.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanExtract;

impl DominantColor for MeanExtract {
    fn extract(&self, buffer: &PixelBuffer<'_>) -> Result<Rgb, ExtractError> {
        if buffer.is_empty() {
            return Err(ExtractError::EmptyBuffer);
        }

        let mut sums = [0u64; 3];
        for pixel in buffer.pixels() {
            sums[0] += pixel.r as u64;
            sums[1] += pixel.g as u64;
            sums[2] += pixel.b as u64;
        }

        let count = buffer.pixels().len() as u64;
        Ok(Rgb::new(
            (sums[0] / count) as u8,
            (sums[1] / count) as u8,
            (sums[2] / count) as u8,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_of(pixels: &[Rgb]) -> PixelBuffer<'_> {
        PixelBuffer::new(pixels, pixels.len() as u32, 1).unwrap()
    }

    #[test]
    fn test_mean_of_uniform_buffer_is_identity() {
        let pixels = vec![Rgb::new(17, 130, 201); 25];
        let result = MeanExtract.extract(&buffer_of(&pixels)).unwrap();
        assert_eq!(result, Rgb::new(17, 130, 201));
    }

    #[test]
    fn test_mean_of_two_colors() {
        let pixels = [Rgb::new(0, 0, 0), Rgb::new(200, 100, 50)];
        let result = MeanExtract.extract(&buffer_of(&pixels)).unwrap();
        assert_eq!(result, Rgb::new(100, 50, 25));
    }

    #[test]
    fn test_mean_truncates_toward_zero() {
        // (0 + 1) / 2 truncates to 0, never rounds up
        let pixels = [Rgb::new(0, 0, 0), Rgb::new(0, 0, 1)];
        let result = MeanExtract.extract(&buffer_of(&pixels)).unwrap();
        assert_eq!(result, Rgb::new(0, 0, 0));

        let pixels = [Rgb::new(10, 10, 10), Rgb::new(11, 11, 11)];
        let result = MeanExtract.extract(&buffer_of(&pixels)).unwrap();
        assert_eq!(result, Rgb::new(10, 10, 10));
    }

    #[test]
    fn test_mean_stays_in_range_at_extremes() {
        let pixels = vec![Rgb::new(255, 255, 255); 1000];
        let result = MeanExtract.extract(&buffer_of(&pixels)).unwrap();
        assert_eq!(result, Rgb::new(255, 255, 255));

        let pixels = vec![Rgb::new(0, 0, 0); 1000];
        let result = MeanExtract.extract(&buffer_of(&pixels)).unwrap();
        assert_eq!(result, Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_empty_buffer_rejected() {
        let buffer = PixelBuffer::new(&[], 0, 0).unwrap();
        assert_eq!(MeanExtract.extract(&buffer), Err(ExtractError::EmptyBuffer));
    }
}

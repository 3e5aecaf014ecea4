//! Exact-value frequency-mode extraction.

use std::cmp::Reverse;
use std::collections::HashMap;

use super::{DominantColor, ExtractError, PixelBuffer};
use crate::color::Rgb;

/// Frequency-mode strategy: the most common exact pixel value wins.
///
/// Intended for still-image uploads that the caller has already
/// downsampled to a small working resolution -- exact-value counting on a
/// full-size photograph rarely finds meaningful repeats.
///
/// Ties on equally frequent colors resolve to the color seen first in
/// buffer order, which makes the result deterministic for a given buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeExtract;

impl DominantColor for ModeExtract {
    fn extract(&self, buffer: &PixelBuffer<'_>) -> Result<Rgb, ExtractError> {
        if buffer.is_empty() {
            return Err(ExtractError::EmptyBuffer);
        }

        // (count, first-seen index) per distinct color
        let mut counts: HashMap<Rgb, (u32, usize)> = HashMap::new();
        for (index, &pixel) in buffer.pixels().iter().enumerate() {
            counts
                .entry(pixel)
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, index));
        }

        counts
            .into_iter()
            .max_by_key(|&(_, (count, first_seen))| (count, Reverse(first_seen)))
            .map(|(color, _)| color)
            .ok_or(ExtractError::EmptyBuffer)
    }
}

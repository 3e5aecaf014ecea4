//! k-means cluster-center extraction.

use kmeans_colors::get_kmeans;
use palette::Srgb;

use super::{DominantColor, ExtractError, PixelBuffer};
use crate::color::Rgb;

/// Iteration cap for the clustering loop.
const MAX_ITERATIONS: usize = 20;
/// Convergence threshold on the clustering score (channel units).
const CONVERGENCE: f32 = 1.0;
/// Fixed seed so repeated extractions of the same buffer agree.
const SEED: u64 = 0;

/// Cluster-center strategy: k-means over the raw channel values.
///
/// With a single cluster this reduces to a centroid computation and is
/// numerically equivalent to [`MeanExtract`](super::MeanExtract); the
/// cluster count is a parameter so callers can opt into a true
/// dominant-cluster mode, where the center of the most populated cluster
/// is returned.
///
/// Samples are clustered on their raw 0-255 channel values, so integer
/// inputs survive the float round trip without drift. Channels of the
/// winning center are truncated to integers.
#[derive(Debug, Clone, Copy)]
pub struct ClusterExtract {
    clusters: usize,
}

impl ClusterExtract {
    /// Create a cluster-center extractor fitting `clusters` clusters.
    ///
    /// A count of zero is treated as one.
    pub fn new(clusters: usize) -> Self {
        Self {
            clusters: clusters.max(1),
        }
    }

    /// The configured cluster count.
    #[inline]
    pub fn clusters(&self) -> usize {
        self.clusters
    }
}

impl DominantColor for ClusterExtract {
    fn extract(&self, buffer: &PixelBuffer<'_>) -> Result<Rgb, ExtractError> {
        if buffer.is_empty() {
            return Err(ExtractError::EmptyBuffer);
        }

        let samples: Vec<Srgb<f32>> = buffer
            .pixels()
            .iter()
            .map(|p| Srgb::new(p.r as f32, p.g as f32, p.b as f32))
            .collect();

        // More clusters than samples would leave empty clusters
        let k = self.clusters.min(samples.len());
        let fit = get_kmeans(k, MAX_ITERATIONS, CONVERGENCE, false, &samples, SEED);

        let mut populations = vec![0u32; fit.centroids.len()];
        for &assignment in &fit.indices {
            if let Some(population) = populations.get_mut(assignment as usize) {
                *population += 1;
            }
        }
        let dominant = populations
            .iter()
            .enumerate()
            .max_by_key(|&(_, population)| population)
            .map(|(index, _)| index)
            .unwrap_or(0);

        let center = fit
            .centroids
            .get(dominant)
            .copied()
            .ok_or(ExtractError::EmptyBuffer)?;
        Ok(Rgb::new(
            center.red as u8,
            center.green as u8,
            center.blue as u8,
        ))
    }
}

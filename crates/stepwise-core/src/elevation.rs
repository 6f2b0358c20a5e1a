//! Elevation sampling against an external elevation service.

use crate::models::{ElevationSample, Point};
use thiserror::Error;

/// Default subsampling interval: every 5th geometry point is looked up.
pub const DEFAULT_STRIDE: usize = 5;

/// Elevation service failure. Always recovered locally by the sampler;
/// never aborts an evaluation pass.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request timed out")]
    Timeout,
    #[error("provider returned HTTP {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Parse(String),
}

/// Source of elevation values for a batch of points.
///
/// One call covers one route evaluation; implementations should bound the
/// request with a timeout so a slow provider degrades instead of stalling
/// the whole batch.
#[allow(async_fn_in_trait)]
pub trait ElevationProvider {
    /// Fetch elevations in meters for the given points, one value per
    /// point, aligned by index.
    async fn elevations(&self, points: &[Point]) -> Result<Vec<f64>, ProviderError>;
}

/// Subsample `points` at `stride` and fetch elevations in a single batched
/// provider call.
///
/// On any provider failure (including a result count that does not match the
/// request) the sampled points are returned with zero elevation, so slope
/// estimation always receives a well-formed sample set. Fewer than two input
/// points yield an empty result without contacting the provider.
pub async fn sample_elevations(
    points: &[Point],
    stride: usize,
    provider: &impl ElevationProvider,
) -> Vec<ElevationSample> {
    if points.len() < 2 {
        return Vec::new();
    }

    let stride = stride.max(1);
    let sampled: Vec<Point> = points.iter().copied().step_by(stride).collect();

    match provider.elevations(&sampled).await {
        Ok(elevations) if elevations.len() == sampled.len() => sampled
            .iter()
            .zip(elevations)
            .map(|(&point, elevation_m)| ElevationSample { point, elevation_m })
            .collect(),
        Ok(elevations) => {
            tracing::warn!(
                expected = sampled.len(),
                got = elevations.len(),
                "elevation count mismatch, falling back to zero elevations"
            );
            zero_samples(&sampled)
        }
        Err(err) => {
            tracing::warn!("elevation lookup failed, falling back to zero elevations: {err}");
            zero_samples(&sampled)
        }
    }
}

fn zero_samples(points: &[Point]) -> Vec<ElevationSample> {
    points
        .iter()
        .map(|&point| ElevationSample {
            point,
            elevation_m: 0.0,
        })
        .collect()
}

//! Elevation profiles along a route line.

use crate::client::{CachedElevations, OrsClient};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use stepwise_core::{ElevationProvider, Point, ProviderError};

const CACHE_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Serialize)]
struct ElevationLineBody {
    format_in: &'static str,
    format_out: &'static str,
    geometry: LineGeometry,
}

#[derive(Debug, Serialize)]
struct LineGeometry {
    #[serde(rename = "type")]
    kind: &'static str,
    /// [lon, lat] on the wire.
    coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
struct ElevationLineResponse {
    geometry: Option<ElevationGeometry>,
}

#[derive(Debug, Deserialize)]
struct ElevationGeometry {
    /// Each entry is [lon, lat, elevation].
    #[serde(default)]
    coordinates: Vec<[f64; 3]>,
}

impl OrsClient {
    async fn fetch_elevations(&self, points: &[Point]) -> Result<Vec<f64>, ProviderError> {
        let body = ElevationLineBody {
            format_in: "polyline",
            format_out: "json",
            geometry: LineGeometry {
                kind: "LineString",
                coordinates: points.iter().map(|p| [p.lon, p.lat]).collect(),
            },
        };

        tracing::debug!(points = points.len(), "requesting elevation profile");

        let response = self
            .client
            .post(self.url("/elevation/line"))
            .header("Authorization", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(convert_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let payload: ElevationLineResponse = response
            .json()
            .await
            .map_err(|err| ProviderError::Parse(err.to_string()))?;

        let coordinates = payload
            .geometry
            .map(|g| g.coordinates)
            .unwrap_or_default();
        if coordinates.is_empty() {
            return Err(ProviderError::Parse("response carried no coordinates".to_string()));
        }

        Ok(coordinates
            .into_iter()
            .map(|[_, _, elevation]| if elevation.is_finite() { elevation } else { 0.0 })
            .collect())
    }
}

impl ElevationProvider for OrsClient {
    async fn elevations(&self, points: &[Point]) -> Result<Vec<f64>, ProviderError> {
        let key = cache_key(points);
        if let Some(entry) = self.elevation_cache.get(&key) {
            if entry.fetched_at.elapsed() <= CACHE_TTL {
                return Ok(entry.elevations.clone());
            }
        }

        let elevations = self.fetch_elevations(points).await?;
        self.elevation_cache.insert(
            key,
            CachedElevations {
                fetched_at: Instant::now(),
                elevations: elevations.clone(),
            },
        );
        Ok(elevations)
    }
}

fn convert_reqwest_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else if let Some(status) = err.status() {
        ProviderError::Status(status.as_u16())
    } else {
        ProviderError::Transport(err.to_string())
    }
}

fn cache_key(points: &[Point]) -> String {
    let mut key = String::with_capacity(points.len() * 20);
    for point in points {
        key.push_str(&format!("{:.5},{:.5};", point.lat, point.lon));
    }
    key
}

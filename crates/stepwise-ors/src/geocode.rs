//! Forward and reverse geocoding.

use crate::client::{OrsClient, OrsError};
use serde::Deserialize;
use stepwise_core::Point;

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default)]
    features: Vec<GeocodeFeature>,
}

#[derive(Debug, Deserialize)]
struct GeocodeFeature {
    geometry: FeatureGeometry,
    #[serde(default)]
    properties: FeatureProperties,
}

#[derive(Debug, Deserialize)]
struct FeatureGeometry {
    /// [lon, lat] on the wire.
    coordinates: [f64; 2],
}

#[derive(Debug, Default, Deserialize)]
struct FeatureProperties {
    #[serde(default)]
    label: String,
}

impl OrsClient {
    /// Resolve a free-text place name to coordinates.
    pub async fn geocode(&self, place: &str) -> Result<Point, OrsError> {
        let mut query: Vec<(&str, String)> =
            vec![("text", place.to_string()), ("size", "1".to_string())];
        if let Some(country) = &self.config.boundary_country {
            query.push(("boundary.country", country.clone()));
        }

        let response = self
            .client
            .get(self.url("/geocode/search"))
            .header("Authorization", &self.config.api_key)
            .query(&query)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let payload: GeocodeResponse = response.json().await?;

        best_point(payload).ok_or_else(|| OrsError::NotFound(place.to_string()))
    }

    /// Resolve coordinates to a human-readable address label.
    pub async fn reverse_geocode(&self, point: Point) -> Result<String, OrsError> {
        let response = self
            .client
            .get(self.url("/geocode/reverse"))
            .header("Authorization", &self.config.api_key)
            .query(&[
                ("point.lat", point.lat.to_string()),
                ("point.lon", point.lon.to_string()),
                ("size", "1".to_string()),
            ])
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let payload: GeocodeResponse = response.json().await?;

        best_label(payload)
            .ok_or_else(|| OrsError::NotFound(format!("({}, {})", point.lat, point.lon)))
    }
}

fn best_point(response: GeocodeResponse) -> Option<Point> {
    let [lon, lat] = response.features.first()?.geometry.coordinates;
    Some(Point::new(lat, lon))
}

fn best_label(response: GeocodeResponse) -> Option<String> {
    let label = &response.features.first()?.properties.label;
    if label.is_empty() {
        None
    } else {
        Some(label.clone())
    }
}

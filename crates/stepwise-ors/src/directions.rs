//! Walking directions with alternative routes.

use crate::client::{OrsClient, OrsError};
use serde::{Deserialize, Serialize};
use stepwise_core::{Geometry, Instruction, Leg, Point, Route, Step};

/// Alternative-route request options. OpenRouteService does not always
/// return multiple distinct walking routes, but asks for them when told to.
#[derive(Debug, Clone, Serialize)]
pub struct AlternativeRoutes {
    pub share_factor: f64,
    pub target_count: u32,
}

impl Default for AlternativeRoutes {
    fn default() -> Self {
        Self {
            share_factor: 0.8,
            target_count: 2,
        }
    }
}

#[derive(Debug, Serialize)]
struct DirectionsBody {
    /// Coordinates on the wire are [lon, lat].
    coordinates: Vec<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<DirectionsOptions>,
}

#[derive(Debug, Serialize)]
struct DirectionsOptions {
    alternative_routes: AlternativeRoutes,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<WireRoute>,
}

#[derive(Debug, Deserialize)]
struct WireRoute {
    summary: WireSummary,
    /// Encoded polyline.
    #[serde(default)]
    geometry: String,
    #[serde(default)]
    segments: Vec<WireSegment>,
}

#[derive(Debug, Deserialize)]
struct WireSummary {
    #[serde(default)]
    distance: f64,
    duration: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WireSegment {
    #[serde(default)]
    steps: Vec<WireStep>,
}

#[derive(Debug, Deserialize)]
struct WireStep {
    #[serde(default)]
    instruction: String,
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
}

impl OrsClient {
    /// Fetch candidate walking routes from `origin` to `destination`.
    pub async fn walking_directions(
        &self,
        origin: Point,
        destination: Point,
        alternatives: Option<AlternativeRoutes>,
    ) -> Result<Vec<Route>, OrsError> {
        let body = DirectionsBody {
            coordinates: vec![[origin.lon, origin.lat], [destination.lon, destination.lat]],
            options: alternatives.map(|alternative_routes| DirectionsOptions { alternative_routes }),
        };

        tracing::debug!(
            origin_lat = origin.lat,
            origin_lon = origin.lon,
            dest_lat = destination.lat,
            dest_lon = destination.lon,
            "requesting walking directions"
        );

        let response = self
            .client
            .post(self.url("/v2/directions/foot-walking"))
            .header("Authorization", &self.config.api_key)
            .json(&body)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let payload: DirectionsResponse = response.json().await?;

        Ok(routes_from_response(payload))
    }
}

/// Convert the wire response into engine routes, normalising geometry to
/// (lat, lon) handling at the decode boundary.
pub(crate) fn routes_from_response(response: DirectionsResponse) -> Vec<Route> {
    response
        .routes
        .into_iter()
        .map(|route| Route {
            legs: route
                .segments
                .into_iter()
                .map(|segment| Leg {
                    steps: segment
                        .steps
                        .into_iter()
                        .map(|step| {
                            Step::Leaf(Instruction {
                                text: step.instruction,
                                distance_m: step.distance,
                                duration_s: step.duration,
                                start: None,
                                end: None,
                            })
                        })
                        .collect(),
                })
                .collect(),
            geometry: Geometry::Encoded(route.geometry),
            duration_s: route.summary.duration,
            distance_m: route.summary.distance,
        })
        .collect()
}

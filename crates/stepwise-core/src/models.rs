//! Core data models shared by every stage of route evaluation.

use serde::{Deserialize, Serialize};

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Route geometry as handed over by a directions provider.
///
/// Some providers return an encoded polyline string, others an already
/// decoded coordinate array; the engine accepts both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Geometry {
    Encoded(String),
    Points(Vec<Point>),
}

/// One candidate walking route returned by a directions provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub legs: Vec<Leg>,
    pub geometry: Geometry,
    /// Total travel time in seconds. A route without a duration cannot be
    /// scored and is excluded from selection.
    #[serde(default)]
    pub duration_s: Option<f64>,
    /// Total distance in meters.
    #[serde(default)]
    pub distance_m: f64,
}

/// One origin-to-destination segment of a route. Walking routes normally
/// have a single leg, but multi-stop directions produce more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leg {
    pub steps: Vec<Step>,
}

/// A turn-by-turn instruction node: either a single instruction or a group
/// of sub-steps (some providers nest one level deep).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Group(Vec<Step>),
    Leaf(Instruction),
}

/// Leaf payload of a [`Step`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instruction {
    pub text: String,
    #[serde(default)]
    pub distance_m: f64,
    #[serde(default)]
    pub duration_s: f64,
    #[serde(default)]
    pub start: Option<Point>,
    #[serde(default)]
    pub end: Option<Point>,
}

/// A sampled route point paired with its elevation in meters. Produced by
/// the elevation sampler, consumed by the slope estimator, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationSample {
    pub point: Point,
    pub elevation_m: f64,
}

/// Per-candidate scoring diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Index of the candidate in the original input list.
    pub index: usize,
    pub duration_s: f64,
    pub slope_factor: f64,
    pub step_count: usize,
    pub turn_count: usize,
    pub score: f64,
}

/// Result of one evaluation pass: the winning candidate plus the breakdowns
/// of every candidate that survived filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selection {
    pub best_index: usize,
    pub best: ScoreBreakdown,
    pub candidates: Vec<ScoreBreakdown>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_json_distinguishes_groups_from_leaves() {
        let raw = r#"[
            {"text": "Head north", "distance_m": 10.0, "duration_s": 8.0},
            [{"text": "Turn left", "distance_m": 5.0, "duration_s": 4.0}]
        ]"#;
        let steps: Vec<Step> = serde_json::from_str(raw).unwrap();
        assert!(matches!(steps[0], Step::Leaf(_)));
        assert!(matches!(&steps[1], Step::Group(children) if children.len() == 1));
    }

    #[test]
    fn geometry_accepts_both_wire_forms() {
        let encoded: Geometry = serde_json::from_str(r#""_p~iF~ps|U""#).unwrap();
        assert!(matches!(encoded, Geometry::Encoded(_)));

        let points: Geometry = serde_json::from_str(r#"[{"lat": 22.28, "lon": 114.13}]"#).unwrap();
        assert!(matches!(points, Geometry::Points(p) if p.len() == 1));
    }
}

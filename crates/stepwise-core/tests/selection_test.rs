//! End-to-end selection tests: flatten, decode, sample, slope, score, pick.

use stepwise_core::{
    select_best, ElevationProvider, EvalOptions, Geometry, Instruction, Leg, Point, ProviderError,
    Route, Step,
};

fn leaf(text: &str) -> Step {
    Step::Leaf(Instruction {
        text: text.to_string(),
        distance_m: 50.0,
        duration_s: 40.0,
        start: None,
        end: None,
    })
}

fn walking_route(duration_s: f64, geometry: Geometry, steps: Vec<Step>) -> Route {
    Route {
        legs: vec![Leg { steps }],
        geometry,
        duration_s: Some(duration_s),
        distance_m: 400.0,
    }
}

/// Flat everywhere except south of 10 degrees latitude, where the ground
/// climbs steadily between samples.
struct HillySouth;

impl ElevationProvider for HillySouth {
    async fn elevations(&self, points: &[Point]) -> Result<Vec<f64>, ProviderError> {
        let hilly = points.first().is_some_and(|p| p.lat < 10.0);
        Ok(points
            .iter()
            .enumerate()
            .map(|(i, _)| if hilly { i as f64 * 11.1111 } else { 0.0 })
            .collect())
    }
}

/// Fails for the hilly route's batch, succeeds elsewhere.
struct PartialOutage;

impl ElevationProvider for PartialOutage {
    async fn elevations(&self, points: &[Point]) -> Result<Vec<f64>, ProviderError> {
        if points.first().is_some_and(|p| p.lat < 10.0) {
            Err(ProviderError::Status(503))
        } else {
            Ok(vec![0.0; points.len()])
        }
    }
}

fn hilly_geometry() -> Geometry {
    // Consecutive points 0.001 deg apart: 111.111 m per segment, so the
    // 11.1111 m climb per sample is a 10% grade.
    Geometry::Points(vec![
        Point::new(0.000, 0.0),
        Point::new(0.001, 0.0),
        Point::new(0.002, 0.0),
    ])
}

fn encoded_geometry() -> Geometry {
    // Reference polyline decoding to (38.5,-120.2), (40.7,-120.95),
    // (43.252,-126.453), well north of the hilly region.
    Geometry::Encoded("_p~iF~ps|U_ulLnnqC_mqNvxq`@".to_string())
}

fn sparse_options() -> EvalOptions {
    // Keep every geometry point so three-point test routes produce
    // multiple elevation samples.
    EvalOptions {
        stride: 1,
        ..EvalOptions::default()
    }
}

#[tokio::test]
async fn terrain_outweighs_raw_travel_time() {
    let steps = vec![leaf("Head north"), leaf("Turn left"), leaf("Arrive")];
    // Same step structure; the hilly route is 15 s faster but climbs a
    // 10% grade, worth 20 score points at the default slope weight.
    let hilly = walking_route(485.0, hilly_geometry(), steps.clone());
    let flat = walking_route(500.0, encoded_geometry(), steps);

    let selection = select_best(&[hilly, flat], &HillySouth, &sparse_options())
        .await
        .unwrap();

    assert_eq!(selection.best_index, 1);
    let hilly_breakdown = &selection.candidates[0];
    assert!((hilly_breakdown.slope_factor - 10.0).abs() < 1e-4);
    assert!((hilly_breakdown.score - (485.0 + 20.0 + 1.5 + 0.75)).abs() < 1e-4);
    assert!((selection.best.score - (500.0 + 1.5 + 0.75)).abs() < 1e-4);
}

#[tokio::test]
async fn provider_outage_hits_one_route_not_the_batch() {
    let steps = vec![leaf("Head north"), leaf("Arrive")];
    let degraded = walking_route(400.0, hilly_geometry(), steps.clone());
    let healthy = walking_route(450.0, encoded_geometry(), steps);

    let selection = select_best(&[degraded, healthy], &PartialOutage, &sparse_options())
        .await
        .unwrap();

    // Both candidates were evaluated; the degraded one scored with slope 0.
    assert_eq!(selection.candidates.len(), 2);
    assert_eq!(selection.candidates[0].slope_factor, 0.0);
    assert_eq!(selection.best_index, 0);
}

#[tokio::test]
async fn nested_steps_count_like_flat_ones() {
    let nested = vec![
        leaf("Head north"),
        Step::Group(vec![leaf("Turn left"), leaf("Cross the footbridge")]),
        leaf("Arrive"),
    ];
    let flat = vec![
        leaf("Head north"),
        leaf("Turn left"),
        leaf("Cross the footbridge"),
        leaf("Arrive"),
    ];

    let routes = vec![
        walking_route(300.0, encoded_geometry(), nested),
        walking_route(300.0, encoded_geometry(), flat),
    ];
    let selection = select_best(&routes, &HillySouth, &sparse_options())
        .await
        .unwrap();

    assert_eq!(selection.candidates[0].step_count, 4);
    assert_eq!(selection.candidates[0].turn_count, 1);
    assert_eq!(selection.candidates[0].score, selection.candidates[1].score);
    // Identical scores: the first candidate is kept.
    assert_eq!(selection.best_index, 0);
}

#[tokio::test]
async fn all_empty_candidates_yield_no_route() {
    let routes = vec![
        Route {
            legs: Vec::new(),
            geometry: encoded_geometry(),
            duration_s: Some(100.0),
            distance_m: 0.0,
        },
        Route {
            legs: vec![Leg { steps: Vec::new() }],
            geometry: encoded_geometry(),
            duration_s: Some(100.0),
            distance_m: 0.0,
        },
    ];

    assert!(select_best(&routes, &HillySouth, &sparse_options())
        .await
        .is_err());
}

//! Candidate route evaluation and best-route selection.

use crate::elevation::{sample_elevations, ElevationProvider};
use crate::models::{Geometry, Instruction, Point, Route, ScoreBreakdown, Selection};
use crate::polyline::decode_polyline;
use crate::score::{score_route, ScoreWeights};
use crate::slope::estimate_slope;
use crate::steps::{count_turns, flatten_steps};
use crate::DEFAULT_STRIDE;
use futures::stream::{self, StreamExt};
use thiserror::Error;

/// Upper bound on in-flight candidate evaluations, so a batch of
/// alternatives cannot flood the elevation service with parallel requests.
const MAX_CONCURRENT_EVALS: usize = 4;

/// Options for one evaluation pass.
#[derive(Debug, Clone)]
pub struct EvalOptions {
    pub weights: ScoreWeights,
    /// Geometry subsampling interval for elevation lookup.
    pub stride: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            stride: DEFAULT_STRIDE,
        }
    }
}

/// The candidate set was empty, or every candidate was filtered out.
#[derive(Debug, Error)]
#[error("no viable route among the candidates")]
pub struct NoRouteError;

/// Evaluate all candidates and pick the one with the lowest score.
///
/// Candidates without legs, without steps, or without a duration are
/// filtered out rather than treated as errors. Evaluation runs concurrently
/// across candidates, with a small fixed bound on in-flight requests, but
/// results are reduced in input order, so a tie always resolves to the
/// candidate with the lowest original index.
pub async fn select_best(
    routes: &[Route],
    provider: &impl ElevationProvider,
    options: &EvalOptions,
) -> Result<Selection, NoRouteError> {
    let evaluations: Vec<Option<ScoreBreakdown>> = stream::iter(
        routes
            .iter()
            .enumerate()
            .map(|(index, route)| evaluate_candidate(index, route, provider, options)),
    )
    .buffered(MAX_CONCURRENT_EVALS)
    .collect()
    .await;

    let candidates: Vec<ScoreBreakdown> = evaluations.into_iter().flatten().collect();

    let mut best: Option<&ScoreBreakdown> = None;
    for breakdown in &candidates {
        match best {
            // Strict less-than: the earliest candidate wins ties.
            Some(current) if breakdown.score < current.score => best = Some(breakdown),
            Some(_) => {}
            None => best = Some(breakdown),
        }
    }

    let best = best.cloned().ok_or(NoRouteError)?;
    tracing::debug!(
        best_index = best.index,
        score = best.score,
        evaluated = candidates.len(),
        "selected route"
    );
    Ok(Selection {
        best_index: best.index,
        best,
        candidates,
    })
}

/// Run the full pipeline for one candidate: flatten, decode, sample,
/// estimate, score. Returns `None` for filtered-out candidates.
async fn evaluate_candidate(
    index: usize,
    route: &Route,
    provider: &impl ElevationProvider,
    options: &EvalOptions,
) -> Option<ScoreBreakdown> {
    // A route we cannot time cannot be ranked against the others.
    let duration_s = route.duration_s?;

    if route.legs.is_empty() {
        return None;
    }
    let mut leaves: Vec<&Instruction> = Vec::new();
    for leg in &route.legs {
        leaves.extend(flatten_steps(&leg.steps));
    }
    if leaves.is_empty() {
        return None;
    }

    let points = geometry_points(index, &route.geometry);
    let samples = sample_elevations(&points, options.stride, provider).await;
    let slope_factor = estimate_slope(&samples);

    let step_count = leaves.len();
    let turn_count = count_turns(&leaves);
    let score = score_route(duration_s, slope_factor, step_count, turn_count, &options.weights);

    Some(ScoreBreakdown {
        index,
        duration_s,
        slope_factor,
        step_count,
        turn_count,
        score,
    })
}

/// Resolve a route's geometry to points. A malformed encoded polyline
/// degrades to an empty geometry (slope 0) instead of excluding the route.
fn geometry_points(index: usize, geometry: &Geometry) -> Vec<Point> {
    match geometry {
        Geometry::Points(points) => points.clone(),
        Geometry::Encoded(encoded) => match decode_polyline(encoded) {
            Ok(points) => points,
            Err(err) => {
                tracing::warn!(candidate = index, "bad route geometry, slope defaults to 0: {err}");
                Vec::new()
            }
        },
    }
}

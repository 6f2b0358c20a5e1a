//! Weighted multi-criteria route scoring.

use serde::{Deserialize, Serialize};

/// Weights applied to each scoring criterion. Lower total score is better.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub time: f64,
    pub slope: f64,
    pub steps: f64,
    pub turns: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            time: 1.0,
            slope: 2.0,
            steps: 0.5,
            turns: 0.75,
        }
    }
}

impl ScoreWeights {
    /// The three-criterion scheme that ignores turn count.
    pub fn without_turns() -> Self {
        Self {
            turns: 0.0,
            ..Self::default()
        }
    }
}

/// Combine a route's metrics into one weighted score.
///
/// Scores are only comparable within one evaluation batch sharing the same
/// weights; no cross-route normalisation is performed.
pub fn score_route(
    duration_s: f64,
    slope_factor: f64,
    step_count: usize,
    turn_count: usize,
    weights: &ScoreWeights,
) -> f64 {
    weights.time * duration_s
        + weights.slope * slope_factor
        + weights.steps * step_count as f64
        + weights.turns * turn_count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_reference_values() {
        let weights = ScoreWeights::default();
        // Route A: 600s, slope 0, 5 steps, 2 turns.
        assert_eq!(score_route(600.0, 0.0, 5, 2, &weights), 604.0);
        // Route B: 500s, slope 10, 3 steps, 1 turn.
        assert_eq!(score_route(500.0, 10.0, 3, 1, &weights), 522.25);
    }

    #[test]
    fn zero_turn_weight_reproduces_three_term_scheme() {
        let weights = ScoreWeights::without_turns();
        assert_eq!(score_route(500.0, 10.0, 3, 1, &weights), 521.5);
        // Turn count no longer moves the score.
        assert_eq!(
            score_route(500.0, 10.0, 3, 9, &weights),
            score_route(500.0, 10.0, 3, 0, &weights)
        );
    }

    #[test]
    fn slope_is_penalised_twice_as_hard_as_time() {
        let weights = ScoreWeights::default();
        let base = score_route(100.0, 0.0, 0, 0, &weights);
        assert_eq!(score_route(100.0, 1.0, 0, 0, &weights) - base, 2.0);
        assert_eq!(score_route(101.0, 0.0, 0, 0, &weights) - base, 1.0);
    }
}

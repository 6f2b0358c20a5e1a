pub mod elevation;
pub mod models;
pub mod polyline;
pub mod score;
pub mod select;
pub mod slope;
pub mod steps;

pub use elevation::{sample_elevations, ElevationProvider, ProviderError, DEFAULT_STRIDE};
pub use models::{
    ElevationSample, Geometry, Instruction, Leg, Point, Route, ScoreBreakdown, Selection, Step,
};
pub use polyline::{decode_polyline, DecodeError};
pub use score::{score_route, ScoreWeights};
pub use select::{select_best, EvalOptions, NoRouteError};
pub use slope::estimate_slope;
pub use steps::{count_turns, flatten_steps};

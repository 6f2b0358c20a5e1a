//! Slope estimation from elevation samples.

use crate::models::ElevationSample;

/// Approximate meters per degree of latitude (and of longitude at the
/// equator) for the equirectangular distance approximation.
const METERS_PER_DEGREE: f64 = 111_111.0;

/// Estimate a route's slope factor: the mean absolute percentage grade
/// across consecutive sample pairs.
///
/// Uphill and downhill are penalised equally; the metric represents terrain
/// difficulty, not net elevation change. Returns 0.0 for fewer than two
/// samples.
pub fn estimate_slope(samples: &[ElevationSample]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }

    let mut total = 0.0;
    let mut segments = 0usize;

    for pair in samples.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);

        let dist_lat = (b.point.lat - a.point.lat) * METERS_PER_DEGREE;
        let mean_lat = ((a.point.lat + b.point.lat) / 2.0).to_radians();
        let dist_lon = (b.point.lon - a.point.lon) * METERS_PER_DEGREE * mean_lat.cos().abs();
        let horizontal = (dist_lat * dist_lat + dist_lon * dist_lon).sqrt();

        let percent = if horizontal > 0.0 {
            (b.elevation_m - a.elevation_m) / horizontal * 100.0
        } else {
            0.0
        };

        total += percent.abs();
        segments += 1;
    }

    total / segments as f64
}

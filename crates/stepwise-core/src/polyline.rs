//! Encoded polyline decoding.
//!
//! Directions providers compress route geometry as signed coordinate deltas,
//! zig-zag encoded and packed into 5-bit groups offset by 63, at a fixed
//! scale of 1e5.

use crate::models::Point;
use thiserror::Error;

const SCALE: f64 = 1e5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("encoded polyline ended mid-chunk")]
    Truncated,
    #[error("invalid polyline byte {byte:#04x} at index {index}")]
    InvalidByte { byte: u8, index: usize },
    #[error("coordinate delta run too long at index {index}")]
    TooLong { index: usize },
}

/// Decode an encoded polyline string into (lat, lon) points.
///
/// Pure and idempotent; identical input always yields identical output.
pub fn decode_polyline(encoded: &str) -> Result<Vec<Point>, DecodeError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;

    while index < bytes.len() {
        let (delta_lat, next) = decode_component(bytes, index)?;
        let (delta_lon, next) = decode_component(bytes, next)?;
        lat += delta_lat;
        lon += delta_lon;
        points.push(Point {
            lat: lat as f64 / SCALE,
            lon: lon as f64 / SCALE,
        });
        index = next;
    }

    Ok(points)
}

/// Decode one coordinate delta starting at `index`, returning the delta and
/// the index of the first byte after it.
fn decode_component(bytes: &[u8], mut index: usize) -> Result<(i64, usize), DecodeError> {
    let mut accum: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let Some(&byte) = bytes.get(index) else {
            return Err(DecodeError::Truncated);
        };
        if !(63..=126).contains(&byte) {
            return Err(DecodeError::InvalidByte { byte, index });
        }
        // Real coordinate deltas fit in a handful of 5-bit chunks; a run
        // long enough to overrun the accumulator is malformed input.
        if shift >= u64::BITS {
            return Err(DecodeError::TooLong { index });
        }
        let chunk = u64::from(byte - 63);
        accum |= (chunk & 0x1f) << shift;
        shift += 5;
        index += 1;
        // Values >= 0x20 carry a continuation bit.
        if chunk < 0x20 {
            break;
        }
    }

    // Zig-zag: odd values are negated magnitudes.
    let magnitude = (accum >> 1) as i64;
    let delta = if accum & 1 != 0 {
        -(magnitude + 1)
    } else {
        magnitude
    };
    Ok((delta, index))
}

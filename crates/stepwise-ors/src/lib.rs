//! OpenRouteService API clients.
//!
//! Handles all communication with the OpenRouteService backend: walking
//! directions with alternatives, forward/reverse geocoding, and elevation
//! profiles along a line.

pub mod client;
pub mod directions;
pub mod elevation;
pub mod geocode;

pub use client::{OrsClient, OrsConfig, OrsError, DEFAULT_BASE_URL};
pub use directions::AlternativeRoutes;

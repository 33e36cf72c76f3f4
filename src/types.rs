//! Core types for the wavefront engine
//!
//! Defines the 2D point and renderable ring geometry records exchanged with
//! the rendering collaborator, per-emitter styling hints, and the crate-wide
//! error type.

use serde::{Deserialize, Serialize};

/// Result type for wavefront operations
pub type WaveResult<T> = Result<T, WaveError>;

/// Errors that can occur when constructing or configuring emitters
///
/// All variants are raised synchronously at construction or phase assignment;
/// the tick-path operations (`advance`, `circles`) are total over valid state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WaveError {
    #[error("Invalid wave speed: {0}. Must be a positive finite number")]
    InvalidWaveSpeed(f64),

    #[error("Invalid frequency: {0}. Must be a positive finite number")]
    InvalidFrequency(f64),

    #[error("Invalid max radius: {0}. Must be a positive finite number")]
    InvalidMaxRadius(f64),

    #[error("Invalid half span: {0}. Must be a non-negative finite number")]
    InvalidHalfSpan(f64),

    #[error("Invalid modulus: {0}. Must be a positive finite number")]
    InvalidModulus(f64),

    #[error("Non-finite phase: {0}")]
    NonFinitePhase(f64),
}

/// A point in the 2D simulation plane (model units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Renderable geometry for a single wavefront ring
///
/// Invisible rings (`visible == false`) have not been emitted yet and must be
/// excluded from drawing (or drawn at opacity 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingGeometry {
    /// Center of the ring (the owning emitter's position)
    pub center: Point2,
    /// Current ring radius in model units
    pub radius: f64,
    /// Whether the ring has been emitted yet
    pub visible: bool,
}

/// Presentation hints carried opaquely through the engine
///
/// The engine never interprets these; the rendering collaborator reads them
/// back when drawing an emitter's rings. `color` is a renderer-defined label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmitterStyle {
    pub color: String,
    /// Base opacity for visible rings, in `[0, 1]`
    pub alpha: f64,
}

impl Default for EmitterStyle {
    fn default() -> Self {
        Self {
            color: "tab:blue".to_string(),
            alpha: 0.6,
        }
    }
}

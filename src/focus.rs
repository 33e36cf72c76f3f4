//! Focus-phase solver for beam steering
//!
//! Converts the geometric path-length difference between an emitter and a
//! target point into the phase delay that compensates for it. When every
//! emitter in an array is phase-set this way for the same target, their
//! wavefront crests arrive at the target in sync, producing a focused beam.

use crate::emitter::Emitter;
use crate::types::Point2;
use std::f64::consts::TAU;

/// Phase an emitter must be assigned so its wavefront crest reaches `target`
/// in sync with every other emitter solved for the same target.
///
/// Returns `distance(target, emitter.position) * 2π / wavelength`,
/// unnormalized; feed the result to [`Emitter::set_phase`], which wraps it
/// into `[0, 2π)`.
pub fn phase_for_focus(target: Point2, emitter: &Emitter) -> f64 {
    target.distance_to(&emitter.position()) * TAU / emitter.wavelength()
}

//! Point-source wavefront kinematics
//!
//! An [`Emitter`] is a fixed point source radiating concentric circular
//! wavefronts at a given wave speed and frequency. The engine tracks one
//! logical ring per wavelength out to `max_radius`; ring geometry is a pure
//! function of the emitter's parameters and its elapsed simulation time, so
//! any instant can be queried directly without stepping through intermediate
//! states.
//!
//! The expanding-wavefront illusion comes from the ring lattice: ring `i`
//! sits at base radius `i * wavelength` plus a phase-shifted traveling term
//! wrapped into one wavelength. As the traveling term exceeds a wavelength it
//! restarts from zero, and the ring one index up takes over its position.

use crate::math::wrap_unchecked;
use crate::types::{EmitterStyle, Point2, RingGeometry, WaveError, WaveResult};
use std::f64::consts::TAU;

/// Relative tolerance for the ring-count boundary: when
/// `max_radius / wavelength` lands within this distance of an integer the
/// ratio is treated as exact and no extra ring is added.
const RING_COUNT_EPSILON: f64 = 1e-9;

/// A point source of expanding circular wavefronts
#[derive(Debug, Clone)]
pub struct Emitter {
    position: Point2,
    wave_speed: f64,
    frequency: f64,
    max_radius: f64,
    wavelength: f64,
    period: f64,
    ring_count: usize,
    style: EmitterStyle,
    /// Phase offset, always normalized into `[0, 2π)`
    phase: f64,
    /// Elapsed time before the first ring becomes visible, in `(0, period]`
    start_delay: f64,
    elapsed_time: f64,
}

impl Emitter {
    /// Create an emitter at `position` with the given physical parameters.
    ///
    /// `wave_speed`, `frequency` and `max_radius` must be positive and
    /// finite. `initial_phase` may be any finite value; it is normalized into
    /// `[0, 2π)`. The number of tracked rings is fixed at construction as
    /// `ceil(max_radius / wavelength)`, rounding up unless the ratio is an
    /// exact integer multiple (within a small relative tolerance).
    pub fn new(
        position: Point2,
        wave_speed: f64,
        frequency: f64,
        initial_phase: f64,
        max_radius: f64,
    ) -> WaveResult<Self> {
        if !(wave_speed > 0.0) || !wave_speed.is_finite() {
            return Err(WaveError::InvalidWaveSpeed(wave_speed));
        }
        if !(frequency > 0.0) || !frequency.is_finite() {
            return Err(WaveError::InvalidFrequency(frequency));
        }
        if !(max_radius > 0.0) || !max_radius.is_finite() {
            return Err(WaveError::InvalidMaxRadius(max_radius));
        }

        let wavelength = wave_speed / frequency;
        let period = 1.0 / frequency;
        let ring_count = ring_count_for(max_radius, wavelength);

        let mut emitter = Self {
            position,
            wave_speed,
            frequency,
            max_radius,
            wavelength,
            period,
            ring_count,
            style: EmitterStyle::default(),
            phase: 0.0,
            start_delay: period,
            elapsed_time: 0.0,
        };
        emitter.set_phase(initial_phase)?;
        Ok(emitter)
    }

    /// Attach presentation hints for the rendering collaborator.
    pub fn with_style(mut self, style: EmitterStyle) -> Self {
        self.style = style;
        self
    }

    /// Assign a new phase offset and rezero the emitter's clock.
    ///
    /// `phi` is normalized into `[0, 2π)`; the start delay becomes
    /// `period * (1 - phase / 2π)` and `elapsed_time` resets to 0, discarding
    /// any previously simulated time. A zero-phase emitter waits one full
    /// period before its first ring appears.
    pub fn set_phase(&mut self, phi: f64) -> WaveResult<()> {
        if !phi.is_finite() {
            return Err(WaveError::NonFinitePhase(phi));
        }
        self.phase = wrap_unchecked(phi, TAU);
        self.start_delay = self.period * (1.0 - self.phase / TAU);
        self.elapsed_time = 0.0;
        Ok(())
    }

    /// Advance the emitter's clock by `dt` seconds.
    ///
    /// `dt` may be zero or negative (rewinding); all finite values produce
    /// well-defined geometry. Ring state is not stored, so this only moves
    /// the clock.
    pub fn advance(&mut self, dt: f64) {
        self.elapsed_time += dt;
    }

    /// Radius of ring `i` at the current elapsed time.
    ///
    /// Ring `i` sits at the lattice point `i * wavelength` plus the
    /// phase-shifted traveling term wrapped into one wavelength. Before the
    /// start delay has passed the wavefront has not begun emitting and every
    /// ring sits at radius 0.
    pub fn ring_radius(&self, i: usize) -> f64 {
        if self.elapsed_time < self.start_delay {
            return 0.0;
        }
        let traveling = self.wavelength * self.phase / TAU + self.wave_speed * self.elapsed_time;
        i as f64 * self.wavelength + wrap_unchecked(traveling, self.wavelength)
    }

    /// Whether ring `i` has been emitted yet.
    ///
    /// Ring `i` becomes visible once `i` full periods of emission time have
    /// passed beyond the start delay, and never turns back off as time moves
    /// forward.
    pub fn ring_visible(&self, i: usize) -> bool {
        if self.elapsed_time < self.start_delay {
            return false;
        }
        (i as f64) < (self.elapsed_time - self.start_delay) / self.period
    }

    /// Number of rings currently visible.
    pub fn visible_ring_count(&self) -> usize {
        (0..self.ring_count).filter(|&i| self.ring_visible(i)).count()
    }

    /// Fresh renderable geometry for every tracked ring, in ring-index order.
    ///
    /// Recomputed from the current state on each call; the returned iterator
    /// borrows the emitter but holds no other state.
    pub fn rings(&self) -> impl Iterator<Item = RingGeometry> + '_ {
        (0..self.ring_count).map(move |i| RingGeometry {
            center: self.position,
            radius: self.ring_radius(i),
            visible: self.ring_visible(i),
        })
    }

    pub fn position(&self) -> Point2 {
        self.position
    }

    pub fn wave_speed(&self) -> f64 {
        self.wave_speed
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Wavelength: `wave_speed / frequency`, the spacing between consecutive
    /// ring lattice points.
    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    /// Period: `1 / frequency`.
    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// Current phase offset in `[0, 2π)`.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Elapsed time the emitter waits before its first ring appears.
    pub fn start_delay(&self) -> f64 {
        self.start_delay
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// Number of concentric rings tracked, fixed at construction.
    pub fn ring_count(&self) -> usize {
        self.ring_count
    }

    pub fn style(&self) -> &EmitterStyle {
        &self.style
    }
}

/// Rings needed to cover `max_radius` at one ring per wavelength.
///
/// Strict ceiling, except that ratios within [`RING_COUNT_EPSILON`] of an
/// integer count as exact (so `max_radius = 2λ` yields 2 rings, not 3, even
/// when floating-point division lands just above 2). Always at least 1.
fn ring_count_for(max_radius: f64, wavelength: f64) -> usize {
    let ratio = max_radius / wavelength;
    let nearest = ratio.round();
    let n = if (ratio - nearest).abs() <= RING_COUNT_EPSILON * nearest.max(1.0) {
        nearest
    } else {
        ratio.ceil()
    };
    (n as usize).max(1)
}

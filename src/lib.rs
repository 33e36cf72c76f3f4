//! # Phasefront
//!
//! A 2D phased-array wavefront kinematics engine. A set of point emitters,
//! each with a position, wave speed, frequency and phase offset, radiates
//! concentric circular wavefronts; the engine computes, for any elapsed
//! simulation time, the radius and visibility of every ring, and solves the
//! phase offsets needed to focus the array's beam on an arbitrary target
//! point.
//!
//! ## Overview
//!
//! - **Ring kinematics**: each [`Emitter`] tracks one ring per wavelength out
//!   to its maximum radius. Ring geometry is a pure function of the emitter's
//!   parameters and elapsed time, so any instant can be queried directly.
//! - **Beam focusing**: [`focus::phase_for_focus`] converts an emitter's
//!   path-length difference to a target into the compensating phase delay.
//! - **Array stepping**: an [`EmitterArray`] broadcasts clock advancement and
//!   flattens ring geometry for the renderer. Arrays are sealed through a
//!   builder that removes the collective start offset exactly once.
//! - **Scenario presets**: [`scenario::ArrayLayout`] assembles classic
//!   configurations (phase-gradient sweeps, focused lines, dual-frequency
//!   overlays, random clouds) from a serde-friendly description.
//!
//! The engine performs no rendering, no I/O and owns no animation loop: an
//! external driver ticks the array once per frame and reads back renderable
//! ring records.
//!
//! ## Example
//!
//! ```rust
//! use phasefront::prelude::*;
//!
//! # fn main() -> phasefront::WaveResult<()> {
//! let target = Point2::new(0.0, 20.0);
//! let mut builder = EmitterArray::builder();
//! for x in [-1.0, 1.0] {
//!     let mut emitter = Emitter::new(Point2::new(x, 0.0), 3.0, 0.2, 0.0, 100.0)?;
//!     let phase = phase_for_focus(target, &emitter);
//!     emitter.set_phase(phase)?;
//!     builder = builder.add(emitter);
//! }
//! let mut array = builder.build();
//!
//! // One animation tick at 30 fps, then read geometry
//! array.advance(1.0 / 30.0);
//! let rings: Vec<RingGeometry> = array.circles().collect();
//! assert_eq!(rings.len(), 2 * 7); // two emitters, ceil(100 / 15) rings each
//! # Ok(())
//! # }
//! ```

pub mod array;
pub mod emitter;
pub mod focus;
pub mod math;
pub mod scenario;
pub mod types;

// Re-export main types
pub use array::{EmitterArray, EmitterArrayBuilder};
pub use emitter::Emitter;
pub use focus::phase_for_focus;
pub use math::wrap;
pub use scenario::{ArrayLayout, ScenarioConfig};
pub use types::{EmitterStyle, Point2, RingGeometry, WaveError, WaveResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::array::{EmitterArray, EmitterArrayBuilder};
    pub use crate::emitter::Emitter;
    pub use crate::focus::phase_for_focus;
    pub use crate::scenario::{ArrayLayout, ScenarioConfig};
    pub use crate::types::{EmitterStyle, Point2, RingGeometry, WaveError, WaveResult};
}

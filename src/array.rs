//! Emitter aggregation and collective time stepping
//!
//! An [`EmitterArray`] owns a set of independent emitters, broadcasts clock
//! advancement to all of them, and flattens their ring geometry for the
//! rendering collaborator.
//!
//! Arrays are assembled through [`EmitterArrayBuilder`], which performs the
//! one-time start-offset removal when the array is sealed. Without it, every
//! emitter with a nonzero start delay would show nothing at animation start;
//! sealing fast-forwards the whole array's clock to the moment the
//! earliest-firing emitter naturally begins, preserving all pairwise phase
//! timing. Making this a builder transition keeps the single-use operation
//! out of reach once ticking has begun.

use crate::emitter::Emitter;
use crate::types::RingGeometry;
use tracing::debug;

/// Assembles emitters before the simulation starts ticking.
#[derive(Debug, Default)]
pub struct EmitterArrayBuilder {
    emitters: Vec<Emitter>,
}

impl EmitterArrayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an emitter. Duplicates are legal; multi-band configurations
    /// layer independent emitters at the same position.
    pub fn add(mut self, emitter: Emitter) -> Self {
        self.emitters.push(emitter);
        self
    }

    /// Append every emitter from an iterator.
    pub fn extend<I: IntoIterator<Item = Emitter>>(mut self, emitters: I) -> Self {
        self.emitters.extend(emitters);
        self
    }

    /// Seal the array, removing the collective start offset.
    ///
    /// Every member is advanced by the minimum start delay across the array,
    /// so the earliest-firing emitter ends exactly at its own start delay and
    /// relative timing between members is unchanged. An empty builder seals
    /// into an empty array.
    pub fn build(self) -> EmitterArray {
        let mut emitters = self.emitters;
        let offset = emitters
            .iter()
            .map(Emitter::start_delay)
            .fold(f64::INFINITY, f64::min);
        let offset = if offset.is_finite() { offset } else { 0.0 };
        for emitter in &mut emitters {
            emitter.advance(offset);
        }
        debug!(
            emitters = emitters.len(),
            removed_offset = offset,
            "sealed emitter array"
        );
        EmitterArray { emitters }
    }
}

/// A sealed collection of emitters stepped in lockstep.
#[derive(Debug, Default)]
pub struct EmitterArray {
    emitters: Vec<Emitter>,
}

impl EmitterArray {
    pub fn builder() -> EmitterArrayBuilder {
        EmitterArrayBuilder::new()
    }

    /// Advance every member emitter's clock by `dt` seconds.
    ///
    /// Members are independent state machines; iteration order carries no
    /// semantics. Callers read geometry between ticks, never during one.
    pub fn advance(&mut self, dt: f64) {
        for emitter in &mut self.emitters {
            emitter.advance(dt);
        }
    }

    /// Flattened ring geometry across every emitter, in emitter insertion
    /// order then ring index order.
    ///
    /// Lazy and restartable: geometry is recomputed from current state each
    /// time the iterator is consumed. Always yields the sum of all members'
    /// ring counts, with unemitted rings flagged invisible.
    pub fn circles(&self) -> impl Iterator<Item = RingGeometry> + '_ {
        self.emitters.iter().flat_map(Emitter::rings)
    }

    /// Member emitters in insertion order (for source-marker drawing).
    pub fn emitters(&self) -> &[Emitter] {
        &self.emitters
    }

    pub fn len(&self) -> usize {
        self.emitters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emitters.is_empty()
    }
}

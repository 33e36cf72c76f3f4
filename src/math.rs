//! Canonical modulo helper used by phase and ring-offset math
//!
//! All periodic quantities in the engine (phase angles, sub-wavelength ring
//! offsets) are kept in a half-open range `[0, modulus)` by [`wrap`].

use crate::types::{WaveError, WaveResult};

/// Wrap `x` into `[0, modulus)` with a canonical non-negative modulo.
///
/// Negative inputs mirror back into range, so `wrap(-3.0, 5.0) == Ok(2.0)`.
/// Exact multiples of the modulus map to `0.0`, never to `modulus` itself.
///
/// Fails with [`WaveError::InvalidModulus`] when `modulus` is non-positive or
/// non-finite.
pub fn wrap(x: f64, modulus: f64) -> WaveResult<f64> {
    if !(modulus > 0.0) || !modulus.is_finite() {
        return Err(WaveError::InvalidModulus(modulus));
    }
    Ok(wrap_unchecked(x, modulus))
}

/// Modulo into `[0, modulus)` for call sites where `modulus > 0` has already
/// been established (wavelengths and 2π are validated at construction).
pub(crate) fn wrap_unchecked(x: f64, modulus: f64) -> f64 {
    let r = x.rem_euclid(modulus);
    // rem_euclid can round up to the modulus itself for tiny negative inputs
    if r >= modulus {
        0.0
    } else {
        r
    }
}

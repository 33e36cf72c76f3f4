//! Scenario configuration and array-layout presets
//!
//! Defines the shared physical parameters for a phased-array scenario and a
//! set of declarative layouts that build sealed [`EmitterArray`]s: linear
//! sweeps with a phase gradient, focused lines, dual-frequency overlays, and
//! seeded random clouds. Layouts only assemble arrays; the animation loop and
//! all rendering stay with the external collaborator.

use crate::array::EmitterArray;
use crate::emitter::Emitter;
use crate::focus::phase_for_focus;
use crate::types::{EmitterStyle, Point2, WaveError, WaveResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Shared physical parameters for a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Wave propagation speed in model units per second
    pub wave_speed: f64,
    /// Emission frequency in Hz
    pub frequency: f64,
    /// Number of emitters a layout places (layouts may override)
    pub emitter_count: usize,
    /// Outer radius each emitter tracks rings out to
    pub max_radius: f64,
    /// Random seed for reproducible random layouts
    pub seed: u64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            wave_speed: 3.0,
            frequency: 0.2, // wavelength 15, period 5
            emitter_count: 10,
            max_radius: 100.0,
            seed: 42,
        }
    }
}

impl ScenarioConfig {
    /// Wavelength: `wave_speed / frequency`.
    pub fn wavelength(&self) -> f64 {
        self.wave_speed / self.frequency
    }

    /// Period: `1 / frequency`.
    pub fn period(&self) -> f64 {
        1.0 / self.frequency
    }
}

/// Declarative emitter placement presets
///
/// Each variant assembles and seals an [`EmitterArray`] from a
/// [`ScenarioConfig`]. Positions are in model units; phases in radians.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ArrayLayout {
    /// Emitters evenly spaced on the x-axis over `[-half_span, half_span]`
    /// with a linear phase gradient from `phase_start` to `phase_end`.
    LinearSweep {
        half_span: f64,
        phase_start: f64,
        phase_end: f64,
    },
    /// Same as `LinearSweep` but along a baseline rotated by `angle_deg`
    /// counterclockwise from the x-axis.
    AngledSweep {
        half_span: f64,
        angle_deg: f64,
        phase_start: f64,
        phase_end: f64,
    },
    /// Emitters on the x-axis, each phase-set via the focus solver so the
    /// beam converges on `focus`.
    FocusedLine { half_span: f64, focus: Point2 },
    /// Two overlaid linear sweeps: the second at `frequency_ratio` times the
    /// base frequency with the phase gradient negated and a distinct style.
    DualBand {
        half_span: f64,
        phase_start: f64,
        phase_end: f64,
        frequency_ratio: f64,
    },
    /// Two overlaid focused lines at different frequencies and targets.
    DualFocus {
        half_span: f64,
        focus_a: Point2,
        focus_b: Point2,
        frequency_ratio: f64,
    },
    /// Emitters at uniformly random positions in the square
    /// `[-half_span, half_span]^2`, all focused on `focus`. Placement is
    /// reproducible from the config seed. `emitter_count` overrides the
    /// config's count when set.
    RandomFocus {
        half_span: f64,
        focus: Point2,
        emitter_count: Option<usize>,
    },
}

impl ArrayLayout {
    /// Assemble and seal an emitter array for this layout.
    ///
    /// Fails with [`WaveError::InvalidHalfSpan`] before placing any emitter
    /// when the layout's half span is negative or non-finite. A zero half
    /// span is legal and stacks every emitter at the baseline center.
    pub fn build(&self, config: &ScenarioConfig) -> WaveResult<EmitterArray> {
        let span = match *self {
            ArrayLayout::LinearSweep { half_span, .. }
            | ArrayLayout::AngledSweep { half_span, .. }
            | ArrayLayout::FocusedLine { half_span, .. }
            | ArrayLayout::DualBand { half_span, .. }
            | ArrayLayout::DualFocus { half_span, .. }
            | ArrayLayout::RandomFocus { half_span, .. } => half_span,
        };
        if !span.is_finite() || span < 0.0 {
            return Err(WaveError::InvalidHalfSpan(span));
        }

        let n = config.emitter_count;
        let mut builder = EmitterArray::builder();

        match *self {
            ArrayLayout::LinearSweep {
                half_span,
                phase_start,
                phase_end,
            } => {
                let xs = evenly_spaced(-half_span, half_span, n);
                let phases = evenly_spaced(phase_start, phase_end, n);
                for (&x, &phi) in xs.iter().zip(&phases) {
                    builder = builder.add(line_emitter(config, x, 0.0, phi)?);
                }
            }
            ArrayLayout::AngledSweep {
                half_span,
                angle_deg,
                phase_start,
                phase_end,
            } => {
                let angle = angle_deg.to_radians();
                let rs = evenly_spaced(-half_span, half_span, n);
                let phases = evenly_spaced(phase_start, phase_end, n);
                for (&r, &phi) in rs.iter().zip(&phases) {
                    builder =
                        builder.add(line_emitter(config, r * angle.cos(), r * angle.sin(), phi)?);
                }
            }
            ArrayLayout::FocusedLine { half_span, focus } => {
                for &x in &evenly_spaced(-half_span, half_span, n) {
                    builder = builder.add(focused_emitter(config, x, 0.0, focus, 1.0, None)?);
                }
            }
            ArrayLayout::DualBand {
                half_span,
                phase_start,
                phase_end,
                frequency_ratio,
            } => {
                let xs = evenly_spaced(-half_span, half_span, n);
                let phases = evenly_spaced(phase_start, phase_end, n);
                for (&x, &phi) in xs.iter().zip(&phases) {
                    builder = builder.add(line_emitter(config, x, 0.0, phi)?);
                }
                for (&x, &phi) in xs.iter().zip(&phases) {
                    let e = Emitter::new(
                        Point2::new(x, 0.0),
                        config.wave_speed,
                        config.frequency * frequency_ratio,
                        -phi,
                        config.max_radius,
                    )?
                    .with_style(second_band_style());
                    builder = builder.add(e);
                }
            }
            ArrayLayout::DualFocus {
                half_span,
                focus_a,
                focus_b,
                frequency_ratio,
            } => {
                let xs = evenly_spaced(-half_span, half_span, n);
                for &x in &xs {
                    builder = builder.add(focused_emitter(config, x, 0.0, focus_a, 1.0, None)?);
                }
                for &x in &xs {
                    builder = builder.add(focused_emitter(
                        config,
                        x,
                        0.0,
                        focus_b,
                        frequency_ratio,
                        Some(second_band_style()),
                    )?);
                }
            }
            ArrayLayout::RandomFocus {
                half_span,
                focus,
                emitter_count,
            } => {
                let n = emitter_count.unwrap_or(n);
                let mut rng = StdRng::seed_from_u64(config.seed);
                for _ in 0..n {
                    let x = rng.gen_range(-half_span..=half_span);
                    let y = rng.gen_range(-half_span..=half_span);
                    builder = builder.add(focused_emitter(config, x, y, focus, 1.0, None)?);
                }
            }
        }

        let array = builder.build();
        debug!(layout = ?self, emitters = array.len(), "built scenario array");
        Ok(array)
    }
}

fn line_emitter(config: &ScenarioConfig, x: f64, y: f64, phase: f64) -> WaveResult<Emitter> {
    Emitter::new(
        Point2::new(x, y),
        config.wave_speed,
        config.frequency,
        phase,
        config.max_radius,
    )
}

/// Place an emitter, then phase-set it for the focus target (the solver needs
/// the emitter's own wavelength, so phase assignment happens after placement).
fn focused_emitter(
    config: &ScenarioConfig,
    x: f64,
    y: f64,
    focus: Point2,
    frequency_ratio: f64,
    style: Option<EmitterStyle>,
) -> WaveResult<Emitter> {
    let mut emitter = Emitter::new(
        Point2::new(x, y),
        config.wave_speed,
        config.frequency * frequency_ratio,
        0.0,
        config.max_radius,
    )?;
    if let Some(style) = style {
        emitter = emitter.with_style(style);
    }
    let phase = phase_for_focus(focus, &emitter);
    emitter.set_phase(phase)?;
    Ok(emitter)
}

fn second_band_style() -> EmitterStyle {
    EmitterStyle {
        color: "red".to_string(),
        ..EmitterStyle::default()
    }
}

/// `n` evenly spaced values over `[start, end]`, endpoints included.
/// `n == 1` yields `[start]`.
fn evenly_spaced(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n as f64 - 1.0);
            (0..n).map(|i| start + i as f64 * step).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_default_config() {
        let cfg = ScenarioConfig::default();
        assert!((cfg.wavelength() - 15.0).abs() < 1e-12);
        assert!((cfg.period() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_layout_rejects_negative_half_span() {
        let cfg = ScenarioConfig::default();
        // Random placement would otherwise sample from an empty range
        let layout = ArrayLayout::RandomFocus {
            half_span: -1.0,
            focus: Point2::new(0.0, 20.0),
            emitter_count: None,
        };
        assert!(matches!(
            layout.build(&cfg),
            Err(WaveError::InvalidHalfSpan(_))
        ));
        let layout = ArrayLayout::LinearSweep {
            half_span: -7.5,
            phase_start: 0.0,
            phase_end: 1.0,
        };
        assert!(matches!(
            layout.build(&cfg),
            Err(WaveError::InvalidHalfSpan(_))
        ));
    }

    #[test]
    fn test_layout_rejects_non_finite_half_span() {
        let cfg = ScenarioConfig::default();
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let layout = ArrayLayout::FocusedLine {
                half_span: bad,
                focus: Point2::new(0.0, 20.0),
            };
            assert!(matches!(
                layout.build(&cfg),
                Err(WaveError::InvalidHalfSpan(_))
            ));
        }
    }

    #[test]
    fn test_zero_half_span_stacks_emitters() {
        let cfg = ScenarioConfig::default();
        let layout = ArrayLayout::RandomFocus {
            half_span: 0.0,
            focus: Point2::new(0.0, 20.0),
            emitter_count: None,
        };
        let array = layout.build(&cfg).unwrap();
        assert_eq!(array.len(), 10);
        for emitter in array.emitters() {
            assert_eq!(emitter.position(), Point2::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_evenly_spaced() {
        let xs = evenly_spaced(-1.0, 1.0, 5);
        assert_eq!(xs.len(), 5);
        assert!((xs[0] + 1.0).abs() < 1e-12);
        assert!((xs[4] - 1.0).abs() < 1e-12);
        assert!((xs[2]).abs() < 1e-12);
        assert_eq!(evenly_spaced(0.0, 1.0, 0).len(), 0);
        assert_eq!(evenly_spaced(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn test_linear_sweep_layout() {
        let cfg = ScenarioConfig::default();
        let layout = ArrayLayout::LinearSweep {
            half_span: cfg.wavelength() / 4.0,
            phase_start: 0.0,
            phase_end: FRAC_PI_2,
        };
        let array = layout.build(&cfg).unwrap();
        assert_eq!(array.len(), 10);
        // Phase gradient runs start to end across the line
        assert!(array.emitters()[0].phase().abs() < 1e-12);
        assert!((array.emitters()[9].phase() - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_angled_sweep_positions_on_baseline() {
        let cfg = ScenarioConfig::default();
        let layout = ArrayLayout::AngledSweep {
            half_span: cfg.wavelength() / 4.0,
            angle_deg: 45.0,
            phase_start: 0.0,
            phase_end: FRAC_PI_2,
        };
        let array = layout.build(&cfg).unwrap();
        for emitter in array.emitters() {
            let p = emitter.position();
            assert!((p.x - p.y).abs() < 1e-9, "45 degree baseline has x == y");
        }
    }

    #[test]
    fn test_focused_line_layout() {
        let cfg = ScenarioConfig::default();
        let focus = Point2::new(0.0, 20.0);
        let layout = ArrayLayout::FocusedLine {
            half_span: cfg.wavelength(),
            focus,
        };
        let array = layout.build(&cfg).unwrap();
        assert_eq!(array.len(), 10);
        // Mirror-image emitters get identical focus phases
        let phases: Vec<f64> = array.emitters().iter().map(Emitter::phase).collect();
        for i in 0..5 {
            assert!(
                (phases[i] - phases[9 - i]).abs() < 1e-9,
                "symmetric pair ({i}, {}) phases differ",
                9 - i
            );
        }
    }

    #[test]
    fn test_dual_band_layout() {
        let cfg = ScenarioConfig::default();
        let layout = ArrayLayout::DualBand {
            half_span: cfg.wavelength() / 4.0,
            phase_start: 0.0,
            phase_end: FRAC_PI_2,
            frequency_ratio: 0.5,
        };
        let array = layout.build(&cfg).unwrap();
        assert_eq!(array.len(), 20);
        let (first, second) = array.emitters().split_at(10);
        for (a, b) in first.iter().zip(second) {
            assert_eq!(a.position(), b.position());
            assert!((b.frequency() - 0.5 * a.frequency()).abs() < 1e-12);
            assert_eq!(b.style().color, "red");
        }
    }

    #[test]
    fn test_dual_focus_layout() {
        let cfg = ScenarioConfig::default();
        let layout = ArrayLayout::DualFocus {
            half_span: cfg.wavelength(),
            focus_a: Point2::new(0.0, 20.0),
            focus_b: Point2::new(-20.0, 30.0),
            frequency_ratio: 0.8,
        };
        let array = layout.build(&cfg).unwrap();
        assert_eq!(array.len(), 20);
        assert!((array.emitters()[19].frequency() - 0.16).abs() < 1e-12);
    }

    #[test]
    fn test_random_focus_reproducible() {
        let cfg = ScenarioConfig::default();
        let layout = ArrayLayout::RandomFocus {
            half_span: cfg.wavelength() / 2.0,
            focus: Point2::new(0.0, 20.0),
            emitter_count: None,
        };
        let a = layout.build(&cfg).unwrap();
        let b = layout.build(&cfg).unwrap();
        assert_eq!(a.len(), 10);
        for (x, y) in a.emitters().iter().zip(b.emitters()) {
            assert_eq!(x.position(), y.position());
        }
        let hs = cfg.wavelength() / 2.0;
        for emitter in a.emitters() {
            let p = emitter.position();
            assert!(p.x.abs() <= hs && p.y.abs() <= hs);
        }
    }

    #[test]
    fn test_random_focus_count_override() {
        let cfg = ScenarioConfig::default();
        let layout = ArrayLayout::RandomFocus {
            half_span: 2.0 * cfg.wavelength(),
            focus: Point2::new(0.0, 20.0),
            emitter_count: Some(20),
        };
        assert_eq!(layout.build(&cfg).unwrap().len(), 20);
    }

    #[test]
    fn test_layout_roundtrips_through_serde() {
        let layout = ArrayLayout::FocusedLine {
            half_span: 15.0,
            focus: Point2::new(0.0, 20.0),
        };
        let json = serde_json::to_string(&layout).unwrap();
        let back: ArrayLayout = serde_json::from_str(&json).unwrap();
        match back {
            ArrayLayout::FocusedLine { half_span, focus } => {
                assert_eq!(half_span, 15.0);
                assert_eq!(focus, Point2::new(0.0, 20.0));
            }
            other => panic!("unexpected layout: {other:?}"),
        }
    }

    // Full focused-array run: 10 emitters over [-wavelength, wavelength]
    // focused on (0, 20), ticked at 30 fps for 5 seconds.
    #[test]
    fn test_focused_scenario_end_to_end() {
        let cfg = ScenarioConfig::default();
        let layout = ArrayLayout::FocusedLine {
            half_span: cfg.wavelength(),
            focus: Point2::new(0.0, 20.0),
        };
        let mut array = layout.build(&cfg).unwrap();

        for emitter in array.emitters() {
            assert_eq!(emitter.ring_count(), 7); // ceil(100 / 15)
        }

        let dt = 1.0 / 30.0;
        let wavelength = cfg.wavelength();
        for _ in 0..150 {
            array.advance(dt);
            let circles: Vec<_> = array.circles().collect();
            assert_eq!(circles.len(), 70, "10 emitters x 7 rings, every tick");
            for (k, ring) in circles.iter().enumerate() {
                if ring.radius == 0.0 {
                    continue; // emitter still inside its start delay
                }
                let lattice = (k % 7) as f64 * wavelength;
                assert!(
                    ring.radius >= lattice && ring.radius < lattice + wavelength,
                    "ring {k} radius {} outside its lattice cell",
                    ring.radius
                );
            }
        }
        // After 5 simulated seconds at least one period has elapsed beyond
        // every start delay, so every emitter is visibly emitting.
        for emitter in array.emitters() {
            assert!(emitter.visible_ring_count() >= 1);
        }
    }
}

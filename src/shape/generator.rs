//! Amplitude envelope to point cloud synthesis.

use std::f64::consts::PI;

use tracing::{debug, warn};

use super::{Point3D, ShapeType};
use crate::error::{Result, SculptureError};
use crate::params::{SynthesisOptions, Viewport};

/// Per-sample inputs every archetype formula reads
struct Sample {
    index: usize,
    amplitude: f64,
    /// index / sample count
    progress: f64,
    /// progress mapped onto one full turn
    angle: f64,
    /// amplitude / 100
    normalized: f64,
    /// base size before archetype scaling
    size: f64,
}

/// Synthesize a point cloud, degrading to an empty cloud on invalid input
///
/// Output has exactly one point per amplitude, in input order. Amplitudes are
/// nominally 0-100 but are used as-is; nothing is clamped.
///
/// # Arguments
/// * `amplitudes` - Amplitude envelope (one value per analysis window)
/// * `shape` - Archetype selecting the formula
/// * `viewport` - Surface the cloud is centered on
/// * `options` - Size range and wave radius multiplier
pub fn synthesize(
    amplitudes: &[f64],
    shape: ShapeType,
    viewport: Viewport,
    options: &SynthesisOptions,
) -> Vec<Point3D> {
    match try_synthesize(amplitudes, shape, viewport, options) {
        Ok(points) => points,
        Err(e) => {
            warn!("{e}, producing an empty point cloud");
            Vec::new()
        }
    }
}

/// Synthesize a point cloud, reporting non-finite amplitudes as `InvalidInput`
pub fn try_synthesize(
    amplitudes: &[f64],
    shape: ShapeType,
    viewport: Viewport,
    options: &SynthesisOptions,
) -> Result<Vec<Point3D>> {
    if let Some(index) = amplitudes.iter().position(|a| !a.is_finite()) {
        return Err(SculptureError::InvalidInput(format!(
            "amplitude at index {index} is not finite"
        )));
    }

    let count = amplitudes.len();
    let center = viewport.center();
    let mut points = Vec::with_capacity(count);

    for (index, &amplitude) in amplitudes.iter().enumerate() {
        let progress = index as f64 / count as f64;
        let sample = Sample {
            index,
            amplitude,
            progress,
            angle: progress * PI * 2.0,
            normalized: amplitude / 100.0,
            size: options.size_for(amplitude),
        };

        points.push(place(shape, &sample, center, viewport, options));
    }

    debug!(shape = %shape, points = points.len(), "synthesized point cloud");
    Ok(points)
}

/// Apply the archetype formula for one sample
fn place(
    shape: ShapeType,
    s: &Sample,
    (cx, cy): (f64, f64),
    viewport: Viewport,
    options: &SynthesisOptions,
) -> Point3D {
    match shape {
        ShapeType::Spiral => {
            // Radius grows along the clip, three turns in total
            let radius = 30.0 + s.progress * 120.0;
            let angle = s.angle * 3.0;
            Point3D {
                x: cx + angle.cos() * radius * s.normalized,
                y: cy + angle.sin() * radius * s.normalized,
                z: s.amplitude,
                size: s.size,
            }
        }

        ShapeType::Flower => {
            let petals = 8.0;
            let radius = 80.0 + (s.angle * petals).sin() * 40.0;
            Point3D {
                x: cx + s.angle.cos() * radius * s.normalized,
                y: cy + s.angle.sin() * radius * s.normalized,
                z: s.amplitude,
                size: s.size,
            }
        }

        ShapeType::Mountain => {
            // Horizontal sweep, no angular component
            let width = viewport.width * 0.8;
            let height = s.amplitude * 3.0;
            Point3D {
                x: cx - width / 2.0 + s.progress * width,
                y: cy + 100.0 - height,
                z: s.amplitude,
                size: f64::max(3.0, s.size / 2.0),
            }
        }

        ShapeType::Galaxy => {
            let arms = 3.0;
            let radius = 40.0 + s.progress * 100.0;
            let angle = s.angle * arms + s.progress * PI * 4.0;
            let noise = (s.angle * 10.0).sin() * 20.0;
            Point3D {
                x: cx + angle.cos() * (radius + noise) * s.normalized,
                y: cy + angle.sin() * (radius + noise) * s.normalized,
                z: s.amplitude + (s.angle * 5.0).sin() * 30.0,
                size: s.size * (0.5 + s.normalized),
            }
        }

        ShapeType::Crystal => {
            // Angle snapped to one of six facets
            let faces = 6.0;
            let radius = 60.0 + s.amplitude * 1.2;
            let angle = (s.angle * faces / (PI * 2.0)).floor() * (PI * 2.0 / faces);
            let height = s.amplitude * 2.0;
            Point3D {
                x: cx + angle.cos() * radius,
                y: cy + angle.sin() * radius - height / 2.0,
                z: s.amplitude + height,
                size: s.size * 1.5,
            }
        }

        ShapeType::Dna => {
            // Even samples on one strand, odd samples mirrored onto the other
            let span = viewport.height * 0.6;
            let y = cy - span / 2.0 + s.progress * span;
            let radius = 40.0 + s.amplitude * 0.8;
            let strand = if s.index % 2 == 0 { 1.0 } else { -1.0 };
            let angle = s.progress * PI * 8.0;
            Point3D {
                x: cx + angle.cos() * radius * strand,
                y,
                z: s.amplitude + angle.sin() * 20.0,
                size: s.size * 0.8,
            }
        }

        ShapeType::Mandala => {
            let layers = 5.0;
            let layer = (s.progress * layers).floor();
            let radius = 20.0 + layer * 25.0 + s.amplitude * 0.5;
            let segments = 8 + layer as usize * 4;
            let angle = (s.index % segments) as f64 * (PI * 2.0 / segments as f64);
            Point3D {
                x: cx + angle.cos() * radius,
                y: cy + angle.sin() * radius,
                z: s.amplitude + layer * 10.0,
                size: s.size * (1.0 + layer * 0.2),
            }
        }

        ShapeType::Tornado => {
            // Funnel narrows toward the end of the clip
            let span = viewport.height * 0.7;
            let y = cy - span / 2.0 + s.progress * span;
            let radius = 20.0 + (1.0 - s.progress) * 80.0 + s.amplitude * 0.5;
            let angle = s.angle * 5.0 + s.progress * PI * 10.0;
            Point3D {
                x: cx + angle.cos() * radius,
                y,
                z: s.amplitude + angle.sin() * 15.0,
                size: s.size * (1.0 + (1.0 - s.progress)),
            }
        }

        ShapeType::Wave | ShapeType::ThreeD => {
            let radius = 60.0 + s.amplitude * options.radius_multiplier;
            Point3D {
                x: cx + s.angle.cos() * radius,
                y: cy + s.angle.sin() * radius,
                z: s.amplitude,
                size: s.size,
            }
        }
    }
}

//! Geometry synthesis parameters.

/// Point sizing and radius scaling applied by the synthesizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisOptions {
    /// Point size at amplitude 0 (viewport units)
    pub min_size: f64,

    /// Point size at amplitude 100 (viewport units)
    /// Amplitudes above 100 extrapolate past this value; nothing is clamped.
    pub max_size: f64,

    /// Wave archetype radius growth per amplitude unit
    /// Formula: radius = 60 + amplitude * this_multiplier
    pub radius_multiplier: f64,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            min_size: 2.0,
            max_size: 20.0,
            radius_multiplier: 1.5,
        }
    }
}

impl SynthesisOptions {
    /// Base point size for a raw amplitude (0-100 nominal)
    pub fn size_for(&self, amplitude: f64) -> f64 {
        self.min_size + (amplitude / 100.0) * (self.max_size - self.min_size)
    }
}

/// Drawing surface the point cloud is laid out on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width (viewport units, usually pixels)
    pub width: f64,

    /// Height (viewport units, usually pixels)
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        // 400x400 is the source space the OBJ and SVG exporters assume
        Self {
            width: 400.0,
            height: 400.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center point every radial archetype orbits
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

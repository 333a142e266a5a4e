//! Export coordinate transforms.
//!
//! These values are part of the file formats existing consumers parse;
//! changing any of them changes the exported bytes.

/// Wavefront OBJ vertex normalization: `(p - origin) / scale`
#[derive(Debug, Clone, Copy)]
pub struct ObjScale {
    /// Planar origin subtracted from x and y (viewport units)
    pub origin: f64,

    /// Divisor bringing viewport units into model units
    pub scale: f64,

    /// Digits after the decimal point
    pub precision: usize,
}

impl Default for ObjScale {
    fn default() -> Self {
        Self {
            origin: 200.0,
            scale: 100.0,
            precision: 4,
        }
    }
}

impl ObjScale {
    /// Map a point into OBJ model space (z is scaled but not offset)
    pub fn apply(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        (
            (x - self.origin) / self.scale,
            (y - self.origin) / self.scale,
            z / self.scale,
        )
    }
}

/// ASCII STL vertex scaling: `p / scale`, no origin offset
#[derive(Debug, Clone, Copy)]
pub struct StlScale {
    /// Divisor bringing viewport units into model units
    pub scale: f64,

    /// Digits after the decimal point (normals and vertices)
    pub precision: usize,
}

impl Default for StlScale {
    fn default() -> Self {
        Self {
            scale: 100.0,
            precision: 6,
        }
    }
}

/// SVG canvas and the source space points are rescaled from
#[derive(Debug, Clone, Copy)]
pub struct SvgCanvas {
    /// Canvas width (pixels)
    pub width: f64,

    /// Canvas height (pixels)
    pub height: f64,

    /// Side of the square source space (viewport units)
    /// Formula: cx = x / source_extent * width
    pub source_extent: f64,

    /// Circle radius floor (pixels)
    pub min_radius: f64,

    /// Opacity of a point at z = 0
    /// Formula: opacity = base_opacity + (z / 100) * depth_opacity
    pub base_opacity: f64,

    /// Opacity gained between z = 0 and z = 100
    pub depth_opacity: f64,
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            source_extent: 400.0,
            min_radius: 1.0,
            base_opacity: 0.3,
            depth_opacity: 0.7,
        }
    }
}

impl SvgCanvas {
    /// Rescale a source-space position onto the canvas
    pub fn project(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x / self.source_extent) * self.width,
            (y / self.source_extent) * self.height,
        )
    }

    pub fn radius(&self, size: f64) -> f64 {
        self.min_radius.max(size / 4.0)
    }

    pub fn opacity(&self, z: f64) -> f64 {
        self.base_opacity + (z / 100.0) * self.depth_opacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obj_normalization() {
        let (x, y, z) = ObjScale::default().apply(335.0, 200.0, 50.0);
        assert_eq!(x, 1.35);
        assert_eq!(y, 0.0);
        assert_eq!(z, 0.5);
    }

    #[test]
    fn test_svg_projection() {
        let canvas = SvgCanvas::default();
        assert_eq!(canvas.project(200.0, 200.0), (400.0, 300.0));
        assert_eq!(canvas.radius(2.0), 1.0);
        assert_eq!(canvas.radius(20.0), 5.0);
        assert!((canvas.opacity(100.0) - 1.0).abs() < 1e-12);
        assert!((canvas.opacity(0.0) - 0.3).abs() < 1e-12);
    }
}

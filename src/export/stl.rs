//! ASCII STL encoder.

use std::fmt::{self, Write};

use glam::DVec3;
use tracing::debug;

use super::fixed::to_fixed;
use crate::error::Result;
use crate::params::StlScale;
use crate::sculpture::Sculpture;
use crate::shape::Point3D;

/// Solid name prefix; the shape tag is appended after an underscore
const SOLID_LABEL: &str = "SoundSculpture";

/// Encode a sculpture as an ASCII STL solid
///
/// Facets use the same triple grouping as the OBJ faces. Vertices are scaled
/// by 1/100 without the OBJ origin offset.
pub fn encode_stl(sculpture: &Sculpture) -> Result<String> {
    let mut out = String::new();
    write_body(&mut out, sculpture)?;
    Ok(out)
}

fn write_body(out: &mut impl Write, sculpture: &Sculpture) -> fmt::Result {
    let scale = StlScale::default();
    let solid = format!("{}_{}", SOLID_LABEL, sculpture.shape_type);

    writeln!(out, "solid {solid}")?;

    for (i, tri) in sculpture.points.chunks_exact(3).enumerate() {
        let normal = facet_normal(&tri[0], &tri[1], &tri[2]);
        if normal == DVec3::ZERO {
            debug!(facet = i, "degenerate facet, writing zero normal");
        }

        writeln!(out, "  facet normal {}", vec_fields(normal, scale.precision))?;
        writeln!(out, "    outer loop")?;
        for p in tri {
            let v = DVec3::new(p.x, p.y, p.z) / scale.scale;
            writeln!(out, "      vertex {}", vec_fields(v, scale.precision))?;
        }
        writeln!(out, "    endloop")?;
        writeln!(out, "  endfacet")?;
    }

    writeln!(out, "endsolid {solid}")
}

/// Unit normal of `(p2 - p1) x (p3 - p1)`, or zero for collinear points
///
/// Computed in viewport units; the 1/100 vertex scale does not change direction.
pub fn facet_normal(p1: &Point3D, p2: &Point3D, p3: &Point3D) -> DVec3 {
    let a = DVec3::new(p1.x, p1.y, p1.z);
    let b = DVec3::new(p2.x, p2.y, p2.z);
    let c = DVec3::new(p3.x, p3.y, p3.z);

    let normal = (b - a).cross(c - a);
    let length = normal.length();
    if length > 0.0 {
        normal / length
    } else {
        normal
    }
}

fn vec_fields(v: DVec3, precision: usize) -> String {
    format!(
        "{} {} {}",
        to_fixed(v.x, precision),
        to_fixed(v.y, precision),
        to_fixed(v.z, precision)
    )
}

//! Wavefront OBJ encoder.

use std::fmt::{self, Write};

use super::fixed::to_fixed;
use crate::error::Result;
use crate::params::ObjScale;
use crate::sculpture::Sculpture;

/// Encode a sculpture as a Wavefront OBJ document
///
/// Faces are disjoint triangles over consecutive triples starting at every
/// index divisible by 3; up to two trailing points get no face. The result
/// is a silhouette, not a watertight mesh.
pub fn encode_obj(sculpture: &Sculpture) -> Result<String> {
    let mut out = String::new();
    write_body(&mut out, sculpture)?;
    Ok(out)
}

fn write_body(out: &mut impl Write, sculpture: &Sculpture) -> fmt::Result {
    let scale = ObjScale::default();
    let points = &sculpture.points;

    writeln!(out, "# Sound Sculpture - {}", sculpture.shape_type)?;
    writeln!(out, "# Created: {}", sculpture.created_at)?;
    writeln!(out, "# Points: {}", points.len())?;
    writeln!(out)?;

    for point in points {
        let (x, y, z) = scale.apply(point.x, point.y, point.z);
        writeln!(
            out,
            "v {} {} {}",
            to_fixed(x, scale.precision),
            to_fixed(y, scale.precision),
            to_fixed(z, scale.precision)
        )?;
    }

    writeln!(out)?;

    // OBJ indices are 1-based
    for i in (0..points.len()).step_by(3).filter(|i| i + 2 < points.len()) {
        writeln!(out, "f {} {} {}", i + 1, i + 2, i + 3)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::{point, sculpture};
    use crate::shape::ShapeType;

    #[test]
    fn test_three_point_document() {
        let sculpture = sculpture(
            ShapeType::Wave,
            vec![
                point(335.0, 200.0, 50.0, 11.0),
                point(200.0, 335.0, 50.0, 11.0),
                point(65.0, 200.0, 50.0, 11.0),
            ],
        );
        let expected = "# Sound Sculpture - wave\n\
                        # Created: 2024-05-01T12:00:00.000Z\n\
                        # Points: 3\n\
                        \n\
                        v 1.3500 0.0000 0.5000\n\
                        v 0.0000 1.3500 0.5000\n\
                        v -1.3500 0.0000 0.5000\n\
                        \n\
                        f 1 2 3\n";
        assert_eq!(encode_obj(&sculpture).unwrap(), expected);
    }

    #[test]
    fn test_faces_skip_remainder_points() {
        let points = (0..8)
            .map(|i| point(i as f64 * 10.0, 0.0, 0.0, 2.0))
            .collect();
        let obj = encode_obj(&sculpture(ShapeType::Spiral, points)).unwrap();
        let faces: Vec<&str> = obj.lines().filter(|l| l.starts_with("f ")).collect();
        assert_eq!(faces, vec!["f 1 2 3", "f 4 5 6"]);
        assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 8);
    }

    #[test]
    fn test_vertices_round_to_four_digits() {
        let obj = encode_obj(&sculpture(
            ShapeType::Wave,
            vec![point(212.345678, 187.654321, 33.333333, 2.0)],
        ))
        .unwrap();
        assert!(obj.contains("v 0.1235 -0.1235 0.3333\n"));
        assert!(!obj.contains("\nf "));
    }

    #[test]
    fn test_empty_cloud() {
        let obj = encode_obj(&sculpture(ShapeType::Galaxy, vec![])).unwrap();
        assert_eq!(
            obj,
            "# Sound Sculpture - galaxy\n# Created: 2024-05-01T12:00:00.000Z\n# Points: 0\n\n\n"
        );
    }
}

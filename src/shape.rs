//! Shape archetypes and the point cloud they produce.

mod generator;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SculptureError;

// Re-export public functions
pub use generator::{synthesize, try_synthesize};

/// One synthesized sample of the point cloud
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    /// Depth/elevation, derived from amplitude
    pub z: f64,
    /// Visual radius
    pub size: f64,
}

/// Named mapping from (index, amplitude) to a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    #[default]
    Wave,
    Spiral,
    Flower,
    Mountain,
    Galaxy,
    Crystal,
    Dna,
    Mandala,
    Tornado,
    /// Rendered with the wave formula
    #[serde(rename = "3d")]
    ThreeD,
}

impl ShapeType {
    pub const ALL: [ShapeType; 10] = [
        ShapeType::Wave,
        ShapeType::Spiral,
        ShapeType::Flower,
        ShapeType::Mountain,
        ShapeType::Galaxy,
        ShapeType::Crystal,
        ShapeType::Dna,
        ShapeType::Mandala,
        ShapeType::Tornado,
        ShapeType::ThreeD,
    ];

    /// Wire tag used in file headers and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::Wave => "wave",
            ShapeType::Spiral => "spiral",
            ShapeType::Flower => "flower",
            ShapeType::Mountain => "mountain",
            ShapeType::Galaxy => "galaxy",
            ShapeType::Crystal => "crystal",
            ShapeType::Dna => "dna",
            ShapeType::Mandala => "mandala",
            ShapeType::Tornado => "tornado",
            ShapeType::ThreeD => "3d",
        }
    }

    /// Whether point order is drawn as a connecting line in vector exports
    pub fn is_connected(&self) -> bool {
        matches!(
            self,
            ShapeType::Spiral | ShapeType::Dna | ShapeType::Tornado
        )
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeType {
    type Err = SculptureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        ShapeType::ALL
            .into_iter()
            .find(|shape| shape.as_str() == tag)
            .ok_or_else(|| SculptureError::UnknownShape(s.to_string()))
    }
}

/// Display palette sculptures are colored from
pub const SHAPE_COLORS: [&str; 8] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8", "#F7DC6F",
];

/// Deterministic palette pick (callers choose the seed)
pub fn palette_color(seed: u64) -> &'static str {
    SHAPE_COLORS[(seed % SHAPE_COLORS.len() as u64) as usize]
}

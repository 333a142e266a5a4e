//! The sculpture aggregate handed to every exporter.

use chrono::{SecondsFormat, Utc};

use crate::params::{SynthesisOptions, Viewport};
use crate::shape::{self, Point3D, ShapeType};

/// A synthesized point cloud plus the metadata exporters embed
///
/// Created once from an amplitude envelope and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Sculpture {
    pub id: u64,
    pub shape_type: ShapeType,
    /// Display color (hex), embedded in SVG and JSON only
    pub color: String,
    pub points: Vec<Point3D>,
    /// Amplitude envelope the points were synthesized from
    pub audio_data: Vec<f64>,
    /// Clip length (seconds)
    pub duration: f64,
    /// RFC 3339 creation timestamp
    pub created_at: String,
    pub name: Option<String>,
    /// Location of the source recording, owned by the caller
    pub uri: Option<String>,
}

impl Sculpture {
    /// Synthesize a sculpture from an amplitude envelope, stamped with the current time
    pub fn from_audio(
        id: u64,
        audio_data: Vec<f64>,
        shape_type: ShapeType,
        color: impl Into<String>,
        duration: f64,
        viewport: Viewport,
        options: &SynthesisOptions,
    ) -> Self {
        let points = shape::synthesize(&audio_data, shape_type, viewport, options);
        Self {
            id,
            shape_type,
            color: color.into(),
            points,
            audio_data,
            duration,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            name: None,
            uri: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    /// User-facing name, falling back to one derived from the id
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("sound-sculpture-{}", self.id),
        }
    }
}

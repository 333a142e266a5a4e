//! Lossless JSON dump of a sculpture.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sculpture::Sculpture;
use crate::shape::{Point3D, ShapeType};

pub const FORMAT_VERSION: &str = "2.0.0";
pub const FORMAT_NAME: &str = "Sound Sculpture JSON";

/// Export metadata block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub version: String,
    pub exported_at: String,
    pub format: String,
}

/// On-disk JSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SculptureJson {
    pub name: String,
    #[serde(rename = "type")]
    pub shape_type: ShapeType,
    pub points: Vec<Point3D>,
    pub color: String,
    pub duration: f64,
    /// Point count
    pub vertices: usize,
    pub created_at: String,
    pub audio_data: Vec<f64>,
    pub metadata: ExportMetadata,
}

impl SculptureJson {
    pub fn new(sculpture: &Sculpture, exported_at: DateTime<Utc>) -> Self {
        Self {
            name: sculpture.display_name(),
            shape_type: sculpture.shape_type,
            points: sculpture.points.clone(),
            color: sculpture.color.clone(),
            duration: sculpture.duration,
            vertices: sculpture.points.len(),
            created_at: sculpture.created_at.clone(),
            audio_data: sculpture.audio_data.clone(),
            metadata: ExportMetadata {
                version: FORMAT_VERSION.to_string(),
                exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                format: FORMAT_NAME.to_string(),
            },
        }
    }

    /// Rebuild the sculpture; the id is not part of the document
    pub fn into_sculpture(self, id: u64) -> Sculpture {
        Sculpture {
            id,
            shape_type: self.shape_type,
            color: self.color,
            points: self.points,
            audio_data: self.audio_data,
            duration: self.duration,
            created_at: self.created_at,
            name: Some(self.name),
            uri: None,
        }
    }
}

/// Encode a sculpture, stamping the current time as the export time
pub fn encode(sculpture: &Sculpture) -> Result<String> {
    encode_at(sculpture, Utc::now())
}

/// Encode a sculpture with an explicit export time
pub fn encode_at(sculpture: &Sculpture, exported_at: DateTime<Utc>) -> Result<String> {
    let document = SculptureJson::new(sculpture, exported_at);
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Parse a previously exported document
pub fn decode(text: &str) -> Result<SculptureJson> {
    Ok(serde_json::from_str(text)?)
}

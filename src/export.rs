//! Export router and per-format encoders.
//!
//! Every encoder is a pure function from a `Sculpture` to an owned `String`;
//! writing that string somewhere is the caller's business.

mod fixed;
pub mod json;
mod obj;
mod stl;
mod svg;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Result, SculptureError};
use crate::sculpture::Sculpture;

pub use fixed::to_fixed;
pub use obj::encode_obj;
pub use stl::encode_stl;
pub use svg::encode_svg;

/// Target formats the router can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Obj,
    Stl,
    Svg,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Obj,
        ExportFormat::Stl,
        ExportFormat::Svg,
        ExportFormat::Json,
    ];

    /// File extension without the leading dot (doubles as the format tag)
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Obj => "obj",
            ExportFormat::Stl => "stl",
            ExportFormat::Svg => "svg",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Obj | ExportFormat::Stl => "application/octet-stream",
            ExportFormat::Svg => "image/svg+xml",
            ExportFormat::Json => "application/json",
        }
    }

    /// Suggested file name for an exported sculpture
    pub fn file_name(&self, sculpture: &Sculpture) -> String {
        match self {
            ExportFormat::Json => format!("sculpture-{}.json", sculpture.id),
            _ => format!(
                "sculpture-{}-{}.{}",
                sculpture.id,
                sculpture.shape_type,
                self.extension()
            ),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = SculptureError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim().trim_start_matches('.').to_lowercase();
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.extension() == tag)
            .ok_or_else(|| SculptureError::UnsupportedFormat(s.to_string()))
    }
}

/// Encode a sculpture in the requested format
pub fn export(sculpture: &Sculpture, format: ExportFormat) -> Result<String> {
    let text = match format {
        ExportFormat::Obj => encode_obj(sculpture)?,
        ExportFormat::Stl => encode_stl(sculpture)?,
        ExportFormat::Svg => encode_svg(sculpture)?,
        ExportFormat::Json => json::encode(sculpture)?,
    };

    debug!(
        id = sculpture.id,
        format = %format,
        bytes = text.len(),
        "exported sculpture"
    );
    Ok(text)
}

/// Encode a sculpture for a format tag such as `"stl"`
///
/// Unknown tags are reported as `UnsupportedFormat`, never defaulted.
pub fn export_tag(sculpture: &Sculpture, tag: &str) -> Result<String> {
    export(sculpture, tag.parse()?)
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::shape::ShapeType;

    #[test]
    fn test_format_tags() {
        for format in ExportFormat::ALL {
            assert_eq!(format.extension().parse::<ExportFormat>().unwrap(), format);
        }
        assert_eq!(".STL".parse::<ExportFormat>().unwrap(), ExportFormat::Stl);
    }

    #[test]
    fn test_unknown_tag_is_reported() {
        let sculpture = sculpture(ShapeType::Wave, vec![point(1.0, 2.0, 3.0, 4.0)]);
        let err = export_tag(&sculpture, "gif").unwrap_err();
        assert!(matches!(err, SculptureError::UnsupportedFormat(tag) if tag == "gif"));
    }

    #[test]
    fn test_router_dispatches_to_encoders() {
        let sculpture = sculpture(
            ShapeType::Spiral,
            vec![
                point(200.0, 200.0, 10.0, 4.0),
                point(210.0, 190.0, 20.0, 6.0),
                point(220.0, 230.0, 30.0, 8.0),
            ],
        );
        assert_eq!(export_tag(&sculpture, "obj").unwrap(), encode_obj(&sculpture).unwrap());
        assert_eq!(export_tag(&sculpture, "stl").unwrap(), encode_stl(&sculpture).unwrap());
        assert_eq!(export_tag(&sculpture, "svg").unwrap(), encode_svg(&sculpture).unwrap());
        assert!(export_tag(&sculpture, "json").unwrap().contains("\"vertices\": 3"));
    }

    #[test]
    fn test_file_names() {
        let sculpture = sculpture(ShapeType::Dna, vec![]);
        assert_eq!(
            ExportFormat::Stl.file_name(&sculpture),
            "sculpture-1700000000000-dna.stl"
        );
        assert_eq!(
            ExportFormat::Json.file_name(&sculpture),
            "sculpture-1700000000000.json"
        );
        assert_eq!(ExportFormat::Svg.mime_type(), "image/svg+xml");
    }
}

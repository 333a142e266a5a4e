//! Sound sculpture library - amplitude envelopes to 3-D point clouds
//!
//! `shape::synthesize` turns an amplitude envelope into a point cloud and the
//! `export` encoders turn that cloud into OBJ, STL, SVG or JSON text.

pub mod audio;
pub mod error;
pub mod export;
pub mod params;
pub mod sculpture;
pub mod shape;

pub use error::{Result, SculptureError};
pub use export::{export, export_tag, ExportFormat};
pub use sculpture::Sculpture;
pub use shape::{synthesize, Point3D, ShapeType};

//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use sound_sculpture::params::{EnvelopeConfig, SynthesisOptions, Viewport};
use sound_sculpture::shape::{self, ShapeType};
use sound_sculpture::{ExportFormat, Result, SculptureError};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "sound-sculpture")]
#[command(about = "Turn a recorded clip into a 3-D point cloud and export it", long_about = None)]
pub struct Args {
    /// WAV clip to analyze
    #[arg(long, value_name = "FILE", conflicts_with = "amplitudes")]
    pub input: Option<PathBuf>,

    /// Comma-separated amplitude envelope (0-100 per value)
    #[arg(long, value_name = "LIST", value_delimiter = ',', allow_hyphen_values = true)]
    pub amplitudes: Vec<f64>,

    /// Shape archetype: wave, spiral, flower, mountain, galaxy, crystal, dna, mandala, tornado, 3d
    #[arg(long, value_name = "SHAPE", default_value = "wave")]
    pub shape: ShapeType,

    /// Export format: obj, stl, svg, json
    #[arg(long, value_name = "FORMAT", default_value = "obj")]
    pub format: ExportFormat,

    /// Sculpture id (used in file names and the JSON name fallback)
    #[arg(long, default_value_t = 1)]
    pub id: u64,

    /// Display color (hex); defaults to a palette color picked by id
    #[arg(long, value_name = "HEX")]
    pub color: Option<String>,

    /// Sculpture name stored in JSON exports
    #[arg(long)]
    pub name: Option<String>,

    /// Clip duration in seconds when passing --amplitudes
    #[arg(long, value_name = "SECONDS", default_value_t = 0.0)]
    pub duration: f64,

    /// Viewport width the cloud is laid out on
    #[arg(long, value_name = "UNITS", default_value_t = 400.0)]
    pub width: f64,

    /// Viewport height the cloud is laid out on
    #[arg(long, value_name = "UNITS", default_value_t = 400.0)]
    pub height: f64,

    /// Point size at amplitude 0
    #[arg(long, default_value_t = 2.0)]
    pub min_size: f64,

    /// Point size at amplitude 100
    #[arg(long, default_value_t = 20.0)]
    pub max_size: f64,

    /// Wave radius growth per amplitude unit
    #[arg(long, default_value_t = 1.5)]
    pub radius_multiplier: f64,

    /// Envelope analysis window (milliseconds)
    #[arg(long, value_name = "MS", default_value_t = 50)]
    pub window_ms: u32,

    /// Output file (stdout when neither this nor --output-dir is given)
    #[arg(long, short, value_name = "FILE", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Directory to write into, using the standard export file name
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Log filter directive, e.g. "sound_sculpture=debug"
    #[arg(long, value_name = "DIRECTIVE")]
    pub log_level: Option<String>,
}

impl Args {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn synthesis_options(&self) -> SynthesisOptions {
        SynthesisOptions {
            min_size: self.min_size,
            max_size: self.max_size,
            radius_multiplier: self.radius_multiplier,
        }
    }

    pub fn envelope_config(&self) -> EnvelopeConfig {
        EnvelopeConfig {
            window_ms: self.window_ms,
            ..Default::default()
        }
    }

    /// Display color, falling back to the palette
    pub fn color(&self) -> String {
        self.color
            .clone()
            .unwrap_or_else(|| shape::palette_color(self.id).to_string())
    }

    /// Validate viewport and size arguments
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(SculptureError::InvalidInput(format!(
                "viewport must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.input.is_none() && self.amplitudes.is_empty() {
            return Err(SculptureError::InvalidInput(
                "either --input or --amplitudes is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Where the export should go, if not stdout
    pub fn destination(&self, file_name: &str) -> Option<PathBuf> {
        match (&self.output, &self.output_dir) {
            (Some(path), _) => Some(path.clone()),
            (None, Some(dir)) => Some(dir.join(file_name)),
            (None, None) => None,
        }
    }
}

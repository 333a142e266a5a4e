//! Recorded clip analysis.
//!
//! Capturing audio is the caller's job; this module only turns a finished
//! WAV clip into the amplitude envelope the synthesizer consumes.

mod envelope;

pub use envelope::{envelope_from_samples, read_envelope, Envelope};

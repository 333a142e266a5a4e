//! Parameter definitions with units and documented semantics.
//!
//! All magic numbers of the synthesizer, the envelope reader and the
//! exporters are extracted here with:
//! - Units (viewport units, milliseconds, percent of full scale)
//! - Documented ranges and meanings
//! - `Default` impls matching the values existing consumers expect

mod envelope;
mod export;
mod synthesis;

// Re-export all types
pub use envelope::EnvelopeConfig;
pub use export::{ObjScale, StlScale, SvgCanvas};
pub use synthesis::{SynthesisOptions, Viewport};

//! Sound sculpture - export a recorded clip as a 3-D point cloud
//!
//! Reads an amplitude envelope (from a WAV clip or the command line), shapes
//! it with the chosen archetype and writes one export document.

use std::io::Write;
use std::process::ExitCode;

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Args;
use sound_sculpture::audio;
use sound_sculpture::export;
use sound_sculpture::{Result, Sculpture};

const DEFAULT_LOG: &str = "sound_sculpture=info";

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging (stderr, so stdout stays clean for the export)
    let filter = match args.log_level.as_deref() {
        Some(directive) => EnvFilter::try_new(directive),
        None => EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_LOG)),
    }
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    args.validate()?;

    // Amplitude source: WAV clip or explicit list
    let (amplitudes, duration) = match &args.input {
        Some(path) => {
            let envelope = audio::read_envelope(path, &args.envelope_config())?;
            tracing::info!(
                "Analyzed {} ({} windows, {:.2}s)",
                path.display(),
                envelope.amplitudes.len(),
                envelope.duration_secs
            );
            (envelope.amplitudes, envelope.duration_secs)
        }
        None => (args.amplitudes.clone(), args.duration),
    };

    let mut sculpture = Sculpture::from_audio(
        args.id,
        amplitudes,
        args.shape,
        args.color(),
        duration,
        args.viewport(),
        &args.synthesis_options(),
    );
    sculpture.name = args.name.clone();

    let text = export::export(&sculpture, args.format)?;

    match args.destination(&args.format.file_name(&sculpture)) {
        Some(path) => {
            std::fs::write(&path, &text)?;
            tracing::info!(
                "Wrote {} ({} points, {})",
                path.display(),
                sculpture.points.len(),
                args.format.mime_type()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

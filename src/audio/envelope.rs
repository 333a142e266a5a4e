//! RMS amplitude envelope extraction from WAV clips.

use std::path::Path;

use tracing::debug;

use crate::error::{Result, SculptureError};
use crate::params::EnvelopeConfig;

/// Amplitude envelope of one clip
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// One value per analysis window, 0..=max_amplitude
    pub amplitudes: Vec<f64>,

    /// Clip length (seconds)
    pub duration_secs: f64,
}

/// Read a WAV file and compute its amplitude envelope
///
/// Integer and float sample formats are both accepted; channels are mixed
/// down before windowing.
pub fn read_envelope(path: &Path, config: &EnvelopeConfig) -> Result<Envelope> {
    config.validate().map_err(SculptureError::InvalidInput)?;

    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    debug!(
        path = %path.display(),
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        bits_per_sample = spec.bits_per_sample,
        "reading clip"
    );

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<Vec<f32>, hound::Error>>()?,
        hound::SampleFormat::Int => {
            // Full scale for the stored bit depth
            let full_scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / full_scale))
                .collect::<std::result::Result<Vec<f32>, hound::Error>>()?
        }
    };

    envelope_from_samples(&samples, spec.channels, spec.sample_rate, config)
}

/// Compute the envelope of interleaved samples normalized to -1.0..=1.0
///
/// A trailing partial window still yields a value, so every sample is
/// accounted for.
pub fn envelope_from_samples(
    samples: &[f32],
    channels: u16,
    sample_rate_hz: u32,
    config: &EnvelopeConfig,
) -> Result<Envelope> {
    config.validate().map_err(SculptureError::InvalidInput)?;
    if channels == 0 || sample_rate_hz == 0 {
        return Err(SculptureError::InvalidInput(format!(
            "unsupported stream layout: {channels} channels @ {sample_rate_hz}Hz"
        )));
    }

    // Mix interleaved frames down to mono
    let mono: Vec<f64> = samples
        .chunks(channels as usize)
        .map(|frame| frame.iter().map(|&s| s as f64).sum::<f64>() / frame.len() as f64)
        .collect();

    let window = config.frames_per_window(sample_rate_hz).max(1);
    let amplitudes: Vec<f64> = mono
        .chunks(window)
        .map(|w| {
            let rms = (w.iter().map(|s| s * s).sum::<f64>() / w.len() as f64).sqrt();
            (rms * config.max_amplitude).clamp(0.0, config.max_amplitude)
        })
        .collect();

    let duration_secs = mono.len() as f64 / sample_rate_hz as f64;
    debug!(
        windows = amplitudes.len(),
        duration_secs, "computed amplitude envelope"
    );

    Ok(Envelope {
        amplitudes,
        duration_secs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn write_wav(path: &Path, channels: u16, sample_rate: u32, frames: &[i16]) {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for &s in frames {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_window_count_and_duration() {
        let config = EnvelopeConfig::default();
        // 1 second at 1 kHz → 20 windows of 50 frames
        let samples = vec![0.5f32; 1000];
        let envelope = envelope_from_samples(&samples, 1, 1000, &config).unwrap();
        assert_eq!(envelope.amplitudes.len(), 20);
        assert!((envelope.duration_secs - 1.0).abs() < 1e-12);
        assert!(envelope.amplitudes.iter().all(|a| (a - 50.0).abs() < 1e-6));
    }

    #[test]
    fn test_partial_window_is_kept() {
        let samples = vec![0.25f32; 120];
        let envelope =
            envelope_from_samples(&samples, 1, 1000, &EnvelopeConfig::default()).unwrap();
        assert_eq!(envelope.amplitudes.len(), 3);
    }

    #[test]
    fn test_silence_and_clipping_bounds() {
        let config = EnvelopeConfig::default();
        let silence = envelope_from_samples(&[0.0; 100], 1, 1000, &config).unwrap();
        assert!(silence.amplitudes.iter().all(|&a| a == 0.0));

        let loud = envelope_from_samples(&[2.0; 100], 1, 1000, &config).unwrap();
        assert!(loud.amplitudes.iter().all(|&a| a == 100.0));
    }

    #[test]
    fn test_stereo_is_mixed_down() {
        // Opposite channels cancel out
        let samples: Vec<f32> = (0..200).map(|i| if i % 2 == 0 { 0.8 } else { -0.8 }).collect();
        let envelope =
            envelope_from_samples(&samples, 2, 1000, &EnvelopeConfig::default()).unwrap();
        assert_eq!(envelope.amplitudes.len(), 2);
        assert!(envelope.amplitudes.iter().all(|&a| a.abs() < 1e-9));
    }

    #[test]
    fn test_empty_clip() {
        let envelope = envelope_from_samples(&[], 1, 44100, &EnvelopeConfig::default()).unwrap();
        assert!(envelope.amplitudes.is_empty());
        assert_eq!(envelope.duration_secs, 0.0);
    }

    #[test]
    fn test_rejects_zero_channels() {
        let err = envelope_from_samples(&[0.1], 0, 44100, &EnvelopeConfig::default()).unwrap_err();
        assert!(matches!(err, SculptureError::InvalidInput(_)));
    }

    #[test]
    fn test_read_wav_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");

        // Half a second of a full-scale 100 Hz sine at 8 kHz
        let frames: Vec<i16> = (0..4000)
            .map(|i| ((2.0 * PI * 100.0 * i as f32 / 8000.0).sin() * i16::MAX as f32) as i16)
            .collect();
        write_wav(&path, 1, 8000, &frames);

        let envelope = read_envelope(&path, &EnvelopeConfig::default()).unwrap();
        assert_eq!(envelope.amplitudes.len(), 10);
        assert!((envelope.duration_secs - 0.5).abs() < 1e-9);
        // Sine RMS is 1/sqrt(2) of full scale
        for a in &envelope.amplitudes {
            assert!((a - 70.71).abs() < 0.5, "amplitude {a}");
        }
    }

    #[test]
    fn test_missing_file_is_wav_error() {
        let err = read_envelope(Path::new("/nonexistent/clip.wav"), &EnvelopeConfig::default())
            .unwrap_err();
        assert!(matches!(err, SculptureError::Wav(_)));
    }
}

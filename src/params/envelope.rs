//! Amplitude envelope extraction parameters.

/// Configuration for turning a recorded clip into an amplitude array
#[derive(Debug, Clone)]
pub struct EnvelopeConfig {
    /// Analysis window length (milliseconds)
    /// One amplitude value is produced per window.
    pub window_ms: u32,

    /// Amplitude assigned to a full-scale RMS window
    /// Output values are clamped to 0..=max_amplitude.
    pub max_amplitude: f64,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            window_ms: 50, // 20 values per second of audio
            max_amplitude: 100.0,
        }
    }
}

impl EnvelopeConfig {
    /// Number of interleaved frames per analysis window
    pub fn frames_per_window(&self, sample_rate_hz: u32) -> usize {
        (sample_rate_hz as u64 * self.window_ms as u64 / 1000) as usize
    }

    /// Validate configuration (window must be non-empty, etc.)
    pub fn validate(&self) -> Result<(), String> {
        if self.window_ms == 0 {
            return Err("Envelope window must be > 0 ms".to_string());
        }
        if !(self.max_amplitude.is_finite() && self.max_amplitude > 0.0) {
            return Err(format!(
                "Max amplitude must be a positive number, got {}",
                self.max_amplitude
            ));
        }
        Ok(())
    }
}

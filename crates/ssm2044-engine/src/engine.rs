use std::sync::Arc;

use thiserror::Error;

use ssm2044_dsp::ladder::{DriveSettings, LadderFilter, FEEDBACK_DRIVE, INPUT_DRIVE};
use ssm2044_dsp::utils::flush_denormals;

use crate::control::ControlInput;
use crate::params::SharedParams;

/// Held-scalar defaults, matching the hardware-style object this emulates.
pub const DEFAULT_CUTOFF_HZ: f64 = 1_000.0;
pub const DEFAULT_RESONANCE: f64 = 0.5;
pub const DEFAULT_GAIN: f64 = 1.0;

/// The one way configuration can fail: the host handing over a sample rate
/// the filter math cannot work with. Everything else is clamped, not
/// rejected.
#[derive(Debug, Error)]
pub enum PrepareError {
    #[error("sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(f64),
}

/// Block driver for one filter instance.
///
/// Strictly single-threaded on the audio side: one callback thread calls
/// [`process_block`](Ssm2044Engine::process_block) at a time, samples are
/// processed in arrival order (each output feeds the next sample's feedback
/// path), and nothing in the block loop allocates, blocks or logs.
pub struct Ssm2044Engine {
    filter: LadderFilter,
    params: Arc<SharedParams>,
}

impl Ssm2044Engine {
    pub fn new(sample_rate: f64) -> Result<Self, PrepareError> {
        validate_sample_rate(sample_rate)?;
        Ok(Self {
            filter: LadderFilter::new(sample_rate),
            params: Arc::new(SharedParams::default()),
        })
    }

    /// Shared handle for a control thread to adjust character, warmth,
    /// self-oscillation and resonance compensation while audio runs.
    pub fn params(&self) -> Arc<SharedParams> {
        Arc::clone(&self.params)
    }

    pub fn sample_rate(&self) -> f64 {
        self.filter.sample_rate()
    }

    /// Applies a new operating sample rate. Filter state is deliberately
    /// carried over so the stream continues with new coefficients instead of
    /// restarting from silence.
    pub fn prepare(&mut self, sample_rate: f64) -> Result<(), PrepareError> {
        validate_sample_rate(sample_rate)?;
        self.filter.set_sample_rate(sample_rate);
        tracing::debug!(sample_rate, "ssm2044 engine prepared");
        Ok(())
    }

    /// Clears filter state back to silence.
    pub fn reset(&mut self) {
        self.filter.reset();
    }

    /// Filters one block of audio. Each control may be a held scalar or a
    /// per-sample stream; values are clamped to their documented ranges every
    /// sample either way. Processing covers the shortest of the input, the
    /// output and any control stream, and the number of frames written is
    /// returned.
    pub fn process_block(
        &mut self,
        input: &[f64],
        output: &mut [f64],
        cutoff: ControlInput<'_>,
        resonance: ControlInput<'_>,
        gain: ControlInput<'_>,
    ) -> usize {
        flush_denormals();

        let mut frames = input.len().min(output.len());
        for source in [&cutoff, &resonance, &gain] {
            if let Some(len) = source.frames() {
                frames = frames.min(len);
            }
        }

        for frame in 0..frames {
            // Configuration is re-read every sample so control-thread stores
            // take effect mid-block, same as the original audio-rate path.
            let drive = DriveSettings {
                input_drive: INPUT_DRIVE * self.params.character().drive_scale(),
                feedback_drive: FEEDBACK_DRIVE * self.params.warmth(),
                self_oscillation: self.params.self_oscillation(),
                resonance_compensation: self.params.resonance_compensation(),
            };
            output[frame] = self.filter.process_sample(
                input[frame],
                cutoff.at(frame),
                resonance.at(frame),
                gain.at(frame),
                &drive,
            );
        }

        frames
    }
}

fn validate_sample_rate(sample_rate: f64) -> Result<(), PrepareError> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(PrepareError::InvalidSampleRate(sample_rate));
    }
    Ok(())
}

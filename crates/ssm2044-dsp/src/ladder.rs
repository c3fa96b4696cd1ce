use crate::saturator::soft_saturate;
use crate::utils::flush_denormal;

pub const MIN_CUTOFF_HZ: f64 = 20.0;
pub const MAX_CUTOFF_HZ: f64 = 20_000.0;
pub const MAX_RESONANCE: f64 = 4.0;
pub const MAX_GAIN: f64 = 4.0;

/// Resonance-to-feedback scale; resonance above ~3.5 self-oscillates.
pub const RESONANCE_SCALE: f64 = 4.0;

/// Base drive of the input saturation stage, before the character scale.
pub const INPUT_DRIVE: f64 = 1.5;

/// Base drive of the feedback saturation stage, before the warmth scale.
pub const FEEDBACK_DRIVE: f64 = 2.0;

/// Integrator and feedback gains derived from cutoff and resonance.
///
/// Solved fresh every sample so both parameters can move at audio rate.
#[derive(Clone, Copy, Debug)]
pub struct LadderCoeffs {
    /// One-pole integrator gain, pre-warped and held below 1.0 for stability.
    pub g: f64,
    /// Global feedback gain.
    pub k: f64,
}

impl LadderCoeffs {
    #[inline]
    pub fn solve(
        cutoff_hz: f64,
        resonance: f64,
        sample_rate: f64,
        sample_rate_inv: f64,
        compensate: bool,
    ) -> Self {
        // Re-clamp against the current rate; 20 kHz is already below 0.45 sr
        // at common rates but not at low ones.
        let cutoff = cutoff_hz.clamp(MIN_CUTOFF_HZ, sample_rate * 0.45);

        let omega = core::f64::consts::TAU * cutoff;
        let warped = (omega * sample_rate_inv * 0.5).tan();
        let g = (warped / (1.0 + warped)).clamp(0.0, 0.99);

        let mut k = resonance * RESONANCE_SCALE;
        if compensate {
            // Tame the level rise that comes with heavy feedback.
            k *= 1.0 / (1.0 + resonance * 0.3);
        }

        Self { g, k }
    }
}

/// Saturation drives and feedback switches resolved by the caller from its
/// configuration, applied per sample.
#[derive(Clone, Copy, Debug)]
pub struct DriveSettings {
    pub input_drive: f64,
    pub feedback_drive: f64,
    pub self_oscillation: bool,
    pub resonance_compensation: bool,
}

impl Default for DriveSettings {
    fn default() -> Self {
        Self {
            input_drive: INPUT_DRIVE,
            feedback_drive: FEEDBACK_DRIVE * 0.5,
            self_oscillation: true,
            resonance_compensation: true,
        }
    }
}

/// Four cascaded one-pole low-pass sections with a global feedback path,
/// modelled on the SSM2044 filter IC.
///
/// The feedback term is the previous sample's stage-4 output: a deliberate
/// one-sample delay, not an implicit zero-delay solve. Callers depend on the
/// frequency response this topology produces, so it must not be replaced
/// with an iterative ZDF solver.
#[derive(Clone, Copy, Debug)]
pub struct LadderFilter {
    stage1: f64,
    stage2: f64,
    stage3: f64,
    stage4: f64,
    feedback: f64,
    sample_rate: f64,
    sample_rate_inv: f64,
}

impl LadderFilter {
    /// Creates a silent, closed filter. The sample rate must be positive and
    /// finite; the host boundary is responsible for validating it.
    #[inline]
    pub fn new(sample_rate: f64) -> Self {
        Self {
            stage1: 0.0,
            stage2: 0.0,
            stage3: 0.0,
            stage4: 0.0,
            feedback: 0.0,
            sample_rate,
            sample_rate_inv: 1.0 / sample_rate,
        }
    }

    /// Changes the operating sample rate. Filter state is carried over so the
    /// stream continues from its current position with new coefficients.
    #[inline]
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
        self.sample_rate_inv = 1.0 / sample_rate;
    }

    #[inline]
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Returns all accumulators and the feedback sample to the silent closed
    /// state.
    #[inline]
    pub fn reset(&mut self) {
        self.stage1 = 0.0;
        self.stage2 = 0.0;
        self.stage3 = 0.0;
        self.stage4 = 0.0;
        self.feedback = 0.0;
    }

    /// Filters one sample. Control values are clamped to their documented
    /// ranges before use; out-of-range values are never rejected.
    #[inline]
    pub fn process_sample(
        &mut self,
        input: f64,
        cutoff_hz: f64,
        resonance: f64,
        gain: f64,
        drive: &DriveSettings,
    ) -> f64 {
        let cutoff = cutoff_hz.clamp(MIN_CUTOFF_HZ, MAX_CUTOFF_HZ);
        let resonance = resonance.clamp(0.0, MAX_RESONANCE);
        let gain = gain.clamp(0.0, MAX_GAIN);

        let coeffs = LadderCoeffs::solve(
            cutoff,
            resonance,
            self.sample_rate,
            self.sample_rate_inv,
            drive.resonance_compensation,
        );

        let saturated_input = soft_saturate(input * gain, drive.input_drive);
        let saturated_feedback = soft_saturate(self.feedback, drive.feedback_drive);

        // Derate feedback when self-oscillation is off: still resonant, but
        // the loop can no longer run away on its own.
        let k = if drive.self_oscillation {
            coeffs.k
        } else {
            coeffs.k * 0.8
        };
        let driven = saturated_input + k * saturated_feedback;

        // Stages update strictly in order; each sees its predecessor's fresh
        // value within the same sample, which is what makes this a 4-pole,
        // -24 dB/oct rolloff.
        let g = coeffs.g;
        let s1 = self.stage1 + g * (driven - self.stage1);
        let s2 = self.stage2 + g * (s1 - self.stage2);
        let s3 = self.stage3 + g * (s2 - self.stage3);
        let s4 = self.stage4 + g * (s3 - self.stage4);

        self.stage1 = flush_denormal(s1);
        self.stage2 = flush_denormal(s2);
        self.stage3 = flush_denormal(s3);
        self.stage4 = flush_denormal(s4);
        self.feedback = s4;

        flush_denormal(s4)
    }
}

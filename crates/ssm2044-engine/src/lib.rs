//! SSM2044 filter engine
//! =====================
//! Host-facing block driver for the SSM2044 voltage-controlled low-pass
//! filter emulation. The numeric core lives in `ssm2044-dsp`; this crate
//! marshals per-block control sources, conditions parameters every sample and
//! exposes the runtime configuration as lock-free atomics so a control thread
//! can adjust the filter while the audio callback runs.

pub mod control;
pub mod engine;
pub mod params;

pub use control::ControlInput;
pub use engine::{
    PrepareError, Ssm2044Engine, DEFAULT_CUTOFF_HZ, DEFAULT_GAIN, DEFAULT_RESONANCE,
};
pub use params::{Character, SharedParams};

#![deny(unsafe_op_in_unsafe_fn)]

pub mod ladder;
pub mod saturator;
pub mod utils;

pub use ladder::{DriveSettings, LadderCoeffs, LadderFilter};
pub use saturator::soft_saturate;

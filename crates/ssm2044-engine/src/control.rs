/// Per-block source for one control parameter: either a scalar held for the
/// whole block or a per-sample stream for audio-rate modulation. The choice
/// is the caller's; conditioning inside the engine is identical either way.
#[derive(Clone, Copy, Debug)]
pub enum ControlInput<'a> {
    Scalar(f64),
    Stream(&'a [f64]),
}

impl ControlInput<'_> {
    /// Number of frames this source can cover; scalars cover any length.
    #[inline]
    pub fn frames(&self) -> Option<usize> {
        match self {
            ControlInput::Scalar(_) => None,
            ControlInput::Stream(buf) => Some(buf.len()),
        }
    }

    #[inline]
    pub fn at(&self, frame: usize) -> f64 {
        match self {
            ControlInput::Scalar(value) => *value,
            ControlInput::Stream(buf) => buf[frame],
        }
    }
}

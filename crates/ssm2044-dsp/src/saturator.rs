/// Drive-compensated tanh soft clipper.
///
/// Small-signal gain stays near unity while peaks compress toward ±1/drive,
/// so the curve colors the signal without a net level change at low
/// amplitude. A drive of zero (or below) bypasses the curve entirely.
#[inline]
pub fn soft_saturate(sample: f64, drive: f64) -> f64 {
    if drive <= 0.0 {
        return sample;
    }
    (sample * drive).tanh() / drive
}

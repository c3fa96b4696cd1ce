/// Magnitudes below this are flushed to exactly zero before they reach
/// persistent filter state or the output buffer.
pub const DENORMAL_THRESHOLD: f64 = 1e-15;

/// Snaps near-zero values to 0.0 so decay tails never leave denormals in
/// filter state, where they would slow the audio callback on hardware that
/// traps on subnormal arithmetic.
#[inline]
pub fn flush_denormal(value: f64) -> f64 {
    if value.abs() < DENORMAL_THRESHOLD {
        0.0
    } else {
        value
    }
}

/// Enables flush-to-zero / denormals-are-zero in the SSE control register for
/// the calling thread. Call once at the top of the audio callback.
#[inline]
pub fn flush_denormals() {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    #[allow(deprecated)]
    unsafe {
        use core::arch::x86_64::{_mm_getcsr, _mm_setcsr};
        const DAZ_FTZ: u32 = 0x8040;
        let csr = _mm_getcsr();
        _mm_setcsr(csr | DAZ_FTZ);
    }
}

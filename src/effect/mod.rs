pub mod brightness;
pub mod contrast;
pub mod distortion;
pub mod saturation;

/// Saturating float -> u8 cast. Truncates; NaN becomes 0.
#[inline]
pub(crate) fn float_to_u8(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

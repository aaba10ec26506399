use std::str::FromStr;

use super::float_to_u8;
use crate::color::hsv;
use crate::frame::Frame;

/// Luma weights in channel order (B, G, R).
pub const LUMA_WEIGHTS: [f64; 3] = [0.1140, 0.5870, 0.2989];

/// Strategy for scaling color saturation. `scale` is conventionally in
/// [-1, 1]: -1 removes all color, 0 is neutral.
pub trait SaturationTransform {
    fn apply(&self, frame: &mut Frame<'_>, scale: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaturationMode {
    /// Blend each channel away from (or toward) the pixel's luma.
    #[default]
    LumaBlend,
    /// Round-trip through HSV and scale S. Slower.
    Hsv,
}

impl SaturationMode {
    pub const ALL: &[SaturationMode] = &[SaturationMode::LumaBlend, SaturationMode::Hsv];

    pub fn name(self) -> &'static str {
        match self {
            SaturationMode::LumaBlend => "luma",
            SaturationMode::Hsv => "hsv",
        }
    }
}

impl FromStr for SaturationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown saturation mode '{s}' (expected luma or hsv)"))
    }
}

impl SaturationTransform for SaturationMode {
    fn apply(&self, frame: &mut Frame<'_>, scale: f64) {
        match self {
            SaturationMode::LumaBlend => modify_saturation(frame, scale),
            SaturationMode::Hsv => modify_saturation_hsv(frame, scale),
        }
    }
}

#[inline]
pub fn luma(b: f64, g: f64, r: f64) -> f64 {
    LUMA_WEIGHTS[0] * b + LUMA_WEIGHTS[1] * g + LUMA_WEIGHTS[2] * r
}

/// `c' = -luma * scale + c * (1 + scale)` per channel, saturated to u8.
pub fn modify_saturation(frame: &mut Frame<'_>, scale: f64) {
    for pixel in frame.pixels_mut() {
        let b = pixel[0] as f64;
        let g = pixel[1] as f64;
        let r = pixel[2] as f64;
        let gray = luma(b, g, r);

        pixel[0] = float_to_u8(-gray * scale + b * (1.0 + scale));
        pixel[1] = float_to_u8(-gray * scale + g * (1.0 + scale));
        pixel[2] = float_to_u8(-gray * scale + r * (1.0 + scale));
    }
}

/// Scale the HSV saturation of every pixel by `1 + scale`, capped to full
/// saturation.
pub fn modify_saturation_hsv(frame: &mut Frame<'_>, scale: f64) {
    for pixel in frame.pixels_mut() {
        let [h, s, v] = hsv::bgr_to_hsv([pixel[0], pixel[1], pixel[2]]);
        let s = (s * (1.0 + scale)).clamp(0.0, 1.0);
        let s = if s.is_nan() { 0.0 } else { s };
        pixel.copy_from_slice(&hsv::hsv_to_bgr([h, s, v]));
    }
}

use crate::frame::Frame;

/// Exponent range the contrast parameter is scaled by.
pub const MAXIMUM_CONTRAST: f64 = 3.0;

/// 256-entry brightness remapping for one contrast value.
///
/// `table[v] = 255 * (1 - 1 / (1 + (255/v - 1)^(-MAXIMUM_CONTRAST * contrast - 1)))`.
/// Contrast 0 gives the identity curve, positive values steepen it into an
/// S-curve, negative values flatten it toward mid-gray.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneCurve {
    table: [f64; 256],
}

impl ToneCurve {
    pub fn new(contrast: f64) -> Self {
        let exponent = -MAXIMUM_CONTRAST * contrast - 1.0;
        let mut table = [0.0f64; 256];

        // table[0] stays at its limit of 0: 255/0 has no finite value.
        for (v, entry) in table.iter_mut().enumerate().skip(1) {
            let level = v as f64;
            let odds = (255.0 / level - 1.0).powf(exponent);
            let mapped = 255.0 * (1.0 - 1.0 / (1.0 + odds));
            *entry = if mapped.is_finite() { mapped } else { level };
        }

        Self { table }
    }

    #[inline]
    pub fn get(&self, level: u8) -> f64 {
        self.table[level as usize]
    }

    pub fn as_slice(&self) -> &[f64; 256] {
        &self.table
    }
}

/// Remap every pixel's brightest channel through a fresh tone curve and scale
/// the other channels by the same factor.
pub fn modify_contrast(frame: &mut Frame<'_>, contrast: f64) {
    let curve = ToneCurve::new(contrast);
    apply_tone_curve(frame, &curve);
}

/// Apply a prebuilt curve. Black pixels stay black.
///
/// Results are rounded to nearest and clamped to [0, 255]; the curve already
/// keeps `factor * channel <= table[max]`, the clamp only absorbs rounding.
pub fn apply_tone_curve(frame: &mut Frame<'_>, curve: &ToneCurve) {
    for pixel in frame.pixels_mut() {
        let peak = pixel[0].max(pixel[1]).max(pixel[2]);
        if peak == 0 {
            continue;
        }

        let factor = curve.get(peak) / peak as f64;
        for c in pixel.iter_mut() {
            *c = (factor * *c as f64).round().clamp(0.0, 255.0) as u8;
        }
    }
}

/// Per-frame effect parameters.
///
/// Values are not range-checked: every transform is total over its numeric
/// domain and saturates at the 8-bit cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Signed delta added to every channel.
    pub brightness: i16,
    /// Tone-curve steepness, scaled by [`MAXIMUM_CONTRAST`](crate::effect::contrast::MAXIMUM_CONTRAST). 0 = neutral.
    pub contrast: f64,
    /// Saturation scale, conventionally -1.0 (gray) to 1.0. 0 = neutral.
    pub saturation: f64,
    /// Noise displacement amount in pixels. 0 = no-op.
    pub distortion: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            brightness: 0,
            contrast: 0.0,
            saturation: 0.0,
            distortion: 0.0,
        }
    }
}

impl Parameters {
    /// True when every stage would leave the frame unchanged.
    pub fn is_neutral(&self) -> bool {
        self.brightness == 0
            && self.contrast == 0.0
            && self.saturation == 0.0
            && self.distortion == 0.0
    }
}

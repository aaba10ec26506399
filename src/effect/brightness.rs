use std::str::FromStr;

use crate::frame::Frame;

/// Strategy for shifting every channel by a signed amount.
pub trait BrightnessTransform {
    fn apply(&self, frame: &mut Frame<'_>, change: i16);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrightnessMode {
    /// Interleaved single pass, `clamp(c + change)`.
    #[default]
    Additive,
    /// Split into channel planes, saturating add/sub, merge.
    Planar,
}

impl BrightnessMode {
    pub const ALL: &[BrightnessMode] = &[BrightnessMode::Additive, BrightnessMode::Planar];

    pub fn name(self) -> &'static str {
        match self {
            BrightnessMode::Additive => "additive",
            BrightnessMode::Planar => "planar",
        }
    }
}

impl FromStr for BrightnessMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown brightness mode '{s}' (expected additive or planar)"))
    }
}

impl BrightnessTransform for BrightnessMode {
    fn apply(&self, frame: &mut Frame<'_>, change: i16) {
        match self {
            BrightnessMode::Additive => modify_brightness(frame, change),
            BrightnessMode::Planar => {
                let amount = change.unsigned_abs().min(255) as u8;
                modify_brightness_planar(frame, amount, change > 0);
            }
        }
    }
}

/// Add `change` to every channel, saturating at 0 and 255.
pub fn modify_brightness(frame: &mut Frame<'_>, change: i16) {
    let change = change as i32;
    for pixel in frame.pixels_mut() {
        for c in pixel.iter_mut() {
            *c = (*c as i32 + change).clamp(0, 255) as u8;
        }
    }
}

/// Raise (`increase`) or lower every channel by `amount`, one channel plane
/// at a time.
pub fn modify_brightness_planar(frame: &mut Frame<'_>, amount: u8, increase: bool) {
    if amount == 0 {
        return;
    }

    let mut planes = split_planes(frame);
    for plane in planes.iter_mut() {
        for v in plane.iter_mut() {
            *v = if increase {
                v.saturating_add(amount)
            } else {
                v.saturating_sub(amount)
            };
        }
    }
    merge_planes(&planes, frame);
}

/// Deinterleave a BGR frame into three single-channel planes.
pub fn split_planes(frame: &Frame<'_>) -> [Vec<u8>; 3] {
    let n = frame.pixel_count();
    let mut planes = [Vec::with_capacity(n), Vec::with_capacity(n), Vec::with_capacity(n)];
    for pixel in frame.pixels() {
        for (plane, &c) in planes.iter_mut().zip(pixel) {
            plane.push(c);
        }
    }
    planes
}

/// Interleave three planes back into `frame`.
pub fn merge_planes(planes: &[Vec<u8>; 3], frame: &mut Frame<'_>) {
    for (i, pixel) in frame.pixels_mut().enumerate() {
        for (c, plane) in pixel.iter_mut().zip(planes) {
            if let Some(&v) = plane.get(i) {
                *c = v;
            }
        }
    }
}

//! 8-bit BGR <-> HSV conversion.
//!
//! HSV is kept in floating point: hue in degrees [0, 360), saturation and
//! value in [0, 1]. Only the final conversion back quantizes to u8.

/// Convert a `[b, g, r]` pixel to `[h, s, v]`.
pub fn bgr_to_hsv(bgr: [u8; 3]) -> [f64; 3] {
    let b = bgr[0] as f64 / 255.0;
    let g = bgr[1] as f64 / 255.0;
    let r = bgr[2] as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max > 0.0 { delta / max } else { 0.0 };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    [h, s, max]
}

/// Convert `[h, s, v]` back to a `[b, g, r]` pixel, rounding to nearest.
pub fn hsv_to_bgr(hsv: [f64; 3]) -> [u8; 3] {
    let [h, s, v] = hsv;
    let c = v * s;
    let sector = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match sector as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [to_u8(b + m), to_u8(g + m), to_u8(r + m)]
}

#[inline]
fn to_u8(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

//! Noise-driven spatial warp.
//!
//! Every destination pixel `(i, j)` pulls its color from a source pixel
//! displaced by two decorrelated samples of a coherent noise field:
//!
//! ```text
//! w1 = amount     * noise(0.01 i,       0.01 j - 0.5)
//! w2 = 4 * amount * noise(100 + 0.01 i, 0.01 j - 0.5)
//! src = (clamp(i + w1, 0, rows - 1), clamp(j + w2, 0, cols - 1))
//! ```
//!
//! Source positions are clamped first, then truncated to integer indices.
//! Reads come from the untouched frame and writes go to a private scratch
//! buffer, which is committed once every pixel is computed.

use crate::frame::{CHANNELS, Frame};
use crate::noise::{NoiseField, PerlinNoise};

/// Spatial frequency of the displacement field.
pub const DISTORTION_SCALE: f64 = 0.01;
pub const NOISE_ALPHA: f64 = 2.0;
pub const NOISE_BETA: f64 = 2.0;
pub const NOISE_OCTAVES: u32 = 3;
pub const NOISE_SEED: u64 = 100;

/// Offset into an unrelated region of the noise domain for the column sample.
const COLUMN_SAMPLE_OFFSET: f64 = 100.0;
const COLUMN_GAIN: f64 = 4.0;

/// The generator `distort` builds on every call.
pub fn distortion_noise() -> PerlinNoise {
    PerlinNoise::new(NOISE_ALPHA, NOISE_BETA, NOISE_OCTAVES, NOISE_SEED)
}

/// Warp `frame` by `amount` using the fixed distortion noise.
pub fn distort(frame: &mut Frame<'_>, amount: f64) {
    if amount == 0.0 {
        return;
    }
    let noise = distortion_noise();
    distort_with(frame, amount, &noise);
}

/// Row and column displacement for destination pixel `(row, col)`.
#[inline]
pub fn displacement<N: NoiseField + ?Sized>(noise: &N, amount: f64, row: usize, col: usize) -> (f64, f64) {
    let x = DISTORTION_SCALE * row as f64;
    let y = DISTORTION_SCALE * col as f64 - 0.5;
    let w1 = amount * noise.sample(x, y);
    let w2 = COLUMN_GAIN * amount * noise.sample(COLUMN_SAMPLE_OFFSET + x, y);
    (w1, w2)
}

/// Warp `frame` with an arbitrary noise field.
pub fn distort_with<N: NoiseField + ?Sized>(frame: &mut Frame<'_>, amount: f64, noise: &N) {
    let rows = frame.rows();
    let cols = frame.cols();
    if rows == 0 || cols == 0 {
        return;
    }

    let src = frame.as_bytes();
    let mut scratch = vec![0u8; src.len()];

    for i in 0..rows {
        for j in 0..cols {
            let (w1, w2) = displacement(noise, amount, i, j);
            let src_row = source_index(i as f64 + w1, rows);
            let src_col = source_index(j as f64 + w2, cols);

            let dst = (i * cols + j) * CHANNELS;
            let from = (src_row * cols + src_col) * CHANNELS;
            scratch[dst..dst + CHANNELS].copy_from_slice(&src[from..from + CHANNELS]);
        }
    }

    frame.as_bytes_mut().copy_from_slice(&scratch);
}

/// Clamp a fractional position into `[0, len)` and truncate. NaN maps to 0.
#[inline]
fn source_index(pos: f64, len: usize) -> usize {
    pos.clamp(0.0, (len - 1) as f64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::OwnedFrame;

    fn gradient_frame(rows: usize, cols: usize) -> OwnedFrame {
        let data = (0..rows * cols)
            .flat_map(|p| [p as u8, (p * 3) as u8, 255 - p as u8])
            .collect();
        OwnedFrame::from_bytes(data, rows, cols).unwrap()
    }

    #[test]
    fn test_zero_amount_is_identity() {
        let original = gradient_frame(6, 5);
        let mut frame = original.clone();
        distort(&mut frame.as_frame(), 0.0);
        assert_eq!(frame, original);

        // No short-circuit: the full two-pass warp with zero displacement.
        let noise = distortion_noise();
        distort_with(&mut frame.as_frame(), 0.0, &noise);
        assert_eq!(frame, original);
    }

    #[test]
    fn test_extreme_amounts_stay_in_bounds() {
        for amount in [-1e12, -5000.0, -3.5, 0.75, 40.0, 1e12, f64::INFINITY, f64::NAN] {
            let original = gradient_frame(4, 4);
            let mut frame = original.clone();
            distort(&mut frame.as_frame(), amount);
            for r in 0..4 {
                for c in 0..4 {
                    let px = frame.pixel(r, c);
                    let found = (0..4).any(|sr| (0..4).any(|sc| original.pixel(sr, sc) == px));
                    assert!(found, "amount={amount} produced foreign pixel {px:?}");
                }
            }
        }
    }

    #[test]
    fn test_positive_field_pulls_from_far_corner() {
        let original = gradient_frame(4, 4);
        let mut frame = original.clone();
        let uphill = |_: f64, _: f64| 1.0;
        distort_with(&mut frame.as_frame(), 1e9, &uphill);
        let corner = original.pixel(3, 3);
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(frame.pixel(r, c), corner);
            }
        }

        let mut frame = original.clone();
        distort_with(&mut frame.as_frame(), -1e9, &uphill);
        let origin = original.pixel(0, 0);
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(frame.pixel(r, c), origin);
            }
        }
    }

    #[test]
    fn test_reads_only_original_pixels() {
        // Each pixel pulls from one row up. A single in-place pass would
        // smear row 0 down the whole frame; two passes shift by exactly one.
        let original = gradient_frame(5, 3);
        let mut frame = original.clone();
        let shift_up = |x: f64, _: f64| if x >= COLUMN_SAMPLE_OFFSET { 0.0 } else { -1.0 };
        distort_with(&mut frame.as_frame(), 1.0, &shift_up);
        for c in 0..3 {
            assert_eq!(frame.pixel(0, c), original.pixel(0, c));
            for r in 1..5 {
                assert_eq!(frame.pixel(r, c), original.pixel(r - 1, c));
            }
        }
    }

    #[test]
    fn test_fractional_positions_truncate() {
        let original = gradient_frame(3, 3);
        let mut frame = original.clone();
        let field = |x: f64, _: f64| if x >= COLUMN_SAMPLE_OFFSET { 0.0 } else { 0.9 };
        distort_with(&mut frame.as_frame(), 1.0, &field);
        assert_eq!(frame, original);
    }

    #[test]
    fn test_column_displacement_is_four_times_row() {
        let flat = |_: f64, _: f64| 0.5;
        let (w1, w2) = displacement(&flat, 2.0, 7, 9);
        assert_eq!(w1, 1.0);
        assert_eq!(w2, 4.0);
    }

    #[test]
    fn test_deterministic() {
        let mut a = gradient_frame(8, 8);
        let mut b = a.clone();
        distort(&mut a.as_frame(), 300.0);
        distort(&mut b.as_frame(), 300.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_frame() {
        let mut data: Vec<u8> = Vec::new();
        let mut frame = Frame::new(&mut data, 0, 0).unwrap();
        distort(&mut frame, 10.0);
        assert!(frame.is_empty());
    }
}

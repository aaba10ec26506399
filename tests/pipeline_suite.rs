use frame_fx::effect::brightness::{self, BrightnessMode};
use frame_fx::effect::contrast::ToneCurve;
use frame_fx::effect::distortion;
use frame_fx::effect::saturation::{self, SaturationMode};
use frame_fx::noise::{NoiseField, PerlinNoise};
use frame_fx::{Frame, FxError, OwnedFrame, Parameters, Pipeline, apply_all, apply_bytes};

fn checker(rows: usize, cols: usize) -> OwnedFrame {
    let data = (0..rows * cols)
        .flat_map(|p| {
            let (r, c) = (p / cols, p % cols);
            if (r + c) % 2 == 0 {
                [30u8, 90, 200]
            } else {
                [220, 180, 15]
            }
        })
        .collect();
    OwnedFrame::from_bytes(data, rows, cols).unwrap()
}

#[test]
fn mid_gray_brightness_only() {
    let mut data = vec![128u8; 2 * 2 * 3];
    let params = Parameters {
        brightness: 10,
        contrast: 0.0,
        saturation: 0.0,
        distortion: 0.0,
    };
    apply_bytes(&mut data, 2, 2, &params).unwrap();
    assert_eq!(data, vec![138u8; 12]);
}

#[test]
fn blue_pixel_full_desaturation() {
    let mut data = vec![255u8, 0, 0];
    let params = Parameters {
        saturation: -1.0,
        ..Default::default()
    };
    apply_all(&mut Frame::new(&mut data, 1, 1).unwrap(), &params);
    assert_eq!(data, vec![29, 29, 29]);
}

#[test]
fn malformed_buffers_are_rejected_untouched() {
    let params = Parameters {
        brightness: 100,
        distortion: 50.0,
        ..Default::default()
    };
    for (len, rows, cols) in [(11, 2, 2), (13, 2, 2), (0, 1, 1), (3, 0, 1)] {
        let mut data = vec![42u8; len];
        let err = apply_bytes(&mut data, rows, cols, &params).unwrap_err();
        assert!(matches!(err, FxError::MalformedBuffer { .. }), "{err}");
        assert!(data.iter().all(|&b| b == 42));
    }
}

#[test]
fn brightness_sweep_matches_clamp() {
    for change in -255i16..=255 {
        let mut data: Vec<u8> = (0..=255u8).flat_map(|v| [v, 255 - v, v / 3]).collect();
        let expected: Vec<u8> = data
            .iter()
            .map(|&c| (c as i32 + change as i32).clamp(0, 255) as u8)
            .collect();
        brightness::modify_brightness(&mut Frame::new(&mut data, 16, 16).unwrap(), change);
        assert_eq!(data, expected, "change={change}");
    }
}

#[test]
fn tone_curve_has_finite_origin() {
    for contrast in [-2.0, -0.5, 0.0, 0.5, 2.0] {
        let curve = ToneCurve::new(contrast);
        assert!(curve.get(0).is_finite());
    }
    let neutral = ToneCurve::new(0.0);
    for v in [64u8, 128, 192] {
        assert!((neutral.get(v) - v as f64).abs() < 0.5);
    }
}

#[test]
fn neutral_saturation_is_identity() {
    let original = checker(6, 7);
    for mode in SaturationMode::ALL {
        let mut frame = original.clone();
        let mut view = frame.as_frame();
        match mode {
            SaturationMode::LumaBlend => saturation::modify_saturation(&mut view, 0.0),
            SaturationMode::Hsv => saturation::modify_saturation_hsv(&mut view, 0.0),
        }
        assert_eq!(frame, original, "mode={}", mode.name());
    }
}

#[test]
fn zero_distortion_reproduces_frame() {
    let original = checker(9, 11);
    let mut frame = original.clone();
    distortion::distort_with(&mut frame.as_frame(), 0.0, &distortion::distortion_noise());
    assert_eq!(frame, original);
}

#[test]
fn distortion_clamps_for_any_amount() {
    let original = checker(4, 4);
    let palette = [original.pixel(0, 0), original.pixel(0, 1)];
    for amount in [-1e300, -1e6, -64.0, -1.0, 1.0, 64.0, 1e6, 1e300] {
        let mut frame = original.clone();
        distortion::distort(&mut frame.as_frame(), amount);
        for r in 0..4 {
            for c in 0..4 {
                assert!(palette.contains(&frame.pixel(r, c)), "amount={amount}");
            }
        }
    }
}

#[test]
fn large_distortion_moves_pixels() {
    let original = checker(40, 40);
    let mut frame = original.clone();
    distortion::distort(&mut frame.as_frame(), 500.0);
    assert_ne!(frame, original);
}

#[test]
fn noise_generators_agree() {
    let a = PerlinNoise::new(2.0, 2.0, 3, 100);
    let b = PerlinNoise::new(2.0, 2.0, 3, 100);
    for i in 0..20 {
        for j in 0..10 {
            let (x, y) = (i as f64 * 0.173 - 1.0, j as f64 * 0.291 + 100.0);
            assert_eq!(a.sample(x, y), b.sample(x, y));
        }
    }
}

#[test]
fn pipeline_is_deterministic_across_batches() {
    let params = Parameters {
        brightness: -15,
        contrast: 0.6,
        saturation: 0.5,
        distortion: 80.0,
    };
    let pipeline = Pipeline::new()
        .with_brightness(BrightnessMode::Planar)
        .with_saturation(SaturationMode::Hsv);

    let mut first: Vec<OwnedFrame> = (0..4).map(|_| checker(24, 32)).collect();
    let mut second = first.clone();
    pipeline.process_frames(&mut first, &params);
    pipeline.process_frames(&mut second, &params);
    assert_eq!(first, second);
    assert!(first.windows(2).all(|w| w[0] == w[1]));
}

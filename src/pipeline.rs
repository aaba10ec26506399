use rayon::prelude::*;

use crate::effect::brightness::{BrightnessMode, BrightnessTransform};
use crate::effect::contrast::{self, ToneCurve};
use crate::effect::distortion;
use crate::effect::saturation::{SaturationMode, SaturationTransform};
use crate::error::FxResult;
use crate::frame::{Frame, OwnedFrame};
use crate::params::Parameters;

/// Ordered effect chain: brightness, contrast, saturation, distortion.
///
/// Holds no per-frame state, so one `Pipeline` can process many frames
/// concurrently as long as each frame is leased to one call at a time.
pub struct Pipeline {
    brightness: Box<dyn BrightnessTransform + Send + Sync>,
    saturation: Box<dyn SaturationTransform + Send + Sync>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            brightness: Box::new(BrightnessMode::default()),
            saturation: Box::new(SaturationMode::default()),
        }
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brightness(mut self, transform: impl BrightnessTransform + Send + Sync + 'static) -> Self {
        self.brightness = Box::new(transform);
        self
    }

    pub fn with_saturation(mut self, transform: impl SaturationTransform + Send + Sync + 'static) -> Self {
        self.saturation = Box::new(transform);
        self
    }

    /// Run every stage over `frame`, each reading the previous stage's output.
    pub fn apply(&self, frame: &mut Frame<'_>, params: &Parameters) {
        let curve = ToneCurve::new(params.contrast);
        self.apply_with_curve(frame, params, &curve);
    }

    fn apply_with_curve(&self, frame: &mut Frame<'_>, params: &Parameters, curve: &ToneCurve) {
        // Step 1: Brightness
        self.brightness.apply(frame, params.brightness);

        // Step 2: Contrast
        contrast::apply_tone_curve(frame, curve);

        // Step 3: Saturation
        self.saturation.apply(frame, params.saturation);

        // Step 4: Distortion
        distortion::distort(frame, params.distortion);
    }

    /// Process independent frames in parallel, one frame per task.
    ///
    /// The tone curve is built once and shared; everything else is per frame.
    pub fn process_frames(&self, frames: &mut [OwnedFrame], params: &Parameters) {
        let start = web_time::Instant::now();
        let curve = ToneCurve::new(params.contrast);

        frames
            .par_iter_mut()
            .for_each(|owned| self.apply_with_curve(&mut owned.as_frame(), params, &curve));

        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        log::debug!("Processed {} frames in {:.1}ms", frames.len(), elapsed_ms);
    }
}

/// Apply the default pipeline to one frame.
pub fn apply_all(frame: &mut Frame<'_>, params: &Parameters) {
    Pipeline::default().apply(frame, params);
}

/// Validate a raw BGR buffer and apply the default pipeline to it.
///
/// A malformed buffer is rejected before any byte is modified.
pub fn apply_bytes(data: &mut [u8], rows: usize, cols: usize, params: &Parameters) -> FxResult<()> {
    let mut frame = Frame::new(data, rows, cols)?;
    apply_all(&mut frame, params);
    Ok(())
}

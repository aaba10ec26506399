use image::{DynamicImage, GenericImageView, ImageBuffer, Rgb, RgbImage};
use std::path::Path;

use crate::error::{FxError, FxResult};
use crate::frame::OwnedFrame;

pub fn load_image(path: &Path) -> FxResult<DynamicImage> {
    image::open(path).map_err(|e| FxError::Image(format!("Failed to load {}: {e}", path.display())))
}

pub fn save_image(img: &RgbImage, path: &Path) -> FxResult<()> {
    img.save(path)
        .map_err(|e| FxError::Image(format!("Failed to save {}: {e}", path.display())))
}

/// Resize image to fit within `width x height`, preserving aspect ratio.
/// Letterboxes/pillarboxes remaining area with black.
pub fn fit_to_frame(img: &DynamicImage, width: u32, height: u32) -> RgbImage {
    let (iw, ih) = img.dimensions();
    if iw == 0 || ih == 0 {
        return ImageBuffer::from_pixel(width, height, Rgb([0u8, 0, 0]));
    }
    let scale = f64::min(width as f64 / iw as f64, height as f64 / ih as f64);
    let new_w = ((iw as f64 * scale).round() as u32).min(width);
    let new_h = ((ih as f64 * scale).round() as u32).min(height);

    let resized = img.resize_exact(new_w, new_h, image::imageops::FilterType::Lanczos3);
    let resized_rgb = resized.to_rgb8();

    let mut output = ImageBuffer::from_pixel(width, height, Rgb([0u8, 0, 0]));
    let offset_x = (width - new_w) / 2;
    let offset_y = (height - new_h) / 2;
    image::imageops::replace(&mut output, &resized_rgb, offset_x as i64, offset_y as i64);
    output
}

/// Copy an RGB image into a BGR frame.
pub fn to_bgr_frame(img: &RgbImage) -> FxResult<OwnedFrame> {
    let mut data = img.as_raw().clone();
    for pixel in data.chunks_exact_mut(3) {
        pixel.swap(0, 2);
    }
    OwnedFrame::from_bytes(data, img.height() as usize, img.width() as usize)
}

/// Copy a BGR frame back into an RGB image.
pub fn from_bgr_frame(frame: &OwnedFrame) -> FxResult<RgbImage> {
    let mut data = frame.as_bytes().to_vec();
    for pixel in data.chunks_exact_mut(3) {
        pixel.swap(0, 2);
    }
    let width = u32::try_from(frame.cols())
        .map_err(|_| FxError::InvalidDimensions(format!("{} columns exceed u32", frame.cols())))?;
    let height = u32::try_from(frame.rows())
        .map_err(|_| FxError::InvalidDimensions(format!("{} rows exceed u32", frame.rows())))?;
    RgbImage::from_raw(width, height, data)
        .ok_or_else(|| FxError::Image(format!("buffer does not fit a {width}x{height} image")))
}

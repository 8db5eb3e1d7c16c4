//! Luminance-based grayscale conversion.

use crate::image_pipeline::bmp::types::Pixel;
use crate::image_pipeline::gray::transform::PixelTransform;

pub const RED_WEIGHT: f64 = 0.299;
pub const GREEN_WEIGHT: f64 = 0.587;
pub const BLUE_WEIGHT: f64 = 0.114;

/// Weighted luminance of a pixel.
///
/// Rounded half up by adding 0.5 before the truncating cast.
pub fn luminance(pixel: Pixel) -> u8 {
    (pixel.red as f64 * RED_WEIGHT
        + pixel.green as f64 * GREEN_WEIGHT
        + pixel.blue as f64 * BLUE_WEIGHT
        + 0.5) as u8
}

/// Replaces every channel of every pixel with the pixel's luminance.
#[derive(Debug, Clone, Copy, Default)]
pub struct LuminanceTransform;

impl PixelTransform for LuminanceTransform {
    fn transform_row(&self, row: &mut [Pixel]) {
        for pixel in row.iter_mut() {
            *pixel = Pixel::gray(luminance(*pixel));
        }
    }
}

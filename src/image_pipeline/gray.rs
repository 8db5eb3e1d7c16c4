//! Grayscale transforms
//!
//! Row-level pixel transforms applied while a bitmap is streamed through
//! a conversion pipeline.

mod transform;
mod luminance;

pub use transform::PixelTransform;
pub use luminance::{luminance, LuminanceTransform, BLUE_WEIGHT, GREEN_WEIGHT, RED_WEIGHT};

pub mod image_pipeline;
pub mod logger;

use std::path::{Path, PathBuf};

use image_pipeline::{ConversionConfig, GrayscalePipeline};

pub use image_pipeline::{ConversionError, Result};

/// Writes a grayscale copy of the 24-bit bitmap at `path` to `new-<file name>`
/// in the same directory and returns the path written.
pub fn convert<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    GrayscalePipeline::new(ConversionConfig::default()).convert_file(path)
}

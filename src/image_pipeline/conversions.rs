//! Pipeline conversions module
//!
//! This module contains the orchestration logic that turns a 24-bit bitmap
//! into its grayscale copy, plus its configuration and output naming.

mod bmp_to_gray;
mod output_path;
pub mod types;


pub use bmp_to_gray::GrayscalePipeline;
pub use output_path::derive_output_path;
pub use types::{ConversionConfig, ConversionConfigBuilder, OutputNaming, DEFAULT_OUTPUT_PREFIX};

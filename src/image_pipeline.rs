//! Image processing pipeline module
//!
//! This module provides a structured approach to bitmap grayscale conversion,
//! with separate modules for bitmap I/O, pixel transforms, and conversion orchestration.

pub mod bmp;
pub mod gray;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use bmp::{
    BmpHeaders,
    BmpReader,
    BmpWriter,
    FileHeader,
    InfoHeader,
    Pixel,
    PixelLayout,
};

pub use gray::{
    LuminanceTransform,
    PixelTransform,
};

pub use conversions::{
    ConversionConfig,
    ConversionConfigBuilder,
    GrayscalePipeline,
    OutputNaming,
};

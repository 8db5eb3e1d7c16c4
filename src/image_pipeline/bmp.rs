//! Bitmap format module
//!
//! This module provides the on-disk structures of uncompressed 24-bit bitmaps,
//! header validation, and row-at-a-time streaming readers and writers.

mod reader;
mod writer;
pub mod types;

pub use reader::BmpReader;
pub use writer::BmpWriter;
pub use types::{
    BmpHeaders, FileHeader, InfoHeader, Pixel, PixelLayout, padding_for,
    BMP_MAGIC, BYTES_PER_PIXEL, COMPRESSION_NONE, FILE_HEADER_SIZE, HEADERS_SIZE,
    INFO_HEADER_SIZE, SUPPORTED_BIT_COUNT,
};

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to allocate a row buffer of {0} bytes")]
    Allocation(usize),

    #[error("Information missing from file: {0} is truncated")]
    Truncated(String),

    #[error("Not a bitmap file: magic bytes {0:?}")]
    NotABitmap([u8; 2]),

    #[error("Compressed bitmaps are not supported (compression method {0})")]
    CompressedImage(u32),

    #[error("Unsupported bit depth {0}, expected 24")]
    UnsupportedDepth(u16),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(i32, i32),

    #[error("Failed to write output file: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;

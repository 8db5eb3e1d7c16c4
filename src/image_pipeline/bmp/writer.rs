use std::io::{self, Read, Write};

use tracing::trace;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::bmp::types::{BmpHeaders, Pixel};

/// Writes bitmap headers and pixel rows, zero-filling row padding.
pub struct BmpWriter<W: Write> {
    inner: W,
    bytes_written: u64,
}

impl<W: Write> BmpWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, bytes_written: 0 }
    }

    pub fn write_headers(&mut self, headers: &BmpHeaders) -> Result<()> {
        self.write_bytes(&headers.file.to_bytes())?;
        self.write_bytes(&headers.info.to_bytes())
    }

    /// Writes one row of pixels followed by `padding` zero bytes.
    pub fn write_row(&mut self, row: &[Pixel], padding: usize) -> Result<()> {
        self.write_bytes(bytemuck::cast_slice(row))?;

        let zeros = io::copy(&mut io::repeat(0).take(padding as u64), &mut self.inner)
            .map_err(write_error)?;
        self.bytes_written += zeros;

        trace!(pixels = row.len(), padding, "Wrote row");
        Ok(())
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flushes buffered output and hands back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush().map_err(write_error)?;
        Ok(self.inner)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes).map_err(write_error)?;
        self.bytes_written += bytes.len() as u64;
        Ok(())
    }
}

fn write_error(e: io::Error) -> ConversionError {
    ConversionError::Write(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_is_zero_filled() {
        let mut writer = BmpWriter::new(Vec::new());
        writer.write_row(&[Pixel::gray(9)], 1).unwrap();
        writer.write_row(&[Pixel::gray(7)], 1).unwrap();
        assert_eq!(writer.bytes_written(), 8);

        let out = writer.finish().unwrap();
        assert_eq!(out, vec![9, 9, 9, 0, 7, 7, 7, 0]);
    }

    #[test]
    fn test_short_write_is_write_error() {
        let mut buf = [0u8; 20];
        let mut writer = BmpWriter::new(&mut buf[..]);
        let result = writer.write_headers(&BmpHeaders::new_24bit(1, 1));
        assert!(matches!(result, Err(ConversionError::Write(_))));
    }
}

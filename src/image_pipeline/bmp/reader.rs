use std::io::{self, ErrorKind, Read};

use tracing::{debug, trace};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::bmp::types::{
    BmpHeaders, FileHeader, InfoHeader, Pixel, PixelLayout, FILE_HEADER_SIZE, INFO_HEADER_SIZE,
};

/// The row buffer grows by at most this many bytes per read.
const READ_CHUNK: usize = 64 * 1024;

/// Streams a bitmap's headers and then its pixel rows, one row per call.
pub struct BmpReader<R: Read> {
    inner: R,
    row_buf: Vec<u8>,
    rows_read: usize,
}

impl<R: Read> BmpReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            row_buf: Vec::new(),
            rows_read: 0,
        }
    }

    /// Reads the file header followed by the info header.
    ///
    /// The headers are returned as read; they are not validated here.
    pub fn read_headers(&mut self) -> Result<BmpHeaders> {
        let mut file_bytes = [0u8; FILE_HEADER_SIZE];
        read_section(&mut self.inner, &mut file_bytes, || "file header".to_string())?;

        let mut info_bytes = [0u8; INFO_HEADER_SIZE];
        read_section(&mut self.inner, &mut info_bytes, || "info header".to_string())?;

        let headers = BmpHeaders {
            file: FileHeader::from_bytes(&file_bytes),
            info: InfoHeader::from_bytes(&info_bytes),
        };
        debug!(
            width = headers.info.width,
            height = headers.info.height,
            bit_count = headers.info.bit_count,
            compression = headers.info.compression,
            "Read bitmap headers"
        );
        Ok(headers)
    }

    /// Reads the next row of pixels, then skips the row's padding.
    ///
    /// The returned row lives in a buffer reused across calls. The buffer
    /// only grows as pixel bytes actually arrive, so a header claiming a huge
    /// width fails as `Truncated` without allocating the full row up front.
    /// A source that ends inside the padding is tolerated, short pixel data is not.
    pub fn read_row(&mut self, layout: &PixelLayout) -> Result<&mut [Pixel]> {
        let index = self.rows_read;
        self.row_buf.clear();

        while self.row_buf.len() < layout.row_bytes {
            let start = self.row_buf.len();
            let chunk = (layout.row_bytes - start).min(READ_CHUNK);
            self.row_buf
                .try_reserve(chunk)
                .map_err(|_| ConversionError::Allocation(layout.row_bytes))?;
            self.row_buf.resize(start + chunk, 0);
            read_section(&mut self.inner, &mut self.row_buf[start..], || {
                format!("pixel row {index}")
            })?;
        }

        let padding = layout.padding as u64;
        let skipped = io::copy(&mut (&mut self.inner).take(padding), &mut io::sink())?;
        if skipped < padding {
            trace!(row = index, skipped, padding, "Source ended inside row padding");
        }

        self.rows_read += 1;
        Ok(bytemuck::cast_slice_mut(&mut self.row_buf))
    }

    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

}

fn read_section<R: Read>(
    inner: &mut R,
    buf: &mut [u8],
    what: impl FnOnce() -> String,
) -> Result<()> {
    inner.read_exact(buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => ConversionError::Truncated(what()),
        _ => ConversionError::Io(e),
    })
}

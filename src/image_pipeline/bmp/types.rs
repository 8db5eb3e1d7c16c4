//! Bitmap header and pixel types

use bytemuck::{Pod, Zeroable};

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Size of the `BITMAPFILEHEADER` record on disk.
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the `BITMAPINFOHEADER` record on disk.
pub const INFO_HEADER_SIZE: usize = 40;
/// Both headers together; pixel rows start right after them.
pub const HEADERS_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

pub const BMP_MAGIC: [u8; 2] = *b"BM";
pub const SUPPORTED_BIT_COUNT: u16 = 24;
pub const COMPRESSION_NONE: u32 = 0;
pub const BYTES_PER_PIXEL: usize = 3;

/// 72 DPI expressed in pixels per meter.
const DEFAULT_PIXELS_PER_METER: i32 = 2835;

/// The 14-byte file header at the start of every bitmap.
///
/// Only `magic` is inspected; the other fields are carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileHeader {
    pub magic: [u8; 2],
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    pub pixel_data_offset: u32,
}

impl FileHeader {
    pub fn from_bytes(bytes: &[u8; FILE_HEADER_SIZE]) -> Self {
        Self {
            magic: [bytes[0], bytes[1]],
            file_size: u32_le(bytes, 2),
            reserved1: u16_le(bytes, 6),
            reserved2: u16_le(bytes, 8),
            pixel_data_offset: u32_le(bytes, 10),
        }
    }

    pub fn to_bytes(&self) -> [u8; FILE_HEADER_SIZE] {
        let mut out = [0u8; FILE_HEADER_SIZE];
        out[0..2].copy_from_slice(&self.magic);
        out[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        out[6..8].copy_from_slice(&self.reserved1.to_le_bytes());
        out[8..10].copy_from_slice(&self.reserved2.to_le_bytes());
        out[10..14].copy_from_slice(&self.pixel_data_offset.to_le_bytes());
        out
    }
}

/// The 40-byte `BITMAPINFOHEADER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InfoHeader {
    pub header_size: u32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels (positive for bottom-up images)
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    pub fn from_bytes(bytes: &[u8; INFO_HEADER_SIZE]) -> Self {
        Self {
            header_size: u32_le(bytes, 0),
            width: i32_le(bytes, 4),
            height: i32_le(bytes, 8),
            planes: u16_le(bytes, 12),
            bit_count: u16_le(bytes, 14),
            compression: u32_le(bytes, 16),
            image_size: u32_le(bytes, 20),
            x_pixels_per_meter: i32_le(bytes, 24),
            y_pixels_per_meter: i32_le(bytes, 28),
            colors_used: u32_le(bytes, 32),
            colors_important: u32_le(bytes, 36),
        }
    }

    pub fn to_bytes(&self) -> [u8; INFO_HEADER_SIZE] {
        let mut out = [0u8; INFO_HEADER_SIZE];
        out[0..4].copy_from_slice(&self.header_size.to_le_bytes());
        out[4..8].copy_from_slice(&self.width.to_le_bytes());
        out[8..12].copy_from_slice(&self.height.to_le_bytes());
        out[12..14].copy_from_slice(&self.planes.to_le_bytes());
        out[14..16].copy_from_slice(&self.bit_count.to_le_bytes());
        out[16..20].copy_from_slice(&self.compression.to_le_bytes());
        out[20..24].copy_from_slice(&self.image_size.to_le_bytes());
        out[24..28].copy_from_slice(&self.x_pixels_per_meter.to_le_bytes());
        out[28..32].copy_from_slice(&self.y_pixels_per_meter.to_le_bytes());
        out[32..36].copy_from_slice(&self.colors_used.to_le_bytes());
        out[36..40].copy_from_slice(&self.colors_important.to_le_bytes());
        out
    }
}

/// Both headers of a bitmap file, in the order they appear on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BmpHeaders {
    pub file: FileHeader,
    pub info: InfoHeader,
}

impl BmpHeaders {
    /// Builds the headers of an uncompressed, bottom-up 24-bit image.
    ///
    /// Size fields are derived from the dimensions; non-positive dimensions
    /// produce an empty pixel area so callers can build rejectable headers too.
    pub fn new_24bit(width: i32, height: i32) -> Self {
        let row_bytes = width.max(0) as u64 * BYTES_PER_PIXEL as u64;
        let stride = row_bytes + padding_for(row_bytes as usize) as u64;
        let image_size = u32::try_from(stride * height.max(0) as u64).unwrap_or(u32::MAX);

        Self {
            file: FileHeader {
                magic: BMP_MAGIC,
                file_size: image_size.saturating_add(HEADERS_SIZE as u32),
                reserved1: 0,
                reserved2: 0,
                pixel_data_offset: HEADERS_SIZE as u32,
            },
            info: InfoHeader {
                header_size: INFO_HEADER_SIZE as u32,
                width,
                height,
                planes: 1,
                bit_count: SUPPORTED_BIT_COUNT,
                compression: COMPRESSION_NONE,
                image_size,
                x_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
                y_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
                colors_used: 0,
                colors_important: 0,
            },
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADERS_SIZE] {
        let mut out = [0u8; HEADERS_SIZE];
        out[..FILE_HEADER_SIZE].copy_from_slice(&self.file.to_bytes());
        out[FILE_HEADER_SIZE..].copy_from_slice(&self.info.to_bytes());
        out
    }

    /// Checks that the headers describe an image this crate can grayscale.
    ///
    /// Checks run in a fixed order (magic, compression, bit depth, width,
    /// height) and the first failure is returned. On success the pixel
    /// geometry of the image is returned.
    pub fn validate(&self) -> Result<PixelLayout> {
        if self.file.magic != BMP_MAGIC {
            return Err(ConversionError::NotABitmap(self.file.magic));
        }
        if self.info.compression != COMPRESSION_NONE {
            return Err(ConversionError::CompressedImage(self.info.compression));
        }
        if self.info.bit_count != SUPPORTED_BIT_COUNT {
            return Err(ConversionError::UnsupportedDepth(self.info.bit_count));
        }
        if self.info.width <= 0 {
            return Err(self.invalid_dimensions());
        }
        if self.info.height <= 0 {
            return Err(self.invalid_dimensions());
        }

        let width = self.info.width as usize;
        let height = self.info.height as usize;
        PixelLayout::new(width, height).ok_or_else(|| self.invalid_dimensions())
    }

    pub(crate) fn invalid_dimensions(&self) -> ConversionError {
        ConversionError::InvalidDimensions(self.info.width, self.info.height)
    }
}

/// One pixel as stored on disk: blue, green, red, no padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Pixel {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl Pixel {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { blue, green, red }
    }

    pub const fn gray(value: u8) -> Self {
        Self { blue: value, green: value, red: value }
    }

    pub fn is_gray(&self) -> bool {
        self.red == self.green && self.green == self.blue
    }
}

/// Pixel-area geometry of a validated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelLayout {
    pub width: usize,
    pub height: usize,
    /// Bytes of pixel data in one row, excluding padding
    pub row_bytes: usize,
    /// Zero bytes appended to every row to reach a 4-byte boundary
    pub padding: usize,
}

impl PixelLayout {
    /// Returns `None` when a row's byte width does not fit in `usize`.
    pub fn new(width: usize, height: usize) -> Option<Self> {
        let row_bytes = width.checked_mul(BYTES_PER_PIXEL)?;
        Some(Self {
            width,
            height,
            row_bytes,
            padding: padding_for(row_bytes),
        })
    }

    /// Encoded length of one row, padding included.
    pub fn stride(&self) -> usize {
        self.row_bytes + self.padding
    }
}

/// Padding needed after `row_bytes` bytes of pixel data.
pub const fn padding_for(row_bytes: usize) -> usize {
    (4 - row_bytes % 4) % 4
}

fn u16_le(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn u32_le(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

fn i32_le(bytes: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_byte_layout() {
        let headers = BmpHeaders::new_24bit(5, 2);
        let bytes = headers.to_bytes();

        assert_eq!(&bytes[0..2], b"BM");
        // rows are 15 bytes + 1 padding
        assert_eq!(headers.info.image_size, 32);
        assert_eq!(u32_le(&bytes, 2), 54 + 32);
        assert_eq!(u32_le(&bytes, 10), 54);
        assert_eq!(i32_le(&bytes, 14 + 4), 5);
        assert_eq!(i32_le(&bytes, 14 + 8), 2);
        assert_eq!(u16_le(&bytes, 14 + 14), 24);
    }

    #[test]
    fn test_headers_reparse_unchanged() {
        let mut headers = BmpHeaders::new_24bit(3, 7);
        headers.file.reserved1 = 0xBEEF;
        headers.info.colors_important = 42;
        headers.info.y_pixels_per_meter = -1;

        let bytes = headers.to_bytes();
        let file_bytes: [u8; FILE_HEADER_SIZE] = bytes[..FILE_HEADER_SIZE].try_into().unwrap();
        let info_bytes: [u8; INFO_HEADER_SIZE] = bytes[FILE_HEADER_SIZE..].try_into().unwrap();

        assert_eq!(FileHeader::from_bytes(&file_bytes), headers.file);
        assert_eq!(InfoHeader::from_bytes(&info_bytes), headers.info);
    }

    #[test]
    fn test_pixel_is_three_packed_bytes() {
        assert_eq!(std::mem::size_of::<Pixel>(), 3);
        let pixel = Pixel::new(1, 2, 3);
        assert_eq!(bytemuck::bytes_of(&pixel), &[3, 2, 1]);
    }

    #[test]
    fn test_padding_for_each_remainder() {
        assert_eq!(padding_for(12), 0);
        assert_eq!(padding_for(15), 1);
        assert_eq!(padding_for(18), 2);
        assert_eq!(padding_for(9), 3);
    }

    #[test]
    fn test_layout_rejects_overflowing_row_width() {
        assert_eq!(PixelLayout::new(usize::MAX / 2, 1), None);
        assert!(PixelLayout::new(usize::MAX / 3, 1).is_some());
    }

    #[test]
    fn test_validate_returns_layout() {
        let layout = BmpHeaders::new_24bit(6, 4).validate().unwrap();
        assert_eq!(layout, PixelLayout { width: 6, height: 4, row_bytes: 18, padding: 2 });
        assert_eq!(layout.stride(), 20);
    }

    #[test]
    fn test_validation_order_is_short_circuit() {
        // every field is wrong, magic is checked first
        let mut headers = BmpHeaders::new_24bit(0, -1);
        headers.file.magic = *b"OK";
        headers.info.compression = 5;
        headers.info.bit_count = 64;
        assert!(matches!(headers.validate(), Err(ConversionError::NotABitmap([b'O', b'K']))));

        headers.file.magic = BMP_MAGIC;
        assert!(matches!(headers.validate(), Err(ConversionError::CompressedImage(5))));

        headers.info.compression = COMPRESSION_NONE;
        assert!(matches!(headers.validate(), Err(ConversionError::UnsupportedDepth(64))));

        headers.info.bit_count = SUPPORTED_BIT_COUNT;
        assert!(matches!(headers.validate(), Err(ConversionError::InvalidDimensions(0, -1))));

        headers.info.width = 4;
        assert!(matches!(headers.validate(), Err(ConversionError::InvalidDimensions(4, -1))));

        headers.info.height = 2;
        assert!(headers.validate().is_ok());
    }
}

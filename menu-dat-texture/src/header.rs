//! GBIX + PVRT sub-headers that precede the pixel data of every texture.
//!
//! ```text
//! 0x00 "GBIX" | 0x04 size=8:u32 | 0x08 global index:u32 | 0x0C pad:u32
//! 0x10 "PVRT" | 0x14 data size:u32 | 0x18 format:u8 | 0x19 layout:u8 | 0x1A pad:u16
//! 0x1C width:u16 | 0x1E height:u16
//! ```
//!
//! All multi-byte fields are little-endian. The PVRT data size counts the
//! eight format/dimension bytes plus the pixel data that follows.

use crate::error::TextureError;

pub const GBIX_MAGIC: &[u8; 4] = b"GBIX";
pub const PVRT_MAGIC: &[u8; 4] = b"PVRT";

/// Global index written into every GBIX block.
pub const GLOBAL_INDEX: u32 = 1001;

/// PVRT pixel format byte for RGB565.
pub const PIXEL_FORMAT_RGB565: u8 = 0x01;

/// PVRT layout byte for a square twiddled texture.
pub const LAYOUT_SQUARE_TWIDDLED: u8 = 0x01;

/// Combined size of both sub-headers.
pub const HEADER_SIZE: usize = 32;

/// Edge lengths the menu accepts.
pub const SUPPORTED_SIZES: &[u16] = &[128, 256];

/// Parsed texture sub-headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureHeader {
    pub global_index: u32,
    pub data_size: u32,
    pub pixel_format: u8,
    pub layout: u8,
    pub width: u16,
    pub height: u16,
}

/// Read a little-endian u16 from a byte slice.
fn read_u16_le(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

/// Read a little-endian u32 from a byte slice.
fn read_u32_le(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

impl TextureHeader {
    /// Header for a square RGB565 twiddled texture with edge `size`.
    pub fn square(size: u16) -> Self {
        let pixel_bytes = size as u32 * size as u32 * 2;
        Self {
            global_index: GLOBAL_INDEX,
            data_size: pixel_bytes + 8,
            pixel_format: PIXEL_FORMAT_RGB565,
            layout: LAYOUT_SQUARE_TWIDDLED,
            width: size,
            height: size,
        }
    }

    /// Parse both sub-headers from the start of `data`.
    ///
    /// Only the magic numbers and length are checked here; see
    /// [`validate`](Self::validate) for the format/size checks.
    pub fn parse(data: &[u8]) -> Result<Self, TextureError> {
        if data.len() < HEADER_SIZE {
            return Err(TextureError::Truncated {
                expected: HEADER_SIZE,
                actual: data.len(),
            });
        }
        if &data[0x00..0x04] != GBIX_MAGIC {
            return Err(TextureError::invalid_header("missing GBIX magic"));
        }
        if &data[0x10..0x14] != PVRT_MAGIC {
            return Err(TextureError::invalid_header("missing PVRT magic"));
        }

        Ok(Self {
            global_index: read_u32_le(data, 0x08),
            data_size: read_u32_le(data, 0x14),
            pixel_format: data[0x18],
            layout: data[0x19],
            width: read_u16_le(data, 0x1C),
            height: read_u16_le(data, 0x1E),
        })
    }

    /// Check that this header describes a texture the menu can display.
    pub fn validate(&self) -> Result<(), TextureError> {
        if self.pixel_format != PIXEL_FORMAT_RGB565 || self.layout != LAYOUT_SQUARE_TWIDDLED {
            return Err(TextureError::UnsupportedFormat {
                format: self.pixel_format,
                layout: self.layout,
            });
        }
        if self.width != self.height || !SUPPORTED_SIZES.contains(&self.width) {
            return Err(TextureError::UnsupportedDimensions {
                width: self.width as u32,
                height: self.height as u32,
            });
        }
        Ok(())
    }

    /// Number of pixel-data bytes following the header.
    pub fn pixel_bytes(&self) -> usize {
        self.width as usize * self.height as usize * 2
    }

    /// Total payload size: header plus pixel data.
    pub fn payload_size(&self) -> usize {
        HEADER_SIZE + self.pixel_bytes()
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0x00..0x04].copy_from_slice(GBIX_MAGIC);
        out[0x04..0x08].copy_from_slice(&8u32.to_le_bytes());
        out[0x08..0x0C].copy_from_slice(&self.global_index.to_le_bytes());
        out[0x10..0x14].copy_from_slice(PVRT_MAGIC);
        out[0x14..0x18].copy_from_slice(&self.data_size.to_le_bytes());
        out[0x18] = self.pixel_format;
        out[0x19] = self.layout;
        out[0x1C..0x1E].copy_from_slice(&self.width.to_le_bytes());
        out[0x1E..0x20].copy_from_slice(&self.height.to_le_bytes());
        out
    }
}

#[cfg(test)]
#[path = "tests/header_tests.rs"]
mod tests;

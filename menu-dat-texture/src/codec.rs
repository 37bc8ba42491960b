use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

use crate::error::TextureError;
use crate::header::{HEADER_SIZE, SUPPORTED_SIZES, TextureHeader};
use crate::{rgb565, twiddle};

/// A decoded texture in row-major BGRA order (4 bytes per pixel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTexture {
    pub width: u16,
    pub height: u16,
    pub bgra: Vec<u8>,
}

impl DecodedTexture {
    /// Convert to an `image` buffer (RGBA order).
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width as u32, self.height as u32);
        for (dst, src) in img.pixels_mut().zip(self.bgra.chunks_exact(4)) {
            dst.0 = [src[2], src[1], src[0], src[3]];
        }
        img
    }
}

/// Encode an image as a twiddled RGB565 texture of `width`x`height`.
///
/// The source is resized to exactly the target size, ignoring its aspect
/// ratio. A source that already has the target size is used as-is, so
/// re-encoding a decoded texture reproduces the original bytes. Alpha is
/// dropped.
///
/// Returns `32 + width * height * 2` bytes.
pub fn encode(image: &DynamicImage, width: u32, height: u32) -> Result<Vec<u8>, TextureError> {
    let size = supported_size(width, height)?;

    let rgba = image.to_rgba8();
    let rgba = if rgba.dimensions() == (width, height) {
        rgba
    } else {
        imageops::resize(&rgba, width, height, FilterType::Lanczos3)
    };

    let linear: Vec<u16> = rgba
        .pixels()
        .map(|p| rgb565::pack(p[0], p[1], p[2]))
        .collect();
    let tiled = twiddle::twiddle(&linear, size as u32);

    let header = TextureHeader::square(size);
    let mut out = Vec::with_capacity(header.payload_size());
    out.extend_from_slice(&header.to_bytes());
    for value in tiled {
        out.extend_from_slice(&value.to_le_bytes());
    }
    Ok(out)
}

/// Decode a texture payload, reporting why it was rejected.
pub fn try_decode(data: &[u8]) -> Result<DecodedTexture, TextureError> {
    let header = TextureHeader::parse(data)?;
    header.validate()?;

    let needed = header.payload_size();
    if data.len() < needed {
        return Err(TextureError::Truncated {
            expected: needed,
            actual: data.len(),
        });
    }

    let tiled: Vec<u16> = data[HEADER_SIZE..needed]
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();
    let linear = twiddle::untwiddle(&tiled, header.width as u32);

    let mut bgra = Vec::with_capacity(linear.len() * 4);
    for value in linear {
        let [r, g, b] = rgb565::unpack(value);
        bgra.extend_from_slice(&[b, g, r, 0xFF]);
    }

    Ok(DecodedTexture {
        width: header.width,
        height: header.height,
        bgra,
    })
}

/// Decode a texture payload.
///
/// Malformed artwork is an expected condition, so any structural mismatch
/// yields `None` instead of an error.
pub fn decode(data: &[u8]) -> Option<DecodedTexture> {
    try_decode(data).ok()
}

/// Produce a 128x128 icon payload from a 256x256 artwork payload.
///
/// Returns `None` unless `artwork` decodes to exactly 256x256.
pub fn downscale_256_to_128(artwork: &[u8]) -> Option<Vec<u8>> {
    let decoded = decode(artwork)?;
    if decoded.width != 256 || decoded.height != 256 {
        return None;
    }
    let image = DynamicImage::ImageRgba8(decoded.to_rgba_image());
    encode(&image, 128, 128).ok()
}

/// Open an image file and encode it as a square texture of edge `size`.
pub fn encode_image_file(path: &Path, size: u32) -> Result<Vec<u8>, TextureError> {
    let image = image::open(path)?;
    encode(&image, size, size)
}

/// Decode a texture payload and write it as an image file (format chosen
/// from the extension, usually PNG).
pub fn save_image(data: &[u8], path: &Path) -> Result<(), TextureError> {
    let decoded = try_decode(data)?;
    decoded.to_rgba_image().save(path)?;
    Ok(())
}

fn supported_size(width: u32, height: u32) -> Result<u16, TextureError> {
    SUPPORTED_SIZES
        .iter()
        .copied()
        .find(|&s| width == height && width == s as u32)
        .ok_or(TextureError::UnsupportedDimensions { width, height })
}

#[cfg(test)]
#[path = "tests/codec_tests.rs"]
mod tests;

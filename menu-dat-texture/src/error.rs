/// Errors that can occur while encoding or decoding menu textures.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid texture header: {0}")]
    InvalidHeader(String),

    #[error("Unsupported pixel format 0x{format:02X} with layout 0x{layout:02X}")]
    UnsupportedFormat { format: u8, layout: u8 },

    #[error("Unsupported texture size {width}x{height} (expected 128x128 or 256x256)")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("Texture data truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
}

impl TextureError {
    pub fn invalid_header(msg: impl Into<String>) -> Self {
        Self::InvalidHeader(msg.into())
    }
}

//! Texture codec for boot-menu artwork.
//!
//! Converts ordinary images to and from the GPU-native format stored in the
//! artwork and icon containers: a GBIX/PVRT header followed by RGB565 pixels
//! in twiddled (Z-order) layout.

pub mod codec;
pub mod error;
pub mod header;
pub mod rgb565;
pub mod twiddle;

pub use codec::{
    DecodedTexture, decode, downscale_256_to_128, encode, encode_image_file, save_image,
    try_decode,
};
pub use error::TextureError;
pub use header::TextureHeader;

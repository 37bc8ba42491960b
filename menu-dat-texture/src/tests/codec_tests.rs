use image::{DynamicImage, Rgba, RgbaImage};

use super::*;
use crate::header::TextureHeader;

/// A 256x256 image where every pixel differs, with a fully transparent corner.
fn gradient(size: u32) -> DynamicImage {
    let img = RgbaImage::from_fn(size, size, |x, y| {
        let alpha = if x < 4 && y < 4 { 0 } else { 255 };
        Rgba([x as u8, y as u8, (x ^ y) as u8, alpha])
    });
    DynamicImage::ImageRgba8(img)
}

fn pixel_at(payload: &[u8], index: usize) -> u16 {
    let off = HEADER_SIZE + index * 2;
    u16::from_le_bytes([payload[off], payload[off + 1]])
}

#[test]
fn encode_256_size_and_header() {
    let payload = encode(&gradient(256), 256, 256).unwrap();
    assert_eq!(payload.len(), 131_104);
    let header = TextureHeader::parse(&payload).unwrap();
    assert_eq!(header, TextureHeader::square(256));
}

#[test]
fn encode_128_size() {
    let payload = encode(&gradient(256), 128, 128).unwrap();
    assert_eq!(payload.len(), 32_800);
    assert_eq!(TextureHeader::parse(&payload).unwrap().width, 128);
}

#[test]
fn encode_rejects_unsupported_sizes() {
    assert!(matches!(
        encode(&gradient(64), 64, 64),
        Err(TextureError::UnsupportedDimensions { width: 64, height: 64 })
    ));
    assert!(encode(&gradient(256), 256, 128).is_err());
}

#[test]
fn encode_places_pixels_in_twiddled_order() {
    let mut img = RgbaImage::from_pixel(128, 128, Rgba([0, 0, 0, 255]));
    img.put_pixel(1, 0, Rgba([255, 0, 0, 255]));
    img.put_pixel(0, 1, Rgba([0, 255, 0, 255]));
    img.put_pixel(2, 0, Rgba([0, 0, 255, 255]));
    let payload = encode(&DynamicImage::ImageRgba8(img), 128, 128).unwrap();

    assert_eq!(pixel_at(&payload, 0), 0x0000);
    assert_eq!(pixel_at(&payload, 1), 0xF800);
    assert_eq!(pixel_at(&payload, 2), 0x07E0);
    assert_eq!(pixel_at(&payload, 3), 0x0000);
    assert_eq!(pixel_at(&payload, 4), 0x001F);
}

#[test]
fn encode_ignores_aspect_ratio() {
    let wide = DynamicImage::ImageRgba8(RgbaImage::from_pixel(300, 100, Rgba([255, 255, 255, 255])));
    let payload = encode(&wide, 256, 256).unwrap();
    assert_eq!(payload.len(), 131_104);
    let decoded = decode(&payload).unwrap();
    assert_eq!((decoded.width, decoded.height), (256, 256));
}

#[test]
fn encode_is_deterministic() {
    let img = gradient(256);
    assert_eq!(encode(&img, 256, 256).unwrap(), encode(&img, 256, 256).unwrap());
}

#[test]
fn decode_expands_to_opaque_bgra() {
    let mut img = RgbaImage::from_pixel(128, 128, Rgba([0, 0, 0, 0]));
    img.put_pixel(0, 0, Rgba([255, 0, 0, 0]));
    img.put_pixel(3, 2, Rgba([0x84, 0x82, 0x84, 255]));
    let payload = encode(&DynamicImage::ImageRgba8(img), 128, 128).unwrap();

    let decoded = decode(&payload).unwrap();
    assert_eq!((decoded.width, decoded.height), (128, 128));
    assert_eq!(decoded.bgra.len(), 128 * 128 * 4);
    assert_eq!(&decoded.bgra[0..4], &[0, 0, 255, 255]);
    let off = (2 * 128 + 3) * 4;
    assert_eq!(&decoded.bgra[off..off + 4], &[0x84, 0x82, 0x84, 255]);
    assert!(decoded.bgra.chunks_exact(4).all(|p| p[3] == 255));
}

#[test]
fn to_rgba_image_swaps_channels() {
    let decoded = DecodedTexture {
        width: 1,
        height: 1,
        bgra: vec![1, 2, 3, 255],
    };
    assert_eq!(decoded.to_rgba_image().get_pixel(0, 0), &Rgba([3, 2, 1, 255]));
}

#[test]
fn reencoding_decoded_pixels_is_stable() {
    let first = encode(&gradient(256), 256, 256).unwrap();
    let decoded = decode(&first).unwrap();
    let second = encode(&DynamicImage::ImageRgba8(decoded.to_rgba_image()), 256, 256).unwrap();
    assert_eq!(first, second);

    let decoded_again = decode(&second).unwrap();
    assert_eq!(decoded, decoded_again);
}

#[test]
fn decode_rejects_structural_mismatches() {
    let good = encode(&gradient(256), 128, 128).unwrap();

    let mut bad_magic = good.clone();
    bad_magic[0..4].copy_from_slice(b"XBIX");
    assert!(decode(&bad_magic).is_none());

    let mut bad_format = good.clone();
    bad_format[0x18] = 0x03;
    assert!(decode(&bad_format).is_none());

    let mut bad_layout = good.clone();
    bad_layout[0x19] = 0x03;
    assert!(decode(&bad_layout).is_none());

    let mut bad_size = good.clone();
    bad_size[0x1C..0x1E].copy_from_slice(&64u16.to_le_bytes());
    bad_size[0x1E..0x20].copy_from_slice(&64u16.to_le_bytes());
    assert!(decode(&bad_size).is_none());

    assert!(decode(&good[..good.len() - 1]).is_none());
    assert!(decode(&[]).is_none());
}

#[test]
fn try_decode_reports_truncation() {
    let good = encode(&gradient(256), 128, 128).unwrap();
    assert!(matches!(
        try_decode(&good[..1000]),
        Err(TextureError::Truncated { expected: 32_800, actual: 1000 })
    ));
}

#[test]
fn decode_accepts_trailing_bytes() {
    let mut payload = encode(&gradient(256), 128, 128).unwrap();
    payload.extend_from_slice(&[0xAA; 16]);
    assert!(decode(&payload).is_some());
}

#[test]
fn downscale_produces_icon_payload() {
    let artwork = encode(&gradient(256), 256, 256).unwrap();
    let icon = downscale_256_to_128(&artwork).unwrap();
    assert_eq!(icon.len(), 32_800);
    let header = TextureHeader::parse(&icon).unwrap();
    assert_eq!((header.width, header.height), (128, 128));
}

#[test]
fn downscale_of_flat_color_keeps_color() {
    let flat = DynamicImage::ImageRgba8(RgbaImage::from_pixel(256, 256, Rgba([0xF8, 0xFC, 0xF8, 255])));
    let icon = downscale_256_to_128(&encode(&flat, 256, 256).unwrap()).unwrap();
    assert!((0..128 * 128).all(|i| pixel_at(&icon, i) == 0xFFFF));
}

#[test]
fn downscale_rejects_non_256_input() {
    let icon = encode(&gradient(256), 128, 128).unwrap();
    assert!(downscale_256_to_128(&icon).is_none());
    assert!(downscale_256_to_128(b"not a texture").is_none());
}

#[test]
fn image_file_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();
    let src = dir.path().join("cover.png");
    RgbaImage::from_pixel(200, 280, Rgba([10, 200, 30, 255]))
        .save(&src)
        .unwrap();

    let payload = encode_image_file(&src, 256).unwrap();
    assert_eq!(payload.len(), 131_104);

    let out = dir.path().join("export.png");
    save_image(&payload, &out).unwrap();
    let exported = image::open(&out).unwrap();
    assert_eq!((exported.width(), exported.height()), (256, 256));
}

#[test]
fn save_image_rejects_garbage() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("bad.png");
    assert!(save_image(&[0u8; 64], &out).is_err());
    assert!(!out.exists());
}

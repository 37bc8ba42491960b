//! Z-order ("twiddled") pixel layout.
//!
//! The menu's GPU stores square textures with the bits of each pixel's x and
//! y coordinates interleaved: x occupies the even bits of the linear index
//! and y the odd bits. A 2x2 block is stored as (0,0) (1,0) (0,1) (1,1), and
//! the pattern repeats recursively for every power-of-two block size.

/// Spread the low 16 bits of `v` so that a zero sits between each bit.
///
/// `0b1011` → `0b0100_0101`.
pub const fn interleave_bits(v: u32) -> u32 {
    let mut x = v & 0x0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333;
    x = (x | (x << 1)) & 0x5555_5555;
    x
}

/// Inverse of [`interleave_bits`]: gather the even bits of `v`.
pub const fn compact_bits(v: u32) -> u32 {
    let mut x = v & 0x5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333;
    x = (x | (x >> 2)) & 0x0F0F_0F0F;
    x = (x | (x >> 4)) & 0x00FF_00FF;
    x = (x | (x >> 8)) & 0x0000_FFFF;
    x
}

/// Linear index of pixel `(x, y)` in twiddled order.
pub const fn twiddle_index(x: u32, y: u32) -> u32 {
    interleave_bits(x) | (interleave_bits(y) << 1)
}

/// Pixel coordinate stored at twiddled index `index`.
pub const fn untwiddle_index(index: u32) -> (u32, u32) {
    (compact_bits(index), compact_bits(index >> 1))
}

/// Reorder a row-major `size`x`size` pixel grid into twiddled order.
///
/// # Panics
///
/// Panics if `size` is not a power of two or `pixels.len() != size * size`.
pub fn twiddle<T: Copy + Default>(pixels: &[T], size: u32) -> Vec<T> {
    check_grid(pixels.len(), size);
    let mut out = vec![T::default(); pixels.len()];
    for y in 0..size {
        for x in 0..size {
            out[twiddle_index(x, y) as usize] = pixels[(y * size + x) as usize];
        }
    }
    out
}

/// Reorder a twiddled `size`x`size` pixel grid back into row-major order.
///
/// # Panics
///
/// Panics if `size` is not a power of two or `tiled.len() != size * size`.
pub fn untwiddle<T: Copy + Default>(tiled: &[T], size: u32) -> Vec<T> {
    check_grid(tiled.len(), size);
    let mut out = vec![T::default(); tiled.len()];
    for y in 0..size {
        for x in 0..size {
            out[(y * size + x) as usize] = tiled[twiddle_index(x, y) as usize];
        }
    }
    out
}

fn check_grid(len: usize, size: u32) {
    assert!(
        size.is_power_of_two() && size <= 0x1_0000,
        "twiddled textures must be square with a power-of-two edge, got {size}"
    );
    assert_eq!(
        len,
        (size as usize) * (size as usize),
        "pixel count does not match a {size}x{size} grid"
    );
}

#[cfg(test)]
#[path = "tests/twiddle_tests.rs"]
mod tests;

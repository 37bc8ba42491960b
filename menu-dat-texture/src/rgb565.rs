//! 16-bit RGB565 color packing (`R:5 G:6 B:5`, red in the high bits).

/// Pack an 8-bit-per-channel color, truncating the low bits of each channel.
pub const fn pack(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// Expand an RGB565 value to 8 bits per channel.
///
/// The top bits of each channel are replicated into the low bits, so pure
/// white stays `0xFF` and [`pack`] of the result gives back `value`.
pub const fn unpack(value: u16) -> [u8; 3] {
    let mut r = ((value >> 8) & 0xF8) as u8;
    r |= r >> 5;
    let mut g = ((value >> 3) & 0xFC) as u8;
    g |= g >> 6;
    let mut b = ((value << 3) & 0xF8) as u8;
    b |= b >> 5;
    [r, g, b]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_primaries() {
        assert_eq!(pack(0xFF, 0, 0), 0xF800);
        assert_eq!(pack(0, 0xFF, 0), 0x07E0);
        assert_eq!(pack(0, 0, 0xFF), 0x001F);
        assert_eq!(pack(0xFF, 0xFF, 0xFF), 0xFFFF);
        assert_eq!(pack(0, 0, 0), 0x0000);
    }

    #[test]
    fn pack_truncates_low_bits() {
        assert_eq!(pack(0x07, 0x03, 0x07), 0);
        assert_eq!(pack(0x08, 0x04, 0x08), 0x0821);
    }

    #[test]
    fn unpack_replicates_high_bits() {
        assert_eq!(unpack(0xFFFF), [0xFF, 0xFF, 0xFF]);
        assert_eq!(unpack(0x0000), [0, 0, 0]);
        assert_eq!(unpack(0xF800), [0xFF, 0, 0]);
        assert_eq!(unpack(0x0821), [0x08, 0x04, 0x08]);
        assert_eq!(unpack(0x8410), [0x84, 0x82, 0x84]);
    }

    #[test]
    fn unpack_then_pack_is_identity() {
        for value in 0..=u16::MAX {
            let [r, g, b] = unpack(value);
            assert_eq!(pack(r, g, b), value);
        }
    }
}

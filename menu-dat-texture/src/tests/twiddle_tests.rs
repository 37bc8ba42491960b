use super::*;

#[test]
fn interleave_mask_constants() {
    assert_eq!(interleave_bits(0), 0);
    assert_eq!(interleave_bits(1), 0b1);
    assert_eq!(interleave_bits(0b10), 0b100);
    assert_eq!(interleave_bits(0b1011), 0b0100_0101);
    assert_eq!(interleave_bits(0xFF), 0x5555);
    assert_eq!(interleave_bits(0xFFFF), 0x5555_5555);
}

#[test]
fn interleave_ignores_high_bits() {
    assert_eq!(interleave_bits(0x1_0001), 1);
}

#[test]
fn compact_inverts_interleave() {
    for v in 0..1024 {
        assert_eq!(compact_bits(interleave_bits(v)), v);
    }
}

#[test]
fn first_block_order() {
    assert_eq!(twiddle_index(0, 0), 0);
    assert_eq!(twiddle_index(1, 0), 1);
    assert_eq!(twiddle_index(0, 1), 2);
    assert_eq!(twiddle_index(1, 1), 3);
    assert_eq!(twiddle_index(2, 0), 4);
    assert_eq!(twiddle_index(0, 2), 8);
    assert_eq!(twiddle_index(255, 255), 0xFFFF);
}

#[test]
fn index_is_a_bijection_on_256_grid() {
    let mut seen = vec![false; 256 * 256];
    for y in 0..256 {
        for x in 0..256 {
            let i = twiddle_index(x, y) as usize;
            assert!(!seen[i], "index {i} hit twice");
            seen[i] = true;
            assert_eq!(untwiddle_index(i as u32), (x, y));
        }
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn untwiddle_inverts_twiddle() {
    for size in [8u32, 128, 256] {
        let pixels: Vec<u32> = (0..size * size).collect();
        let tiled = twiddle(&pixels, size);
        assert_ne!(tiled, pixels, "size {size} should reorder");
        assert_eq!(untwiddle(&tiled, size), pixels);
    }
}

#[test]
fn twiddle_of_2x2() {
    // Row-major [a b / c d] is stored a b c d: x in the low bit, y in the next.
    assert_eq!(twiddle(&[10, 11, 20, 21], 2), vec![10, 11, 20, 21]);
    // 4x4: the second stored quad is the top-right 2x2 block.
    let grid: Vec<u8> = (0..16).collect();
    let tiled = twiddle(&grid, 4);
    assert_eq!(&tiled[..8], &[0, 1, 4, 5, 2, 3, 6, 7]);
}

#[test]
#[should_panic]
fn twiddle_rejects_mismatched_length() {
    twiddle(&[0u16; 10], 4);
}

#[test]
#[should_panic]
fn twiddle_rejects_non_power_of_two() {
    twiddle(&[0u16; 9], 3);
}

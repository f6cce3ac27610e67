// Byte-width and threshold arithmetic for rejection sampling

/// Smallest number of bytes (1-4) whose 32-bit value can hold `n`,
/// checked from the most significant byte downward.
pub(crate) fn minimal_byte_width(n: i32) -> usize {
    if n >> 24 != 0 {
        4
    } else if n >> 16 != 0 {
        3
    } else if n >> 8 != 0 {
        2
    } else {
        1
    }
}

/// Number of usable bits in a draw of `width` bytes. The top bit of the
/// most significant byte is always cleared.
pub(crate) fn usable_bits(width: usize) -> u32 {
    (8 * width - 1) as u32
}

/// Byte count to draw for a positive bound.
///
/// Starts at [`minimal_byte_width`] and widens by one byte when `max` is
/// larger than the usable span of that width (129..=255, 40000, ...), since a
/// draw of that width could never reach `max`. Every `max <= i32::MAX` fits
/// in 4 bytes.
pub(crate) fn draw_width(max: i32) -> usize {
    debug_assert!(max > 0);
    let width = minimal_byte_width(max);
    if (max as u32) > (1u32 << usable_bits(width)) {
        width + 1
    } else {
        width
    }
}

/// Largest draw accepted for `max` at the given width.
///
/// The accepted range `[0, ceiling]` holds `span - span % max` values, an
/// exact multiple of `max`, so reducing an accepted draw is unbiased.
pub(crate) fn rejection_ceiling(max: i32, width: usize) -> i32 {
    debug_assert!(max > 0);
    let span = 1u32 << usable_bits(width);
    let max = max as u32;
    debug_assert!(max <= span);
    (span - 1 - span % max) as i32
}

/// Little-endian assembly of up to four bytes with the sign bit of the
/// most significant byte cleared.
pub(crate) fn assemble_le(bytes: &[u8]) -> i32 {
    debug_assert!((1..=4).contains(&bytes.len()));
    let mut result = 0u32;
    for (index, &byte) in bytes.iter().enumerate() {
        result |= u32::from(byte) << (8 * index);
    }
    result &= !(1u32 << usable_bits(bytes.len()));
    result as i32
}

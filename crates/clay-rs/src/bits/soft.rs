//! Portable bit-counting routines that do not rely on CPU intrinsics.
//!
//! Values narrower than 64 bits are passed zero-extended together with their
//! nominal `width`. The results match [`BitOps`](super::BitOps) for every
//! input, which the tests check exhaustively for the narrow widths.

const M1: u64 = 0x5555_5555_5555_5555;
const M2: u64 = 0x3333_3333_3333_3333;
const M4: u64 = 0x0F0F_0F0F_0F0F_0F0F;
const H01: u64 = 0x0101_0101_0101_0101;

const DE_BRUIJN_32: u32 = 0x07C4_ACDD;
const LOG2_DE_BRUIJN: [u8; 32] = [
    0, 9, 1, 10, 13, 21, 2, 29, 11, 14, 16, 18, 22, 25, 3, 30, 8, 12, 20, 28, 15, 17, 24, 7, 19,
    27, 23, 6, 26, 5, 4, 31,
];

/// `pop_count` counts set bits with a SWAR reduction.
#[inline]
#[must_use]
pub const fn pop_count(value: u64) -> u32 {
    let mut x = value - ((value >> 1) & M1);
    x = (x & M2) + ((x >> 2) & M2);
    x = (x + (x >> 4)) & M4;
    (x.wrapping_mul(H01) >> 56) as u32
}

/// `leading_zeros` counts zero bits above the highest set bit within
/// `width` bits.
///
/// # Arguments
/// * `value` - The zero-extended operand.
/// * `width` - The nominal width of the operand, at most 64.
#[inline]
#[must_use]
pub const fn leading_zeros(value: u64, width: u32) -> u32 {
    let smeared = smear(value);
    width - pop_count(smeared)
}

/// `trailing_zeros` counts zero bits below the lowest set bit, or `width`
/// when `value` is zero.
#[inline]
#[must_use]
pub const fn trailing_zeros(value: u64, width: u32) -> u32 {
    // ones exactly below the lowest set bit; all ones when value == 0
    let below = !value & value.wrapping_sub(1);
    let count = pop_count(below);
    if count > width { width } else { count }
}

/// `leading_count` mirrors [`BitOps::leading_count`](super::BitOps::leading_count).
#[inline]
#[must_use]
pub const fn leading_count(value: u64, width: u32, on: bool) -> u32 {
    leading_zeros(flip(value, width, on), width)
}

/// `trailing_count` mirrors [`BitOps::trailing_count`](super::BitOps::trailing_count).
#[inline]
#[must_use]
pub const fn trailing_count(value: u64, width: u32, on: bool) -> u32 {
    trailing_zeros(flip(value, width, on), width)
}

/// `floor_log2` returns the index of the highest set bit using a De Bruijn
/// lookup. `value` must be non-zero; zero yields `0`.
#[inline]
#[must_use]
pub const fn floor_log2(value: u64) -> u32 {
    let hi = (value >> 32) as u32;
    if hi != 0 {
        32 + floor_log2_u32(hi)
    } else {
        floor_log2_u32(value as u32)
    }
}

#[inline]
const fn floor_log2_u32(value: u32) -> u32 {
    let v = smear(value as u64) as u32;
    LOG2_DE_BRUIJN[(v.wrapping_mul(DE_BRUIJN_32) >> 27) as usize] as u32
}

/// smear copies the highest set bit into every lower position.
#[inline]
const fn smear(mut x: u64) -> u64 {
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x |= x >> 32;
    x
}

#[inline]
const fn flip(value: u64, width: u32, on: bool) -> u64 {
    if on { value ^ mask(width) } else { value }
}

#[inline]
const fn mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

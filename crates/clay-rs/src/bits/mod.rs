//! Branch-minimal bit primitives over fixed-width integers.
//!
//! Offsets count from the least significant bit. An offset at or past the
//! nominal width of the type is not an error: reads report `false` and
//! writes leave the value untouched.

mod log2;
pub mod soft;


pub use log2::FloorLog2;

/// BitOps exposes single-bit access, rotation and bit counting for an
/// integer of a fixed nominal width.
pub trait BitOps: Copy {
    /// WIDTH is the nominal number of bits in the type.
    const WIDTH: u32;

    /// `extract_bit` reports whether the bit at `offset` is set.
    ///
    /// # Arguments
    /// * `offset` - The bit position, `0` being the least significant bit.
    fn extract_bit(self, offset: u32) -> bool;

    /// `insert_bit` sets or clears the bit at `offset` and returns its
    /// previous value.
    ///
    /// # Arguments
    /// * `offset` - The bit position, `0` being the least significant bit.
    /// * `on` - Whether the bit should be set.
    fn insert_bit(&mut self, offset: u32, on: bool) -> bool;

    /// `clear_bit` clears the bit at `offset` and returns its previous value.
    fn clear_bit(&mut self, offset: u32) -> bool {
        self.insert_bit(offset, false)
    }

    /// `complement_bit` toggles the bit at `offset` and returns its previous
    /// value.
    fn complement_bit(&mut self, offset: u32) -> bool;

    /// `rotate_bits_left` rotates by `count` modulo `WIDTH`. Negative counts
    /// rotate right.
    #[must_use]
    fn rotate_bits_left(self, count: i32) -> Self;

    /// `rotate_bits_right` rotates by `count` modulo `WIDTH`. Negative counts
    /// rotate left.
    #[must_use]
    fn rotate_bits_right(self, count: i32) -> Self;

    /// `pop_count` returns the number of set bits.
    fn pop_count(self) -> u32;

    /// `leading_count` returns the number of consecutive bits equal to `on`,
    /// starting at the most significant bit.
    fn leading_count(self, on: bool) -> u32;

    /// `trailing_count` returns the number of consecutive bits equal to `on`,
    /// starting at the least significant bit.
    fn trailing_count(self, on: bool) -> u32;
}

macro_rules! bit_ops_impl {
    ($t:ty) => {
        impl BitOps for $t {
            const WIDTH: u32 = <$t>::BITS;

            #[inline]
            fn extract_bit(self, offset: u32) -> bool {
                self.checked_shr(offset).is_some_and(|v| v & 1 == 1)
            }

            #[inline]
            fn insert_bit(&mut self, offset: u32, on: bool) -> bool {
                let Some(mask) = (1 as $t).checked_shl(offset) else {
                    return false;
                };
                let prev = *self & mask != 0;
                // all ones when `on`, all zeros otherwise
                let fill = <$t>::from(on).wrapping_neg();
                *self = (*self & !mask) | (fill & mask);
                prev
            }

            #[inline]
            fn complement_bit(&mut self, offset: u32) -> bool {
                let Some(mask) = (1 as $t).checked_shl(offset) else {
                    return false;
                };
                let prev = *self & mask != 0;
                *self ^= mask;
                prev
            }

            #[inline]
            fn rotate_bits_left(self, count: i32) -> Self {
                self.rotate_left(rotation(count, Self::WIDTH))
            }

            #[inline]
            fn rotate_bits_right(self, count: i32) -> Self {
                self.rotate_right(rotation(count, Self::WIDTH))
            }

            #[inline]
            fn pop_count(self) -> u32 {
                self.count_ones()
            }

            #[inline]
            fn leading_count(self, on: bool) -> u32 {
                (self ^ <$t>::from(on).wrapping_neg()).leading_zeros()
            }

            #[inline]
            fn trailing_count(self, on: bool) -> u32 {
                (self ^ <$t>::from(on).wrapping_neg()).trailing_zeros()
            }
        }
    };
}

bit_ops_impl!(u8);
bit_ops_impl!(u16);
bit_ops_impl!(u32);
bit_ops_impl!(u64);
bit_ops_impl!(usize);

// Signed integers share the bit pattern of their unsigned counterpart.
macro_rules! bit_ops_signed_impl {
    ($t:ty, $u:ty) => {
        impl BitOps for $t {
            const WIDTH: u32 = <$t>::BITS;

            #[inline]
            fn extract_bit(self, offset: u32) -> bool {
                (self as $u).extract_bit(offset)
            }

            #[inline]
            fn insert_bit(&mut self, offset: u32, on: bool) -> bool {
                let mut bits = *self as $u;
                let prev = bits.insert_bit(offset, on);
                *self = bits as $t;
                prev
            }

            #[inline]
            fn complement_bit(&mut self, offset: u32) -> bool {
                let mut bits = *self as $u;
                let prev = bits.complement_bit(offset);
                *self = bits as $t;
                prev
            }

            #[inline]
            fn rotate_bits_left(self, count: i32) -> Self {
                (self as $u).rotate_bits_left(count) as $t
            }

            #[inline]
            fn rotate_bits_right(self, count: i32) -> Self {
                (self as $u).rotate_bits_right(count) as $t
            }

            #[inline]
            fn pop_count(self) -> u32 {
                (self as $u).pop_count()
            }

            #[inline]
            fn leading_count(self, on: bool) -> u32 {
                (self as $u).leading_count(on)
            }

            #[inline]
            fn trailing_count(self, on: bool) -> u32 {
                (self as $u).trailing_count(on)
            }
        }
    };
}

bit_ops_signed_impl!(i8, u8);
bit_ops_signed_impl!(i16, u16);
bit_ops_signed_impl!(i32, u32);
bit_ops_signed_impl!(i64, u64);
bit_ops_signed_impl!(isize, usize);

#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
const fn rotation(count: i32, width: u32) -> u32 {
    count.rem_euclid(width as i32) as u32
}

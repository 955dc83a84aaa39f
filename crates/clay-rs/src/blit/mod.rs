//! Byte-backed unions exposing the same bits as signed, unsigned, byte and
//! half-width views.
//!
//! Storage is always little-endian: byte `0` is the least significant byte
//! on every host, so [`Blit::bytes`] is portable.


/// Blit8 views one byte as `u8`/`i8`.
pub type Blit8 = Blit<1>;
/// Blit16 views two bytes as `u16`/`i16` or two [`Blit8`] halves.
pub type Blit16 = Blit<2>;
/// Blit32 views four bytes as `u32`/`i32` or two [`Blit16`] halves.
pub type Blit32 = Blit<4>;
/// Blit64 views eight bytes as `u64`/`i64` or two [`Blit32`] halves.
pub type Blit64 = Blit<8>;

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
/// Blit stores `N` little-endian bytes. Every typed view reads and writes
/// this one array, so a write through any view is seen by all of them.
pub struct Blit<const N: usize>(pub [u8; N]);

impl<const N: usize> Blit<N> {
    #[inline]
    #[must_use]
    /// `zero` returns a union with every bit cleared.
    pub const fn zero() -> Self {
        Self([0u8; N])
    }

    #[inline]
    #[must_use]
    /// `from_bytes` wraps little-endian bytes.
    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    #[inline]
    #[must_use]
    /// `bytes` returns a copy of the little-endian byte sequence.
    pub const fn bytes(&self) -> [u8; N] {
        self.0
    }

    #[inline]
    #[must_use]
    /// `as_bytes` returns a shared reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    #[inline]
    /// `as_bytes_mut` returns a mutable reference to the underlying byte array.
    pub const fn as_bytes_mut(&mut self) -> &mut [u8; N] {
        &mut self.0
    }

    #[inline]
    #[must_use]
    /// `byte` returns the byte at index `i`, `0` being least significant.
    ///
    /// # Panics
    /// Panics if `i >= N`.
    pub const fn byte(&self, i: usize) -> u8 {
        self.0[i]
    }

    #[inline]
    /// `set_byte` overwrites the byte at index `i`.
    ///
    /// # Panics
    /// Panics if `i >= N`.
    pub const fn set_byte(&mut self, i: usize, val: u8) {
        self.0[i] = val;
    }
}

impl<const N: usize> Default for Blit<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> From<[u8; N]> for Blit<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

macro_rules! blit_views {
    ($n:literal, $u:ty, $i:ty) => {
        impl Blit<$n> {
            #[inline]
            #[must_use]
            /// `from_unsigned` stores `val` as little-endian bytes.
            pub const fn from_unsigned(val: $u) -> Self {
                Self(val.to_le_bytes())
            }

            #[inline]
            #[must_use]
            /// `from_signed` stores the two's complement bytes of `val`.
            pub const fn from_signed(val: $i) -> Self {
                Self(val.to_le_bytes())
            }

            #[inline]
            #[must_use]
            /// `unsigned` reads the bytes as an unsigned integer.
            pub const fn unsigned(&self) -> $u {
                <$u>::from_le_bytes(self.0)
            }

            #[inline]
            /// `set_unsigned` overwrites every byte with `val`.
            pub const fn set_unsigned(&mut self, val: $u) {
                self.0 = val.to_le_bytes();
            }

            #[inline]
            #[must_use]
            /// `signed` reads the bytes as a two's complement integer.
            pub const fn signed(&self) -> $i {
                <$i>::from_le_bytes(self.0)
            }

            #[inline]
            /// `set_signed` overwrites every byte with `val`.
            pub const fn set_signed(&mut self, val: $i) {
                self.0 = val.to_le_bytes();
            }
        }

        impl From<$u> for Blit<$n> {
            fn from(val: $u) -> Self {
                Self::from_unsigned(val)
            }
        }

        impl From<$i> for Blit<$n> {
            fn from(val: $i) -> Self {
                Self::from_signed(val)
            }
        }

        impl From<Blit<$n>> for $u {
            fn from(blit: Blit<$n>) -> Self {
                blit.unsigned()
            }
        }

        impl From<Blit<$n>> for $i {
            fn from(blit: Blit<$n>) -> Self {
                blit.signed()
            }
        }
    };
}

blit_views!(1, u8, i8);
blit_views!(2, u16, i16);
blit_views!(4, u32, i32);
blit_views!(8, u64, i64);

// A union of N bytes splits into two unions of N / 2 bytes; `lo` holds the
// least significant half.
macro_rules! blit_halves {
    ($n:literal, $h:literal) => {
        impl Blit<$n> {
            #[inline]
            #[must_use]
            /// `from_halves` joins a low and a high half.
            pub fn from_halves(lo: Blit<$h>, hi: Blit<$h>) -> Self {
                let mut out = Self::zero();
                out.set_lo(lo);
                out.set_hi(hi);
                out
            }

            #[inline]
            #[must_use]
            /// `lo` returns the least significant half.
            pub fn lo(&self) -> Blit<$h> {
                let mut half = Blit::<$h>::zero();
                half.0.copy_from_slice(&self.0[..$h]);
                half
            }

            #[inline]
            #[must_use]
            /// `hi` returns the most significant half.
            pub fn hi(&self) -> Blit<$h> {
                let mut half = Blit::<$h>::zero();
                half.0.copy_from_slice(&self.0[$h..]);
                half
            }

            #[inline]
            /// `set_lo` overwrites the least significant half.
            pub fn set_lo(&mut self, half: Blit<$h>) {
                self.0[..$h].copy_from_slice(&half.0);
            }

            #[inline]
            /// `set_hi` overwrites the most significant half.
            pub fn set_hi(&mut self, half: Blit<$h>) {
                self.0[$h..].copy_from_slice(&half.0);
            }
        }
    };
}

blit_halves!(2, 1);
blit_halves!(4, 2);
blit_halves!(8, 4);

use anyhow::{Result, bail};

/// FloorLog2 computes integer base-2 logarithms of positive integers.
pub trait FloorLog2: Copy {
    /// `floor_log2` returns `k` such that `2^k <= self < 2^(k+1)`.
    ///
    /// # Errors
    /// Returns an error if `self <= 0`.
    fn floor_log2(self) -> Result<u32>;

    /// `ceiling_log2` returns the smallest `k` such that `2^k >= self`.
    ///
    /// # Errors
    /// Returns an error if `self <= 0`.
    fn ceiling_log2(self) -> Result<u32>;
}

macro_rules! floor_log2_impl {
    ($t:ty) => {
        impl FloorLog2 for $t {
            #[inline]
            fn floor_log2(self) -> Result<u32> {
                if self == 0 {
                    bail!("log2 is undefined for {self}: value must be positive");
                }
                Ok(self.ilog2())
            }

            #[inline]
            fn ceiling_log2(self) -> Result<u32> {
                let floor = self.floor_log2()?;
                Ok(floor + u32::from(!self.is_power_of_two()))
            }
        }
    };
}

floor_log2_impl!(u8);
floor_log2_impl!(u16);
floor_log2_impl!(u32);
floor_log2_impl!(u64);
floor_log2_impl!(usize);

macro_rules! floor_log2_signed_impl {
    ($t:ty, $u:ty) => {
        impl FloorLog2 for $t {
            #[inline]
            #[allow(clippy::cast_sign_loss)]
            fn floor_log2(self) -> Result<u32> {
                if self <= 0 {
                    bail!("log2 is undefined for {self}: value must be positive");
                }
                (self as $u).floor_log2()
            }

            #[inline]
            #[allow(clippy::cast_sign_loss)]
            fn ceiling_log2(self) -> Result<u32> {
                if self <= 0 {
                    bail!("log2 is undefined for {self}: value must be positive");
                }
                (self as $u).ceiling_log2()
            }
        }
    };
}

floor_log2_signed_impl!(i8, u8);
floor_log2_signed_impl!(i16, u16);
floor_log2_signed_impl!(i32, u32);
floor_log2_signed_impl!(i64, u64);
floor_log2_signed_impl!(isize, usize);

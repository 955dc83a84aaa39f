use std::hash::{BuildHasher, Hasher};

/// FNV_OFFSET_BASIS is the FNV-1a 32-bit initial state.
pub const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
/// FNV_PRIME is the FNV-1a 32-bit multiplier.
pub const FNV_PRIME: u32 = 0x0100_0193;

/// HashWord is a fixed-width value that can be fed into a hash state as its
/// little-endian bytes.
pub trait HashWord: Copy {
    /// `feed` writes the value into an FNV-1a state.
    fn feed(self, state: &mut FnvHashCode);
}

macro_rules! hash_word_impl {
    ($($t:ty),* $(,)?) => {
        $(
            impl HashWord for $t {
                #[inline]
                fn feed(self, state: &mut FnvHashCode) {
                    state.add_bytes(&self.to_le_bytes());
                }
            }
        )*
    };
}

hash_word_impl!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

// Pointer-sized integers hash as 64-bit so results agree across targets.
impl HashWord for usize {
    #[inline]
    fn feed(self, state: &mut FnvHashCode) {
        (self as u64).feed(state);
    }
}

impl HashWord for isize {
    #[inline]
    fn feed(self, state: &mut FnvHashCode) {
        (self as i64).feed(state);
    }
}

impl HashWord for bool {
    #[inline]
    fn feed(self, state: &mut FnvHashCode) {
        state.add_byte(u8::from(self));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// FnvHashCode is a running FNV-1a 32-bit state.
pub struct FnvHashCode(u32);

impl FnvHashCode {
    #[inline]
    #[must_use]
    /// `new` starts from the offset basis.
    pub const fn new() -> Self {
        Self(FNV_OFFSET_BASIS)
    }

    #[inline]
    /// `add_byte` folds a single byte into the state.
    pub const fn add_byte(&mut self, b: u8) {
        self.0 = (self.0 ^ b as u32).wrapping_mul(FNV_PRIME);
    }

    #[inline]
    /// `add_bytes` folds every byte of `bytes`, in order.
    pub const fn add_bytes(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            self.add_byte(bytes[i]);
            i += 1;
        }
    }

    #[inline]
    /// `add` folds the little-endian bytes of `value`.
    pub fn add<T: HashWord>(&mut self, value: T) {
        value.feed(self);
    }

    #[inline]
    #[must_use]
    /// `to_hash_code` returns the current state without consuming it.
    pub const fn to_hash_code(&self) -> u32 {
        self.0
    }

    #[inline]
    #[must_use]
    /// `combine_bytes` hashes a whole byte sequence.
    pub const fn combine_bytes(bytes: &[u8]) -> u32 {
        let mut state = Self::new();
        state.add_bytes(bytes);
        state.0
    }

    #[must_use]
    /// `combine2` hashes two values in order.
    pub fn combine2<T1: HashWord, T2: HashWord>(v1: T1, v2: T2) -> u32 {
        let mut state = Self::new();
        state.add(v1);
        state.add(v2);
        state.0
    }

    #[must_use]
    /// `combine3` hashes three values in order.
    pub fn combine3<T1: HashWord, T2: HashWord, T3: HashWord>(v1: T1, v2: T2, v3: T3) -> u32 {
        let mut state = Self::new();
        state.add(v1);
        state.add(v2);
        state.add(v3);
        state.0
    }

    #[must_use]
    /// `combine4` hashes four values in order.
    pub fn combine4<T1, T2, T3, T4>(v1: T1, v2: T2, v3: T3, v4: T4) -> u32
    where
        T1: HashWord,
        T2: HashWord,
        T3: HashWord,
        T4: HashWord,
    {
        let mut state = Self::new();
        state.add(v1);
        state.add(v2);
        state.add(v3);
        state.add(v4);
        state.0
    }

    #[must_use]
    /// `combine5` hashes five values in order.
    pub fn combine5<T1, T2, T3, T4, T5>(v1: T1, v2: T2, v3: T3, v4: T4, v5: T5) -> u32
    where
        T1: HashWord,
        T2: HashWord,
        T3: HashWord,
        T4: HashWord,
        T5: HashWord,
    {
        let mut state = Self::new();
        state.add(v1);
        state.add(v2);
        state.add(v3);
        state.add(v4);
        state.add(v5);
        state.0
    }
}

impl Default for FnvHashCode {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FnvHashCode {
    #[inline]
    fn finish(&self) -> u64 {
        u64::from(self.0)
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.add_bytes(bytes);
    }

    // Integer writes go through `add` so they stay little-endian and
    // pointer-sized values stay 64-bit on every target.
    fn write_u8(&mut self, i: u8) {
        self.add(i);
    }

    fn write_u16(&mut self, i: u16) {
        self.add(i);
    }

    fn write_u32(&mut self, i: u32) {
        self.add(i);
    }

    fn write_u64(&mut self, i: u64) {
        self.add(i);
    }

    fn write_u128(&mut self, i: u128) {
        self.add(i);
    }

    fn write_usize(&mut self, i: usize) {
        self.add(i);
    }

    fn write_i8(&mut self, i: i8) {
        self.add(i);
    }

    fn write_i16(&mut self, i: i16) {
        self.add(i);
    }

    fn write_i32(&mut self, i: i32) {
        self.add(i);
    }

    fn write_i64(&mut self, i: i64) {
        self.add(i);
    }

    fn write_i128(&mut self, i: i128) {
        self.add(i);
    }

    fn write_isize(&mut self, i: isize) {
        self.add(i);
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// FnvBuildHasher builds [`FnvHashCode`] states for std collections.
pub struct FnvBuildHasher;

impl BuildHasher for FnvBuildHasher {
    type Hasher = FnvHashCode;

    fn build_hasher(&self) -> FnvHashCode {
        FnvHashCode::new()
    }
}

const PRIME1: u32 = 0x9E37_79B1;
const PRIME2: u32 = 0x85EB_CA77;
const PRIME3: u32 = 0xC2B2_AE3D;
const PRIME4: u32 = 0x27D4_EB2F;
const PRIME5: u32 = 0x1656_67B1;

const SEED: u32 = 0;
const STRIPE: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// ByteHashCode accumulates bytes into an xxHash32 state (seed `0`).
///
/// Bytes are buffered until a full 16-byte stripe is available. Reading the
/// hash with [`ByteHashCode::to_hash_code`] finalizes a copy, so the
/// accumulator can keep growing afterwards.
pub struct ByteHashCode {
    lanes: [u32; 4],
    pending: [u8; STRIPE],
    pending_len: usize,
    total_len: u64,
}

impl ByteHashCode {
    #[must_use]
    /// `new` starts an empty accumulator.
    pub const fn new() -> Self {
        Self {
            lanes: [
                SEED.wrapping_add(PRIME1).wrapping_add(PRIME2),
                SEED.wrapping_add(PRIME2),
                SEED,
                SEED.wrapping_sub(PRIME1),
            ],
            pending: [0; STRIPE],
            pending_len: 0,
            total_len: 0,
        }
    }

    /// `combine` hashes `bytes` in one call. It matches feeding the same bytes
    /// through [`ByteHashCode::add`].
    #[must_use]
    pub fn combine(bytes: &[u8]) -> u32 {
        let mut hc = Self::new();
        hc.add_range(bytes);
        hc.to_hash_code()
    }

    /// `add` appends one byte.
    pub fn add(&mut self, b: u8) {
        self.pending[self.pending_len] = b;
        self.pending_len += 1;
        self.total_len += 1;
        if self.pending_len == STRIPE {
            let stripe = self.pending;
            self.consume(&stripe);
            self.pending_len = 0;
        }
    }

    /// `add_range` appends every byte of `bytes`, in order.
    pub fn add_range(&mut self, mut bytes: &[u8]) {
        if self.pending_len > 0 {
            let take = (STRIPE - self.pending_len).min(bytes.len());
            for &b in &bytes[..take] {
                self.add(b);
            }
            bytes = &bytes[take..];
        }

        let mut stripes = bytes.chunks_exact(STRIPE);
        for stripe in stripes.by_ref() {
            self.consume(stripe);
            self.total_len += STRIPE as u64;
        }
        for &b in stripes.remainder() {
            self.add(b);
        }
    }

    /// `len` is the number of bytes added so far.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.total_len
    }

    /// `is_empty` reports whether no byte has been added yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_len == 0
    }

    /// `to_hash_code` finalizes the current state without modifying it.
    #[must_use]
    pub fn to_hash_code(&self) -> u32 {
        let [v1, v2, v3, v4] = self.lanes;
        let mut h = if self.total_len >= STRIPE as u64 {
            v1.rotate_left(1)
                .wrapping_add(v2.rotate_left(7))
                .wrapping_add(v3.rotate_left(12))
                .wrapping_add(v4.rotate_left(18))
        } else {
            SEED.wrapping_add(PRIME5)
        };
        // xxHash32 folds the length modulo 2^32
        h = h.wrapping_add(self.total_len as u32);

        let tail = &self.pending[..self.pending_len];
        let mut words = tail.chunks_exact(4);
        for word in words.by_ref() {
            let w = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
            h = h.wrapping_add(w.wrapping_mul(PRIME3));
            h = h.rotate_left(17).wrapping_mul(PRIME4);
        }
        for &b in words.remainder() {
            h = h.wrapping_add(u32::from(b).wrapping_mul(PRIME5));
            h = h.rotate_left(11).wrapping_mul(PRIME1);
        }

        avalanche(h)
    }

    fn consume(&mut self, stripe: &[u8]) {
        for (lane, word) in self.lanes.iter_mut().zip(stripe.chunks_exact(4)) {
            let w = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
            *lane = round(*lane, w);
        }
    }
}

impl Default for ByteHashCode {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<u8> for ByteHashCode {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for b in iter {
            self.add(b);
        }
    }
}

#[inline]
const fn round(acc: u32, input: u32) -> u32 {
    acc.wrapping_add(input.wrapping_mul(PRIME2))
        .rotate_left(13)
        .wrapping_mul(PRIME1)
}

#[inline]
const fn avalanche(mut h: u32) -> u32 {
    h ^= h >> 15;
    h = h.wrapping_mul(PRIME2);
    h ^= h >> 13;
    h = h.wrapping_mul(PRIME3);
    h ^= h >> 16;
    h
}

//! 32-bit hash combinators.
//!
//! - [`FnvHashCode`]: FNV-1a over bytes, with fixed-arity `combine` helpers
//!   for integers and a [`std::hash::Hasher`] implementation.
//! - [`ByteHashCode`]: an incremental xxHash32 accumulator fed one byte at a
//!   time.
//!
//! Both are order-sensitive: feeding the same values in a different order
//! yields a different hash.

mod byte_hash;
mod fnv;


pub use byte_hash::ByteHashCode;
pub use fnv::{FNV_OFFSET_BASIS, FNV_PRIME, FnvBuildHasher, FnvHashCode, HashWord};

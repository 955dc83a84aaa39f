//! Bit-level primitives, byte unions, buffer comparison and hashing.
//!
//! - `bits`: single-bit access, rotation, bit counting and integer log2.
//! - `blit`: little-endian byte unions with signed/unsigned/half views.
//! - `buffer`: equality, ordering and bounded-fidelity hashing of buffers.
//! - `hash`: FNV-1a and xxHash32 combinators.
//! - `content`: SHA-1 and SHA-256 content hash value types.
#![allow(clippy::cargo_common_metadata)]

pub mod bits;
pub mod blit;
pub mod buffer;
pub mod content;
pub mod hash;

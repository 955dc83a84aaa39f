//! Equality, ordering and hashing over byte buffers.
//!
//! Two strategies share the [`BufferComparer`] trait:
//!
//! - [`ArrayComparer`] treats a missing buffer (`None`) as a legitimate value
//!   that equals only another missing buffer, sorts first, and hashes to
//!   [`FNV_NULL`].
//! - [`SpanComparer`] rejects a missing buffer with an error.
//!
//! Hashing inspects at most `fidelity` leading bytes. Longer buffers fold
//! their length in place of the remaining content, so buffers of equal
//! length that agree on the inspected prefix hash equal.

use std::cmp::Ordering;
use std::ops::Range;

use anyhow::{Result, anyhow};
use tracing::trace;

use crate::hash::{FNV_OFFSET_BASIS, FnvHashCode};


/// DEFAULT_HASH_CODE_FIDELITY is the number of leading bytes hashed by
/// default.
pub const DEFAULT_HASH_CODE_FIDELITY: usize = 512;

/// FNV_EMPTY is the hash of an empty buffer.
pub const FNV_EMPTY: u32 = FNV_OFFSET_BASIS;

/// FNV_NULL is the hash of a missing buffer under [`ArrayComparer`].
pub const FNV_NULL: u32 = 0;

/// BufferComparer compares and hashes optional byte buffers.
pub trait BufferComparer {
    /// `equals` reports whether both buffers have identical length and content.
    ///
    /// # Errors
    /// Returns an error if the strategy rejects a missing buffer.
    fn equals(&self, x: Option<&[u8]>, y: Option<&[u8]>) -> Result<bool>;

    /// `compare` orders buffers lexicographically by byte value; a strict
    /// prefix sorts first.
    ///
    /// # Errors
    /// Returns an error if the strategy rejects a missing buffer.
    fn compare(&self, x: Option<&[u8]>, y: Option<&[u8]>) -> Result<Ordering>;

    /// `hash_code` hashes at most the comparer's fidelity of leading bytes.
    ///
    /// # Errors
    /// Returns an error if the strategy rejects a missing buffer.
    fn hash_code(&self, obj: Option<&[u8]>) -> Result<u32>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// ArrayComparer accepts missing buffers.
pub struct ArrayComparer {
    fidelity: usize,
}

impl ArrayComparer {
    #[must_use]
    /// `new` uses [`DEFAULT_HASH_CODE_FIDELITY`].
    pub const fn new() -> Self {
        Self::with_fidelity(DEFAULT_HASH_CODE_FIDELITY)
    }

    /// `with_fidelity` sets how many leading bytes are hashed; `0` hashes
    /// every byte.
    #[must_use]
    pub const fn with_fidelity(fidelity: usize) -> Self {
        Self { fidelity }
    }

    #[must_use]
    /// `fidelity` is the number of leading bytes hashed.
    pub const fn fidelity(&self) -> usize {
        self.fidelity
    }
}

impl Default for ArrayComparer {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferComparer for ArrayComparer {
    fn equals(&self, x: Option<&[u8]>, y: Option<&[u8]>) -> Result<bool> {
        Ok(match (x, y) {
            (None, None) => true,
            (Some(x), Some(y)) => equals(x, y),
            _ => false,
        })
    }

    fn compare(&self, x: Option<&[u8]>, y: Option<&[u8]>) -> Result<Ordering> {
        Ok(match (x, y) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => compare(x, y),
        })
    }

    fn hash_code(&self, obj: Option<&[u8]>) -> Result<u32> {
        Ok(obj.map_or(FNV_NULL, |buf| hash_code(buf, self.fidelity)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// SpanComparer requires both buffers to be present.
pub struct SpanComparer {
    fidelity: usize,
}

impl SpanComparer {
    #[must_use]
    /// `new` uses [`DEFAULT_HASH_CODE_FIDELITY`].
    pub const fn new() -> Self {
        Self::with_fidelity(DEFAULT_HASH_CODE_FIDELITY)
    }

    /// `with_fidelity` sets how many leading bytes are hashed; `0` hashes
    /// every byte.
    #[must_use]
    pub const fn with_fidelity(fidelity: usize) -> Self {
        Self { fidelity }
    }

    #[must_use]
    /// `fidelity` is the number of leading bytes hashed.
    pub const fn fidelity(&self) -> usize {
        self.fidelity
    }
}

impl Default for SpanComparer {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferComparer for SpanComparer {
    fn equals(&self, x: Option<&[u8]>, y: Option<&[u8]>) -> Result<bool> {
        Ok(equals(required(x, "x")?, required(y, "y")?))
    }

    fn compare(&self, x: Option<&[u8]>, y: Option<&[u8]>) -> Result<Ordering> {
        Ok(compare(required(x, "x")?, required(y, "y")?))
    }

    fn hash_code(&self, obj: Option<&[u8]>) -> Result<u32> {
        Ok(hash_code(required(obj, "obj")?, self.fidelity))
    }
}

fn required<'a>(buf: Option<&'a [u8]>, name: &str) -> Result<&'a [u8]> {
    buf.ok_or_else(|| anyhow!("buffer `{name}` is missing"))
}

#[inline]
#[must_use]
/// `equals` compares two buffers byte for byte.
pub fn equals(x: &[u8], y: &[u8]) -> bool {
    x == y
}

#[inline]
#[must_use]
/// `compare` orders two buffers lexicographically.
pub fn compare(x: &[u8], y: &[u8]) -> Ordering {
    x.cmp(y)
}

/// `hash_code` hashes `buffer`, inspecting at most `fidelity` leading bytes.
///
/// # Arguments
/// * `buffer` - The bytes to hash.
/// * `fidelity` - The maximum number of bytes hashed, `0` meaning all.
#[must_use]
pub fn hash_code(buffer: &[u8], fidelity: usize) -> u32 {
    if fidelity == 0 || buffer.len() <= fidelity {
        return FnvHashCode::combine_bytes(buffer);
    }

    trace!(len = buffer.len(), fidelity, "hashing truncated buffer");
    let mut state = FnvHashCode::new();
    state.add_bytes(&buffer[..fidelity]);
    state.add(buffer.len());
    state.to_hash_code()
}

/// `equals_range` compares sub-ranges of two buffers.
///
/// # Errors
/// Returns an error if either range lies outside its buffer.
pub fn equals_range(
    x: &[u8],
    x_range: Range<usize>,
    y: &[u8],
    y_range: Range<usize>,
) -> Result<bool> {
    Ok(equals(sub_range(x, x_range)?, sub_range(y, y_range)?))
}

/// `compare_range` orders sub-ranges of two buffers.
///
/// # Errors
/// Returns an error if either range lies outside its buffer.
pub fn compare_range(
    x: &[u8],
    x_range: Range<usize>,
    y: &[u8],
    y_range: Range<usize>,
) -> Result<Ordering> {
    Ok(compare(sub_range(x, x_range)?, sub_range(y, y_range)?))
}

fn sub_range(buf: &[u8], range: Range<usize>) -> Result<&[u8]> {
    buf.get(range.clone()).ok_or_else(|| {
        anyhow!(
            "range {}..{} out of bounds for buffer of length {}",
            range.start,
            range.end,
            buf.len()
        )
    })
}

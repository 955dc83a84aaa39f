//! Fixed-size SHA-1 and SHA-256 content hashes.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use anyhow::{Error, Result, anyhow, bail};
use sha1::Sha1;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::buffer;

#[cfg(test)]
mod content_tests;

/// SHA1_LEN is the SHA-1 digest length in bytes.
pub const SHA1_LEN: usize = 20;
/// SHA1_HEX_LEN is the length of the SHA-1 hex rendering.
pub const SHA1_HEX_LEN: usize = SHA1_LEN * 2;
/// SHA256_LEN is the SHA-256 digest length in bytes.
pub const SHA256_LEN: usize = 32;
/// SHA256_HEX_LEN is the length of the SHA-256 hex rendering.
pub const SHA256_HEX_LEN: usize = SHA256_LEN * 2;

// Both digest types share one surface; only the hasher, the length and the
// label used in messages differ.
macro_rules! content_hash {
    ($(#[$doc:meta])* $name:ident, $hasher:ty, $len:ident, $label:literal) => {
        #[derive(Clone, Copy, Eq, PartialEq, Hash)]
        $(#[$doc])*
        pub struct $name([u8; $len]);

        impl $name {
            #[must_use]
            /// `compute` hashes `data`.
            pub fn compute(data: &[u8]) -> Self {
                let mut hasher = <$hasher>::new();
                hasher.update(data);
                Self(hasher.finalize().into())
            }

            #[inline]
            #[must_use]
            /// `from_bytes` wraps raw digest bytes.
            pub const fn from_bytes(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// `try_from_slice` copies a digest out of a slice.
            ///
            /// # Errors
            /// Returns an error if `bytes` has the wrong length.
            pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
                let digest: [u8; $len] = bytes.try_into().map_err(|_| {
                    anyhow!(
                        "{} digest must be {} bytes, got {}",
                        $label,
                        $len,
                        bytes.len()
                    )
                })?;
                Ok(Self(digest))
            }

            #[inline]
            #[must_use]
            /// `as_bytes` returns the digest bytes.
            pub const fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// `parse` reads hex digits, ignoring case and surrounding
            /// whitespace.
            ///
            /// # Errors
            /// Returns an error if the input is not exactly two hex digits
            /// per digest byte.
            pub fn parse(text: &str) -> Result<Self> {
                let parsed = parse_hex::<$len>(text.trim(), $label).map(Self);
                if let Err(err) = &parsed {
                    debug!(input = text, kind = $label, "rejected digest text: {err:#}");
                }
                parsed
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = Error;

            fn try_from(bytes: &[u8]) -> Result<Self> {
                Self::try_from_slice(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse(s)
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                buffer::compare(&self.0, &other.0)
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl fmt::LowerHex for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for b in &self.0 {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::LowerHex::fmt(self, f)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({self})", stringify!($name))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::EMPTY
            }
        }
    };
}

content_hash!(
    /// Sha1Hash is a SHA-1 digest held by value.
    Sha1Hash,
    Sha1,
    SHA1_LEN,
    "sha1"
);

content_hash!(
    /// Sha256Hash is a SHA-256 digest held by value.
    Sha256Hash,
    Sha256,
    SHA256_LEN,
    "sha256"
);

impl Sha1Hash {
    /// EMPTY is the digest of zero bytes.
    pub const EMPTY: Self = Self([
        0xda, 0x39, 0xa3, 0xee, 0x5e, 0x6b, 0x4b, 0x0d, 0x32, 0x55, 0xbf, 0xef, 0x95, 0x60, 0x18,
        0x90, 0xaf, 0xd8, 0x07, 0x09,
    ]);
}

impl Sha256Hash {
    /// EMPTY is the digest of zero bytes.
    pub const EMPTY: Self = Self([
        0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f, 0xb9,
        0x24, 0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b, 0x78, 0x52,
        0xb8, 0x55,
    ]);
}

fn parse_hex<const N: usize>(text: &str, label: &str) -> Result<[u8; N]> {
    let digits = text.as_bytes();
    if digits.len() != N * 2 {
        bail!(
            "{label} text must be {} hex digits, got {}",
            N * 2,
            digits.len()
        );
    }

    let mut out = [0u8; N];
    for (i, pair) in digits.chunks_exact(2).enumerate() {
        out[i] = (nibble(pair[0])? << 4) | nibble(pair[1])?;
    }
    Ok(out)
}

fn nibble(digit: u8) -> Result<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => bail!("invalid hex digit {:?}", char::from(digit)),
    }
}

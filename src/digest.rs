//! 32-bit key digests.
//!
//! One digest serves two purposes: its low byte selects a bucket (or a
//! registry slot) and its bits steer descent through the bucket tree. Digest
//! quality therefore directly determines how balanced the bucket trees are.

/// Number of buckets per table and slots per registry.
pub const BUCKETS: usize = 256;

/// Maps a byte sequence to a 32-bit checksum.
///
/// Must be deterministic. Collisions are permitted and are resolved by the
/// collision chain, so any `Fn(&[u8]) -> u32` qualifies.
pub trait Digest {
    /// Computes the digest of `bytes`. Length is explicit, so embedded NUL
    /// bytes are hashed like any other byte.
    fn digest(&self, bytes: &[u8]) -> u32;
}

/// Reflected CRC-32 (polynomial `0xEDB88320`, inverted in and out).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Crc32;

impl Digest for Crc32 {
    #[inline]
    fn digest(&self, bytes: &[u8]) -> u32 {
        crc32fast::hash(bytes)
    }
}

impl<F> Digest for F
where
    F: Fn(&[u8]) -> u32,
{
    #[inline]
    fn digest(&self, bytes: &[u8]) -> u32 {
        self(bytes)
    }
}

/// Returns the bucket (or registry slot) addressed by `digest`.
#[inline]
#[must_use]
pub const fn bucket_of(digest: u32) -> usize {
    (digest & 0xFF) as usize
}

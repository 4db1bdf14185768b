//! Pluggable message digests for the signature protocol
//!
//! The protocol only needs "message → integer below a modulus", so the
//! digest is a strategy trait rather than a fixed function. [`ByteSum`] is
//! the toy reference digest; it has no collision resistance whatsoever and
//! exists purely so the protocol can be demonstrated end to end.

/// Strategy for reducing a message to an integer in `[0, modulus)`.
pub trait MessageHash {
    /// Digest `message` into an integer strictly below `modulus`.
    fn digest(&self, message: &[u8], modulus: u64) -> u64;
}

/// Toy digest: the sum of byte values, reduced by the modulus.
#[derive(Debug, Default, Clone, Copy)]
pub struct ByteSum;

impl MessageHash for ByteSum {
    fn digest(&self, message: &[u8], modulus: u64) -> u64 {
        message
            .iter()
            .fold(0u64, |acc, &byte| (acc + u64::from(byte)) % modulus)
    }
}

//! Hashing: map arbitrary input bytes to the 16-byte digest that seeds
//! every later stage.
//!
//! This module defines the [`Hasher`] trait so the digest primitive can
//! be injected. The pipeline only relies on the contract that a digest
//! is deterministic and exactly [`HASH_LEN`](crate::types::HASH_LEN)
//! bytes long. [`Md5Hasher`] is the production implementation. Tests
//! substitute fixed digests to exercise the later stages in isolation.

use md5::{Digest, Md5};

use crate::types::{HashBytes, PipelineError};

/// Trait for digest strategies.
///
/// Input: the raw bytes of the input string.
/// Output: the digest bytes. Anything other than 16 bytes is rejected
/// by [`hash_input`] with [`PipelineError::DigestLength`].
pub trait Hasher {
    /// Compute the digest of `input`.
    fn digest(&self, input: &[u8]) -> Vec<u8>;
}

/// MD5 via the RustCrypto `md-5` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Md5Hasher;

impl Hasher for Md5Hasher {
    fn digest(&self, input: &[u8]) -> Vec<u8> {
        <Md5 as Digest>::digest(input).to_vec()
    }
}

impl<F> Hasher for F
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    fn digest(&self, input: &[u8]) -> Vec<u8> {
        self(input)
    }
}

/// Hash `input` and check the digest length.
///
/// # Errors
///
/// Returns [`PipelineError::DigestLength`] if `hasher` produced anything
/// other than exactly 16 bytes.
pub fn hash_input<H: Hasher + ?Sized>(
    hasher: &H,
    input: &[u8],
) -> Result<HashBytes, PipelineError> {
    let digest = hasher.digest(input);
    let hash = HashBytes::try_from(digest)?;
    log::trace!("digest {}", hash.to_hex());
    Ok(hash)
}

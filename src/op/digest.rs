// Copyright (C) Microsoft Corporation. All rights reserved.

//! Digest lifecycle contract.

use super::*;

/// Common lifecycle of an incremental digest context.
///
/// Implemented by both the unkeyed hash contexts and the keyed HMAC
/// contexts. The contract is:
///
/// - [`update`](Self::update) may be called any number of times, including
///   zero, with chunks of any size; splitting input across calls never
///   changes the result.
/// - [`digest`](Self::digest) is non-destructive and repeatable: it
///   finalizes a duplicate of the live state, so the context remains live
///   and further updates continue the original computation.
/// - Duplication is `Clone`: the fork holds a byte-identical snapshot of
///   the state, and mutations to either side never leak to the other.
pub trait DigestOp {
    /// Feeds a chunk of input into the running computation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying provider rejects the update.
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError>;

    /// Finalizes a snapshot of the state and returns the digest.
    ///
    /// The live state is left unchanged. The returned buffer is always
    /// exactly [`digest_size`](Self::digest_size) bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying finalization fails.
    fn digest(&self) -> Result<Vec<u8>, CryptoError>;

    /// Returns the digest size in bytes for this context's algorithm.
    fn digest_size(&self) -> usize;

    /// Returns the digest rendered as lowercase hexadecimal.
    ///
    /// The output is two characters per byte in byte order, so its length
    /// is exactly `2 * digest_size()`. Like [`digest`](Self::digest), this
    /// does not disturb the live state.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying finalization fails.
    fn hexdigest(&self) -> Result<String, CryptoError> {
        Ok(hex::encode(self.digest()?))
    }
}

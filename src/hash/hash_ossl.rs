// Copyright (C) Microsoft Corporation. All rights reserved.

//! OpenSSL-based hash context implementation for Unix systems.
//!
//! This module binds the platform-agnostic hash interface of the parent
//! module to OpenSSL. OpenSSL supplies the block transforms (init, update,
//! final) and the context-copy entry point; this wrapper never reads or
//! writes hash state except through those, so it inherits OpenSSL's
//! assembly-optimized and hardware-accelerated code paths.
//!
//! # Finalization Strategy
//!
//! OpenSSL's finalization consumes the context it runs on. To keep
//! [`digest`](OsslHashContext::digest) non-destructive, finalization always
//! runs on a whole-state duplicate of the live context (`EVP_MD_CTX_copy_ex`
//! via `Hasher::clone`), leaving the original byte-for-byte unchanged.

use openssl::hash::Hasher;
use openssl::hash::MessageDigest;

use super::*;

impl HashAlgo {
    /// Returns the OpenSSL message digest binding for this algorithm.
    pub(crate) fn message_digest(self) -> MessageDigest {
        match self {
            HashAlgo::Sha1 => MessageDigest::sha1(),
            HashAlgo::Sha256 => MessageDigest::sha256(),
            HashAlgo::Sha384 => MessageDigest::sha384(),
            HashAlgo::Sha512 => MessageDigest::sha512(),
        }
    }
}

/// OpenSSL-backed incremental hash context.
///
/// The context exclusively owns one algorithm-specific OpenSSL state (the
/// running hash words, the buffered partial block and the length counter).
/// The algorithm binding is fixed at construction and immutable for the
/// context's lifetime.
///
/// There is no public bare constructor: the factory functions are the sole
/// producers of valid instances, since all meaningful initialization (state
/// allocation and the algorithm's init transform) happens there.
///
/// # Thread Safety
///
/// Not internally synchronized; confine each context to one thread or
/// synchronize externally. Distinct contexts, including a context and its
/// [`copy`](Self::copy), never interfere.
#[derive(Clone)]
pub struct OsslHashContext {
    /// The algorithm bound at construction.
    algo: HashAlgo,
    /// OpenSSL state for the running computation.
    hasher: Hasher,
}

impl OsslHashContext {
    /// Creates a context for `algo`, optionally seeded with `initial`.
    ///
    /// Allocates and initializes the algorithm's state, then feeds
    /// `initial` through [`update`](Self::update) if provided. This is the
    /// only sanctioned construction path.
    ///
    /// # Arguments
    ///
    /// * `algo` - The hash algorithm to bind
    /// * `initial` - Optional first payload, equivalent to an immediate
    ///   `update` call
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::HashInitError`] if the provider fails to set
    /// up the context, or [`CryptoError::HashUpdateError`] if feeding the
    /// initial payload fails.
    pub fn new(algo: HashAlgo, initial: Option<&[u8]>) -> Result<Self, CryptoError> {
        let hasher =
            Hasher::new(algo.message_digest()).map_err(|_| CryptoError::HashInitError)?;

        let mut ctx = Self { algo, hasher };
        if let Some(data) = initial {
            ctx.update(data)?;
        }
        Ok(ctx)
    }

    /// Creates a SHA-1 context.
    ///
    /// # Security Warning
    ///
    /// SHA-1 is cryptographically broken and should not be used for
    /// security-sensitive applications.
    pub fn sha1(initial: Option<&[u8]>) -> Result<Self, CryptoError> {
        Self::new(HashAlgo::Sha1, initial)
    }

    /// Creates a SHA-256 context.
    pub fn sha256(initial: Option<&[u8]>) -> Result<Self, CryptoError> {
        Self::new(HashAlgo::Sha256, initial)
    }

    /// Creates a SHA-384 context.
    pub fn sha384(initial: Option<&[u8]>) -> Result<Self, CryptoError> {
        Self::new(HashAlgo::Sha384, initial)
    }

    /// Creates a SHA-512 context.
    pub fn sha512(initial: Option<&[u8]>) -> Result<Self, CryptoError> {
        Self::new(HashAlgo::Sha512, initial)
    }

    /// Computes a digest in one call.
    ///
    /// Convenience wrapper defined as `new(algo, Some(data))?.digest()`, so
    /// one-shot and streaming results can never disagree.
    ///
    /// # Errors
    ///
    /// Returns an error if context setup or finalization fails.
    pub fn hash(algo: HashAlgo, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Self::new(algo, Some(data))?.digest()
    }

    /// Returns the algorithm this context is bound to.
    pub fn algo(&self) -> HashAlgo {
        self.algo
    }

    /// Returns the digest size in bytes for this context.
    pub fn digest_size(&self) -> usize {
        self.algo.digest_size()
    }

    /// Feeds a chunk of input into the running computation.
    ///
    /// May be called any number of times with chunks of any size, including
    /// empty, and including after [`digest`](Self::digest) calls: the
    /// context stays live and the chunks concatenate.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::HashUpdateError`] if the provider rejects the
    /// update.
    pub fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        self.hasher
            .update(data)
            .map_err(|_| CryptoError::HashUpdateError)
    }

    /// Finalizes a snapshot of the state and returns the digest.
    ///
    /// The algorithm's final transform runs on a duplicate of the live
    /// state only, so this is idempotent and repeatable, and subsequent
    /// [`update`](Self::update) calls continue the original computation as
    /// if `digest` had never been called. The returned buffer is always
    /// exactly [`digest_size`](Self::digest_size) bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::HashFinishError`] if finalization fails.
    pub fn digest(&self) -> Result<Vec<u8>, CryptoError> {
        // Finalize a throwaway duplicate; the live state stays untouched.
        let mut snapshot = self.hasher.clone();
        let digest = snapshot
            .finish()
            .map_err(|_| CryptoError::HashFinishError)?;
        Ok(digest.to_vec())
    }

    /// Returns the digest rendered as lowercase hexadecimal.
    ///
    /// Two characters per byte in byte order; length is exactly
    /// `2 * digest_size()`. Non-destructive like [`digest`](Self::digest).
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::HashFinishError`] if finalization fails.
    pub fn hexdigest(&self) -> Result<String, CryptoError> {
        Ok(hex::encode(self.digest()?))
    }

    /// Returns an independent context holding a snapshot of the state.
    ///
    /// The copy is byte-identical but storage-disjoint: further updates on
    /// either context never affect the other.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl DigestOp for OsslHashContext {
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        OsslHashContext::update(self, data)
    }

    fn digest(&self) -> Result<Vec<u8>, CryptoError> {
        OsslHashContext::digest(self)
    }

    fn digest_size(&self) -> usize {
        OsslHashContext::digest_size(self)
    }
}

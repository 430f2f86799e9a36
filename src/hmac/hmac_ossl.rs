// Copyright (C) Microsoft Corporation. All rights reserved.

//! OpenSSL-based HMAC context implementation for Unix systems.
//!
//! The compression math comes from the same OpenSSL hash primitives the
//! unkeyed contexts use; this module owns only the RFC 2104 key schedule
//! and the keyed lifecycle. OpenSSL's own streaming MAC contexts cannot be
//! duplicated through its public API, which rules them out here: the
//! lifecycle contract requires `copy` and non-destructive `digest`, and
//! both need whole-state duplication. Running the inner and outer hashes as
//! ordinary [`HashContext`]s keeps every piece of keyed state
//! snapshot-able.

use zeroize::Zeroizing;

use super::*;

/// Inner-pad byte of the RFC 2104 key schedule.
const IPAD: u8 = 0x36;
/// Outer-pad byte of the RFC 2104 key schedule.
const OPAD: u8 = 0x5c;

/// OpenSSL-backed incremental HMAC context.
///
/// Holds the running inner hash `H(key ^ ipad || message...)` plus the
/// outer-padded key block needed at finalization. The key itself is not
/// retained beyond that block, and the block is zeroized on drop.
///
/// The digest size is a constant of the inner hash variant selected by the
/// [`HmacType`] tag (HMAC-SHA-256 produces 32 bytes exactly as SHA-256
/// does), immutable for the context's lifetime.
///
/// There is no public bare constructor; the factory functions are the sole
/// producers of valid instances.
///
/// # Thread Safety
///
/// Not internally synchronized; confine each context to one thread or
/// synchronize externally.
#[derive(Clone)]
pub struct OsslHmacContext {
    /// The algorithm type tag bound at construction.
    mac_type: HmacType,
    /// Running inner hash over `key ^ ipad || message...`.
    inner: HashContext,
    /// Block-sized `key ^ opad`, consumed by finalization snapshots.
    opad_key: Zeroizing<Vec<u8>>,
}

impl OsslHmacContext {
    /// Creates a keyed context, optionally seeded with `initial`.
    ///
    /// Runs the key schedule for `mac_type` over `key`, then feeds
    /// `initial` through [`update`](Self::update) if provided. This is the
    /// only sanctioned construction path.
    ///
    /// # Arguments
    ///
    /// * `mac_type` - Tag selecting the inner hash algorithm
    /// * `key` - Secret key; any non-empty length. Keys longer than the
    ///   inner block size are hashed first, per RFC 2104.
    /// * `initial` - Optional first payload, equivalent to an immediate
    ///   `update` call
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::HmacInvalidKeySize`] if `key` is empty, or a
    /// hash error if the underlying provider fails.
    pub fn new(
        mac_type: HmacType,
        key: &[u8],
        initial: Option<&[u8]>,
    ) -> Result<Self, CryptoError> {
        if key.is_empty() {
            return Err(CryptoError::HmacInvalidKeySize);
        }

        let algo = mac_type.hash_algo();
        let block_size = algo.block_size();

        // RFC 2104: hash over-long keys, zero-pad to the block size.
        let mut block_key = Zeroizing::new(vec![0u8; block_size]);
        if key.len() > block_size {
            let key_digest = Zeroizing::new(HashContext::hash(algo, key)?);
            block_key[..key_digest.len()].copy_from_slice(&key_digest);
        } else {
            block_key[..key.len()].copy_from_slice(key);
        }

        let mut ipad_key = block_key.clone();
        for byte in ipad_key.iter_mut() {
            *byte ^= IPAD;
        }
        let mut opad_key = block_key;
        for byte in opad_key.iter_mut() {
            *byte ^= OPAD;
        }

        let mut inner = HashContext::new(algo, None)?;
        inner.update(&ipad_key)?;
        drop(ipad_key);

        let mut ctx = Self {
            mac_type,
            inner,
            opad_key,
        };
        if let Some(data) = initial {
            ctx.update(data)?;
        }
        Ok(ctx)
    }

    /// Creates an HMAC-SHA1 context.
    ///
    /// # Security Warning
    ///
    /// Prefer the SHA-2 based variants for new designs.
    pub fn sha1(key: &[u8], initial: Option<&[u8]>) -> Result<Self, CryptoError> {
        Self::new(HmacType::Sha1, key, initial)
    }

    /// Creates an HMAC-SHA256 context.
    pub fn sha256(key: &[u8], initial: Option<&[u8]>) -> Result<Self, CryptoError> {
        Self::new(HmacType::Sha256, key, initial)
    }

    /// Creates an HMAC-SHA384 context.
    pub fn sha384(key: &[u8], initial: Option<&[u8]>) -> Result<Self, CryptoError> {
        Self::new(HmacType::Sha384, key, initial)
    }

    /// Creates an HMAC-SHA512 context.
    pub fn sha512(key: &[u8], initial: Option<&[u8]>) -> Result<Self, CryptoError> {
        Self::new(HmacType::Sha512, key, initial)
    }

    /// Computes a MAC in one call.
    ///
    /// Convenience wrapper defined as
    /// `new(mac_type, key, Some(data))?.digest()`, so one-shot and
    /// streaming results can never disagree.
    ///
    /// # Errors
    ///
    /// Returns an error if the key schedule or finalization fails.
    pub fn mac(mac_type: HmacType, key: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Self::new(mac_type, key, Some(data))?.digest()
    }

    /// Returns the algorithm type tag this context is bound to.
    pub fn mac_type(&self) -> HmacType {
        self.mac_type
    }

    /// Returns the digest size in bytes, equal to the inner hash's.
    pub fn digest_size(&self) -> usize {
        self.mac_type.digest_size()
    }

    /// Feeds a chunk of input into the running computation.
    ///
    /// May be called any number of times with chunks of any size, including
    /// empty, and including after [`digest`](Self::digest) calls.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::HashUpdateError`] if the provider rejects the
    /// update.
    pub fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        self.inner.update(data)
    }

    /// Finalizes a snapshot of the state and returns the MAC.
    ///
    /// Finalizes a duplicate of the inner state, then runs the outer hash
    /// `H(key ^ opad || inner_digest)`. The live inner state is left
    /// unchanged, so this is idempotent and repeatable, and subsequent
    /// [`update`](Self::update) calls continue the original message. The
    /// returned buffer is always exactly
    /// [`digest_size`](Self::digest_size) bytes.
    ///
    /// # Errors
    ///
    /// Returns a hash error if the underlying provider fails.
    pub fn digest(&self) -> Result<Vec<u8>, CryptoError> {
        let inner_digest = self.inner.digest()?;

        let mut outer = HashContext::new(self.mac_type.hash_algo(), None)?;
        outer.update(&self.opad_key)?;
        outer.update(&inner_digest)?;
        outer.digest()
    }

    /// Returns the MAC rendered as lowercase hexadecimal.
    ///
    /// Two characters per byte in byte order; length is exactly
    /// `2 * digest_size()`. Non-destructive like [`digest`](Self::digest).
    ///
    /// # Errors
    ///
    /// Returns a hash error if the underlying provider fails.
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

impl DigestOp for OsslHmacContext {
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        OsslHmacContext::update(self, data)
    }

    fn digest(&self) -> Result<Vec<u8>, CryptoError> {
        OsslHmacContext::digest(self)
    }

    fn digest_size(&self) -> usize {
        OsslHmacContext::digest_size(self)
    }
}

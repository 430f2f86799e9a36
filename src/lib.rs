// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Incremental cryptographic hash and HMAC contexts.
//!
//! This crate provides streaming digest contexts for the SHA-1 and SHA-2
//! family (SHA-256, SHA-384, SHA-512) and their HMAC variants, backed by the
//! platform cryptographic provider:
//!
//! - **Hash**: [`HashContext`] over a [`HashAlgo`] variant
//! - **HMAC**: [`HmacContext`] over an [`HmacType`] tag and a secret key
//!
//! # Lifecycle Contract
//!
//! Every context follows the same lifecycle:
//!
//! 1. Construct through a factory (`new` or a per-algorithm shorthand),
//!    optionally feeding an initial payload.
//! 2. Call [`update`](DigestOp::update) any number of times with chunks of
//!    any size, including empty.
//! 3. Call [`digest`](DigestOp::digest) or
//!    [`hexdigest`](DigestOp::hexdigest) at any point. Finalization runs on
//!    a duplicate of the live state, so the context stays live: further
//!    updates continue the original computation and repeated digests of an
//!    unchanged context are identical.
//! 4. [`copy`](HashContext::copy) (or `clone`) forks an independent context
//!    holding a byte-identical snapshot of the state; the two sides never
//!    affect each other afterward.
//!
//! There is no terminal state and no explicit teardown; contexts are
//! destroyed by ordinary ownership.
//!
//! # Thread Safety
//!
//! Contexts are not internally synchronized. Confine each context to one
//! thread, or synchronize externally. Operations on distinct contexts
//! (including a context and its copy) are fully independent.
//!
//! # Platform Support
//!
//! Unix targets use OpenSSL for the underlying block transforms. Other
//! targets are currently unsupported and fail at compile time.

mod hash;
mod hmac;
mod op;

pub use hash::*;
pub use hmac::*;
pub use op::*;
use thiserror::Error;

/// Error type for hash and HMAC operations.
///
/// Every operation in this crate is synchronous, local and deterministic;
/// these errors signal invalid cryptographic parameters or failures reported
/// by the underlying provider, never transient conditions. No operation
/// retries.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CryptoError {
    // Hash-related errors
    /// Hash context initialization failed.
    #[error("Hash initialization failed")]
    HashInitError,
    /// Hash update operation failed.
    #[error("Hash update failed")]
    HashUpdateError,
    /// Hash finalization failed.
    #[error("Hash finalization failed")]
    HashFinishError,

    // HMAC-related errors
    /// HMAC key is invalid for the key schedule (e.g. empty).
    #[error("HMAC invalid key size")]
    HmacInvalidKeySize,
    /// HMAC algorithm type identifier is not one of the recognized values.
    #[error("HMAC unsupported algorithm type")]
    HmacUnsupportedAlgorithm,
}

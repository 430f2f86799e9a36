// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Cryptographic hash function contexts.
//!
//! This module provides a unified incremental interface for SHA-1, SHA-256,
//! SHA-384 and SHA-512. The block transforms themselves are supplied by the
//! platform cryptographic provider; this layer owns the context lifecycle:
//! controlled construction, streaming updates, non-destructive finalization
//! and safe duplication.
//!
//! # Supported Hash Functions
//!
//! - **SHA-1**: 160-bit hash (deprecated for cryptographic use, provided for
//!   compatibility)
//! - **SHA-256**: 256-bit hash from the SHA-2 family
//! - **SHA-384**: 384-bit hash from the SHA-2 family
//! - **SHA-512**: 512-bit hash from the SHA-2 family
//!
//! # Security Considerations
//!
//! - **SHA-1**: Cryptographically broken, use only for non-security purposes
//! - **SHA-2 family**: Currently secure for cryptographic applications

use super::*;

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod hash_ossl;

        /// Hash context type for the current platform.
        pub type HashContext = hash_ossl::OsslHashContext;
    } else {
        compile_error!("Unsupported target OS for the hash implementation");
    }
}

/// Hash algorithm identity.
///
/// Each variant binds one published algorithm. The digest and block sizes
/// are architectural constants of the algorithms and derive only from the
/// variant identity; the primitive binding is selected from the variant at
/// context-creation time and stays fixed for the context's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashAlgo {
    /// SHA-1 (20-byte digest). Broken; compatibility only.
    Sha1,
    /// SHA-256 (32-byte digest).
    Sha256,
    /// SHA-384 (48-byte digest).
    Sha384,
    /// SHA-512 (64-byte digest).
    Sha512,
}

impl HashAlgo {
    /// Returns the digest size in bytes.
    ///
    /// - SHA-1: 20 bytes
    /// - SHA-256: 32 bytes
    /// - SHA-384: 48 bytes
    /// - SHA-512: 64 bytes
    pub const fn digest_size(self) -> usize {
        match self {
            HashAlgo::Sha1 => 20,
            HashAlgo::Sha256 => 32,
            HashAlgo::Sha384 => 48,
            HashAlgo::Sha512 => 64,
        }
    }

    /// Returns the input block size in bytes.
    ///
    /// This is the compression-function block size (64 bytes for SHA-1 and
    /// SHA-256, 128 bytes for SHA-384 and SHA-512), which the HMAC key
    /// schedule pads keys to.
    pub const fn block_size(self) -> usize {
        match self {
            HashAlgo::Sha1 | HashAlgo::Sha256 => 64,
            HashAlgo::Sha384 | HashAlgo::Sha512 => 128,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests;

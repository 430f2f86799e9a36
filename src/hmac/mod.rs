// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! HMAC (Hash-based Message Authentication Code) contexts.
//!
//! This module layers the keyed-MAC lifecycle on top of the same contract
//! as the unkeyed hash contexts: streaming updates, non-destructive
//! finalization and safe duplication. Initialization takes an algorithm
//! type tag and a secret key instead of nothing.
//!
//! # Supported Algorithms
//!
//! - **HMAC-SHA1**: Legacy algorithm (20-byte output, use with caution)
//! - **HMAC-SHA256**: Recommended for most applications (32-byte output)
//! - **HMAC-SHA384**: High security applications (48-byte output)
//! - **HMAC-SHA512**: Maximum security applications (64-byte output)
//!
//! # Security Considerations
//!
//! - Keys should be generated from cryptographically secure random data
//! - Key sizes should match or exceed the hash function's output size
//! - Retained key material is zeroized when a context is dropped

use super::*;

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod hmac_ossl;

        /// HMAC context type for the current platform.
        pub type HmacContext = hmac_ossl::OsslHmacContext;
    } else {
        compile_error!("Unsupported target OS for the HMAC implementation");
    }
}

/// HMAC algorithm type identifier.
///
/// The numeric values are the underlying primitive library's own algorithm
/// enumeration and are an opaque external contract: they are neither
/// monotonic nor gap-free (3 is skipped) and must be reproduced bit-for-bit
/// for interoperability, not cleaned up.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HmacType {
    /// HMAC over SHA-1.
    Sha1 = 1,
    /// HMAC over SHA-256.
    Sha256 = 2,
    /// HMAC over SHA-384.
    Sha384 = 5,
    /// HMAC over SHA-512.
    Sha512 = 4,
}

impl HmacType {
    /// Parses a raw type identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::HmacUnsupportedAlgorithm`] for any value
    /// other than the four recognized identifiers.
    pub fn from_raw(raw: u32) -> Result<Self, CryptoError> {
        match raw {
            1 => Ok(HmacType::Sha1),
            2 => Ok(HmacType::Sha256),
            5 => Ok(HmacType::Sha384),
            4 => Ok(HmacType::Sha512),
            _ => Err(CryptoError::HmacUnsupportedAlgorithm),
        }
    }

    /// Returns the raw type identifier expected by the primitive library.
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Returns the inner hash algorithm this tag selects.
    pub const fn hash_algo(self) -> HashAlgo {
        match self {
            HmacType::Sha1 => HashAlgo::Sha1,
            HmacType::Sha256 => HashAlgo::Sha256,
            HmacType::Sha384 => HashAlgo::Sha384,
            HmacType::Sha512 => HashAlgo::Sha512,
        }
    }

    /// Returns the digest size in bytes, equal to the inner hash's.
    pub const fn digest_size(self) -> usize {
        self.hash_algo().digest_size()
    }
}

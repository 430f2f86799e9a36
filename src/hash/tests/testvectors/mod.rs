// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Published known-answer vectors (FIPS 180-2 examples plus common
//! reference strings).

use super::HashTestVector;

pub const SHA1_TEST_VECTORS: &[HashTestVector] = &[
    HashTestVector {
        msg: b"",
        md: "da39a3ee5e6b4b0d3255bfef95601890afd80709",
    },
    HashTestVector {
        msg: b"abc",
        md: "a9993e364706816aba3e25717850c26c9cd0d89d",
    },
    HashTestVector {
        msg: b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        md: "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
    },
    HashTestVector {
        msg: b"The quick brown fox jumps over the lazy dog",
        md: "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
    },
];

pub const SHA256_TEST_VECTORS: &[HashTestVector] = &[
    HashTestVector {
        msg: b"",
        md: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    HashTestVector {
        msg: b"abc",
        md: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    HashTestVector {
        msg: b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        md: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    HashTestVector {
        msg: b"The quick brown fox jumps over the lazy dog",
        md: "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
    },
];

pub const SHA384_TEST_VECTORS: &[HashTestVector] = &[
    HashTestVector {
        msg: b"",
        md: "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da\
              274edebfe76f65fbd51ad2f14898b95b",
    },
    HashTestVector {
        msg: b"abc",
        md: "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
              8086072ba1e7cc2358baeca134c825a7",
    },
    HashTestVector {
        msg: b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno\
               ijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        md: "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712\
              fcc7c71a557e2db966c3e9fa91746039",
    },
    HashTestVector {
        msg: b"The quick brown fox jumps over the lazy dog",
        md: "ca737f1014a48f4c0b6dd43cb177b0afd9e5169367544c494011e3317dbf9a50\
              9cb1e5dc1e85a941bbee3d7f2afbc9b1",
    },
];

pub const SHA512_TEST_VECTORS: &[HashTestVector] = &[
    HashTestVector {
        msg: b"",
        md: "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
              47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
    },
    HashTestVector {
        msg: b"abc",
        md: "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
              2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
    },
    HashTestVector {
        msg: b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno\
               ijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        md: "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018\
              501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909",
    },
    HashTestVector {
        msg: b"The quick brown fox jumps over the lazy dog",
        md: "07e547d9586f6a73f73fbac0435ed76951218fb7d0c8d788a309d785436bbb64\
              2e93a252a954f23912547d1e8a3b5ed6e1bfd7097821233fa0538f3db854fee6",
    },
];

/// FIPS 180-2 appendix vector: one million repetitions of `a`.
pub const MILLION_A_SHA1: &str = "34aa973cd4c4daa4f61eeb2bdbad27316534016f";
pub const MILLION_A_SHA256: &str =
    "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0";
pub const MILLION_A_SHA384: &str =
    "9d0e1809716474cb086e834e310a4a1ced149e9c00f248527972cec5704c2a5b07b8b3dc38ecc4ebae97ddd87f3d8985";
pub const MILLION_A_SHA512: &str =
    "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973ebde0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b";

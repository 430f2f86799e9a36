// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

mod testvectors;


pub(crate) use testvectors::*;

use super::*;

/// Known-answer test vector: message bytes and expected digest in hex.
pub struct HashTestVector {
    pub msg: &'static [u8],
    pub md: &'static str,
}

/// Feeds `msg` through `update` in deliberately uneven chunks, so streaming
/// results are exercised across block boundaries.
pub(crate) fn update_chunked<C: DigestOp>(ctx: &mut C, msg: &[u8]) {
    let chunk_sizes = [1usize, 7, 5, 12, 2, 19, 60, 132];
    let mut cursor = 0usize;
    let mut chunk_index = 0usize;

    while cursor < msg.len() {
        let chunk_len = chunk_sizes[chunk_index % chunk_sizes.len()];
        chunk_index += 1;

        let end = (cursor + chunk_len).min(msg.len());
        ctx.update(&msg[cursor..end]).expect("chunked update");
        cursor = end;
    }
}

/// All hash variants, for property tests that range over the family.
pub(crate) const ALL_ALGOS: [HashAlgo; 4] = [
    HashAlgo::Sha1,
    HashAlgo::Sha256,
    HashAlgo::Sha384,
    HashAlgo::Sha512,
];

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use sha2::{Digest, Sha256};

/// SHA-256 of the empty tag. A domain given as this hash means "no domain".
pub const EMPTY_DOMAIN_HASH: [u8; 32] = [
    0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f, 0xb9, 0x24,
    0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b, 0x78, 0x52, 0xb8, 0x55,
];

/// Domain a signature is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SignatureDomain {
    #[default]
    Empty,
    /// Human-readable tag, hashed into the prefix.
    Tag(String),
    /// Pre-computed domain hash.
    Hash([u8; 32]),
}

impl SignatureDomain {
    /// The 32-byte prefix prepended to signing input, if any.
    pub fn prefix(&self) -> Option<[u8; 32]> {
        match self {
            SignatureDomain::Empty => None,
            SignatureDomain::Tag(tag) if tag.is_empty() => None,
            SignatureDomain::Tag(tag) => Some(Sha256::digest(tag.as_bytes()).into()),
            SignatureDomain::Hash(hash) if *hash == EMPTY_DOMAIN_HASH => None,
            SignatureDomain::Hash(hash) => Some(*hash),
        }
    }
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Domain-separated ed25519 signing.
//!
//! A [`SigningContext`] is built once from a [`SignatureDomain`] and passed
//! to every sign and verify call that must honour it.

mod domain;

pub use domain::{SignatureDomain, EMPTY_DOMAIN_HASH};

use ed25519_dalek::{Signature, SignatureError, Signer, SigningKey, Verifier, VerifyingKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SigningContext {
    prefix: Option<[u8; 32]>,
}

impl SigningContext {
    pub fn new(domain: &SignatureDomain) -> Self {
        Self {
            prefix: domain.prefix(),
        }
    }

    pub fn prefix(&self) -> Option<&[u8; 32]> {
        self.prefix.as_ref()
    }

    /// Bytes actually signed: the domain prefix, if any, followed by `data`.
    pub fn signing_input(&self, data: &[u8]) -> Vec<u8> {
        match &self.prefix {
            Some(prefix) => {
                let mut input = Vec::with_capacity(prefix.len() + data.len());
                input.extend_from_slice(prefix);
                input.extend_from_slice(data);
                input
            }
            None => data.to_vec(),
        }
    }

    pub fn sign(&self, key: &SigningKey, data: &[u8]) -> Signature {
        key.sign(&self.signing_input(data))
    }

    pub fn verify(&self, key: &VerifyingKey, data: &[u8], signature: &Signature) -> Result<(), SignatureError> {
        key.verify(&self.signing_input(data), signature)
    }
}

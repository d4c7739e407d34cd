//! Deterministic encoding of arbitrary messages as exponents.
//!
//! A message is hashed with SHA3-256, the digest is read as a big-endian integer, and the result
//! is reduced modulo the group order. Every operation that needs `H(m)` goes through
//! [`MessageEncoder::encode`], so the mapping is fixed once for the whole crate.
use crate::{group::GroupParameters, serde::SerializeHex};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};

/// A message encoded as an exponent in `[0, n)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedMessage(#[serde(with = "SerializeHex")] BigUint);

impl EncodedMessage {
    /// Construct an encoded message from a raw exponent, reducing it modulo the group order.
    ///
    /// This bypasses hashing and is meant for callers that already hold an exponent.
    pub fn from_exponent(params: &GroupParameters, e: BigUint) -> Self {
        Self(params.reduce(&e))
    }

    /// Get the exponent representing this message.
    pub fn as_exponent(&self) -> &BigUint {
        &self.0
    }
}

/// Maps messages to exponents for a fixed group.
#[derive(Debug, Clone, Copy)]
pub struct MessageEncoder<'a> {
    params: &'a GroupParameters,
}

impl<'a> MessageEncoder<'a> {
    /// Construct an encoder for the given group.
    pub fn new(params: &'a GroupParameters) -> Self {
        Self { params }
    }

    /// Encode a message as `SHA3-256(msg) mod n`.
    pub fn encode(&self, msg: &[u8]) -> EncodedMessage {
        let digested = Sha3_256::digest(msg);
        EncodedMessage::from_exponent(self.params, BigUint::from_bytes_be(&digested))
    }
}

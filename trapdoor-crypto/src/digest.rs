//! Functionality for binding public values into a 32-byte digest.
//!
//! A [`DigestBuilder`] absorbs raw bytes and any type implementing [`DigestInput`], then produces
//! a [`Digest256`]. Every component is framed by its length as a big-endian `u64`, so shifting
//! bytes from one component into its neighbour changes the digest. Group elements contribute
//! their hexadecimal text.

use crate::serde::to_hex;
use num_bigint::BigUint;
use sha3::{Digest, Sha3_256};

/// A trait implemented by types which can feed their public components into a [`DigestBuilder`].
pub trait DigestInput {
    /// Incorporate public components of this type into a [`DigestBuilder`].
    fn digest(&self, builder: &mut DigestBuilder);
}

impl<'a, T: DigestInput> DigestInput for &'a T {
    fn digest(&self, builder: &mut DigestBuilder) {
        (**self).digest(builder);
    }
}

impl DigestInput for BigUint {
    fn digest(&self, builder: &mut DigestBuilder) {
        builder.digest_bytes(to_hex(self));
    }
}

/// A 32-byte SHA3-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digest256([u8; 32]);

impl Digest256 {
    /// Retrieve the digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl AsRef<[u8]> for Digest256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Holds state used when building a [`Digest256`].
#[derive(Debug, Clone)]
pub struct DigestBuilder {
    hasher: Sha3_256,
}

impl Default for DigestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DigestBuilder {
    /// Initialize a new, empty digest.
    pub fn new() -> Self {
        Self {
            hasher: Sha3_256::new(),
        }
    }

    /// Incorporate public data from some given type into the digest.
    pub fn digest<T: DigestInput>(&mut self, object: &T) {
        object.digest(self);
    }

    /// A conveniently chainable variant of [`DigestBuilder::digest`].
    pub fn with<T: DigestInput>(mut self, object: &T) -> Self {
        object.digest(&mut self);
        self
    }

    /// Incorporate arbitrary bytes into the digest as one length-prefixed component.
    pub fn digest_bytes(&mut self, bytes: impl AsRef<[u8]>) {
        let bytes = bytes.as_ref();
        self.hasher.update((bytes.len() as u64).to_be_bytes());
        self.hasher.update(bytes);
    }

    /// A conveniently chainable variant of [`DigestBuilder::digest_bytes`].
    pub fn with_bytes(mut self, bytes: impl AsRef<[u8]>) -> Self {
        self.digest_bytes(bytes);
        self
    }

    /// Consume the builder and produce the accumulated [`Digest256`].
    pub fn finish(self) -> Digest256 {
        let mut digested = [0; 32];
        digested.copy_from_slice(self.hasher.finalize().as_ref());
        Digest256(digested)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn integers_digest_as_hex_text() {
        let from_integer = DigestBuilder::new()
            .with_bytes(b"message")
            .with(&BigUint::from(0xabcu32))
            .finish();
        let from_text = DigestBuilder::new()
            .with_bytes(b"message")
            .with_bytes(b"abc")
            .finish();
        assert_eq!(from_integer, from_text);
    }

    #[test]
    fn components_are_framed() {
        let digest = DigestBuilder::new()
            .with_bytes(b"message")
            .with(&BigUint::from(0xabcu32))
            .finish();
        let shifted = DigestBuilder::new()
            .with_bytes(b"messagea")
            .with(&BigUint::from(0xbcu32))
            .finish();
        assert_ne!(digest, shifted);

        let joined = DigestBuilder::new().with_bytes(b"messageabc").finish();
        assert_ne!(digest, joined);
    }

    #[test]
    fn empty_components_still_count() {
        assert_ne!(
            DigestBuilder::new().with_bytes(b"").finish(),
            DigestBuilder::new().finish()
        );
    }

    #[test]
    fn digest_depends_on_order() {
        let a = BigUint::from(1u8);
        let b = BigUint::from(2u8);
        assert_ne!(
            DigestBuilder::new().with(&a).with(&b).finish(),
            DigestBuilder::new().with(&b).with(&a).finish()
        );
    }
}

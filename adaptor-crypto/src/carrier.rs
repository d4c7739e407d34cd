/*!
Carrier signatures: the ordinary digital signature scheme wrapped by the adaptor layer.

The adaptor layer only ever signs 32-byte digests it has already computed, so carriers sign and
verify prehashed input. [`Ecdsa`] instantiates the capability with ECDSA over NIST P-256 using
deterministic nonces (RFC 6979). Signatures are exchanged as the hexadecimal encoding of their
fixed-width `r ‖ s` bytes.
*/
use crate::{Error, Rng};
use p256::ecdsa::{
    signature::hazmat::{PrehashSigner, PrehashVerifier},
    Signature, SigningKey, VerifyingKey,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    convert::{TryFrom, TryInto},
    fmt::{self, Debug},
    str::FromStr,
};
use tracing::warn;
use trapdoor_crypto::digest::Digest256;

/// Operations of a signature scheme over 32-byte digests.
pub trait CarrierSignature {
    /// Secret signing key.
    type SigningKey;
    /// Public verification key.
    type VerifyingKey: Clone + Debug;
    /// A signature on a digest.
    type Signature: Clone + Debug + PartialEq + Serialize + DeserializeOwned;

    /// Generate a fresh keypair, returning `(pk, sk)`.
    fn generate(&self, rng: &mut impl Rng) -> (Self::VerifyingKey, Self::SigningKey);

    /// Sign a digest.
    ///
    /// Failure is reported as [`Error::CarrierSignatureFailure`].
    fn sign(&self, sk: &Self::SigningKey, digest: &Digest256) -> Result<Self::Signature, Error>;

    /// Verify a signature on a digest.
    fn verify(&self, pk: &Self::VerifyingKey, digest: &Digest256, sig: &Self::Signature) -> bool;
}

/// ECDSA over NIST P-256.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ecdsa;

/// An ECDSA signature, serialized as the hexadecimal encoding of its 64-byte `r ‖ s` form.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EcdsaSignature(Signature);

impl EcdsaSignature {
    /// Convert to the fixed-width `r ‖ s` byte representation.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }

    /// Decode from the fixed-width `r ‖ s` byte representation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let bytes: [u8; 64] = bytes
            .try_into()
            .map_err(|_| Error::MalformedCarrierSignature)?;
        Signature::from_slice(&bytes)
            .map(Self)
            .map_err(|_| Error::MalformedCarrierSignature)
    }

    /// Encode as lowercase hexadecimal text.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Decode from hexadecimal text.
    pub fn from_hex(text: &str) -> Result<Self, Error> {
        let bytes = hex::decode(text).map_err(|_| Error::MalformedCarrierSignature)?;
        Self::from_bytes(&bytes)
    }
}

impl Debug for EcdsaSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EcdsaSignature({})", self.to_hex())
    }
}

impl fmt::Display for EcdsaSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for EcdsaSignature {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_hex(text)
    }
}

impl TryFrom<String> for EcdsaSignature {
    type Error = Error;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::from_hex(&text)
    }
}

impl From<EcdsaSignature> for String {
    fn from(sig: EcdsaSignature) -> Self {
        sig.to_hex()
    }
}

impl Ecdsa {
    /// Encode a verification key as hexadecimal SEC1 compressed bytes.
    pub fn public_key_to_hex(pk: &VerifyingKey) -> String {
        hex::encode(pk.to_encoded_point(true).as_bytes())
    }

    /// Decode a verification key from hexadecimal SEC1 bytes.
    pub fn public_key_from_hex(text: &str) -> Result<VerifyingKey, Error> {
        let bytes = hex::decode(text).map_err(|_| Error::MalformedCarrierSignature)?;
        VerifyingKey::from_sec1_bytes(&bytes).map_err(|_| Error::MalformedCarrierSignature)
    }
}

impl CarrierSignature for Ecdsa {
    type SigningKey = SigningKey;
    type VerifyingKey = VerifyingKey;
    type Signature = EcdsaSignature;

    fn generate(&self, rng: &mut impl Rng) -> (VerifyingKey, SigningKey) {
        let sk = SigningKey::random(rng);
        let pk = *sk.verifying_key();
        (pk, sk)
    }

    fn sign(&self, sk: &SigningKey, digest: &Digest256) -> Result<EcdsaSignature, Error> {
        let signature: Signature = sk.sign_prehash(digest.as_ref()).map_err(|err| {
            warn!(%err, "carrier signature failed");
            Error::CarrierSignatureFailure(err.to_string())
        })?;
        Ok(EcdsaSignature(signature))
    }

    fn verify(&self, pk: &VerifyingKey, digest: &Digest256, sig: &EcdsaSignature) -> bool {
        pk.verify_prehash(digest.as_ref(), &sig.0).is_ok()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use trapdoor_crypto::digest::DigestBuilder;

    #[test]
    fn sign_and_verify_digest() {
        let mut rng = crate::test::rng();
        let (pk, sk) = Ecdsa.generate(&mut rng);
        let digest = DigestBuilder::new().with_bytes(b"message").finish();
        let sig = Ecdsa.sign(&sk, &digest).unwrap();
        assert!(Ecdsa.verify(&pk, &digest, &sig));

        let other = DigestBuilder::new().with_bytes(b"massage").finish();
        assert!(!Ecdsa.verify(&pk, &other, &sig));

        let (other_pk, _) = Ecdsa.generate(&mut rng);
        assert!(!Ecdsa.verify(&other_pk, &digest, &sig));
    }

    #[test]
    fn signature_hex_round_trip() {
        let mut rng = crate::test::rng();
        let (_, sk) = Ecdsa.generate(&mut rng);
        let digest = DigestBuilder::new().with_bytes(b"message").finish();
        let sig = Ecdsa.sign(&sk, &digest).unwrap();

        let text = sig.to_hex();
        assert_eq!(text.len(), 128);
        assert_eq!(text.parse::<EcdsaSignature>().unwrap(), sig);

        let json = serde_json::to_string(&sig).unwrap();
        assert_eq!(json, format!("\"{}\"", text));
        assert_eq!(serde_json::from_str::<EcdsaSignature>(&json).unwrap(), sig);
    }

    #[test]
    fn malformed_signatures_are_rejected() {
        assert!(matches!(
            EcdsaSignature::from_hex("not hex"),
            Err(Error::MalformedCarrierSignature)
        ));
        assert!(matches!(
            EcdsaSignature::from_hex("abcd"),
            Err(Error::MalformedCarrierSignature)
        ));
        // r = s = 0 is not a valid signature
        assert!(matches!(
            EcdsaSignature::from_bytes(&[0; 64]),
            Err(Error::MalformedCarrierSignature)
        ));
    }

    #[test]
    fn public_key_hex_round_trip() {
        let mut rng = crate::test::rng();
        let (pk, _) = Ecdsa.generate(&mut rng);
        let text = Ecdsa::public_key_to_hex(&pk);
        assert_eq!(text.len(), 66);
        assert_eq!(Ecdsa::public_key_from_hex(&text).unwrap(), pk);
        assert!(Ecdsa::public_key_from_hex("02").is_err());
    }
}

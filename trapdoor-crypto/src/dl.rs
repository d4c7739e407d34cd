//! Discrete-log trapdoor commitments \[1\].
//!
//! Keys are formed as `ck = g^td mod p` for a trapdoor `td` chosen uniformly from `[0, n)`. A
//! commitment to a message `m` with opening `d` is `c = ck^H(m) * g^d mod p`, where `H` is the
//! [`MessageEncoder`]. Knowing `td`, an opening `(m0, d0)` of `c` can be turned into an opening
//! of `c` to any other message `m`:
//!
//! ```text
//! d = d0 + td * (H(m0) - H(m))  mod n
//! ```
//!
//! and two such openings reveal `td = (d - d0) / (H(m0) - H(m)) mod n`.
//!
//! ```
//! # use trapdoor_crypto::{DlCommitment, TrapdoorCommitment};
//! # let mut rng = rand::thread_rng();
//! let scheme = DlCommitment::default();
//! let (ck, td) = scheme.generate(&mut rng);
//! let (c, d0) = scheme.commit(&mut rng, &ck, b"0");
//! assert!(scheme.verify(&ck, &c, b"0", &d0));
//!
//! let d = scheme.trapdoor_open(&td, &c, b"0", &d0, b"message");
//! assert!(scheme.verify(&ck, &c, b"message", &d));
//! assert_eq!(scheme.extract(&ck, &c, b"0", &d0, b"message", &d), Ok(td));
//! ```
//!
//! Exponentiation uses the variable-time `modpow` from `num-bigint`; this module makes no
//! constant-time guarantees.
//!
//! ## References
//!
//! 1. Gilles Brassard, David Chaum, and Claude Crépeau. "Minimum disclosure proofs of
//!    knowledge". Journal of Computer and System Sciences, 1988.

use crate::{
    digest::{DigestBuilder, DigestInput},
    encoding::{EncodedMessage, MessageEncoder},
    group::GroupParameters,
    serde::{from_hex, to_hex, SerializeHex},
    trapdoor::TrapdoorCommitment,
    Error, Rng,
};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::{debug, trace};

/// Implement hexadecimal conversions for a newtype over [`BigUint`].
macro_rules! impl_hex_encoding {
    ($ty:ident) => {
        impl $ty {
            /// Construct from the integer representing this value.
            pub fn from_biguint(x: BigUint) -> Self {
                Self(x)
            }

            /// Get the integer representing this value.
            pub fn as_biguint(&self) -> &BigUint {
                &self.0
            }

            /// Encode as lowercase hexadecimal text.
            pub fn to_hex(&self) -> String {
                to_hex(&self.0)
            }

            /// Decode from hexadecimal text. This does not check membership in any group.
            pub fn from_hex(text: &str) -> Result<Self, Error> {
                from_hex(text).map(Self)
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(text: &str) -> Result<Self, Self::Err> {
                Self::from_hex(text)
            }
        }
    };
}

/// A public commitment key `ck = g^td mod p`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentKey(#[serde(with = "SerializeHex")] BigUint);

/// The trapdoor `td` for a [`CommitmentKey`].
///
/// **warning:** this is a secret; disclosing it lets anyone re-open commitments under the
/// matching key.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trapdoor(#[serde(with = "SerializeHex")] BigUint);

/// A commitment `c = ck^H(m) * g^d mod p`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment(#[serde(with = "SerializeHex")] BigUint);

/// Opening randomness `d` for a [`Commitment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opening(#[serde(with = "SerializeHex")] BigUint);

impl_hex_encoding!(CommitmentKey);
impl_hex_encoding!(Trapdoor);
impl_hex_encoding!(Commitment);
impl_hex_encoding!(Opening);

impl fmt::Debug for Trapdoor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Trapdoor(..)")
    }
}

impl fmt::Display for CommitmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Display for Opening {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl DigestInput for CommitmentKey {
    fn digest(&self, builder: &mut DigestBuilder) {
        builder.digest(&self.0);
    }
}

impl DigestInput for Commitment {
    fn digest(&self, builder: &mut DigestBuilder) {
        builder.digest(&self.0);
    }
}

/// Discrete-log instantiation of [`TrapdoorCommitment`] over a fixed group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DlCommitment {
    params: GroupParameters,
}

impl DlCommitment {
    /// Construct a commitment scheme over the given group.
    pub fn new(params: GroupParameters) -> Self {
        Self { params }
    }

    /// The group this scheme operates in.
    pub fn parameters(&self) -> &GroupParameters {
        &self.params
    }

    /// The message encoder for this scheme's group.
    pub fn encoder(&self) -> MessageEncoder<'_> {
        MessageEncoder::new(&self.params)
    }

    /// Check that a commitment key is a group element.
    pub fn validate_key(&self, ck: &CommitmentKey) -> Result<(), Error> {
        self.params.check_element(&ck.0, "commitment key")
    }

    /// Check that a commitment is a group element.
    pub fn validate_commitment(&self, commitment: &Commitment) -> Result<(), Error> {
        self.params.check_element(&commitment.0, "commitment")
    }

    /// Check that an opening is a reduced exponent.
    pub fn validate_opening(&self, opening: &Opening) -> Result<(), Error> {
        self.params.check_exponent(&opening.0, "opening")
    }

    /// Check that a trapdoor is a reduced exponent.
    pub fn validate_trapdoor(&self, td: &Trapdoor) -> Result<(), Error> {
        self.params.check_exponent(&td.0, "trapdoor")
    }

    /// Derive the commitment key for a trapdoor.
    pub fn commitment_key(&self, td: &Trapdoor) -> CommitmentKey {
        CommitmentKey(self.params.pow_generator(&td.0))
    }

    /// Form the commitment `ck^e * g^d mod p` for an already-encoded message `e`.
    pub fn commit_encoded(
        &self,
        ck: &CommitmentKey,
        msg: &EncodedMessage,
        opening: &Opening,
    ) -> Commitment {
        let keyed = self.params.pow(&ck.0, msg.as_exponent());
        let blinding = self.params.pow_generator(&opening.0);
        Commitment(self.params.mul(&keyed, &blinding))
    }

    /// Check an opening against an already-encoded message.
    ///
    /// Keys and commitments that are not group elements never verify, and neither do openings
    /// outside `[0, n)`.
    pub fn verify_encoded(
        &self,
        ck: &CommitmentKey,
        commitment: &Commitment,
        msg: &EncodedMessage,
        opening: &Opening,
    ) -> bool {
        if self.validate_key(ck).is_err()
            || self.validate_commitment(commitment).is_err()
            || self.validate_opening(opening).is_err()
        {
            return false;
        }
        self.commit_encoded(ck, msg, opening) == *commitment
    }

    /// Compute `d0 + td * (e0 - e) mod n`.
    pub fn trapdoor_open_encoded(
        &self,
        td: &Trapdoor,
        msg0: &EncodedMessage,
        opening0: &Opening,
        msg: &EncodedMessage,
    ) -> Opening {
        let delta = self
            .params
            .sub_exponents(msg0.as_exponent(), msg.as_exponent());
        let shift = self.params.mul_exponents(&td.0, &delta);
        Opening(
            self.params
                .add_exponents(&self.params.reduce(&opening0.0), &shift),
        )
    }

    /// Compute `(d - d0) * (e0 - e)^-1 mod n`.
    ///
    /// Fails with [`Error::DegenerateInput`] if `e0 - e` is not invertible modulo `n`, which
    /// includes the case `e0 == e`.
    pub fn extract_encoded(
        &self,
        msg0: &EncodedMessage,
        opening0: &Opening,
        msg: &EncodedMessage,
        opening: &Opening,
    ) -> Result<Trapdoor, Error> {
        let delta = self
            .params
            .sub_exponents(msg0.as_exponent(), msg.as_exponent());
        let inverse = match self.params.invert_exponent(&delta) {
            Some(inverse) => inverse,
            None => {
                debug!("message encodings leave no unique trapdoor");
                return Err(Error::DegenerateInput);
            }
        };
        let numerator = self.params.sub_exponents(&opening.0, &opening0.0);
        Ok(Trapdoor(self.params.mul_exponents(&numerator, &inverse)))
    }
}

impl TrapdoorCommitment for DlCommitment {
    type CommitmentKey = CommitmentKey;
    type Trapdoor = Trapdoor;
    type Commitment = Commitment;
    type Opening = Opening;

    fn generate(&self, rng: &mut impl Rng) -> (CommitmentKey, Trapdoor) {
        let td = Trapdoor(self.params.random_exponent(rng));
        let ck = self.commitment_key(&td);
        trace!(%ck, "generated commitment key");
        (ck, td)
    }

    fn commit(
        &self,
        rng: &mut impl Rng,
        ck: &CommitmentKey,
        msg: &[u8],
    ) -> (Commitment, Opening) {
        let opening = Opening(self.params.random_exponent(rng));
        let commitment = self.commit_encoded(ck, &self.encoder().encode(msg), &opening);
        trace!(%commitment, "committed to message");
        (commitment, opening)
    }

    fn verify(
        &self,
        ck: &CommitmentKey,
        commitment: &Commitment,
        msg: &[u8],
        opening: &Opening,
    ) -> bool {
        self.verify_encoded(ck, commitment, &self.encoder().encode(msg), opening)
    }

    fn trapdoor_open(
        &self,
        td: &Trapdoor,
        commitment: &Commitment,
        msg0: &[u8],
        opening0: &Opening,
        msg: &[u8],
    ) -> Opening {
        let encoder = self.encoder();
        let opening =
            self.trapdoor_open_encoded(td, &encoder.encode(msg0), opening0, &encoder.encode(msg));
        trace!(%commitment, %opening, "re-opened commitment with trapdoor");
        opening
    }

    fn extract(
        &self,
        _ck: &CommitmentKey,
        commitment: &Commitment,
        msg0: &[u8],
        opening0: &Opening,
        msg: &[u8],
        opening: &Opening,
    ) -> Result<Trapdoor, Error> {
        let encoder = self.encoder();
        let td =
            self.extract_encoded(&encoder.encode(msg0), opening0, &encoder.encode(msg), opening)?;
        trace!(%commitment, "extracted trapdoor from two openings");
        Ok(td)
    }

    fn matches(&self, ck: &CommitmentKey, td: &Trapdoor) -> bool {
        self.commitment_key(td) == *ck
    }
}

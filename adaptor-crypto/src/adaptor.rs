/*!
Adaptor signatures from trapdoor commitments.

## Signing

A complete signature on a message `m` under statement `Y` is a commitment `c` to `m` under the
commitment key `Y`, its opening `d`, and a carrier signature on `H256(m ‖ Y ‖ c)`. Verification
checks the opening and then the carrier signature.

## Pre-signing and adapting

A [`PreSignature`] commits to the fixed [`PLACEHOLDER_MESSAGE`] instead of `m`, but the carrier
signature still covers `H256(m ‖ Y ‖ c)` for the real message. The holder of the witness `y` for
`Y` can then [`adapt`](AdaptorSignature::adapt) the pre-signature by trapdoor-opening `c` to `m`:
the commitment and the carrier signature are reused unchanged, only the opening is replaced.

## Extracting

Given a pre-signature and its adaptation, the two openings of the same commitment reveal the
trapdoor of `Y`, which is the witness. [`extract`](AdaptorSignature::extract) requires that the
complete signature was adapted from the given pre-signature; a signature produced independently
with [`sign`](AdaptorSignature::sign) carries a different commitment and extraction from it is
meaningless. Commitments are never compared to check this.
*/
use crate::{carrier::CarrierSignature, Error, Rng, Verification};
use serde::{Deserialize, Serialize};
use tracing::debug;
use trapdoor_crypto::{
    digest::{Digest256, DigestBuilder},
    TrapdoorCommitment,
};

/// The message every pre-signature commits to before adaptation.
///
/// Messages that encode to the same exponent as the placeholder (including the placeholder
/// itself) can be pre-signed and adapted, but the witness cannot be extracted from them.
pub const PLACEHOLDER_MESSAGE: &[u8] = b"0";

/// The values shared by pre-signatures and complete signatures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
struct SignatureParts<T: TrapdoorCommitment, S: CarrierSignature> {
    carrier_signature: S::Signature,
    statement: T::CommitmentKey,
    commitment: T::Commitment,
    opening: T::Opening,
}

/// A pre-signature: a carrier signature bound to the real message, alongside a commitment and
/// opening to the [`PLACEHOLDER_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", transparent)]
pub struct PreSignature<T: TrapdoorCommitment, S: CarrierSignature>(SignatureParts<T, S>);

impl<T: TrapdoorCommitment, S: CarrierSignature> PreSignature<T, S> {
    /// The carrier signature on `H256(m ‖ Y ‖ c)`.
    pub fn carrier_signature(&self) -> &S::Signature {
        &self.0.carrier_signature
    }

    /// The statement `Y` this pre-signature is bound to.
    pub fn statement(&self) -> &T::CommitmentKey {
        &self.0.statement
    }

    /// The commitment `c` to the placeholder message.
    pub fn commitment(&self) -> &T::Commitment {
        &self.0.commitment
    }

    /// The opening `d0` of the commitment to the placeholder message.
    pub fn opening(&self) -> &T::Opening {
        &self.0.opening
    }
}

/// A complete signature: a carrier signature on `H256(m ‖ Y ‖ c)` and an opening of `c` to `m`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", transparent)]
pub struct CompleteSignature<T: TrapdoorCommitment, S: CarrierSignature>(SignatureParts<T, S>);

impl<T: TrapdoorCommitment, S: CarrierSignature> CompleteSignature<T, S> {
    /// The carrier signature on `H256(m ‖ Y ‖ c)`.
    pub fn carrier_signature(&self) -> &S::Signature {
        &self.0.carrier_signature
    }

    /// The statement `Y` this signature was produced under.
    pub fn statement(&self) -> &T::CommitmentKey {
        &self.0.statement
    }

    /// The commitment `c` to the signed message.
    pub fn commitment(&self) -> &T::Commitment {
        &self.0.commitment
    }

    /// The opening `d` of the commitment to the signed message.
    pub fn opening(&self) -> &T::Opening {
        &self.0.opening
    }
}

/// Operations of an adaptor signature scheme.
///
/// Statements and witnesses are passed explicitly to every operation that needs them; a scheme
/// value holds only public configuration and may be shared freely.
pub trait AdaptorSignature {
    /// Secret carrier signing key.
    type SigningKey;
    /// Public carrier verification key.
    type VerifyingKey;
    /// Public statement of the hard relation.
    type Statement;
    /// Secret witness for a [`AdaptorSignature::Statement`].
    type Witness;
    /// Pre-signature type.
    type PreSignature;
    /// Complete signature type.
    type Signature;

    /// Generate a carrier keypair `(pk, sk)`.
    fn generate(&self, rng: &mut impl Rng) -> (Self::VerifyingKey, Self::SigningKey);

    /// Generate a statement and its witness.
    fn generate_statement(&self, rng: &mut impl Rng) -> (Self::Statement, Self::Witness);

    /// Sign `msg` directly under `statement`.
    fn sign(
        &self,
        rng: &mut impl Rng,
        sk: &Self::SigningKey,
        msg: &[u8],
        statement: &Self::Statement,
    ) -> Result<Self::Signature, Error>;

    /// Verify a complete signature on `msg`.
    fn verify(&self, pk: &Self::VerifyingKey, msg: &[u8], sig: &Self::Signature) -> Verification;

    /// Produce a pre-signature on `msg` bound to `statement`.
    fn pre_sign(
        &self,
        rng: &mut impl Rng,
        sk: &Self::SigningKey,
        msg: &[u8],
        statement: &Self::Statement,
    ) -> Result<Self::PreSignature, Error>;

    /// Verify a pre-signature on `msg` bound to `statement`.
    fn pre_verify(
        &self,
        pk: &Self::VerifyingKey,
        msg: &[u8],
        statement: &Self::Statement,
        pre_sig: &Self::PreSignature,
    ) -> Verification;

    /// Turn a pre-signature into a complete signature using the witness for its statement.
    fn adapt(
        &self,
        pk: &Self::VerifyingKey,
        msg: &[u8],
        pre_sig: &Self::PreSignature,
        witness: &Self::Witness,
    ) -> Self::Signature;

    /// Recover the witness for `statement` from a pre-signature and its adaptation.
    fn extract(
        &self,
        pk: &Self::VerifyingKey,
        msg: &[u8],
        statement: &Self::Statement,
        pre_sig: &Self::PreSignature,
        sig: &Self::Signature,
    ) -> Result<Self::Witness, Error>;
}

/// Adaptor signatures built from any [`TrapdoorCommitment`] and any [`CarrierSignature`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrapdoorAdaptor<T, S> {
    commitment_scheme: T,
    carrier: S,
}

impl<T: TrapdoorCommitment, S: CarrierSignature> TrapdoorAdaptor<T, S> {
    /// Compose a commitment scheme and a carrier signature scheme.
    pub fn new(commitment_scheme: T, carrier: S) -> Self {
        Self {
            commitment_scheme,
            carrier,
        }
    }

    /// The underlying trapdoor commitment scheme.
    pub fn commitment_scheme(&self) -> &T {
        &self.commitment_scheme
    }

    /// The underlying carrier signature scheme.
    pub fn carrier(&self) -> &S {
        &self.carrier
    }

    /// Compute `H256(m ‖ Y ‖ c)`.
    fn binding_digest(
        msg: &[u8],
        statement: &T::CommitmentKey,
        commitment: &T::Commitment,
    ) -> Digest256 {
        DigestBuilder::new()
            .with_bytes(msg)
            .with(statement)
            .with(commitment)
            .finish()
    }

    /// Commit to `commit_msg` under `statement` and carrier-sign the digest over `sign_msg`.
    fn commit_and_sign(
        &self,
        rng: &mut impl Rng,
        sk: &S::SigningKey,
        commit_msg: &[u8],
        sign_msg: &[u8],
        statement: &T::CommitmentKey,
    ) -> Result<SignatureParts<T, S>, Error> {
        let (commitment, opening) = self.commitment_scheme.commit(rng, statement, commit_msg);
        let digest = Self::binding_digest(sign_msg, statement, &commitment);
        let carrier_signature = self.carrier.sign(sk, &digest)?;
        debug!(?commitment, "committed and signed");
        Ok(SignatureParts {
            carrier_signature,
            statement: statement.clone(),
            commitment,
            opening,
        })
    }

    /// Check that `parts` opens to `open_msg` under `statement`, then check the carrier
    /// signature over `H256(sign_msg ‖ statement ‖ c)`.
    fn verify_parts(
        &self,
        pk: &S::VerifyingKey,
        open_msg: &[u8],
        sign_msg: &[u8],
        statement: &T::CommitmentKey,
        parts: &SignatureParts<T, S>,
    ) -> Verification {
        if !self
            .commitment_scheme
            .verify(statement, &parts.commitment, open_msg, &parts.opening)
        {
            debug!(stage = "commitment", "verification failed");
            return Verification::Failed;
        }
        let digest = Self::binding_digest(sign_msg, statement, &parts.commitment);
        if !self
            .carrier
            .verify(pk, &digest, &parts.carrier_signature)
        {
            debug!(stage = "carrier", "verification failed");
            return Verification::Failed;
        }
        Verification::Verified
    }
}

impl<T: TrapdoorCommitment, S: CarrierSignature> AdaptorSignature for TrapdoorAdaptor<T, S> {
    type SigningKey = S::SigningKey;
    type VerifyingKey = S::VerifyingKey;
    type Statement = T::CommitmentKey;
    type Witness = T::Trapdoor;
    type PreSignature = PreSignature<T, S>;
    type Signature = CompleteSignature<T, S>;

    fn generate(&self, rng: &mut impl Rng) -> (S::VerifyingKey, S::SigningKey) {
        self.carrier.generate(rng)
    }

    fn generate_statement(&self, rng: &mut impl Rng) -> (T::CommitmentKey, T::Trapdoor) {
        self.commitment_scheme.generate(rng)
    }

    fn sign(
        &self,
        rng: &mut impl Rng,
        sk: &S::SigningKey,
        msg: &[u8],
        statement: &T::CommitmentKey,
    ) -> Result<CompleteSignature<T, S>, Error> {
        self.commit_and_sign(rng, sk, msg, msg, statement)
            .map(CompleteSignature)
    }

    fn verify(
        &self,
        pk: &S::VerifyingKey,
        msg: &[u8],
        sig: &CompleteSignature<T, S>,
    ) -> Verification {
        self.verify_parts(pk, msg, msg, sig.statement(), &sig.0)
    }

    fn pre_sign(
        &self,
        rng: &mut impl Rng,
        sk: &S::SigningKey,
        msg: &[u8],
        statement: &T::CommitmentKey,
    ) -> Result<PreSignature<T, S>, Error> {
        self.commit_and_sign(rng, sk, PLACEHOLDER_MESSAGE, msg, statement)
            .map(PreSignature)
    }

    fn pre_verify(
        &self,
        pk: &S::VerifyingKey,
        msg: &[u8],
        statement: &T::CommitmentKey,
        pre_sig: &PreSignature<T, S>,
    ) -> Verification {
        // Adaptation keeps the embedded statement, so it must be the one the caller expects.
        if pre_sig.statement() != statement {
            debug!(stage = "statement", "verification failed");
            return Verification::Failed;
        }
        self.verify_parts(pk, PLACEHOLDER_MESSAGE, msg, statement, &pre_sig.0)
    }

    fn adapt(
        &self,
        _pk: &S::VerifyingKey,
        msg: &[u8],
        pre_sig: &PreSignature<T, S>,
        witness: &T::Trapdoor,
    ) -> CompleteSignature<T, S> {
        let opening = self.commitment_scheme.trapdoor_open(
            witness,
            pre_sig.commitment(),
            PLACEHOLDER_MESSAGE,
            pre_sig.opening(),
            msg,
        );
        debug!(commitment = ?pre_sig.commitment(), "adapted pre-signature");
        CompleteSignature(SignatureParts {
            carrier_signature: pre_sig.carrier_signature().clone(),
            statement: pre_sig.statement().clone(),
            commitment: pre_sig.commitment().clone(),
            opening,
        })
    }

    fn extract(
        &self,
        _pk: &S::VerifyingKey,
        msg: &[u8],
        statement: &T::CommitmentKey,
        pre_sig: &PreSignature<T, S>,
        sig: &CompleteSignature<T, S>,
    ) -> Result<T::Trapdoor, Error> {
        let witness = self.commitment_scheme.extract(
            statement,
            sig.commitment(),
            PLACEHOLDER_MESSAGE,
            pre_sig.opening(),
            msg,
            sig.opening(),
        )?;
        debug!(commitment = ?sig.commitment(), "extracted witness");
        Ok(witness)
    }
}

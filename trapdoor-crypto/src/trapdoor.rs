//! The trapdoor commitment capability.
//!
//! A trapdoor commitment is a commitment scheme whose key `ck` is generated together with a
//! secret trapdoor `td`. Without `td` it is computationally binding; with `td` any commitment can
//! be re-opened to a different message. Conversely, two openings of the same commitment to
//! different messages reveal `td`.
//!
//! The capability satisfies:
//!
//! *Correctness*: `verify(ck, c, m, d)` holds for every `(c, d) = commit(ck, m)`.
//!
//! *Adaptability*: `verify(ck, c, m, trapdoor_open(td, c, m0, d0, m))` holds whenever
//! `verify(ck, c, m0, d0)` does.
//!
//! *Extractability*: `extract(ck, c, m0, d0, m, trapdoor_open(td, c, m0, d0, m))` returns `td`.

use crate::{digest::DigestInput, Error, Rng};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// Operations of a trapdoor commitment scheme over byte-string messages.
pub trait TrapdoorCommitment {
    /// Public commitment key; doubles as the statement of a hard relation.
    type CommitmentKey: Clone + Debug + PartialEq + Serialize + DeserializeOwned + DigestInput;
    /// Secret trapdoor matching a [`TrapdoorCommitment::CommitmentKey`]; doubles as a witness.
    type Trapdoor: Clone + Debug + PartialEq + Serialize + DeserializeOwned;
    /// A commitment value.
    type Commitment: Clone + Debug + PartialEq + Serialize + DeserializeOwned + DigestInput;
    /// Opening randomness for a commitment.
    type Opening: Clone + Debug + PartialEq + Serialize + DeserializeOwned;

    /// Generate a fresh commitment key and its trapdoor.
    fn generate(&self, rng: &mut impl Rng) -> (Self::CommitmentKey, Self::Trapdoor);

    /// Commit to `msg` under `ck`, returning the commitment and its opening.
    fn commit(
        &self,
        rng: &mut impl Rng,
        ck: &Self::CommitmentKey,
        msg: &[u8],
    ) -> (Self::Commitment, Self::Opening);

    /// Check that `opening` opens `commitment` to `msg` under `ck`.
    fn verify(
        &self,
        ck: &Self::CommitmentKey,
        commitment: &Self::Commitment,
        msg: &[u8],
        opening: &Self::Opening,
    ) -> bool;

    /// Derive an opening of `commitment` to `msg`, given the trapdoor and an existing opening
    /// `opening0` of the same commitment to `msg0`.
    fn trapdoor_open(
        &self,
        td: &Self::Trapdoor,
        commitment: &Self::Commitment,
        msg0: &[u8],
        opening0: &Self::Opening,
        msg: &[u8],
    ) -> Self::Opening;

    /// Recover the trapdoor from two openings of the same commitment to different messages.
    ///
    /// The result is only meaningful when both openings really open `commitment`; this is a
    /// precondition on the caller and is not checked.
    fn extract(
        &self,
        ck: &Self::CommitmentKey,
        commitment: &Self::Commitment,
        msg0: &[u8],
        opening0: &Self::Opening,
        msg: &[u8],
        opening: &Self::Opening,
    ) -> Result<Self::Trapdoor, Error>;

    /// Check that `td` is the trapdoor for `ck`.
    fn matches(&self, ck: &Self::CommitmentKey, td: &Self::Trapdoor) -> bool;
}

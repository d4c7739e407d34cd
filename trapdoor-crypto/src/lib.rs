//! This crate includes a trapdoor commitment scheme instantiated over a prime-order subgroup of
//! the multiplicative group of integers modulo a safe prime:
//! - [`GroupParameters`](group::GroupParameters) describing the group `(p, g, n)`.
//! - A deterministic [`MessageEncoder`](encoding::MessageEncoder) mapping messages to exponents.
//! - The [`TrapdoorCommitment`](trapdoor::TrapdoorCommitment) capability and its discrete-log
//!   instantiation [`DlCommitment`](dl::DlCommitment), which supports re-opening a commitment to
//!   a new message with the trapdoor and extracting the trapdoor from two openings.
//! - A [`DigestBuilder`](digest::DigestBuilder) for binding public values into a 32-byte hash.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(rustdoc::broken_intra_doc_links)]

pub mod digest;
pub mod dl;
pub mod encoding;
pub mod group;
pub mod trapdoor;

mod serde;

pub use crate::serde::SerializeHex;
pub use crate::{
    dl::{Commitment, CommitmentKey, DlCommitment, Opening, Trapdoor},
    encoding::{EncodedMessage, MessageEncoder},
    group::GroupParameters,
    trapdoor::TrapdoorCommitment,
};

use thiserror::*;

/// Error types that may arise from commitment operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Caused by extracting a trapdoor from two openings whose messages encode to the same
    /// exponent, or whose exponent difference has no inverse modulo the group order.
    #[error("message encodings collide modulo the group order; no unique trapdoor exists")]
    DegenerateInput,
    /// Caused by parsing text that is not a hexadecimal integer.
    #[error("invalid hexadecimal encoding: {0:?}")]
    InvalidEncoding(String),
    /// Caused by a value that is not a member of the set it claims to belong to.
    #[error("{what} is out of range for the group")]
    OutOfRange {
        /// The kind of value that failed the range check.
        what: &'static str,
    },
    /// Caused by group parameters that do not describe a usable cyclic group.
    #[error("invalid group parameters: {0}")]
    InvalidParameters(&'static str),
}

/// A trait synonym for a cryptographically secure random number generator. This trait is
/// blanket-implemented for all valid types and will never need to be implemented by-hand.
pub trait Rng: rand::CryptoRng + rand::RngCore {}
impl<T: rand::CryptoRng + rand::RngCore> Rng for T {}

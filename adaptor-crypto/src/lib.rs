/*!
This crate describes adaptor signatures built generically from a trapdoor commitment scheme and a
carrier signature scheme, instantiated with discrete-log trapdoor commitments from
`trapdoor-crypto` and ECDSA over NIST P-256.

A signer holding a carrier signing key can produce a _pre-signature_ bound to a public statement
`Y` (a commitment key). Anyone holding the witness `y` for `Y` (its trapdoor) can _adapt_ the
pre-signature into a complete signature, and anyone who sees both can _extract_ `y`.
*/
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(rustdoc::broken_intra_doc_links)]
pub mod adaptor;
pub mod carrier;
pub mod ecdsa;

pub use adaptor::{AdaptorSignature, CompleteSignature, PreSignature, TrapdoorAdaptor};
pub use carrier::{CarrierSignature, Ecdsa, EcdsaSignature};
pub use ecdsa::{EcdsaAdaptorSignature, EcdsaCompleteSignature, EcdsaPreSignature};

use thiserror::*;

pub use trapdoor_crypto::Rng;

/// Error types that may arise from adaptor signature operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Caused by a failure in the underlying trapdoor commitment scheme.
    #[error(transparent)]
    Commitment(#[from] trapdoor_crypto::Error),
    /// Caused by the carrier signature scheme failing to produce a signature.
    #[error("carrier signature failed: {0}")]
    CarrierSignatureFailure(String),
    /// Caused by decoding text or bytes that do not represent a carrier signature or key.
    #[error("malformed carrier signature encoding")]
    MalformedCarrierSignature,
}

/// The result of a verification of some property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the result of a verification should always be checked"]
pub enum Verification {
    /// A verification succeeded.
    Verified,
    /// A verification failed.
    Failed,
}

impl From<bool> for Verification {
    fn from(verified: bool) -> Self {
        if verified {
            Verification::Verified
        } else {
            Verification::Failed
        }
    }
}

impl Verification {
    /// Whether the verification succeeded.
    pub fn is_verified(self) -> bool {
        matches!(self, Verification::Verified)
    }
}

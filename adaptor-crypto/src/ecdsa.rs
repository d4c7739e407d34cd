//! Adaptor signatures with discrete-log trapdoor commitments and ECDSA over P-256.
//!
//! ```
//! # use adaptor_crypto::{AdaptorSignature, EcdsaAdaptorSignature};
//! # let mut rng = rand::thread_rng();
//! let scheme = EcdsaAdaptorSignature::default();
//! let (pk, sk) = scheme.generate(&mut rng);
//! let (statement, witness) = scheme.generate_statement(&mut rng);
//!
//! let msg = b"swap 1 coin for 2 tokens";
//! let pre_sig = scheme.pre_sign(&mut rng, &sk, msg, &statement).unwrap();
//! assert!(scheme.pre_verify(&pk, msg, &statement, &pre_sig).is_verified());
//!
//! let sig = scheme.adapt(&pk, msg, &pre_sig, &witness);
//! assert!(scheme.verify(&pk, msg, &sig).is_verified());
//! assert_eq!(scheme.extract(&pk, msg, &statement, &pre_sig, &sig).unwrap(), witness);
//! ```
use crate::{
    adaptor::{CompleteSignature, PreSignature, TrapdoorAdaptor},
    carrier::Ecdsa,
};
use trapdoor_crypto::{DlCommitment, GroupParameters};

/// Adaptor signature scheme over [`DlCommitment`] and [`Ecdsa`].
pub type EcdsaAdaptorSignature = TrapdoorAdaptor<DlCommitment, Ecdsa>;

/// A pre-signature produced by [`EcdsaAdaptorSignature`].
pub type EcdsaPreSignature = PreSignature<DlCommitment, Ecdsa>;

/// A complete signature produced by [`EcdsaAdaptorSignature`].
pub type EcdsaCompleteSignature = CompleteSignature<DlCommitment, Ecdsa>;

impl TrapdoorAdaptor<DlCommitment, Ecdsa> {
    /// Construct the scheme with statements drawn from the given group.
    pub fn with_parameters(params: GroupParameters) -> Self {
        Self::new(DlCommitment::new(params), Ecdsa)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{adaptor::PLACEHOLDER_MESSAGE, AdaptorSignature, Error, Verification};
    use trapdoor_crypto::TrapdoorCommitment;

    #[test]
    fn sign_then_verify() {
        let mut rng = crate::test::rng();
        let scheme = EcdsaAdaptorSignature::default();
        let (pk, sk) = scheme.generate(&mut rng);
        let (statement, _) = scheme.generate_statement(&mut rng);

        let sig = scheme.sign(&mut rng, &sk, b"message", &statement).unwrap();
        assert_eq!(scheme.verify(&pk, b"message", &sig), Verification::Verified);
        assert_eq!(scheme.verify(&pk, b"massage", &sig), Verification::Failed);
    }

    #[test]
    fn pre_sign_adapt_extract() {
        let mut rng = crate::test::rng();
        let scheme = EcdsaAdaptorSignature::default();
        let (pk, sk) = scheme.generate(&mut rng);
        let (statement, witness) = scheme.generate_statement(&mut rng);

        let pre_sig = scheme
            .pre_sign(&mut rng, &sk, b"message", &statement)
            .unwrap();
        assert!(scheme
            .pre_verify(&pk, b"message", &statement, &pre_sig)
            .is_verified());

        let sig = scheme.adapt(&pk, b"message", &pre_sig, &witness);
        assert!(scheme.verify(&pk, b"message", &sig).is_verified());

        // Only the opening changes during adaptation.
        assert_eq!(sig.carrier_signature(), pre_sig.carrier_signature());
        assert_eq!(sig.commitment(), pre_sig.commitment());
        assert_eq!(sig.statement(), pre_sig.statement());
        assert_ne!(sig.opening(), pre_sig.opening());

        let extracted = scheme
            .extract(&pk, b"message", &statement, &pre_sig, &sig)
            .unwrap();
        assert_eq!(extracted, witness);
        assert!(scheme.commitment_scheme().matches(&statement, &extracted));
    }

    #[test]
    fn pre_signature_is_not_a_signature() {
        let mut rng = crate::test::rng();
        let scheme = EcdsaAdaptorSignature::default();
        let (pk, sk) = scheme.generate(&mut rng);
        let (statement, _) = scheme.generate_statement(&mut rng);

        let pre_sig = scheme
            .pre_sign(&mut rng, &sk, b"message", &statement)
            .unwrap();
        let json = serde_json::to_string(&pre_sig).unwrap();
        let as_complete: EcdsaCompleteSignature = serde_json::from_str(&json).unwrap();
        assert_eq!(
            scheme.verify(&pk, b"message", &as_complete),
            Verification::Failed
        );
    }

    #[test]
    fn adapting_with_wrong_witness_fails_verification() {
        let mut rng = crate::test::rng();
        let scheme = EcdsaAdaptorSignature::default();
        let (pk, sk) = scheme.generate(&mut rng);
        let (statement, _) = scheme.generate_statement(&mut rng);
        let (_, other_witness) = scheme.generate_statement(&mut rng);

        let pre_sig = scheme
            .pre_sign(&mut rng, &sk, b"message", &statement)
            .unwrap();
        let sig = scheme.adapt(&pk, b"message", &pre_sig, &other_witness);
        assert_eq!(scheme.verify(&pk, b"message", &sig), Verification::Failed);
    }

    #[test]
    fn pre_verify_rejects_wrong_statement_and_key() {
        let mut rng = crate::test::rng();
        let scheme = EcdsaAdaptorSignature::default();
        let (pk, sk) = scheme.generate(&mut rng);
        let (other_pk, _) = scheme.generate(&mut rng);
        let (statement, _) = scheme.generate_statement(&mut rng);
        let (other_statement, _) = scheme.generate_statement(&mut rng);

        let pre_sig = scheme
            .pre_sign(&mut rng, &sk, b"message", &statement)
            .unwrap();
        assert_eq!(
            scheme.pre_verify(&pk, b"message", &other_statement, &pre_sig),
            Verification::Failed
        );
        assert_eq!(
            scheme.pre_verify(&other_pk, b"message", &statement, &pre_sig),
            Verification::Failed
        );
        assert_eq!(
            scheme.pre_verify(&pk, b"other message", &statement, &pre_sig),
            Verification::Failed
        );
    }

    #[test]
    fn pre_verify_rejects_substituted_statement() {
        let mut rng = crate::test::rng();
        let scheme = EcdsaAdaptorSignature::default();
        let (pk, sk) = scheme.generate(&mut rng);
        let (statement, witness) = scheme.generate_statement(&mut rng);
        let (other_statement, _) = scheme.generate_statement(&mut rng);

        let pre_sig = scheme
            .pre_sign(&mut rng, &sk, b"message", &statement)
            .unwrap();
        let mut json = serde_json::to_value(&pre_sig).unwrap();
        json["statement"] = serde_json::Value::String(other_statement.to_hex());
        let substituted: EcdsaPreSignature = serde_json::from_value(json).unwrap();

        assert_eq!(
            scheme.pre_verify(&pk, b"message", &statement, &substituted),
            Verification::Failed
        );
        // Adapting it would have carried the wrong statement into the signature.
        let sig = scheme.adapt(&pk, b"message", &substituted, &witness);
        assert_eq!(scheme.verify(&pk, b"message", &sig), Verification::Failed);
    }

    #[test]
    fn placeholder_message_cannot_be_extracted() {
        let mut rng = crate::test::rng();
        let scheme = EcdsaAdaptorSignature::default();
        let (pk, sk) = scheme.generate(&mut rng);
        let (statement, witness) = scheme.generate_statement(&mut rng);

        let pre_sig = scheme
            .pre_sign(&mut rng, &sk, PLACEHOLDER_MESSAGE, &statement)
            .unwrap();
        let sig = scheme.adapt(&pk, PLACEHOLDER_MESSAGE, &pre_sig, &witness);
        assert!(scheme.verify(&pk, PLACEHOLDER_MESSAGE, &sig).is_verified());
        assert!(matches!(
            scheme.extract(&pk, PLACEHOLDER_MESSAGE, &statement, &pre_sig, &sig),
            Err(Error::Commitment(trapdoor_crypto::Error::DegenerateInput))
        ));
    }
}

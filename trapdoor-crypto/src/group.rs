//! Cyclic group descriptions for discrete-log commitments.
//!
//! A [`GroupParameters`] fixes a prime modulus `p`, a generator `g`, and the order `n` of the
//! subgroup generated by `g`. Group elements live in `[1, p)`; exponents live in `[0, n)` and all
//! exponent arithmetic (subtraction, inversion) is carried out modulo `n`.
//!
//! The default parameters are the 2048-bit MODP group from RFC 3526 \[1\], restricted to its
//! prime-order subgroup of quadratic residues: `p` is a safe prime, `n = (p - 1) / 2` is prime,
//! and `g = 2` generates the order-`n` subgroup.
//!
//! ## References
//!
//! 1. T. Kivinen and M. Kojo. "More Modular Exponential (MODP) Diffie-Hellman groups for Internet
//!    Key Exchange (IKE)". RFC 3526. 2003. URL: <https://www.rfc-editor.org/rfc/rfc3526>

use crate::{serde::SerializeHex, Error, Rng};
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// The 2048-bit MODP prime from RFC 3526, section 3.
const MODP_2048_PRIME: &str = "\
    FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1\
    29024E088A67CC74020BBEA63B139B22514A08798E3404DD\
    EF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245\
    E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED\
    EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3D\
    C2007CB8A163BF0598DA48361C55D39A69163FA8FD24CF5F\
    83655D23DCA3AD961C62F356208552BB9ED529077096966D\
    670C354E4ABC9804F1746C08CA18217C32905E462E36CE3B\
    E39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9\
    DE2BCBF6955817183995497CEA956AE515D2261898FA0510\
    15728E5A8AACAA68FFFFFFFFFFFFFFFF";

/// Description of a cyclic group used for commitments.
///
/// Parameters are read-only after construction; every constructor (including deserialization)
/// validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedGroupParameters")]
pub struct GroupParameters {
    #[serde(with = "SerializeHex")]
    p: BigUint,
    #[serde(with = "SerializeHex")]
    g: BigUint,
    #[serde(with = "SerializeHex")]
    n: BigUint,
}

#[derive(Debug, Deserialize)]
struct UncheckedGroupParameters {
    #[serde(with = "SerializeHex")]
    p: BigUint,
    #[serde(with = "SerializeHex")]
    g: BigUint,
    #[serde(with = "SerializeHex")]
    n: BigUint,
}

impl TryFrom<UncheckedGroupParameters> for GroupParameters {
    type Error = Error;

    fn try_from(unchecked: UncheckedGroupParameters) -> Result<Self, Self::Error> {
        Self::new(unchecked.p, unchecked.g, unchecked.n)
    }
}

impl Default for GroupParameters {
    fn default() -> Self {
        Self::modp_2048()
    }
}

impl GroupParameters {
    /// Construct group parameters from a modulus `p`, a generator `g`, and the order `n` of `g`.
    ///
    /// Fails if `p` is too small, `g` is not a non-trivial element of the group, or `g^n` is not
    /// the identity. Primality of `p` is the caller's responsibility.
    pub fn new(p: BigUint, g: BigUint, n: BigUint) -> Result<Self, Error> {
        if p <= BigUint::from(3u8) {
            return Err(Error::InvalidParameters("modulus must be greater than 3"));
        }
        if g <= BigUint::one() || g >= p {
            return Err(Error::InvalidParameters("generator must lie in (1, p)"));
        }
        if n <= BigUint::one() {
            return Err(Error::InvalidParameters("group order must be greater than 1"));
        }
        if !g.modpow(&n, &p).is_one() {
            return Err(Error::InvalidParameters(
                "generator raised to the group order must be 1",
            ));
        }
        Ok(Self { p, g, n })
    }

    /// The 2048-bit MODP group from RFC 3526 with generator `2` and prime order `(p - 1) / 2`.
    pub fn modp_2048() -> Self {
        let p = BigUint::parse_bytes(MODP_2048_PRIME.as_bytes(), 16)
            .expect("constant modulus is valid hexadecimal");
        let n = (&p - 1u32) / 2u32;
        Self {
            p,
            g: BigUint::from(2u8),
            n,
        }
    }

    /// The prime modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// The generator `g`.
    pub fn generator(&self) -> &BigUint {
        &self.g
    }

    /// The order `n` of the subgroup generated by `g`; the modulus for exponent arithmetic.
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// Check that `x` is a group element, i.e. lies in `[1, p)`.
    pub fn check_element(&self, x: &BigUint, what: &'static str) -> Result<(), Error> {
        if x.is_zero() || x >= &self.p {
            Err(Error::OutOfRange { what })
        } else {
            Ok(())
        }
    }

    /// Check that `x` is a reduced exponent, i.e. lies in `[0, n)`.
    pub fn check_exponent(&self, x: &BigUint, what: &'static str) -> Result<(), Error> {
        if x >= &self.n {
            Err(Error::OutOfRange { what })
        } else {
            Ok(())
        }
    }

    /// Sample an exponent uniformly at random from `[0, n)`.
    pub(crate) fn random_exponent(&self, rng: &mut impl Rng) -> BigUint {
        rng.gen_biguint_below(&self.n)
    }

    /// Compute `g^e mod p`.
    pub(crate) fn pow_generator(&self, e: &BigUint) -> BigUint {
        self.g.modpow(e, &self.p)
    }

    /// Compute `base^e mod p`.
    pub(crate) fn pow(&self, base: &BigUint, e: &BigUint) -> BigUint {
        base.modpow(e, &self.p)
    }

    /// Compute `a * b mod p`.
    pub(crate) fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    /// Reduce an exponent modulo `n`.
    pub(crate) fn reduce(&self, e: &BigUint) -> BigUint {
        e % &self.n
    }

    /// Compute `(a + b) mod n`.
    pub(crate) fn add_exponents(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.n
    }

    /// Compute `(a - b) mod n` without leaving the unsigned integers.
    pub(crate) fn sub_exponents(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce(a);
        let b = self.reduce(b);
        (a + &self.n - b) % &self.n
    }

    /// Compute `(a * b) mod n`.
    pub(crate) fn mul_exponents(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.n
    }

    /// Compute the inverse of `a` modulo `n`, if it exists.
    pub(crate) fn invert_exponent(&self, a: &BigUint) -> Option<BigUint> {
        let a = self.reduce(a);
        if a.is_zero() {
            return None;
        }
        a.modinv(&self.n)
    }
}

//! Key generation
//!
//! A private key is a scalar drawn uniformly from [1, p-1] and the public key
//! is that multiple of the curve's base point. Scalars are bounded by the field
//! modulus, not by the order of G.

use crate::elliptic_curve::{Curve, Point};
use crate::error::{EccError, EccResult};
use num_bigint::{BigInt, RandBigInt};
use num_traits::{One, Signed};
use rand::Rng;

/// A private scalar and its public point on one curve
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    private: BigInt,
    public: Point,
}

impl KeyPair {
    /// Derives the public point for a known private scalar
    ///
    /// # Errors
    /// Returns [`EccError::InvalidScalar`] if `private <= 0`.
    pub fn from_private(curve: &Curve, private: BigInt) -> EccResult<Self> {
        if !private.is_positive() {
            return Err(EccError::InvalidScalar(private));
        }
        let public = curve.scalar_mul(&private, curve.base_point())?;
        Ok(Self { private, public })
    }

    pub fn private_key(&self) -> &BigInt {
        &self.private
    }

    pub fn public_key(&self) -> &Point {
        &self.public
    }
}

/// Draws a scalar uniformly from [1, p-1]
pub fn random_scalar<R: Rng + ?Sized>(curve: &Curve, rng: &mut R) -> BigInt {
    rng.gen_bigint_range(&BigInt::one(), curve.modulus())
}

/// Generates a fresh keypair on `curve`
pub fn generate_keypair<R: Rng + ?Sized>(curve: &Curve, rng: &mut R) -> EccResult<KeyPair> {
    let private = random_scalar(curve, rng);
    let keypair = KeyPair::from_private(curve, private)?;
    log::debug!("generated keypair on {}", curve.name());
    Ok(keypair)
}

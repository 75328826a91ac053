//! Prime field arithmetic over F_p
//!
//! Field elements are plain `BigInt` values kept in `[0, p)`. The modulus is
//! supplied per call so the same helpers serve every curve.

use crate::error::{EccError, EccResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Reduces `value` into `[0, p)`, also for negative inputs
pub fn modulo(value: &BigInt, p: &BigInt) -> BigInt {
    value.mod_floor(p)
}

/// Extended Euclidean algorithm: returns (gcd, x, y) where gcd = a*x + b*y
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);

        let next_t = &old_t - &q * &t;
        old_t = std::mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

/// Modular inverse: k^(-1) mod p
///
/// `k` is reduced into `[0, p)` first, so negative values and values larger
/// than the modulus are accepted.
///
/// # Errors
/// - [`EccError::DivisionByZero`] if `k ≡ 0 (mod p)`
/// - [`EccError::NotInvertible`] if `gcd(k, p) != 1`, which can only happen
///   when `p` is not prime
pub fn mod_inverse(k: &BigInt, p: &BigInt) -> EccResult<BigInt> {
    let k = modulo(k, p);
    if k.is_zero() {
        return Err(EccError::DivisionByZero);
    }

    let (gcd, x, _) = extended_gcd(&k, p);
    if !gcd.is_one() {
        return Err(EccError::NotInvertible {
            value: k,
            modulus: p.clone(),
        });
    }

    Ok(modulo(&x, p))
}

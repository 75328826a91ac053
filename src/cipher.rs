//! Triple-curve ElGamal-style cipher
//!
//! Every character of a message is encrypted independently under each of the
//! three curves. For a code point m, a public key Y and a fresh nonce k:
//!
//! ```text
//! R = [k]G
//! S = [k]Y
//! C = (m + S.x) mod p
//! ```
//!
//! Decryption recomputes S = [x]R from the private key x and returns
//! (C - S.x) mod p. Each curve's ciphertext is self-sufficient, so decryption
//! yields three independent copies of the plaintext.

use crate::elliptic_curve::{Curve, Point};
use crate::encoding;
use crate::error::{EccError, EccResult};
use crate::keypair::{KeyPair, generate_keypair, random_scalar};
use num_bigint::BigInt;
use rand::Rng;
use rayon::prelude::*;

/// Number of curves a message is encrypted under
pub const CURVE_COUNT: usize = 3;

/// Ciphertext of one message under one curve: one (R, C) pair per character
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CurveCiphertext {
    ephemeral: Vec<Point>,
    masked: Vec<BigInt>,
}

impl CurveCiphertext {
    /// Pairs ephemeral points with masked values
    ///
    /// # Errors
    /// Returns [`EccError::MalformedCiphertext`] if the lengths differ.
    pub fn new(ephemeral: Vec<Point>, masked: Vec<BigInt>) -> EccResult<Self> {
        if ephemeral.len() != masked.len() {
            return Err(EccError::MalformedCiphertext(format!(
                "{} ephemeral points for {} masked values",
                ephemeral.len(),
                masked.len()
            )));
        }
        Ok(Self { ephemeral, masked })
    }

    pub fn ephemeral_points(&self) -> &[Point] {
        &self.ephemeral
    }

    pub fn masked_values(&self) -> &[BigInt] {
        &self.masked
    }

    pub fn len(&self) -> usize {
        self.masked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masked.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Point>, Vec<BigInt>) {
        (self.ephemeral, self.masked)
    }
}

/// One message encrypted under all three curves
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripleCiphertext {
    parts: [CurveCiphertext; CURVE_COUNT],
}

impl TripleCiphertext {
    pub fn new(parts: [CurveCiphertext; CURVE_COUNT]) -> Self {
        Self { parts }
    }

    pub fn parts(&self) -> &[CurveCiphertext; CURVE_COUNT] {
        &self.parts
    }

    pub fn part(&self, index: usize) -> Option<&CurveCiphertext> {
        self.parts.get(index)
    }

    /// Number of encrypted characters (taken from the first curve)
    pub fn char_count(&self) -> usize {
        self.parts[0].len()
    }

    pub fn into_parts(self) -> [CurveCiphertext; CURVE_COUNT] {
        self.parts
    }
}

fn shared_x(curve: &Curve, scalar: &BigInt, point: &Point) -> EccResult<BigInt> {
    match curve.scalar_mul(scalar, point)? {
        Point::Affine { x, .. } => Ok(x),
        Point::Infinity => Err(EccError::DegenerateSharedSecret {
            curve: curve.name().to_string(),
        }),
    }
}

/// Encrypts one code point under one curve with the given nonce
///
/// Returns the ephemeral point R = [k]G and the masked value (m + S.x) mod p.
pub fn encrypt_code_point(
    curve: &Curve,
    public_key: &Point,
    code_point: u32,
    nonce: &BigInt,
) -> EccResult<(Point, BigInt)> {
    let ephemeral = curve.scalar_mul(nonce, curve.base_point())?;
    let sx = shared_x(curve, nonce, public_key)?;
    let masked = (BigInt::from(code_point) + sx) % curve.modulus();
    Ok((ephemeral, masked))
}

/// Recovers the integer hidden in one (R, C) pair
pub fn decrypt_code_point(
    curve: &Curve,
    private_key: &BigInt,
    ephemeral: &Point,
    masked: &BigInt,
) -> EccResult<BigInt> {
    if !curve.contains(ephemeral) {
        return Err(EccError::MalformedCiphertext(format!(
            "ephemeral point {} is not on {}",
            ephemeral,
            curve.name()
        )));
    }
    let sx = shared_x(curve, private_key, ephemeral)?;
    Ok(crate::field::modulo(&(masked - sx), curve.modulus()))
}

fn encrypt_curve(
    curve: &Curve,
    public_key: &Point,
    codes: &[u32],
    nonces: &[BigInt],
    parallel: bool,
) -> EccResult<CurveCiphertext> {
    let pairs: Vec<(Point, BigInt)> = if parallel {
        codes
            .par_iter()
            .zip(nonces.par_iter())
            .map(|(&m, k)| encrypt_code_point(curve, public_key, m, k))
            .collect::<EccResult<_>>()?
    } else {
        codes
            .iter()
            .zip(nonces)
            .map(|(&m, k)| encrypt_code_point(curve, public_key, m, k))
            .collect::<EccResult<_>>()?
    };
    log::debug!("encrypted {} characters on {}", pairs.len(), curve.name());

    let (ephemeral, masked) = pairs.into_iter().unzip();
    Ok(CurveCiphertext { ephemeral, masked })
}

fn decrypt_curve(
    curve: &Curve,
    private_key: &BigInt,
    part: &CurveCiphertext,
    parallel: bool,
) -> EccResult<String> {
    let values: Vec<BigInt> = if parallel {
        part.ephemeral
            .par_iter()
            .zip(part.masked.par_iter())
            .map(|(r, c)| decrypt_code_point(curve, private_key, r, c))
            .collect::<EccResult<_>>()?
    } else {
        part.ephemeral
            .iter()
            .zip(&part.masked)
            .map(|(r, c)| decrypt_code_point(curve, private_key, r, c))
            .collect::<EccResult<_>>()?
    };
    log::debug!("decrypted {} characters on {}", values.len(), curve.name());

    Ok(encoding::decode_lossy(&values))
}

fn into_array<T>(items: Vec<T>) -> EccResult<[T; CURVE_COUNT]> {
    let len = items.len();
    items.try_into().map_err(|_| {
        EccError::MalformedCiphertext(format!("expected {} curves, got {}", CURVE_COUNT, len))
    })
}

/// Encrypts and decrypts messages under three curves at once
#[derive(Clone, Debug)]
pub struct TripleCurveCipher {
    curves: [Curve; CURVE_COUNT],
    parallel: bool,
}

impl TripleCurveCipher {
    /// Cipher over arbitrary curves; point arithmetic runs in parallel by default
    pub fn new(curves: [Curve; CURVE_COUNT]) -> Self {
        Self {
            curves,
            parallel: true,
        }
    }

    /// Cipher over the built-in curves A, B and C
    pub fn standard() -> Self {
        Self::new(crate::curves::CurveId::ALL.map(|id| id.curve().clone()))
    }

    /// Switches between rayon-parallel and sequential point arithmetic
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn curves(&self) -> &[Curve; CURVE_COUNT] {
        &self.curves
    }

    /// One fresh keypair per curve, in curve order
    pub fn generate_keypairs<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> EccResult<[KeyPair; CURVE_COUNT]> {
        let keypairs = self
            .curves
            .iter()
            .map(|curve| generate_keypair(curve, rng))
            .collect::<EccResult<Vec<_>>>()?;
        into_array(keypairs)
    }

    /// Encrypts `message` under each curve's public key
    ///
    /// Nonces are drawn from `rng` before any point arithmetic, curve by curve
    /// in character order, so a seeded generator gives the same ciphertext in
    /// parallel and sequential mode.
    ///
    /// # Errors
    /// - [`EccError::EmptyInput`] for an empty message, before any curve work
    /// - [`EccError::InvalidPublicKey`] if a key is the identity or off its curve
    /// - [`EccError::DegenerateSharedSecret`] if a shared point is the identity
    pub fn encrypt<R: Rng + ?Sized>(
        &self,
        message: &str,
        public_keys: &[Point; CURVE_COUNT],
        rng: &mut R,
    ) -> EccResult<TripleCiphertext> {
        let codes = encoding::encode(message);
        if codes.is_empty() {
            return Err(EccError::EmptyInput);
        }

        for (curve, key) in self.curves.iter().zip(public_keys) {
            if key.is_infinity() || !curve.contains(key) {
                return Err(EccError::InvalidPublicKey {
                    curve: curve.name().to_string(),
                });
            }
        }

        let mut nonces = Vec::with_capacity(CURVE_COUNT);
        for curve in &self.curves {
            let ks: Vec<BigInt> = (0..codes.len()).map(|_| random_scalar(curve, rng)).collect();
            nonces.push(ks);
        }

        let encrypt_one =
            |i: usize| encrypt_curve(&self.curves[i], &public_keys[i], &codes, &nonces[i], self.parallel);
        let parts = if self.parallel {
            (0..CURVE_COUNT)
                .into_par_iter()
                .map(encrypt_one)
                .collect::<EccResult<Vec<_>>>()?
        } else {
            (0..CURVE_COUNT)
                .map(encrypt_one)
                .collect::<EccResult<Vec<_>>>()?
        };

        Ok(TripleCiphertext::new(into_array(parts)?))
    }

    /// Decrypts each curve's ciphertext with the matching private key
    ///
    /// Returns one plaintext per curve. With the right keys all three equal the
    /// original message; with a wrong key the corresponding string is garbage
    /// (invalid code points decode as U+FFFD).
    pub fn decrypt(
        &self,
        ciphertext: &TripleCiphertext,
        private_keys: &[BigInt; CURVE_COUNT],
    ) -> EccResult<[String; CURVE_COUNT]> {
        if let Some(bad) = private_keys.iter().find(|k| k.sign() == num_bigint::Sign::Minus) {
            return Err(EccError::InvalidScalar(bad.clone()));
        }

        let decrypt_one = |i: usize| {
            decrypt_curve(
                &self.curves[i],
                &private_keys[i],
                &ciphertext.parts[i],
                self.parallel,
            )
        };
        let plaintexts = if self.parallel {
            (0..CURVE_COUNT)
                .into_par_iter()
                .map(decrypt_one)
                .collect::<EccResult<Vec<_>>>()?
        } else {
            (0..CURVE_COUNT)
                .map(decrypt_one)
                .collect::<EccResult<Vec<_>>>()?
        };

        into_array(plaintexts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::CurveId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn keys(cipher: &TripleCurveCipher, seed: u64) -> [KeyPair; CURVE_COUNT] {
        cipher
            .generate_keypairs(&mut ChaCha20Rng::seed_from_u64(seed))
            .unwrap()
    }

    fn publics(keys: &[KeyPair; CURVE_COUNT]) -> [Point; CURVE_COUNT] {
        keys.clone().map(|k| k.public_key().clone())
    }

    fn privates(keys: &[KeyPair; CURVE_COUNT]) -> [BigInt; CURVE_COUNT] {
        keys.clone().map(|k| k.private_key().clone())
    }

    #[test]
    fn test_single_character_curve_a_private_two() {
        let curve = CurveId::A.curve();
        let keypair = KeyPair::from_private(curve, BigInt::from(2)).unwrap();
        let nonce = BigInt::from(12345);

        let (r, c) = encrypt_code_point(curve, keypair.public_key(), 65, &nonce).unwrap();
        assert_eq!(r, curve.scalar_mul(&nonce, curve.base_point()).unwrap());
        assert_ne!(c, BigInt::from(65));

        let m = decrypt_code_point(curve, keypair.private_key(), &r, &c).unwrap();
        assert_eq!(m, BigInt::from(65));
    }

    #[test]
    fn test_round_trip_all_curves() {
        let cipher = TripleCurveCipher::standard();
        let keys = keys(&cipher, 3);
        let mut rng = ChaCha20Rng::seed_from_u64(4);

        let ciphertext = cipher.encrypt("Hi ✓", &publics(&keys), &mut rng).unwrap();
        for part in ciphertext.parts() {
            assert_eq!(part.len(), 4);
            assert_eq!(part.ephemeral_points().len(), 4);
        }
        assert_eq!(ciphertext.char_count(), 4);

        let plaintexts = cipher.decrypt(&ciphertext, &privates(&keys)).unwrap();
        assert_eq!(plaintexts, ["Hi ✓", "Hi ✓", "Hi ✓"].map(String::from));
    }

    #[test]
    fn test_masked_values_are_reduced() {
        let cipher = TripleCurveCipher::standard().with_parallel(false);
        let keys = keys(&cipher, 5);
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        let ciphertext = cipher.encrypt("xyz", &publics(&keys), &mut rng).unwrap();
        for (curve, part) in cipher.curves().iter().zip(ciphertext.parts()) {
            for (r, c) in part.ephemeral_points().iter().zip(part.masked_values()) {
                assert!(curve.contains(r));
                assert!(c < curve.modulus());
            }
        }
    }

    #[test]
    fn test_empty_message_rejected() {
        let cipher = TripleCurveCipher::standard();
        let keys = keys(&cipher, 1);
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert_eq!(
            cipher.encrypt("", &publics(&keys), &mut rng),
            Err(EccError::EmptyInput)
        );
    }

    #[test]
    fn test_identity_public_key_rejected() {
        let cipher = TripleCurveCipher::standard();
        let mut pubs = publics(&keys(&cipher, 1));
        pubs[1] = Point::Infinity;
        let err = cipher
            .encrypt("a", &pubs, &mut ChaCha20Rng::seed_from_u64(1))
            .unwrap_err();
        assert_eq!(
            err,
            EccError::InvalidPublicKey {
                curve: CurveId::B.name().to_string()
            }
        );
    }

    #[test]
    fn test_public_key_from_wrong_curve_rejected() {
        let cipher = TripleCurveCipher::standard();
        let mut pubs = publics(&keys(&cipher, 1));
        pubs.swap(0, 2);
        let result = cipher.encrypt("a", &pubs, &mut ChaCha20Rng::seed_from_u64(1));
        assert!(matches!(result, Err(EccError::InvalidPublicKey { .. })));
    }

    #[test]
    fn test_wrong_private_key_does_not_recover_message() {
        let cipher = TripleCurveCipher::standard();
        let keys = keys(&cipher, 10);
        let other = keys_for_mismatch(&cipher);
        let ciphertext = cipher
            .encrypt("secret", &publics(&keys), &mut ChaCha20Rng::seed_from_u64(11))
            .unwrap();

        let mut wrong = privates(&keys);
        wrong[0] = other[0].private_key().clone();
        let plaintexts = cipher.decrypt(&ciphertext, &wrong).unwrap();
        assert_ne!(plaintexts[0], "secret");
        assert_eq!(plaintexts[1], "secret");
        assert_eq!(plaintexts[2], "secret");
    }

    fn keys_for_mismatch(cipher: &TripleCurveCipher) -> [KeyPair; CURVE_COUNT] {
        keys(cipher, 99)
    }

    #[test]
    fn test_negative_private_key_rejected() {
        let cipher = TripleCurveCipher::standard();
        let keys = keys(&cipher, 2);
        let ciphertext = cipher
            .encrypt("a", &publics(&keys), &mut ChaCha20Rng::seed_from_u64(2))
            .unwrap();
        let mut bad = privates(&keys);
        bad[2] = BigInt::from(-7);
        assert_eq!(
            cipher.decrypt(&ciphertext, &bad),
            Err(EccError::InvalidScalar(BigInt::from(-7)))
        );
    }

    #[test]
    fn test_malformed_curve_ciphertext() {
        let err = CurveCiphertext::new(vec![Point::Infinity], vec![]).unwrap_err();
        assert!(matches!(err, EccError::MalformedCiphertext(_)));
    }

    #[test]
    fn test_ephemeral_point_off_curve_rejected() {
        let curve = CurveId::C.curve();
        let bogus = Point::Affine {
            x: BigInt::from(1),
            y: BigInt::from(1),
        };
        let result = decrypt_code_point(curve, &BigInt::from(5), &bogus, &BigInt::from(70));
        assert!(matches!(result, Err(EccError::MalformedCiphertext(_))));
    }
}

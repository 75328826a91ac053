//! Error types for curve arithmetic and the triple-curve cipher

use num_bigint::BigInt;
use thiserror::Error;

/// Result type for curve and cipher operations
pub type EccResult<T> = Result<T, EccError>;

/// Error types for curve arithmetic, key handling and the cipher protocol
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EccError {
    /// Modular inverse requested for a value congruent to 0 mod p
    #[error("division by zero: value is congruent to 0 modulo p")]
    DivisionByZero,
    /// The value shares a factor with a composite modulus
    #[error("{value} has no inverse modulo {modulus}")]
    NotInvertible { value: BigInt, modulus: BigInt },
    /// Negative scalar passed to scalar multiplication, or a non-positive private key
    #[error("invalid scalar {0}: scalars must be non-negative")]
    InvalidScalar(BigInt),
    /// Empty message supplied to encryption
    #[error("message is empty")]
    EmptyInput,
    /// Decryption requested before any successful encryption
    #[error("nothing to decrypt: no message has been encrypted yet")]
    NotYetEncrypted,
    /// Curve parameters failed validation
    #[error("invalid curve parameters: {0}")]
    InvalidCurve(String),
    /// Coordinates do not satisfy the curve equation
    #[error("point ({x}, {y}) is not on the curve")]
    PointNotOnCurve { x: BigInt, y: BigInt },
    /// Public key is the identity or lies on another curve
    #[error("invalid public key for {curve}")]
    InvalidPublicKey { curve: String },
    /// k * public key landed on the point at infinity
    #[error("shared secret on {curve} is the point at infinity")]
    DegenerateSharedSecret { curve: String },
    /// Ephemeral points and masked values do not line up
    #[error("malformed ciphertext: {0}")]
    MalformedCiphertext(String),
    /// Bad configuration value
    #[error("configuration error: {0}")]
    Config(String),
}

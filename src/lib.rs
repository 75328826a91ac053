//! # Triple-Curve ECC
//!
//! Educational per-character ElGamal-style encryption over three elliptic
//! curves at once.
//!
//! ## Modules
//!
//! - **field**: modular reduction and inverse over F_p
//! - **elliptic_curve**: points, the group law and scalar multiplication
//! - **curves**: the three built-in curve parameter sets
//! - **keypair**: private scalars and public points
//! - **cipher**: the triple-curve encryption scheme
//! - **session**: keys and the current message, owned by the caller
//!
//! ## Security Warning
//!
//! Nothing here is constant time, nonces are not reduced by the group order and
//! each character is encrypted separately with no padding. This is for
//! educational use only.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use triple_ecc::{Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::default())?;
//! session.encrypt("Hello")?;
//! let plaintexts = session.decrypt()?;
//! assert!(plaintexts.iter().all(|p| p == "Hello"));
//! # Ok::<(), triple_ecc::EccError>(())
//! ```

pub mod benchmark;
pub mod cipher;
pub mod config;
pub mod curves;
pub mod elliptic_curve;
pub mod encoding;
pub mod error;
pub mod field;
pub mod keypair;
pub mod session;

// Re-export commonly used items
pub use cipher::{CURVE_COUNT, CurveCiphertext, TripleCiphertext, TripleCurveCipher};
pub use config::SessionConfig;
pub use curves::CurveId;
pub use elliptic_curve::{Curve, Point};
pub use error::{EccError, EccResult};
pub use field::mod_inverse;
pub use keypair::{KeyPair, generate_keypair};
pub use session::{Session, SessionState};

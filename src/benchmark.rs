//! Triple-curve vs single-curve timing comparison
//!
//! Measures wall-clock time of full triple-curve encryptions of a message
//! against single-character, single-curve encryptions on curve A with a small
//! nonce. This reports cost only; it makes no claim about attack resistance.

use crate::cipher::{CURVE_COUNT, TripleCurveCipher, encrypt_code_point};
use crate::curves::CurveId;
use crate::elliptic_curve::Point;
use crate::encoding;
use crate::error::{EccError, EccResult};
use crate::keypair::{KeyPair, generate_keypair};
use num_bigint::BigInt;
use rand::Rng;
use serde::Serialize;
use std::time::Instant;

/// Upper bound (inclusive) of the baseline's nonce
pub const BASELINE_MAX_NONCE: u32 = 9999;

/// Single-curve keypair on curve A, used only as a timing reference
#[derive(Clone, Debug)]
pub struct TraditionalBaseline {
    keypair: KeyPair,
}

impl TraditionalBaseline {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> EccResult<Self> {
        let keypair = generate_keypair(CurveId::A.curve(), rng)?;
        Ok(Self { keypair })
    }

    pub fn keypair(&self) -> &KeyPair {
        &self.keypair
    }
}

/// Timing samples and averages, in milliseconds
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TimingReport {
    pub runs: usize,
    pub message_chars: usize,
    pub triple_samples_ms: Vec<f64>,
    pub traditional_samples_ms: Vec<f64>,
    pub triple_avg_ms: f64,
    pub traditional_avg_ms: f64,
}

impl TimingReport {
    /// How many times slower the triple-curve encryption was on average
    pub fn slowdown(&self) -> f64 {
        if self.traditional_avg_ms > 0.0 {
            self.triple_avg_ms / self.traditional_avg_ms
        } else {
            f64::INFINITY
        }
    }
}

fn average(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        0.0
    } else {
        samples.iter().sum::<f64>() / samples.len() as f64
    }
}

/// Runs `runs` timed encryptions on each side
///
/// # Errors
/// - [`EccError::EmptyInput`] for an empty message
/// - [`EccError::Config`] when `runs == 0`
pub fn compare_security<R: Rng + ?Sized>(
    cipher: &TripleCurveCipher,
    public_keys: &[Point; CURVE_COUNT],
    baseline: &TraditionalBaseline,
    message: &str,
    runs: usize,
    rng: &mut R,
) -> EccResult<TimingReport> {
    let codes = encoding::encode(message);
    let Some(&first) = codes.first() else {
        return Err(EccError::EmptyInput);
    };
    if runs == 0 {
        return Err(EccError::Config(
            "benchmark runs must be at least 1".to_string(),
        ));
    }

    let mut triple_samples_ms = Vec::with_capacity(runs);
    for _ in 0..runs {
        let start = Instant::now();
        cipher.encrypt(message, public_keys, rng)?;
        triple_samples_ms.push(start.elapsed().as_secs_f64() * 1000.0);
    }

    let curve = CurveId::A.curve();
    let mut traditional_samples_ms = Vec::with_capacity(runs);
    for _ in 0..runs {
        let nonce = BigInt::from(rng.gen_range(1..=BASELINE_MAX_NONCE));
        let start = Instant::now();
        encrypt_code_point(curve, baseline.keypair().public_key(), first, &nonce)?;
        traditional_samples_ms.push(start.elapsed().as_secs_f64() * 1000.0);
    }

    let report = TimingReport {
        runs,
        message_chars: codes.len(),
        triple_avg_ms: average(&triple_samples_ms),
        traditional_avg_ms: average(&traditional_samples_ms),
        triple_samples_ms,
        traditional_samples_ms,
    };
    log::info!(
        "timing over {} runs: triple {:.4} ms, traditional {:.4} ms",
        runs,
        report.triple_avg_ms,
        report.traditional_avg_ms
    );
    Ok(report)
}

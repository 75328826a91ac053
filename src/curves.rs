//! Built-in curve parameter sets
//!
//! The cipher runs over three well-known prime-field curves of decreasing
//! modulus size. The constants are static configuration, parsed once on
//! first use.

use crate::elliptic_curve::Curve;
use num_bigint::BigInt;
use once_cell::sync::Lazy;
use std::fmt;

/// Decimal constants describing a short Weierstrass curve and its base point
#[derive(Clone, Copy, Debug)]
pub struct CurveParams {
    pub name: &'static str,
    pub p: &'static str,
    pub a: &'static str,
    pub b: &'static str,
    pub gx: &'static str,
    pub gy: &'static str,
}

/// secp256k1: p = 2^256 - 2^32 - 977, a = 0, b = 7
pub const CURVE_A_PARAMS: CurveParams = CurveParams {
    name: "curve-a (secp256k1)",
    p: "115792089237316195423570985008687907853269984665640564039457584007908834671663",
    a: "0",
    b: "7",
    gx: "55066263022277343669578718895168534326250603453777594175500187360389116729240",
    gy: "32670510020758816978083085130507043184471273380659243275938904335757337482424",
};

/// Wei25519, the short Weierstrass form of Curve25519: p = 2^255 - 19.
/// The base point is the image of the Montgomery point u = 9.
pub const CURVE_B_PARAMS: CurveParams = CurveParams {
    name: "curve-b (wei25519)",
    p: "57896044618658097711785492504343953926634992332820282019728792003956564819949",
    a: "19298681539552699237261830834781317975544997444273427339909597334573241639236",
    b: "55751746669818908907645289078257140818241103727901012315294400837956729358436",
    gx: "19298681539552699237261830834781317975544997444273427339909597334652188435546",
    gy: "14781619447589544791020593568409986887264606134616475288964881837755586237401",
};

/// NIST P-224: p = 2^224 - 2^96 + 1, a = -3
pub const CURVE_C_PARAMS: CurveParams = CurveParams {
    name: "curve-c (p224)",
    p: "26959946667150639794667015087019630673557916260026308143510066298881",
    a: "-3",
    b: "18958286285566608000408668544493926415504680968679321075787234672564",
    gx: "19277929113566293071110308034699488026831934219452440156649784352033",
    gy: "19926808758034470970197974370888749184205991990603949537637343198772",
};

fn parse_decimal(s: &str) -> Option<BigInt> {
    BigInt::parse_bytes(s.as_bytes(), 10)
}

impl CurveParams {
    /// Parses the constants and builds a validated [`Curve`]
    pub fn build(&self) -> crate::EccResult<Curve> {
        let field = |label: &str, value: &str| {
            parse_decimal(value).ok_or_else(|| {
                crate::EccError::InvalidCurve(format!(
                    "{}: {} is not a decimal integer",
                    self.name, label
                ))
            })
        };
        let curve = Curve::new(
            field("p", self.p)?,
            field("a", self.a)?,
            field("b", self.b)?,
            (field("gx", self.gx)?, field("gy", self.gy)?),
        )?;
        Ok(curve.named(self.name))
    }
}

// The constants above are fixed and covered by tests, so a failure here is a
// programming error rather than a runtime condition.
static CURVE_A: Lazy<Curve> = Lazy::new(|| CURVE_A_PARAMS.build().expect("curve-a parameters"));
static CURVE_B: Lazy<Curve> = Lazy::new(|| CURVE_B_PARAMS.build().expect("curve-b parameters"));
static CURVE_C: Lazy<Curve> = Lazy::new(|| CURVE_C_PARAMS.build().expect("curve-c parameters"));

/// Identifies one of the three built-in curves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveId {
    /// 256-bit modulus
    A,
    /// 255-bit modulus
    B,
    /// 224-bit modulus
    C,
}

impl CurveId {
    /// All curves in cipher order
    pub const ALL: [CurveId; 3] = [CurveId::A, CurveId::B, CurveId::C];

    pub fn params(self) -> &'static CurveParams {
        match self {
            CurveId::A => &CURVE_A_PARAMS,
            CurveId::B => &CURVE_B_PARAMS,
            CurveId::C => &CURVE_C_PARAMS,
        }
    }

    pub fn curve(self) -> &'static Curve {
        match self {
            CurveId::A => &CURVE_A,
            CurveId::B => &CURVE_B,
            CurveId::C => &CURVE_C,
        }
    }

    pub fn name(self) -> &'static str {
        self.params().name
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Elliptic Curve Groups over Prime Fields
//!
//! This module implements short Weierstrass curves y² = x³ + ax + b over F_p
//! with affine coordinates, the group law, and double-and-add scalar
//! multiplication.

use crate::error::{EccError, EccResult};
use crate::field::{mod_inverse, modulo};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::fmt;

/// A point on an elliptic curve
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Point {
    /// The point at infinity (identity element)
    Infinity,
    /// A point with affine coordinates (x, y), both in [0, p)
    Affine { x: BigInt, y: BigInt },
}

impl Point {
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// x-coordinate, `None` for the point at infinity
    pub fn x(&self) -> Option<&BigInt> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, `None` for the point at infinity
    pub fn y(&self) -> Option<&BigInt> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => write!(f, "O"),
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}

/// An elliptic curve in short Weierstrass form: y² = x³ + ax + b (mod p)
///
/// Curves are immutable once built. [`Curve::new`] reduces the coefficients,
/// rejects singular curves and checks that the base point satisfies the
/// curve equation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    name: String,
    p: BigInt,
    a: BigInt,
    b: BigInt,
    g: Point,
}

impl Curve {
    /// Builds a curve from its prime modulus, coefficients and base point.
    ///
    /// `a` and `b` may be given as any integers (e.g. `a = -3`); they are
    /// stored reduced into `[0, p)`. The modulus is assumed to be prime.
    ///
    /// # Errors
    /// Returns [`EccError::InvalidCurve`] if `p <= 3`, the curve is singular,
    /// or the base point is out of range or not on the curve.
    pub fn new(p: BigInt, a: BigInt, b: BigInt, g: (BigInt, BigInt)) -> EccResult<Self> {
        if p <= BigInt::from(3) {
            return Err(EccError::InvalidCurve(format!(
                "modulus {} must be a prime greater than 3",
                p
            )));
        }

        let a = modulo(&a, &p);
        let b = modulo(&b, &p);

        let discriminant = BigInt::from(4) * a.pow(3) + BigInt::from(27) * b.pow(2);
        if modulo(&discriminant, &p).is_zero() {
            return Err(EccError::InvalidCurve(
                "curve is singular (discriminant is zero)".to_string(),
            ));
        }

        let (gx, gy) = g;
        if gx.is_negative() || gy.is_negative() || gx >= p || gy >= p {
            return Err(EccError::InvalidCurve(
                "base point coordinates must lie in [0, p)".to_string(),
            ));
        }

        let curve = Self {
            name: "custom".to_string(),
            p,
            a,
            b,
            g: Point::Affine { x: gx, y: gy },
        };
        if !curve.contains(&curve.g) {
            return Err(EccError::InvalidCurve(format!(
                "base point {} is not on the curve",
                curve.g
            )));
        }
        Ok(curve)
    }

    /// Attaches a human-readable name used in logs and error messages
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The prime modulus p
    pub fn modulus(&self) -> &BigInt {
        &self.p
    }

    /// Coefficient a, reduced into [0, p)
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// Coefficient b, reduced into [0, p)
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// The fixed base point G
    pub fn base_point(&self) -> &Point {
        &self.g
    }

    pub fn identity(&self) -> Point {
        Point::Infinity
    }

    pub fn contains(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                if x.is_negative() || y.is_negative() || *x >= self.p || *y >= self.p {
                    return false;
                }
                let lhs = modulo(&(y * y), &self.p);
                let rhs = modulo(&(x.pow(3) + &self.a * x + &self.b), &self.p);
                lhs == rhs
            }
        }
    }

    /// Builds a point from coordinates, reducing them mod p first
    ///
    /// # Errors
    /// Returns [`EccError::PointNotOnCurve`] if (x, y) does not satisfy the
    /// curve equation.
    pub fn point(&self, x: BigInt, y: BigInt) -> EccResult<Point> {
        let p = Point::Affine {
            x: modulo(&x, &self.p),
            y: modulo(&y, &self.p),
        };
        if self.contains(&p) {
            Ok(p)
        } else {
            Err(EccError::PointNotOnCurve { x, y })
        }
    }

    pub fn negate(&self, p: &Point) -> Point {
        match p {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: modulo(&-y, &self.p),
            },
        }
    }

    /// Group law. Vertical tangents and vertical chords give the point at
    /// infinity; that is the only place a zero denominator is absorbed.
    pub fn add(&self, p: &Point, q: &Point) -> Point {
        match (p, q) {
            (Point::Infinity, _) => q.clone(),
            (_, Point::Infinity) => p.clone(),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                let modulus = &self.p;
                let lambda = if x1 == x2 && y1 == y2 {
                    let numerator = BigInt::from(3) * x1 * x1 + &self.a;
                    // 2y ≡ 0: tangent is vertical, so 2P = O
                    let Ok(inv) = mod_inverse(&(BigInt::from(2) * y1), modulus) else {
                        return Point::Infinity;
                    };
                    modulo(&(numerator * inv), modulus)
                } else {
                    // x1 ≡ x2 with P != Q: chord is vertical, so P + Q = O
                    let Ok(inv) = mod_inverse(&(x2 - x1), modulus) else {
                        return Point::Infinity;
                    };
                    modulo(&((y2 - y1) * inv), modulus)
                };
                let x3 = modulo(&(&lambda * &lambda - x1 - x2), modulus);
                let y3 = modulo(&(&lambda * (x1 - &x3) - y1), modulus);
                Point::Affine { x: x3, y: y3 }
            }
        }
    }

    pub fn double(&self, p: &Point) -> Point {
        self.add(p, p)
    }

    /// Scalar multiplication using double-and-add algorithm
    ///
    /// Computes k*P where k is a non-negative integer and P is a curve point.
    ///
    /// # Algorithm
    ///
    /// Walks the bits of k from least to most significant:
    /// ```text
    /// result = O (point at infinity)
    /// addend = P
    /// for each bit b in scalar k (from LSB to MSB):
    ///     if b == 1:
    ///         result = result + addend
    ///     addend = 2 * addend
    /// return result
    /// ```
    ///
    /// The scalar is not reduced by the order of P; values up to and beyond
    /// p are accepted.
    ///
    /// # Errors
    /// Returns [`EccError::InvalidScalar`] for negative k.
    pub fn scalar_mul(&self, k: &BigInt, p: &Point) -> EccResult<Point> {
        if k.sign() == Sign::Minus {
            return Err(EccError::InvalidScalar(k.clone()));
        }

        let mut result = Point::Infinity;
        let mut addend = p.clone();
        let mut k = k.magnitude().clone();

        while !k.is_zero() {
            if k.is_odd() {
                result = self.add(&result, &addend);
            }
            addend = self.double(&addend);
            k >>= 1usize;
        }
        Ok(result)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: y² = x³ + {}x + {} over F_p ({}-bit p)",
            self.name,
            self.a,
            self.b,
            self.p.bits()
        )
    }
}

//! Example: Elliptic Curves over Prime Fields
//!
//! Demonstrates the group law on a toy curve and on the three built-in curves.
//!
//! # Running this example
//! ```bash
//! cargo run --example elliptic_curves
//! ```

use num_bigint::BigInt;
use triple_ecc::{Curve, CurveId, EccResult, Point};

fn format_point(p: &Point) -> String {
    match p {
        Point::Infinity => "𝒪".to_string(),
        Point::Affine { x, y } => format!("({}, {})", x, y),
    }
}

fn short(p: &Point) -> String {
    match p.x() {
        None => "𝒪".to_string(),
        Some(x) => {
            let s = x.to_string();
            format!("x = {}…{}", &s[..8.min(s.len())], &s[s.len().saturating_sub(8)..])
        }
    }
}

fn main() -> EccResult<()> {
    println!("\n╔════════════════════════════════════════════════════════════════╗");
    println!("║  Elliptic Curves over Prime Fields                             ║");
    println!("╚════════════════════════════════════════════════════════════════╝");

    // ===== TOY CURVE =====
    println!("\n┌─ Toy Curve (y² = x³ + 2x + 3 over F_97) ─────────────────────┐\n");

    let curve = Curve::new(
        BigInt::from(97),
        BigInt::from(2),
        BigInt::from(3),
        (BigInt::from(3), BigInt::from(6)),
    )?;
    let p = curve.base_point().clone();

    println!("  Point P: {}", format_point(&p));
    println!("  -P: {}", format_point(&curve.negate(&p)));
    println!("  2P: {}", format_point(&curve.double(&p)));
    for k in [3, 5, 10] {
        let kp = curve.scalar_mul(&BigInt::from(k), &p)?;
        println!("  {}P: {}", k, format_point(&kp));
    }
    let t = curve.point(BigInt::from(30), BigInt::from(0))?;
    println!("  T = {} has y = 0, so 2T = {}", format_point(&t), format_point(&curve.double(&t)));

    // ===== BUILT-IN CURVES =====
    println!("\n┌─ Built-in Curves ────────────────────────────────────────────┐\n");

    for id in CurveId::ALL {
        let curve = id.curve();
        let g = curve.base_point();
        let two_g = curve.scalar_mul(&BigInt::from(2), g)?;
        println!("  {}", curve);
        println!("    G:  {}", short(g));
        println!("    2G: {}", short(&two_g));
        println!("    2G == G + G: {}", two_g == curve.add(g, g));
        println!();
    }

    println!("  ✓ Efficient O(log k) scalar multiplication\n");
    Ok(())
}

//! Triple-Curve Encryption Walkthrough
//!
//! Encrypts one message under three curves, decrypts it with the right keys
//! and then with a wrong key for one curve.
//!
//! # Running this example
//! ```bash
//! cargo run --example triple_curve
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use triple_ecc::{EccResult, Session, SessionConfig, TripleCurveCipher};

fn main() -> EccResult<()> {
    println!("\n╔════════════════════════════════════════════════════════════════╗");
    println!("║  Triple-Curve ECC                                              ║");
    println!("╚════════════════════════════════════════════════════════════════╝");

    let message = "Meet me at noon";

    // ===== SESSION =====
    println!("\n┌─ Session ────────────────────────────────────────────────────┐\n");

    let mut session = Session::new(SessionConfig::default().with_seed(2024))?;
    println!("  State: {:?}", session.state());

    let ciphertext = session.encrypt(message)?.clone();
    println!(
        "  State: {:?} ({} characters per curve)",
        session.state(),
        ciphertext.char_count()
    );
    for (curve, part) in session.cipher().curves().iter().zip(ciphertext.parts()) {
        println!("    {:22} R[0] = {}", curve.name(), part.ephemeral_points()[0]);
    }

    let plaintexts = session.decrypt()?.clone();
    println!("  State: {:?}", session.state());
    for (curve, plaintext) in session.cipher().curves().iter().zip(&plaintexts) {
        println!("    {:22} {:?}", curve.name(), plaintext);
    }

    // ===== WRONG KEY =====
    println!("\n┌─ Decrypting with a wrong key ────────────────────────────────┐\n");

    let cipher = TripleCurveCipher::standard();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let alice = cipher.generate_keypairs(&mut rng)?;
    let eve = cipher.generate_keypairs(&mut rng)?;

    let publics = alice.clone().map(|k| k.public_key().clone());
    let mut privates = alice.map(|k| k.private_key().clone());
    privates[1] = eve[1].private_key().clone();

    let ciphertext = cipher.encrypt(message, &publics, &mut rng)?;
    let plaintexts = cipher.decrypt(&ciphertext, &privates)?;
    for (curve, plaintext) in cipher.curves().iter().zip(&plaintexts) {
        let status = if plaintext == message { "✓" } else { "✗" };
        println!("    {} {:22} {:?}", status, curve.name(), plaintext);
    }
    println!();

    Ok(())
}

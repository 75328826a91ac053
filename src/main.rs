//! Triple-Curve ECC command line
//!
//! Encrypts a message under three curves, decrypts it again and prints what
//! happened at each step.
//!
//! Run with: cargo run --release -- "Hello, world!" --compare
//!
//! The program will:
//! 1. Generate one keypair per curve (seeded with --seed for reproducible runs)
//! 2. Encrypt the message character by character under every curve
//! 3. Decrypt each curve's ciphertext with its private key
//! 4. Optionally time triple-curve against single-curve encryption
//!
//! Set RUST_LOG=debug to follow the session's state transitions.

use clap::Parser;
use serde_json::json;
use triple_ecc::{EccResult, Session, SessionConfig};

#[derive(Parser, Debug)]
#[command(
    name = "triple-ecc",
    about = "Encrypt a message under three elliptic curves and decrypt it again"
)]
struct Args {
    /// Message to encrypt
    #[arg(default_value = "Hello, Triple ECC!")]
    message: String,

    /// Seed the RNG for reproducible keys and ciphertexts (overrides TRIPLE_ECC_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Run all point arithmetic on the current thread
    #[arg(long, action = clap::ArgAction::SetTrue)]
    sequential: bool,

    /// Time triple-curve encryption against a single-curve baseline
    #[arg(long, action = clap::ArgAction::SetTrue)]
    compare: bool,

    /// Timed runs per side for --compare (overrides TRIPLE_ECC_BENCH_RUNS)
    #[arg(long)]
    runs: Option<usize>,

    /// Print a JSON report instead of text
    #[arg(long, action = clap::ArgAction::SetTrue)]
    json: bool,
}

fn build_config(args: &Args) -> EccResult<SessionConfig> {
    let mut config = SessionConfig::from_env()?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.sequential {
        config = config.with_parallel(false);
    }
    if let Some(runs) = args.runs {
        config = config.with_benchmark_runs(runs);
    }
    config.validate()?;
    Ok(config)
}

fn rule() {
    println!("================================================================================");
}

fn run(args: &Args) -> EccResult<()> {
    let config = build_config(args)?;
    let mut session = Session::new(config)?;

    let curve_names: Vec<String> = session
        .cipher()
        .curves()
        .iter()
        .map(|c| c.name().to_string())
        .collect();
    let public_keys = session.public_keys();

    let ciphertext = session.encrypt(&args.message)?.clone();
    let plaintexts = session.decrypt()?.clone();
    let timing = if args.compare {
        Some(session.compare_security(&args.message)?)
    } else {
        None
    };

    if args.json {
        let curves: Vec<_> = curve_names
            .iter()
            .zip(&public_keys)
            .zip(ciphertext.parts())
            .zip(&plaintexts)
            .map(|(((name, public_key), part), plaintext)| {
                json!({
                    "curve": name,
                    "public_key": public_key.to_string(),
                    "ephemeral_points": part
                        .ephemeral_points()
                        .iter()
                        .map(|r| r.to_string())
                        .collect::<Vec<_>>(),
                    "masked_values": part
                        .masked_values()
                        .iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>(),
                    "decrypted": plaintext,
                })
            })
            .collect();
        let output = json!({
            "message": args.message,
            "state": format!("{:?}", session.state()),
            "curves": curves,
            "timing": timing,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => log::error!("failed to render JSON report: {}", e),
        }
        return Ok(());
    }

    rule();
    println!("Triple-Curve ECC");
    rule();
    println!("\nMessage: {:?} ({} characters)\n", args.message, ciphertext.char_count());

    for (name, public_key) in curve_names.iter().zip(&public_keys) {
        println!("  {}", name);
        println!("    public key: {}", public_key);
    }
    println!();

    println!("Encrypted Successfully with Triple ECC");
    for (name, part) in curve_names.iter().zip(ciphertext.parts()) {
        let preview = part
            .masked_values()
            .first()
            .map(|c| c.to_string())
            .unwrap_or_default();
        println!("  {:22} | {} pairs | C[0] = {}", name, part.len(), preview);
    }
    println!();

    println!("Decrypted Messages (Per Curve):");
    for (name, plaintext) in curve_names.iter().zip(&plaintexts) {
        let status = if *plaintext == args.message { "✓" } else { "✗" };
        println!("  {:22} | {} {:?}", name, status, plaintext);
    }
    println!();

    if let Some(report) = timing {
        rule();
        println!("Timing ({} runs)", report.runs);
        rule();
        println!("  Triple ECC Avg Time:      {:.4} ms", report.triple_avg_ms);
        println!("  Traditional ECC Avg Time: {:.4} ms", report.traditional_avg_ms);
        println!("  Slowdown:                 {:.1}x", report.slowdown());
        println!();
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

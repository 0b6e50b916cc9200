use crate::error::Result;
use crate::hybrid::HybridCryptosystem;
use std::fmt::Write;
use std::time::Instant;

/// Measure average encrypt/decrypt wall-clock latency over `iterations`
/// runs on one cryptosystem instance. Decrypt failures are counted and
/// excluded from the average.
pub fn run_timing(plaintext: &str, iterations: usize) -> Result<String> {
    let iterations = iterations.max(1);
    let mut hybrid = HybridCryptosystem::new();
    let mut out = String::new();

    let start_enc = Instant::now();
    let mut last = hybrid.encrypt(plaintext, None)?;
    for _ in 1..iterations {
        last = hybrid.encrypt(plaintext, None)?;
    }
    let avg_enc = start_enc.elapsed().as_secs_f64() / iterations as f64;

    let mut successes = 0usize;
    let start_dec = Instant::now();
    for _ in 0..iterations {
        if hybrid
            .decrypt_opt(&last.merged, last.left, last.right)
            .is_some()
        {
            successes += 1;
        }
    }
    let elapsed_dec = start_dec.elapsed().as_secs_f64();

    writeln!(
        out,
        "Average encryption time over {} runs: {:.6} seconds",
        iterations, avg_enc
    )
    .ok();
    if successes > 0 {
        writeln!(
            out,
            "Average decryption time over {} successful runs: {:.6} seconds",
            successes,
            elapsed_dec / successes as f64
        )
        .ok();
    }
    if successes < iterations {
        writeln!(out, "Warning: {} decryptions failed.", iterations - successes).ok();
    }

    Ok(out)
}

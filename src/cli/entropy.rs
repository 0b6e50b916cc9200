use crate::error::Result;
use crate::hybrid::HybridCryptosystem;
use crate::pipeline::codec;
use std::fmt::Write;

/// Per-byte Shannon entropy of a buffer, in bits. Empty input is 0.
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut freq = [0usize; 256];
    for &b in data {
        freq[b as usize] += 1;
    }

    let n = data.len() as f64;
    freq.iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / n;
            -p * p.log2()
        })
        .sum()
}

/// Compare the entropy of a plaintext against the raw ciphertext bytes it
/// encrypts to. The merged sequence is decoded back to bytes for the
/// measurement, so the 4-symbol alphabet does not skew the statistic.
pub fn run_entropy(plaintext: &str) -> Result<String> {
    let mut hybrid = HybridCryptosystem::new();
    let mut out = String::new();

    let pt_bytes = plaintext.as_bytes();
    let pt_entropy = shannon_entropy(pt_bytes);
    writeln!(
        out,
        "Plaintext entropy: {:.4} bits/byte, length: {} bytes",
        pt_entropy,
        pt_bytes.len()
    )
    .ok();
    writeln!(
        out,
        "Total entropy of plaintext: {:.4} bits\n",
        pt_entropy * pt_bytes.len() as f64
    )
    .ok();

    let record = hybrid.encrypt(plaintext, None)?;

    // Undo only the nucleotide layer; the permutation does not change the
    // byte histogram
    let split_idx = record.merged.len() / 2;
    let mut ct_bytes = codec::decode(&record.merged[..split_idx])?;
    ct_bytes.extend(codec::decode(&record.merged[split_idx..])?);

    let ct_entropy = shannon_entropy(&ct_bytes);
    writeln!(
        out,
        "Ciphertext entropy: {:.4} bits/byte, length: {} bytes",
        ct_entropy,
        ct_bytes.len()
    )
    .ok();
    writeln!(
        out,
        "Total entropy of ciphertext: {:.4} bits",
        ct_entropy * ct_bytes.len() as f64
    )
    .ok();
    writeln!(
        out,
        "Maximum possible entropy (byte): {:.4} bits/byte\n",
        (256f64).log2()
    )
    .ok();
    writeln!(
        out,
        "Ciphertext preview: {}...",
        hex::encode(&ct_bytes[..ct_bytes.len().min(16)])
    )
    .ok();

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_uniform_buffer() {
        // All 256 byte values once: exactly 8 bits/byte
        let data: Vec<u8> = (0..=255).collect();
        assert!((shannon_entropy(&data) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_constant_buffer_is_zero() {
        assert_eq!(shannon_entropy(&[42u8; 100]), 0.0);
        assert_eq!(shannon_entropy(&[]), 0.0);
    }

    #[test]
    fn test_entropy_two_symbols() {
        // 50/50 split over two values: exactly 1 bit/byte
        let mut data = vec![0u8; 32];
        data.extend(vec![1u8; 32]);
        assert!((shannon_entropy(&data) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_run_entropy_reports_both_sides() {
        let out = run_entropy("aaaaaaaaaaaaaaaa").unwrap();
        assert!(out.contains("Plaintext entropy: 0.0000"));
        assert!(out.contains("Ciphertext entropy:"));
        assert!(out.contains("Ciphertext preview:"));
    }
}

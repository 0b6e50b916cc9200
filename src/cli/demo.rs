use crate::error::Result;
use crate::hybrid::{ChaosParams, HybridCryptosystem};
use std::fmt::Write;

/// Options for the demo command
#[derive(Debug, Clone, Default)]
pub struct DemoOptions {
    /// Pin the chaos parameters instead of drawing them
    pub chaos_override: Option<(ChaosParams, ChaosParams)>,
    /// After the correct decryption, retry with perturbed parameters to
    /// show the uniform failure mode
    pub show_wrong: bool,
}

/// Walk one plaintext through the full encrypt/decrypt cycle, showing the
/// merged sequence, the chaos parameters, and the permutation tables.
/// Consumes only the public encrypt/decrypt contract.
pub fn run_demo(plaintext: &str, options: &DemoOptions) -> Result<String> {
    let mut hybrid = HybridCryptosystem::new();
    let mut out = String::new();

    writeln!(out, "Plaintext:\n  {:?}\n", plaintext).ok();

    let record = hybrid.encrypt(plaintext, options.chaos_override)?;

    writeln!(out, "Encrypted (nucleotide + permuted) ciphertext:").ok();
    writeln!(out, "  {}\n", record.merged).ok();
    writeln!(out, "Chaos parameters (communicate out-of-band):").ok();
    writeln!(out, "  left  - r: {}, x0: {}", record.left.r, record.left.x0).ok();
    writeln!(out, "  right - r: {}, x0: {}\n", record.right.r, record.right.x0).ok();

    format_indices(&mut out, "Left indices", &record.left_indices);
    format_indices(&mut out, "Right indices", &record.right_indices);

    let recovered = hybrid.decrypt(&record.merged, record.left, record.right)?;
    writeln!(out, "Decrypted with correct parameters:\n  {:?}", recovered).ok();

    if options.show_wrong {
        let wrong_left = ChaosParams {
            r: record.left.r,
            x0: (record.left.x0 + 0.01) % 1.0,
        };
        writeln!(out).ok();
        match hybrid.decrypt_opt(&record.merged, wrong_left, record.right) {
            Some(garbled) => {
                writeln!(out, "Decrypted with wrong parameters (garbled):\n  {:?}", garbled).ok()
            }
            None => writeln!(
                out,
                "Decryption with wrong chaos parameters failed (padding error)."
            )
            .ok(),
        };
    }

    Ok(out)
}

/// Print an index table, 20 entries per line
fn format_indices(out: &mut String, label: &str, indices: &[usize]) {
    writeln!(out, "{} (total {}):", label, indices.len()).ok();
    for line in indices.chunks(20) {
        let joined: Vec<String> = line.iter().map(|i| i.to_string()).collect();
        writeln!(out, "   {}", joined.join(", ")).ok();
    }
    writeln!(out).ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output_mentions_parameters() {
        let options = DemoOptions {
            chaos_override: Some((
                ChaosParams { r: 3.9, x0: 0.5 },
                ChaosParams { r: 3.9, x0: 0.5 },
            )),
            show_wrong: false,
        };
        let out = run_demo("HELLO", &options).unwrap();

        assert!(out.contains("r: 3.9, x0: 0.5"));
        assert!(out.contains("Left indices"));
        assert!(out.contains("\"HELLO\""));
    }

    #[test]
    fn test_demo_wrong_parameter_branch() {
        let options = DemoOptions {
            chaos_override: None,
            show_wrong: true,
        };
        // Either the failure line or the garbled line must appear
        let out = run_demo("wrong parameter demo", &options).unwrap();
        assert!(out.contains("wrong") || out.contains("failed"));
    }

    #[test]
    fn test_format_indices_wraps_lines() {
        let mut out = String::new();
        let indices: Vec<usize> = (0..45).collect();
        format_indices(&mut out, "Indices", &indices);

        assert!(out.contains("Indices (total 45):"));
        // 45 entries at 20 per line = 3 table lines
        assert_eq!(out.lines().filter(|l| l.starts_with("   ")).count(), 3);
    }
}

//! Helixcrypt - Hybrid AES + Nucleotide Encoding + Chaotic Permutation
//!
//! A demonstration cryptosystem that composes a conventional block cipher
//! with two obfuscating re-encodings. The plaintext is split in two and each
//! half travels through the pipeline independently under its own key:
//!
//! ```text
//! Plaintext → Split → AES-256-CBC → Nucleotide encode → Chaos permute → Merge
//! ```
//!
//! - **AES-256-CBC**: fresh random IV per call, PKCS7 padding, IV prepended
//!   to the ciphertext so it travels with the sequence
//! - **Nucleotide encode**: bijective mapping of 2-bit groups onto {A,T,C,G}
//! - **Chaos permute**: positions reordered by sorting a logistic-map
//!   trajectory; exactly invertible given the same (r, x0)
//!
//! The chaos parameters are returned out-of-band by `encrypt` and must be
//! supplied again to `decrypt`; they are never embedded in the ciphertext.
//! The nucleotide and chaos layers are obfuscation, not a security claim;
//! confidentiality rests on AES alone.
//!
//! ## Example
//!
//! ```
//! use helixcrypt::hybrid::HybridCryptosystem;
//!
//! let mut hybrid = HybridCryptosystem::new();
//! let record = hybrid.encrypt("attack at dawn", None).unwrap();
//!
//! let recovered = hybrid
//!     .decrypt(&record.merged, record.left, record.right)
//!     .unwrap();
//! assert_eq!(recovered, "attack at dawn");
//! ```

pub mod cli;
pub mod error;
pub mod hybrid;
pub mod pipeline;
pub mod validate;

pub use error::{HelixError, Result};
pub use hybrid::{ChaosParams, CipherRecord, HybridCryptosystem, SecretMaterial};

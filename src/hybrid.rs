use crate::error::{HelixError, Result};
use crate::pipeline::{codec, BlockCipher, ChaosMapper, KEY_SIZE};
use crate::validate;
use rand::{rngs::OsRng, rngs::StdRng, RngCore, SeedableRng};

/// The two per-half cipher keys, generated once at construction and owned
/// exclusively by the cryptosystem. Never exposed to callers.
pub struct SecretMaterial {
    left: [u8; KEY_SIZE],
    right: [u8; KEY_SIZE],
}

impl SecretMaterial {
    /// Generate two independent 256-bit keys from the system CSPRNG
    pub fn generate() -> Self {
        let mut left = [0u8; KEY_SIZE];
        let mut right = [0u8; KEY_SIZE];
        OsRng.fill_bytes(&mut left);
        OsRng.fill_bytes(&mut right);
        Self { left, right }
    }

    /// Construct from caller-supplied keys (deterministic setups and tests)
    pub fn from_keys(left: [u8; KEY_SIZE], right: [u8; KEY_SIZE]) -> Self {
        Self { left, right }
    }
}

/// Chaos parameters for one half: growth rate r in [3.57, 4.0] and
/// trajectory seed x0 in [0, 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaosParams {
    pub r: f64,
    pub x0: f64,
}

/// Everything `encrypt` returns. The chaos parameters travel out-of-band:
/// they are needed again at decrypt time and are never embedded in `merged`.
/// The cipher IVs, by contrast, ride inside each half's ciphertext bytes.
#[derive(Debug, Clone)]
pub struct CipherRecord {
    /// Left and right permuted nucleotide sequences, concatenated
    pub merged: String,
    /// Permutation applied to the left half (diagnostic display only)
    pub left_indices: Vec<usize>,
    /// Permutation applied to the right half (diagnostic display only)
    pub right_indices: Vec<usize>,
    pub left: ChaosParams,
    pub right: ChaosParams,
}

/// Orchestrates the full pipeline: split, AES-256-CBC per half, nucleotide
/// encoding, chaotic permutation, merge, and the exact reverse.
///
/// Keys are read-only after construction. The owned PRNG only feeds default
/// chaos-parameter draws; keys and IVs always come from the system CSPRNG.
pub struct HybridCryptosystem {
    cipher_left: BlockCipher,
    cipher_right: BlockCipher,
    rng: StdRng,
}

impl HybridCryptosystem {
    /// Fresh random keys, entropy-seeded chaos PRNG
    pub fn new() -> Self {
        Self::with_parts(SecretMaterial::generate(), StdRng::from_entropy())
    }

    /// Explicit keys and chaos PRNG, for deterministic construction
    pub fn with_parts(secret: SecretMaterial, rng: StdRng) -> Self {
        Self {
            cipher_left: BlockCipher::with_key(secret.left),
            cipher_right: BlockCipher::with_key(secret.right),
            rng,
        }
    }

    /// Encrypt a plaintext, optionally pinning the chaos parameters.
    ///
    /// Takes `&mut self` only to advance the owned chaos PRNG when no
    /// override is supplied; keys are never touched after construction.
    pub fn encrypt(
        &mut self,
        plaintext: &str,
        chaos_override: Option<(ChaosParams, ChaosParams)>,
    ) -> Result<CipherRecord> {
        let (left, right) = split_plaintext(plaintext);

        let ct_left = self.cipher_left.encrypt(left.as_bytes());
        let ct_right = self.cipher_right.encrypt(right.as_bytes());

        self.scramble(&codec::encode(&ct_left), &codec::encode(&ct_right), chaos_override)
    }

    /// Permute the two encoded halves and assemble the record.
    /// Shared by `encrypt` and the pinned-IV path.
    fn scramble(
        &mut self,
        dna_left: &str,
        dna_right: &str,
        chaos_override: Option<(ChaosParams, ChaosParams)>,
    ) -> Result<CipherRecord> {
        // Defensive integrity check on our own encoder output
        validate::sequence(dna_left)?;
        validate::sequence(dna_right)?;

        let (mapper_left, mapper_right) = match chaos_override {
            Some((l, r)) => (
                ChaosMapper::new(l.r, l.x0, dna_left.len())?,
                ChaosMapper::new(r.r, r.x0, dna_right.len())?,
            ),
            None => (
                ChaosMapper::draw(&mut self.rng, dna_left.len()),
                ChaosMapper::draw(&mut self.rng, dna_right.len()),
            ),
        };

        let left_indices = mapper_left.indices();
        let right_indices = mapper_right.indices();

        let permuted_left = ChaosMapper::permute(dna_left, &left_indices)?;
        let permuted_right = ChaosMapper::permute(dna_right, &right_indices)?;

        let mut merged = permuted_left;
        merged.push_str(&permuted_right);

        Ok(CipherRecord {
            merged,
            left_indices,
            right_indices,
            left: ChaosParams {
                r: mapper_left.r,
                x0: mapper_left.x0,
            },
            right: ChaosParams {
                r: mapper_right.r,
                x0: mapper_right.x0,
            },
        })
    }

    /// Fully deterministic encryption: pinned chaos parameters and pinned
    /// cipher IVs. With fixed keys this makes the whole pipeline a pure
    /// function of its inputs, which the public `encrypt` deliberately is
    /// not (it draws fresh IVs per call).
    #[cfg(test)]
    pub(crate) fn encrypt_with_ivs(
        &mut self,
        plaintext: &str,
        chaos: (ChaosParams, ChaosParams),
        iv_left: &[u8; 16],
        iv_right: &[u8; 16],
    ) -> Result<CipherRecord> {
        let (left, right) = split_plaintext(plaintext);

        let ct_left = self.cipher_left.encrypt_with_iv(iv_left, left.as_bytes());
        let ct_right = self.cipher_right.encrypt_with_iv(iv_right, right.as_bytes());

        self.scramble(&codec::encode(&ct_left), &codec::encode(&ct_right), Some(chaos))
    }

    /// Decrypt a merged sequence using the chaos parameters returned by the
    /// `encrypt` call that produced it.
    ///
    /// Wrong parameters, wrong keys, and corrupted input are deliberately
    /// indistinguishable: almost every such mistake surfaces as `PadFailure`
    /// from one of the cipher halves.
    pub fn decrypt(&self, merged: &str, left: ChaosParams, right: ChaosParams) -> Result<String> {
        // Midpoint split mirrors encrypt's merge. If the two permuted halves
        // were not equal length (possible for odd plaintexts straddling a
        // padding boundary) this misaligns them and decryption fails, a
        // documented limitation of the ciphertext format, which carries no
        // split offset.
        let bytes = merged.as_bytes();
        let split_idx = bytes.len() / 2;
        let permuted_left = std::str::from_utf8(&bytes[..split_idx])
            .map_err(|_| HelixError::MalformedSequence(split_idx))?;
        let permuted_right = std::str::from_utf8(&bytes[split_idx..])
            .map_err(|_| HelixError::MalformedSequence(bytes.len() - split_idx))?;

        validate::sequence(permuted_left)?;
        validate::sequence(permuted_right)?;
        validate::growth_rate("r_left", left.r)?;
        validate::seed("x0_left", left.x0)?;
        validate::growth_rate("r_right", right.r)?;
        validate::seed("x0_right", right.x0)?;

        let indices_left = ChaosMapper::new(left.r, left.x0, permuted_left.len())?.indices();
        let indices_right = ChaosMapper::new(right.r, right.x0, permuted_right.len())?.indices();

        let dna_left = ChaosMapper::unpermute(permuted_left, &indices_left)?;
        let dna_right = ChaosMapper::unpermute(permuted_right, &indices_right)?;

        let ct_left = codec::decode(&dna_left)?;
        let ct_right = codec::decode(&dna_right)?;

        let pt_left = self.cipher_left.decrypt(&ct_left)?;
        let pt_right = self.cipher_right.decrypt(&ct_right)?;

        let mut plaintext = pt_left;
        plaintext.extend_from_slice(&pt_right);

        // Best-effort text recovery: undecodable byte sequences become
        // U+FFFD so a caller can inspect partial garbage
        Ok(String::from_utf8_lossy(&plaintext).into_owned())
    }

    /// Two-outcome adapter: any encryption failure collapses to `None`
    pub fn encrypt_opt(
        &mut self,
        plaintext: &str,
        chaos_override: Option<(ChaosParams, ChaosParams)>,
    ) -> Option<CipherRecord> {
        self.encrypt(plaintext, chaos_override).ok()
    }

    /// Two-outcome adapter: wrong parameters, wrong keys, and malformed
    /// input all collapse to `None`, indistinguishably
    pub fn decrypt_opt(&self, merged: &str, left: ChaosParams, right: ChaosParams) -> Option<String> {
        self.decrypt(merged, left, right).ok()
    }
}

impl Default for HybridCryptosystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Split at the midpoint of the code-point sequence, matching the original
/// string semantics rather than byte offsets. The two differ only for
/// multi-byte characters.
fn split_plaintext(plaintext: &str) -> (&str, &str) {
    let mid = plaintext.chars().count() / 2;
    let byte_idx = plaintext
        .char_indices()
        .nth(mid)
        .map(|(i, _)| i)
        .unwrap_or(plaintext.len());
    plaintext.split_at(byte_idx)
}

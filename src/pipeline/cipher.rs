use crate::error::{HelixError, Result};
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::{rngs::OsRng, RngCore};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// AES block size in bytes; also the IV size
pub const BLOCK_SIZE: usize = 16;

/// Key size in bytes (AES-256)
pub const KEY_SIZE: usize = 32;

/// AES-256-CBC with PKCS7 padding and a fresh random IV per message.
/// The key is fixed at construction and read-only afterwards.
pub struct BlockCipher {
    key: [u8; KEY_SIZE],
}

impl BlockCipher {
    /// Create a cipher with a fresh 256-bit key from the system CSPRNG
    pub fn new() -> Self {
        let mut key = [0u8; KEY_SIZE];
        OsRng.fill_bytes(&mut key);
        Self { key }
    }

    /// Create a cipher with a caller-supplied key
    pub fn with_key(key: [u8; KEY_SIZE]) -> Self {
        Self { key }
    }

    /// Encrypt plaintext, returning `iv || ciphertext`.
    /// A fresh IV is drawn from the CSPRNG on every call; reusing an IV
    /// under the same key is forbidden.
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let mut iv = [0u8; BLOCK_SIZE];
        OsRng.fill_bytes(&mut iv);
        self.encrypt_with_iv(&iv, plaintext)
    }

    /// Deterministic encryption path: same key, IV, and plaintext always
    /// produce the same output. Callers outside the crate only get the
    /// random-IV entry point.
    pub(crate) fn encrypt_with_iv(&self, iv: &[u8; BLOCK_SIZE], plaintext: &[u8]) -> Vec<u8> {
        let ct = Aes256CbcEnc::new(&self.key.into(), iv.into())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

        let mut out = Vec::with_capacity(BLOCK_SIZE + ct.len());
        out.extend_from_slice(iv);
        out.extend_from_slice(&ct);
        out
    }

    /// Decrypt `iv || ciphertext` produced by `encrypt`.
    /// A padding mismatch maps to `PadFailure`, the single signal for
    /// "wrong key or parameters" throughout the system.
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() < BLOCK_SIZE {
            return Err(HelixError::TruncatedCiphertext(data.len()));
        }

        let (iv, ct) = data.split_at(BLOCK_SIZE);
        let iv: &[u8; BLOCK_SIZE] = iv.try_into().expect("split_at produced IV-sized slice");

        Aes256CbcDec::new(&self.key.into(), iv.into())
            .decrypt_padded_vec_mut::<Pkcs7>(ct)
            .map_err(|_| HelixError::PadFailure)
    }
}

impl Default for BlockCipher {
    fn default() -> Self {
        Self::new()
    }
}

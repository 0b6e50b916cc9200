use crate::error::{HelixError, Result};

/// Nucleotide symbols indexed by their 2-bit group: 00→A, 01→T, 10→C, 11→G.
/// Fixed mapping, not configurable.
const SYMBOLS: [u8; 4] = [b'A', b'T', b'C', b'G'];

/// Symbols per encoded byte (four 2-bit groups)
pub const SYMBOLS_PER_BYTE: usize = 4;

/// Encode bytes as a nucleotide sequence, most-significant bits first.
/// Output length is always 4x the input length.
pub fn encode(data: &[u8]) -> String {
    let mut out = Vec::with_capacity(data.len() * SYMBOLS_PER_BYTE);
    for &byte in data {
        for shift in [6, 4, 2, 0] {
            out.push(SYMBOLS[((byte >> shift) & 0b11) as usize]);
        }
    }
    // SYMBOLS is ASCII, so the buffer is valid UTF-8
    String::from_utf8(out).expect("nucleotide alphabet is ASCII")
}

/// Decode a nucleotide sequence back to bytes.
/// A symbol count that is not a multiple of 4 cannot come from `encode`
/// and is rejected rather than silently truncated.
pub fn decode(seq: &str) -> Result<Vec<u8>> {
    let bytes = seq.as_bytes();
    if bytes.len() % SYMBOLS_PER_BYTE != 0 {
        return Err(HelixError::MalformedSequence(bytes.len()));
    }

    let mut out = Vec::with_capacity(bytes.len() / SYMBOLS_PER_BYTE);
    for chunk in bytes.chunks_exact(SYMBOLS_PER_BYTE) {
        let mut byte = 0u8;
        for &symbol in chunk {
            let group = match symbol {
                b'A' => 0b00,
                b'T' => 0b01,
                b'C' => 0b10,
                b'G' => 0b11,
                other => return Err(HelixError::InvalidSymbol(other as char)),
            };
            byte = (byte << 2) | group;
        }
        out.push(byte);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_known_values() {
        // 0x00 = 00 00 00 00, 0xFF = 11 11 11 11
        assert_eq!(encode(&[0x00]), "AAAA");
        assert_eq!(encode(&[0xFF]), "GGGG");
        // 0x1B = 00 01 10 11
        assert_eq!(encode(&[0x1B]), "ATCG");
        // 0xE4 = 11 10 01 00
        assert_eq!(encode(&[0xE4]), "GCTA");
    }

    #[test]
    fn test_encode_length_law() {
        assert_eq!(encode(&[]).len(), 0);
        assert_eq!(encode(&[1, 2, 3]).len(), 12);
    }

    #[test]
    fn test_decode_known_values() {
        assert_eq!(decode("ATCG").unwrap(), vec![0x1B]);
        assert_eq!(decode("AAAAGGGG").unwrap(), vec![0x00, 0xFF]);
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_rejects_partial_byte() {
        // 6 symbols = 12 bits, not a whole number of bytes
        assert_eq!(
            decode("ATCGAT").unwrap_err(),
            HelixError::MalformedSequence(6)
        );
        assert_eq!(decode("A").unwrap_err(), HelixError::MalformedSequence(1));
    }

    #[test]
    fn test_decode_rejects_foreign_symbols() {
        assert_eq!(decode("ATCU").unwrap_err(), HelixError::InvalidSymbol('U'));
        assert_eq!(decode("atcg").unwrap_err(), HelixError::InvalidSymbol('a'));
    }

    proptest! {
        #[test]
        fn prop_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..256)) {
            let seq = encode(&data);
            prop_assert_eq!(seq.len(), data.len() * SYMBOLS_PER_BYTE);
            prop_assert_eq!(decode(&seq).unwrap(), data);
        }
    }
}

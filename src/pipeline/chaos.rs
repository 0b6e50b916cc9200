use crate::error::{HelixError, Result};
use crate::validate;
use rand::Rng;

/// Logistic-map permutation generator.
///
/// Iterating `x = r * x * (1 - x)` from a seed x0 in the chaotic regime
/// produces a trajectory whose value ordering is extremely sensitive to
/// (r, x0). Stable-sorting the index set by trajectory value turns that
/// ordering into a full permutation of 0..length, exactly invertible by
/// anyone who can regenerate the same trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaosMapper {
    pub r: f64,
    pub x0: f64,
    length: usize,
}

impl ChaosMapper {
    /// Create a mapper from explicit parameters, validating their ranges
    pub fn new(r: f64, x0: f64, length: usize) -> Result<Self> {
        validate::growth_rate("r", r)?;
        validate::seed("x0", x0)?;
        Ok(Self { r, x0, length })
    }

    /// Create a mapper with parameters drawn from the supplied PRNG:
    /// r uniform in [3.57, 4.0), x0 uniform in [0, 1).
    ///
    /// The draw is pseudo-random by design; this is a demonstration, not a
    /// key-generation mechanism. The caller controls the generator, so tests
    /// can pin a seed.
    pub fn draw<R: Rng>(rng: &mut R, length: usize) -> Self {
        Self {
            r: rng.gen_range(validate::R_MIN..validate::R_MAX),
            x0: rng.gen_range(validate::X0_MIN..validate::X0_MAX),
            length,
        }
    }

    /// Generate the permutation: iterate the map `length` times (x0 itself
    /// is discarded, x1..x_length are kept) and stable-sort the indices by
    /// ascending trajectory value.
    ///
    /// The stable sort pins the output even if two trajectory values ever
    /// compare equal, so the permutation is a pure function of (r, x0, length).
    pub fn indices(&self) -> Vec<usize> {
        let mut x = self.x0;
        let mut trajectory = Vec::with_capacity(self.length);
        for _ in 0..self.length {
            x = self.r * x * (1.0 - x);
            trajectory.push(x);
        }

        let mut indices: Vec<usize> = (0..self.length).collect();
        // Trajectory values stay in [0, 1] for valid (r, x0); total_cmp keeps
        // the comparison total regardless
        indices.sort_by(|&a, &b| trajectory[a].total_cmp(&trajectory[b]));
        indices
    }

    /// Gather: `out[i] = seq[indices[i]]`
    pub fn permute(seq: &str, indices: &[usize]) -> Result<String> {
        let bytes = seq.as_bytes();
        check_lengths(bytes.len(), indices)?;

        let out: Vec<u8> = indices.iter().map(|&idx| bytes[idx]).collect();
        Ok(String::from_utf8(out).expect("permutation of ASCII input"))
    }

    /// Scatter: `out[indices[i]] = seq[i]`, the exact inverse of `permute`
    pub fn unpermute(seq: &str, indices: &[usize]) -> Result<String> {
        let bytes = seq.as_bytes();
        check_lengths(bytes.len(), indices)?;

        let mut out = vec![0u8; bytes.len()];
        for (i, &idx) in indices.iter().enumerate() {
            out[idx] = bytes[i];
        }
        Ok(String::from_utf8(out).expect("permutation of ASCII input"))
    }
}

/// Sequences are permuted bytewise; callers validate the alphabet first, so
/// every index lands on an ASCII symbol.
fn check_lengths(len: usize, indices: &[usize]) -> Result<()> {
    if indices.len() != len {
        return Err(HelixError::LengthMismatch {
            expected: indices.len(),
            got: len,
        });
    }
    if let Some(&bad) = indices.iter().find(|&&idx| idx >= len) {
        return Err(HelixError::IndexOutOfRange { index: bad, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_indices_form_a_permutation() {
        let mapper = ChaosMapper::new(3.9, 0.5, 64).unwrap();
        let mut indices = mapper.indices();
        indices.sort_unstable();
        assert_eq!(indices, (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn test_indices_are_deterministic() {
        let a = ChaosMapper::new(3.9, 0.5, 100).unwrap().indices();
        let b = ChaosMapper::new(3.9, 0.5, 100).unwrap().indices();
        assert_eq!(a, b);
    }

    #[test]
    fn test_nearby_parameters_diverge() {
        let a = ChaosMapper::new(3.9, 0.5, 100).unwrap().indices();
        let b = ChaosMapper::new(3.9, 0.5000001, 100).unwrap().indices();
        assert_ne!(a, b);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(ChaosMapper::new(3.0, 0.5, 10).is_err());
        assert!(ChaosMapper::new(3.9, 1.0, 10).is_err());
    }

    #[test]
    fn test_draw_stays_in_range() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let mapper = ChaosMapper::draw(&mut rng, 16);
            assert!((3.57..4.0).contains(&mapper.r));
            assert!((0.0..1.0).contains(&mapper.x0));
        }
    }

    #[test]
    fn test_permute_unpermute_roundtrip() {
        let seq = "ATCGGCTAATCGGCTA";
        let mapper = ChaosMapper::new(3.8, 0.3, seq.len()).unwrap();
        let indices = mapper.indices();

        let permuted = ChaosMapper::permute(seq, &indices).unwrap();
        let restored = ChaosMapper::unpermute(&permuted, &indices).unwrap();
        assert_eq!(restored, seq);
    }

    #[test]
    fn test_permute_length_mismatch() {
        let indices = vec![0, 1, 2];
        assert_eq!(
            ChaosMapper::permute("ATCG", &indices).unwrap_err(),
            HelixError::LengthMismatch {
                expected: 3,
                got: 4
            }
        );
    }

    #[test]
    fn test_permute_rejects_out_of_range_index() {
        let indices = vec![0, 1, 9, 3];
        assert_eq!(
            ChaosMapper::permute("ATCG", &indices).unwrap_err(),
            HelixError::IndexOutOfRange { index: 9, len: 4 }
        );
    }

    #[test]
    fn test_empty_sequence() {
        let mapper = ChaosMapper::new(3.9, 0.5, 0).unwrap();
        let indices = mapper.indices();
        assert!(indices.is_empty());
        assert_eq!(ChaosMapper::permute("", &indices).unwrap(), "");
        assert_eq!(ChaosMapper::unpermute("", &indices).unwrap(), "");
    }

    proptest! {
        #[test]
        fn prop_inverse_law(
            len in 0usize..200,
            r in 3.57f64..4.0,
            x0 in 0.0f64..1.0,
        ) {
            let seq: String = (0..len)
                .map(|i| ['A', 'T', 'C', 'G'][i % 4])
                .collect();
            let mapper = ChaosMapper::new(r, x0, len).unwrap();
            let indices = mapper.indices();

            let mut sorted = indices.clone();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..len).collect::<Vec<_>>());

            let permuted = ChaosMapper::permute(&seq, &indices).unwrap();
            prop_assert_eq!(ChaosMapper::unpermute(&permuted, &indices).unwrap(), seq);
        }
    }
}

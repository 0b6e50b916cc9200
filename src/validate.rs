use crate::error::{HelixError, Result};

/// Logistic-map growth rate bounds. Below ~3.57 the map is periodic rather
/// than chaotic; above 4.0 trajectories escape [0, 1].
pub const R_MIN: f64 = 3.57;
pub const R_MAX: f64 = 4.0;

/// Trajectory seed bounds. 1.0 itself maps straight to the fixed point 0.
pub const X0_MIN: f64 = 0.0;
pub const X0_MAX: f64 = 1.0;

/// Validate a growth rate against the closed interval [R_MIN, R_MAX].
/// Out-of-range values are rejected, never clamped.
pub fn growth_rate(field: &'static str, value: f64) -> Result<()> {
    if !(R_MIN..=R_MAX).contains(&value) {
        return Err(HelixError::ParamOutOfRange {
            field,
            value,
            min: R_MIN,
            max: R_MAX,
        });
    }
    Ok(())
}

/// Validate a trajectory seed against the half-open interval [X0_MIN, X0_MAX).
pub fn seed(field: &'static str, value: f64) -> Result<()> {
    if !(X0_MIN..X0_MAX).contains(&value) {
        return Err(HelixError::ParamOutOfRange {
            field,
            value,
            min: X0_MIN,
            max: X0_MAX,
        });
    }
    Ok(())
}

/// Check that every symbol of a nucleotide sequence belongs to {A, T, C, G}.
/// Both encrypt and decrypt run this before trusting a sequence.
pub fn sequence(seq: &str) -> Result<()> {
    for c in seq.chars() {
        if !matches!(c, 'A' | 'T' | 'C' | 'G') {
            return Err(HelixError::InvalidSymbol(c));
        }
    }
    Ok(())
}

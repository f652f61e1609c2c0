// ungapped.rs - Column-for-column pairing of equal-length sequences

use super::traits::{AlignedPair, PairwiseAligner};
use crate::error::{AlnError, Result};

/// Pairs residue `i` with residue `i`. Only valid for sequences of equal
/// length (e.g. coding sequences already in frame with each other).
#[derive(Debug, Clone, Default)]
pub struct UngappedAligner;

impl PairwiseAligner for UngappedAligner {
    fn align(&self, first: &[u8], second: &[u8]) -> Result<Vec<AlignedPair>> {
        if first.len() != second.len() {
            return Err(AlnError::length(
                "ungapped alignment",
                format!(
                    "sequences must have equal length ({} vs {})",
                    first.len(),
                    second.len()
                ),
            ));
        }
        Ok(vec![AlignedPair::new(first, second)])
    }

    fn name(&self) -> &'static str {
        "ungapped"
    }

    fn description(&self) -> &'static str {
        "Residue-by-residue pairing of equal-length sequences (no gaps)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_lengths() {
        let pair = UngappedAligner.align_first(b"MKV", b"MRV").unwrap();
        assert_eq!(pair.first, b"MKV".to_vec());
        assert_eq!(pair.second, b"MRV".to_vec());
    }

    #[test]
    fn test_unequal_lengths() {
        assert!(matches!(
            UngappedAligner.align(b"MKV", b"MK"),
            Err(AlnError::Length { .. })
        ));
    }
}

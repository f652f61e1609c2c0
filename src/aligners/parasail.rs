// parasail.rs - Global affine-gap protein alignment backed by parasail

use parasail_rs::{Aligner, Matrix};

use super::traits::{AlignedPair, AlignerConfig, PairwiseAligner};
use crate::data::alignment::GAP;
use crate::error::{AlnError, Result};

/// Needleman-Wunsch with affine gaps and a named substitution matrix.
/// Parasail reports a single optimal alignment per call.
#[derive(Debug, Clone)]
pub struct ParasailAligner {
    config: AlignerConfig,
}

impl ParasailAligner {
    pub fn new(config: AlignerConfig) -> Self {
        Self { config }
    }
}

impl Default for ParasailAligner {
    fn default() -> Self {
        Self::new(AlignerConfig::default())
    }
}

impl PairwiseAligner for ParasailAligner {
    fn align(&self, first: &[u8], second: &[u8]) -> Result<Vec<AlignedPair>> {
        // parasail rejects zero-length input; an empty side is all gaps
        if first.is_empty() {
            return Ok(vec![AlignedPair::new(vec![GAP; second.len()], second)]);
        }
        if second.is_empty() {
            return Ok(vec![AlignedPair::new(first, vec![GAP; first.len()])]);
        }

        let matrix = Matrix::from(self.config.matrix.as_str()).map_err(|_| {
            AlnError::Aligner(format!("Unknown substitution matrix: {}", self.config.matrix))
        })?;

        let trace_aligner = Aligner::new()
            .matrix(matrix)
            .gap_open(self.config.gap_open)
            .gap_extend(self.config.gap_extend)
            .global()
            .use_trace()
            .build();

        let result = trace_aligner
            .align(Some(first), second)
            .map_err(|_| AlnError::Aligner("parasail alignment failed".to_string()))?;
        let traceback = result
            .get_traceback_strings(first, second)
            .map_err(|_| AlnError::Aligner("parasail traceback failed".to_string()))?;

        Ok(vec![AlignedPair {
            first: traceback.query.as_bytes().to_vec(),
            second: traceback.reference.as_bytes().to_vec(),
            score: Some(result.get_score()),
        }])
    }

    fn name(&self) -> &'static str {
        "parasail"
    }

    fn description(&self) -> &'static str {
        "Global affine-gap alignment (parasail, substitution matrix scoring)"
    }
}

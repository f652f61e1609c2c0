// traits.rs - Pairwise aligner seam and scoring configuration

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::data::alignment::is_gap;
use crate::error::{AlnError, Result};

/// Scoring used for pairwise protein alignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignerConfig {
    pub matrix: String,
    pub gap_open: i32,
    pub gap_extend: i32,
    pub description: Option<String>,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            matrix: "blosum62".to_string(),
            gap_open: 10,
            gap_extend: 1,
            description: Some("Default protein alignment parameters".to_string()),
        }
    }
}

impl AlignerConfig {
    /// Create configuration from mode string
    pub fn from_mode(mode: &str) -> std::result::Result<Self, String> {
        match mode {
            "protein" => Ok(Self::default()),
            "protein-close" => Ok(Self {
                matrix: "blosum80".to_string(),
                gap_open: 10,
                gap_extend: 1,
                description: Some("Closely related proteins (BLOSUM80)".to_string()),
            }),
            "protein-distant" => Ok(Self {
                matrix: "blosum45".to_string(),
                gap_open: 14,
                gap_extend: 2,
                description: Some("Distantly related proteins (BLOSUM45)".to_string()),
            }),
            _ => Err(format!("Unknown alignment mode: {}", mode)),
        }
    }

    /// Create custom configuration
    pub fn custom(matrix: &str, gap_open: i32, gap_extend: i32) -> Self {
        Self {
            matrix: matrix.to_lowercase(),
            gap_open,
            gap_extend,
            description: Some("Custom alignment parameters".to_string()),
        }
    }
}

/// One global alignment of two sequences, gaps written as `-`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair {
    pub first: Vec<u8>,
    pub second: Vec<u8>,
    pub score: Option<i32>,
}

impl AlignedPair {
    pub fn new(first: impl Into<Vec<u8>>, second: impl Into<Vec<u8>>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            score: None,
        }
    }

    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// Check the pair is well formed: equal lengths and, once gaps are
    /// removed, exactly the sequences that were aligned
    pub fn validate(&self, first: &[u8], second: &[u8]) -> Result<()> {
        if self.first.len() != self.second.len() {
            return Err(AlnError::length(
                "aligned pair",
                format!(
                    "aligned sequences differ in length ({} vs {})",
                    self.first.len(),
                    self.second.len()
                ),
            ));
        }
        let strip = |s: &[u8]| -> Vec<u8> { s.iter().copied().filter(|&r| !is_gap(r)).collect() };
        if !strip(&self.first).eq_ignore_ascii_case(first)
            || !strip(&self.second).eq_ignore_ascii_case(second)
        {
            return Err(AlnError::Aligner(
                "aligned sequences do not reproduce their inputs".to_string(),
            ));
        }
        Ok(())
    }
}

/// Global pairwise alignment backend.
///
/// Implementations return every co-optimal alignment they report, in their own
/// deterministic order. Callers that need a single alignment take the first.
pub trait PairwiseAligner: Send + Sync + Debug {
    fn align(&self, first: &[u8], second: &[u8]) -> Result<Vec<AlignedPair>>;

    /// Get a human-readable name for this aligner
    fn name(&self) -> &'static str;

    /// Get a description of this aligner
    fn description(&self) -> &'static str;

    /// First co-optimal alignment, checked against its inputs
    fn align_first(&self, first: &[u8], second: &[u8]) -> Result<AlignedPair> {
        let pair = self
            .align(first, second)?
            .into_iter()
            .next()
            .ok_or_else(|| AlnError::Aligner(format!("{} returned no alignment", self.name())))?;
        pair.validate(first, second)?;
        Ok(pair)
    }
}

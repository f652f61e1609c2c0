// codon.rs - Genetic code lookup and nucleotide translation

use crate::error::{AlnError, Result};

/// Residue emitted for a stop codon
pub const STOP: u8 = b'*';

// Codon order: AAA, AAC, AAG, AAT, ACA, ... TTT (A=0, C=1, G=2, T/U=3)
const STANDARD_CODE: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

fn base_index(base: u8) -> Option<usize> {
    match base.to_ascii_lowercase() {
        b'a' => Some(0),
        b'c' => Some(1),
        b'g' => Some(2),
        b't' | b'u' => Some(3),
        _ => None,
    }
}

/// Immutable codon -> residue table, passed to whoever needs to translate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonTable {
    name: &'static str,
    residues: [u8; 64],
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Protein produced from a nucleotide sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub protein: Vec<u8>,
    /// 1-based residue positions of stop codons kept inside the protein
    pub internal_stops: Vec<usize>,
    pub terminal_stop_trimmed: bool,
}

impl CodonTable {
    /// The standard genetic code (NCBI table 1)
    pub fn standard() -> Self {
        Self {
            name: "standard",
            residues: STANDARD_CODE,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Residue for a 3-base codon, case-insensitive; `None` for anything that
    /// is not three of A/C/G/T/U
    pub fn residue(&self, codon: &[u8]) -> Option<u8> {
        if codon.len() != 3 {
            return None;
        }
        let index = base_index(codon[0])? * 16 + base_index(codon[1])? * 4 + base_index(codon[2])?;
        Some(self.residues[index])
    }

    /// Translate one non-overlapping triplet at a time. A final stop is
    /// trimmed; internal stops stay in the protein and are listed.
    pub fn translate(&self, nucleotides: &[u8], name: &str) -> Result<Translation> {
        if nucleotides.len() % 3 != 0 {
            return Err(AlnError::length(
                name,
                format!(
                    "nucleotide length {} is not a multiple of 3",
                    nucleotides.len()
                ),
            ));
        }

        let mut protein = Vec::with_capacity(nucleotides.len() / 3);
        for (i, codon) in nucleotides.chunks_exact(3).enumerate() {
            let residue = self.residue(codon).ok_or_else(|| {
                AlnError::format(
                    "a codon of A/C/G/T/U",
                    String::from_utf8_lossy(codon).into_owned(),
                    format!("at codon {} of '{}'", i + 1, name),
                )
            })?;
            protein.push(residue);
        }

        let terminal_stop_trimmed = protein.last() == Some(&STOP);
        if terminal_stop_trimmed {
            protein.pop();
        }
        let internal_stops = protein
            .iter()
            .enumerate()
            .filter(|(_, r)| **r == STOP)
            .map(|(i, _)| i + 1)
            .collect();

        Ok(Translation {
            protein,
            internal_stops,
            terminal_stop_trimmed,
        })
    }
}

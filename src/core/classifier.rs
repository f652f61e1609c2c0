// classifier.rs - Codon-aware classification of a pairwise protein alignment

use serde::Serialize;
use std::fmt;

use crate::aligners::{AlignedPair, PairwiseAligner};
use crate::data::alignment::is_gap;
use crate::data::codon::{CodonTable, Translation};
use crate::error::{AlnError, Result};

/// What happened at one protein alignment column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationClass {
    Indel,
    Synonymous,
    Nonsynonymous,
    Identical,
}

impl MutationClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationClass::Indel => "indel",
            MutationClass::Synonymous => "synonymous",
            MutationClass::Nonsynonymous => "nonsynonymous",
            MutationClass::Identical => "identical",
        }
    }
}

impl fmt::Display for MutationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Final totals of a classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MutationTotals {
    pub columns: usize,
    pub indels: usize,
    pub synonymous: usize,
    pub nonsynonymous: usize,
    pub identical: usize,
}

/// Per-column classes plus the three running totals the plot consumes.
/// Index `i` of every vector describes alignment column `i + 1`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassificationTrace {
    pub classes: Vec<MutationClass>,
    pub cumulative_indels: Vec<usize>,
    pub cumulative_synonymous: Vec<usize>,
    pub cumulative_nonsynonymous: Vec<usize>,
    #[serde(skip)]
    pub aligned: Option<AlignedPair>,
    /// 1-based protein positions of internal stop codons, per input
    pub internal_stops: (Vec<usize>, Vec<usize>),
}

impl ClassificationTrace {
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// 1-based column positions, the x axis of the cumulative plot
    pub fn columns(&self) -> impl Iterator<Item = usize> {
        1..=self.classes.len()
    }

    pub fn totals(&self) -> MutationTotals {
        MutationTotals {
            columns: self.classes.len(),
            indels: self.cumulative_indels.last().copied().unwrap_or(0),
            synonymous: self.cumulative_synonymous.last().copied().unwrap_or(0),
            nonsynonymous: self.cumulative_nonsynonymous.last().copied().unwrap_or(0),
            identical: self
                .classes
                .iter()
                .filter(|&&c| c == MutationClass::Identical)
                .count(),
        }
    }

    fn push(&mut self, class: MutationClass) {
        let last = |v: &Vec<usize>| v.last().copied().unwrap_or(0);
        let (indels, synonymous, nonsynonymous) = (
            last(&self.cumulative_indels),
            last(&self.cumulative_synonymous),
            last(&self.cumulative_nonsynonymous),
        );
        self.cumulative_indels
            .push(indels + usize::from(class == MutationClass::Indel));
        self.cumulative_synonymous
            .push(synonymous + usize::from(class == MutationClass::Synonymous));
        self.cumulative_nonsynonymous
            .push(nonsynonymous + usize::from(class == MutationClass::Nonsynonymous));
        self.classes.push(class);
    }
}

/// Codon of the `position`-th (1-based) residue
fn codon_at<'n>(nucleotides: &'n [u8], position: usize, side: &str) -> Result<&'n [u8]> {
    nucleotides
        .get(3 * (position - 1)..3 * position)
        .ok_or_else(|| {
            AlnError::range(
                "codon",
                position,
                format!("1..={} in the {} sequence", nucleotides.len() / 3, side),
            )
        })
}

/// Classify an existing protein alignment against the nucleotide sequences
/// the proteins were translated from.
///
/// Two counters track how many residues of each protein have been consumed;
/// a counter only moves when its side is not a gap. Gap on either side is an
/// indel. Different residues are non-synonymous. Equal residues are
/// synonymous when their codons differ (ignoring case), identical otherwise.
/// An aligned pair of unequal length, or one with more residues than the
/// nucleotides encode, is an error.
pub fn classify_aligned(
    nt_first: &[u8],
    nt_second: &[u8],
    aligned: &AlignedPair,
) -> Result<ClassificationTrace> {
    if aligned.first.len() != aligned.second.len() {
        return Err(AlnError::length(
            "aligned pair",
            format!(
                "aligned sequences differ in length ({} vs {})",
                aligned.first.len(),
                aligned.second.len()
            ),
        ));
    }

    let mut trace = ClassificationTrace::default();
    let (mut position_first, mut position_second) = (0, 0);

    for (&residue_first, &residue_second) in aligned.first.iter().zip(aligned.second.iter()) {
        let gap_first = is_gap(residue_first);
        let gap_second = is_gap(residue_second);
        if !gap_first {
            position_first += 1;
        }
        if !gap_second {
            position_second += 1;
        }

        let class = if gap_first || gap_second {
            MutationClass::Indel
        } else if residue_first != residue_second {
            MutationClass::Nonsynonymous
        } else if codon_at(nt_first, position_first, "first")?
            .eq_ignore_ascii_case(codon_at(nt_second, position_second, "second")?)
        {
            MutationClass::Identical
        } else {
            MutationClass::Synonymous
        };
        trace.push(class);
    }

    Ok(trace)
}

/// Translates both inputs, aligns the proteins and classifies every column
#[derive(Debug, Clone, Copy)]
pub struct MutationClassifier<'a> {
    codon_table: &'a CodonTable,
    aligner: &'a dyn PairwiseAligner,
}

impl<'a> MutationClassifier<'a> {
    pub fn new(codon_table: &'a CodonTable, aligner: &'a dyn PairwiseAligner) -> Self {
        Self {
            codon_table,
            aligner,
        }
    }

    pub fn translate(&self, nucleotides: &[u8], name: &str) -> Result<Translation> {
        self.codon_table.translate(nucleotides, name)
    }

    /// Fails with a length error (before any alignment) when either input is
    /// not a whole number of codons. When the aligner reports several
    /// co-optimal alignments the first one is used.
    pub fn classify(&self, nt_first: &[u8], nt_second: &[u8]) -> Result<ClassificationTrace> {
        let first = self.translate(nt_first, "first sequence")?;
        let second = self.translate(nt_second, "second sequence")?;

        let aligned = self.aligner.align_first(&first.protein, &second.protein)?;

        let mut trace = classify_aligned(nt_first, nt_second, &aligned)?;
        trace.internal_stops = (first.internal_stops, second.internal_stops);
        trace.aligned = Some(aligned);
        Ok(trace)
    }
}

/// Translate, align and classify two nucleotide sequences
pub fn classify(
    nt_first: &[u8],
    nt_second: &[u8],
    codon_table: &CodonTable,
    aligner: &dyn PairwiseAligner,
) -> Result<ClassificationTrace> {
    MutationClassifier::new(codon_table, aligner).classify(nt_first, nt_second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aligners::{ParasailAligner, UngappedAligner};

    /// Returns fixed co-optimal alignments in a fixed order
    #[derive(Debug)]
    struct FixedAligner(Vec<AlignedPair>);

    impl PairwiseAligner for FixedAligner {
        fn align(&self, _first: &[u8], _second: &[u8]) -> Result<Vec<AlignedPair>> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &'static str {
            "fixed"
        }

        fn description(&self) -> &'static str {
            "test double"
        }
    }

    fn assert_invariants(trace: &ClassificationTrace) {
        for series in [
            &trace.cumulative_indels,
            &trace.cumulative_synonymous,
            &trace.cumulative_nonsynonymous,
        ] {
            assert_eq!(series.len(), trace.len());
            assert!(series.windows(2).all(|w| w[0] <= w[1]));
        }
        let totals = trace.totals();
        assert_eq!(
            totals.indels + totals.synonymous + totals.nonsynonymous + totals.identical,
            totals.columns
        );
    }

    #[test]
    fn test_identical_sequences() {
        let nt = b"ATGTTTGTTTTTCTTGTTTTATTGCCA";
        let trace = classify(nt, nt, &CodonTable::standard(), &UngappedAligner).unwrap();
        assert_invariants(&trace);
        let totals = trace.totals();
        assert_eq!(totals.columns, 9);
        assert_eq!((totals.indels, totals.synonymous, totals.nonsynonymous), (0, 0, 0));
        assert!(trace.classes.iter().all(|&c| c == MutationClass::Identical));
    }

    #[test]
    fn test_single_synonymous_third_position() {
        let trace = classify(
            b"ATGGCTAAA",
            b"ATGGCCAAA",
            &CodonTable::standard(),
            &UngappedAligner,
        )
        .unwrap();
        assert_invariants(&trace);
        assert_eq!(
            trace.classes,
            vec![
                MutationClass::Identical,
                MutationClass::Synonymous,
                MutationClass::Identical
            ]
        );
        assert_eq!(trace.cumulative_synonymous, vec![0, 1, 1]);
        assert_eq!(trace.totals().nonsynonymous, 0);
        assert_eq!(trace.totals().indels, 0);
    }

    #[test]
    fn test_nonsynonymous_and_case_insensitive_codons() {
        let trace = classify(
            b"atgGCTaaa",
            b"ATGGCTAGA",
            &CodonTable::standard(),
            &UngappedAligner,
        )
        .unwrap();
        assert_eq!(
            trace.classes,
            vec![
                MutationClass::Identical,
                MutationClass::Identical,
                MutationClass::Nonsynonymous
            ]
        );
    }

    #[test]
    fn test_indels_advance_only_the_residue_side() {
        // MAKW vs MKW, aligned as MAKW / M-KW. The K codons differ (AAA vs
        // AAG) and must be matched through the gap.
        let aligner = FixedAligner(vec![AlignedPair::new("MAKW", "M-KW")]);
        let trace = classify(
            b"ATGGCTAAATGG",
            b"ATGAAGTGG",
            &CodonTable::standard(),
            &aligner,
        )
        .unwrap();
        assert_invariants(&trace);
        assert_eq!(
            trace.classes,
            vec![
                MutationClass::Identical,
                MutationClass::Indel,
                MutationClass::Synonymous,
                MutationClass::Identical
            ]
        );
        assert_eq!(trace.cumulative_indels, vec![0, 1, 1, 1]);
        assert_eq!(trace.columns().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_first_co_optimal_alignment_is_used() {
        // Both placements of the gap score the same; the first reported wins.
        let aligner = FixedAligner(vec![
            AlignedPair::new("MKK", "M-K"),
            AlignedPair::new("MKK", "MK-"),
        ]);
        let trace = classify(b"ATGAAAAAG", b"ATGAAG", &CodonTable::standard(), &aligner).unwrap();
        assert_eq!(
            trace.classes,
            vec![
                MutationClass::Identical,
                MutationClass::Indel,
                MutationClass::Identical
            ]
        );
        assert_eq!(trace.aligned.unwrap().second, b"M-K".to_vec());
    }

    #[test]
    fn test_terminal_stop_is_not_a_column() {
        let trace = classify(
            b"ATGGCTTAA",
            b"ATGGCTTGA",
            &CodonTable::standard(),
            &UngappedAligner,
        )
        .unwrap();
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn test_internal_stops_are_reported() {
        let trace = classify(
            b"ATGTAAGCT",
            b"ATGTAGGCT",
            &CodonTable::standard(),
            &UngappedAligner,
        )
        .unwrap();
        assert_eq!(trace.internal_stops, (vec![2], vec![2]));
        assert_eq!(trace.classes[1], MutationClass::Synonymous);
    }

    #[test]
    fn test_length_not_multiple_of_three() {
        let result = classify(b"ATGGC", b"ATGGCT", &CodonTable::standard(), &UngappedAligner);
        assert!(matches!(result, Err(AlnError::Length { .. })));
    }

    #[test]
    fn test_empty_aligner_answer() {
        let aligner = FixedAligner(Vec::new());
        let result = classify(b"ATG", b"ATG", &CodonTable::standard(), &aligner);
        assert!(matches!(result, Err(AlnError::Aligner(_))));
    }

    #[test]
    fn test_parasail_codon_deletion() {
        // TGC (Cys) deleted in frame, GAT -> GAC (Asp) silent further on
        let trace = classify(
            b"ATGAAATGGTGCCATTTTTATGATGAATGG",
            b"ATGAAATGGCATTTTTATGACGAATGG",
            &CodonTable::standard(),
            &ParasailAligner::default(),
        )
        .unwrap();
        assert_invariants(&trace);
        assert_eq!(trace.aligned.as_ref().unwrap().second, b"MKW-HFYDEW".to_vec());
        use MutationClass::*;
        assert_eq!(
            trace.classes,
            vec![
                Identical, Identical, Identical, Indel, Identical, Identical, Identical,
                Synonymous, Identical, Identical
            ]
        );
        assert_eq!(trace.cumulative_indels.last(), Some(&1));
        assert_eq!(trace.cumulative_synonymous.last(), Some(&1));
    }

    #[test]
    fn test_parasail_empty_inputs() {
        let table = CodonTable::standard();
        let aligner = ParasailAligner::default();

        let trace = classify(b"", b"", &table, &aligner).unwrap();
        assert!(trace.is_empty());

        // a lone stop codon translates to an empty protein
        let trace = classify(b"TAA", b"ATGTAA", &table, &aligner).unwrap();
        assert_eq!(trace.classes, vec![MutationClass::Indel]);
        assert_eq!(trace.cumulative_indels, vec![1]);
    }

    #[test]
    fn test_aligned_pair_longer_than_nucleotides() {
        let result = classify_aligned(b"ATGAAA", b"ATGAAATGG", &AlignedPair::new("MKW", "MKW"));
        assert!(matches!(result, Err(AlnError::Range { .. })));
    }

    #[test]
    fn test_aligned_pair_of_unequal_length() {
        let result = classify_aligned(b"ATGAAA", b"ATGAAA", &AlignedPair::new("MK", "MK-"));
        assert!(matches!(result, Err(AlnError::Length { .. })));
    }
}

// insertions.rs - Insertions in a reference relative to the other aligned sequences

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::alignment::{is_gap, Alignment};
use crate::error::Result;

/// Reference ungapped position -> sequences with a gap opposite that residue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InsertionRecord {
    pub reference: String,
    pub positions: BTreeMap<usize, Vec<String>>,
}

impl InsertionRecord {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn at(&self, position: usize) -> Option<&[String]> {
        self.positions.get(&position).map(|names| names.as_slice())
    }

    /// Number of flagged positions per sequence, in first-seen order
    pub fn per_sequence_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for names in self.positions.values() {
            for name in names {
                match counts.iter_mut().find(|(n, _)| n == name) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((name.clone(), 1)),
                }
            }
        }
        counts
    }
}

/// Walk the alignment once, left to right. Columns where the reference has a
/// residue advance the reference position; every other sequence with a gap in
/// such a column is flagged at that position. Reference gap columns are
/// skipped and never reported.
pub fn detect_insertions(alignment: &Alignment, reference_name: &str) -> Result<InsertionRecord> {
    let reference = alignment.get(reference_name)?;
    let others: Vec<_> = alignment
        .sequences()
        .iter()
        .filter(|seq| seq.name != reference_name)
        .collect();

    let mut positions = BTreeMap::new();
    let mut ungapped_position = 0;

    for (column, &residue) in reference.residues.iter().enumerate() {
        if is_gap(residue) {
            continue;
        }
        ungapped_position += 1;

        let gapped: Vec<String> = others
            .iter()
            .filter(|seq| is_gap(seq.residues[column]))
            .map(|seq| seq.name.clone())
            .collect();
        if !gapped.is_empty() {
            positions.insert(ungapped_position, gapped);
        }
    }

    Ok(InsertionRecord {
        reference: reference_name.to_string(),
        positions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reindex::reindex;
    use crate::data::alignment::GappedSequence;
    use crate::error::AlnError;

    fn documented_example() -> Alignment {
        Alignment::new(
            "example",
            vec![
                GappedSequence::new("reference", "MART-PYLK"),
                GappedSequence::new("seq1", "MA-TVPYLK"),
                GappedSequence::new("seq2", "MART-P-LK"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_documented_example() {
        let record = detect_insertions(&documented_example(), "reference").unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.at(3), Some(&["seq1".to_string()][..]));
        assert_eq!(record.at(6), Some(&["seq2".to_string()][..]));
        let keys: Vec<usize> = record.positions.keys().copied().collect();
        assert_eq!(keys, vec![3, 6]);
    }

    #[test]
    fn test_reference_gaps_never_reported() {
        let aln = documented_example();
        let reference = aln.get("reference").unwrap();
        let record = detect_insertions(&aln, "reference").unwrap();
        for &position in record.positions.keys() {
            let column = reindex(reference, &[position]).unwrap()[0];
            assert!(!is_gap(reference.residues[column]));
        }
    }

    #[test]
    fn test_multiple_sequences_at_one_position() {
        let aln = Alignment::new(
            "shared",
            vec![
                GappedSequence::new("a", "MKV"),
                GappedSequence::new("b", "M-V"),
                GappedSequence::new("c", "M-V"),
            ],
        )
        .unwrap();
        let record = detect_insertions(&aln, "a").unwrap();
        assert_eq!(record.at(2), Some(&["b".to_string(), "c".to_string()][..]));
        assert_eq!(
            record.per_sequence_counts(),
            vec![("b".to_string(), 1), ("c".to_string(), 1)]
        );
    }

    #[test]
    fn test_no_insertions() {
        let aln = Alignment::new(
            "flat",
            vec![GappedSequence::new("a", "M-K"), GappedSequence::new("b", "MRK")],
        )
        .unwrap();
        assert!(detect_insertions(&aln, "a").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_reference() {
        let result = detect_insertions(&documented_example(), "seq9");
        assert!(matches!(result, Err(AlnError::NotFound { .. })));
    }
}

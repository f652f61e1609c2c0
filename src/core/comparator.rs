// comparator.rs - Residue comparison against a reference at selected columns

use rayon::prelude::*;
use serde::Serialize;

use crate::data::alignment::Alignment;
use crate::error::{AlnError, Result};

/// ACE2 residues most important for SARS-CoV-2 spike binding (human numbering)
pub const ACE2_SPIKE_CONTACTS: [usize; 8] = [24, 30, 34, 41, 42, 82, 353, 357];

/// Number of mismatches against the reference for one sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DifferenceCount {
    pub name: String,
    pub differences: usize,
}

/// Per-sequence mismatch counts over a column set
#[derive(Debug, Clone, Serialize)]
pub struct DifferenceReport {
    pub reference: String,
    pub residues_compared: usize,
    pub rows: Vec<DifferenceCount>,
}

impl DifferenceReport {
    pub fn get(&self, name: &str) -> Option<usize> {
        self.rows
            .iter()
            .find(|row| row.name == name)
            .map(|row| row.differences)
    }
}

/// Count, for every sequence, the columns whose residue differs from the
/// reference. Comparison is exact and gap-sensitive. Rows follow alignment
/// order; the reference itself appears with 0.
pub fn compare(
    alignment: &Alignment,
    reference_name: &str,
    columns: &[usize],
) -> Result<DifferenceReport> {
    let reference = alignment.get(reference_name)?;

    if let Some(&bad) = columns.iter().find(|&&c| c >= alignment.column_count()) {
        return Err(AlnError::range(
            "column",
            bad,
            format!("0..{} in {}", alignment.column_count(), alignment.source_name()),
        ));
    }

    let rows = alignment
        .sequences()
        .par_iter()
        .map(|seq| DifferenceCount {
            name: seq.name.clone(),
            differences: columns
                .iter()
                .filter(|&&c| seq.residues[c] != reference.residues[c])
                .count(),
        })
        .collect();

    Ok(DifferenceReport {
        reference: reference_name.to_string(),
        residues_compared: columns.len(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reindex::reindex;
    use crate::data::alignment::GappedSequence;

    fn alignment() -> Alignment {
        Alignment::new(
            "toy",
            vec![
                GappedSequence::new("human", "MS-TKW"),
                GappedSequence::new("cat", "MSATKW"),
                GappedSequence::new("bat", "MR-TQW"),
                GappedSequence::new("mole", "M--T-W"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_reference_against_itself_is_zero() {
        let aln = alignment();
        let report = compare(&aln, "human", &[0, 1, 3, 4, 5]).unwrap();
        assert_eq!(report.get("human"), Some(0));
    }

    #[test]
    fn test_counts_are_gap_sensitive() {
        let aln = alignment();
        let columns = reindex(aln.get("human").unwrap(), &[2, 4]).unwrap();
        assert_eq!(columns, vec![1, 4]);

        let report = compare(&aln, "human", &columns).unwrap();
        assert_eq!(report.residues_compared, 2);
        assert_eq!(report.get("cat"), Some(0));
        assert_eq!(report.get("bat"), Some(2));
        assert_eq!(report.get("mole"), Some(2));
        let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["human", "cat", "bat", "mole"]);
    }

    #[test]
    fn test_reference_gap_column_counts_against_residue() {
        let aln = alignment();
        let report = compare(&aln, "human", &[2]).unwrap();
        assert_eq!(report.get("cat"), Some(1));
        assert_eq!(report.get("bat"), Some(0));
    }

    #[test]
    fn test_counts_are_bounded_by_columns() {
        let aln = alignment();
        let columns = [0, 1, 2, 3, 4, 5];
        let report = compare(&aln, "mole", &columns).unwrap();
        assert!(report.rows.iter().all(|r| r.differences <= columns.len()));
    }

    #[test]
    fn test_unknown_reference() {
        let aln = alignment();
        assert!(matches!(compare(&aln, "dog", &[0]), Err(AlnError::NotFound { .. })));
    }

    #[test]
    fn test_column_out_of_range() {
        let aln = alignment();
        assert!(matches!(compare(&aln, "human", &[6]), Err(AlnError::Range { .. })));
    }
}

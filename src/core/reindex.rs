// reindex.rs - Ungapped position <-> alignment column translation

use crate::data::alignment::{is_gap, GappedSequence};
use crate::error::{AlnError, Result};

/// Translate 1-based ungapped positions of `reference` into 0-based alignment
/// columns, preserving input order.
///
/// The reference is scanned once, left to right. Every gap met before the
/// `p`-th residue pushes that target one column further right, so the result
/// for `p` is the column holding the `p`-th non-gap residue. A gap-free
/// reference therefore maps `p` to `p - 1`.
pub fn reindex(reference: &GappedSequence, positions: &[usize]) -> Result<Vec<usize>> {
    // Column of each residue, indexed by its 0-based ungapped position.
    let residue_columns = reference
        .residues
        .iter()
        .enumerate()
        .fold(Vec::with_capacity(reference.len()), |mut columns, (column, &residue)| {
            if !is_gap(residue) {
                columns.push(column);
            }
            columns
        });

    positions
        .iter()
        .map(|&position| {
            position
                .checked_sub(1)
                .and_then(|i| residue_columns.get(i).copied())
                .ok_or_else(|| {
                    AlnError::range(
                        "ungapped position",
                        position,
                        format!("1..={} in '{}'", residue_columns.len(), reference.name),
                    )
                })
        })
        .collect()
}

/// 1-based ungapped position of `sequence` at `column`, or `None` when the
/// sequence has a gap there.
pub fn ungap(sequence: &GappedSequence, column: usize) -> Result<Option<usize>> {
    let residue = sequence.residue_at(column)?;
    if is_gap(residue) {
        return Ok(None);
    }
    let before = sequence.residues[..column]
        .iter()
        .filter(|&&r| !is_gap(r))
        .count();
    Ok(Some(before + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(residues: &str) -> GappedSequence {
        GappedSequence::new("ref", residues)
    }

    #[test]
    fn test_gap_free_reference_is_identity() {
        let reference = seq("MARTPYLK");
        let columns = reindex(&reference, &[1, 4, 8]).unwrap();
        assert_eq!(columns, vec![0, 3, 7]);
    }

    #[test]
    fn test_gaps_shift_later_positions() {
        let reference = seq("MART-PYLK");
        assert_eq!(reindex(&reference, &[4, 5, 8]).unwrap(), vec![3, 5, 8]);
    }

    #[test]
    fn test_consecutive_and_repeated_gaps_accumulate() {
        let reference = seq("-A-B--C-");
        assert_eq!(reindex(&reference, &[1, 2, 3]).unwrap(), vec![1, 3, 6]);
    }

    #[test]
    fn test_input_order_is_preserved() {
        let reference = seq("A-B-C");
        assert_eq!(reindex(&reference, &[3, 1, 2]).unwrap(), vec![4, 0, 2]);
    }

    #[test]
    fn test_last_residue_is_valid() {
        let reference = seq("MK--");
        assert_eq!(reindex(&reference, &[2]).unwrap(), vec![1]);
    }

    #[test]
    fn test_out_of_range_positions_are_rejected() {
        let reference = seq("MK--");
        assert!(matches!(reindex(&reference, &[3]), Err(AlnError::Range { .. })));
        assert!(matches!(reindex(&reference, &[0]), Err(AlnError::Range { .. })));
    }

    #[test]
    fn test_ungap() {
        let reference = seq("MA-TV");
        assert_eq!(ungap(&reference, 0).unwrap(), Some(1));
        assert_eq!(ungap(&reference, 2).unwrap(), None);
        assert_eq!(ungap(&reference, 3).unwrap(), Some(3));
        assert!(matches!(ungap(&reference, 5), Err(AlnError::Range { .. })));
    }

    #[test]
    fn test_round_trip_over_every_residue() {
        for residues in ["MART-PYLK", "--A-B--C-", "ABC", "-A", "A-B-C-D"] {
            let reference = seq(residues);
            for p in 1..=reference.ungapped_len() {
                let column = reindex(&reference, &[p]).unwrap()[0];
                assert_eq!(ungap(&reference, column).unwrap(), Some(p), "{} @ {}", residues, p);
            }
        }
    }
}

// alignment.rs - Multiple sequence alignment data structures

use std::collections::HashMap;

use regex::Regex;

use crate::error::{AlnError, Result};

/// Gap character used by every supported alignment format
pub const GAP: u8 = b'-';

#[inline]
pub fn is_gap(residue: u8) -> bool {
    residue == GAP
}

/// A single sequence as it appears inside an alignment, gaps included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GappedSequence {
    pub name: String,
    pub residues: Vec<u8>,
}

impl GappedSequence {
    pub fn new(name: impl Into<String>, residues: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            residues: residues.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Number of non-gap residues
    pub fn ungapped_len(&self) -> usize {
        self.residues.iter().filter(|&&r| !is_gap(r)).count()
    }

    /// Residue at a 0-based column
    pub fn residue_at(&self, column: usize) -> Result<u8> {
        self.residues.get(column).copied().ok_or_else(|| {
            AlnError::range("column", column, format!("0..{}", self.residues.len()))
        })
    }
}

/// Ordered collection of equal-length gapped sequences
#[derive(Debug, Clone)]
pub struct Alignment {
    sequences: Vec<GappedSequence>,
    index: HashMap<String, usize>,
    column_count: usize,
    source_name: String,
}

impl Alignment {
    /// Build an alignment, checking names are unique and lengths agree
    pub fn new(source_name: impl Into<String>, sequences: Vec<GappedSequence>) -> Result<Self> {
        let source_name = source_name.into();
        let first = sequences.first().ok_or_else(|| {
            AlnError::format(
                "at least one sequence",
                "empty input".to_string(),
                format!("in {}", source_name),
            )
        })?;
        let column_count = first.len();

        let mut index = HashMap::with_capacity(sequences.len());
        for (i, seq) in sequences.iter().enumerate() {
            if seq.len() != column_count {
                return Err(AlnError::length(
                    &seq.name,
                    format!(
                        "{} columns, but '{}' has {} (alignment {})",
                        seq.len(),
                        first.name,
                        column_count,
                        source_name
                    ),
                ));
            }
            if index.insert(seq.name.clone(), i).is_some() {
                return Err(AlnError::format(
                    "unique sequence names",
                    seq.name.clone(),
                    format!("in {}", source_name),
                ));
            }
        }

        Ok(Self {
            sequences,
            index,
            column_count,
            source_name,
        })
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Sequence names in file order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sequences.iter().map(|s| s.name.as_str())
    }

    pub fn sequences(&self) -> &[GappedSequence] {
        &self.sequences
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up a sequence by name, failing loudly when it is absent
    pub fn get(&self, name: &str) -> Result<&GappedSequence> {
        self.index
            .get(name)
            .map(|&i| &self.sequences[i])
            .ok_or_else(|| AlnError::not_found(name, &self.source_name))
    }

    /// Keep sequences matching the include pattern and not matching the exclude
    /// pattern. The reference is always retained.
    pub fn filtered(
        self,
        reference_name: &str,
        include: Option<&Regex>,
        exclude: Option<&Regex>,
    ) -> Result<Self> {
        if include.is_none() && exclude.is_none() {
            return Ok(self);
        }
        let source_name = self.source_name;
        let kept: Vec<GappedSequence> = self
            .sequences
            .into_iter()
            .filter(|seq| {
                if seq.name == reference_name {
                    return true;
                }
                let included = include.map_or(true, |re| re.is_match(&seq.name));
                let excluded = exclude.map_or(false, |re| re.is_match(&seq.name));
                included && !excluded
            })
            .collect();
        Alignment::new(source_name, kept)
    }
}

// lib.rs - alncompare library root

//! # alncompare - Reference-centred comparison of sequence alignments
//!
//! This library compares the sequences of a multiple alignment against a chosen
//! reference sequence, and classifies the mutations between two coding
//! sequences after aligning their translated proteins.
//!
//! ## Features
//!
//! - **Coordinate reindexing**: map 1-based ungapped reference positions to alignment columns
//! - **Residue comparison**: count differences on a set of important reference residues
//! - **Insertion detection**: list reference positions where other sequences carry a gap
//! - **Mutation classification**: indel, synonymous and non-synonymous columns with running totals
//! - **Pluggable aligners**: parasail global alignment or an ungapped backend, behind one trait
//! - **Multiple formats**: FASTA and CLW input, CSV/TSV/JSON reports and SVG plots
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use alncompare::prelude::*;
//!
//! let alignment = load_alignment(
//!     std::path::Path::new("ace2.fasta"),
//!     AlignmentFormat::Auto,
//!     HeaderNaming::Species,
//! )?;
//! let reference = alignment.get("HUMAN_Homo_sapiens")?;
//! let columns = reindex(reference, &ACE2_SPIKE_CONTACTS)?;
//! let report = compare(&alignment, "HUMAN_Homo_sapiens", &columns)?;
//! for row in &report.rows {
//!     println!("{}\t{}", row.name, row.differences);
//! }
//!
//! let genes = SequenceFile::from_file(std::path::Path::new("genes.fasta"))?;
//! let registry = AlignerRegistry::default();
//! let aligner = registry.get_aligner("parasail").unwrap();
//! let trace = classify(
//!     &genes.find("gene_a")?.sequence,
//!     &genes.find("gene_b")?.sequence,
//!     &CodonTable::standard(),
//!     aligner,
//! )?;
//! println!("{:?}", trace.totals());
//! # Ok::<(), AlnError>(())
//! ```

// Re-export all main modules
pub mod aligners;
pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::aligners::{AlignedPair, AlignerConfig, AlignerRegistry, PairwiseAligner};
    pub use crate::core::{classify, compare, detect_insertions, reindex, ungap};
    pub use crate::core::{
        ClassificationTrace, DifferenceReport, InsertionRecord, MutationClass, MutationClassifier,
        MutationTotals, ACE2_SPIKE_CONTACTS,
    };
    pub use crate::data::{load_alignment, Alignment, AlignmentFormat, GappedSequence, HeaderNaming};
    pub use crate::data::{CodonTable, SequenceFile, SequenceRecord};
    pub use crate::error::AlnError;
}

// Re-export main types at the root level for convenience
pub use crate::aligners::{AlignerRegistry, PairwiseAligner};
pub use crate::core::{ClassificationTrace, DifferenceReport, InsertionRecord};
pub use crate::data::{Alignment, CodonTable, GappedSequence};
pub use crate::error::AlnError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

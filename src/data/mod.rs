// mod.rs - Data structures module

pub mod alignment;
pub mod codon;
pub mod loaders;

// Re-export main types for convenience
pub use alignment::{is_gap, Alignment, GappedSequence, GAP};
pub use codon::{CodonTable, Translation, STOP};
pub use loaders::{load_alignment, AlignmentFormat, HeaderNaming, SequenceFile, SequenceRecord};

// mod.rs - Core comparison engine

pub mod classifier;
pub mod comparator;
pub mod insertions;
pub mod reindex;

// Re-export main types for convenience
pub use classifier::{
    classify, classify_aligned, ClassificationTrace, MutationClass, MutationClassifier,
    MutationTotals,
};
pub use comparator::{compare, DifferenceCount, DifferenceReport, ACE2_SPIKE_CONTACTS};
pub use insertions::{detect_insertions, InsertionRecord};
pub use reindex::{reindex, ungap};

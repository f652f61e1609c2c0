// mod.rs - Pairwise aligners module root

pub mod parasail;
pub mod registry;
pub mod traits;
pub mod ungapped;

// Re-export main types for convenience
pub use parasail::ParasailAligner;
pub use registry::AlignerRegistry;
pub use traits::{AlignedPair, AlignerConfig, PairwiseAligner};
pub use ungapped::UngappedAligner;

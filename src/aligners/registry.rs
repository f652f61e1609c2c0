// registry.rs - Registry of available pairwise aligners

use std::collections::HashMap;

use super::traits::{AlignerConfig, PairwiseAligner};
use super::{ParasailAligner, UngappedAligner};

/// Named aligner backends built from one scoring configuration
pub struct AlignerRegistry {
    aligners: HashMap<String, Box<dyn PairwiseAligner>>,
}

impl AlignerRegistry {
    pub fn new(config: &AlignerConfig) -> Self {
        let mut registry = Self {
            aligners: HashMap::new(),
        };

        registry.register_aligner("parasail", Box::new(ParasailAligner::new(config.clone())));
        registry.register_aligner("ungapped", Box::new(UngappedAligner));

        registry
    }

    /// Register a new aligner
    pub fn register_aligner(&mut self, name: &str, aligner: Box<dyn PairwiseAligner>) {
        self.aligners.insert(name.to_string(), aligner);
    }

    pub fn get_aligner(&self, name: &str) -> Option<&dyn PairwiseAligner> {
        self.aligners.get(name).map(|a| a.as_ref())
    }

    pub fn has_aligner(&self, name: &str) -> bool {
        self.aligners.contains_key(name)
    }

    pub fn get_aligner_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.aligners.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for AlignerRegistry {
    fn default() -> Self {
        Self::new(&AlignerConfig::default())
    }
}

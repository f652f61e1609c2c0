// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub format: Option<String>,
    pub input_format: Option<String>,
    pub naming: Option<String>,
    pub sequences: Option<String>,

    // Residue comparison
    pub positions: Option<Vec<usize>>,

    // Sequence filtering
    pub include_sequences: Option<String>,
    pub exclude_sequences: Option<String>,

    // Protein alignment
    pub aligner: Option<String>,
    pub alignment_mode: Option<String>,
    pub matrix: Option<String>,
    pub gap_open: Option<i32>,
    pub gap_extend: Option<i32>,

    // Performance
    pub threads: Option<usize>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# alncompare.toml - Configuration file for alncompare
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Report format: csv, tsv, json
format = "csv"

# Alignment format: fasta, clustal, auto (auto looks at the file header and extension)
input_format = "auto"

# FASTA header naming: species (sp_HUMAN_Homo_sapiens -> HUMAN_Homo_sapiens) or id
naming = "species"

# FASTA file of nucleotide sequences used by the mutation commands
# sequences = "/path/to/genes.fasta"

# =============================================================================
# RESIDUE COMPARISON
# =============================================================================

# 1-based positions in the ungapped reference (default: ACE2 residues contacting the spike)
positions = [24, 30, 34, 41, 42, 82, 353, 357]

# =============================================================================
# SEQUENCE FILTERING (the reference sequence is always kept)
# =============================================================================

# Include only sequences matching regex pattern
# include_sequences = "Homo|Pan|Felis"

# Exclude sequences matching regex pattern
# exclude_sequences = "partial.*"

# =============================================================================
# PROTEIN ALIGNMENT
# =============================================================================

# Pairwise aligner: parasail, ungapped
aligner = "parasail"

# Preset: protein (BLOSUM62, 10/1), protein-close (BLOSUM80), protein-distant (BLOSUM45, 14/2)
alignment_mode = "protein"

# Custom scoring (any of these overrides the preset)
# matrix = "blosum62"
# gap_open = 10
# gap_extend = 1

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
# threads = 8
"#
        .to_string()
    }
}

// mod.rs - Alignment file loaders

pub mod clustal;
pub mod fasta;

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::data::alignment::Alignment;
use crate::error::{AlnError, Result};

pub use clustal::{load_clustal_alignment, parse_clustal_alignment};
pub use fasta::{
    load_fasta_alignment, parse_fasta_alignment, HeaderNaming, SequenceFile, SequenceRecord,
};

/// Supported alignment text layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentFormat {
    Fasta,
    Clustal,
    /// Decide from the extension or the first line of the file
    Auto,
}

impl FromStr for AlignmentFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fasta" | "fa" | "fas" => Ok(AlignmentFormat::Fasta),
            "clustal" | "clw" | "aln" => Ok(AlignmentFormat::Clustal),
            "auto" => Ok(AlignmentFormat::Auto),
            _ => Err(format!(
                "Invalid alignment format: {}. Use: fasta, clustal, auto",
                s
            )),
        }
    }
}

impl AlignmentFormat {
    /// Resolve `Auto` against a file name and its content
    pub fn resolve(self, path: &Path, content: &str) -> AlignmentFormat {
        if self != AlignmentFormat::Auto {
            return self;
        }
        let by_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        if matches!(by_extension.as_deref(), Some("clw") | Some("aln")) {
            return AlignmentFormat::Clustal;
        }
        let first_line = content.trim_start_matches('\u{feff}').trim_start();
        if first_line.starts_with("CLUSTAL") {
            AlignmentFormat::Clustal
        } else {
            AlignmentFormat::Fasta
        }
    }
}

/// Load an alignment from disk in the requested (or detected) format
pub fn load_alignment(
    path: &Path,
    format: AlignmentFormat,
    naming: HeaderNaming,
) -> Result<Alignment> {
    let content = std::fs::read_to_string(path).map_err(|e| AlnError::io(path, e))?;
    let source_name = path.display().to_string();
    match format.resolve(path, &content) {
        AlignmentFormat::Clustal => parse_clustal_alignment(&content, &source_name),
        _ => parse_fasta_alignment(&content, &source_name, naming),
    }
}

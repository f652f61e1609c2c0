// error.rs - Error types shared by the loaders and the comparison engine

use std::path::PathBuf;

use thiserror::Error;

/// Catch-all error for the library API
#[derive(Debug, Error)]
pub enum AlnError {
    /// A named sequence is absent from an alignment or sequence file
    #[error("Sequence '{name}' not found in {source_name}")]
    NotFound { name: String, source_name: String },

    /// Lengths that must agree (or be a multiple of 3) do not
    #[error("Length error for '{name}': {message}")]
    Length { name: String, message: String },

    /// A requested position or column lies outside the sequence
    #[error("{kind} {value} is out of range (valid: {valid})")]
    Range {
        kind: &'static str,
        value: usize,
        valid: String,
    },

    /// Malformed alignment or sequence text
    #[error("Expected {expected} {location} but observed: {observed}")]
    Format {
        expected: &'static str,
        observed: String,
        location: String,
    },

    /// The pairwise aligner backend failed or returned nothing usable
    #[error("Pairwise alignment failed: {0}")]
    Aligner(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AlnError>;

impl AlnError {
    pub fn not_found(name: &str, source_name: &str) -> Self {
        AlnError::NotFound {
            name: name.to_string(),
            source_name: source_name.to_string(),
        }
    }

    pub fn length(name: &str, message: String) -> Self {
        AlnError::Length {
            name: name.to_string(),
            message,
        }
    }

    pub fn range(kind: &'static str, value: usize, valid: String) -> Self {
        AlnError::Range { kind, value, valid }
    }

    pub fn format(expected: &'static str, observed: String, location: String) -> Self {
        AlnError::Format {
            expected,
            observed,
            location,
        }
    }

    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        AlnError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

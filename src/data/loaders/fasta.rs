// fasta.rs - FASTA loaders for gapped alignments and raw sequence files

use bio::io::fasta;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::data::alignment::{Alignment, GappedSequence};
use crate::error::{AlnError, Result};

/// How a sequence name is derived from a FASTA header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderNaming {
    /// Underscore fields 1..=3 of the identifier, e.g.
    /// `sp_HUMAN_Homo_sapiens` -> `HUMAN_Homo_sapiens`
    Species,
    /// The whole identifier (first whitespace-delimited token)
    Id,
}

impl FromStr for HeaderNaming {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "species" => Ok(HeaderNaming::Species),
            "id" => Ok(HeaderNaming::Id),
            _ => Err(format!("Invalid header naming: {}. Use: species, id", s)),
        }
    }
}

impl HeaderNaming {
    pub fn name_for(&self, id: &str, record_index: usize) -> Result<String> {
        match self {
            HeaderNaming::Id => Ok(id.to_string()),
            HeaderNaming::Species => {
                let fields: Vec<&str> = id.split('_').collect();
                if fields.len() < 4 {
                    return Err(AlnError::format(
                        "a header of the form <db>_<COMMON>_<Genus>_<species>",
                        id.to_string(),
                        format!("for FASTA record {}", record_index + 1),
                    ));
                }
                Ok(fields[1..4].join("_"))
            }
        }
    }
}

fn strip_bom(content: &str) -> &str {
    content.trim_start_matches('\u{feff}')
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| AlnError::io(path, e))
}

/// Parse FASTA alignment text into an [`Alignment`]
pub fn parse_fasta_alignment(
    content: &str,
    source_name: &str,
    naming: HeaderNaming,
) -> Result<Alignment> {
    let reader = fasta::Reader::new(strip_bom(content).as_bytes());
    let mut sequences = Vec::new();

    for (i, record_result) in reader.records().enumerate() {
        let record = record_result.map_err(|e| {
            AlnError::format(
                "a valid FASTA record",
                e.to_string(),
                format!("at record {} of {}", i + 1, source_name),
            )
        })?;
        let name = naming.name_for(record.id(), i)?;
        sequences.push(GappedSequence::new(name, record.seq().to_vec()));
    }

    Alignment::new(source_name, sequences)
}

/// Load a FASTA alignment file
pub fn load_fasta_alignment(path: &Path, naming: HeaderNaming) -> Result<Alignment> {
    let content = read_text(path)?;
    parse_fasta_alignment(&content, &path.display().to_string(), naming)
}

/// A raw (ungapped) sequence with its full header
#[derive(Debug, Clone)]
pub struct SequenceRecord {
    pub id: String,
    pub header: String,
    pub sequence: Vec<u8>,
}

/// Raw sequences from a FASTA file, searchable by name
#[derive(Debug, Clone)]
pub struct SequenceFile {
    pub source_name: String,
    pub records: Vec<SequenceRecord>,
}

impl SequenceFile {
    pub fn parse(content: &str, source_name: &str) -> Result<Self> {
        let reader = fasta::Reader::new(strip_bom(content).as_bytes());
        let mut records = Vec::new();

        for (i, record_result) in reader.records().enumerate() {
            let record = record_result.map_err(|e| {
                AlnError::format(
                    "a valid FASTA record",
                    e.to_string(),
                    format!("at record {} of {}", i + 1, source_name),
                )
            })?;
            let header = match record.desc() {
                Some(desc) => format!("{} {}", record.id(), desc),
                None => record.id().to_string(),
            };
            records.push(SequenceRecord {
                id: record.id().to_string(),
                header,
                sequence: record.seq().to_vec(),
            });
        }

        Ok(Self {
            source_name: source_name.to_string(),
            records,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = read_text(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Find a record by exact identifier, falling back to the first header that
    /// contains `name`. Absent names are an error.
    pub fn find(&self, name: &str) -> Result<&SequenceRecord> {
        self.records
            .iter()
            .find(|r| r.id == name)
            .or_else(|| self.records.iter().find(|r| r.header.contains(name)))
            .ok_or_else(|| AlnError::not_found(name, &self.source_name))
    }
}

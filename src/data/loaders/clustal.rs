// clustal.rs - Loader for interleaved CLW (Clustal) alignments

use std::path::Path;

use crate::data::alignment::{Alignment, GappedSequence};
use crate::error::{AlnError, Result};

/// Parse CLW alignment text.
///
/// The first line is the alignment title and is skipped. Blank lines and lines
/// starting with whitespace (block spacers, conservation marks) are ignored.
/// Every other line is `<name> <residues> [count]`; blocks of the same name are
/// concatenated in file order.
pub fn parse_clustal_alignment(content: &str, source_name: &str) -> Result<Alignment> {
    let mut lines = content.lines();
    if lines.next().is_none() {
        return Err(AlnError::format(
            "a CLW title line",
            "empty input".to_string(),
            format!("in {}", source_name),
        ));
    }

    let mut sequences: Vec<GappedSequence> = Vec::new();

    for (line_num, line) in lines.enumerate() {
        if line.trim().is_empty() || line.starts_with(char::is_whitespace) {
            continue;
        }

        let mut fields = line.split_whitespace();
        let name = fields.next().unwrap_or_default();
        let block = match fields.next() {
            Some(block) => block,
            None => {
                return Err(AlnError::format(
                    "<name> <residues>",
                    line.to_string(),
                    format!("on line {} of {}", line_num + 2, source_name),
                ))
            }
        };

        match sequences.iter_mut().find(|s| s.name == name) {
            Some(existing) => existing.residues.extend_from_slice(block.as_bytes()),
            None => sequences.push(GappedSequence::new(name, block.as_bytes())),
        }
    }

    Alignment::new(source_name, sequences)
}

/// Load a CLW alignment file
pub fn load_clustal_alignment(path: &Path) -> Result<Alignment> {
    let content = std::fs::read_to_string(path).map_err(|e| AlnError::io(path, e))?;
    parse_clustal_alignment(&content, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLW: &str = concat!(
        "CLUSTAL O(1.2.4) multiple sequence alignment\n",
        "\n",
        "\n",
        "ref      MART-\n",
        "seq1     MA-TV\n",
        "seq2     MART-\n",
        "         **   \n",
        "\n",
        "ref      PYLK\t9\n",
        "seq1     PYLK\t9\n",
        "seq2     P-LK\t8\n",
    );

    #[test]
    fn test_blocks_are_concatenated() {
        let aln = parse_clustal_alignment(CLW, "toy.clw").unwrap();
        let names: Vec<&str> = aln.names().collect();
        assert_eq!(names, vec!["ref", "seq1", "seq2"]);
        assert_eq!(aln.get("ref").unwrap().residues, b"MART-PYLK".to_vec());
        assert_eq!(aln.get("seq2").unwrap().residues, b"MART-P-LK".to_vec());
    }

    #[test]
    fn test_name_only_line_is_rejected() {
        let result = parse_clustal_alignment("CLUSTAL\n\nlonely\n", "bad.clw");
        assert!(matches!(result, Err(AlnError::Format { .. })));
    }

    #[test]
    fn test_ragged_blocks_are_rejected() {
        let result = parse_clustal_alignment("CLUSTAL\n\na MK\nb MKR\n", "ragged.clw");
        assert!(matches!(result, Err(AlnError::Length { .. })));
    }
}

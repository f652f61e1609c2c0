// mod.rs - Report writers for comparison, insertion and mutation results

pub mod plot;

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::core::{ClassificationTrace, DifferenceReport, InsertionRecord, MutationTotals};

pub use plot::{render_cumulative_svg, write_cumulative_svg};

/// Tabular output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Tsv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}. Use: csv, tsv, json", s)),
        }
    }
}

impl OutputFormat {
    fn delimiter(&self) -> u8 {
        match self {
            OutputFormat::Tsv => b'\t',
            _ => b',',
        }
    }
}

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|e| {
                format!("Failed to create parent directory '{}': {}", parent.display(), e)
            })?;
        }
    }
    Ok(())
}

fn create_output(file_path: &str) -> Result<BufWriter<File>, String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    Ok(BufWriter::new(file))
}

/// Open a delimited table, writing the provenance header first
fn open_table(
    file_path: &str,
    format: OutputFormat,
    command_line: &str,
) -> Result<csv::Writer<BufWriter<File>>, String> {
    let mut writer = create_output(file_path)?;

    writeln!(writer, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# Generated: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"))
        .map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# alncompare v{}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| format!("Write error: {}", e))?;

    Ok(csv::WriterBuilder::new()
        .delimiter(format.delimiter())
        .flexible(true)
        .from_writer(writer))
}

fn write_json<T: Serialize>(file_path: &str, value: &T) -> Result<(), String> {
    let mut writer = create_output(file_path)?;
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| format!("Failed to serialize report: {}", e))?;
    writeln!(writer).map_err(|e| format!("Write error: {}", e))?;
    writer.flush().map_err(|e| format!("Flush error: {}", e))
}

fn finish(mut table: csv::Writer<BufWriter<File>>) -> Result<(), String> {
    table.flush().map_err(|e| format!("Flush error: {}", e))
}

/// Write one row per sequence: name and number of differing residues
pub fn write_differences(
    file_path: &str,
    report: &DifferenceReport,
    format: OutputFormat,
    command_line: &str,
) -> Result<(), String> {
    if format == OutputFormat::Json {
        write_json(file_path, report)?;
    } else {
        let mut table = open_table(file_path, format, command_line)?;
        table
            .write_record([
                "sequence".to_string(),
                format!("differences with {} on the important residues", report.reference),
            ])
            .map_err(|e| format!("Write error: {}", e))?;
        table
            .write_record([
                "number of important residues".to_string(),
                report.residues_compared.to_string(),
            ])
            .map_err(|e| format!("Write error: {}", e))?;
        for row in &report.rows {
            table
                .write_record([row.name.clone(), row.differences.to_string()])
                .map_err(|e| format!("Write error: {}", e))?;
        }
        finish(table)?;
    }

    println!("✅ Difference report written to: {}", file_path);
    Ok(())
}

/// Write one row per insertion position: the position followed by the names of
/// the sequences lacking it
pub fn write_insertions(
    file_path: &str,
    record: &InsertionRecord,
    format: OutputFormat,
    command_line: &str,
) -> Result<(), String> {
    if format == OutputFormat::Json {
        write_json(file_path, record)?;
    } else {
        let mut table = open_table(file_path, format, command_line)?;
        for (position, names) in &record.positions {
            let row = std::iter::once(position.to_string()).chain(names.iter().cloned());
            table
                .write_record(row)
                .map_err(|e| format!("Write error: {}", e))?;
        }
        finish(table)?;
    }

    println!("✅ Insertion report written to: {}", file_path);
    Ok(())
}

/// Write the per-column classification with the three running totals
pub fn write_trace(
    file_path: &str,
    trace: &ClassificationTrace,
    format: OutputFormat,
    command_line: &str,
) -> Result<(), String> {
    if format == OutputFormat::Json {
        write_json(file_path, trace)?;
    } else {
        let mut table = open_table(file_path, format, command_line)?;
        table
            .write_record(["column", "class", "indels", "synonymous", "nonsynonymous"])
            .map_err(|e| format!("Write error: {}", e))?;
        for (i, class) in trace.classes.iter().enumerate() {
            table
                .write_record([
                    (i + 1).to_string(),
                    class.to_string(),
                    trace.cumulative_indels[i].to_string(),
                    trace.cumulative_synonymous[i].to_string(),
                    trace.cumulative_nonsynonymous[i].to_string(),
                ])
                .map_err(|e| format!("Write error: {}", e))?;
        }
        finish(table)?;
    }

    println!("✅ Mutation trace written to: {}", file_path);
    Ok(())
}

/// One line of a batch mutation run
#[derive(Debug, Clone, Serialize)]
pub struct PairSummary {
    pub reference: String,
    pub sequence: String,
    #[serde(flatten)]
    pub totals: MutationTotals,
}

/// Write final totals for a batch of reference/sequence pairs
pub fn write_pair_summaries(
    file_path: &str,
    summaries: &[PairSummary],
    format: OutputFormat,
    command_line: &str,
) -> Result<(), String> {
    if format == OutputFormat::Json {
        write_json(file_path, &summaries)?;
    } else {
        let mut table = open_table(file_path, format, command_line)?;
        table
            .write_record([
                "reference",
                "sequence",
                "columns",
                "indels",
                "synonymous",
                "nonsynonymous",
                "identical",
            ])
            .map_err(|e| format!("Write error: {}", e))?;
        for summary in summaries {
            let t = &summary.totals;
            table
                .write_record([
                    summary.reference.clone(),
                    summary.sequence.clone(),
                    t.columns.to_string(),
                    t.indels.to_string(),
                    t.synonymous.to_string(),
                    t.nonsynonymous.to_string(),
                    t.identical.to_string(),
                ])
                .map_err(|e| format!("Write error: {}", e))?;
        }
        finish(table)?;
    }

    println!("✅ Batch summary written to: {}", file_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{detect_insertions, DifferenceCount};
    use crate::data::{Alignment, GappedSequence};

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("alncompare_output_{}", name))
            .display()
            .to_string()
    }

    fn data_lines(path: &str) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .filter(|l| !l.starts_with('#'))
            .map(|l| l.to_string())
            .collect()
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("tsv".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
        assert!("xlsx".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_insertions_rows_are_ragged() {
        let aln = Alignment::new(
            "example",
            vec![
                GappedSequence::new("reference", "MART-PYLK"),
                GappedSequence::new("seq1", "MA-TVPYLK"),
                GappedSequence::new("seq2", "MART-P-LK"),
            ],
        )
        .unwrap();
        let record = detect_insertions(&aln, "reference").unwrap();
        let path = temp_path("insertions.csv");
        write_insertions(&path, &record, OutputFormat::Csv, "test").unwrap();
        assert_eq!(data_lines(&path), vec!["3,seq1", "6,seq2"]);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_differences_tsv() {
        let report = DifferenceReport {
            reference: "HUMAN_Homo_sapiens".to_string(),
            residues_compared: 8,
            rows: vec![
                DifferenceCount { name: "HUMAN_Homo_sapiens".to_string(), differences: 0 },
                DifferenceCount { name: "CAT_Felis_catus".to_string(), differences: 3 },
            ],
        };
        let path = temp_path("differences.tsv");
        write_differences(&path, &report, OutputFormat::Tsv, "test").unwrap();
        let lines = data_lines(&path);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "number of important residues\t8");
        assert_eq!(lines[3], "CAT_Felis_catus\t3");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_json_report() {
        let report = DifferenceReport {
            reference: "a".to_string(),
            residues_compared: 1,
            rows: vec![DifferenceCount { name: "b".to_string(), differences: 1 }],
        };
        let path = temp_path("differences.json");
        write_differences(&path, &report, OutputFormat::Json, "test").unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["rows"][0]["differences"], 1);
        let _ = std::fs::remove_file(&path);
    }
}

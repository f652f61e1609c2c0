// validation.rs - Input validation utilities

use std::str::FromStr;

use regex::Regex;

use crate::aligners::{AlignerConfig, AlignerRegistry};
use crate::cli::args::Options;
use crate::core::ACE2_SPIKE_CONTACTS;
use crate::data::{AlignmentFormat, HeaderNaming};
use crate::output::OutputFormat;

pub struct ValidationResult {
    pub output_format: OutputFormat,
    pub input_format: AlignmentFormat,
    pub naming: HeaderNaming,
    pub positions: Vec<usize>,
    pub include_regex: Option<Regex>,
    pub exclude_regex: Option<Regex>,
    pub aligner_name: String,
    pub aligner_config: AlignerConfig,
}

/// Parse a comma-separated list of 1-based positions
pub fn parse_positions(list: &str) -> Result<Vec<usize>, String> {
    let positions = list
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let p = s
                .parse::<usize>()
                .map_err(|_| format!("Invalid position '{}': expected a positive integer", s))?;
            if p == 0 {
                return Err("Positions are 1-based; 0 is not a valid position".to_string());
            }
            Ok(p)
        })
        .collect::<Result<Vec<_>, String>>()?;

    if positions.is_empty() {
        return Err("At least one position is required".to_string());
    }
    Ok(positions)
}

/// Validate the merged options of a subcommand
pub fn validate_options(options: &Options) -> Result<ValidationResult, String> {
    let output_format = OutputFormat::from_str(options.format.as_deref().unwrap_or("csv"))?;
    let input_format =
        AlignmentFormat::from_str(options.input_format.as_deref().unwrap_or("auto"))?;
    let naming = HeaderNaming::from_str(options.naming.as_deref().unwrap_or("species"))?;

    let positions = match &options.positions {
        Some(list) => parse_positions(list)?,
        None => ACE2_SPIKE_CONTACTS.to_vec(),
    };

    // Validate and create aligner config
    let aligner_config = if options.matrix.is_some()
        || options.gap_open.is_some()
        || options.gap_extend.is_some()
    {
        // Custom mode
        let defaults = AlignerConfig::default();
        let gap_open = options.gap_open.unwrap_or(defaults.gap_open);
        let gap_extend = options.gap_extend.unwrap_or(defaults.gap_extend);
        if gap_open < 0 || gap_extend < 0 {
            return Err("Gap penalties must be non-negative".to_string());
        }
        AlignerConfig::custom(
            options.matrix.as_deref().unwrap_or(&defaults.matrix),
            gap_open,
            gap_extend,
        )
    } else {
        // Preset mode
        AlignerConfig::from_mode(options.alignment_mode.as_deref().unwrap_or("protein"))?
    };

    // Validate aligner name
    let aligner_name = options.aligner.clone().unwrap_or_else(|| "parasail".to_string());
    let registry = AlignerRegistry::new(&aligner_config);
    if !registry.has_aligner(&aligner_name) {
        return Err(format!(
            "Invalid aligner '{}'. Available: {}",
            aligner_name,
            registry.get_aligner_names().join(", ")
        ));
    }

    // Compile regex patterns
    let include_regex = if let Some(pattern) = &options.include_sequences {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid include_sequences regex: {}", e))?)
    } else {
        None
    };

    let exclude_regex = if let Some(pattern) = &options.exclude_sequences {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude_sequences regex: {}", e))?)
    } else {
        None
    };

    Ok(ValidationResult {
        output_format,
        input_format,
        naming,
        positions,
        include_regex,
        exclude_regex,
        aligner_name,
        aligner_config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let result = validate_options(&Options::default()).unwrap();
        assert_eq!(result.output_format, OutputFormat::Csv);
        assert_eq!(result.input_format, AlignmentFormat::Auto);
        assert_eq!(result.naming, HeaderNaming::Species);
        assert_eq!(result.positions, vec![24, 30, 34, 41, 42, 82, 353, 357]);
        assert_eq!(result.aligner_name, "parasail");
        assert_eq!(result.aligner_config, AlignerConfig::default());
    }

    #[test]
    fn test_positions() {
        assert_eq!(parse_positions("3, 1,7").unwrap(), vec![3, 1, 7]);
        assert!(parse_positions("0,4").is_err());
        assert!(parse_positions("a").is_err());
        assert!(parse_positions(" , ").is_err());
    }

    #[test]
    fn test_custom_scoring_overrides_mode() {
        let options = Options {
            alignment_mode: Some("protein-distant".to_string()),
            gap_open: Some(11),
            ..Options::default()
        };
        let result = validate_options(&options).unwrap();
        assert_eq!(result.aligner_config.matrix, "blosum62");
        assert_eq!(result.aligner_config.gap_open, 11);
        assert_eq!(result.aligner_config.gap_extend, 1);
    }

    #[test]
    fn test_invalid_values() {
        let bad_aligner = Options {
            aligner: Some("needle".to_string()),
            ..Options::default()
        };
        let err = validate_options(&bad_aligner).err().unwrap();
        assert!(err.contains("parasail, ungapped"));

        let bad_regex = Options {
            include_sequences: Some("(".to_string()),
            ..Options::default()
        };
        assert!(validate_options(&bad_regex).is_err());

        let bad_mode = Options {
            alignment_mode: Some("dna".to_string()),
            ..Options::default()
        };
        assert!(validate_options(&bad_mode).is_err());
    }
}

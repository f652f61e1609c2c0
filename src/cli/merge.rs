// merge.rs - Merge configuration file with CLI arguments

use crate::cli::args::{Command, Options};
use crate::cli::Config;

impl Options {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: &Config) -> Self {
        // Input/Output
        if self.format.is_none() {
            self.format = config.format.clone();
        }
        if self.input_format.is_none() {
            self.input_format = config.input_format.clone();
        }
        if self.naming.is_none() {
            self.naming = config.naming.clone();
        }
        if self.sequences.is_none() {
            self.sequences = config.sequences.clone();
        }

        // Residue comparison
        if self.positions.is_none() {
            self.positions = config.positions.as_ref().map(|positions| {
                positions
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            });
        }

        // Sequence filtering
        if self.include_sequences.is_none() {
            self.include_sequences = config.include_sequences.clone();
        }
        if self.exclude_sequences.is_none() {
            self.exclude_sequences = config.exclude_sequences.clone();
        }

        // Protein alignment
        if self.aligner.is_none() {
            self.aligner = config.aligner.clone();
        }
        if self.alignment_mode.is_none() {
            self.alignment_mode = config.alignment_mode.clone();
        }
        if self.matrix.is_none() {
            self.matrix = config.matrix.clone();
        }
        if self.gap_open.is_none() {
            self.gap_open = config.gap_open;
        }
        if self.gap_extend.is_none() {
            self.gap_extend = config.gap_extend;
        }

        self
    }
}

impl Command {
    /// Subcommand options with config values filled in, then the
    /// subcommand's own defaults
    pub fn merged_options(&self, config: &Config) -> Options {
        let mut options = self.options().merge_with_config(config);
        if options.naming.is_none() {
            options.naming = Some(self.default_naming().to_string());
        }
        options
    }
}

// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs, Debug)]
/// alncompare - reference-centred comparison of sequence alignments
pub struct Args {
    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    #[argh(subcommand)]
    pub command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub enum Command {
    Residues(ResiduesArgs),
    Insertions(InsertionsArgs),
    Mutations(MutationsArgs),
    MutationsAll(MutationsAllArgs),
    Config(ConfigArgs),
}

impl Command {
    /// FASTA header naming used when neither the CLI nor the config sets one.
    /// CLW files carry plain identifiers, so `insertions` matches them.
    pub fn default_naming(&self) -> &'static str {
        match self {
            Command::Insertions(_) => "id",
            _ => "species",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Residues(_) => "residues",
            Command::Insertions(_) => "insertions",
            Command::Mutations(_) => "mutations",
            Command::MutationsAll(_) => "mutations-all",
            Command::Config(_) => "config",
        }
    }
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "residues")]
/// count, per sequence, the important residues that differ from the reference
pub struct ResiduesArgs {
    /// alignment file (FASTA or CLW)
    #[argh(positional)]
    pub alignment: String,

    /// name of the reference sequence (e.g. HUMAN_Homo_sapiens)
    #[argh(positional)]
    pub reference: String,

    /// output report file
    #[argh(positional)]
    pub output: String,

    /// comma-separated 1-based reference positions (default: ACE2 spike contacts)
    #[argh(option)]
    pub positions: Option<String>,

    /// alignment format: fasta, clustal, auto (default: auto)
    #[argh(option)]
    pub input_format: Option<String>,

    /// FASTA header naming: species, id (default: species)
    #[argh(option)]
    pub naming: Option<String>,

    /// output format: csv, tsv, json (default: csv)
    #[argh(option)]
    pub format: Option<String>,

    /// include only sequences matching regex pattern
    #[argh(option)]
    pub include_sequences: Option<String>,

    /// exclude sequences matching regex pattern
    #[argh(option)]
    pub exclude_sequences: Option<String>,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "insertions")]
/// list reference positions where other sequences carry a gap
pub struct InsertionsArgs {
    /// alignment file (FASTA or CLW)
    #[argh(positional)]
    pub alignment: String,

    /// name of the reference sequence
    #[argh(positional)]
    pub reference: String,

    /// output report file
    #[argh(positional)]
    pub output: String,

    /// alignment format: fasta, clustal, auto (default: auto)
    #[argh(option)]
    pub input_format: Option<String>,

    /// FASTA header naming: species, id (default: id)
    #[argh(option)]
    pub naming: Option<String>,

    /// output format: csv, tsv, json (default: csv)
    #[argh(option)]
    pub format: Option<String>,

    /// include only sequences matching regex pattern
    #[argh(option)]
    pub include_sequences: Option<String>,

    /// exclude sequences matching regex pattern
    #[argh(option)]
    pub exclude_sequences: Option<String>,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "mutations")]
/// classify indels, synonymous and non-synonymous mutations between two genes
pub struct MutationsArgs {
    /// name (identifier or header substring) of the first sequence
    #[argh(positional)]
    pub first: String,

    /// name (identifier or header substring) of the second sequence
    #[argh(positional)]
    pub second: String,

    /// output SVG plot of cumulative counts
    #[argh(positional)]
    pub output: String,

    /// FASTA file holding the nucleotide sequences
    #[argh(option)]
    pub sequences: Option<String>,

    /// also write the per-column classification table to this file
    #[argh(option)]
    pub trace: Option<String>,

    /// output format of the trace table: csv, tsv, json (default: csv)
    #[argh(option)]
    pub format: Option<String>,

    /// pairwise aligner: parasail, ungapped (default: parasail)
    #[argh(option)]
    pub aligner: Option<String>,

    /// alignment mode: protein, protein-close, protein-distant (default: protein)
    #[argh(option)]
    pub alignment_mode: Option<String>,

    /// custom substitution matrix name (overrides preset mode)
    #[argh(option)]
    pub matrix: Option<String>,

    /// custom gap open penalty (overrides preset mode)
    #[argh(option)]
    pub gap_open: Option<i32>,

    /// custom gap extend penalty (overrides preset mode)
    #[argh(option)]
    pub gap_extend: Option<i32>,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "mutations-all")]
/// classify mutations of every sequence in a FASTA file against a reference
pub struct MutationsAllArgs {
    /// FASTA file holding the nucleotide sequences
    #[argh(positional)]
    pub sequences: String,

    /// name (identifier or header substring) of the reference sequence
    #[argh(positional)]
    pub reference: String,

    /// output summary file
    #[argh(positional)]
    pub output: String,

    /// output format: csv, tsv, json (default: csv)
    #[argh(option)]
    pub format: Option<String>,

    /// pairwise aligner: parasail, ungapped (default: parasail)
    #[argh(option)]
    pub aligner: Option<String>,

    /// alignment mode: protein, protein-close, protein-distant (default: protein)
    #[argh(option)]
    pub alignment_mode: Option<String>,

    /// custom substitution matrix name (overrides preset mode)
    #[argh(option)]
    pub matrix: Option<String>,

    /// custom gap open penalty (overrides preset mode)
    #[argh(option)]
    pub gap_open: Option<i32>,

    /// custom gap extend penalty (overrides preset mode)
    #[argh(option)]
    pub gap_extend: Option<i32>,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "config")]
/// print a sample configuration file and exit
pub struct ConfigArgs {}

/// Options shared by the subcommands, after CLI parsing and before validation
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub format: Option<String>,
    pub input_format: Option<String>,
    pub naming: Option<String>,
    pub positions: Option<String>,
    pub include_sequences: Option<String>,
    pub exclude_sequences: Option<String>,
    pub sequences: Option<String>,
    pub aligner: Option<String>,
    pub alignment_mode: Option<String>,
    pub matrix: Option<String>,
    pub gap_open: Option<i32>,
    pub gap_extend: Option<i32>,
}

impl Command {
    /// Collect the subcommand's optional settings
    pub fn options(&self) -> Options {
        match self {
            Command::Residues(a) => Options {
                format: a.format.clone(),
                input_format: a.input_format.clone(),
                naming: a.naming.clone(),
                positions: a.positions.clone(),
                include_sequences: a.include_sequences.clone(),
                exclude_sequences: a.exclude_sequences.clone(),
                ..Options::default()
            },
            Command::Insertions(a) => Options {
                format: a.format.clone(),
                input_format: a.input_format.clone(),
                naming: a.naming.clone(),
                include_sequences: a.include_sequences.clone(),
                exclude_sequences: a.exclude_sequences.clone(),
                ..Options::default()
            },
            Command::Mutations(a) => Options {
                format: a.format.clone(),
                sequences: a.sequences.clone(),
                aligner: a.aligner.clone(),
                alignment_mode: a.alignment_mode.clone(),
                matrix: a.matrix.clone(),
                gap_open: a.gap_open,
                gap_extend: a.gap_extend,
                ..Options::default()
            },
            Command::MutationsAll(a) => Options {
                format: a.format.clone(),
                sequences: Some(a.sequences.clone()),
                aligner: a.aligner.clone(),
                alignment_mode: a.alignment_mode.clone(),
                matrix: a.matrix.clone(),
                gap_open: a.gap_open,
                gap_extend: a.gap_extend,
                ..Options::default()
            },
            Command::Config(_) => Options::default(),
        }
    }
}

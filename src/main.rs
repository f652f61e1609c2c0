// main.rs - CLI entry point

use std::path::Path;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use alncompare::cli::args::{InsertionsArgs, MutationsAllArgs, MutationsArgs, ResiduesArgs};
use alncompare::cli::{validate_options, Args, Command, Config, Options, ValidationResult};
use alncompare::output::{
    write_cumulative_svg, write_differences, write_insertions, write_pair_summaries, write_trace,
    PairSummary,
};
use alncompare::prelude::*;
use alncompare::VERSION;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle config generation first
    if let Command::Config(_) = args.command {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::new(),
    };
    let options = args.command.merged_options(&config);

    println!("🚀 alncompare v{} - {}", VERSION, args.command.name());

    // Configure thread pool
    if let Some(n) = args.threads.or(config.threads) {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    } else {
        println!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads());
    }

    // Validate all arguments
    let validation = validate_options(&options)?;

    let total_start = Instant::now();
    match &args.command {
        Command::Residues(cmd) => run_residues(cmd, &validation, &command_line)?,
        Command::Insertions(cmd) => run_insertions(cmd, &validation, &command_line)?,
        Command::Mutations(cmd) => run_mutations(cmd, &options, &validation, &command_line)?,
        Command::MutationsAll(cmd) => run_mutations_all(cmd, &validation, &command_line)?,
        Command::Config(_) => {}
    }

    println!(
        "⏱️  Total execution time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Load the alignment and apply the include/exclude filters
fn load_filtered(
    path: &str,
    reference: &str,
    validation: &ValidationResult,
) -> Result<Alignment, String> {
    println!("🧬 Loading alignment: {}", path);
    let alignment = load_alignment(Path::new(path), validation.input_format, validation.naming)
        .map_err(|e| e.to_string())?;
    let loaded = alignment.len();

    let alignment = alignment
        .filtered(
            reference,
            validation.include_regex.as_ref(),
            validation.exclude_regex.as_ref(),
        )
        .map_err(|e| e.to_string())?;

    if alignment.len() < loaded {
        println!(
            "🔍 Sequence filters kept {} of {} sequences",
            alignment.len(),
            loaded
        );
    }
    println!(
        "✅ Loaded {} sequences × {} columns",
        alignment.len(),
        alignment.column_count()
    );
    Ok(alignment)
}

fn run_residues(
    cmd: &ResiduesArgs,
    validation: &ValidationResult,
    command_line: &str,
) -> Result<(), String> {
    let alignment = load_filtered(&cmd.alignment, &cmd.reference, validation)?;

    let reference = alignment.get(&cmd.reference).map_err(|e| e.to_string())?;
    let columns = reindex(reference, &validation.positions).map_err(|e| e.to_string())?;
    println!("🎯 Reference: {}", cmd.reference);
    for (position, column) in validation.positions.iter().zip(&columns) {
        println!("   position {} → column {}", position, column + 1);
    }

    let report = compare(&alignment, &cmd.reference, &columns).map_err(|e| e.to_string())?;
    let differing = report.rows.iter().filter(|r| r.differences > 0).count();
    println!(
        "📊 {} of {} sequences differ on at least one important residue",
        differing,
        report.rows.len()
    );

    write_differences(&cmd.output, &report, validation.output_format, command_line)
}

fn run_insertions(
    cmd: &InsertionsArgs,
    validation: &ValidationResult,
    command_line: &str,
) -> Result<(), String> {
    let alignment = load_filtered(&cmd.alignment, &cmd.reference, validation)?;

    let record = detect_insertions(&alignment, &cmd.reference).map_err(|e| e.to_string())?;
    println!(
        "📊 {} insertion positions in {} relative to the other sequences",
        record.len(),
        cmd.reference
    );
    for (name, count) in record.per_sequence_counts().iter().take(5) {
        println!("   {}: {} positions", name, count);
    }

    write_insertions(&cmd.output, &record, validation.output_format, command_line)
}

fn warn_internal_stops(name: &str, stops: &[usize]) {
    if !stops.is_empty() {
        let listed: Vec<String> = stops.iter().map(|p| p.to_string()).collect();
        println!(
            "⚠️  Warning: {} has internal stop codons at protein positions {}",
            name,
            listed.join(", ")
        );
    }
}

fn run_mutations(
    cmd: &MutationsArgs,
    options: &Options,
    validation: &ValidationResult,
    command_line: &str,
) -> Result<(), String> {
    let sequences_path = options
        .sequences
        .as_ref()
        .ok_or("--sequences is required (or set `sequences` in the config file)")?;

    println!("🧬 Loading sequences: {}", sequences_path);
    let sequences = SequenceFile::from_file(Path::new(sequences_path)).map_err(|e| e.to_string())?;
    let first = sequences.find(&cmd.first).map_err(|e| e.to_string())?;
    let second = sequences.find(&cmd.second).map_err(|e| e.to_string())?;
    println!("✅ {} vs {}", first.id, second.id);

    let registry = AlignerRegistry::new(&validation.aligner_config);
    let aligner = registry
        .get_aligner(&validation.aligner_name)
        .ok_or_else(|| format!("Aligner '{}' is not registered", validation.aligner_name))?;
    println!(
        "🔨 Aligner: {} ({}, gap open {}, gap extend {})",
        aligner.name(),
        validation.aligner_config.matrix,
        validation.aligner_config.gap_open,
        validation.aligner_config.gap_extend
    );

    let codon_table = CodonTable::standard();
    println!("🧬 Codon table: {}", codon_table.name());
    let trace = MutationClassifier::new(&codon_table, aligner)
        .classify(&first.sequence, &second.sequence)
        .map_err(|e| e.to_string())?;
    warn_internal_stops(&first.id, &trace.internal_stops.0);
    warn_internal_stops(&second.id, &trace.internal_stops.1);

    let totals = trace.totals();
    println!(
        "📊 {} columns: {} indels, {} synonymous, {} non synonymous, {} identical",
        totals.columns, totals.indels, totals.synonymous, totals.nonsynonymous, totals.identical
    );

    let title = format!("{} vs {}", cmd.first, cmd.second);
    write_cumulative_svg(&trace, &title, Path::new(&cmd.output))?;
    if let Some(trace_path) = &cmd.trace {
        write_trace(trace_path, &trace, validation.output_format, command_line)?;
    }
    Ok(())
}

fn run_mutations_all(
    cmd: &MutationsAllArgs,
    validation: &ValidationResult,
    command_line: &str,
) -> Result<(), String> {
    println!("🧬 Loading sequences: {}", cmd.sequences);
    let sequences = SequenceFile::from_file(Path::new(&cmd.sequences)).map_err(|e| e.to_string())?;
    let reference = sequences.find(&cmd.reference).map_err(|e| e.to_string())?;
    let others: Vec<&SequenceRecord> = sequences
        .records
        .iter()
        .filter(|r| r.id != reference.id)
        .collect();
    println!(
        "✅ Reference {} against {} sequences",
        reference.id,
        others.len()
    );

    let registry = AlignerRegistry::new(&validation.aligner_config);
    let aligner = registry
        .get_aligner(&validation.aligner_name)
        .ok_or_else(|| format!("Aligner '{}' is not registered", validation.aligner_name))?;
    let codon_table = CodonTable::standard();
    let classifier = MutationClassifier::new(&codon_table, aligner);

    let pb = ProgressBar::new(others.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
        )
        .map_err(|e| format!("Invalid progress template: {}", e))?,
    );

    let summaries: Vec<PairSummary> = others
        .par_iter()
        .map(|record| {
            let trace = classifier
                .classify(&reference.sequence, &record.sequence)
                .map_err(|e| format!("{} vs {}: {}", reference.id, record.id, e))?;
            pb.inc(1);
            Ok(PairSummary {
                reference: reference.id.clone(),
                sequence: record.id.clone(),
                totals: trace.totals(),
            })
        })
        .collect::<Result<Vec<_>, String>>()?;
    pb.finish_with_message("✅ Classification complete");

    write_pair_summaries(&cmd.output, &summaries, validation.output_format, command_line)
}

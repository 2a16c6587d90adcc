use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::parsing::maf::open_path;
use crate::pipeline::stats::AlignmentStats;

#[derive(Args)]
pub struct StatsArgs {
    /// Input MAF file (may be gzipped). Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,
}

/// Execute stats subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: StatsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reader = open_path(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;

    let mut stats = AlignmentStats::new();
    for block in reader {
        let block = block.with_context(|| format!("Failed to parse {}", args.input.display()))?;
        stats.add_block(&block);
    }

    if verbose {
        eprintln!(
            "Read {} blocks covering {} species",
            stats.blocks,
            stats.species.len()
        );
    }

    match format {
        OutputFormat::Text => print_text_stats(&stats),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
    }

    Ok(())
}

fn print_text_stats(stats: &AlignmentStats) {
    println!("MAF Summary");
    println!("{}", "=".repeat(60));
    println!("Blocks: {}", stats.blocks);
    println!("Columns: {}", stats.columns);
    println!("Mean block length: {:.1}", stats.mean_block_length());

    println!("\n{:<20} {:>12} {:>12} {:>15}", "Species", "Rows", "Empty rows", "Aligned bases");
    for (name, species) in &stats.species {
        println!(
            "{:<20} {:>12} {:>12} {:>15}",
            name, species.aligned_rows, species.empty_rows, species.aligned_bases
        );
    }
}

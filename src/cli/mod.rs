//! Command-line interface for maf-tools.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **parse**: Filter, reorder, and trim the blocks of a MAF file
//! - **stats**: Summarize the blocks and species in a MAF file
//!
//! ## Usage
//!
//! ```text
//! # Keep only human and mouse, human first
//! maf-tools parse input.maf --seqs hg18,mm9 --order hg18,mm9
//!
//! # Extract hg18 positions 1,000,001-1,002,000 from a gzipped MAF
//! maf-tools parse chr1.maf.gz --refseq hg18 --start 1000001 --end 1002000 -o region.maf
//!
//! # JSON summary for scripting
//! maf-tools stats input.maf --format json
//! ```

use clap::{Parser, Subcommand};

pub mod parse;
pub mod stats;

#[derive(Parser)]
#[command(name = "maf-tools")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Filter, reorder, and trim MAF multiple alignments")]
#[command(
    long_about = "maf-tools reads MAF (Multiple Alignment Format) files block by block and applies coordinate-exact edits:\n- Keep or drop species\n- Reorder species\n- Trim blocks to a genomic window on a reference species\n\nBlocks that end up empty or all gaps are dropped from the output."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for summaries
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter, reorder, and trim the blocks of a MAF file
    Parse(parse::ParseArgs),

    /// Summarize the blocks and species in a MAF file
    Stats(stats::StatsArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::output::writer::MafWriter;
use crate::parsing::maf::open_path;
use crate::pipeline::engine::{MafPipeline, ParseConfig, PipelineSummary, TrimWindow};

#[derive(Args)]
pub struct ParseArgs {
    /// Input MAF file (may be gzipped). Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Comma-separated species or source names to keep
    #[arg(long, value_delimiter = ',')]
    pub seqs: Vec<String>,

    /// Drop the species given with --seqs instead of keeping them
    #[arg(long, requires = "seqs")]
    pub exclude: bool,

    /// Comma-separated output species order; unlisted species are dropped
    #[arg(long, value_delimiter = ',')]
    pub order: Vec<String>,

    /// First position to keep (1-based)
    #[arg(long)]
    pub start: Option<i64>,

    /// Last position to keep (1-based, inclusive)
    #[arg(long)]
    pub end: Option<i64>,

    /// Species whose coordinates --start/--end refer to (default: alignment columns)
    #[arg(long)]
    pub refseq: Option<String>,

    /// Offset added to block coordinates before comparing with --start/--end
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub offset: i64,
}

impl ParseArgs {
    /// Build the pipeline configuration from command-line arguments
    pub fn to_config(&self) -> ParseConfig {
        let trim = if self.start.is_some() || self.end.is_some() {
            Some(TrimWindow {
                start: self.start.unwrap_or(1),
                end: self.end,
                reference: self.refseq.clone(),
                offset: self.offset,
            })
        } else {
            None
        };

        ParseConfig {
            species: self.seqs.clone(),
            include: !self.exclude,
            order: self.order.clone(),
            trim,
        }
    }
}

/// Execute parse subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, the output cannot
/// be written, or the requested edits are invalid.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ParseArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = args.to_config();
    if let Some(window) = &config.trim {
        if let Some(end) = window.end {
            anyhow::ensure!(
                window.start <= end,
                "--start ({}) must not be greater than --end ({end})",
                window.start
            );
        }
    }

    let mut reader = open_path(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };
    let writer = MafWriter::new(out)?;

    let (summary, _) = MafPipeline::new(config)
        .run(&mut reader, writer)
        .with_context(|| format!("Failed to process {}", args.input.display()))?;

    if verbose {
        print_summary(&summary, format)?;
    }

    Ok(())
}

fn print_summary(summary: &PipelineSummary, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            eprintln!("Blocks read: {}", summary.blocks_read);
            eprintln!("Blocks written: {}", summary.blocks_written);
            eprintln!("Blocks suppressed (empty or all gaps): {}", summary.blocks_suppressed);
            eprintln!("Blocks outside window: {}", summary.blocks_outside_window);
            eprintln!("Species seen: {}", summary.species_seen.join(","));
        }
        OutputFormat::Json => {
            eprintln!("{}", serde_json::to_string_pretty(summary)?);
        }
    }
    Ok(())
}

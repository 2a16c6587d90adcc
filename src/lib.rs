//! # maf-tools
//!
//! A library for reading, editing, and writing MAF (Multiple Alignment Format)
//! files, as produced by multiz and TBA whole-genome aligners.
//!
//! Each MAF block is a short multiple alignment of several species over a
//! shared set of columns, with per-row genomic coordinates, strand, and
//! optional indel-context and quality annotations. `maf-tools` parses blocks
//! with strict line-grammar validation and applies edits that keep every
//! row's genomic coordinates exact.
//!
//! ## Features
//!
//! - **Strict parsing**: every `a`, `s`, `e`, `i`, and `q` line is validated,
//!   including cross-line consistency within a block
//! - **Species filtering**: keep or drop rows by species or source name
//! - **Reordering**: project a block onto an ordered species list
//! - **Column extraction**: cut a block to a column range, recomputing each
//!   row's start and size from its gaps
//! - **Genomic trimming**: cut a block to a window on a reference species
//! - **Canonical output**: column-aligned text; empty and all-gap blocks are dropped
//!
//! ## Example
//!
//! ```rust
//! use maf_tools::parsing::maf::read_blocks_from_str;
//!
//! let text = "a score=100\n\
//!             s hg18.chr1 100 9 + 2000 ACGT-ACGTT\n\
//!             s mm9.chr3  50  9 + 1500 ACGTAACGT-\n";
//! let mut block = read_blocks_from_str(text).unwrap().remove(0);
//!
//! // Keep hg18 positions 103-106 (1-based)
//! assert!(block.trim(103, Some(106), Some("hg18"), 0).unwrap());
//! assert_eq!(block.row("mm9").unwrap().sequence(), Some("GTAAC"));
//!
//! print!("{block}");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Row and block data types
//! - [`parsing`]: Streaming MAF reader
//! - [`output`]: Block printer and file writer
//! - [`transform`]: Species filter, reorder, column extraction, and trimming
//! - [`pipeline`]: Whole-stream processing and statistics
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod output;
pub mod parsing;
pub mod pipeline;
pub mod transform;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::block::MafBlock;
pub use crate::core::row::{MafRow, RowData};
pub use crate::core::types::*;
pub use crate::output::writer::MafWriter;
pub use crate::parsing::maf::{MafError, MafReader};
pub use crate::pipeline::engine::{MafPipeline, ParseConfig, TrimWindow};

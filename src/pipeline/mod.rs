//! Whole-stream processing on top of the block model.
//!
//! - [`engine`]: [`engine::MafPipeline`] reads blocks, applies the edits in a
//!   [`engine::ParseConfig`] (trim window, species filter, species order),
//!   and writes the survivors
//! - [`stats`]: block and per-species totals for a stream
//!
//! ## Example
//!
//! ```rust
//! use maf_tools::output::writer::MafWriter;
//! use maf_tools::parsing::maf::MafReader;
//! use maf_tools::pipeline::engine::{MafPipeline, ParseConfig};
//!
//! let input = "a score=1\ns hg18.chr1 0 4 + 100 ACGT\ns mm9.chr2 10 4 + 100 ACGA\n";
//! let config = ParseConfig {
//!     order: vec!["mm9".to_string(), "hg18".to_string()],
//!     ..ParseConfig::default()
//! };
//!
//! let mut reader = MafReader::new(input.as_bytes());
//! let writer = MafWriter::new(Vec::new()).unwrap();
//! let (summary, out) = MafPipeline::new(config).run(&mut reader, writer).unwrap();
//!
//! assert_eq!(summary.blocks_written, 1);
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.find("mm9.chr2").unwrap() < text.find("hg18.chr1").unwrap());
//! ```

pub mod engine;
pub mod stats;

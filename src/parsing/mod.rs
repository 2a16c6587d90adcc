//! Parser for MAF (Multiple Alignment Format) files.
//!
//! A MAF file is a sequence of blocks separated by blank lines. Each block
//! starts with an `a` line and holds one line group per species:
//!
//! | Line | Fields | Description |
//! |------|--------|-------------|
//! | `a`  | free text | Block header, kept verbatim |
//! | `s`  | src start size strand srcSize sequence | Aligned bases |
//! | `e`  | src start size strand srcSize status | No aligned bases; status in C, I, M, n |
//! | `i`  | src leftStatus leftCount rightStatus rightCount | Context around the preceding `s` row |
//! | `q`  | src quality | Per-column quality for the preceding `s` row |
//!
//! Lines starting with `#` are comments and may appear anywhere.
//!
//! ## Example
//!
//! ```rust
//! use maf_tools::parsing::maf::MafReader;
//!
//! let text = "##maf version=1\n\na score=10\ns hg18.chr1 0 4 + 100 AC-GT\n";
//! let mut reader = MafReader::new(text.as_bytes());
//!
//! let block = reader.read_next_block(None).unwrap().unwrap();
//! assert_eq!(block.seqlen(), 5);
//! assert!(reader.read_next_block(None).unwrap().is_none());
//! ```

pub mod maf;

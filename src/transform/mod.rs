//! In-place structural edits on a [`crate::core::block::MafBlock`].
//!
//! - [`sub_spec`]: keep or drop rows by species / source name
//! - [`reorder`]: project the block onto an ordered list of species
//! - [`sub_align`]: extract a 1-based inclusive column range, recomputing
//!   genomic start and size for every sequence row
//! - [`trim`]: intersect the block with a genomic interval on a reference row
//!   (or with a column interval) and sub-align to the result
//!
//! All transforms are methods on `MafBlock`. Structural edits rebuild the
//! block's name index from scratch.
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
//! block.sub_align(3, 7).unwrap();
//! assert_eq!(block.rows()[0].sequence(), Some("GT-AC"));
//! assert_eq!(block.rows()[0].start(), 102);
//! assert_eq!(block.rows()[0].size(), 4);
//! ```

pub mod reorder;
pub mod sub_align;
pub mod sub_spec;
pub mod trim;

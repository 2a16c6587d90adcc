//! Serialization of MAF blocks back to text.
//!
//! - [`printer`]: canonical, column-aligned text for a single block
//!   (`Display` for [`crate::core::block::MafBlock`] and `MafBlock::write_to`)
//! - [`writer`]: file-level framing with the `##maf` header and `#eof` trailer
//!
//! Blocks that have lost all their rows, or whose sequence rows are nothing
//! but gaps after trimming, are never printed.

pub mod printer;
pub mod writer;

//! Core data types for MAF alignment blocks.
//!
//! - [`MafRow`](row::MafRow): one species' line group within a block (`s` or `e`
//!   line, plus optional `i` and `q` annotations)
//! - [`MafBlock`](block::MafBlock): the rows of one block and a name index over them
//! - [`Strand`](types::Strand), [`EmptyStatus`](types::EmptyStatus),
//!   [`IndelStatus`](types::IndelStatus): field value types
//! - [`SpeciesRegistry`](types::SpeciesRegistry): stream-wide species numbering
//!
//! ## Coordinates
//!
//! | Quantity | Base | Notes |
//! |----------|------|-------|
//! | Row `start` | 0 | Always on the + strand of the source, whatever the row's strand |
//! | Row `size` | - | Number of non-gap characters in the row |
//! | Columns | 1 | As accepted by `sub_align` and `trim` |
//!
//! ## Names
//!
//! Rows are looked up either by full source id (`hg18.chr1`) or by species
//! name (`hg18`, everything before the first `.`). Source ids are unique
//! within a block; when several rows share a species name, that name resolves
//! to the first of them.

pub mod block;
pub mod row;
pub mod types;

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::block::MafBlock;
use crate::core::row::MafRow;
use crate::core::types::SpeciesRegistry;
use crate::output::writer::MafWriter;
use crate::parsing::maf::{MafError, MafReader};

/// Genomic (or column) window every output block is trimmed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimWindow {
    /// First position to keep (1-based)
    pub start: i64,
    /// Last position to keep (1-based, inclusive); None for unbounded
    pub end: Option<i64>,
    /// Species whose coordinates `start`/`end` refer to; None for alignment columns
    pub reference: Option<String>,
    /// Added to the block's coordinates before comparing
    pub offset: i64,
}

impl Default for TrimWindow {
    fn default() -> Self {
        Self {
            start: 1,
            end: None,
            reference: None,
            offset: 0,
        }
    }
}

/// Edits applied to every block in a stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Species to keep (or drop, see `include`). Empty means no filtering.
    pub species: Vec<String>,
    /// Keep the listed species when true, drop them when false
    pub include: bool,
    /// Output species order. Empty means keep file order.
    pub order: Vec<String>,
    /// Trim window, if any
    pub trim: Option<TrimWindow>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            species: Vec::new(),
            include: true,
            order: Vec::new(),
            trim: None,
        }
    }
}

/// Counts gathered while running a pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineSummary {
    pub blocks_read: usize,
    pub blocks_written: usize,
    /// Blocks that became empty or all gaps after editing
    pub blocks_suppressed: usize,
    /// Blocks outside the trim window, or lacking an aligned trim reference
    pub blocks_outside_window: usize,
    /// Every species seen in the input, in order of first appearance
    pub species_seen: Vec<String>,
}

/// Applies a [`ParseConfig`] to every block read from a MAF stream
pub struct MafPipeline {
    config: ParseConfig,
}

impl MafPipeline {
    #[must_use]
    pub fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Apply the configured edits to a single block.
    ///
    /// Returns false if the block should be skipped: it lies outside the trim
    /// window, or the trim reference is missing or only present as an `e` row.
    ///
    /// # Errors
    ///
    /// Returns `MafError::Usage` for an invalid trim window or an ambiguous
    /// reorder list.
    pub fn apply(&self, block: &mut MafBlock) -> Result<bool, MafError> {
        // Trim before filtering so the reference row is still present
        if let Some(window) = &self.config.trim {
            if let Some(reference) = window.reference.as_deref() {
                if block.row(reference).map_or(true, MafRow::is_empty_row) {
                    debug!(reference, "Block has no aligned trim reference, skipping");
                    return Ok(false);
                }
            }
            let kept = block.trim(
                window.start,
                window.end,
                window.reference.as_deref(),
                window.offset,
            )?;
            if !kept {
                return Ok(false);
            }
        }

        if !self.config.species.is_empty() {
            block.sub_spec(&self.config.species, self.config.include);
        }
        if !self.config.order.is_empty() {
            block.reorder(&self.config.order)?;
        }
        Ok(true)
    }

    /// Read every block from `reader`, edit it, and print it to `writer`.
    /// The writer is finished (trailer written, flushed) and handed back.
    ///
    /// # Errors
    ///
    /// Stops at the first malformed block (`MafError::Format`), invalid
    /// edit (`MafError::Usage`), or I/O failure.
    pub fn run<R: BufRead, W: Write>(
        &self,
        reader: &mut MafReader<R>,
        mut writer: MafWriter<W>,
    ) -> Result<(PipelineSummary, W), MafError> {
        let mut registry = SpeciesRegistry::new();
        let mut summary = PipelineSummary::default();

        while let Some(mut block) = reader.read_next_block(Some(&mut registry))? {
            summary.blocks_read += 1;
            if !self.apply(&mut block)? {
                summary.blocks_outside_window += 1;
                continue;
            }
            writer.write_block(&block)?;
        }

        summary.blocks_written = writer.blocks_written();
        summary.blocks_suppressed = writer.blocks_suppressed();
        summary.species_seen = registry.names().to_vec();

        info!(
            read = summary.blocks_read,
            written = summary.blocks_written,
            suppressed = summary.blocks_suppressed,
            outside_window = summary.blocks_outside_window,
            "Finished processing MAF stream"
        );

        let inner = writer.finish()?;
        Ok((summary, inner))
    }
}

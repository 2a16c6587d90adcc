use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::block::MafBlock;

/// Per-species totals across a MAF stream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpeciesStats {
    /// Blocks with an `s` row for this species
    pub aligned_rows: usize,
    /// Blocks with an `e` row for this species
    pub empty_rows: usize,
    /// Sum of `size` over all `s` rows
    pub aligned_bases: u64,
}

/// Summary of the blocks in a MAF stream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlignmentStats {
    pub blocks: usize,
    pub columns: u64,
    pub species: BTreeMap<String, SpeciesStats>,
}

impl AlignmentStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_block(&mut self, block: &MafBlock) {
        self.blocks += 1;
        self.columns += block.seqlen() as u64;

        for row in block.rows() {
            let entry = self.species.entry(row.spec_name().to_string()).or_default();
            if row.is_empty_row() {
                entry.empty_rows += 1;
            } else {
                entry.aligned_rows += 1;
                entry.aligned_bases += row.size();
            }
        }
    }

    /// Mean number of columns per block
    #[must_use]
    pub fn mean_block_length(&self) -> f64 {
        if self.blocks == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        {
            self.columns as f64 / self.blocks as f64
        }
    }
}

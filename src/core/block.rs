use std::collections::HashMap;

use serde::Serialize;

use crate::core::row::MafRow;
use crate::parsing::maf::MafError;

/// A single MAF alignment block: header line plus one row per species
///
/// Rows are kept in file order. Lookup by name goes through an index keyed by
/// both the full source id and the derived species name. The index is rebuilt
/// from scratch after every structural edit, so a position returned by
/// [`MafBlock::position`] always refers to the row currently stored there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MafBlock {
    /// Raw `a` line, kept verbatim
    pub(crate) header: String,

    pub(crate) rows: Vec<MafRow>,

    /// Number of alignment columns (0 if the block has no sequence rows)
    pub(crate) seqlen: usize,

    // === Name index ===
    #[serde(skip)]
    by_src: HashMap<String, usize>,

    /// Species name -> first row with that species
    #[serde(skip)]
    by_species: HashMap<String, usize>,
}

impl MafBlock {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            rows: Vec::new(),
            seqlen: 0,
            by_src: HashMap::new(),
            by_species: HashMap::new(),
        }
    }

    /// Build a block from rows, checking source ids and sequence lengths.
    ///
    /// # Errors
    ///
    /// Returns `MafError::DuplicateSource` if two rows share a source id, or
    /// `MafError::Usage` if sequence rows disagree on length.
    pub fn from_rows(header: impl Into<String>, rows: Vec<MafRow>) -> Result<Self, MafError> {
        let mut block = Self::new(header);
        for row in rows {
            block.push_row(row)?;
        }
        if let Some((expected, found)) = block.update_seqlen() {
            return Err(MafError::Usage(format!(
                "lengths of sequences in MAF block do not agree ({expected}, {found})"
            )));
        }
        Ok(block)
    }

    /// Append a row and index it under its source id and species name.
    /// Returns the position of the new row.
    ///
    /// Column count is not checked here; the reader checks it
    /// once the whole block is in.
    ///
    /// # Errors
    ///
    /// Returns `MafError::DuplicateSource` if a row with the same source id exists.
    pub fn push_row(&mut self, row: MafRow) -> Result<usize, MafError> {
        if self.by_src.contains_key(row.src()) {
            return Err(MafError::DuplicateSource(row.src().to_string()));
        }
        let pos = self.rows.len();
        self.by_src.insert(row.src().to_string(), pos);
        self.by_species
            .entry(row.spec_name().to_string())
            .or_insert(pos);
        self.rows.push(row);
        Ok(pos)
    }

    /// Set `seqlen` from the first sequence row and check all others agree.
    ///
    /// Returns `Some((expected, found))` for the first disagreeing row, None if consistent.
    pub(crate) fn update_seqlen(&mut self) -> Option<(usize, usize)> {
        let mut seqlen = None;
        for seq in self.rows.iter().filter_map(MafRow::sequence) {
            match seqlen {
                None => seqlen = Some(seq.len()),
                Some(expected) if expected != seq.len() => return Some((expected, seq.len())),
                Some(_) => {}
            }
        }
        self.seqlen = seqlen.unwrap_or(0);
        None
    }

    /// Replace the row sequence and rebuild the name index over it
    pub(crate) fn replace_rows(&mut self, rows: Vec<MafRow>) {
        self.rows = rows;
        self.rebuild_index();
    }

    pub(crate) fn rebuild_index(&mut self) {
        self.by_src.clear();
        self.by_species.clear();
        for (pos, row) in self.rows.iter().enumerate() {
            self.by_src.insert(row.src().to_string(), pos);
            self.by_species
                .entry(row.spec_name().to_string())
                .or_insert(pos);
        }
    }

    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    #[must_use]
    pub fn rows(&self) -> &[MafRow] {
        &self.rows
    }

    /// Mutable access to a row's annotations. Structural fields stay private.
    pub fn row_mut(&mut self, name: &str) -> Option<&mut MafRow> {
        let pos = self.position(name)?;
        self.rows.get_mut(pos)
    }

    /// Number of rows (species) in the block
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of alignment columns
    #[must_use]
    pub fn seqlen(&self) -> usize {
        self.seqlen
    }

    /// Current position of the row named by source id or species name.
    /// Source ids take precedence over species names.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_src
            .get(name)
            .or_else(|| self.by_species.get(name))
            .copied()
    }

    #[must_use]
    pub fn row(&self, name: &str) -> Option<&MafRow> {
        self.position(name).map(|pos| &self.rows[pos])
    }

    /// Species name of the first row, conventionally the reference
    #[must_use]
    pub fn reference_species(&self) -> Option<&str> {
        self.rows.first().map(MafRow::spec_name)
    }

    /// Genomic start of the named row, or of the first row when `name` is None.
    /// Returns None if the row is not present.
    #[must_use]
    pub fn start_of(&self, name: Option<&str>) -> Option<u64> {
        let pos = match name {
            Some(name) => self.position(name)?,
            None => 0,
        };
        self.rows.get(pos).map(MafRow::start)
    }

    /// Aligned size of the named row, or the column count when `name` is None.
    /// Empty rows report 0. Returns None if the row is not present.
    #[must_use]
    pub fn size_of(&self, name: Option<&str>) -> Option<u64> {
        let Some(name) = name else {
            return Some(self.seqlen as u64);
        };
        let row = self.row(name)?;
        if row.is_empty_row() {
            Some(0)
        } else {
            Some(row.size())
        }
    }

    /// True when every sequence row is gap at every column.
    /// Empty rows are ignored; a block with no sequence rows counts as all gaps.
    #[must_use]
    pub fn is_all_gaps(&self) -> bool {
        self.rows.iter().all(MafRow::is_all_gap)
    }

    /// Blocks with no rows or no aligned bases are not worth printing
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.rows.is_empty() || self.is_all_gaps()
    }
}

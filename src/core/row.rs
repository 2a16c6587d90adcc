use std::ops::Range;

use serde::Serialize;

use crate::core::types::{EmptyStatus, IndelAnnotation, LineKind, Strand};
use crate::parsing::maf::MafError;
use crate::utils::validation::{check_quality, count_bases, species_name, GAP};

/// Per-row payload: either aligned bases (`s` line) or a bridging status (`e` line)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowData {
    Aligned {
        /// Aligned characters, one per block column, `-` for gaps
        sequence: String,
        /// `q` line, same length as `sequence`
        #[serde(skip_serializing_if = "Option::is_none")]
        quality: Option<String>,
        /// `i` line
        #[serde(skip_serializing_if = "Option::is_none")]
        indel: Option<IndelAnnotation>,
    },
    Empty {
        status: EmptyStatus,
    },
}

/// One species' contribution to a MAF block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MafRow {
    /// Source id, usually `assembly.chromosome`
    pub(crate) src: String,

    /// `src` truncated at the first `.`
    pub(crate) spec_name: String,

    /// 0-based start, always relative to the + strand of the source
    pub(crate) start: u64,

    /// Number of non-gap characters in the aligned region
    pub(crate) size: u64,

    pub(crate) strand: Strand,

    /// Total length of the source sequence
    pub(crate) src_size: u64,

    pub(crate) data: RowData,
}

impl MafRow {
    /// Create a sequence (`s`) row. `size` is derived from the sequence.
    pub fn aligned(
        src: impl Into<String>,
        start: u64,
        strand: Strand,
        src_size: u64,
        sequence: impl Into<String>,
    ) -> Self {
        let src = src.into();
        let sequence = sequence.into();
        Self {
            spec_name: species_name(&src).to_string(),
            src,
            start,
            size: count_bases(sequence.as_bytes()) as u64,
            strand,
            src_size,
            data: RowData::Aligned {
                sequence,
                quality: None,
                indel: None,
            },
        }
    }

    /// Create an empty (`e`) row
    pub fn empty(
        src: impl Into<String>,
        start: u64,
        size: u64,
        strand: Strand,
        src_size: u64,
        status: EmptyStatus,
    ) -> Self {
        let src = src.into();
        Self {
            spec_name: species_name(&src).to_string(),
            src,
            start,
            size,
            strand,
            src_size,
            data: RowData::Empty { status },
        }
    }

    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }

    #[must_use]
    pub fn spec_name(&self) -> &str {
        &self.spec_name
    }

    #[must_use]
    pub fn start(&self) -> u64 {
        self.start
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[must_use]
    pub fn strand(&self) -> Strand {
        self.strand
    }

    #[must_use]
    pub fn src_size(&self) -> u64 {
        self.src_size
    }

    #[must_use]
    pub fn data(&self) -> &RowData {
        &self.data
    }

    /// Line kind of the row's primary line (`s` or `e`)
    #[must_use]
    pub fn kind(&self) -> LineKind {
        match self.data {
            RowData::Aligned { .. } => LineKind::Sequence,
            RowData::Empty { .. } => LineKind::Empty,
        }
    }

    #[must_use]
    pub fn is_empty_row(&self) -> bool {
        matches!(self.data, RowData::Empty { .. })
    }

    #[must_use]
    pub fn sequence(&self) -> Option<&str> {
        match &self.data {
            RowData::Aligned { sequence, .. } => Some(sequence),
            RowData::Empty { .. } => None,
        }
    }

    #[must_use]
    pub fn quality(&self) -> Option<&str> {
        match &self.data {
            RowData::Aligned { quality, .. } => quality.as_deref(),
            RowData::Empty { .. } => None,
        }
    }

    #[must_use]
    pub fn indel(&self) -> Option<&IndelAnnotation> {
        match &self.data {
            RowData::Aligned { indel, .. } => indel.as_ref(),
            RowData::Empty { .. } => None,
        }
    }

    #[must_use]
    pub fn empty_status(&self) -> Option<EmptyStatus> {
        match self.data {
            RowData::Empty { status } => Some(status),
            RowData::Aligned { .. } => None,
        }
    }

    /// Number of non-gap characters in the given 0-based column range.
    /// Empty rows have no bases.
    #[must_use]
    pub fn non_gap_count(&self, columns: Range<usize>) -> usize {
        self.sequence()
            .map_or(0, |seq| count_bases(&seq.as_bytes()[columns]))
    }

    /// True if the row carries no aligned bases at all
    #[must_use]
    pub fn is_all_gap(&self) -> bool {
        self.sequence()
            .map_or(true, |seq| seq.bytes().all(|c| c == GAP))
    }

    /// Attach a quality string.
    ///
    /// # Errors
    ///
    /// Returns `MafError::Usage` if this is an empty row, or if the quality
    /// string does not line up with the aligned sequence.
    pub fn set_quality(&mut self, new_quality: impl Into<String>) -> Result<(), MafError> {
        let new_quality = new_quality.into();
        match &mut self.data {
            RowData::Aligned {
                sequence, quality, ..
            } => {
                if let Some(problem) = check_quality(sequence.as_bytes(), new_quality.as_bytes())
                {
                    return Err(MafError::Usage(format!("{}: {problem}", self.src)));
                }
                *quality = Some(new_quality);
                Ok(())
            }
            RowData::Empty { .. } => Err(MafError::Usage(format!(
                "cannot attach quality to empty row {}",
                self.src
            ))),
        }
    }

    /// Attach an indel annotation.
    ///
    /// # Errors
    ///
    /// Returns `MafError::Usage` if this is an empty row.
    pub fn set_indel(&mut self, annotation: IndelAnnotation) -> Result<(), MafError> {
        match &mut self.data {
            RowData::Aligned { indel, .. } => {
                *indel = Some(annotation);
                Ok(())
            }
            RowData::Empty { .. } => Err(MafError::Usage(format!(
                "cannot attach indel status to empty row {}",
                self.src
            ))),
        }
    }
}

use std::ops::Range;

use tracing::debug;

use crate::core::block::MafBlock;
use crate::core::row::{MafRow, RowData};
use crate::parsing::maf::MafError;
use crate::utils::validation::count_bases;

/// Cut a sequence row down to `columns` (0-based, half-open).
///
/// Bases skipped on the left move the genomic start forward; the indel
/// annotation no longer describes the new boundaries and is dropped.
fn slice_columns(row: &mut MafRow, columns: &Range<usize>) {
    let RowData::Aligned {
        sequence,
        quality,
        indel,
    } = &mut row.data
    else {
        return;
    };

    let bytes = sequence.as_bytes();
    row.start += count_bases(&bytes[..columns.start]) as u64;
    row.size = count_bases(&bytes[columns.clone()]) as u64;

    *sequence = sequence[columns.clone()].to_string();
    if let Some(quality) = quality {
        *quality = quality[columns.clone()].to_string();
    }
    *indel = None;
}

impl MafBlock {
    /// Restrict the block to columns `start..=end` (1-based, inclusive).
    ///
    /// Asking for the full column span is a no-op. Empty rows are kept as-is.
    ///
    /// # Errors
    ///
    /// Returns `MafError::Usage` unless `1 <= start <= end <= seqlen`, or if a
    /// row's end coordinate does not fit in a `u64`.
    pub fn sub_align(&mut self, start: usize, end: usize) -> Result<(), MafError> {
        let seqlen = self.seqlen;
        if start == 0 || start > end || end > seqlen {
            return Err(MafError::Usage(format!(
                "sub_align got start={start}, end={end}, seqlen={seqlen}"
            )));
        }
        if start == 1 && end == seqlen {
            return Ok(());
        }

        if let Some(row) = self
            .rows
            .iter()
            .find(|row| !row.is_empty_row() && row.start.checked_add(row.size).is_none())
        {
            return Err(MafError::Usage(format!(
                "{} start {} plus size {} overflows",
                row.src, row.start, row.size
            )));
        }

        let columns = (start - 1)..end;
        for row in &mut self.rows {
            slice_columns(row, &columns);
        }
        self.seqlen = columns.len();

        debug!(start, end, old_columns = seqlen, "Extracted block columns");
        Ok(())
    }
}

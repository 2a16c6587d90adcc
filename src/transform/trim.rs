use tracing::debug;

use crate::core::block::MafBlock;
use crate::parsing::maf::MafError;
use crate::utils::validation::GAP;

/// Convert a genomic or column quantity to signed coordinate space
#[inline]
fn coord(n: impl TryInto<i64>) -> Option<i64> {
    n.try_into().ok()
}

fn overflow(offset: i64) -> MafError {
    MafError::Usage(format!(
        "trim coordinates do not fit in a signed 64-bit integer (offset {offset})"
    ))
}

impl MafBlock {
    /// Trim the block to the interval `[start_col, end_col]` (1-based,
    /// inclusive; `end_col = None` means unbounded).
    ///
    /// With `reference = None` the interval is in alignment columns. With a
    /// reference row the interval is in that row's 1-based genomic
    /// coordinates. `offset` is added to the block's own coordinates before
    /// comparing.
    ///
    /// Returns `Ok(false)` and leaves the block untouched if it lies entirely
    /// outside the interval; `Ok(true)` if it is entirely inside (no change)
    /// or was cut down to the overlapping columns.
    ///
    /// # Errors
    ///
    /// Returns `MafError::Usage` if `start_col > end_col`, if the reference
    /// is not in the block or is an empty (`e`) row, or if `offset` pushes the
    /// block's coordinates out of `i64` range.
    pub fn trim(
        &mut self,
        start_col: i64,
        end_col: Option<i64>,
        reference: Option<&str>,
        offset: i64,
    ) -> Result<bool, MafError> {
        if let Some(end_col) = end_col {
            if start_col > end_col {
                return Err(MafError::Usage(format!(
                    "trim start {start_col} is greater than end {end_col}"
                )));
            }
        }
        if self.seqlen == 0 {
            return Ok(false);
        }

        let (first_pos, length, ref_seq) = match reference {
            None => (Some(1), coord(self.seqlen), None),
            Some(name) => {
                let row = self.row(name).ok_or_else(|| {
                    MafError::Usage(format!("reference {name} not present in block"))
                })?;
                let seq = row.sequence().ok_or_else(|| {
                    MafError::Usage(format!("reference {name} has no aligned sequence"))
                })?;
                let first_pos = coord(row.start()).and_then(|start| start.checked_add(1));
                (first_pos, coord(row.size()), Some(seq.as_bytes()))
            }
        };

        // The walk below never moves past start_idx + length
        let mut start_idx = first_pos
            .and_then(|pos| pos.checked_add(offset))
            .ok_or_else(|| overflow(offset))?;
        let last_idx = length
            .and_then(|length| start_idx.checked_add(length))
            .ok_or_else(|| overflow(offset))?
            - 1;
        let mut idx = start_idx;
        // A leading gap on the reference sits one position before its first base
        if ref_seq.is_some_and(|seq| seq.first() == Some(&GAP)) {
            start_idx = start_idx.checked_sub(1).ok_or_else(|| overflow(offset))?;
        }

        if start_col > last_idx || end_col.is_some_and(|end| end < start_idx) {
            return Ok(false);
        }
        if start_col <= start_idx && end_col.map_or(true, |end| end >= last_idx) {
            return Ok(true);
        }

        let mut first = None;
        let mut last = None;
        for col in 0..self.seqlen {
            if ref_seq.is_some_and(|seq| seq[col] == GAP) {
                idx -= 1;
            }
            let keep = idx >= start_col && end_col.map_or(true, |end| idx <= end);
            if keep {
                first.get_or_insert(col + 1);
                last = Some(col + 1);
            }
            idx += 1;
        }

        let (Some(first), Some(last)) = (first, last) else {
            debug!(start_col, ?end_col, "No block columns fall inside trim interval");
            return Ok(false);
        };
        self.sub_align(first, last)?;
        Ok(true)
    }
}

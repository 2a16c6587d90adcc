use std::fmt;
use std::io::{self, Write};

use crate::core::block::MafBlock;
use crate::core::row::{MafRow, RowData};

/// Widths of the padded `s`/`e` fields, computed over every row in a block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FieldWidths {
    src: usize,
    start: usize,
    size: usize,
    src_size: usize,
}

/// Decimal width of an unsigned integer
fn digits(mut n: u64) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

impl FieldWidths {
    fn of(rows: &[MafRow]) -> Self {
        rows.iter().fold(Self::default(), |w, row| Self {
            src: w.src.max(row.src().len()),
            start: w.start.max(digits(row.start())),
            size: w.size.max(digits(row.size())),
            src_size: w.src_size.max(digits(row.src_size())),
        })
    }

    /// Columns between the end of the source id and the start of the sequence
    fn quality_padding(self) -> usize {
        6 + self.start + self.size + self.src_size
    }
}

fn fmt_row(f: &mut fmt::Formatter<'_>, row: &MafRow, w: FieldWidths) -> fmt::Result {
    let kind = match row.data() {
        RowData::Aligned { .. } => 's',
        RowData::Empty { .. } => 'e',
    };
    write!(
        f,
        "{kind} {:<src$} {:>start$} {:>size$} {} {:>src_size$} ",
        row.src(),
        row.start(),
        row.size(),
        row.strand(),
        row.src_size(),
        src = w.src,
        start = w.start,
        size = w.size,
        src_size = w.src_size,
    )?;

    match row.data() {
        RowData::Empty { status } => writeln!(f, "{}", status.as_char()),
        RowData::Aligned {
            sequence,
            quality,
            indel,
        } => {
            writeln!(f, "{sequence}")?;
            if let Some(indel) = indel {
                writeln!(
                    f,
                    "i {:<src$} {} {} {} {}",
                    row.src(),
                    indel.left_status.as_char(),
                    indel.left_count,
                    indel.right_status.as_char(),
                    indel.right_count,
                    src = w.src,
                )?;
            }
            if let Some(quality) = quality {
                writeln!(
                    f,
                    "q {:<src$}{:pad$}{quality}",
                    row.src(),
                    "",
                    src = w.src,
                    pad = w.quality_padding(),
                )?;
            }
            Ok(())
        }
    }
}

/// Canonical MAF text for a block, ending with a blank line.
///
/// Blocks with no rows, or whose sequence rows are gaps at every column,
/// format as the empty string.
impl fmt::Display for MafBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_degenerate() {
            return Ok(());
        }

        let widths = FieldWidths::of(self.rows());
        writeln!(f, "{}", self.header())?;
        for row in self.rows() {
            fmt_row(f, row, widths)?;
        }
        writeln!(f)
    }
}

impl MafBlock {
    /// Print the block to `out`. Returns false if the block was suppressed
    /// because it is empty or all gaps.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying writer.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<bool> {
        if self.is_degenerate() {
            return Ok(false);
        }
        write!(out, "{self}")?;
        Ok(true)
    }
}

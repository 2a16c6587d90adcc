use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::core::block::MafBlock;
use crate::core::row::MafRow;
use crate::core::types::{
    EmptyStatus, IndelAnnotation, IndelStatus, LineKind, SpeciesRegistry, Strand,
};
use crate::utils::validation::{check_row_limit, count_bases};

#[derive(Error, Debug)]
pub enum MafError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid MAF format at line {line}: {message}")]
    Format { line: usize, message: String },

    #[error("MAF block has two alignments with same source name ({0})")]
    DuplicateSource(String),

    #[error("Invalid usage: {0}")]
    Usage(String),
}

impl MafError {
    fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }

    /// Malformed input (bad line grammar, inconsistent block)
    #[must_use]
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. } | Self::DuplicateSource(_))
    }

    /// Caller contract violation (bad coordinates, ambiguous reorder list)
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

/// Streaming reader producing one validated [`MafBlock`] at a time
///
/// Between blocks the reader skips blank and `#` comment lines; the first
/// other line must be an `a` header. A block ends at the next blank line or
/// end of input.
pub struct MafReader<R> {
    inner: R,
    line: String,
    line_num: usize,
}

impl<R: BufRead> MafReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: String::new(),
            line_num: 0,
        }
    }

    /// Number of lines consumed so far
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_num
    }

    /// Read one line into the internal buffer. Returns false at end of input.
    fn next_line(&mut self) -> Result<bool, MafError> {
        self.line.clear();
        let n = self.inner.read_line(&mut self.line)?;
        if n == 0 {
            return Ok(false);
        }
        self.line_num += 1;
        Ok(true)
    }

    /// Read the next block.
    ///
    /// If a registry is supplied, every species name not yet in it is
    /// registered as it is encountered.
    ///
    /// # Errors
    ///
    /// Returns `MafError::Format` for any malformed line or inconsistent block,
    /// or `MafError::Io` if reading fails.
    pub fn read_next_block(
        &mut self,
        mut registry: Option<&mut SpeciesRegistry>,
    ) -> Result<Option<MafBlock>, MafError> {
        let mut block: Option<MafBlock> = None;

        while self.next_line()? {
            let line_num = self.line_num;
            let line = self.line.trim();

            if line.is_empty() {
                if block.is_none() {
                    continue;
                }
                break;
            }
            if line.starts_with('#') {
                continue;
            }

            let kind = line.chars().next().and_then(LineKind::from_char);
            let Some(current) = block.as_mut() else {
                if kind != Some(LineKind::Header) {
                    return Err(MafError::format(
                        line_num,
                        "first line of MAF block should start with 'a'",
                    ));
                }
                block = Some(MafBlock::new(line));
                continue;
            };

            match kind {
                Some(LineKind::Sequence | LineKind::Empty) => {
                    if let Some(message) = check_row_limit(current.num_rows()) {
                        return Err(MafError::format(line_num, message));
                    }
                    let row = parse_row_line(line, line_num)?;
                    if let Some(registry) = registry.as_deref_mut() {
                        registry.register(row.spec_name());
                    }
                    current
                        .push_row(row)
                        .map_err(|e| MafError::format(line_num, e.to_string()))?;
                }
                Some(LineKind::Indel) => {
                    let (src, annotation) = parse_indel_line(line, line_num)?;
                    last_aligned_row(current, &src, 'i', line_num)?
                        .set_indel(annotation)
                        .map_err(|e| at_line(line_num, e))?;
                }
                Some(LineKind::Quality) => {
                    let (src, quality) = parse_quality_line(line, line_num)?;
                    last_aligned_row(current, &src, 'q', line_num)?
                        .set_quality(quality)
                        .map_err(|e| at_line(line_num, e))?;
                }
                Some(LineKind::Header) | None => {
                    return Err(MafError::format(
                        line_num,
                        format!(
                            "found line in MAF block starting with '{}'",
                            line.chars().next().unwrap_or_default()
                        ),
                    ));
                }
            }
        }

        let Some(mut block) = block else {
            return Ok(None);
        };

        if let Some((expected, found)) = block.update_seqlen() {
            return Err(MafError::format(
                self.line_num,
                format!("lengths of sequences in MAF block do not agree ({expected}, {found})"),
            ));
        }

        debug!(
            rows = block.num_rows(),
            columns = block.seqlen(),
            line = self.line_num,
            "Read MAF block"
        );
        Ok(Some(block))
    }
}

impl<R: BufRead> Iterator for MafReader<R> {
    type Item = Result<MafBlock, MafError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next_block(None).transpose()
    }
}

/// Open a MAF file for reading. `-` reads stdin; a `.gz` extension is
/// decompressed transparently.
///
/// # Errors
///
/// Returns `MafError::Io` if the file cannot be opened.
pub fn open_path(path: &Path) -> Result<MafReader<Box<dyn BufRead>>, MafError> {
    let inner: Box<dyn BufRead> = if path.as_os_str() == "-" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let file = File::open(path)?;
        let is_gzip = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("gz"));
        if is_gzip {
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        }
    };
    Ok(MafReader::new(inner))
}

/// Parse every block in a string
///
/// # Errors
///
/// Returns the first `MafError` encountered.
pub fn read_blocks_from_str(text: &str) -> Result<Vec<MafBlock>, MafError> {
    MafReader::new(text.as_bytes()).collect()
}

/// Report a row-level usage error as a format error on the offending line
fn at_line(line_num: usize, err: MafError) -> MafError {
    match err {
        MafError::Usage(message) => MafError::format(line_num, message),
        other => other,
    }
}

/// The row an `i`/`q` line annotates: the most recently added row, which must
/// be a sequence row with the same source id.
fn last_aligned_row<'a>(
    block: &'a mut MafBlock,
    src: &str,
    kind: char,
    line_num: usize,
) -> Result<&'a mut MafRow, MafError> {
    let Some(row) = block.rows.last_mut().filter(|row| !row.is_empty_row()) else {
        return Err(MafError::format(
            line_num,
            format!("got {kind}-line without preceding s-line in MAF block"),
        ));
    };
    if row.src() != src {
        return Err(MafError::format(
            line_num,
            format!(
                "{kind}-line source name does not match preceding s-line ({src}, {})",
                row.src()
            ),
        ));
    }
    Ok(row)
}

fn parse_u64(field: &str, what: &str, line_num: usize) -> Result<u64, MafError> {
    field
        .parse()
        .map_err(|_| MafError::format(line_num, format!("invalid {what}: '{field}'")))
}

/// Parse an `s` or `e` line (7 fields)
fn parse_row_line(line: &str, line_num: usize) -> Result<MafRow, MafError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[kind, src, start, size, strand, src_size, last] = fields.as_slice() else {
        return Err(MafError::format(
            line_num,
            format!(
                "expected seven fields in MAF line starting with '{}' (got {})",
                fields.first().copied().unwrap_or_default(),
                fields.len()
            ),
        ));
    };

    let start = parse_u64(start, "start", line_num)?;
    let size = parse_u64(size, "size", line_num)?;
    let Some(strand) = Strand::parse(strand) else {
        return Err(MafError::format(line_num, format!("got strand {strand}")));
    };
    let src_size = parse_u64(src_size, "source size", line_num)?;
    if start.checked_add(size).map_or(true, |end| end > src_size) {
        return Err(MafError::format(
            line_num,
            format!("start {start} plus size {size} is past source size {src_size}"),
        ));
    }

    match kind {
        "s" => {
            if !last.is_ascii() {
                return Err(MafError::format(
                    line_num,
                    "aligned sequence contains non-ASCII characters",
                ));
            }
            let bases = count_bases(last.as_bytes()) as u64;
            if bases != size {
                return Err(MafError::format(
                    line_num,
                    format!("size field {size} does not match {bases} non-gap characters in sequence"),
                ));
            }
            Ok(MafRow::aligned(src, start, strand, src_size, last))
        }
        "e" => {
            let mut chars = last.chars();
            let status = match (chars.next(), chars.next()) {
                (Some(c), None) => EmptyStatus::from_char(c).ok_or_else(|| {
                    MafError::format(line_num, format!("e-line has illegal status {c}"))
                })?,
                _ => {
                    return Err(MafError::format(
                        line_num,
                        format!("e-line with status {last} in MAF block"),
                    ))
                }
            };
            Ok(MafRow::empty(src, start, size, strand, src_size, status))
        }
        other => Err(MafError::format(
            line_num,
            format!("expected first field 's' or 'e' (got {other})"),
        )),
    }
}

fn parse_indel_status(field: &str, side: &str, line_num: usize) -> Result<IndelStatus, MafError> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => IndelStatus::from_char(c).ok_or_else(|| {
            MafError::format(line_num, format!("i-line got illegal {side}Status = '{c}'"))
        }),
        _ => Err(MafError::format(
            line_num,
            format!("i-line got illegal {side}Status = {field}"),
        )),
    }
}

/// Parse an `i` line (6 fields)
fn parse_indel_line(line: &str, line_num: usize) -> Result<(String, IndelAnnotation), MafError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &["i", src, left_status, left_count, right_status, right_count] = fields.as_slice() else {
        return Err(MafError::format(
            line_num,
            format!(
                "expected six fields in MAF line starting with 'i' (got {})",
                fields.len()
            ),
        ));
    };

    let annotation = IndelAnnotation {
        left_status: parse_indel_status(left_status, "left", line_num)?,
        left_count: parse_u64(left_count, "left count", line_num)?,
        right_status: parse_indel_status(right_status, "right", line_num)?,
        right_count: parse_u64(right_count, "right count", line_num)?,
    };
    Ok((src.to_string(), annotation))
}

/// Parse a `q` line (3 fields)
fn parse_quality_line(line: &str, line_num: usize) -> Result<(String, String), MafError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &["q", src, quality] = fields.as_slice() else {
        return Err(MafError::format(
            line_num,
            format!(
                "expected three fields in q-line of MAF file (got {})",
                fields.len()
            ),
        ));
    };
    Ok((src.to_string(), quality.to_string()))
}

//! Centralized validation and helper functions.

/// Gap character used in aligned sequences and quality strings
pub const GAP: u8 = b'-';

/// Maximum number of rows allowed in a single MAF block (DOS protection)
pub const MAX_ROWS_PER_BLOCK: usize = 100_000;

/// Check if adding another row to a block would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new row.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_row_limit(count: usize) -> Option<String> {
    if count >= MAX_ROWS_PER_BLOCK {
        Some(format!(
            "Too many rows in block: adding another would exceed maximum of {MAX_ROWS_PER_BLOCK}"
        ))
    } else {
        None
    }
}

/// Derive the species name from a MAF source id by keeping everything before
/// the first `.` (`hg18.chr1` -> `hg18`). Ids without a dot are returned as-is.
///
/// # Examples
///
/// ```
/// use maf_tools::utils::validation::species_name;
///
/// assert_eq!(species_name("hg18.chr1"), "hg18");
/// assert_eq!(species_name("panTro2.chrUn.random"), "panTro2");
/// assert_eq!(species_name("mm9"), "mm9");
/// ```
#[must_use]
pub fn species_name(src: &str) -> &str {
    match src.find('.') {
        Some(pos) => &src[..pos],
        None => src,
    }
}

/// A quality code is a single digit or `F` (finished sequence)
#[must_use]
pub fn is_quality_code(c: u8) -> bool {
    c.is_ascii_digit() || c == b'F'
}

/// Count non-gap characters in an aligned byte slice
#[must_use]
pub fn count_bases(aligned: &[u8]) -> usize {
    aligned.iter().filter(|&&c| c != GAP).count()
}

/// Check that a quality string is consistent with its aligned sequence.
///
/// Returns a description of the first problem found, or None if valid.
#[must_use]
pub fn check_quality(sequence: &[u8], quality: &[u8]) -> Option<String> {
    if sequence.len() != quality.len() {
        return Some(format!(
            "quality length {} does not match sequence length {}",
            quality.len(),
            sequence.len()
        ));
    }

    for (col, (&base, &q)) in sequence.iter().zip(quality).enumerate() {
        if base == GAP {
            if q != GAP {
                return Some(format!(
                    "quality score '{}' at column {} where alignment has a gap",
                    q as char,
                    col + 1
                ));
            }
        } else if !is_quality_code(q) {
            return Some(format!(
                "illegal quality score '{}' at column {}",
                q as char,
                col + 1
            ));
        }
    }

    None
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Strand of the aligned region relative to the source sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl Strand {
    /// Parse a strand field (`+` or `-`)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Forward),
            "-" => Some(Self::Reverse),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Forward => '+',
            Self::Reverse => '-',
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Status code on an `e` line: why this species has no aligned bases here
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptyStatus {
    /// Sequences on either side are contiguous
    #[serde(rename = "C")]
    Contiguous,
    /// Sequences on either side are separated by an insertion
    #[serde(rename = "I")]
    Intervening,
    /// Missing data (N's in the source)
    #[serde(rename = "M")]
    Missing,
    /// Bridged over an unsequenced gap (lowercase n)
    #[serde(rename = "n")]
    Bridged,
}

impl EmptyStatus {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Self::Contiguous),
            'I' => Some(Self::Intervening),
            'M' => Some(Self::Missing),
            'n' => Some(Self::Bridged),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Contiguous => 'C',
            Self::Intervening => 'I',
            Self::Missing => 'M',
            Self::Bridged => 'n',
        }
    }
}

/// Left/right context code on an `i` line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndelStatus {
    /// Contiguous with the neighbouring block
    #[serde(rename = "C")]
    Contiguous,
    /// Bases inserted between this block and its neighbour
    #[serde(rename = "I")]
    Inserted,
    /// First block in the alignment for this species
    #[serde(rename = "N")]
    NoPrevious,
    /// Bridged over an unsequenced gap
    #[serde(rename = "n")]
    Bridged,
    /// Missing data
    #[serde(rename = "M")]
    Missing,
    /// Tandem duplication
    #[serde(rename = "T")]
    Tandem,
}

impl IndelStatus {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Self::Contiguous),
            'I' => Some(Self::Inserted),
            'N' => Some(Self::NoPrevious),
            'n' => Some(Self::Bridged),
            'M' => Some(Self::Missing),
            'T' => Some(Self::Tandem),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Contiguous => 'C',
            Self::Inserted => 'I',
            Self::NoPrevious => 'N',
            Self::Bridged => 'n',
            Self::Missing => 'M',
            Self::Tandem => 'T',
        }
    }
}

/// Contents of an `i` line: context before and after a row's aligned span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndelAnnotation {
    pub left_status: IndelStatus,
    pub left_count: u64,
    pub right_status: IndelStatus,
    pub right_count: u64,
}

/// Leading character of a line inside a MAF block, as dispatched by the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Sequence,
    Empty,
    Indel,
    Quality,
}

impl LineKind {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(Self::Header),
            's' => Some(Self::Sequence),
            'e' => Some(Self::Empty),
            'i' => Some(Self::Indel),
            'q' => Some(Self::Quality),
            _ => None,
        }
    }
}

/// Stream-wide species name to integer id registry
///
/// Owned by the caller and threaded through [`crate::parsing::maf::MafReader`]
/// so that every species seen across a stream receives a stable id in order of
/// first appearance.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SpeciesRegistry {
    ids: HashMap<String, usize>,
    names: Vec<String>,
}

impl SpeciesRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a species, returning its id. Already-known names keep their id.
    pub fn register(&mut self, spec_name: &str) -> usize {
        if let Some(&id) = self.ids.get(spec_name) {
            return id;
        }
        let id = self.names.len();
        self.ids.insert(spec_name.to_string(), id);
        self.names.push(spec_name.to_string());
        id
    }

    #[must_use]
    pub fn id(&self, spec_name: &str) -> Option<usize> {
        self.ids.get(spec_name).copied()
    }

    /// Number of distinct species registered so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Species names in id order
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strand_parse() {
        assert_eq!(Strand::parse("+"), Some(Strand::Forward));
        assert_eq!(Strand::parse("-"), Some(Strand::Reverse));
        assert_eq!(Strand::parse("*"), None);
        assert_eq!(Strand::parse("++"), None);
    }

    #[test]
    fn test_status_codes() {
        for c in ['C', 'I', 'M', 'n'] {
            assert_eq!(EmptyStatus::from_char(c).unwrap().as_char(), c);
        }
        assert!(EmptyStatus::from_char('N').is_none());

        for c in ['C', 'I', 'N', 'n', 'M', 'T'] {
            assert_eq!(IndelStatus::from_char(c).unwrap().as_char(), c);
        }
        assert!(IndelStatus::from_char('X').is_none());
    }

    #[test]
    fn test_line_kind_from_char() {
        assert_eq!(LineKind::from_char('a'), Some(LineKind::Header));
        assert_eq!(LineKind::from_char('s'), Some(LineKind::Sequence));
        assert_eq!(LineKind::from_char('e'), Some(LineKind::Empty));
        assert_eq!(LineKind::from_char('i'), Some(LineKind::Indel));
        assert_eq!(LineKind::from_char('q'), Some(LineKind::Quality));
        assert_eq!(LineKind::from_char('#'), None);
    }

    #[test]
    fn test_registry_assigns_ids_in_first_seen_order() {
        let mut registry = SpeciesRegistry::new();
        assert_eq!(registry.register("hg18"), 0);
        assert_eq!(registry.register("mm9"), 1);
        assert_eq!(registry.register("hg18"), 0);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.id("mm9"), Some(1));
        assert_eq!(registry.id("rn4"), None);
        assert_eq!(registry.names(), &["hg18".to_string(), "mm9".to_string()]);
    }
}

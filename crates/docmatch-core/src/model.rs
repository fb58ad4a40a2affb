use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `key: value` pair read from a document's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub key: String,
    pub value: String,
}

/// Ordered key -> value fields of one document.
///
/// Keys are unique and kept in first-occurrence order. Serialized as a list
/// so the order survives a JSON round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMapping {
    entries: Vec<FieldEntry>,
}

impl FieldMapping {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<FieldEntry>> for FieldMapping {
    /// Later duplicates overwrite the value of the first entry with that key.
    fn from(entries: Vec<FieldEntry>) -> Self {
        let mut deduped: Vec<FieldEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            match deduped.iter_mut().find(|e| e.key == entry.key) {
                Some(existing) => existing.value = entry.value,
                None => deduped.push(entry),
            }
        }
        FieldMapping { entries: deduped }
    }
}

/// A full-width page slice between two whitespace bands.
///
/// `ordinal` is the region's index in document-wide discovery order: pages
/// in order, then top to bottom within a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRegion {
    pub page_index: usize,
    pub ordinal: usize,
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CandidateRegion {
    /// Top-left corner, the coordinate pair compared between documents.
    pub fn position(&self) -> (u32, u32) {
        (self.left, self.top)
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

impl fmt::Display for CandidateRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "page {} ({}, {}, {}, {})",
            self.page_index + 1,
            self.left,
            self.top,
            self.right,
            self.bottom
        )
    }
}

/// A decoded barcode payload and the region it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeResult {
    pub payload: String,
    pub region: CandidateRegion,
}

/// Everything compared between two documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStructure {
    pub fields: FieldMapping,
    /// In region discovery order, never re-sorted.
    pub barcodes: Vec<BarcodeResult>,
}

impl DocumentStructure {
    pub fn barcode_positions(&self) -> Vec<CandidateRegion> {
        self.barcodes.iter().map(|b| b.region).collect()
    }
}

/// The first structural difference found between a candidate and its reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mismatch {
    MissingKeys {
        keys: Vec<String>,
    },
    KeyOrder,
    BarcodeCount {
        expected: usize,
        found: usize,
    },
    /// `index` is 1-based.
    BarcodeMoved {
        index: usize,
        expected: (u32, u32),
        found: (u32, u32),
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::MissingKeys { keys } => write!(f, "Missing keys: {}", keys.join(", ")),
            Mismatch::KeyOrder => write!(f, "Key ordering is wrong"),
            Mismatch::BarcodeCount { expected, found } => {
                write!(f, "Expected {expected} barcodes, found {found}")
            }
            Mismatch::BarcodeMoved { index, .. } => {
                write!(f, "Barcode at position {index} has moved")
            }
        }
    }
}

pub const VALID_MESSAGE: &str = "PDF structure is valid";

/// Pass/fail result of a structure comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub valid: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatch: Option<Mismatch>,
}

impl Verdict {
    pub fn pass() -> Self {
        Verdict {
            valid: true,
            message: VALID_MESSAGE.to_string(),
            mismatch: None,
        }
    }

    pub fn fail(mismatch: Mismatch) -> Self {
        Verdict {
            valid: false,
            message: mismatch.to_string(),
            mismatch: Some(mismatch),
        }
    }
}

/// Result of validating a candidate document against a reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Fields extracted from the candidate.
    pub fields: FieldMapping,
    /// Barcodes decoded from the candidate.
    pub barcodes: Vec<BarcodeResult>,
    pub verdict: Verdict,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &str) -> FieldEntry {
        FieldEntry {
            key: key.into(),
            value: value.into(),
        }
    }

    #[test]
    fn test_from_entries_keeps_first_position_last_value() {
        let m = FieldMapping::from(vec![entry("A", "1"), entry("B", "2"), entry("A", "3")]);
        assert_eq!(m.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(m.get("A"), Some("3"));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_field_mapping_json_preserves_order() {
        let m = FieldMapping::from(vec![entry("Zeta", "z"), entry("Alpha", "a")]);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(
            json,
            r#"[{"key":"Zeta","value":"z"},{"key":"Alpha","value":"a"}]"#
        );
    }

    #[test]
    fn test_mismatch_messages() {
        assert_eq!(
            Mismatch::MissingKeys {
                keys: vec!["Name".into(), "Date".into()]
            }
            .to_string(),
            "Missing keys: Name, Date"
        );
        assert_eq!(
            Mismatch::BarcodeCount {
                expected: 2,
                found: 1
            }
            .to_string(),
            "Expected 2 barcodes, found 1"
        );
        assert_eq!(
            Mismatch::BarcodeMoved {
                index: 1,
                expected: (0, 100),
                found: (0, 125)
            }
            .to_string(),
            "Barcode at position 1 has moved"
        );
    }

    #[test]
    fn test_region_geometry() {
        let r = CandidateRegion {
            page_index: 0,
            ordinal: 0,
            left: 0,
            top: 100,
            right: 800,
            bottom: 430,
        };
        assert_eq!(r.position(), (0, 100));
        assert_eq!(r.height(), 330);
        assert_eq!(r.width(), 800);
    }
}

//! Core data structures for circscore.
//!
//! This module contains the typed annotation record, the circRNA group built
//! from a run of records, and the per-column value type they share.

use std::fmt;

/// Number of tab-separated columns in an annotation line.
pub const FIELD_COUNT: usize = 9;

/// Column names in file order.
pub const COLUMN_NAMES: [&str; FIELD_COUNT] = [
    "chromosome",
    "source",
    "feature",
    "start",
    "end",
    "score",
    "strand",
    "frame",
    "attribute",
];

/// A single column value.
///
/// Decoding yields `Integer` for all-digit text and `Text` for everything
/// else, whatever the column. `Float` only appears once a score has been
/// injected.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl Field {
    /// Decode one column: all ASCII digits (after trimming) becomes an
    /// integer, anything else is kept verbatim as text.
    pub fn decode(text: &str) -> Self {
        let trimmed = text.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            // Digit runs that overflow u64 stay textual.
            if let Ok(n) = trimmed.parse::<u64>() {
                return Field::Integer(n);
            }
        }
        Field::Text(text.to_string())
    }

    /// The integer value, if this field decoded as one.
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Field::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// The text value, if this field stayed textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Field::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this field is the given textual marker.
    pub fn is_marker(&self, marker: &str) -> bool {
        matches!(self, Field::Text(s) if s == marker)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Integer(n) => write!(f, "{}", n),
            Field::Float(v) => f.write_str(&format_float(*v)),
            Field::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Field {
    fn from(v: f64) -> Self {
        Field::Float(v)
    }
}

/// Render a float in shortest round-trip form, the way injected scores have
/// always been written.
///
/// Decimal exponents below -4 or from 16 up switch to scientific notation
/// with a signed, at least two-digit exponent (`1e-05`, `1e+16`); anything
/// else is positional with a fractional part (`0.92`, `1.0`).
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let sci = format!("{:e}", v);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if v != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let s = v.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{}.0", s)
    }
}

/// One decoded annotation line.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// 1-based line number in the source stream (not serialized).
    pub line: usize,
    pub chromosome: Field,
    pub source: Field,
    pub feature_type: Field,
    pub start: Field,
    pub end: Field,
    pub score: Field,
    pub strand: Field,
    pub frame: Field,
    pub attribute: Field,
}

impl Record {
    /// Build a record from its nine columns in file order.
    pub fn from_fields(line: usize, fields: [Field; FIELD_COUNT]) -> Self {
        let [chromosome, source, feature_type, start, end, score, strand, frame, attribute] =
            fields;
        Record {
            line,
            chromosome,
            source,
            feature_type,
            start,
            end,
            score,
            strand,
            frame,
            attribute,
        }
    }

    /// The nine columns in file order.
    pub fn fields(&self) -> [&Field; FIELD_COUNT] {
        [
            &self.chromosome,
            &self.source,
            &self.feature_type,
            &self.start,
            &self.end,
            &self.score,
            &self.strand,
            &self.frame,
            &self.attribute,
        ]
    }
}

/// A circRNA record and the contiguous run of exon records that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub parent: Record,
    pub children: Vec<Record>,
}

impl Group {
    pub fn new(parent: Record, children: Vec<Record>) -> Self {
        Group { parent, children }
    }

    /// Number of records in the group, parent included.
    pub fn len(&self) -> usize {
        1 + self.children.len()
    }

    /// A group always holds its parent, so it is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Parent first, then children in stored order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        std::iter::once(&self.parent).chain(self.children.iter())
    }
}

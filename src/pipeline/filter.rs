//! Threshold filter.
//!
//! Keeps groups whose parent score is strictly above a threshold. Children
//! ride along untouched; their own scores are not consulted or rewritten.

use crate::error::{Error, Result};
use crate::types::{Field, Group, Record};

/// Read a record's score as a float.
pub fn score_value(record: &Record) -> Result<f64> {
    match &record.score {
        Field::Integer(n) => Ok(*n as f64),
        Field::Float(v) => Ok(*v),
        Field::Text(s) => s.trim().parse().map_err(|_| Error::NonNumericScore {
            line: record.line,
            value: s.clone(),
        }),
    }
}

/// Keep groups whose parent score is strictly greater than `threshold`.
///
/// Input order is preserved.
pub fn filter_groups(groups: Vec<Group>, threshold: f64) -> Result<Vec<Group>> {
    let mut kept = Vec::with_capacity(groups.len());
    for group in groups {
        if score_value(&group.parent)? > threshold {
            kept.push(group);
        }
    }
    Ok(kept)
}

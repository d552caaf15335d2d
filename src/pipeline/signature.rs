//! Coordinate signatures.
//!
//! A signature joins a group to its external score:
//! `{chrom}:{start-1}|{end}|` for the parent, then `{start-1}|{end}|` for
//! each child in order. Starts are shifted to 0-based; ends are kept.

use crate::error::{Error, Result};
use crate::types::{Group, Record};

/// Build the signature of a group.
///
/// Fails if any start coordinate did not decode as an integer.
pub fn signature(group: &Group) -> Result<String> {
    let mut sig = format!("{}:", group.parent.chromosome);
    for record in group.records() {
        push_interval(&mut sig, record)?;
    }
    Ok(sig)
}

fn push_interval(sig: &mut String, record: &Record) -> Result<()> {
    let start = record
        .start
        .as_integer()
        .ok_or_else(|| Error::NonIntegerCoordinate {
            line: record.line,
            column: "start",
            value: record.start.to_string(),
        })?;

    // Signed so that a start of 0 becomes -1.
    let start = i128::from(start) - 1;
    sig.push_str(&format!("{}|{}|", start, record.end));
    Ok(())
}

//! Output formatting for circscore results.
//!
//! Groups are written back in the nine-column annotation format, parent
//! line first, then its children in stored order.

use std::io::Write;

use crate::error::Result;
use crate::pipeline::signature;
use crate::types::{Group, Record};

/// Header of the signature listing, matching the score table's key column.
pub const SIGNATURE_HEADER: &str = "circRNA_id";

/// Format a single record as one tab-separated line (without newline).
pub fn format_record(record: &Record) -> String {
    record
        .fields()
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("\t")
}

/// Write one group, returning the number of lines written.
pub fn write_group<W: Write>(writer: &mut W, group: &Group) -> Result<usize> {
    for record in group.records() {
        writeln!(writer, "{}", format_record(record))?;
    }
    Ok(group.len())
}

/// Write all groups in order, returning the number of lines written.
pub fn write_groups<W: Write>(writer: &mut W, groups: &[Group]) -> Result<usize> {
    let mut lines = 0;
    for group in groups {
        lines += write_group(writer, group)?;
    }
    Ok(lines)
}

/// Write one signature per group as a single-column CSV with a header.
pub fn write_signatures<W: Write>(writer: W, groups: &[Group]) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    csv_writer.write_record([SIGNATURE_HEADER])?;
    for group in groups {
        csv_writer.write_record([signature(group)?])?;
    }
    csv_writer.flush()?;
    Ok(groups.len())
}

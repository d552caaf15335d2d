//! Annotation stream decoder with gzip support.
//!
//! Decodes nine-column tab-separated annotation lines into typed records,
//! in file order. No header row is assumed.

use std::io::{BufRead, ErrorKind};
use std::path::Path;

use crate::error::{Error, Result};
use crate::parser::util::{open_input, trim_line_end};
use crate::types::{Field, Record, FIELD_COUNT};

/// Decode one annotation line into a record.
///
/// The line must split into exactly nine tab-separated columns.
pub fn decode_record(line_num: usize, line: &str) -> Result<Record> {
    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() != FIELD_COUNT {
        return Err(Error::FieldCount {
            line: line_num,
            expected: FIELD_COUNT,
            found: columns.len(),
        });
    }

    let fields: [Field; FIELD_COUNT] = std::array::from_fn(|i| Field::decode(columns[i]));
    Ok(Record::from_fields(line_num, fields))
}

/// Read and decode every record of an annotation file.
///
/// Supports both plain text and gzip-compressed files.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let reader = open_input(path)?;
    parse_records(reader).map_err(|e| match e {
        Error::Io { source, .. } => Error::io(source, path),
        other => other,
    })
}

/// Decode records from a reader, failing on the first malformed line.
///
/// Every line, blank ones included, must decode into a record.
pub fn parse_records<R: BufRead>(mut reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut line = String::new();
    let mut line_num = 0;

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).map_err(|e| {
            if e.kind() == ErrorKind::InvalidData {
                Error::Encoding { line: line_num + 1 }
            } else {
                Error::from(e)
            }
        })?;
        if bytes_read == 0 {
            break;
        }
        line_num += 1;

        records.push(decode_record(line_num, trim_line_end(&line))?);
    }

    log::debug!("Decoded {} records from {} lines", records.len(), line_num);
    Ok(records)
}

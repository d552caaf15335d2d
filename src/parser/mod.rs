//! Parsers for the annotation stream and the score table.

pub mod annotation;
pub mod scores;
pub mod util;

pub use annotation::{decode_record, parse_records, read_records};
pub use scores::ScoreTable;

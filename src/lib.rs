//! circscore - circRNA annotation grouping and scoring library.
//!
//! This library reads a flat annotation stream in which every circRNA record
//! is followed by its exon records, rebuilds those groups, and runs two
//! group-level pipelines over them.
//!
//! # Features
//!
//! - Decode nine-column annotation lines (with gzip support), typing each
//!   column as an integer when it is all digits and as text otherwise
//! - Group each circRNA with the contiguous run of exons that follows it
//! - Derive a coordinate signature per group and join it to an external
//!   score table, propagating the score to every exon
//! - Keep only groups whose circRNA score is above a threshold
//! - Write groups back out in the same annotation format
//!
//! # Example
//!
//! ```ignore
//! use circscore::config::Config;
//! use circscore::parser::{read_records, ScoreTable};
//! use circscore::pipeline::{build_groups, inject_scores};
//! use circscore::output::write_groups;
//! use std::path::Path;
//!
//! let config = Config::default();
//! let records = read_records(Path::new("circ.gtf"))?;
//! let mut groups = build_groups(records, &config)?;
//!
//! let table = ScoreTable::from_path(Path::new("scores.csv"), &config)?;
//! inject_scores(&mut groups, &table)?;
//! write_groups(&mut std::io::stdout(), &groups)?;
//! ```

pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use parser::ScoreTable;
pub use types::{Field, Group, Record};

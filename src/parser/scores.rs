//! Score table parser.
//!
//! The score table is a comma-separated file with a header row and two
//! columns per data row: a circRNA signature and its score.

use ahash::AHashMap;
use std::io::Read;
use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::parser::util::open_input;

/// Signature → score lookup, loaded once per run.
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    scores: AHashMap<String, f64>,
    duplicates: usize,
}

impl ScoreTable {
    /// Load a score table from a file (supports .gz).
    pub fn from_path(path: &Path, config: &Config) -> Result<Self> {
        let reader = open_input(path)?;
        Self::from_reader(reader, config)
    }

    /// Load a score table from any reader.
    ///
    /// Duplicate signatures keep the last value and are logged as warnings.
    pub fn from_reader<R: Read>(reader: R, config: &Config) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(config.score_delimiter)
            .has_headers(config.score_has_header)
            .flexible(true)
            .from_reader(reader);

        let mut table = ScoreTable::default();

        for row in csv_reader.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);

            if row.len() != 2 {
                return Err(Error::ScoreTable {
                    line,
                    message: format!("expected 2 columns, found {}", row.len()),
                });
            }

            let signature = &row[0];
            let score: f64 = row[1].trim().parse().map_err(|_| Error::ScoreTable {
                line,
                message: format!("score `{}` is not a number", &row[1]),
            })?;

            if table.insert(signature.to_string(), score).is_some() {
                log::warn!(
                    "Duplicate signature in score table (line {}): {} (keeping last value)",
                    line,
                    signature
                );
            }
        }

        Ok(table)
    }

    /// Insert a score, returning the value it replaced.
    pub fn insert(&mut self, signature: String, score: f64) -> Option<f64> {
        let previous = self.scores.insert(signature, score);
        if previous.is_some() {
            self.duplicates += 1;
        }
        previous
    }

    /// Look up the score for a signature.
    pub fn get(&self, signature: &str) -> Option<f64> {
        self.scores.get(signature).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Number of rows that overwrote an earlier row with the same signature.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }
}

impl FromIterator<(String, f64)> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut table = ScoreTable::default();
        for (signature, score) in iter {
            table.insert(signature, score);
        }
        table
    }
}

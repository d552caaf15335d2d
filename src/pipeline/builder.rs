//! Group builder.
//!
//! Rebuilds the implicit circRNA → exon hierarchy of a flat record list:
//! each record that is not an exon opens a group and owns the maximal run
//! of exon records that follows it.

use std::iter::Peekable;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{Group, Record};

/// Lazily yields groups from an ordered record sequence.
///
/// Single forward pass with one record of lookahead. An input that starts
/// with a child record yields one `OrphanChild` error and then stops.
pub struct Groups<'c, I: Iterator<Item = Record>> {
    records: Peekable<I>,
    config: &'c Config,
    started: bool,
    failed: bool,
}

impl<'c, I: Iterator<Item = Record>> Groups<'c, I> {
    pub fn new<T>(records: T, config: &'c Config) -> Self
    where
        T: IntoIterator<Item = Record, IntoIter = I>,
    {
        Groups {
            records: records.into_iter().peekable(),
            config,
            started: false,
            failed: false,
        }
    }
}

impl<I: Iterator<Item = Record>> Iterator for Groups<'_, I> {
    type Item = Result<Group>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let config = self.config;
        let parent = self.records.next()?;

        // Later child records are always swallowed by the run below, so only
        // the very first record can be a child without a parent.
        if !self.started {
            self.started = true;
            if parent.feature_type.is_marker(&config.child_feature) {
                self.failed = true;
                return Some(Err(Error::OrphanChild {
                    line: parent.line,
                    feature: config.child_feature.clone(),
                }));
            }
        }

        if !parent.feature_type.is_marker(&config.parent_feature) {
            log::warn!(
                "Line {}: feature type `{}` is not `{}`; grouping it as its own parent",
                parent.line,
                parent.feature_type,
                config.parent_feature
            );
        }

        let mut children = Vec::new();
        while let Some(child) = self
            .records
            .next_if(|r| r.feature_type.is_marker(&config.child_feature))
        {
            children.push(child);
        }

        Some(Ok(Group::new(parent, children)))
    }
}

/// Group a full record list, failing if it starts with an orphan child.
pub fn build_groups(records: Vec<Record>, config: &Config) -> Result<Vec<Group>> {
    Groups::new(records, config).collect()
}

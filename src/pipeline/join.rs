//! Score joiner.
//!
//! Looks every group up in the score table by its signature and writes the
//! score onto the parent and all of its children.

use crate::error::{Error, Result};
use crate::parser::ScoreTable;
use crate::pipeline::signature::signature;
use crate::types::{Field, Group};

/// Inject scores into every group, in place.
///
/// All signatures are resolved before any group is touched, so a miss
/// leaves `groups` unmodified. Only score fields change.
pub fn inject_scores(groups: &mut [Group], table: &ScoreTable) -> Result<()> {
    let scores = groups
        .iter()
        .map(|group| {
            let sig = signature(group)?;
            table.get(&sig).ok_or(Error::MissingSignature(sig))
        })
        .collect::<Result<Vec<f64>>>()?;

    for (group, score) in groups.iter_mut().zip(scores) {
        group.parent.score = Field::Float(score);
        for child in &mut group.children {
            child.score = Field::Float(score);
        }
    }

    Ok(())
}

//! Group-level pipelines: grouping, signatures, score injection and filtering.

pub mod builder;
pub mod filter;
pub mod join;
pub mod signature;

pub use builder::{build_groups, Groups};
pub use filter::{filter_groups, score_value};
pub use join::inject_scores;
pub use signature::signature;

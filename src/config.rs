//! Configuration and defaults for circscore.
//!
//! This module contains the configuration structure and default values
//! that control how annotation records are grouped and how the score
//! table is read.

/// Default feature type of a group's parent record.
pub const DEFAULT_PARENT_FEATURE: &str = "circRNA";

/// Default feature type of a group's child records.
pub const DEFAULT_CHILD_FEATURE: &str = "exon";

/// Configuration for the grouping and scoring pipelines.
#[derive(Debug, Clone)]
pub struct Config {
    /// Feature type that opens a group.
    pub parent_feature: String,
    /// Feature type that is attached to the preceding parent.
    pub child_feature: String,
    /// Column delimiter of the score table.
    pub score_delimiter: u8,
    /// Whether the score table starts with a header row.
    pub score_has_header: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            parent_feature: DEFAULT_PARENT_FEATURE.to_string(),
            child_feature: DEFAULT_CHILD_FEATURE.to_string(),
            score_delimiter: b',',
            score_has_header: true,
        }
    }
}

impl Config {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the feature markers can actually be told apart.
    ///
    /// Markers are compared against textual fields only, so an all-digit
    /// marker could never match a decoded record.
    pub fn validate(&self) -> Result<(), String> {
        for (name, marker) in [
            ("parent", &self.parent_feature),
            ("child", &self.child_feature),
        ] {
            if marker.trim().is_empty() {
                return Err(format!("The {} feature type cannot be empty.", name));
            }
            if marker.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format!(
                    "The {} feature type cannot be purely numeric: {}",
                    name, marker
                ));
            }
        }
        if self.parent_feature == self.child_feature {
            return Err(format!(
                "Parent and child feature types must differ (both are {}).",
                self.parent_feature
            ));
        }
        Ok(())
    }
}

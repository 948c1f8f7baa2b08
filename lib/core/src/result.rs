//! The immutable output record of one comparison run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::Partition;
use crate::feature::{Feature, MatchPair};
use crate::stats::Statistics;

/// Everything a report needs about one finished comparison.
///
/// Constructed once, after classification, gap analysis and statistics are
/// all complete. Report rendering treats this as a read-only view; nothing
/// mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Name of the new-requirements document
    pub new_document: String,
    /// Name of the existing-implementation document
    pub existing_document: String,
    pub exact_matches: Vec<MatchPair>,
    pub similar_features: Vec<MatchPair>,
    pub delta_features: Vec<Feature>,
    /// Strategic recommendations, empty when generation was skipped
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub statistics: Statistics,
    pub timestamp: DateTime<Utc>,
}

impl ComparisonResult {
    /// Assemble the final record from a finished partition.
    #[must_use]
    pub fn new(
        new_document: impl Into<String>,
        existing_document: impl Into<String>,
        partition: Partition,
        statistics: Statistics,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            new_document: new_document.into(),
            existing_document: existing_document.into(),
            exact_matches: partition.exact,
            similar_features: partition.similar,
            delta_features: partition.delta,
            recommendations,
            statistics,
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub fn reusability_score(&self) -> f32 {
        self.statistics.reusability_score
    }
}

//! Summary statistics over a classification partition.

use serde::{Deserialize, Serialize};

use crate::classify::Partition;

/// Aggregate counts, percentages and the weighted reusability score for one
/// comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_new: usize,
    pub total_existing: usize,
    pub exact_count: usize,
    pub similar_count: usize,
    pub delta_count: usize,
    pub exact_percentage: f32,
    pub similar_percentage: f32,
    pub delta_percentage: f32,
    /// `(exact + weight * similar) / total_new * 100`, or 0 when there are no
    /// new features. The weight encodes how reusable an adapted feature
    /// counts as; it is business policy and comes from config.
    pub reusability_score: f32,
}

impl Statistics {
    /// Derive statistics from a finished partition.
    #[must_use]
    pub fn aggregate(partition: &Partition, total_existing: usize, similar_weight: f32) -> Self {
        let exact_count = partition.exact.len();
        let similar_count = partition.similar.len();
        let delta_count = partition.delta.len();
        let total_new = partition.total_new();

        let reusability_score = if total_new == 0 {
            0.0
        } else {
            (exact_count as f32 + similar_weight * similar_count as f32) / total_new as f32 * 100.0
        };

        Self {
            total_new,
            total_existing,
            exact_count,
            similar_count,
            delta_count,
            exact_percentage: percentage(exact_count, total_new),
            similar_percentage: percentage(similar_count, total_new),
            delta_percentage: percentage(delta_count, total_new),
            reusability_score,
        }
    }
}

fn percentage(count: usize, total: usize) -> f32 {
    if total == 0 {
        0.0
    } else {
        count as f32 / total as f32 * 100.0
    }
}

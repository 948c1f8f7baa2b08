//! Greedy best-match classification of new features against existing ones.
//!
//! For each new feature the single best-scoring existing feature is chosen
//! (ties break to the lowest existing index) and the pair is banded by the
//! configured thresholds. Existing features stay in the candidate pool after
//! being matched: several new requirements can be satisfied by one existing
//! capability. This is the intended matching policy, not an optimal bipartite
//! assignment.

use serde::{Deserialize, Serialize};

use crate::embedding::Embedding;
use crate::error::{Error, Result};
use crate::feature::{Category, Feature, MatchPair};
use crate::score::cosine_score;

/// Thresholds and weights governing one comparison run.
///
/// Passed explicitly into the classifier and aggregator; never read from
/// process-wide state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Best score at or above this is an exact match
    pub exact_threshold: f32,
    /// Best score at or above this (but below exact) is a similar match
    pub similar_threshold: f32,
    /// How reusable a similar feature counts as in the reusability score
    pub similar_weight: f32,
    /// Upper bound on in-flight gap-analysis calls
    pub max_concurrent_explanations: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            exact_threshold: 0.95,
            similar_threshold: 0.70,
            similar_weight: 0.5,
            max_concurrent_explanations: 4,
        }
    }
}

impl CompareConfig {
    /// Check the threshold invariant `0 <= similar <= exact <= 1` and that
    /// the similar weight is a sane fraction.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.exact_threshold) {
            return Err(Error::InvalidConfig(format!(
                "exact_threshold {} outside [0, 1]",
                self.exact_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.similar_threshold) {
            return Err(Error::InvalidConfig(format!(
                "similar_threshold {} outside [0, 1]",
                self.similar_threshold
            )));
        }
        if self.similar_threshold > self.exact_threshold {
            return Err(Error::InvalidConfig(format!(
                "similar_threshold {} above exact_threshold {}",
                self.similar_threshold, self.exact_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.similar_weight) {
            return Err(Error::InvalidConfig(format!(
                "similar_weight {} outside [0, 1]",
                self.similar_weight
            )));
        }
        Ok(())
    }
}

/// Output of one classification: the three category lists.
///
/// Every new feature lands in exactly one list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    pub exact: Vec<MatchPair>,
    pub similar: Vec<MatchPair>,
    pub delta: Vec<Feature>,
}

impl Partition {
    /// Number of new features across all three categories.
    #[must_use]
    pub fn total_new(&self) -> usize {
        self.exact.len() + self.similar.len() + self.delta.len()
    }
}

/// Deterministic greedy classifier over a dense similarity matrix.
#[derive(Debug, Clone)]
pub struct Classifier {
    config: CompareConfig,
}

impl Classifier {
    /// Create a classifier, validating the config up front.
    pub fn new(config: CompareConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Partition the new features into exact/similar/delta against the
    /// existing features.
    ///
    /// `new_embeddings[i]` must correspond to `new_features[i]`, likewise for
    /// the existing side. Scoring errors abort the run and carry the
    /// offending pair's feature ids.
    pub fn classify(
        &self,
        new_features: &[Feature],
        existing_features: &[Feature],
        new_embeddings: &[Embedding],
        existing_embeddings: &[Embedding],
    ) -> Result<Partition> {
        if new_features.len() != new_embeddings.len() {
            return Err(Error::EmbeddingCount {
                side: "new",
                features: new_features.len(),
                embeddings: new_embeddings.len(),
            });
        }
        if existing_features.len() != existing_embeddings.len() {
            return Err(Error::EmbeddingCount {
                side: "existing",
                features: existing_features.len(),
                embeddings: existing_embeddings.len(),
            });
        }

        let mut partition = Partition::default();

        for (i, new_feature) in new_features.iter().enumerate() {
            let mut best: Option<(usize, f32)> = None;

            for (j, existing_feature) in existing_features.iter().enumerate() {
                let score = cosine_score(&new_embeddings[i], &existing_embeddings[j]).map_err(
                    |source| Error::Scoring {
                        new_id: new_feature.id.clone(),
                        existing_id: existing_feature.id.clone(),
                        source: Box::new(source),
                    },
                )?;

                // Strict > keeps the lowest existing index on ties
                if best.map_or(true, |(_, s)| score > s) {
                    best = Some((j, score));
                }
            }

            match best {
                Some((j, score)) if score >= self.config.exact_threshold => {
                    partition.exact.push(MatchPair::new(
                        new_feature.clone(),
                        existing_features[j].clone(),
                        score,
                        Category::Exact,
                    ));
                }
                Some((j, score)) if score >= self.config.similar_threshold => {
                    partition.similar.push(MatchPair::new(
                        new_feature.clone(),
                        existing_features[j].clone(),
                        score,
                        Category::Similar,
                    ));
                }
                _ => partition.delta.push(new_feature.clone()),
            }
        }

        Ok(partition)
    }
}

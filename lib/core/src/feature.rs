use serde::{Deserialize, Serialize};

/// A single requirement item extracted from a source document.
///
/// Created by the parser, consumed read-only by the comparison pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Unique within the source document, e.g. `verizon_3`
    pub id: String,
    /// Short name of the requirement
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Which document/customer the feature came from
    pub source: String,
    /// Position in the source document, for stable iteration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<usize>,
}

impl Feature {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            source: source.into(),
            order: None,
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = Some(order);
        self
    }

    /// The text span handed to the embedding provider.
    ///
    /// Title and description are combined so short titles still get enough
    /// context to embed meaningfully.
    #[must_use]
    pub fn embedding_text(&self) -> String {
        format!("{}. {}", self.title, self.description)
    }
}

/// Classification band for a new feature relative to its best existing match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Reusable as-is
    Exact,
    /// Reusable with adaptation, carries a gap analysis
    Similar,
    /// No existing counterpart, fresh implementation required
    Delta,
}

/// A new feature matched to its best existing counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPair {
    pub new_feature: Feature,
    pub existing_feature: Feature,
    /// Normalized similarity in [0, 1]
    pub similarity: f32,
    pub category: Category,
    /// Free-text gap analysis, filled in for similar pairs only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap_analysis: Option<String>,
}

impl MatchPair {
    #[must_use]
    pub fn new(
        new_feature: Feature,
        existing_feature: Feature,
        similarity: f32,
        category: Category,
    ) -> Self {
        Self {
            new_feature,
            existing_feature,
            similarity,
            category,
            gap_analysis: None,
        }
    }
}

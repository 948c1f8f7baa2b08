//! Prompt construction for the advisory-text capabilities.

use reqdelta_core::{Feature, Statistics};

pub const GAP_SYSTEM: &str =
    "You are a requirements analyst comparing feature specifications for reuse.";

pub const STRATEGIST_SYSTEM: &str = "You are a requirements strategist with deep knowledge of \
     feature reuse and implementation planning.";

/// Shown in reports when gap-analysis generation failed for a pair.
pub const GAP_FALLBACK: &str =
    "Unable to perform detailed gap analysis. Manual review recommended.";

/// Build the gap-analysis prompt for one similar pair.
#[must_use]
pub fn gap_analysis(new: &Feature, existing: &Feature) -> String {
    format!(
        "Compare these two features and identify the gaps.\n\n\
         NEW REQUIREMENT:\n\
         Title: {}\n\
         Description: {}\n\n\
         EXISTING IMPLEMENTATION:\n\
         Title: {}\n\
         Description: {}\n\n\
         Provide a concise gap analysis (2-3 sentences) explaining:\n\
         1. What additional capabilities the new requirement needs\n\
         2. What modifications to the existing implementation would be required\n\n\
         Gap Analysis:",
        new.title, new.description, existing.title, existing.description
    )
}

/// Build the strategic-recommendations prompt from run statistics.
#[must_use]
pub fn recommendations(stats: &Statistics) -> String {
    format!(
        "Feature comparison results:\n\
         - Exact matches: {} features can be reused as-is\n\
         - Similar features: {} features need adaptation\n\
         - New features (delta): {} features require fresh implementation\n\
         - Reusability score: {:.1}%\n\n\
         Provide 4-5 strategic recommendations for the implementation team. Focus on:\n\
         1. How to maximize reuse of exact matches\n\
         2. Strategy for adapting similar features\n\
         3. Prioritization approach for delta features\n\
         4. Risk mitigation and timeline considerations\n\n\
         Format as a numbered list.",
        stats.exact_count, stats.similar_count, stats.delta_count, stats.reusability_score
    )
}

/// Pull list items out of generated text: lines starting with a digit or a
/// dash.
#[must_use]
pub fn parse_recommendations(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| {
            !line.is_empty()
                && (line.starts_with('-') || line.chars().next().is_some_and(|c| c.is_ascii_digit()))
        })
        .map(str::to_string)
        .collect()
}

/// Used when recommendation generation fails or yields nothing parseable.
#[must_use]
pub fn fallback_recommendations() -> Vec<String> {
    vec![
        "1. Prioritize reuse of exact match features to accelerate implementation".to_string(),
        "2. Create adaptation roadmap for similar features with gap analysis".to_string(),
        "3. Assess delta features for complexity and dependencies".to_string(),
        "4. Consider phased rollout approach for new capabilities".to_string(),
    ]
}

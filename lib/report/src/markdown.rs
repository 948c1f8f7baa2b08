//! Markdown rendering of a comparison result.

use std::fmt::Write;

use reqdelta_core::ComparisonResult;

use crate::format_percentage;

/// Render the full Markdown report.
#[must_use]
pub fn render(result: &ComparisonResult) -> String {
    let stats = &result.statistics;
    let mut md = String::new();

    let _ = write!(
        md,
        "# Requirements Comparison Report\n\n\
         **Generated:** {}\n\n\
         ## Documents Compared\n\n\
         - **New Requirements:** {} ({} features)\n\
         - **Existing Implementation:** {} ({} features)\n\n\
         ---\n\n\
         ## Executive Summary\n\n\
         | Metric | Count | Percentage |\n\
         |--------|-------|------------|\n\
         | ✅ Exact Matches | {} | {} |\n\
         | ⚠️ Similar Features | {} | {} |\n\
         | 🆕 Delta (New Features) | {} | {} |\n\
         | **📊 Reusability Score** | **{}** | **{}** |\n\n\
         ---\n\n\
         ## Detailed Analysis\n\n\
         ### ✅ Exact Matches ({})\n\n\
         These features can be reused as-is from the existing implementation:\n",
        result.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
        result.new_document,
        stats.total_new,
        result.existing_document,
        stats.total_existing,
        stats.exact_count,
        format_percentage(stats.exact_percentage),
        stats.similar_count,
        format_percentage(stats.similar_percentage),
        stats.delta_count,
        format_percentage(stats.delta_percentage),
        stats.exact_count + stats.similar_count,
        format_percentage(stats.reusability_score),
        result.exact_matches.len(),
    );

    if result.exact_matches.is_empty() {
        md.push_str("\n*No exact matches found.*\n");
    } else {
        md.push_str("\n| # | New Feature | Existing Feature | Similarity |\n");
        md.push_str("|---|-------------|------------------|------------|\n");
        for (i, pair) in result.exact_matches.iter().enumerate() {
            let _ = writeln!(
                md,
                "| {} | {} | {} | {} |",
                i + 1,
                pair.new_feature.title,
                pair.existing_feature.title,
                format_percentage(pair.similarity * 100.0),
            );
        }
    }

    let _ = write!(
        md,
        "\n\n### ⚠️ Similar Features Requiring Adaptation ({})\n\n\
         These features have existing implementations but require modifications:\n\n",
        result.similar_features.len()
    );

    if result.similar_features.is_empty() {
        md.push_str("*No similar features found.*\n\n");
    } else {
        for (i, pair) in result.similar_features.iter().enumerate() {
            let _ = write!(
                md,
                "#### {}. {}\n\n\
                 **Existing Feature:** {}\n\n\
                 **Similarity:** {}\n\n",
                i + 1,
                pair.new_feature.title,
                pair.existing_feature.title,
                format_percentage(pair.similarity * 100.0),
            );
            if let Some(gap) = &pair.gap_analysis {
                let _ = write!(md, "**Gap Analysis:**\n{gap}\n\n");
            }
            md.push_str("---\n\n");
        }
    }

    let _ = write!(
        md,
        "\n### 🆕 Delta - New Features to Implement ({})\n\n\
         These features have no existing implementation and require fresh development:\n\n",
        result.delta_features.len()
    );

    if result.delta_features.is_empty() {
        md.push_str("*No delta features - all requirements have existing implementations!*\n");
    } else {
        for (i, feature) in result.delta_features.iter().enumerate() {
            let _ = writeln!(md, "{}. **{}**", i + 1, feature.title);
            if !feature.description.is_empty() && feature.description != feature.title {
                let _ = writeln!(md, "   - {}", feature.description);
            }
        }
    }

    if !result.recommendations.is_empty() {
        md.push_str("\n\n---\n\n## Strategic Recommendations\n\n");
        for rec in &result.recommendations {
            let _ = writeln!(md, "{rec}");
        }
    }

    let _ = write!(
        md,
        "\n\n---\n\n## Implementation Impact Summary\n\n\
         - **Can Reuse Immediately:** {} features ({})\n\
         - **Needs Adaptation:** {} features (~30-50% effort vs new)\n\
         - **Build from Scratch:** {} features (100% effort)\n\n\
         **Estimated Effort Savings:** {} compared to building everything from scratch\n",
        result.exact_matches.len(),
        format_percentage(stats.exact_percentage),
        result.similar_features.len(),
        result.delta_features.len(),
        format_percentage(stats.reusability_score * 0.7),
    );

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqdelta_core::{Category, Feature, MatchPair, Partition, Statistics};

    fn result_with_all_categories() -> ComparisonResult {
        let new_a = Feature::new("n_1", "Realtime Charging", "Charge live", "n");
        let new_b = Feature::new("n_2", "Rating Engine", "Rate usage", "n");
        let existing = Feature::new("e_1", "Charging System", "Charges", "e");

        let mut similar = MatchPair::new(new_b, existing.clone(), 0.82, Category::Similar);
        similar.gap_analysis = Some("Needs tiered rating.".to_string());

        let partition = Partition {
            exact: vec![MatchPair::new(new_a, existing, 0.97, Category::Exact)],
            similar: vec![similar],
            delta: vec![Feature::new("n_3", "Fraud Detection", "Spot fraud", "n")],
        };
        let stats = Statistics::aggregate(&partition, 1, 0.5);
        ComparisonResult::new(
            "new.md",
            "old.md",
            partition,
            stats,
            vec!["1. Reuse the charging system".to_string()],
        )
    }

    #[test]
    fn test_render_contains_all_sections() {
        let md = render(&result_with_all_categories());
        assert!(md.contains("## Executive Summary"));
        assert!(md.contains("| 1 | Realtime Charging | Charging System | 97.0% |"));
        assert!(md.contains("**Gap Analysis:**\nNeeds tiered rating."));
        assert!(md.contains("1. **Fraud Detection**"));
        assert!(md.contains("## Strategic Recommendations"));
        assert!(md.contains("1. Reuse the charging system"));
    }

    #[test]
    fn test_render_without_recommendations_omits_section() {
        let mut result = result_with_all_categories();
        result.recommendations.clear();
        let md = render(&result);
        assert!(!md.contains("Strategic Recommendations"));
    }

    #[test]
    fn test_reusability_score_is_weighted() {
        // 1 exact + 0.5 * 1 similar over 3 new = 50%
        let md = render(&result_with_all_categories());
        assert!(md.contains("**2** | **50.0%**"));
    }
}

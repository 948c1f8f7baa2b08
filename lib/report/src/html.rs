//! Styled HTML rendering of a comparison result.

use std::fmt::Write;

use reqdelta_core::ComparisonResult;

use crate::format_percentage;

const STYLE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    line-height: 1.6;
    color: #333;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    padding: 20px;
}
.container {
    max-width: 1200px;
    margin: 0 auto;
    background: white;
    border-radius: 10px;
    box-shadow: 0 10px 40px rgba(0,0,0,0.2);
    overflow: hidden;
}
.header {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    padding: 30px;
    text-align: center;
}
.header h1 { font-size: 2.5em; margin-bottom: 10px; }
.content { padding: 40px; }
.document-info {
    background: #f8f9fa;
    border-left: 4px solid #667eea;
    padding: 20px;
    margin-bottom: 30px;
    border-radius: 5px;
}
.stats-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
    gap: 20px;
    margin: 30px 0;
}
.stat-card {
    color: white;
    padding: 25px;
    border-radius: 10px;
    box-shadow: 0 4px 15px rgba(0,0,0,0.1);
    text-align: center;
}
.stat-card.exact { background: linear-gradient(135deg, #11998e 0%, #38ef7d 100%); }
.stat-card.similar { background: linear-gradient(135deg, #f093fb 0%, #f5576c 100%); }
.stat-card.delta { background: linear-gradient(135deg, #4facfe 0%, #00f2fe 100%); }
.stat-card.reuse { background: linear-gradient(135deg, #fa709a 0%, #fee140 100%); }
.stat-card .value { font-size: 3em; font-weight: bold; margin: 10px 0; }
.stat-card .label { font-size: 1.1em; opacity: 0.9; }
.section { margin: 40px 0; }
.section h2 {
    color: #667eea;
    border-bottom: 3px solid #667eea;
    padding-bottom: 10px;
    margin-bottom: 20px;
}
table { width: 100%; border-collapse: collapse; margin: 20px 0; }
table th {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    padding: 15px;
    text-align: left;
}
table td { padding: 12px 15px; border-bottom: 1px solid #ddd; }
.feature-card {
    background: #f8f9fa;
    border-left: 4px solid #667eea;
    padding: 20px;
    margin: 15px 0;
    border-radius: 5px;
}
.feature-card .gap {
    background: #fff;
    border: 1px solid #ddd;
    padding: 15px;
    margin-top: 10px;
    border-radius: 5px;
    font-style: italic;
}
.delta-list { list-style: none; padding: 0; }
.delta-list li {
    background: #f8f9fa;
    padding: 15px;
    margin: 10px 0;
    border-left: 4px solid #4facfe;
    border-radius: 5px;
}
.recommendations {
    background: linear-gradient(135deg, #ffecd2 0%, #fcb69f 100%);
    padding: 30px;
    border-radius: 10px;
    margin: 30px 0;
}
.recommendations ol { margin-top: 20px; padding-left: 20px; }
.footer { background: #f8f9fa; padding: 30px; text-align: center; color: #666; }
"#;

/// Render the full HTML report.
#[must_use]
pub fn render(result: &ComparisonResult) -> String {
    let stats = &result.statistics;
    let mut html = String::new();

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>Requirements Comparison Report</title>\n\
         <style>{STYLE}</style>\n\
         </head>\n<body>\n<div class=\"container\">\n\
         <div class=\"header\">\n\
         <h1>📊 Requirements Comparison Report</h1>\n\
         <p>Semantic Feature Analysis &amp; Reusability Assessment</p>\n\
         <p>Generated: {}</p>\n\
         </div>\n<div class=\"content\">\n\
         <div class=\"document-info\">\n\
         <h3>📄 Documents Compared</h3>\n\
         <p><strong>New Requirements:</strong> {} ({} features)</p>\n\
         <p><strong>Existing Implementation:</strong> {} ({} features)</p>\n\
         </div>\n",
        result.timestamp.format("%B %d, %Y at %H:%M:%S UTC"),
        escape(&result.new_document),
        stats.total_new,
        escape(&result.existing_document),
        stats.total_existing,
    );

    let _ = write!(
        html,
        "<div class=\"stats-grid\">\n\
         {}{}{}{}\
         </div>\n",
        stat_card("exact", "✅", &stats.exact_count.to_string(), "Exact Matches",
            &format_percentage(stats.exact_percentage)),
        stat_card("similar", "⚠️", &stats.similar_count.to_string(), "Similar Features",
            &format_percentage(stats.similar_percentage)),
        stat_card("delta", "🆕", &stats.delta_count.to_string(), "New Features",
            &format_percentage(stats.delta_percentage)),
        stat_card("reuse", "📊", &format_percentage(stats.reusability_score),
            "Reusability Score",
            &format!("{} features", stats.exact_count + stats.similar_count)),
    );

    let _ = write!(
        html,
        "<div class=\"section\">\n<h2>✅ Exact Matches ({})</h2>\n\
         <p>These features can be reused as-is from the existing implementation:</p>\n",
        result.exact_matches.len()
    );
    if result.exact_matches.is_empty() {
        html.push_str("<p><em>No exact matches found.</em></p>\n");
    } else {
        html.push_str(
            "<table>\n<thead><tr><th>#</th><th>New Feature</th>\
             <th>Existing Feature</th><th>Similarity</th></tr></thead>\n<tbody>\n",
        );
        for (i, pair) in result.exact_matches.iter().enumerate() {
            let _ = write!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                i + 1,
                escape(&pair.new_feature.title),
                escape(&pair.existing_feature.title),
                format_percentage(pair.similarity * 100.0),
            );
        }
        html.push_str("</tbody>\n</table>\n");
    }
    html.push_str("</div>\n");

    let _ = write!(
        html,
        "<div class=\"section\">\n<h2>⚠️ Similar Features Requiring Adaptation ({})</h2>\n\
         <p>These features have existing implementations but require modifications:</p>\n",
        result.similar_features.len()
    );
    if result.similar_features.is_empty() {
        html.push_str("<p><em>No similar features found.</em></p>\n");
    } else {
        for (i, pair) in result.similar_features.iter().enumerate() {
            let gap = pair
                .gap_analysis
                .as_deref()
                .unwrap_or("No gap analysis available.");
            let _ = write!(
                html,
                "<div class=\"feature-card\">\n\
                 <h4>{}. {}</h4>\n\
                 <p><strong>Existing Feature:</strong> {}</p>\n\
                 <p><strong>Similarity:</strong> {}</p>\n\
                 <div class=\"gap\"><strong>Gap Analysis:</strong><br>{}</div>\n\
                 </div>\n",
                i + 1,
                escape(&pair.new_feature.title),
                escape(&pair.existing_feature.title),
                format_percentage(pair.similarity * 100.0),
                escape(gap),
            );
        }
    }
    html.push_str("</div>\n");

    let _ = write!(
        html,
        "<div class=\"section\">\n<h2>🆕 Delta - New Features to Implement ({})</h2>\n\
         <p>These features have no existing implementation and require fresh development:</p>\n",
        result.delta_features.len()
    );
    if result.delta_features.is_empty() {
        html.push_str(
            "<p><em>No delta features - all requirements have existing implementations!</em></p>\n",
        );
    } else {
        html.push_str("<ul class=\"delta-list\">\n");
        for (i, feature) in result.delta_features.iter().enumerate() {
            let description =
                if !feature.description.is_empty() && feature.description != feature.title {
                    format!(" - {}", escape(&feature.description))
                } else {
                    String::new()
                };
            let _ = write!(
                html,
                "<li><strong>{}. {}</strong>{}</li>\n",
                i + 1,
                escape(&feature.title),
                description,
            );
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</div>\n");

    if !result.recommendations.is_empty() {
        html.push_str(
            "<div class=\"recommendations\">\n<h2>💡 Strategic Recommendations</h2>\n<ol>\n",
        );
        for rec in &result.recommendations {
            let _ = write!(html, "<li>{}</li>\n", escape(strip_list_prefix(rec)));
        }
        html.push_str("</ol>\n</div>\n");
    }

    let _ = write!(
        html,
        "<div class=\"section\">\n<h2>📈 Implementation Impact Summary</h2>\n<ul>\n\
         <li><strong>Can Reuse Immediately:</strong> {} features ({})</li>\n\
         <li><strong>Needs Adaptation:</strong> {} features (~30-50% effort vs new)</li>\n\
         <li><strong>Build from Scratch:</strong> {} features (100% effort)</li>\n\
         </ul>\n\
         <p><strong>Estimated Effort Savings:</strong> {} compared to building everything from scratch</p>\n\
         </div>\n</div>\n\
         <div class=\"footer\"><p>Generated by reqdelta</p></div>\n\
         </div>\n</body>\n</html>\n",
        result.exact_matches.len(),
        format_percentage(stats.exact_percentage),
        result.similar_features.len(),
        result.delta_features.len(),
        format_percentage(stats.reusability_score * 0.7),
    );

    html
}

fn stat_card(class: &str, emoji: &str, value: &str, label: &str, detail: &str) -> String {
    format!(
        "<div class=\"stat-card {class}\">\
         <div class=\"emoji\">{emoji}</div>\
         <div class=\"value\">{value}</div>\
         <div class=\"label\">{label}</div>\
         <div class=\"percentage\">{detail}</div>\
         </div>\n"
    )
}

/// Drop a leading `1.`-style prefix so `<ol>` numbering is not doubled.
fn strip_list_prefix(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(first) = trimmed.chars().next() else {
        return trimmed;
    };
    if first.is_ascii_digit() {
        if let Some((_, rest)) = trimmed.split_once('.') {
            return rest.trim();
        }
    } else if first == '-' {
        return trimmed[1..].trim();
    }
    trimmed
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqdelta_core::{Category, Feature, MatchPair, Partition, Statistics};

    fn sample() -> ComparisonResult {
        let new = Feature::new("n_1", "Rating <Engine>", "Rate usage", "n");
        let existing = Feature::new("e_1", "Charging", "Charges", "e");
        let mut similar = MatchPair::new(new, existing, 0.8, Category::Similar);
        similar.gap_analysis = Some("Needs tiers.".to_string());

        let partition = Partition {
            exact: vec![],
            similar: vec![similar],
            delta: vec![],
        };
        let stats = Statistics::aggregate(&partition, 1, 0.5);
        ComparisonResult::new(
            "new.md",
            "old.md",
            partition,
            stats,
            vec!["1. Adapt the rating engine".to_string()],
        )
    }

    #[test]
    fn test_render_is_complete_document() {
        let html = render(&sample());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>\n"));
        assert!(html.contains("Needs tiers."));
    }

    #[test]
    fn test_feature_text_is_escaped() {
        let html = render(&sample());
        assert!(html.contains("Rating &lt;Engine&gt;"));
        assert!(!html.contains("Rating <Engine>"));
    }

    #[test]
    fn test_list_prefix_stripped_in_ordered_list() {
        let html = render(&sample());
        assert!(html.contains("<li>Adapt the rating engine</li>"));
    }

    #[test]
    fn test_strip_list_prefix() {
        assert_eq!(strip_list_prefix("1. Do it"), "Do it");
        assert_eq!(strip_list_prefix("- Do it"), "Do it");
        assert_eq!(strip_list_prefix("Do it"), "Do it");
        assert_eq!(strip_list_prefix(""), "");
    }
}

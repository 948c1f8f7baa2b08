//! Numbered-list extraction, the most common requirements layout.

use regex::Regex;

use reqdelta_core::Feature;

use crate::{clean_text, ExtractionStrategy};

/// Extracts `1. Title` items; lines between items become the description.
pub struct NumberedList {
    item: Regex,
}

impl NumberedList {
    #[must_use]
    pub fn new() -> Self {
        Self {
            item: Regex::new(r"^(\d+)\.\s+(.+)$").expect("static pattern"),
        }
    }
}

impl Default for NumberedList {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionStrategy for NumberedList {
    fn name(&self) -> &'static str {
        "numbered-list"
    }

    fn extract(&self, content: &str, source: &str) -> Vec<Feature> {
        let mut features: Vec<Feature> = Vec::new();
        let mut current: Option<Feature> = None;
        let mut order = 0;

        for line in content.lines() {
            let line = line.trim();

            if let Some(caps) = self.item.captures(line) {
                if let Some(feature) = current.take() {
                    features.push(feature);
                }

                let number = &caps[1];
                let title = clean_text(&caps[2]);
                current = Some(
                    Feature::new(format!("{source}_{number}"), title.clone(), "", source)
                        .with_order(order),
                );
                order += 1;
            } else if let Some(feature) = current.as_mut() {
                // Continuation lines extend the description; headings reset nothing
                if !line.is_empty() && !line.starts_with('#') {
                    feature.description.push(' ');
                    feature.description.push_str(line);
                }
            }
        }

        if let Some(feature) = current.take() {
            features.push(feature);
        }

        for feature in &mut features {
            feature.description = clean_text(&feature.description);
            if feature.description.is_empty() {
                feature.description = feature.title.clone();
            }
        }

        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_items_with_descriptions() {
        let content = "\
1. Real-time Rating and Charging
Charge prepaid subscribers as usage happens.
Supports voice and data.

2. Fraud Detection
";
        let features = NumberedList::new().extract(content, "att");
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].id, "att_1");
        assert_eq!(features[0].title, "Real-time Rating and Charging");
        assert_eq!(
            features[0].description,
            "Charge prepaid subscribers as usage happens. Supports voice and data."
        );
        // Title doubles as description when the item has no body
        assert_eq!(features[1].description, "Fraud Detection");
        assert_eq!(features[1].order, Some(1));
    }

    #[test]
    fn test_id_uses_item_number_not_position() {
        let content = "3. Billing\n7. Mediation\n";
        let features = NumberedList::new().extract(content, "doc");
        assert_eq!(features[0].id, "doc_3");
        assert_eq!(features[1].id, "doc_7");
    }

    #[test]
    fn test_heading_lines_do_not_join_description() {
        let content = "1. Billing\n# Section\nActual description\n";
        let features = NumberedList::new().extract(content, "doc");
        assert_eq!(features[0].description, "Actual description");
    }

    #[test]
    fn test_plain_prose_yields_nothing() {
        let features = NumberedList::new().extract("no numbers here", "doc");
        assert!(features.is_empty());
    }
}

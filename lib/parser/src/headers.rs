//! Header-based extraction for documents that use `##`/`###` per feature.

use regex::Regex;

use reqdelta_core::Feature;

use crate::{clean_text, ExtractionStrategy};

/// Extracts level-2 and level-3 headings; body lines become the description.
pub struct Headers {
    heading: Regex,
}

impl Headers {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heading: Regex::new(r"^(#{2,3})\s+(.+)$").expect("static pattern"),
        }
    }
}

impl Default for Headers {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionStrategy for Headers {
    fn name(&self) -> &'static str {
        "headers"
    }

    fn extract(&self, content: &str, source: &str) -> Vec<Feature> {
        let mut features: Vec<Feature> = Vec::new();
        let mut current: Option<Feature> = None;
        let mut counter = 0;

        for line in content.lines() {
            let line = line.trim();

            if let Some(caps) = self.heading.captures(line) {
                if let Some(feature) = current.take() {
                    features.push(feature);
                }

                counter += 1;
                let title = clean_text(&caps[2]);
                current = Some(
                    Feature::new(format!("{source}_{counter}"), title, "", source)
                        .with_order(counter - 1),
                );
            } else if let Some(feature) = current.as_mut() {
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
    fn test_extracts_h2_and_h3() {
        let content = "\
# Document title

## Payment Gateway
Accept card and wallet payments.

### Invoice Generation
Monthly PDF invoices.
";
        let features = Headers::new().extract(content, "tmo");
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].id, "tmo_1");
        assert_eq!(features[0].title, "Payment Gateway");
        assert_eq!(features[0].description, "Accept card and wallet payments.");
        assert_eq!(features[1].title, "Invoice Generation");
    }

    #[test]
    fn test_h1_is_not_a_feature() {
        let features = Headers::new().extract("# Only a title\nprose", "doc");
        assert!(features.is_empty());
    }

    #[test]
    fn test_header_without_body_uses_title_as_description() {
        let features = Headers::new().extract("## Standalone", "doc");
        assert_eq!(features[0].description, "Standalone");
    }
}

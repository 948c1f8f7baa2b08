//! Bullet-point extraction, the last-resort strategy.

use regex::Regex;

use reqdelta_core::Feature;

use crate::{clean_text, ExtractionStrategy};

/// Extracts `-`/`*` items. Each bullet is one feature; the title doubles as
/// the description since bullets carry no body.
pub struct Bullets {
    bullet: Regex,
}

impl Bullets {
    #[must_use]
    pub fn new() -> Self {
        Self {
            bullet: Regex::new(r"^[-*]\s+(.+)$").expect("static pattern"),
        }
    }
}

impl Default for Bullets {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionStrategy for Bullets {
    fn name(&self) -> &'static str {
        "bullets"
    }

    fn extract(&self, content: &str, source: &str) -> Vec<Feature> {
        let mut features = Vec::new();
        let mut counter = 0;

        for line in content.lines() {
            let line = line.trim();
            if let Some(caps) = self.bullet.captures(line) {
                counter += 1;
                let text = clean_text(&caps[1]);
                features.push(
                    Feature::new(format!("{source}_{counter}"), text.clone(), text, source)
                        .with_order(counter - 1),
                );
            }
        }

        features
    }
}

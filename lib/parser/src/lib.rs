//! # reqdelta Parser
//!
//! Extracts structured [`Feature`] records from markdown-like requirement
//! documents.
//!
//! Documents in the wild disagree on layout, so extraction is a chain of
//! strategies tried in fixed priority order until one yields features:
//!
//! 1. [`NumberedList`] - `1. Title` items with following description lines
//! 2. [`Headers`] - `##`/`###` headings with body text
//! 3. [`Bullets`] - `-`/`*` items, title doubling as description
//!
//! Feature ids are `{source}_{n}` where `source` defaults to the file stem.

pub mod bullets;
pub mod headers;
pub mod numbered;

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use reqdelta_core::Feature;

pub use bullets::Bullets;
pub use headers::Headers;
pub use numbered::NumberedList;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// One way of pulling features out of a document.
pub trait ExtractionStrategy: Send + Sync {
    /// Strategy name for logging.
    fn name(&self) -> &'static str;

    /// Extract features from `content`, returning an empty vec when the
    /// document does not fit this strategy's layout.
    fn extract(&self, content: &str, source: &str) -> Vec<Feature>;
}

/// The default strategy chain in priority order.
#[must_use]
pub fn default_strategies() -> Vec<Box<dyn ExtractionStrategy>> {
    vec![
        Box::new(NumberedList::new()),
        Box::new(Headers::new()),
        Box::new(Bullets::new()),
    ]
}

/// Run the strategy chain over raw document text.
///
/// Returns the first non-empty extraction; an empty vec means no strategy
/// recognized the document.
#[must_use]
pub fn extract_features(content: &str, source: &str) -> Vec<Feature> {
    for strategy in default_strategies() {
        let features = strategy.extract(content, source);
        if !features.is_empty() {
            debug!(
                strategy = strategy.name(),
                count = features.len(),
                source,
                "extracted features"
            );
            return features;
        }
    }
    debug!(source, "no strategy matched document");
    Vec::new()
}

/// Read a markdown file and extract its features.
///
/// `source` labels the features (customer/document name); when `None` the
/// file stem is used.
pub fn parse_markdown(path: &Path, source: Option<&str>) -> Result<Vec<Feature>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    let source = source.unwrap_or(&stem);

    let features = extract_features(&content, source);
    info!(path = %path.display(), source, count = features.len(), "parsed document");
    Ok(features)
}

/// Collapse runs of whitespace and trim.
pub(crate) fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_numbered_wins_over_headers() {
        let content = "## Heading\n1. First feature\n2. Second feature\n";
        let features = extract_features(content, "doc");
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].id, "doc_1");
        assert_eq!(features[0].title, "First feature");
    }

    #[test]
    fn test_headers_win_over_bullets() {
        let content = "## Feature A\nBody text\n- stray bullet\n\n## Feature B\nMore body\n";
        let features = extract_features(content, "doc");
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].title, "Feature A");
    }

    #[test]
    fn test_bullets_as_last_resort() {
        let content = "Intro paragraph\n- Alpha capability\n* Beta capability\n";
        let features = extract_features(content, "doc");
        assert_eq!(features.len(), 2);
        assert_eq!(features[1].title, "Beta capability");
    }

    #[test]
    fn test_unrecognized_document_yields_nothing() {
        let features = extract_features("just prose, nothing structured", "doc");
        assert!(features.is_empty());
    }

    #[test]
    fn test_parse_markdown_uses_file_stem_as_source() {
        let mut file = tempfile::Builder::new()
            .prefix("verizon_reqs")
            .suffix(".md")
            .tempfile()
            .unwrap();
        writeln!(file, "1. Realtime charging\nCharge subscribers in realtime").unwrap();

        let features = parse_markdown(file.path(), None).unwrap();
        assert_eq!(features.len(), 1);
        assert!(features[0].source.starts_with("verizon_reqs"));
    }

    #[test]
    fn test_parse_markdown_missing_file() {
        let err = parse_markdown(Path::new("/nonexistent/reqs.md"), None).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  a\t b \n c  "), "a b c");
        assert_eq!(clean_text(""), "");
    }
}

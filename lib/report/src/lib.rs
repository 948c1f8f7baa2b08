//! # reqdelta Report
//!
//! Renders a finished [`ComparisonResult`] to Markdown and HTML. Pure
//! presentation: the result is a read-only view and is never mutated here.
//!
//! [`ComparisonResult`]: reqdelta_core::ComparisonResult

pub mod html;
pub mod markdown;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::Local;
use thiserror::Error;
use tracing::info;

use reqdelta_core::ComparisonResult;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown report format: {0}")]
    UnknownFormat(String),
}

/// Which renderings to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Markdown,
    Html,
    Both,
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            "both" => Ok(Self::Both),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

/// Paths of the files one generation call produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedReports {
    pub markdown: Option<PathBuf>,
    pub html: Option<PathBuf>,
}

/// Writes comparison reports under an output directory.
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl ReportGenerator {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Render the requested format(s) to disk.
    ///
    /// `output_path` overrides the auto-generated timestamped filename; with
    /// format `Both` the override names the HTML file and the Markdown file
    /// takes the same stem.
    pub fn generate(
        &self,
        result: &ComparisonResult,
        format: ReportFormat,
        output_path: Option<&Path>,
    ) -> Result<GeneratedReports> {
        let mut generated = GeneratedReports::default();

        if matches!(format, ReportFormat::Markdown | ReportFormat::Both) {
            let path = match (format, output_path) {
                (ReportFormat::Markdown, Some(path)) => path.to_path_buf(),
                (ReportFormat::Both, Some(path)) => path.with_extension("md"),
                _ => self.timestamped_path("md"),
            };
            self.write(&path, &markdown::render(result))?;
            generated.markdown = Some(path);
        }

        if matches!(format, ReportFormat::Html | ReportFormat::Both) {
            let path = match output_path {
                Some(path) if format == ReportFormat::Html => path.to_path_buf(),
                Some(path) => path.with_extension("html"),
                None => self.timestamped_path("html"),
            };
            self.write(&path, &html::render(result))?;
            generated.html = Some(path);
        }

        info!(?generated, "report generation complete");
        Ok(generated)
    }

    fn timestamped_path(&self, extension: &str) -> PathBuf {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        self.output_dir
            .join(format!("comparison_{timestamp}.{extension}"))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| Error::Io {
                    path: parent.display().to_string(),
                    source,
                })?;
            }
        }
        std::fs::write(path, content).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        info!(path = %path.display(), "report saved");
        Ok(())
    }
}

/// Format a percentage with one decimal place, as shown in reports.
pub(crate) fn format_percentage(value: f32) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqdelta_core::{Feature, Partition, Statistics};

    fn sample_result() -> ComparisonResult {
        let partition = Partition {
            exact: vec![],
            similar: vec![],
            delta: vec![Feature::new("n_1", "Fraud Detection", "Spot fraud", "n")],
        };
        let stats = Statistics::aggregate(&partition, 2, 0.5);
        ComparisonResult::new("new.md", "old.md", partition, stats, vec![])
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("html".parse::<ReportFormat>().unwrap(), ReportFormat::Html);
        assert_eq!("MD".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!("both".parse::<ReportFormat>().unwrap(), ReportFormat::Both);
        assert!("pdf".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_generate_both_writes_two_files() {
        let dir = tempfile::tempdir().unwrap();
        let generator = ReportGenerator::new(dir.path());
        let generated = generator
            .generate(&sample_result(), ReportFormat::Both, None)
            .unwrap();

        let md = generated.markdown.unwrap();
        let html = generated.html.unwrap();
        assert!(md.exists());
        assert!(html.exists());
        assert!(std::fs::read_to_string(&md).unwrap().contains("Fraud Detection"));
    }

    #[test]
    fn test_explicit_output_path_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("custom.html");
        let generator = ReportGenerator::new(dir.path());
        let generated = generator
            .generate(&sample_result(), ReportFormat::Html, Some(&target))
            .unwrap();
        assert_eq!(generated.html.unwrap(), target);
        assert!(target.exists());
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(50.0), "50.0%");
        assert_eq!(format_percentage(33.333), "33.3%");
    }
}

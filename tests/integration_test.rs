//! End-to-end pipeline tests with deterministic stub providers.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use reqdelta::{
    cosine_score, CompareConfig, ComparisonEngine, Embedding, EmbeddingProvider, EngineConfig,
    ProviderError, ReportFormat, ReportGenerator, TextGenerator,
};

struct MapEmbedder {
    vectors: HashMap<String, Vec<f32>>,
}

impl MapEmbedder {
    fn new(entries: &[(&str, &[f32])]) -> Self {
        Self {
            vectors: entries
                .iter()
                .map(|(text, vector)| (text.to_string(), vector.to_vec()))
                .collect(),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for MapEmbedder {
    async fn embed_many(&self, texts: &[String]) -> Result<Vec<Embedding>, ProviderError> {
        texts
            .iter()
            .map(|text| {
                self.vectors
                    .get(text)
                    .map(|v| Embedding::from_slice(v))
                    .ok_or_else(|| ProviderError::InvalidResponse(format!("no vector for {text:?}")))
            })
            .collect()
    }
}

struct StaticGenerator(&'static str);

#[async_trait]
impl TextGenerator for StaticGenerator {
    async fn generate(&self, _prompt: &str, _system: Option<&str>) -> Result<String, ProviderError> {
        Ok(self.0.to_string())
    }
}

struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str, _system: Option<&str>) -> Result<String, ProviderError> {
        Err(ProviderError::Unavailable("generator down".into()))
    }
}

fn fast_config() -> EngineConfig {
    let mut config = EngineConfig::default();
    config.retry.max_attempts = 1;
    config.retry.base_delay_ms = 1;
    config
}

fn write_doc(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Vectors keyed by the text the engine embeds: `"{title}. {description}"`.
fn telecom_embedder() -> MapEmbedder {
    MapEmbedder::new(&[
        (
            "Realtime Charging. Charge subscribers during live sessions",
            &[1.0, 0.0],
        ),
        (
            "Tiered Rating. Rate usage with tiered price plans",
            &[0.5, 1.0],
        ),
        (
            "Fraud Detection. Spot anomalous usage patterns",
            &[-0.3, -0.3],
        ),
        (
            "Flat Rating. Rate usage with a flat price plan",
            &[0.0, 1.0],
        ),
    ])
}

const NEW_DOC: &str = "\
# New Requirements

1. Realtime Charging
Charge subscribers during live sessions

2. Tiered Rating
Rate usage with tiered price plans

3. Fraud Detection
Spot anomalous usage patterns
";

const EXISTING_DOC: &str = "\
1. Realtime Charging
Charge subscribers during live sessions

2. Flat Rating
Rate usage with a flat price plan
";

#[tokio::test]
async fn test_parse_compare_report_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let new_path = write_doc(dir.path(), "new_requirements.md", NEW_DOC);
    let existing_path = write_doc(dir.path(), "implemented.md", EXISTING_DOC);

    let engine = ComparisonEngine::new(
        fast_config(),
        Arc::new(telecom_embedder()),
        Arc::new(StaticGenerator(
            "1. Add tiered price plan support to the rating module",
        )),
    )
    .unwrap();

    let result = engine
        .compare_documents(&new_path, &existing_path)
        .await
        .unwrap();

    assert_eq!(result.new_document, "new_requirements.md");
    assert_eq!(result.existing_document, "implemented.md");

    // Identical vectors land in the exact band
    assert_eq!(result.exact_matches.len(), 1);
    assert_eq!(result.exact_matches[0].new_feature.title, "Realtime Charging");

    // Tiered vs flat rating is close but not exact: similar, with gap text
    assert_eq!(result.similar_features.len(), 1);
    let pair = &result.similar_features[0];
    assert_eq!(pair.new_feature.title, "Tiered Rating");
    assert_eq!(pair.existing_feature.title, "Flat Rating");
    assert!(pair.similarity >= 0.70 && pair.similarity < 0.95);
    assert!(pair
        .gap_analysis
        .as_deref()
        .unwrap()
        .contains("tiered price plan"));

    // Fraud detection has no counterpart
    assert_eq!(result.delta_features.len(), 1);
    assert_eq!(result.delta_features[0].title, "Fraud Detection");

    // (1 exact + 0.5 * 1 similar) / 3 new
    assert!((result.reusability_score() - 50.0).abs() < 1e-3);
    assert!(!result.recommendations.is_empty());

    // Reports land on disk in both formats
    let out_dir = dir.path().join("reports");
    let generated = ReportGenerator::new(&out_dir)
        .generate(&result, ReportFormat::Both, None)
        .unwrap();
    let md = std::fs::read_to_string(generated.markdown.unwrap()).unwrap();
    assert!(md.contains("Tiered Rating"));
    assert!(md.contains("50.0%"));
    let html = std::fs::read_to_string(generated.html.unwrap()).unwrap();
    assert!(html.contains("<html"));
    assert!(html.contains("Fraud Detection"));
}

#[tokio::test]
async fn test_generator_outage_degrades_to_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let new_path = write_doc(dir.path(), "new_requirements.md", NEW_DOC);
    let existing_path = write_doc(dir.path(), "implemented.md", EXISTING_DOC);

    let engine = ComparisonEngine::new(
        fast_config(),
        Arc::new(telecom_embedder()),
        Arc::new(FailingGenerator),
    )
    .unwrap();

    let result = engine
        .compare_documents(&new_path, &existing_path)
        .await
        .unwrap();

    // Classification is unaffected; explanations fall back to the placeholder
    assert_eq!(result.similar_features.len(), 1);
    assert_eq!(
        result.similar_features[0].gap_analysis.as_deref(),
        Some("Unable to perform detailed gap analysis. Manual review recommended.")
    );
    assert!(!result.recommendations.is_empty());
}

#[tokio::test]
async fn test_batch_comparison_ranks_best_match() {
    let dir = tempfile::tempdir().unwrap();
    let new_path = write_doc(
        dir.path(),
        "new.md",
        "1. Realtime Charging\nCharge subscribers during live sessions\n",
    );

    let existing_dir = dir.path().join("portfolio");
    std::fs::create_dir(&existing_dir).unwrap();
    write_doc(
        &existing_dir,
        "a_legacy.md",
        "1. Flat Rating\nRate usage with a flat price plan\n",
    );
    write_doc(
        &existing_dir,
        "b_modern.md",
        "1. Realtime Charging\nCharge subscribers during live sessions\n",
    );
    // Non-markdown files are ignored
    write_doc(&existing_dir, "notes.txt", "1. Not parsed\n");

    let engine = ComparisonEngine::new(
        fast_config(),
        Arc::new(telecom_embedder()),
        Arc::new(StaticGenerator("1. Reuse the charging stack")),
    )
    .unwrap();

    let results = engine.compare_multiple(&new_path, &existing_dir).await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].existing_document, "a_legacy.md");
    assert_eq!(results[1].existing_document, "b_modern.md");

    let best = reqdelta::best_match(&results).unwrap();
    assert_eq!(best.existing_document, "b_modern.md");
    assert!((best.reusability_score() - 100.0).abs() < 1e-3);
}

#[test]
fn test_similarity_bands_match_documented_anchors() {
    let config = CompareConfig::default();

    // Raw cosine 0.86 rescales to 0.93: similar band
    let a = Embedding::from_slice(&[1.0, 0.0]);
    let b = Embedding::from_slice(&[0.86, 0.510_294]);
    let score = cosine_score(&a, &b).unwrap();
    assert!((score - 0.93).abs() < 1e-3);
    assert!(score >= config.similar_threshold && score < config.exact_threshold);

    // Raw cosine -0.16 rescales to 0.42: delta band
    let c = Embedding::from_slice(&[-0.16, 0.987_117]);
    let score = cosine_score(&a, &c).unwrap();
    assert!((score - 0.42).abs() < 1e-3);
    assert!(score < config.similar_threshold);
}

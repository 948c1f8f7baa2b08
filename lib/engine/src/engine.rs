//! The comparison pipeline.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use reqdelta_core::{
    Classifier, ComparisonResult, Embedding, Feature, MatchPair, Statistics,
};
use reqdelta_providers::{EmbeddingProvider, OpenAiClient, RetryPolicy, TextGenerator};

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::prompts;

/// Runs comparisons end to end against pluggable provider capabilities.
///
/// The embedding fetch for the two sides runs concurrently, gap-analysis
/// calls run under a configured concurrency bound, and classification itself
/// is a synchronous deterministic call into the core. Dropping the returned
/// future cancels the run at the next stage boundary; in-flight HTTP calls
/// run to their own timeout.
pub struct ComparisonEngine {
    embedder: Arc<dyn EmbeddingProvider>,
    generator: Arc<dyn TextGenerator>,
    classifier: Classifier,
    retry: RetryPolicy,
    config: EngineConfig,
}

impl ComparisonEngine {
    /// Create an engine with explicit provider implementations.
    pub fn new(
        config: EngineConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        generator: Arc<dyn TextGenerator>,
    ) -> Result<Self> {
        let classifier = Classifier::new(config.compare.clone())?;
        let retry = config.retry.to_policy();
        Ok(Self {
            embedder,
            generator,
            classifier,
            retry,
            config,
        })
    }

    /// Create an engine backed by an OpenAI-compatible endpoint from config.
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        let client = OpenAiClient::new(config.llm.to_openai())
            .map_err(|e| EngineError::Config(e.to_string()))?;
        let client = Arc::new(client);
        Self::new(
            config,
            client.clone() as Arc<dyn EmbeddingProvider>,
            client as Arc<dyn TextGenerator>,
        )
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compare two already-parsed feature sets.
    pub async fn compare_features(
        &self,
        new_document: &str,
        existing_document: &str,
        new: Vec<Feature>,
        existing: Vec<Feature>,
    ) -> Result<ComparisonResult> {
        info!(
            new = new.len(),
            existing = existing.len(),
            "comparing feature sets"
        );

        let (new_embeddings, existing_embeddings) = tokio::try_join!(
            self.fetch_embeddings("new", &new),
            self.fetch_embeddings("existing", &existing),
        )?;

        let mut partition =
            self.classifier
                .classify(&new, &existing, &new_embeddings, &existing_embeddings)?;
        debug!(
            exact = partition.exact.len(),
            similar = partition.similar.len(),
            delta = partition.delta.len(),
            "classification complete"
        );

        self.attach_gap_analysis(&mut partition.similar).await;

        let statistics = Statistics::aggregate(
            &partition,
            existing.len(),
            self.classifier.config().similar_weight,
        );

        let recommendations = if self.config.report.include_recommendations {
            self.recommendations_for(&statistics).await
        } else {
            Vec::new()
        };

        info!(reusability = statistics.reusability_score, "comparison complete");
        Ok(ComparisonResult::new(
            new_document,
            existing_document,
            partition,
            statistics,
            recommendations,
        ))
    }

    /// Parse two markdown documents and compare them.
    pub async fn compare_documents(
        &self,
        new_path: &Path,
        existing_path: &Path,
    ) -> Result<ComparisonResult> {
        let new = reqdelta_parser::parse_markdown(new_path, None)?;
        if new.is_empty() {
            return Err(EngineError::EmptyDocument(new_path.display().to_string()));
        }

        let existing = reqdelta_parser::parse_markdown(existing_path, None)?;
        if existing.is_empty() {
            return Err(EngineError::EmptyDocument(
                existing_path.display().to_string(),
            ));
        }

        self.compare_features(
            &document_name(new_path),
            &document_name(existing_path),
            new,
            existing,
        )
        .await
    }

    /// Compare a new-requirements document against every `*.md` file in a
    /// directory. Per-document failures are logged and skipped.
    pub async fn compare_multiple(
        &self,
        new_path: &Path,
        existing_dir: &Path,
    ) -> Result<Vec<ComparisonResult>> {
        let entries = std::fs::read_dir(existing_dir).map_err(|source| EngineError::Io {
            path: existing_dir.display().to_string(),
            source,
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
            .collect();
        paths.sort();

        let mut results = Vec::new();
        for path in &paths {
            match self.compare_documents(new_path, path).await {
                Ok(result) => results.push(result),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping document");
                }
            }
        }

        info!(count = results.len(), "batch comparison complete");
        Ok(results)
    }

    async fn fetch_embeddings(
        &self,
        side: &'static str,
        features: &[Feature],
    ) -> Result<Vec<Embedding>> {
        let texts: Vec<String> = features.iter().map(Feature::embedding_text).collect();
        self.retry
            .run(side, || self.embedder.embed_many(&texts))
            .await
            .map_err(|source| EngineError::Embedding { side, source })
    }

    /// Fill in gap analysis on every similar pair. Per-pair failures degrade
    /// to placeholder text; they never drop the pair or abort the run.
    async fn attach_gap_analysis(&self, similar: &mut [MatchPair]) {
        if similar.is_empty() {
            return;
        }

        let limit = self
            .classifier
            .config()
            .max_concurrent_explanations
            .max(1);
        let texts: Vec<String> = stream::iter(similar.iter().map(|pair| self.explain(pair)))
            .buffered(limit)
            .collect()
            .await;

        for (pair, text) in similar.iter_mut().zip(texts) {
            pair.gap_analysis = Some(text);
        }
    }

    async fn explain(&self, pair: &MatchPair) -> String {
        let prompt = prompts::gap_analysis(&pair.new_feature, &pair.existing_feature);
        match self
            .generator
            .generate(&prompt, Some(prompts::GAP_SYSTEM))
            .await
        {
            Ok(text) => text.trim().to_string(),
            Err(err) => {
                warn!(
                    new = %pair.new_feature.id,
                    existing = %pair.existing_feature.id,
                    error = %err,
                    "gap analysis unavailable, using placeholder"
                );
                prompts::GAP_FALLBACK.to_string()
            }
        }
    }

    async fn recommendations_for(&self, stats: &Statistics) -> Vec<String> {
        let prompt = prompts::recommendations(stats);
        match self
            .generator
            .generate(&prompt, Some(prompts::STRATEGIST_SYSTEM))
            .await
        {
            Ok(text) => {
                let recs = prompts::parse_recommendations(&text);
                if recs.is_empty() {
                    warn!("generated recommendations had no list items, using fallback");
                    prompts::fallback_recommendations()
                } else {
                    recs
                }
            }
            Err(err) => {
                warn!(error = %err, "recommendation generation failed, using fallback");
                prompts::fallback_recommendations()
            }
        }
    }
}

/// Pick the result with the highest reusability score; earliest wins ties.
#[must_use]
pub fn best_match(results: &[ComparisonResult]) -> Option<&ComparisonResult> {
    let mut best: Option<&ComparisonResult> = None;
    for result in results {
        if best.map_or(true, |b| result.reusability_score() > b.reusability_score()) {
            best = Some(result);
        }
    }
    best
}

fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

//! # reqdelta
//!
//! Semantic requirements comparison: classify each feature in a new
//! requirements document as an exact match, a similar-but-adapted match, or
//! a net-new item (delta) against an existing implementation, using text
//! embeddings for similarity and an LLM for gap analysis and strategic
//! recommendations.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! reqdelta --new requirements_new.md --existing implemented.md --format both
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use reqdelta::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = EngineConfig::default();
//! let engine = ComparisonEngine::from_config(config)?;
//! let result = engine
//!     .compare_documents("new.md".as_ref(), "existing.md".as_ref())
//!     .await?;
//! println!("reusability: {:.1}%", result.reusability_score());
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! - [`reqdelta-core`](https://docs.rs/reqdelta-core) - Scoring, greedy
//!   classification, statistics (pure and deterministic)
//! - [`reqdelta-parser`](https://docs.rs/reqdelta-parser) - Markdown feature
//!   extraction strategies
//! - [`reqdelta-providers`](https://docs.rs/reqdelta-providers) - Embedding
//!   and text-generation capability boundaries
//! - [`reqdelta-engine`](https://docs.rs/reqdelta-engine) - Async pipeline
//!   orchestration
//! - [`reqdelta-report`](https://docs.rs/reqdelta-report) - Markdown/HTML
//!   rendering

// Re-export core types
pub use reqdelta_core::{
    cosine_score, Category, Classifier, CompareConfig, ComparisonResult, Embedding, Error, Feature,
    MatchPair, Partition, Result, Statistics,
};

// Re-export parser
pub use reqdelta_parser::{extract_features, parse_markdown, ExtractionStrategy};

// Re-export providers
pub use reqdelta_providers::{
    EmbeddingProvider, OpenAiClient, OpenAiConfig, ProviderError, RetryPolicy, TextGenerator,
};

// Re-export engine
pub use reqdelta_engine::{best_match, ComparisonEngine, EngineConfig, EngineError};

// Re-export report
pub use reqdelta_report::{GeneratedReports, ReportFormat, ReportGenerator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        best_match, Category, Classifier, CompareConfig, ComparisonEngine, ComparisonResult,
        EmbeddingProvider, EngineConfig, EngineError, Feature, MatchPair, ReportFormat,
        ReportGenerator, Statistics, TextGenerator,
    };
}
